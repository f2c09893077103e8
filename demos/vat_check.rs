use std::time::Duration;

use tracing_subscriber::EnvFilter;
use vatnum::core::*;
use vatnum::vat::*;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("vatnum=debug")),
        )
        .init();

    // Structural check only (no network required)
    println!("=== Structural Patterns ===\n");

    let test_ids = [
        ("DE", "DE123456789"),
        ("AT", "ATU12345678"),
        ("DK", "DK12 12 12 12"),
        ("GB", "GBGD123"),
        ("PL", "PL123456789"), // one digit short
        ("ZZ", "ZZ999999999"), // unknown country
    ];

    for (cc, id) in &test_ids {
        match matches_structure(cc, id) {
            Some(true) => println!("  {cc} {id} => well-formed"),
            Some(false) => println!("  {cc} {id} => MALFORMED"),
            None => println!("  {cc} {id} => no pattern for {cc}"),
        }
    }

    // Two-tier validation. Point VIES_ENDPOINT at an unreachable address to
    // see the structural fallback.
    println!("\n=== VIES with Fallback ===\n");

    let mut config = ViesConfig::default().with_timeout(Duration::from_secs(10));
    if let Ok(endpoint) = std::env::var("VIES_ENDPOINT") {
        config = config.with_endpoint(endpoint);
    }
    let validator = match VatValidator::vies(config) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("cannot build VIES client: {e}");
            return;
        }
    };

    for (cc, id) in &test_ids {
        match validator.validate(cc, id).await {
            Ok(outcome) => {
                let source = match outcome.source {
                    VerdictSource::Remote => "VIES",
                    VerdictSource::Structural => "pattern",
                };
                match outcome.rejection() {
                    None => println!("  {cc} {id} => valid ({source})"),
                    Some(msg) => println!("  {cc} {id} => {msg} ({source})"),
                }
            }
            Err(e) => println!("  {cc} {id} => ERROR: {e}"),
        }
    }
}
