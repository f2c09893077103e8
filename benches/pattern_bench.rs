use async_trait::async_trait;
use criterion::{Criterion, black_box, criterion_group, criterion_main};

use vatnum::core::*;
use vatnum::vat::*;

struct FailingVerifier;

#[async_trait]
impl VatVerifier for FailingVerifier {
    async fn check_vat(
        &self,
        _request: &VerificationRequest,
    ) -> Result<VerificationResponse, RemoteError> {
        Err(RemoteError::Network("bench".into()))
    }
}

const SAMPLES: &[(&str, &str)] = &[
    ("AT", "ATU12345678"),
    ("DE", "DE123456789"),
    ("DK", "DK12 12 12 12"),
    ("GB", "GB123 1234 12 123"),
    ("NL", "NL123456789BAB"),
    ("pt", "PT123456789"),
    ("PL", "PL123456789"),
];

fn bench_lookup(c: &mut Criterion) {
    // Compile the table outside the measurement
    let _ = lookup_pattern("DE");

    c.bench_function("lookup_pattern", |b| {
        b.iter(|| {
            for (cc, _) in SAMPLES {
                black_box(lookup_pattern(black_box(cc)));
            }
        })
    });

    c.bench_function("matches_structure", |b| {
        b.iter(|| {
            for (cc, vat) in SAMPLES {
                black_box(matches_structure(black_box(cc), black_box(vat)));
            }
        })
    });
}

fn bench_fallback(c: &mut Criterion) {
    let rt = tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap();
    let validator = VatValidator::new(FailingVerifier);

    c.bench_function("validate_structural_fallback", |b| {
        b.iter(|| {
            rt.block_on(async {
                for (cc, vat) in SAMPLES {
                    let _ = black_box(validator.validate(cc, vat).await);
                }
            })
        })
    });
}

criterion_group!(benches, bench_lookup, bench_fallback);
criterion_main!(benches);
