//! Country codes, structural patterns, configuration and error types.
//!
//! Nothing in this module touches the network.

mod config;
mod countries;
mod error;
mod patterns;

pub use config::*;
pub use countries::*;
pub use error::*;
pub use patterns::*;
