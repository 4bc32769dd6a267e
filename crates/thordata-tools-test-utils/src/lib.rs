//! Test helpers shared across the Thordata tools crates.

pub mod client;
pub mod credentials;

pub use client::{MockServiceClient, RecordedCall};
pub use credentials::{full_credentials, test_credentials};
