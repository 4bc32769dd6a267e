//! Public SDK surface for the Thordata agent tools.
//!
//! This crate re-exports the building blocks and provides [`Toolkit`], which
//! wires credentials, settings and a service client into a ready registry.

/// Re-export for convenience.
pub use thordata_tools as tools;
pub use thordata_tools_config as config;
/// Re-export for convenience.
pub use thordata_tools_protocol as protocol;

mod toolkit;

pub use toolkit::{Toolkit, ToolkitError};

#[inline]
/// Initialize logging using env_logger if the "logging" feature is enabled.
///
/// This is a no-op if the feature is not enabled. Binaries are still expected
/// to call this early in startup to ensure log output is wired up.
pub fn init_logging() {
    #[cfg(feature = "logging")]
    {
        let _ = env_logger::try_init();
    }
}
