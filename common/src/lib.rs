pub mod config;
pub mod diagnostics;
pub mod error;
pub mod logging;
pub mod network;
pub mod process;

#[doc(hidden)]
pub use tracing as __tracing;
