//! CLI command handlers for typescale.
//!
//! Each subcommand is a clap `Args` struct with an `execute()` method
//! returning a [`CliResult`], keeping the binary entry point a thin
//! dispatcher.

pub mod common;
pub mod export;
pub mod generate;
pub mod init;
pub mod inspect;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult};
pub use export::ExportArgs;
pub use generate::GenerateArgs;
pub use init::InitArgs;
pub use inspect::InspectArgs;
pub use validate::ValidateArgs;
