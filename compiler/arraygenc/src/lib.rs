//! Array Operator Generator Driver
//!
//! Thin glue around `arraygen_codegen`: parses arguments, generates the whole
//! header in memory, then writes it to stdout or a file, or checks an
//! existing file against it. Nothing is written unless generation succeeded.

use std::path::PathBuf;

use thiserror::Error;

pub mod driver;
pub mod options;
mod tracing_setup;

pub use driver::{list_catalog, run, CheckOutcome};
pub use options::{parse_args, Command, GenerateOptions};
pub use tracing_setup::init_tracing;

/// Errors reported by the driver.
#[derive(Debug, Error)]
pub enum DriverError {
    #[error(transparent)]
    Generation(#[from] arraygen_codegen::GenError),

    #[error("failed to {action} `{}`: {source}", path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write output: {0}")]
    Stdout(#[source] std::io::Error),

    #[error("missing value for `{option}`")]
    MissingValue { option: String },

    #[error("unknown argument `{arg}`")]
    UnknownArgument { arg: String },

    #[error("`{first}` and `{second}` cannot be combined")]
    ConflictingOptions {
        first: &'static str,
        second: &'static str,
    },
}
