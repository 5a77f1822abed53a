//! Generation driver.

use std::fs;
use std::io::{self, Write};

use arraygen_codegen::{generate, GenConfig, OperatorCatalog, TemplateBank};

use crate::options::GenerateOptions;
use crate::DriverError;

/// Result of a `--check` run. Plain writes report [`CheckOutcome::Written`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CheckOutcome {
    Written,
    UpToDate,
    Stale,
    Missing,
}

impl CheckOutcome {
    /// Whether the process should exit successfully.
    pub fn is_success(self) -> bool {
        matches!(self, Self::Written | Self::UpToDate)
    }
}

/// Generate the header and deliver it according to `options`.
///
/// Output goes to `stdout` unless `-o` or `--check` is given. The text is
/// complete before any destination is touched.
#[tracing::instrument(level = "debug", skip_all)]
pub fn run(
    options: &GenerateOptions,
    stdout: &mut impl Write,
) -> Result<CheckOutcome, DriverError> {
    let config = GenConfig::new(options.container_name.as_str());
    let text = generate(&OperatorCatalog::standard(), &TemplateBank::standard(), &config)?;

    if let Some(path) = &options.check {
        let outcome = match fs::read_to_string(path) {
            Ok(existing) if existing == text => CheckOutcome::UpToDate,
            Ok(_) => CheckOutcome::Stale,
            Err(e) if e.kind() == io::ErrorKind::NotFound => CheckOutcome::Missing,
            Err(source) => {
                return Err(DriverError::Io {
                    action: "read",
                    path: path.clone(),
                    source,
                })
            }
        };
        tracing::debug!(path = %path.display(), ?outcome, "checked");
        return Ok(outcome);
    }

    if let Some(path) = &options.output {
        fs::write(path, &text).map_err(|source| DriverError::Io {
            action: "write",
            path: path.clone(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = text.len(), "wrote header");
    } else {
        stdout
            .write_all(text.as_bytes())
            .and_then(|()| stdout.flush())
            .map_err(DriverError::Stdout)?;
    }

    Ok(CheckOutcome::Written)
}

/// Print each catalog symbol with its rules, one per line.
pub fn list_catalog(out: &mut impl Write) -> Result<(), DriverError> {
    for entry in OperatorCatalog::standard().entries() {
        let rules: Vec<&str> = entry.rules.iter().map(|rule| rule.as_str()).collect();
        writeln!(out, "{:<4}{}", entry.symbol, rules.join(", ")).map_err(DriverError::Stdout)?;
    }
    Ok(())
}
