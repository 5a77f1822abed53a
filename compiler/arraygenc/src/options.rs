//! Command-line option parsing.

use std::path::PathBuf;

use arraygen_codegen::DEFAULT_CONTAINER_NAME;

use crate::DriverError;

/// What the driver was asked to do.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    /// Generate (and write or check) the header.
    Generate(GenerateOptions),
    /// Print the operator catalog.
    List,
    Help,
    Version,
}

/// Options for [`Command::Generate`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenerateOptions {
    /// Container type name.
    pub container_name: String,
    /// Write here instead of stdout.
    pub output: Option<PathBuf>,
    /// Compare this file against fresh output instead of writing.
    pub check: Option<PathBuf>,
}

impl Default for GenerateOptions {
    fn default() -> Self {
        Self {
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
            output: None,
            check: None,
        }
    }
}

/// Parse arguments (without the program name).
pub fn parse_args(args: &[String]) -> Result<Command, DriverError> {
    let mut options = GenerateOptions::default();
    let mut i = 0;

    while i < args.len() {
        let arg = args[i].as_str();
        match arg {
            "help" | "--help" | "-h" => return Ok(Command::Help),
            "version" | "--version" | "-V" => return Ok(Command::Version),
            "--list" => return Ok(Command::List),
            "-o" | "--check" => {
                let Some(path) = args.get(i + 1) else {
                    return Err(DriverError::MissingValue { option: arg.to_string() });
                };
                let path = PathBuf::from(path);
                let slot = if arg == "-o" {
                    &mut options.output
                } else {
                    &mut options.check
                };
                *slot = Some(path);
                i += 2;
                continue;
            }
            _ => {}
        }

        if let Some(name) = arg.strip_prefix("--name=") {
            options.container_name = name.to_string();
        } else if let Some(path) = arg.strip_prefix("--check=") {
            options.check = Some(PathBuf::from(path));
        } else {
            return Err(DriverError::UnknownArgument {
                arg: arg.to_string(),
            });
        }
        i += 1;
    }

    if options.output.is_some() && options.check.is_some() {
        return Err(DriverError::ConflictingOptions {
            first: "-o",
            second: "--check",
        });
    }

    Ok(Command::Generate(options))
}
