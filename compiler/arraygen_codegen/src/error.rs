//! Generation errors.
//!
//! Every error here is a configuration error: the generator reads no external
//! input, so a failure always means the catalog, the template bank, or the
//! container name is wrong. Generation is all-or-nothing, so callers never see
//! partial output alongside an error.

use thiserror::Error;

use crate::template::TemplateShape;

/// Errors raised while building a catalog or generating code.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Error)]
pub enum GenError {
    /// A symbol was looked up that is not in the catalog.
    #[error("unknown operator symbol `{symbol}`")]
    UnknownSymbol { symbol: String },

    /// A generation rule needs a template shape the bank does not hold.
    #[error("template bank has no `{shape}` template (needed by {needed_by})")]
    MissingTemplate {
        shape: TemplateShape,
        needed_by: String,
    },

    /// A marker survived substitution.
    #[error("unresolved placeholder `{marker}` in `{shape}` snippet: {snippet}")]
    UnresolvedPlaceholder {
        marker: &'static str,
        shape: TemplateShape,
        snippet: String,
    },

    /// The same symbol was registered twice.
    #[error("operator symbol `{symbol}` is registered more than once")]
    DuplicateSymbol { symbol: String },

    /// A catalog entry has no generation rules.
    #[error("operator symbol `{symbol}` has no generation rules")]
    EmptyRules { symbol: String },

    /// A rule appears twice within one entry.
    #[error("operator symbol `{symbol}` lists rule `{rule}` more than once")]
    DuplicateRule { symbol: String, rule: &'static str },

    /// A symbol that cannot be spliced into a template.
    #[error("invalid operator symbol `{symbol}`: {reason}")]
    InvalidSymbol {
        symbol: String,
        reason: &'static str,
    },

    /// The container name is not a valid identifier.
    #[error("invalid container name `{name}`: must be an identifier")]
    InvalidContainerName { name: String },
}
