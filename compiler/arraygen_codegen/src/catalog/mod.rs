//! Operator Catalog
//!
//! The ordered registry of supported operator symbols and the generation
//! rules applied to each. Iteration follows declaration order; nothing is
//! sorted.

use std::fmt;

use rustc_hash::FxHashSet;

use crate::error::GenError;

/// How an operator is expanded into overloads.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum GenerationRule {
    /// Array-array plus both scalar-broadcast orientations, result `T`.
    ArithmeticBinary,
    /// Unary over an array, result `T`.
    ArithmeticUnary,
    /// Array-array only, result `bool`.
    LogicalBinary,
    /// Unary over an array, result `bool`.
    LogicalUnary,
}

impl GenerationRule {
    /// Kebab-case name used in diagnostics and catalog listings.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ArithmeticBinary => "arithmetic-binary",
            Self::ArithmeticUnary => "arithmetic-unary",
            Self::LogicalBinary => "logical-binary",
            Self::LogicalUnary => "logical-unary",
        }
    }

    /// Element type policy for overloads produced by this rule.
    pub const fn result_policy(self) -> ResultTypePolicy {
        match self {
            Self::ArithmeticBinary | Self::ArithmeticUnary => {
                ResultTypePolicy::PreserveOperandType
            }
            Self::LogicalBinary | Self::LogicalUnary => ResultTypePolicy::Boolean,
        }
    }
}

impl fmt::Display for GenerationRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Element type of an overload's result container.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ResultTypePolicy {
    /// Same as the operand element type `T`.
    PreserveOperandType,
    /// Always `bool`.
    Boolean,
}

impl ResultTypePolicy {
    /// The C++ spelling of the result element type.
    pub const fn element_type(self) -> &'static str {
        match self {
            Self::PreserveOperandType => "T",
            Self::Boolean => "bool",
        }
    }
}

/// One operator symbol and its rules, in emission order.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct CatalogEntry {
    /// Operator symbol as spliced into `operator<symbol>`.
    pub symbol: &'static str,
    /// Rules applied to the symbol, in emission order.
    pub rules: &'static [GenerationRule],
}

impl CatalogEntry {
    /// Create an entry. Validation happens in [`OperatorCatalog::new`].
    pub const fn new(symbol: &'static str, rules: &'static [GenerationRule]) -> Self {
        Self { symbol, rules }
    }
}

use GenerationRule::{ArithmeticBinary, ArithmeticUnary, LogicalBinary, LogicalUnary};

const STANDARD_ENTRIES: &[CatalogEntry] = &[
    // Arithmetic
    CatalogEntry::new("+", &[ArithmeticBinary, ArithmeticUnary]),
    CatalogEntry::new("-", &[ArithmeticBinary, ArithmeticUnary]),
    CatalogEntry::new("*", &[ArithmeticBinary]),
    CatalogEntry::new("/", &[ArithmeticBinary]),
    CatalogEntry::new("%", &[ArithmeticBinary]),
    // Bitwise
    CatalogEntry::new("&", &[ArithmeticBinary]),
    CatalogEntry::new("|", &[ArithmeticBinary]),
    CatalogEntry::new("^", &[ArithmeticBinary]),
    CatalogEntry::new("~", &[ArithmeticUnary]),
    // Logical
    CatalogEntry::new("&&", &[LogicalBinary]),
    CatalogEntry::new("||", &[LogicalBinary]),
    // Comparison
    CatalogEntry::new("==", &[LogicalBinary]),
    CatalogEntry::new("!=", &[LogicalBinary]),
    CatalogEntry::new(">=", &[LogicalBinary]),
    CatalogEntry::new("<=", &[LogicalBinary]),
    CatalogEntry::new(">", &[LogicalBinary]),
    CatalogEntry::new("<", &[LogicalBinary]),
    // Logical not
    CatalogEntry::new("!", &[LogicalUnary]),
];

/// Validated, read-only operator registry.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OperatorCatalog {
    entries: Vec<CatalogEntry>,
}

impl OperatorCatalog {
    /// Build a catalog, rejecting duplicate symbols, empty or repeated rules,
    /// and symbols that cannot be spliced into a template.
    pub fn new(entries: impl IntoIterator<Item = CatalogEntry>) -> Result<Self, GenError> {
        let entries: Vec<CatalogEntry> = entries.into_iter().collect();
        let mut seen = FxHashSet::default();

        for entry in &entries {
            validate_symbol(entry.symbol)?;

            if !seen.insert(entry.symbol) {
                return Err(GenError::DuplicateSymbol {
                    symbol: entry.symbol.to_string(),
                });
            }

            if entry.rules.is_empty() {
                return Err(GenError::EmptyRules {
                    symbol: entry.symbol.to_string(),
                });
            }

            for (i, rule) in entry.rules.iter().enumerate() {
                if entry.rules[..i].contains(rule) {
                    return Err(GenError::DuplicateRule {
                        symbol: entry.symbol.to_string(),
                        rule: rule.as_str(),
                    });
                }
            }
        }

        tracing::debug!(entries = entries.len(), "operator catalog built");
        Ok(Self { entries })
    }

    /// The fixed catalog of supported operators.
    pub fn standard() -> Self {
        Self {
            entries: STANDARD_ENTRIES.to_vec(),
        }
    }

    /// Rules registered for `symbol`, in emission order.
    pub fn rules_for(&self, symbol: &str) -> Result<&'static [GenerationRule], GenError> {
        self.entries
            .iter()
            .find(|entry| entry.symbol == symbol)
            .map(|entry| entry.rules)
            .ok_or_else(|| GenError::UnknownSymbol {
                symbol: symbol.to_string(),
            })
    }

    /// All symbols in declaration order.
    pub fn symbols(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|entry| entry.symbol)
    }

    /// All entries in declaration order.
    pub fn entries(&self) -> &[CatalogEntry] {
        &self.entries
    }

    /// Number of registered symbols.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no symbols are registered.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn validate_symbol(symbol: &str) -> Result<(), GenError> {
    let reason = if symbol.is_empty() {
        "symbol is empty"
    } else if symbol.chars().any(char::is_whitespace) {
        "symbol contains whitespace"
    } else if symbol.contains('$') {
        "symbol contains `$`"
    } else {
        return Ok(());
    };

    Err(GenError::InvalidSymbol {
        symbol: symbol.to_string(),
        reason,
    })
}
