//! Generation pipeline.
//!
//! Generation runs in two passes so that failure is all-or-nothing:
//!
//! ```text
//! OperatorCatalog + TemplateBank
//!        ↓
//!      plan()    (resolve every rule; fails on missing templates)
//!        ↓
//!      emit()    (substitute, normalize, concatenate)
//!        ↓
//!      String    (complete C++ text, or an error and no text)
//! ```

use crate::catalog::{GenerationRule, OperatorCatalog};
use crate::emitter::{collapse_whitespace, Emitter, StringEmitter};
use crate::error::GenError;
use crate::resolve::{resolve, ResolvedTemplate};
use crate::template::{
    substitute, Substitution, TemplateBank, TemplateShape, OPERATOR_MARKER, RESULT_MARKER,
};

/// Container name used when none is configured.
pub const DEFAULT_CONTAINER_NAME: &str = "Array";

/// Generation settings.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GenConfig {
    /// Name of the generated container type.
    pub container_name: String,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            container_name: DEFAULT_CONTAINER_NAME.to_string(),
        }
    }
}

impl GenConfig {
    pub fn new(container_name: impl Into<String>) -> Self {
        Self {
            container_name: container_name.into(),
        }
    }

    /// Check that the container name is a valid C++ identifier.
    pub fn validate(&self) -> Result<(), GenError> {
        let name = &self.container_name;
        let mut chars = name.chars();
        let valid = chars
            .next()
            .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');

        if valid {
            Ok(())
        } else {
            Err(GenError::InvalidContainerName { name: name.clone() })
        }
    }
}

/// One overload to emit.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct PlannedSnippet<'bank> {
    pub symbol: &'static str,
    pub rule: GenerationRule,
    pub template: ResolvedTemplate<'bank>,
}

/// Fully resolved generation work. Building one proves every template exists.
#[derive(Clone, Debug)]
pub struct GenerationPlan<'bank> {
    container: &'bank str,
    snippets: Vec<PlannedSnippet<'bank>>,
}

impl<'bank> GenerationPlan<'bank> {
    /// Overloads in emission order.
    pub fn snippets(&self) -> &[PlannedSnippet<'bank>] {
        &self.snippets
    }

    /// Overloads planned for `symbol`, in emission order.
    pub fn snippets_for<'p>(
        &'p self,
        symbol: &'p str,
    ) -> impl Iterator<Item = &'p PlannedSnippet<'bank>> + 'p {
        self.snippets.iter().filter(move |s| s.symbol == symbol)
    }
}

/// Resolve every rule of every catalog entry against `bank`.
#[tracing::instrument(level = "debug", skip_all, fields(operators = catalog.len()))]
pub fn plan<'bank>(
    catalog: &OperatorCatalog,
    bank: &'bank TemplateBank,
) -> Result<GenerationPlan<'bank>, GenError> {
    let container = bank
        .get(TemplateShape::Container)
        .ok_or_else(|| GenError::MissingTemplate {
            shape: TemplateShape::Container,
            needed_by: "the container definition".to_string(),
        })?;

    // Only `$ARR` is filled in the container; any other marker would be
    // blanked rather than reported.
    if let Some(marker) = [OPERATOR_MARKER, RESULT_MARKER]
        .into_iter()
        .find(|marker| container.contains(marker))
    {
        return Err(GenError::UnresolvedPlaceholder {
            marker,
            shape: TemplateShape::Container,
            snippet: container.to_string(),
        });
    }

    let mut snippets = Vec::new();
    for symbol in catalog.symbols() {
        for &rule in catalog.rules_for(symbol)? {
            for template in resolve(bank, symbol, rule)? {
                snippets.push(PlannedSnippet {
                    symbol,
                    rule,
                    template,
                });
            }
        }
    }

    tracing::debug!(snippets = snippets.len(), "generation planned");
    Ok(GenerationPlan {
        container,
        snippets,
    })
}

/// Render a plan to text.
///
/// The container definition keeps its line structure; each overload is
/// collapsed to a single line. Blank lines are removed from the result.
#[tracing::instrument(level = "debug", skip_all, fields(container = %config.container_name))]
pub fn emit(plan: &GenerationPlan<'_>, config: &GenConfig) -> Result<String, GenError> {
    config.validate()?;
    let name = config.container_name.as_str();

    let mut emitter = StringEmitter::with_capacity(256 * (plan.snippets.len() + 1));

    let container = substitute(
        plan.container,
        TemplateShape::Container,
        &Substitution::container(name),
    )?;
    emitter.emit(&container);
    emitter.emit_newline();

    for snippet in &plan.snippets {
        let template = &snippet.template;
        let text = substitute(
            template.text,
            template.shape,
            &Substitution {
                container: name,
                operator: snippet.symbol,
                result: template.policy.element_type(),
            },
        )?;
        let line = collapse_whitespace(&text);
        tracing::trace!(
            symbol = snippet.symbol,
            rule = %snippet.rule,
            shape = %template.shape,
            "emit overload"
        );
        emitter.emit(&line);
        emitter.emit_newline();
    }

    emitter.collapse_blank_lines();
    emitter.ensure_trailing_newline();

    tracing::debug!(bytes = emitter.len(), "generation complete");
    Ok(emitter.output())
}

/// Generate the container and every overload in `catalog`.
pub fn generate(
    catalog: &OperatorCatalog,
    bank: &TemplateBank,
    config: &GenConfig,
) -> Result<String, GenError> {
    let plan = plan(catalog, bank)?;
    emit(&plan, config)
}

/// Generate with the standard catalog, standard bank and default settings.
pub fn generate_standard() -> Result<String, GenError> {
    generate(
        &OperatorCatalog::standard(),
        &TemplateBank::standard(),
        &GenConfig::default(),
    )
}
