//! Rule Resolver
//!
//! Maps a generation rule to the template shapes it expands into and the
//! result element type of each overload. Scalar broadcast is only generated
//! for arithmetic rules; comparisons and logical operators get the
//! array-array form alone.

use crate::catalog::{GenerationRule, ResultTypePolicy};
use crate::error::GenError;
use crate::template::{TemplateBank, TemplateShape};

/// A template selected for one overload.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ResolvedTemplate<'bank> {
    pub shape: TemplateShape,
    pub text: &'bank str,
    pub policy: ResultTypePolicy,
}

/// Shapes required by `rule`, in emission order.
pub const fn shapes_for(rule: GenerationRule) -> &'static [TemplateShape] {
    match rule {
        GenerationRule::ArithmeticBinary => &[
            TemplateShape::BinaryArrayArray,
            TemplateShape::BinaryArrayScalar,
            TemplateShape::BinaryScalarArray,
        ],
        GenerationRule::LogicalBinary => &[TemplateShape::BinaryArrayArray],
        GenerationRule::ArithmeticUnary | GenerationRule::LogicalUnary => {
            &[TemplateShape::UnaryArray]
        }
    }
}

/// Resolve `rule` for `symbol` against `bank`.
///
/// `symbol` only feeds the error message; resolution depends on the rule.
pub fn resolve<'bank>(
    bank: &'bank TemplateBank,
    symbol: &str,
    rule: GenerationRule,
) -> Result<Vec<ResolvedTemplate<'bank>>, GenError> {
    let policy = rule.result_policy();

    shapes_for(rule)
        .iter()
        .map(|&shape| {
            let text = bank.get(shape).ok_or_else(|| GenError::MissingTemplate {
                shape,
                needed_by: format!("operator `{symbol}`"),
            })?;
            Ok(ResolvedTemplate {
                shape,
                text,
                policy,
            })
        })
        .collect()
}
