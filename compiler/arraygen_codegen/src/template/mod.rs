//! Template Bank
//!
//! Parameterized C++ blueprints for the array container and its operator
//! overloads. Each blueprint carries up to three markers:
//!
//! - [`CONTAINER_MARKER`] (`$ARR`): the container type name
//! - [`OPERATOR_MARKER`] (`$OP`): the operator symbol
//! - [`RESULT_MARKER`] (`$OUT`): the result element type
//!
//! Operator overloads are free function templates over `<typename T, int N>`.
//! They take their operands by value and build a fresh result container, so
//! the result never aliases an input.

use std::borrow::Cow;
use std::fmt;

use rustc_hash::FxHashMap;

use crate::error::GenError;

/// Marker replaced by the container type name.
pub const CONTAINER_MARKER: &str = "$ARR";
/// Marker replaced by the operator symbol.
pub const OPERATOR_MARKER: &str = "$OP";
/// Marker replaced by the result element type.
pub const RESULT_MARKER: &str = "$OUT";

/// Every marker a template may carry.
pub const MARKERS: [&str; 3] = [CONTAINER_MARKER, OPERATOR_MARKER, RESULT_MARKER];

const CONTAINER_TEMPLATE: &str = "\
template<typename T, int N>
struct $ARR {
  T data[N];
  constexpr T& operator[](int i){ return data[i]; }
  constexpr T const& operator[](int i) const { return data[i]; }
};
";

const BINARY_ARRAY_ARRAY_TEMPLATE: &str = "\
template<typename T, int N> $ARR<$OUT, N>
operator$OP($ARR<T,N> a, $ARR<T,N> b){
  $ARR<$OUT, N> r{};
  for(int i=0;i<N;i++) r[i] = a[i] $OP b[i];
  return r;
}
";

const BINARY_ARRAY_SCALAR_TEMPLATE: &str = "\
template<typename T, int N> $ARR<$OUT, N>
operator$OP($ARR<T,N> a, T s){
  $ARR<$OUT, N> r{};
  for(int i=0;i<N;i++) r[i] = a[i] $OP s;
  return r;
}
";

const BINARY_SCALAR_ARRAY_TEMPLATE: &str = "\
template<typename T, int N> $ARR<$OUT, N>
operator$OP(T s, $ARR<T,N> a){
  $ARR<$OUT, N> r{};
  for(int i=0;i<N;i++) r[i] = s $OP a[i];
  return r;
}
";

const UNARY_ARRAY_TEMPLATE: &str = "\
template<typename T, int N> $ARR<$OUT, N>
operator$OP($ARR<T,N> a){
  $ARR<$OUT, N> r{};
  for(int i=0;i<N;i++) r[i] = $OP a[i];
  return r;
}
";

/// The kinds of blueprint the bank can hold.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TemplateShape {
    /// The generic container struct itself.
    Container,
    /// `op(array, array)`.
    BinaryArrayArray,
    /// `op(array, scalar)`: scalar broadcast on the right.
    BinaryArrayScalar,
    /// `op(scalar, array)`: scalar broadcast on the left.
    BinaryScalarArray,
    /// `op(array)`.
    UnaryArray,
}

impl TemplateShape {
    /// All shapes, in the order the standard bank declares them.
    pub const ALL: [TemplateShape; 5] = [
        Self::Container,
        Self::BinaryArrayArray,
        Self::BinaryArrayScalar,
        Self::BinaryScalarArray,
        Self::UnaryArray,
    ];

    /// Human-readable name used in diagnostics.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Container => "container",
            Self::BinaryArrayArray => "array-array",
            Self::BinaryArrayScalar => "array-scalar",
            Self::BinaryScalarArray => "scalar-array",
            Self::UnaryArray => "unary",
        }
    }
}

impl fmt::Display for TemplateShape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Values spliced into a template.
#[derive(Copy, Clone, Debug)]
pub struct Substitution<'a> {
    /// Container type name.
    pub container: &'a str,
    /// Operator symbol. Empty for the container template.
    pub operator: &'a str,
    /// Result element type. Empty for the container template.
    pub result: &'a str,
}

impl<'a> Substitution<'a> {
    /// Substitution for the container template, which has no operator.
    pub fn container(container: &'a str) -> Self {
        Self {
            container,
            operator: "",
            result: "",
        }
    }
}

/// Immutable mapping from shape to blueprint text.
#[derive(Clone, Debug, Default)]
pub struct TemplateBank {
    templates: FxHashMap<TemplateShape, Cow<'static, str>>,
}

impl TemplateBank {
    /// A bank with no templates.
    pub fn empty() -> Self {
        Self::default()
    }

    /// The C++ blueprints for every shape.
    pub fn standard() -> Self {
        Self::empty()
            .with_template(TemplateShape::Container, CONTAINER_TEMPLATE)
            .with_template(TemplateShape::BinaryArrayArray, BINARY_ARRAY_ARRAY_TEMPLATE)
            .with_template(TemplateShape::BinaryArrayScalar, BINARY_ARRAY_SCALAR_TEMPLATE)
            .with_template(TemplateShape::BinaryScalarArray, BINARY_SCALAR_ARRAY_TEMPLATE)
            .with_template(TemplateShape::UnaryArray, UNARY_ARRAY_TEMPLATE)
    }

    /// Add or replace the blueprint for `shape`.
    #[must_use]
    pub fn with_template(
        mut self,
        shape: TemplateShape,
        text: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.templates.insert(shape, text.into());
        self
    }

    /// Look up the blueprint for `shape`.
    pub fn get(&self, shape: TemplateShape) -> Option<&str> {
        self.templates.get(&shape).map(AsRef::as_ref)
    }

    /// Check whether the bank holds a blueprint for `shape`.
    pub fn contains(&self, shape: TemplateShape) -> bool {
        self.templates.contains_key(&shape)
    }
}

/// Replace every marker in `template` and verify none remain.
///
/// The check runs on the substituted text, so a marker smuggled in through a
/// substituted value is caught as well.
pub fn substitute(
    template: &str,
    shape: TemplateShape,
    subst: &Substitution<'_>,
) -> Result<String, GenError> {
    let text = template
        .replace(OPERATOR_MARKER, subst.operator)
        .replace(RESULT_MARKER, subst.result)
        .replace(CONTAINER_MARKER, subst.container);

    if let Some(marker) = find_marker(&text) {
        return Err(GenError::UnresolvedPlaceholder {
            marker,
            shape,
            snippet: text,
        });
    }

    Ok(text)
}

/// First marker found in `text`, if any.
pub fn find_marker(text: &str) -> Option<&'static str> {
    MARKERS.into_iter().find(|marker| text.contains(marker))
}
