//! Array Operator Code Generation
//!
//! Generates C++ source for a fixed-size array container `Array<T, N>` and a
//! family of elementwise free-function operator overloads for it.
//!
//! # Architecture
//!
//! ```text
//! OperatorCatalog  (symbol -> ordered generation rules)
//!        ↓
//!   resolve()      (rule -> template shapes + result type policy)
//!        ↓
//!   TemplateBank   (shape -> blueprint text)
//!        ↓
//!   substitute()   (fill `$ARR`, `$OP`, `$OUT`; no marker may survive)
//!        ↓
//!   StringEmitter  (collapse each overload to one line, drop blank lines)
//! ```
//!
//! Arithmetic rules keep the operand element type and get scalar-broadcast
//! overloads in both orientations. Logical and comparison rules produce
//! `bool` elements and only the array-array form.

pub mod catalog;
pub mod emitter;
mod error;
pub mod generate;
pub mod resolve;
pub mod template;

pub use catalog::{CatalogEntry, GenerationRule, OperatorCatalog, ResultTypePolicy};
pub use emitter::{Emitter, StringEmitter};
pub use error::GenError;
pub use generate::{
    emit, generate, generate_standard, plan, GenConfig, GenerationPlan, PlannedSnippet,
    DEFAULT_CONTAINER_NAME,
};
pub use resolve::{resolve, ResolvedTemplate};
pub use template::{Substitution, TemplateBank, TemplateShape};
