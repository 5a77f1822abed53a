//! Property-based tests for the generator.
//!
//! These use proptest to vary the container name and the catalog contents and
//! check the output invariants that must hold for any valid configuration:
//! 1. Exactly one container definition
//! 2. No surviving placeholder markers and no blank lines
//! 3. One line per planned overload
//! 4. Determinism

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

use arraygen_codegen::emitter::{collapse_blank_lines, collapse_whitespace};
use arraygen_codegen::resolve::shapes_for;
use arraygen_codegen::template::find_marker;
use arraygen_codegen::{generate, CatalogEntry, GenConfig, OperatorCatalog, TemplateBank};
use proptest::prelude::*;

// -- Strategies --

/// A valid container identifier.
fn container_name_strategy() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Za-z_][A-Za-z0-9_]{0,15}").expect("valid regex")
}

/// An order-preserving subset of the standard catalog.
fn catalog_strategy() -> impl Strategy<Value = Vec<CatalogEntry>> {
    let entries = OperatorCatalog::standard().entries().to_vec();
    let len = entries.len();
    prop::collection::vec(any::<bool>(), len).prop_map(move |mask| {
        entries
            .iter()
            .zip(mask)
            .filter_map(|(entry, keep)| keep.then_some(*entry))
            .collect()
    })
}

fn container_lines() -> usize {
    TemplateBank::standard()
        .get(arraygen_codegen::TemplateShape::Container)
        .unwrap()
        .lines()
        .count()
}

// -- Property Tests --

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 128,
        ..ProptestConfig::default()
    })]

    #[test]
    fn prop_output_invariants(name in container_name_strategy(), entries in catalog_strategy()) {
        let catalog = OperatorCatalog::new(entries.iter().copied()).unwrap();
        let bank = TemplateBank::standard();
        let config = GenConfig::new(name.clone());

        let output = generate(&catalog, &bank, &config).unwrap();

        let struct_decl = format!("struct {name} {{");
        prop_assert_eq!(output.matches(&struct_decl).count(), 1);
        prop_assert_eq!(find_marker(&output), None);
        prop_assert!(!output.contains("\n\n"));
        prop_assert!(output.ends_with('\n'));

        let overloads: usize = entries
            .iter()
            .flat_map(|entry| entry.rules.iter())
            .map(|&rule| shapes_for(rule).len())
            .sum();
        prop_assert_eq!(output.lines().count(), container_lines() + overloads);

        prop_assert_eq!(output, generate(&catalog, &bank, &config).unwrap());
    }

    #[test]
    fn prop_collapse_whitespace_normal_form(text in "[ a-z\\t\\n{};]{0,64}") {
        let collapsed = collapse_whitespace(&text);
        prop_assert!(!collapsed.contains("  "));
        prop_assert!(!collapsed.contains('\n'));
        prop_assert!(!collapsed.contains('\t'));
        prop_assert_eq!(collapsed.trim(), collapsed.as_str());
        prop_assert_eq!(collapse_whitespace(&collapsed), collapsed.clone());
    }

    #[test]
    fn prop_collapse_blank_lines_normal_form(text in "[a\\n]{0,64}") {
        let collapsed = collapse_blank_lines(&text);
        prop_assert!(!collapsed.contains("\n\n"));
        prop_assert_eq!(collapsed.replace('\n', ""), text.replace('\n', ""));
    }
}
