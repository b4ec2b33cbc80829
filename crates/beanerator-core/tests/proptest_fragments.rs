//! Property-based tests for generated beans
//!
//! For any field list, every fragment that enumerates fields must do so in
//! declaration order, and rendering a well-formed schema must succeed.

use beanerator_core::naming::{capitalize, is_java_identifier};
use beanerator_core::{FieldSchema, Fragments, RecordSchema, Visibility, render};
use proptest::prelude::*;
use std::collections::HashSet;

// Strategy: Generate a Java type, plain or nested
fn arb_type() -> impl Strategy<Value = (String, bool)> {
    prop_oneof![
        Just(("int".to_string(), false)),
        Just(("double".to_string(), false)),
        Just(("String".to_string(), false)),
        Just(("java.util.List<String>".to_string(), false)),
        "[A-Z][a-z]{2,8}".prop_map(|t| (format!("demo.{t}"), true)),
    ]
}

// Strategy: Generate fields with distinct accessor names
fn arb_fields() -> impl Strategy<Value = Vec<FieldSchema>> {
    prop::collection::vec(("f[a-z]{1,6}[A-Z]?[a-z]{0,3}", arb_type()), 1..8).prop_map(|raw| {
        let mut seen = HashSet::new();
        raw.into_iter()
            .filter(|(name, _)| is_java_identifier(name))
            .filter(|(name, _)| seen.insert(capitalize(name)))
            .map(|(name, (ty, nested))| FieldSchema::new(name, ty, nested))
            .collect()
    })
}

fn schema(fields: Vec<FieldSchema>) -> RecordSchema {
    RecordSchema {
        qualified_name: "demo.Sample".to_string(),
        simple_name: "Sample".to_string(),
        package_name: Some("demo".to_string()),
        visibility: Visibility::Public,
        fields,
        extra_annotations: vec![],
        extra_interfaces: vec![],
    }
}

/// Positions of `needles` in `haystack`, in needle order.
fn positions(haystack: &str, needles: &[String]) -> Vec<usize> {
    needles
        .iter()
        .map(|n| haystack.find(n.as_str()).unwrap_or(usize::MAX))
        .collect()
}

fn is_strictly_increasing(values: &[usize]) -> bool {
    values.iter().all(|&v| v != usize::MAX) && values.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    /// Property: canonical constructor arguments follow declaration order
    #[test]
    fn proptest_constructor_order(fields in arb_fields()) {
        let fragments = Fragments::generate(&schema(fields.clone()));

        let args: Vec<String> = fields
            .iter()
            .map(|f| format!("{} {}", f.beanerated_type(), f.name))
            .collect();
        let expected = format!("public SampleBean({}) {{", args.join(", "));
        prop_assert!(fragments.constructors.contains(&expected));
    }

    /// Property: accessors appear in declaration order
    #[test]
    fn proptest_accessor_order(fields in arb_fields()) {
        let fragments = Fragments::generate(&schema(fields.clone()));

        let getters: Vec<String> = fields
            .iter()
            .map(|f| format!(" get{}() {{", f.cap_name()))
            .collect();
        prop_assert!(is_strictly_increasing(&positions(&fragments.accessors, &getters)));
    }

    /// Property: toString lists fields in declaration order with `, ` separators
    #[test]
    fn proptest_to_string_order(fields in arb_fields()) {
        let fragments = Fragments::generate(&schema(fields.clone()));

        let parts: Vec<String> = fields
            .iter()
            .map(|f| format!("+ \"{0}=\" + this.{0}", f.name))
            .collect();
        prop_assert!(is_strictly_increasing(&positions(&fragments.to_string, &parts)));
        prop_assert_eq!(
            fragments.to_string.matches("+ \", \"").count(),
            fields.len().saturating_sub(1)
        );
    }

    /// Property: equality and hash visit fields in declaration order
    #[test]
    fn proptest_equality_order(fields in arb_fields()) {
        let fragments = Fragments::generate(&schema(fields.clone()));

        let hashed: Vec<String> = fields.iter().map(|f| format!("this.{}", f.name)).collect();
        let expected = format!("Objects.hash({})", hashed.join(", "));
        prop_assert!(fragments.equality.contains(&expected));
    }

    /// Property: nested fields always delegate in both directions
    #[test]
    fn proptest_nested_delegation(fields in arb_fields()) {
        let fragments = Fragments::generate(&schema(fields.clone()));

        for field in fields.iter().filter(|f| f.is_nested) {
            let delegate = format!("{}.fromRecord(record.{}())", field.beanerated_type(), field.name);
            prop_assert!(fragments.from_record.contains(&delegate));
            let back = format!("this.get{}().toRecord()", field.cap_name());
            prop_assert!(fragments.to_record.contains(&back));
        }
    }

    /// Property: well-formed schemas always render into one balanced class
    #[test]
    fn proptest_render_succeeds(fields in arb_fields()) {
        let schema = schema(fields);
        let fragments = Fragments::generate(&schema);

        let source = render(&schema, &fragments).expect("well-formed schema should render");

        prop_assert_eq!(source.matches('{').count(), source.matches('}').count());
        prop_assert!(source.ends_with("}\n"), "source should end with the class closing brace");
    }
}
