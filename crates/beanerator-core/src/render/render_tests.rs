#![allow(non_snake_case)]

use super::*;
use crate::schema::{FieldSchema, Visibility};

fn taste() -> RecordSchema {
    RecordSchema {
        qualified_name: "demo.Taste".to_string(),
        simple_name: "Taste".to_string(),
        package_name: Some("demo".to_string()),
        visibility: Visibility::Public,
        fields: vec![
            FieldSchema::new("flavor", "demo.Taste.Flavor", false),
            FieldSchema::new("body", "demo.Taste.Body", false),
        ],
        extra_annotations: vec![],
        extra_interfaces: vec![],
    }
}

const TASTE_BEAN: &str = r#"/* Generated by beanerator. Do not edit. */
package demo;

import java.util.Objects;

/** A mutable bean interoperable with {@code demo.Taste} records. */
public final class TasteBean {

  /** Builds a bean from the given {@code demo.Taste} record. */
  public static TasteBean fromRecord(demo.Taste record) {
    return new TasteBean(record.flavor(), record.body());
  }

  /** Creates a bean with every field at its type default. */
  public TasteBean() {}

  /** Creates a bean from field values in declaration order. */
  public TasteBean(demo.Taste.Flavor flavor, demo.Taste.Body body) {
    this.flavor = flavor;
    this.body = body;
  }

  @Override
  public boolean equals(Object other) {
    return this == other || (
      other instanceof TasteBean otherTasteBean
        && this.flavor == otherTasteBean.getFlavor()
        && this.body == otherTasteBean.getBody()
    );
  }

  @Override
  public int hashCode() {
    return Objects.hash(this.flavor, this.body);
  }

  /** Builds a {@code demo.Taste} record from this bean. */
  public demo.Taste toRecord() {
    return new demo.Taste(this.getFlavor(), this.getBody());
  }

  @Override
  public String toString() {
    return "TasteBean["
      + "flavor=" + this.flavor + ", "
      + "body=" + this.body
      + "]";
  }

  private demo.Taste.Flavor flavor;

  /** Gets the value of {@code flavor}. */
  public demo.Taste.Flavor getFlavor() {
    return this.flavor;
  }

  /** Sets the value of {@code flavor}. */
  public TasteBean setFlavor(demo.Taste.Flavor flavor) {
    this.flavor = flavor;
    return this;
  }

  private demo.Taste.Body body;

  /** Gets the value of {@code body}. */
  public demo.Taste.Body getBody() {
    return this.body;
  }

  /** Sets the value of {@code body}. */
  public TasteBean setBody(demo.Taste.Body body) {
    this.body = body;
    return this;
  }
}
"#;

#[test]
fn render___produces_complete_class() {
    let schema = taste();
    let fragments = Fragments::generate(&schema);

    let source = render(&schema, &fragments).unwrap();

    assert_eq!(source, TASTE_BEAN);
}

#[test]
fn render___adds_annotations_and_interfaces() {
    let mut schema = taste();
    schema.extra_annotations = vec![
        "SuppressWarnings(\"unused\")".to_string(),
        "Deprecated".to_string(),
    ];
    schema.extra_interfaces = vec!["java.io.Serializable".to_string(), "Cloneable".to_string()];
    let fragments = Fragments::generate(&schema);

    let source = render(&schema, &fragments).unwrap();

    assert!(source.contains(
        "@SuppressWarnings(\"unused\")\n\
         @Deprecated\n\
         public final class TasteBean implements java.io.Serializable, Cloneable {\n"
    ));
}

#[test]
fn render___package_private___omits_modifier() {
    let mut schema = taste();
    schema.visibility = Visibility::PackagePrivate;
    let fragments = Fragments::generate(&schema);

    let source = render(&schema, &fragments).unwrap();

    assert!(source.contains("\nfinal class TasteBean {\n"));
}

#[test]
fn render___unnamed_package___omits_package_line() {
    let mut schema = taste();
    schema.package_name = None;
    let fragments = Fragments::generate(&schema);

    let source = render(&schema, &fragments).unwrap();

    assert!(!source.contains("package "));
    assert!(source.starts_with("/* Generated by beanerator. Do not edit. */\nimport java.util.Objects;\n"));
}

#[test]
fn render_with_header___empty_header___omits_comment() {
    let schema = taste();
    let fragments = Fragments::generate(&schema);

    let source = render_with_header(&schema, &fragments, "").unwrap();

    assert!(source.starts_with("package demo;\n"));
}

#[test]
fn render_with_header___escapes_comment_terminator() {
    let schema = taste();
    let fragments = Fragments::generate(&schema);

    let source = render_with_header(&schema, &fragments, "do not */ edit").unwrap();

    assert!(source.starts_with("/* do not * / edit */\n"));
}

#[test]
fn render___record_named_like_placeholder_text___is_left_alone() {
    // names containing bean-like substrings must not be rewritten anywhere
    let mut schema = taste();
    schema.fields = vec![FieldSchema::new("TasteBean", "String", false)];
    let fragments = Fragments::generate(&schema);

    let source = render(&schema, &fragments).unwrap();

    assert!(source.contains("  private String TasteBean;\n"));
    assert!(source.contains("&& this.TasteBean == otherTasteBean.getTastebean()"));
}

#[test]
fn render___zero_fields___compiles_to_minimal_class() {
    let mut schema = taste();
    schema.fields.clear();
    let fragments = Fragments::generate(&schema);

    let source = render(&schema, &fragments).unwrap();

    assert_eq!(source.matches("public TasteBean(").count(), 1);
    assert!(source.contains("return \"TasteBean[]\";"));
    assert!(source.ends_with("  }\n}\n"));
}

#[test]
fn render___mismatched_fragments___fails() {
    let schema = taste();
    let mut other = taste();
    other.simple_name = "Coffee".to_string();
    let fragments = Fragments::generate(&other);

    let err = render(&schema, &fragments).unwrap_err();

    assert_eq!(
        err,
        RenderError::FragmentMismatch {
            expected: "TasteBean".to_string(),
            actual: "CoffeeBean".to_string(),
        }
    );
}

#[test]
fn render___keyword_field___fails() {
    let mut schema = taste();
    schema.fields.push(FieldSchema::new("class", "String", false));
    let fragments = Fragments::generate(&schema);

    let err = render(&schema, &fragments).unwrap_err();

    assert_eq!(err, RenderError::InvalidIdentifier("class".to_string()));
}

#[test]
fn render___accessor_clash___fails() {
    let mut schema = taste();
    schema.fields = vec![
        FieldSchema::new("fooBar", "int", false),
        FieldSchema::new("foobar", "int", false),
    ];
    let fragments = Fragments::generate(&schema);

    let err = render(&schema, &fragments).unwrap_err();

    assert_eq!(
        err,
        RenderError::AccessorClash {
            first: "fooBar".to_string(),
            second: "foobar".to_string(),
            cap_name: "Foobar".to_string(),
        }
    );
}

#[test]
fn CompilationUnit___assemble___skips_empty_members() {
    let mut schema = taste();
    schema.fields.clear();
    let fragments = Fragments::generate(&schema);

    let unit = CompilationUnit::assemble(&schema, &fragments, DEFAULT_HEADER).unwrap();

    // accessors are empty without fields
    assert_eq!(unit.members.len(), 5);
    assert_eq!(unit.class_name, "TasteBean");
    assert_eq!(unit.visibility, Some("public"));
}
