//! Assembly of a bean's compilation unit.
//!
//! The unit is built in memory first (header, package, imports, class
//! declaration, members) and printed afterwards. Type names are baked into
//! the fragments when they are generated, so nothing is ever substituted into
//! finished text.

use crate::error::RenderError;
use crate::fragments::Fragments;
use crate::naming::is_java_identifier;
use crate::schema::RecordSchema;
use std::collections::HashMap;
use std::fmt::Write;

/// Header used by [`render`].
pub const DEFAULT_HEADER: &str = "Generated by beanerator. Do not edit.";

/// One Java source file holding a single bean class.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompilationUnit<'a> {
    pub header: String,
    pub package: Option<&'a str>,
    pub imports: Vec<&'static str>,
    pub doc: String,
    pub annotations: &'a [String],
    pub visibility: Option<&'static str>,
    pub class_name: &'a str,
    pub interfaces: &'a [String],
    pub members: Vec<&'a str>,
}

impl<'a> CompilationUnit<'a> {
    /// Lay out the unit for `schema` after checking the fragments fit it.
    pub fn assemble(
        schema: &'a RecordSchema,
        fragments: &'a Fragments,
        header: &str,
    ) -> Result<Self, RenderError> {
        validate(schema, fragments)?;

        Ok(Self {
            header: header.replace("*/", "* /"),
            package: schema.package_name.as_deref(),
            imports: vec!["java.util.Objects"],
            doc: format!(
                "A mutable bean interoperable with {{@code {}}} records.",
                schema.qualified_name
            ),
            annotations: &schema.extra_annotations,
            visibility: schema.visibility.keyword(),
            class_name: &fragments.bean_name,
            interfaces: &schema.extra_interfaces,
            members: fragments
                .members()
                .into_iter()
                .filter(|m| !m.is_empty())
                .collect(),
        })
    }

    /// Print the unit as Java source.
    pub fn print(&self) -> Result<String, RenderError> {
        let mut out = String::new();

        if !self.header.trim().is_empty() {
            writeln!(out, "/* {} */", self.header.trim())?;
        }
        if let Some(package) = self.package {
            writeln!(out, "package {package};")?;
            writeln!(out)?;
        }
        for import in &self.imports {
            writeln!(out, "import {import};")?;
        }
        writeln!(out)?;

        writeln!(out, "/** {} */", self.doc)?;
        for annotation in self.annotations {
            writeln!(out, "@{annotation}")?;
        }
        if let Some(visibility) = self.visibility {
            write!(out, "{visibility} ")?;
        }
        write!(out, "final class {}", self.class_name)?;
        if !self.interfaces.is_empty() {
            write!(out, " implements {}", self.interfaces.join(", "))?;
        }
        writeln!(out, " {{")?;

        for member in &self.members {
            writeln!(out)?;
            out.push_str(member);
        }
        writeln!(out, "}}")?;

        Ok(out)
    }
}

/// Render a bean with the default header.
pub fn render(schema: &RecordSchema, fragments: &Fragments) -> Result<String, RenderError> {
    render_with_header(schema, fragments, DEFAULT_HEADER)
}

/// Render a bean; an empty `header` omits the header comment.
pub fn render_with_header(
    schema: &RecordSchema,
    fragments: &Fragments,
    header: &str,
) -> Result<String, RenderError> {
    CompilationUnit::assemble(schema, fragments, header)?.print()
}

/// Reject schemas whose names would not compile.
fn validate(schema: &RecordSchema, fragments: &Fragments) -> Result<(), RenderError> {
    let expected = schema.bean_name();
    if fragments.bean_name != expected {
        return Err(RenderError::FragmentMismatch {
            expected,
            actual: fragments.bean_name.clone(),
        });
    }

    if !is_java_identifier(&schema.simple_name) {
        return Err(RenderError::InvalidIdentifier(schema.simple_name.clone()));
    }

    let mut cap_names: HashMap<String, &str> = HashMap::new();
    for field in &schema.fields {
        if !is_java_identifier(&field.name) {
            return Err(RenderError::InvalidIdentifier(field.name.clone()));
        }
        // the lowercased tail makes `fooBar` and `foobar` share accessors
        let cap_name = field.cap_name();
        if let Some(first) = cap_names.insert(cap_name.clone(), &field.name) {
            return Err(RenderError::AccessorClash {
                first: first.to_string(),
                second: field.name.clone(),
                cap_name,
            });
        }
    }

    Ok(())
}

#[cfg(test)]
#[path = "render/render_tests.rs"]
mod render_tests;
