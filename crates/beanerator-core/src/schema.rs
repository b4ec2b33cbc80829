//! Language-neutral description of a record and its components.

use crate::naming::{BEAN_SUFFIX, capitalize, companion_name};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared access level of a host type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Visibility {
    Public,
    Protected,
    Private,
    #[default]
    PackagePrivate,
}

impl Visibility {
    /// Derive visibility from declared modifiers.
    ///
    /// `public` wins over `protected`, which wins over `private`; anything else
    /// is package-private.
    pub fn from_modifiers<S: AsRef<str>>(modifiers: &[S]) -> Self {
        let has = |keyword: &str| modifiers.iter().any(|m| m.as_ref() == keyword);

        if has("public") {
            Visibility::Public
        } else if has("protected") {
            Visibility::Protected
        } else if has("private") {
            Visibility::Private
        } else {
            Visibility::PackagePrivate
        }
    }

    /// Java keyword for this visibility, `None` for package-private.
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Visibility::Public => Some("public"),
            Visibility::Protected => Some("protected"),
            Visibility::Private => Some("private"),
            Visibility::PackagePrivate => None,
        }
    }
}

impl fmt::Display for Visibility {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword().unwrap_or("package-private"))
    }
}

/// One record component.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSchema {
    /// Component name, verbatim.
    pub name: String,

    /// Declared type text, verbatim.
    pub declared_type: String,

    /// The declared type is itself a beanerated record.
    pub is_nested: bool,
}

impl FieldSchema {
    pub fn new(name: impl Into<String>, declared_type: impl Into<String>, is_nested: bool) -> Self {
        Self {
            name: name.into(),
            declared_type: declared_type.into(),
            is_nested,
        }
    }

    /// Storage type of this field inside the bean.
    ///
    /// Nested records are stored as their own bean type.
    pub fn beanerated_type(&self) -> String {
        if self.is_nested {
            format!("{}{BEAN_SUFFIX}", self.declared_type)
        } else {
            self.declared_type.clone()
        }
    }

    /// Accessor suffix, as in `get<CapName>`.
    pub fn cap_name(&self) -> String {
        capitalize(&self.name)
    }
}

/// Everything the generators need to know about one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSchema {
    pub qualified_name: String,
    pub simple_name: String,

    /// `None` for the unnamed package.
    pub package_name: Option<String>,

    pub visibility: Visibility,

    /// Components in declaration order.
    pub fields: Vec<FieldSchema>,

    /// Annotations to put on the bean, without the leading `@`.
    #[serde(default)]
    pub extra_annotations: Vec<String>,

    /// Interfaces the bean declares it implements.
    #[serde(default)]
    pub extra_interfaces: Vec<String>,
}

impl RecordSchema {
    /// Name of the generated bean class.
    pub fn bean_name(&self) -> String {
        companion_name(&self.simple_name)
    }

    /// Qualified name of the generated bean, used as the output key.
    pub fn bean_qualified_name(&self) -> String {
        match &self.package_name {
            Some(package) => format!("{package}.{}", self.bean_name()),
            None => self.bean_name(),
        }
    }

    /// Fields whose type is itself beanerated.
    pub fn nested_fields(&self) -> impl Iterator<Item = &FieldSchema> {
        self.fields.iter().filter(|f| f.is_nested)
    }
}
