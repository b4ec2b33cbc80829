//! Host type catalog and schema extraction.
//!
//! A catalog is the declarative stand-in for a compiler's view of the source
//! tree: every host type with its kind, modifiers and components. Types that
//! carry a `beanerate` table are eligible for generation.
//!
//! ```toml
//! [[types]]
//! name = "red.enspi.beanerator.demo.CoffeeTaste"
//! kind = "record"
//! modifiers = ["public"]
//!
//! [types.beanerate]
//! annotations = ["SuppressWarnings(\"unused\")"]
//! interfaces = ["java.io.Serializable"]
//!
//! [[types.components]]
//! name = "flavor"
//! type = "red.enspi.beanerator.demo.CoffeeTaste.Flavor"
//! ```

use crate::config::GeneratorConfig;
use crate::error::{CatalogError, ExtractError};
use crate::naming::split_qualified;
use crate::schema::{FieldSchema, RecordSchema, Visibility};
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::fmt;
use std::path::Path;

/// Kind of a host type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HostKind {
    Record,
    Class,
    Enum,
    Interface,
}

impl fmt::Display for HostKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            HostKind::Record => "record",
            HostKind::Class => "class",
            HostKind::Enum => "enum",
            HostKind::Interface => "interface",
        };
        f.write_str(name)
    }
}

/// Generation marker and its configuration payload.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Marker {
    /// Annotations to put on the bean, without the leading `@`.
    #[serde(default)]
    pub annotations: Vec<String>,

    /// Interfaces the bean implements.
    #[serde(default)]
    pub interfaces: Vec<String>,
}

/// A record component as declared on the host type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Component {
    pub name: String,

    #[serde(rename = "type")]
    pub ty: String,
}

/// One host type description.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HostType {
    /// Qualified name.
    pub name: String,

    pub kind: HostKind,

    #[serde(default)]
    pub modifiers: Vec<String>,

    /// Package for a bare `name`. For a qualified `name` it must match the
    /// qualifier, so records declared inside other types are not supported.
    #[serde(default)]
    pub package: Option<String>,

    /// Present when the type is marked for generation.
    #[serde(default)]
    pub beanerate: Option<Marker>,

    #[serde(default)]
    pub components: Vec<Component>,
}

impl HostType {
    /// Whether the generation marker is present.
    pub fn is_marked(&self) -> bool {
        self.beanerate.is_some()
    }

    /// Record-like and marked: nested fields of this type get delegated.
    pub fn is_beanerated_record(&self) -> bool {
        self.kind == HostKind::Record && self.is_marked()
    }

    /// Package and simple name of this type.
    fn package_and_simple_name(&self) -> (Option<&str>, &str) {
        let (derived, simple) = split_qualified(&self.name);
        (self.package.as_deref().or(derived), simple)
    }
}

#[derive(Debug, Default, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    types: Vec<HostType>,
}

/// Ordered set of host types, indexed by qualified name.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    types: Vec<HostType>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate qualified names.
    pub fn new(types: Vec<HostType>) -> Result<Self, CatalogError> {
        let mut index = HashMap::with_capacity(types.len());
        for (i, ty) in types.iter().enumerate() {
            if index.insert(ty.name.clone(), i).is_some() {
                return Err(CatalogError::DuplicateType(ty.name.clone()));
            }
        }
        Ok(Self { types, index })
    }

    /// Load a catalog file, choosing the format by extension.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)?;

        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&content),
            Some("json") => Self::from_json_str(&content),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
        }
    }

    /// Parse a TOML catalog.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(content)?;
        Self::new(file.types)
    }

    /// Parse a JSON catalog.
    pub fn from_json_str(content: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = serde_json::from_str(content)?;
        Self::new(file.types)
    }

    /// Look up a host type by qualified name.
    pub fn get(&self, name: &str) -> Option<&HostType> {
        self.index.get(name).map(|&i| &self.types[i])
    }

    /// All host types, in catalog order.
    pub fn types(&self) -> &[HostType] {
        &self.types
    }

    /// Marked host types, in catalog order.
    pub fn eligible(&self) -> impl Iterator<Item = &HostType> {
        self.types.iter().filter(|t| t.is_marked())
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }

    /// Resolve a component type as seen from a type in `package`.
    ///
    /// Matches a qualified name first, then a name relative to `package`.
    pub fn resolve(&self, ty: &str, package: Option<&str>) -> Option<&HostType> {
        self.get(ty).or_else(|| {
            let package = package?;
            self.get(&format!("{package}.{ty}"))
        })
    }
}

/// Build the schema of one marked host type.
///
/// `config.default_package` applies to names without a dot and no explicit
/// package.
pub fn extract(
    catalog: &Catalog,
    host: &HostType,
    config: &GeneratorConfig,
) -> Result<RecordSchema, ExtractError> {
    if host.kind != HostKind::Record {
        return Err(ExtractError::NotARecord {
            type_name: host.name.clone(),
            kind: host.kind.to_string(),
        });
    }

    if let (Some(package), (Some(derived), _)) = (&host.package, split_qualified(&host.name))
        && package != derived
    {
        return Err(ExtractError::PackageMismatch {
            type_name: host.name.clone(),
            derived: derived.to_string(),
            package: package.clone(),
        });
    }

    let (package, simple_name) = host.package_and_simple_name();
    let package = package.or(config.default_package.as_deref());

    let mut seen = HashSet::new();
    let mut fields = Vec::with_capacity(host.components.len());
    for component in &host.components {
        if component.name.trim().is_empty() || component.ty.trim().is_empty() {
            return Err(ExtractError::EmptyComponent {
                type_name: host.name.clone(),
            });
        }
        if !seen.insert(component.name.as_str()) {
            return Err(ExtractError::DuplicateComponent {
                type_name: host.name.clone(),
                component: component.name.clone(),
            });
        }

        let is_nested = catalog
            .resolve(&component.ty, package)
            .is_some_and(HostType::is_beanerated_record);
        fields.push(FieldSchema::new(&component.name, &component.ty, is_nested));
    }

    let marker = host.beanerate.clone().unwrap_or_default();

    Ok(RecordSchema {
        qualified_name: host.name.clone(),
        simple_name: simple_name.to_string(),
        package_name: package.map(str::to_string),
        visibility: Visibility::from_modifiers(&host.modifiers),
        fields,
        extra_annotations: marker.annotations,
        extra_interfaces: marker.interfaces,
    })
}
