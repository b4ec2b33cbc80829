//! beanerator-core - Mutable bean generation for immutable Java records
//!
//! Given a catalog of host types, this crate produces the Java source of a
//! companion `<Record>Bean` class for every record carrying the `beanerate`
//! marker. A bean can be built from a record, mutated through fluent setters,
//! and converted back into an equal record.
//!
//! # Architecture
//!
//! ```text
//! Catalog (TOML/JSON)
//!     ↓
//!  [extract]
//!     ↓
//!  RecordSchema
//!     ↓
//!  ├─→ fromRecord ─┐
//!  ├─→ constructors │
//!  ├─→ accessors    │
//!  ├─→ equals       ├─→ [render] → source text → Emitter
//!  ├─→ toRecord     │
//!  └─→ toString ───┘
//! ```
//!
//! - [`catalog`]: host type descriptions and schema extraction
//! - [`fragments`]: the six member generators
//! - [`render`]: structured assembly of the final compilation unit
//! - [`driver`]: batch generation with per-type failure isolation
//!
//! # Example
//!
//! ```rust
//! use beanerator_core::{Catalog, CollectingDiagnostics, Generator, GeneratorConfig, MemoryEmitter};
//!
//! let catalog = Catalog::from_toml_str(r#"
//!     [[types]]
//!     name = "com.example.Point"
//!     kind = "record"
//!     modifiers = ["public"]
//!     beanerate = {}
//!     components = [
//!         { name = "x", type = "int" },
//!         { name = "y", type = "int" },
//!     ]
//! "#).unwrap();
//!
//! let emitter = MemoryEmitter::new();
//! let diagnostics = CollectingDiagnostics::new();
//! let report = Generator::new(GeneratorConfig::default(), &emitter, &diagnostics).run(&catalog);
//!
//! assert!(report.is_success());
//! assert!(emitter.get("com.example.PointBean").unwrap().contains("public final class PointBean"));
//! ```

pub mod catalog;
pub mod config;
pub mod driver;
mod error;
pub mod fragments;
pub mod naming;
pub mod render;
pub mod schema;

pub use catalog::{Catalog, Component, HostKind, HostType, Marker, extract};
pub use config::GeneratorConfig;
pub use driver::{
    CollectingDiagnostics, Diagnostic, Diagnostics, DirectoryEmitter, Emitter, GenerationReport,
    Generator, MemoryEmitter, Severity, TracingDiagnostics,
};
pub use error::{CatalogError, EmitError, ExtractError, GenerationError, RenderError};
pub use fragments::Fragments;
pub use render::render;
pub use schema::{FieldSchema, RecordSchema, Visibility};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::{
        Catalog, Diagnostics, Emitter, FieldSchema, Fragments, GenerationError, Generator,
        GeneratorConfig, RecordSchema, Severity, Visibility, extract, render,
    };
}
