//! Error types for bean generation

use thiserror::Error;

/// Errors raised while loading a catalog or configuration file.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// I/O error while reading the catalog file.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// TOML catalog could not be parsed.
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    /// JSON catalog could not be parsed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Two catalog entries share a qualified name.
    #[error("duplicate host type: {0}")]
    DuplicateType(String),

    /// File extension is neither `.toml` nor `.json`.
    #[error("unsupported catalog format: {0}")]
    UnsupportedFormat(String),
}

/// The host type is not a valid composite for generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ExtractError {
    /// Host type is not a record.
    #[error("`{type_name}` is a {kind}, not a record")]
    NotARecord { type_name: String, kind: String },

    /// Two components share a name.
    #[error("`{type_name}` declares component `{component}` more than once")]
    DuplicateComponent { type_name: String, component: String },

    /// A component has an empty name or type.
    #[error("`{type_name}` has a component with an empty name or type")]
    EmptyComponent { type_name: String },

    /// An explicit package disagrees with the qualifier of the name.
    ///
    /// Referencing fields are typed `<declared type>Bean`, so a bean emitted
    /// anywhere else than next to its record could not be found.
    #[error("`{type_name}` is declared in `{derived}` but its package is set to `{package}`")]
    PackageMismatch {
        type_name: String,
        derived: String,
        package: String,
    },
}

/// Internal inconsistency while assembling a compilation unit.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RenderError {
    /// A name that must be a Java identifier is not one.
    #[error("`{0}` is not a valid Java identifier")]
    InvalidIdentifier(String),

    /// Two fields would produce the same accessor names.
    #[error("fields `{first}` and `{second}` both map to accessor suffix `{cap_name}`")]
    AccessorClash {
        first: String,
        second: String,
        cap_name: String,
    },

    /// Fragments were generated for a different schema.
    #[error("fragments belong to `{actual}`, expected `{expected}`")]
    FragmentMismatch { expected: String, actual: String },

    /// Writing into the output buffer failed.
    #[error("formatting failed")]
    Format(#[from] std::fmt::Error),
}

/// The external writer rejected or failed on generated text.
#[derive(Debug, Error)]
pub enum EmitError {
    /// I/O error while persisting the source.
    #[error("I/O error writing {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Writer refused the output.
    #[error("output rejected: {0}")]
    Rejected(String),
}

/// Any failure of one per-type generation attempt.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("extraction failed: {0}")]
    Extract(#[from] ExtractError),

    #[error("rendering failed: {0}")]
    Render(#[from] RenderError),

    #[error("emission failed: {0}")]
    Emit(#[from] EmitError),
}

impl GenerationError {
    /// Short stage label used in diagnostics and summaries.
    pub fn stage(&self) -> &'static str {
        match self {
            GenerationError::Extract(_) => "extract",
            GenerationError::Render(_) => "render",
            GenerationError::Emit(_) => "emit",
        }
    }
}
