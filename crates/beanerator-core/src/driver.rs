//! Batch generation with per-type failure isolation.
//!
//! The [`Generator`] walks every marked host type of a [`Catalog`], runs
//! extract → fragments → render → emit for it, and turns any failure into an
//! error diagnostic tied to that type. One failing type never stops the rest
//! of the batch, and nothing is emitted for a type that failed.

use crate::catalog::{Catalog, HostType, extract};
use crate::config::GeneratorConfig;
use crate::error::{EmitError, GenerationError};
use crate::fragments::Fragments;
use crate::render::render_with_header;
use dashmap::DashMap;
use parking_lot::Mutex;
use rayon::prelude::*;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};

// ============================================================================
// Diagnostics
// ============================================================================

/// Severity of a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Info => write!(f, "info"),
            Severity::Error => write!(f, "error"),
        }
    }
}

/// A reported diagnostic.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    pub severity: Severity,
    pub message: String,
    /// Qualified name of the host type the diagnostic is about.
    pub subject: String,
}

/// Sink for generation diagnostics. Must tolerate concurrent calls.
pub trait Diagnostics: Send + Sync {
    fn report(&self, severity: Severity, message: &str, subject: &str);
}

/// Forwards diagnostics to `tracing`.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl Diagnostics for TracingDiagnostics {
    fn report(&self, severity: Severity, message: &str, subject: &str) {
        match severity {
            Severity::Info => info!(subject, "{message}"),
            Severity::Error => error!(subject, "{message}"),
        }
    }
}

/// Keeps every diagnostic in memory, in report order.
#[derive(Debug, Default)]
pub struct CollectingDiagnostics {
    entries: Mutex<Vec<Diagnostic>>,
}

impl CollectingDiagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of everything reported so far.
    pub fn entries(&self) -> Vec<Diagnostic> {
        self.entries.lock().clone()
    }

    /// Diagnostics of the given severity.
    pub fn with_severity(&self, severity: Severity) -> Vec<Diagnostic> {
        self.entries
            .lock()
            .iter()
            .filter(|d| d.severity == severity)
            .cloned()
            .collect()
    }
}

impl Diagnostics for CollectingDiagnostics {
    fn report(&self, severity: Severity, message: &str, subject: &str) {
        self.entries.lock().push(Diagnostic {
            severity,
            message: message.to_string(),
            subject: subject.to_string(),
        });
    }
}

// ============================================================================
// Emitters
// ============================================================================

/// Destination for generated sources. Must tolerate concurrent calls.
pub trait Emitter: Send + Sync {
    /// Persist one bean. `package` is `None` for the unnamed package.
    fn emit(&self, package: Option<&str>, class_name: &str, source: &str)
    -> Result<(), EmitError>;
}

/// Writes `<root>/<package path>/<ClassName>.java`.
///
/// Each file is written to a temporary file in its target directory and
/// renamed into place, so a failed write leaves nothing behind.
#[derive(Debug, Clone)]
pub struct DirectoryEmitter {
    root: PathBuf,
}

impl DirectoryEmitter {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Path a bean will be written to.
    pub fn path_for(&self, package: Option<&str>, class_name: &str) -> PathBuf {
        let mut dir = self.root.clone();
        if let Some(package) = package {
            dir.extend(package.split('.'));
        }
        dir.join(format!("{class_name}.java"))
    }
}

impl Emitter for DirectoryEmitter {
    fn emit(
        &self,
        package: Option<&str>,
        class_name: &str,
        source: &str,
    ) -> Result<(), EmitError> {
        let path = self.path_for(package, class_name);
        let io_err = |source: std::io::Error| EmitError::Io {
            path: path.display().to_string(),
            source,
        };

        let dir = path
            .parent()
            .ok_or_else(|| EmitError::Rejected(format!("no parent directory for {path:?}")))?;
        std::fs::create_dir_all(dir).map_err(io_err)?;

        let mut file = tempfile::NamedTempFile::new_in(dir).map_err(io_err)?;
        file.write_all(source.as_bytes()).map_err(io_err)?;
        file.persist(&path).map_err(|e| io_err(e.error))?;

        debug!(path = %path.display(), "wrote bean");
        Ok(())
    }
}

/// Keeps generated sources in memory, keyed by qualified bean name.
#[derive(Debug, Default)]
pub struct MemoryEmitter {
    sources: DashMap<String, String>,
}

impl MemoryEmitter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Source of the bean with the given qualified name.
    pub fn get(&self, qualified_name: &str) -> Option<String> {
        self.sources.get(qualified_name).map(|s| s.value().clone())
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Qualified names of every emitted bean, sorted.
    pub fn keys(&self) -> Vec<String> {
        let mut keys: Vec<_> = self.sources.iter().map(|e| e.key().clone()).collect();
        keys.sort();
        keys
    }
}

impl Emitter for MemoryEmitter {
    fn emit(
        &self,
        package: Option<&str>,
        class_name: &str,
        source: &str,
    ) -> Result<(), EmitError> {
        let key = match package {
            Some(package) => format!("{package}.{class_name}"),
            None => class_name.to_string(),
        };
        self.sources.insert(key, source.to_string());
        Ok(())
    }
}

// ============================================================================
// Generator
// ============================================================================

/// Outcome of a generation pass, in catalog order.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Qualified names of beans that were emitted.
    pub generated: Vec<String>,

    /// Host types that failed, with the error.
    pub failed: Vec<(String, GenerationError)>,
}

impl GenerationReport {
    pub fn is_success(&self) -> bool {
        self.failed.is_empty()
    }

    pub fn attempted(&self) -> usize {
        self.generated.len() + self.failed.len()
    }
}

/// Runs generation passes against one emitter and diagnostics sink.
pub struct Generator<'a> {
    config: GeneratorConfig,
    emitter: &'a dyn Emitter,
    diagnostics: &'a dyn Diagnostics,
}

impl<'a> Generator<'a> {
    pub fn new(
        config: GeneratorConfig,
        emitter: &'a dyn Emitter,
        diagnostics: &'a dyn Diagnostics,
    ) -> Self {
        Self {
            config,
            emitter,
            diagnostics,
        }
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Generate a bean for every marked host type of `catalog`.
    pub fn run(&self, catalog: &Catalog) -> GenerationReport {
        let eligible: Vec<&HostType> = catalog.eligible().collect();
        debug!(
            eligible = eligible.len(),
            parallel = self.config.parallel,
            "starting generation pass"
        );

        let outcomes: Vec<(String, Result<String, GenerationError>)> = if self.config.parallel {
            eligible
                .par_iter()
                .map(|host| (host.name.clone(), self.generate_one(catalog, host)))
                .collect()
        } else {
            eligible
                .iter()
                .map(|host| (host.name.clone(), self.generate_one(catalog, host)))
                .collect()
        };

        let mut report = GenerationReport::default();
        for (name, outcome) in outcomes {
            match outcome {
                Ok(bean) => report.generated.push(bean),
                Err(err) => report.failed.push((name, err)),
            }
        }
        report
    }

    /// Generate one host type, reporting the outcome.
    ///
    /// Returns the qualified bean name on success.
    pub fn generate_one(
        &self,
        catalog: &Catalog,
        host: &HostType,
    ) -> Result<String, GenerationError> {
        self.diagnostics.report(
            Severity::Info,
            &format!("Generating bean for {}...", host.name),
            &host.name,
        );

        let result = self.pipeline(catalog, host);
        if let Err(err) = &result {
            self.diagnostics.report(
                Severity::Error,
                &format!("Failed to beanerate `{}`: {err}", host.name),
                &host.name,
            );
        }
        result
    }

    fn pipeline(&self, catalog: &Catalog, host: &HostType) -> Result<String, GenerationError> {
        let schema = extract(catalog, host, &self.config)?;
        debug!(record = %schema.qualified_name, fields = schema.fields.len(), "extracted schema");

        let fragments = Fragments::generate(&schema);
        let source = render_with_header(&schema, &fragments, &self.config.header)?;

        self.emitter
            .emit(schema.package_name.as_deref(), &fragments.bean_name, &source)?;
        Ok(schema.bean_qualified_name())
    }
}
