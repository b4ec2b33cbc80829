//! `beanerator generate`

use anyhow::{Context, Result};
use beanerator_core::{Catalog, DirectoryEmitter, Generator, GeneratorConfig, TracingDiagnostics};
use tracing::{debug, info};

/// Generate every marked record of `input` into the configured directory.
///
/// Fails after the whole batch has run if any type failed.
pub fn run(input: &str, config: GeneratorConfig) -> Result<()> {
    let catalog =
        Catalog::from_file(input).with_context(|| format!("Failed to load catalog: {input}"))?;

    debug!(catalog = input, types = catalog.len(), "loaded catalog");

    let emitter = DirectoryEmitter::new(config.output_dir.clone());
    info!(
        output = %emitter.root().display(),
        parallel = config.parallel,
        "generating beans"
    );
    let diagnostics = TracingDiagnostics;
    let report = Generator::new(config, &emitter, &diagnostics).run(&catalog);

    println!(
        "Generated {} bean(s) into {}",
        report.generated.len(),
        emitter.root().display()
    );
    for bean in &report.generated {
        println!("  {bean}");
    }

    if !report.is_success() {
        for (name, err) in &report.failed {
            eprintln!("  failed: {name} ({} stage): {err}", err.stage());
        }
        anyhow::bail!(
            "{} of {} type(s) failed to generate",
            report.failed.len(),
            report.attempted()
        );
    }

    Ok(())
}
