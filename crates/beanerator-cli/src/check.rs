//! `beanerator check`

use anyhow::{Context, Result};
use beanerator_core::{
    Catalog, CollectingDiagnostics, Generator, GeneratorConfig, MemoryEmitter, Severity,
};

/// Run the full pipeline against an in-memory emitter and report problems.
pub fn run(input: &str, config: GeneratorConfig) -> Result<()> {
    let catalog =
        Catalog::from_file(input).with_context(|| format!("Failed to load catalog: {input}"))?;

    println!("Checking catalog: {input}");

    let emitter = MemoryEmitter::new();
    let diagnostics = CollectingDiagnostics::new();
    let report = Generator::new(config, &emitter, &diagnostics).run(&catalog);

    for bean in &report.generated {
        println!("  ok: {bean}");
    }
    for diagnostic in diagnostics.with_severity(Severity::Error) {
        println!("  error: {}", diagnostic.message);
    }

    if !report.is_success() {
        anyhow::bail!(
            "{} of {} marked type(s) would fail",
            report.failed.len(),
            report.attempted()
        );
    }

    println!(
        "Catalog is valid: {} type(s), {} marked",
        catalog.len(),
        report.attempted()
    );
    Ok(())
}
