//! `beanerator preview`

use anyhow::{Context, Result};
use beanerator_core::{Catalog, Fragments, GeneratorConfig, extract, render::render_with_header};

/// Print the bean for `type_name` to stdout without writing anything.
pub fn run(input: &str, type_name: &str, config: GeneratorConfig) -> Result<()> {
    let catalog =
        Catalog::from_file(input).with_context(|| format!("Failed to load catalog: {input}"))?;

    let host = catalog
        .get(type_name)
        .with_context(|| format!("Type not found in catalog: {type_name}"))?;
    if !host.is_marked() {
        anyhow::bail!("Type is not marked with `beanerate`: {type_name}");
    }

    let schema = extract(&catalog, host, &config)
        .with_context(|| format!("Failed to extract record: {type_name}"))?;
    let fragments = Fragments::generate(&schema);
    let source = render_with_header(&schema, &fragments, &config.header)
        .with_context(|| format!("Failed to render bean for: {type_name}"))?;

    print!("{source}");
    Ok(())
}
