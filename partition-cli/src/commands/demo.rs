//! Built-in walkthrough of split, resize and remove.

use std::io::Write;
use std::path::Path;

use partition_core::config::Settings;
use partition_core::partition::{PartitionStore, SplitDirection};
use partition_core::{span_names, trace_operation};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::render;
use crate::util::load_settings;

/// Demo command handler
pub fn cmd_demo(config_path: Option<&Path>, format: OutputFormat) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let stdout = std::io::stdout();
    run(&settings, format, &mut stdout.lock())?;
    Ok(())
}

fn run(
    settings: &Settings,
    format: OutputFormat,
    out: &mut dyn Write,
) -> Result<PartitionStore, CliError> {
    let _span = trace_operation!(span_names::DEMO_RUN).entered();
    let mut store = PartitionStore::with_colors(settings.colors.build_source());

    let root_id = store.root().id;
    step(out, &store, settings, format, "Start with a single leaf")?;

    store.split(root_id, SplitDirection::Vertical);
    step(out, &store, settings, format, "Split the root side by side")?;

    let pair = store
        .root()
        .as_split()
        .ok_or_else(|| CliError::Invariant("split did not produce a pair".to_string()))?;
    let (first, second) = (pair.first.id, pair.second.id);

    store.resize(first, 30.0);
    let title = format!("Resize {} to 30%", first.short());
    step(out, &store, settings, format, &title)?;

    store.remove(second);
    let title = format!("Remove {}; {} takes the root's place", second.short(), first.short());
    step(out, &store, settings, format, &title)?;

    Ok(store)
}

fn step(
    out: &mut dyn Write,
    store: &PartitionStore,
    settings: &Settings,
    format: OutputFormat,
    title: &str,
) -> Result<(), CliError> {
    writeln!(out, "== {title} (revision {})", store.revision())?;
    out.write_all(render(store.root(), format, &settings.layout)?.as_bytes())?;
    writeln!(out)?;
    Ok(())
}
