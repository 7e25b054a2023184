//! Randomized edit runs with invariant checks after every step.

use std::io::Write;
use std::path::Path;

use partition_core::config::Settings;
use partition_core::partition::{
    Partition, PartitionAction, PartitionId, PartitionStore, SplitDirection,
};
use partition_core::{span_names, trace_operation};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::render;
use crate::util::load_settings;

/// Outcome of a random run
pub struct RandomRun {
    /// Seed the run used
    pub seed: u64,
    /// Edits applied
    pub applied: usize,
    /// Edits that changed the tree
    pub committed: usize,
    /// The store after the last edit
    pub store: PartitionStore,
}

/// Random command handler
pub fn cmd_random(
    config_path: Option<&Path>,
    format: OutputFormat,
    ops: usize,
    seed: Option<u64>,
) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let seed = seed.unwrap_or_else(rand::random);
    let result = run(&settings, ops, seed)?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    let root = result.store.root();
    writeln!(
        out,
        "seed {}: {} edits, {} committed, {} leaves, depth {}",
        result.seed,
        result.applied,
        result.committed,
        root.leaf_count(),
        root.depth()
    )?;
    out.write_all(render(root, format, &settings.layout)?.as_bytes())?;
    Ok(())
}

/// Applies `ops` random edits, checking the tree after each one.
pub fn run(settings: &Settings, ops: usize, seed: u64) -> Result<RandomRun, CliError> {
    let _span = trace_operation!(span_names::RANDOM_RUN, seed, ops).entered();
    let mut rng = StdRng::seed_from_u64(seed);
    let mut store = PartitionStore::with_colors(settings.colors.build_source());
    let mut committed = 0;

    for step in 1..=ops {
        let action = random_action(&mut rng, store.root());
        if store.dispatch(action) {
            committed += 1;
        }
        check_tree(store.root()).map_err(|reason| {
            CliError::Invariant(format!(
                "after step {step} ({} {}): {reason}",
                action.name(),
                action.target().short()
            ))
        })?;
    }

    tracing::info!(seed, applied = ops, committed, "Random run finished");
    Ok(RandomRun {
        seed,
        applied: ops,
        committed,
        store,
    })
}

/// Picks an edit on a random node; one in twenty targets an unknown ID.
fn random_action(rng: &mut StdRng, root: &Partition) -> PartitionAction {
    let target = if rng.random_ratio(1, 20) {
        PartitionId::new()
    } else {
        let ids = root.ids();
        ids[rng.random_range(0..ids.len())]
    };
    match rng.random_range(0..10) {
        0..=4 => PartitionAction::Split {
            target,
            direction: if rng.random_bool(0.5) {
                SplitDirection::Vertical
            } else {
                SplitDirection::Horizontal
            },
        },
        5..=7 => PartitionAction::Resize {
            target,
            size: rng.random_range(0.0..=100.0),
        },
        _ => PartitionAction::Remove { target },
    }
}

/// Checks the invariants every tree must satisfy.
fn check_tree(root: &Partition) -> Result<(), String> {
    root.check_invariants().map_err(|e| e.to_string())?;
    let (nodes, leaves) = (root.node_count(), root.leaf_count());
    if nodes != 2 * leaves - 1 {
        return Err(format!("{nodes} nodes for {leaves} leaves"));
    }
    let mut bad_size = None;
    root.visit(&mut |node, _| {
        if node.size.is_some_and(|size| !size.is_finite()) {
            bad_size = Some(node.id);
        }
    });
    match bad_size {
        Some(id) => Err(format!("non-finite size on {}", id.short())),
        None => Ok(()),
    }
}
