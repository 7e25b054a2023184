//! Rendering trees for the terminal.

use std::collections::HashMap;

use partition_core::config::LayoutSettings;
use partition_core::partition::{Partition, PartitionId, Point, SplitDirection, compute_layout};

use crate::cli::OutputFormat;
use crate::error::CliError;

/// Characters used to label leaves in grid output, in leaf order.
const LEAF_LABELS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Renders a tree in the requested format.
pub fn render(
    root: &Partition,
    format: OutputFormat,
    layout: &LayoutSettings,
) -> Result<String, CliError> {
    match format {
        OutputFormat::Tree => Ok(render_tree(root)),
        OutputFormat::Json => {
            let mut json = serde_json::to_string_pretty(root)?;
            json.push('\n');
            Ok(json)
        }
        OutputFormat::Grid => Ok(render_grid(root, layout)),
    }
}

/// Indented outline, one node per line.
pub fn render_tree(root: &Partition) -> String {
    let mut out = String::new();
    let mut stack = vec![(root, String::new(), String::new())];
    while let Some((node, lead, indent)) = stack.pop() {
        out.push_str(&lead);
        out.push_str(&describe(node));
        out.push('\n');
        if let Some(split) = node.as_split() {
            stack.push((&*split.second, format!("{indent}└── "), format!("{indent}    ")));
            stack.push((&*split.first, format!("{indent}├── "), format!("{indent}│   ")));
        }
    }
    out
}

/// One-line summary of a node: short ID, color, direction and size.
pub fn describe(node: &Partition) -> String {
    let mut line = format!("{} {}", node.id.short(), node.color);
    if let Some(direction) = node.direction() {
        line.push(' ');
        line.push_str(direction.as_str());
    }
    if let Some(size) = node.size {
        line.push_str(&format!(" size={size}"));
    }
    line
}

/// Draws the laid-out leaves as a character grid followed by a legend.
///
/// Each cell shows the label of the leaf under its center, or a line
/// character where a gutter runs.
pub fn render_grid(root: &Partition, layout: &LayoutSettings) -> String {
    let computed = compute_layout(root, layout.bounds(), &layout.layout_options());
    let labels: HashMap<PartitionId, char> = computed
        .leaves
        .iter()
        .enumerate()
        .map(|(index, leaf)| (leaf.id, leaf_label(index)))
        .collect();

    let mut out = String::new();
    for row in 0..layout.height {
        for col in 0..layout.width {
            let point = Point::new(f64::from(col) + 0.5, f64::from(row) + 0.5);
            let cell = if let Some(gutter) = computed.gutter_at(point) {
                match gutter.direction {
                    SplitDirection::Vertical => '│',
                    SplitDirection::Horizontal => '─',
                }
            } else if let Some(leaf) = computed.leaf_at(point) {
                labels.get(&leaf.id).copied().unwrap_or(' ')
            } else {
                ' '
            };
            out.push(cell);
        }
        out.push('\n');
    }

    for (index, leaf) in computed.leaves.iter().enumerate() {
        let color = root
            .find(leaf.id)
            .map(|node| node.color.to_string())
            .unwrap_or_default();
        out.push_str(&format!(
            "{} {} {} {:.0}x{:.0}\n",
            leaf_label(index),
            leaf.id.short(),
            color,
            leaf.rect.width,
            leaf.rect.height
        ));
    }
    out
}

fn leaf_label(index: usize) -> char {
    LEAF_LABELS.get(index).map_or('?', |&b| char::from(b))
}
