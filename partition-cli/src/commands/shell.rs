//! Line-oriented shell for editing a tree.

use std::fs::File;
use std::io::{self, BufRead, BufReader, IsTerminal, Write};
use std::path::Path;

use partition_core::config::Settings;
use partition_core::partition::{
    GutterDrag, PartitionAction, PartitionStore, Point, SplitDirection, compute_layout,
};
use partition_core::{span_names, trace_operation_debug};

use crate::cli::OutputFormat;
use crate::error::CliError;
use crate::format::{describe, render};
use crate::util::{find_partition, load_settings, parse_coordinate, parse_size};

const HELP: &str = "\
Commands:
  split <id> v|h            split a node side by side (v) or stacked (h)
  remove <id>               remove a node, its sibling takes the parent's place
  resize <id> <size>        set a node's size share in percent
  drag <x1> <y1> <x2> <y2>  press on the gutter at x1,y1 and release at x2,y2
  show [tree|json|grid]     print the tree
  leaves                    list the leaves
  reset                     start over with a single leaf
  help                      show this text
  quit                      leave the shell

<id> is `root`, a full ID or a unique ID prefix. Lines starting with # are ignored.
";

/// One parsed shell line
#[derive(Debug, Clone, PartialEq)]
pub enum ShellCommand {
    /// Split a node
    Split {
        /// Node as typed
        id: String,
        /// Split direction
        direction: SplitDirection,
    },
    /// Remove a node
    Remove {
        /// Node as typed
        id: String,
    },
    /// Resize a node
    Resize {
        /// Node as typed
        id: String,
        /// New size share
        size: f64,
    },
    /// Drag a gutter from one point to another
    Drag {
        /// Press position
        from: Point,
        /// Release position
        to: Point,
    },
    /// Print the tree
    Show(Option<OutputFormat>),
    /// List the leaves
    Leaves,
    /// Replace the tree with a fresh leaf
    Reset,
    /// Print the command summary
    Help,
    /// Stop reading
    Quit,
}

impl ShellCommand {
    /// Parses a line. Blank lines and comments yield `None`.
    pub fn parse(line: &str) -> Result<Option<Self>, CliError> {
        let line = line.split_once('#').map_or(line, |(before, _)| before);
        let words: Vec<&str> = line.split_whitespace().collect();
        let Some((name, args)) = words.split_first() else {
            return Ok(None);
        };

        let name = name.to_lowercase();
        let command = match (name.as_str(), args) {
            ("split", [id, direction]) => Self::Split {
                id: (*id).to_string(),
                direction: direction.parse()?,
            },
            ("remove" | "rm", [id]) => Self::Remove {
                id: (*id).to_string(),
            },
            ("resize", [id, size]) => Self::Resize {
                id: (*id).to_string(),
                size: parse_size(size)?,
            },
            ("drag", [x1, y1, x2, y2]) => Self::Drag {
                from: Point::new(parse_coordinate(x1)?, parse_coordinate(y1)?),
                to: Point::new(parse_coordinate(x2)?, parse_coordinate(y2)?),
            },
            ("show", []) => Self::Show(None),
            ("show", [format]) => Self::Show(Some(format.parse().map_err(CliError::Command)?)),
            ("leaves", []) => Self::Leaves,
            ("reset", []) => Self::Reset,
            ("help" | "?", []) => Self::Help,
            ("quit" | "exit", []) => Self::Quit,
            ("split" | "remove" | "rm" | "resize" | "drag" | "show" | "leaves" | "reset"
            | "help" | "?" | "quit" | "exit", _) => {
                return Err(CliError::Command(format!("wrong arguments for '{name}', try 'help'")));
            }
            _ => return Err(CliError::Command(format!("unknown command '{name}', try 'help'"))),
        };
        Ok(Some(command))
    }
}

/// Whether the shell keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next line
    Continue,
    /// Stop
    Quit,
}

/// A store plus the settings the shell renders and drags with
pub struct ShellSession {
    store: PartitionStore,
    settings: Settings,
    format: OutputFormat,
}

impl ShellSession {
    /// Creates a session with a single-leaf tree.
    pub fn new(settings: Settings, format: OutputFormat) -> Self {
        let store = PartitionStore::with_colors(settings.colors.build_source());
        Self {
            store,
            settings,
            format,
        }
    }

    /// Returns the store being edited.
    pub const fn store(&self) -> &PartitionStore {
        &self.store
    }

    /// Runs one command, writing its output to `out`.
    pub fn execute(&mut self, command: ShellCommand, out: &mut dyn Write) -> Result<Flow, CliError> {
        match command {
            ShellCommand::Split { id, direction } => {
                let target = find_partition(self.store.root(), &id)?;
                self.apply(PartitionAction::Split { target, direction }, out)?;
            }
            ShellCommand::Remove { id } => {
                let target = find_partition(self.store.root(), &id)?;
                self.apply(PartitionAction::Remove { target }, out)?;
            }
            ShellCommand::Resize { id, size } => {
                let target = find_partition(self.store.root(), &id)?;
                self.apply(PartitionAction::Resize { target, size }, out)?;
            }
            ShellCommand::Drag { from, to } => {
                let action = self.drag_action(from, to)?;
                self.apply(action, out)?;
            }
            ShellCommand::Show(format) => {
                let format = format.unwrap_or(self.format);
                let text = render(self.store.root(), format, &self.settings.layout)?;
                out.write_all(text.as_bytes())?;
            }
            ShellCommand::Leaves => {
                let root = self.store.root();
                for id in root.leaf_ids() {
                    if let Some(leaf) = root.find(id) {
                        writeln!(out, "{id}  {}", describe(leaf))?;
                    }
                }
            }
            ShellCommand::Reset => {
                self.store.reset();
                writeln!(out, "reset (revision {})", self.store.revision())?;
            }
            ShellCommand::Help => out.write_all(HELP.as_bytes())?,
            ShellCommand::Quit => return Ok(Flow::Quit),
        }
        Ok(Flow::Continue)
    }

    fn drag_action(&self, from: Point, to: Point) -> Result<PartitionAction, CliError> {
        let layout_settings = &self.settings.layout;
        let layout = compute_layout(
            self.store.root(),
            layout_settings.bounds(),
            &layout_settings.layout_options(),
        );
        let no_gutter = || CliError::NoGutter(format!("{},{}", from.x, from.y));
        let gutter = layout.gutter_at(from).ok_or_else(no_gutter)?;
        let drag = GutterDrag::begin(self.store.root(), gutter.parent, gutter.parent_rect)
            .ok_or_else(no_gutter)?;
        drag.update(to, &layout_settings.snap_policy())
            .ok_or_else(no_gutter)
    }

    fn apply(&mut self, action: PartitionAction, out: &mut dyn Write) -> Result<(), CliError> {
        let target = action.target().short();
        if self.store.dispatch(action) {
            match action {
                PartitionAction::Split { direction, .. } => {
                    writeln!(out, "split {target} {direction} (revision {})", self.store.revision())?;
                }
                PartitionAction::Remove { .. } => {
                    writeln!(out, "remove {target} (revision {})", self.store.revision())?;
                }
                PartitionAction::Resize { size, .. } => {
                    writeln!(out, "resize {target} {size} (revision {})", self.store.revision())?;
                }
            }
        } else {
            writeln!(out, "{} {target}: no change", action.name())?;
        }
        Ok(())
    }

    /// Runs a script, stopping at the first failing line.
    pub fn run_script<R: BufRead>(&mut self, reader: R, out: &mut dyn Write) -> Result<(), CliError> {
        for (index, line) in reader.lines().enumerate() {
            let line = line?;
            let number = index + 1;
            let _span = trace_operation_debug!(span_names::SHELL_COMMAND, line = number).entered();

            let at_line = |source: CliError| CliError::Script {
                line: number,
                source: Box::new(source),
            };
            let Some(command) = ShellCommand::parse(&line).map_err(at_line)? else {
                continue;
            };
            if self.execute(command, out).map_err(at_line)? == Flow::Quit {
                break;
            }
        }
        Ok(())
    }

    /// Reads commands until end of input or `quit`, reporting failures and
    /// carrying on.
    pub fn run_interactive<R: BufRead>(
        &mut self,
        mut reader: R,
        out: &mut dyn Write,
        prompt: bool,
    ) -> Result<(), CliError> {
        let mut line = String::new();
        let mut number = 0usize;
        loop {
            if prompt {
                write!(out, "> ")?;
                out.flush()?;
            }
            line.clear();
            if reader.read_line(&mut line)? == 0 {
                break;
            }
            number += 1;
            let _span = trace_operation_debug!(span_names::SHELL_COMMAND, line = number).entered();

            let result = ShellCommand::parse(&line).and_then(|command| match command {
                Some(command) => self.execute(command, out),
                None => Ok(Flow::Continue),
            });
            match result {
                Ok(Flow::Quit) => break,
                Ok(Flow::Continue) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "Shell command failed");
                    eprintln!("Error: {e}");
                }
            }
        }
        Ok(())
    }
}

/// Shell command handler
pub fn cmd_shell(
    config_path: Option<&Path>,
    format: OutputFormat,
    script: Option<&Path>,
) -> Result<(), CliError> {
    let settings = load_settings(config_path)?;
    let mut session = ShellSession::new(settings, format);
    let stdout = io::stdout();
    let mut out = stdout.lock();

    match script {
        Some(path) => {
            let file = File::open(path)?;
            session.run_script(BufReader::new(file), &mut out)
        }
        None => {
            let stdin = io::stdin();
            let prompt = stdin.is_terminal();
            session.run_interactive(stdin.lock(), &mut out, prompt)
        }
    }
}
