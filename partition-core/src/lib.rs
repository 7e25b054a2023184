//! Partition Core Library
//!
//! This crate provides a recursively splittable rectangular layout held as
//! an immutable binary space-partition tree, together with the settings,
//! logging and geometry support needed to drive it from a frontend.
//!
//! # Crate Structure
//!
//! - [`partition`] - The tree, its edit operations and the store/dispatcher
//! - [`config`] - Application settings and persistence
//! - [`error`] - Error types shared by the layers around the tree
//! - [`tracing`] - Structured logging setup

// Enable missing_docs warning for public API documentation
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod partition;
pub mod tracing;

pub use config::{ConfigManager, Settings};
pub use error::{ConfigError, CoreError, Result};
pub use partition::{
    Color, ColorPool, ColorSource, GutterDrag, Partition, PartitionAction, PartitionError,
    PartitionId, PartitionKind, PartitionStore, RandomColors, SnapPolicy, SplitDirection,
};
pub use tracing::{
    LOG_TARGETS, TracingConfig, TracingError, TracingLevel, TracingOutput, init_tracing, span_names,
};
