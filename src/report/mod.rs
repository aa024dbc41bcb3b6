//! Rendering and persisting partitions

mod format;
mod checkpoint;

pub use format::{render_partition, write_partition};
pub use checkpoint::{Checkpoint, CheckpointOutcome};
