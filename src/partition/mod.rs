//! Equivalence classes of elements and the closure that turns them into a congruence

mod state;
mod defect;
mod engine;

pub use state::{Partition, EquivalenceClass};
pub use defect::{Defect, DefectKind};
pub use engine::{PartitionEngine, FixupReport, MergeEvent, ClosureSummary};
