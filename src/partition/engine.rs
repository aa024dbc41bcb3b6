//! Seeding and congruence closure over a set of operation tables

use super::defect::{Defect, DefectKind};
use super::state::Partition;
use crate::algebra::Element;
use crate::tables::Operations;
use crate::Result;
use serde::{Serialize, Deserialize};
use tracing::{debug, error, info};

/// Outcome of the label fix-up after seeding
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FixupReport {
    /// Passes run, including the final pass that changed nothing
    pub passes: usize,
    /// Classes repaired in each pass
    pub repaired_per_pass: Vec<usize>,
    /// Live classes afterwards
    pub classes: usize,
}

/// A merge performed by the closure loop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MergeEvent {
    /// Zero-based search pass that found the defect
    pub pass: usize,
    /// Label that survived
    pub target: Element,
    /// Label that was absorbed and retired
    pub source: Element,
    /// The witness that forced the merge
    pub defect: Defect,
    /// Live classes after the merge
    pub classes_remaining: usize,
}

/// Outcome of a completed closure
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClosureSummary {
    /// Defect searches run, the last one finding nothing
    pub passes: usize,
    /// Merges performed
    pub merges: usize,
    /// Live classes at the fixed point
    pub final_classes: usize,
}

/// Owns a partition and drives it to a congruence of `O`
///
/// The operations are only read; the partition is only written here.
pub struct PartitionEngine<O: Operations> {
    ops: O,
    partition: Partition,
    progress_every: usize,
}

impl<O: Operations> PartitionEngine<O> {
    /// Group every element with the elements sharing its square
    ///
    /// Element `x` joins the class labelled `x * x`. A label need not be a
    /// member of its own class yet; see [`Self::fix_label_membership`].
    pub fn seed(ops: O) -> Result<Self> {
        let size = ops.universe_size();
        let partition = Partition::from_assignment(Element::range(size), |x| ops.mul(x, x))?;
        partition.validate().map_err(fatal)?;
        info!(
            classes = partition.class_count(),
            "seeded equivalence classes from shared squares"
        );
        Ok(PartitionEngine {
            ops,
            partition,
            progress_every: 0,
        })
    }

    /// Log search progress every `every` outer classes; zero disables it
    pub fn with_progress_every(mut self, every: usize) -> Self {
        self.progress_every = every;
        self
    }

    /// The operations in use
    pub fn ops(&self) -> &O {
        &self.ops
    }

    /// Current partition
    pub fn partition(&self) -> &Partition {
        &self.partition
    }

    /// Give up the engine, keeping the partition
    pub fn into_partition(self) -> Partition {
        self.partition
    }

    /// Make every live label a member of its own class
    ///
    /// For each live label `l` with `eqc[l] != l`, the class currently
    /// holding `l` is absorbed into class `l`. Absorption can move labels,
    /// so passes repeat until one repairs nothing.
    pub fn fix_label_membership(&mut self) -> Result<FixupReport> {
        let mut report = FixupReport::default();
        loop {
            let labels: Vec<Element> = self.partition.labels().collect();
            let mut checked = 0usize;
            let mut repaired = 0usize;
            for label in labels {
                if !self.partition.is_live(label) {
                    continue;
                }
                checked += 1;
                let holder = self.partition.class_of(label);
                if holder != label {
                    self.partition.merge(label, holder)?;
                    repaired += 1;
                }
            }
            self.partition.validate().map_err(fatal)?;

            report.passes += 1;
            report.repaired_per_pass.push(repaired);
            info!(
                pass = report.passes,
                checked,
                repaired,
                classes = self.partition.class_count(),
                "label fix-up pass"
            );
            if repaired == 0 {
                break;
            }
        }
        report.classes = self.partition.class_count();
        Ok(report)
    }

    /// First witness that the partition is not a congruence
    ///
    /// Search order: classes `X` smallest first, then `x1`, `x2` in `X`,
    /// then classes `Y` in registry order, then `y1`, `y2` in `Y`; the
    /// product is checked before the sum. This scan is quartic in the class
    /// sizes and dominates the running time.
    pub fn find_defect(&self) -> Option<Defect> {
        self.find_defect_in_pass(0)
    }

    fn find_defect_in_pass(&self, pass: usize) -> Option<Defect> {
        let partition = &self.partition;
        let order = partition.labels_by_size();
        let total = order.len();

        for (outer, &x_label) in order.iter().enumerate() {
            let xs = partition.members(x_label);
            if self.progress_every > 0 && outer % self.progress_every == 0 {
                debug!(
                    pass,
                    outer = outer + 1,
                    total,
                    elements = xs.len(),
                    "scanning class"
                );
            }

            for &x1 in xs {
                for &x2 in xs {
                    for y_label in partition.labels() {
                        let ys = partition.members(y_label);
                        for &y1 in ys {
                            for &y2 in ys {
                                let first = partition.class_of(self.ops.mul(x1, y1));
                                let second = partition.class_of(self.ops.mul(x2, y2));
                                if first != second {
                                    return Some(Defect {
                                        kind: DefectKind::Product,
                                        x1,
                                        x2,
                                        y1,
                                        y2,
                                        first,
                                        second,
                                    });
                                }

                                let first = partition.class_of(self.ops.add(x1, y1));
                                let second = partition.class_of(self.ops.add(x2, y2));
                                if first != second {
                                    return Some(Defect {
                                        kind: DefectKind::Sum,
                                        x1,
                                        x2,
                                        y1,
                                        y2,
                                        first,
                                        second,
                                    });
                                }
                            }
                        }
                    }
                }
            }
        }
        None
    }

    /// Absorb class `source` into class `target`, then revalidate
    pub fn merge(&mut self, target: Element, source: Element) -> Result<bool> {
        let merged = self.partition.merge(target, source)?;
        self.partition.validate().map_err(fatal)?;
        Ok(merged)
    }

    /// Merge until no defect remains
    ///
    /// `on_merge` sees the partition after every merge, which is where
    /// checkpoints are written. Class count strictly drops on each merge, so
    /// the loop ends after at most `universe_size - 1` merges.
    pub fn close<F>(&mut self, mut on_merge: F) -> Result<ClosureSummary>
    where
        F: FnMut(&Partition, &MergeEvent),
    {
        let mut summary = ClosureSummary::default();
        loop {
            let pass = summary.passes;
            summary.passes += 1;

            let Some(defect) = self.find_defect_in_pass(pass) else {
                break;
            };

            let before = self.partition.class_count();
            self.merge(defect.first, defect.second)?;
            summary.merges += 1;

            let event = MergeEvent {
                pass,
                target: defect.first,
                source: defect.second,
                defect,
                classes_remaining: self.partition.class_count(),
            };
            debug_assert!(event.classes_remaining < before);
            info!(
                pass,
                classes = event.classes_remaining,
                defect = %defect,
                "merged classes"
            );
            on_merge(&self.partition, &event);
        }

        summary.final_classes = self.partition.class_count();
        info!(
            passes = summary.passes,
            merges = summary.merges,
            classes = summary.final_classes,
            "closure reached a congruence"
        );
        Ok(summary)
    }

    /// Check the congruence property against class representatives
    ///
    /// Equivalent to the quadruple condition by transitivity: every element
    /// must behave like the first member of its class on both sides of both
    /// operations.
    pub fn is_congruence(&self) -> bool {
        let p = &self.partition;
        let size = self.ops.universe_size();
        Element::range(size).all(|x| {
            let rep = p.members(p.class_of(x))[0];
            Element::range(size).all(|y| {
                p.same_class(self.ops.mul(x, y), self.ops.mul(rep, y))
                    && p.same_class(self.ops.mul(y, x), self.ops.mul(y, rep))
                    && p.same_class(self.ops.add(x, y), self.ops.add(rep, y))
                    && p.same_class(self.ops.add(y, x), self.ops.add(y, rep))
            })
        })
    }
}

fn fatal(err: crate::RigError) -> crate::RigError {
    error!(%err, "partition invariant failed");
    err
}
