//! Class arena, live-label registry and membership map

use crate::algebra::Element;
use crate::{RigError, Result};
use std::collections::BTreeSet;

/// Members of one equivalence class, in absorption order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EquivalenceClass {
    members: Vec<Element>,
}

impl EquivalenceClass {
    /// Members in the order they joined
    pub fn members(&self) -> &[Element] {
        &self.members
    }

    /// Number of members
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Check if the class holds no elements (retired or never born)
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// A partition of the elements `0..universe_size` into disjoint classes
///
/// - Classes live in an arena indexed by their label, itself an element
/// - `registry` holds the live labels; traversal is ascending
/// - `eqc[e]` is the label of the class containing `e`
///
/// Classes only ever grow by absorbing another class whole.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Partition {
    classes: Vec<EquivalenceClass>,
    registry: BTreeSet<Element>,
    eqc: Vec<Element>,
}

impl Partition {
    /// Every element in a class of its own
    pub fn discrete(size: usize) -> Self {
        let elements: Vec<Element> = Element::range(size).collect();
        Partition {
            classes: elements
                .iter()
                .map(|&x| EquivalenceClass { members: vec![x] })
                .collect(),
            registry: elements.iter().copied().collect(),
            eqc: elements,
        }
    }

    /// Place each element in the class labelled by `label_of(element)`
    ///
    /// `elements` must enumerate the universe `0..n` in order; every label
    /// must lie in the same universe.
    pub fn from_assignment<I, F>(elements: I, mut label_of: F) -> Result<Self>
    where
        I: IntoIterator<Item = Element>,
        F: FnMut(Element) -> Element,
    {
        let elements: Vec<Element> = elements.into_iter().collect();
        let size = elements.len();
        let mut classes = vec![EquivalenceClass::default(); size];
        let mut registry = BTreeSet::new();
        let mut eqc = Vec::with_capacity(size);

        for (i, x) in elements.into_iter().enumerate() {
            if x.index() != i {
                return Err(RigError::InvariantViolation(format!(
                    "element {} enumerated at position {}",
                    x.index(),
                    i
                )));
            }
            let label = label_of(x);
            if label.index() >= size {
                return Err(RigError::InvariantViolation(format!(
                    "label {} of element {} outside universe of {}",
                    label.index(),
                    x.index(),
                    size
                )));
            }
            classes[label.index()].members.push(x);
            registry.insert(label);
            eqc.push(label);
        }

        Ok(Partition { classes, registry, eqc })
    }

    /// Number of elements partitioned
    pub fn universe_size(&self) -> usize {
        self.eqc.len()
    }

    /// Number of live classes
    pub fn class_count(&self) -> usize {
        self.registry.len()
    }

    /// Label of the class containing `e`
    #[inline]
    pub fn class_of(&self, e: Element) -> Element {
        self.eqc[e.index()]
    }

    /// Check if two elements share a class
    pub fn same_class(&self, a: Element, b: Element) -> bool {
        self.class_of(a) == self.class_of(b)
    }

    /// Check if `label` addresses a live class
    pub fn is_live(&self, label: Element) -> bool {
        self.registry.contains(&label)
    }

    /// Members of the class labelled `label`; empty if the label is retired
    #[inline]
    pub fn members(&self, label: Element) -> &[Element] {
        self.classes
            .get(label.index())
            .map(EquivalenceClass::members)
            .unwrap_or(&[])
    }

    /// Live labels in registry order
    pub fn labels(&self) -> impl Iterator<Item = Element> + '_ {
        self.registry.iter().copied()
    }

    /// Live classes in registry order
    pub fn classes(&self) -> impl Iterator<Item = (Element, &[Element])> + '_ {
        self.labels().map(move |label| (label, self.members(label)))
    }

    /// Snapshot of live labels, smallest class first
    ///
    /// The sort is stable, so equal sizes keep registry order.
    pub fn labels_by_size(&self) -> Vec<Element> {
        let mut labels: Vec<Element> = self.labels().collect();
        labels.sort_by_key(|&label| self.classes[label.index()].len());
        labels
    }

    /// Every class with members ascending, classes ordered by their minimum
    pub fn canonical_classes(&self) -> Vec<Vec<Element>> {
        let mut out: Vec<Vec<Element>> = self
            .classes()
            .map(|(_, members)| {
                let mut sorted = members.to_vec();
                sorted.sort_unstable();
                sorted
            })
            .collect();
        out.sort_unstable_by_key(|members| members[0]);
        out
    }

    /// Absorb class `source` into class `target`
    ///
    /// Returns `Ok(false)` when both labels already name the same class.
    pub fn merge(&mut self, target: Element, source: Element) -> Result<bool> {
        if target == source {
            return Ok(false);
        }
        for label in [target, source] {
            if !self.is_live(label) {
                return Err(RigError::InvariantViolation(format!(
                    "merge of retired class label {}",
                    label.index()
                )));
            }
        }

        let moved = std::mem::take(&mut self.classes[source.index()].members);
        for &z in &moved {
            self.eqc[z.index()] = target;
        }
        self.classes[target.index()].members.extend(moved);
        self.registry.remove(&source);
        Ok(true)
    }

    /// Verify the membership map against the class arena
    ///
    /// Checks every member of every live class points back at its label, no
    /// live class is empty, and the live classes cover the universe exactly.
    pub fn validate(&self) -> Result<()> {
        let mut total = 0usize;
        for (label, members) in self.classes() {
            if members.is_empty() {
                return Err(RigError::InvariantViolation(format!(
                    "live class {} is empty",
                    label.index()
                )));
            }
            if let Some(stray) = members.iter().find(|&&e| self.class_of(e) != label) {
                return Err(RigError::InvariantViolation(format!(
                    "element {} listed in class {} but mapped to {}",
                    stray.index(),
                    label.index(),
                    self.class_of(*stray).index()
                )));
            }
            total += members.len();
        }
        if total != self.universe_size() {
            return Err(RigError::InvariantViolation(format!(
                "classes hold {} elements, universe has {}",
                total,
                self.universe_size()
            )));
        }
        Ok(())
    }
}
