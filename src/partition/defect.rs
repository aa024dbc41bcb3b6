//! Witnesses that a partition is not yet a congruence

use crate::algebra::Element;
use std::fmt;
use serde::{Serialize, Deserialize};

/// Which operation the witness breaks
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DefectKind {
    /// `x1 * y1` and `x2 * y2` land in different classes
    Product,
    /// `x1 + y1` and `x2 + y2` land in different classes
    Sum,
}

/// A quadruple with `x1 ≡ x2`, `y1 ≡ y2` whose results disagree
///
/// `first` is the class of the `(x1, y1)` result, `second` the class of the
/// `(x2, y2)` result; resolving the defect absorbs `second` into `first`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Defect {
    /// Broken operation
    pub kind: DefectKind,
    /// Left operand of the first application
    pub x1: Element,
    /// Left operand of the second application, same class as `x1`
    pub x2: Element,
    /// Right operand of the first application
    pub y1: Element,
    /// Right operand of the second application, same class as `y1`
    pub y2: Element,
    /// Class label of the first result
    pub first: Element,
    /// Class label of the second result
    pub second: Element,
}

impl fmt::Display for Defect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let op = match self.kind {
            DefectKind::Product => "*",
            DefectKind::Sum => "+",
        };
        write!(
            f,
            "{}{}{} vs {}{}{} (classes {} and {})",
            self.x1.tuple().parenthesized(),
            op,
            self.y1.tuple().parenthesized(),
            self.x2.tuple().parenthesized(),
            op,
            self.y2.tuple().parenthesized(),
            self.first.index(),
            self.second.index()
        )
    }
}
