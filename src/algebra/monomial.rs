//! The seven basis monomials and their fixed multiplication table

use std::fmt;
use serde::{Serialize, Deserialize};

/// Number of basis monomials
pub const MONOMIAL_COUNT: usize = 7;

/// A basis word in the generators `a` and `b`
///
/// Idempotence collapses every longer word onto one of these seven,
/// e.g. `abab = (ab)(ab) = ab`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Monomial {
    /// The unit
    One,
    /// Generator `a`
    A,
    /// Generator `b`
    B,
    /// `ab`
    AB,
    /// `ba`
    BA,
    /// `aba`
    ABA,
    /// `bab`
    BAB,
}

/// Product table by slot: `PRODUCT_TABLE[i][j]` is the slot of `m_i * m_j`
pub const PRODUCT_TABLE: [[usize; MONOMIAL_COUNT]; MONOMIAL_COUNT] = [
    [0, 1, 2, 3, 4, 5, 6],
    [1, 1, 3, 3, 5, 5, 3],
    [2, 4, 2, 6, 4, 4, 6],
    [3, 5, 3, 3, 5, 5, 3],
    [4, 4, 6, 6, 4, 4, 6],
    [5, 5, 3, 3, 5, 5, 3],
    [6, 4, 6, 6, 4, 4, 6],
];

impl Monomial {
    /// All monomials in slot order
    pub const ALL: [Monomial; MONOMIAL_COUNT] = [
        Monomial::One,
        Monomial::A,
        Monomial::B,
        Monomial::AB,
        Monomial::BA,
        Monomial::ABA,
        Monomial::BAB,
    ];

    /// Coefficient slot of this monomial within a tuple
    pub fn slot(self) -> usize {
        self as usize
    }

    /// Monomial occupying a tuple slot
    pub fn from_slot(slot: usize) -> Option<Monomial> {
        Self::ALL.get(slot).copied()
    }

    /// Printed symbol
    pub fn symbol(self) -> &'static str {
        match self {
            Monomial::One => "1",
            Monomial::A => "a",
            Monomial::B => "b",
            Monomial::AB => "ab",
            Monomial::BA => "ba",
            Monomial::ABA => "aba",
            Monomial::BAB => "bab",
        }
    }

    /// Reduced product of two monomials
    pub fn mul(self, rhs: Monomial) -> Monomial {
        Self::ALL[PRODUCT_TABLE[self.slot()][rhs.slot()]]
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Render the monomial multiplication table as a text grid
pub fn product_table_text() -> String {
    let mut out = String::from("     ");
    for m in Monomial::ALL {
        out.push_str(&format!("{:>5}", m.symbol()));
    }
    out.push_str("\n     ");
    for _ in Monomial::ALL {
        out.push_str("  ===");
    }
    out.push('\n');
    for lhs in Monomial::ALL {
        out.push_str(&format!("{:>4}|", lhs.symbol()));
        for rhs in Monomial::ALL {
            out.push_str(&format!("{:>5}", lhs.mul(rhs).symbol()));
        }
        out.push('\n');
    }
    out
}
