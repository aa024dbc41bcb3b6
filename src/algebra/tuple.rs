//! Coefficient tuples over the monomial basis

use super::monomial::{Monomial, MONOMIAL_COUNT, PRODUCT_TABLE};
use std::fmt;
use serde::{Serialize, Deserialize};

/// Largest coefficient a reduced tuple carries
pub const MAX_COEFF: u8 = 3;

/// Collapse an accumulated coefficient back into `0..=3`
///
/// `(1+1)^2 = 1+1` forces `4 = 2`, hence `5 = 3`, `6 = 2`, and so on.
pub fn normalize_coeff(c: u32) -> u8 {
    if c >= 4 {
        2 + (c % 2) as u8
    } else {
        c as u8
    }
}

/// A formal sum of monomials with reduced coefficients
///
/// Slot `i` holds the coefficient of `Monomial::ALL[i]`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Tuple([u8; MONOMIAL_COUNT]);

impl Tuple {
    /// The all-zero tuple
    pub const ZERO: Tuple = Tuple([0; MONOMIAL_COUNT]);

    /// The unit `1`
    pub const ONE: Tuple = Tuple([1, 0, 0, 0, 0, 0, 0]);

    /// Build a tuple, normalizing every coefficient
    pub fn new(coeffs: [u32; MONOMIAL_COUNT]) -> Self {
        let mut out = [0u8; MONOMIAL_COUNT];
        for (slot, c) in coeffs.iter().enumerate() {
            out[slot] = normalize_coeff(*c);
        }
        Tuple(out)
    }

    /// A single monomial with coefficient 1
    pub fn monomial(m: Monomial) -> Self {
        let mut out = Tuple::ZERO;
        out.0[m.slot()] = 1;
        out
    }

    /// Coefficients in slot order
    pub fn coeffs(&self) -> &[u8; MONOMIAL_COUNT] {
        &self.0
    }

    /// Coefficient of one monomial
    pub fn coefficient(&self, m: Monomial) -> u8 {
        self.0[m.slot()]
    }

    /// Check if every coefficient is zero
    pub fn is_zero(&self) -> bool {
        self.0.iter().all(|&c| c == 0)
    }

    /// Componentwise sum
    pub fn add(&self, other: &Tuple) -> Tuple {
        let mut out = [0u8; MONOMIAL_COUNT];
        for slot in 0..MONOMIAL_COUNT {
            out[slot] = normalize_coeff(u32::from(self.0[slot]) + u32::from(other.0[slot]));
        }
        Tuple(out)
    }

    /// Bilinear product through the monomial table
    pub fn multiply(&self, other: &Tuple) -> Tuple {
        let mut acc = [0u32; MONOMIAL_COUNT];
        for (i, &ci) in self.0.iter().enumerate() {
            if ci == 0 {
                continue;
            }
            for (j, &cj) in other.0.iter().enumerate() {
                acc[PRODUCT_TABLE[i][j]] += u32::from(ci) * u32::from(cj);
            }
        }
        Tuple::new(acc)
    }

    /// Base-4 encoding, slot `i` in bit-pair `i`
    pub fn to_index(&self) -> u16 {
        self.0
            .iter()
            .enumerate()
            .fold(0u16, |acc, (slot, &c)| acc | (u16::from(c) << (2 * slot)))
    }

    /// Decode a base-4 index; bits above the seventh digit are ignored
    pub fn from_index(index: u16) -> Tuple {
        let mut out = [0u8; MONOMIAL_COUNT];
        for (slot, c) in out.iter_mut().enumerate() {
            *c = ((index >> (2 * slot)) & 0x3) as u8;
        }
        Tuple(out)
    }

    /// Wrap the expression in parentheses when displayed
    pub fn parenthesized(&self) -> Parenthesized<'_> {
        Parenthesized(self)
    }
}

impl From<[u8; MONOMIAL_COUNT]> for Tuple {
    fn from(coeffs: [u8; MONOMIAL_COUNT]) -> Self {
        Tuple::new(coeffs.map(u32::from))
    }
}

/// Algebraic expression: `2+a+3ab`, or `0` for the empty sum
impl fmt::Display for Tuple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut need_plus = false;
        for (m, &c) in Monomial::ALL.iter().zip(self.0.iter()) {
            if c == 0 {
                continue;
            }
            if need_plus {
                f.write_str("+")?;
            }
            match m {
                Monomial::One => write!(f, "{}", c)?,
                _ if c == 1 => write!(f, "{}", m)?,
                _ => write!(f, "{}{}", c, m)?,
            }
            need_plus = true;
        }
        if !need_plus {
            f.write_str("0")?;
        }
        Ok(())
    }
}

/// Display adapter produced by [`Tuple::parenthesized`]
pub struct Parenthesized<'a>(&'a Tuple);

impl fmt::Display for Parenthesized<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_tuple() -> impl Strategy<Value = Tuple> {
        prop::array::uniform7(0u8..=MAX_COEFF).prop_map(Tuple::from)
    }

    #[test]
    fn test_normalize_coeff() {
        for c in 0..=3 {
            assert_eq!(normalize_coeff(c), c as u8);
        }
        assert_eq!(normalize_coeff(4), 2);
        assert_eq!(normalize_coeff(5), 3);
        assert_eq!(normalize_coeff(6), 2);
        assert_eq!(normalize_coeff(7), 3);
        assert_eq!(normalize_coeff(18), 2);
    }

    #[test]
    fn test_square_of_a_plus_b() {
        let a_plus_b = Tuple::from([0, 1, 1, 0, 0, 0, 0]);
        let square = a_plus_b.multiply(&a_plus_b);
        assert_eq!(square, Tuple::from([0, 1, 1, 1, 1, 0, 0]));
        assert_eq!(square.to_string(), "a+b+ab+ba");
        assert_eq!(a_plus_b.parenthesized().to_string(), "(a+b)");
    }

    #[test]
    fn test_one_plus_one_squared() {
        let two = Tuple::from([2, 0, 0, 0, 0, 0, 0]);
        assert_eq!(two.multiply(&two), two);
        let three = Tuple::from([3, 0, 0, 0, 0, 0, 0]);
        assert_eq!(three.multiply(&three), three);
    }

    #[test]
    fn test_display() {
        assert_eq!(Tuple::ZERO.to_string(), "0");
        assert_eq!(Tuple::ZERO.parenthesized().to_string(), "(0)");
        assert_eq!(Tuple::ONE.to_string(), "1");
        assert_eq!(Tuple::from([2, 0, 0, 3, 0, 1, 0]).to_string(), "2+3ab+aba");
        assert_eq!(Tuple::monomial(Monomial::BAB).to_string(), "bab");
    }

    #[test]
    fn test_index_layout() {
        assert_eq!(Tuple::ONE.to_index(), 1);
        assert_eq!(Tuple::monomial(Monomial::A).to_index(), 4);
        assert_eq!(Tuple::monomial(Monomial::BAB).to_index(), 1 << 12);
        assert_eq!(Tuple::from([3; 7]).to_index(), (1 << 14) - 1);
    }

    #[test]
    fn test_every_index_round_trips() {
        for index in 0..(1u16 << 14) {
            assert_eq!(Tuple::from_index(index).to_index(), index);
        }
    }

    proptest! {
        #[test]
        fn prop_tuple_round_trips(t in arb_tuple()) {
            prop_assert_eq!(Tuple::from_index(t.to_index()), t);
        }

        #[test]
        fn prop_addition_commutes(x in arb_tuple(), y in arb_tuple()) {
            prop_assert_eq!(x.add(&y), y.add(&x));
        }

        #[test]
        fn prop_unit_and_zero(x in arb_tuple()) {
            prop_assert_eq!(Tuple::ONE.multiply(&x), x);
            prop_assert_eq!(x.multiply(&Tuple::ONE), x);
            prop_assert_eq!(Tuple::ZERO.add(&x), x);
            prop_assert_eq!(Tuple::ZERO.multiply(&x), Tuple::ZERO);
        }
    }
}
