//! Canonical element indices

use super::monomial::MONOMIAL_COUNT;
use super::tuple::Tuple;
use std::fmt;
use serde::{Serialize, Deserialize};

/// Number of canonical elements, `4^7`
pub const ELEMENT_COUNT: usize = 1 << (2 * MONOMIAL_COUNT);

/// A canonical reduced element, addressed by its base-4 index
///
/// Elements also serve as class labels inside the partition engine, so the
/// type is used for any finite universe smaller than [`ELEMENT_COUNT`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Element(u16);

impl Element {
    /// The empty sum
    pub const ZERO: Element = Element(0);

    /// The unit `1`
    pub const ONE: Element = Element(1);

    /// Element with the given index, if it is in range
    pub fn new(index: usize) -> Option<Element> {
        if index < ELEMENT_COUNT {
            Some(Element(index as u16))
        } else {
            None
        }
    }

    /// Encode a tuple
    pub fn from_tuple(tuple: &Tuple) -> Element {
        Element(tuple.to_index())
    }

    /// Decode into coefficients
    pub fn tuple(self) -> Tuple {
        Tuple::from_index(self.0)
    }

    /// Integer index
    pub fn index(self) -> usize {
        usize::from(self.0)
    }

    /// Raw 16-bit value, as stored in the operation tables
    pub fn raw(self) -> u16 {
        self.0
    }

    /// Element from a raw table entry
    pub(crate) fn from_raw(raw: u16) -> Element {
        Element(raw)
    }

    /// Every element of a universe of `size` elements, ascending
    pub fn range(size: usize) -> impl Iterator<Item = Element> + Clone {
        (0..size.min(ELEMENT_COUNT) as u16).map(Element)
    }

    /// All 16384 canonical elements, ascending
    pub fn all() -> impl Iterator<Item = Element> + Clone {
        Self::range(ELEMENT_COUNT)
    }

    /// Product computed from tuples
    pub fn multiply(self, rhs: Element) -> Element {
        Element::from_tuple(&self.tuple().multiply(&rhs.tuple()))
    }

    /// Sum computed from tuples
    pub fn add(self, rhs: Element) -> Element {
        Element::from_tuple(&self.tuple().add(&rhs.tuple()))
    }
}

impl From<Tuple> for Element {
    fn from(tuple: Tuple) -> Self {
        Element::from_tuple(&tuple)
    }
}

impl fmt::Display for Element {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.tuple(), f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::algebra::Monomial;
    use proptest::prelude::*;

    #[test]
    fn test_bounds() {
        assert_eq!(ELEMENT_COUNT, 16384);
        assert!(Element::new(ELEMENT_COUNT - 1).is_some());
        assert!(Element::new(ELEMENT_COUNT).is_none());
        assert_eq!(Element::all().count(), ELEMENT_COUNT);
        assert_eq!(Element::range(5).last(), Element::new(4));
    }

    #[test]
    fn test_constants() {
        assert_eq!(Element::ZERO.tuple(), Tuple::ZERO);
        assert_eq!(Element::ONE.tuple(), Tuple::ONE);
        assert_eq!(Element::ONE.to_string(), "1");
        assert_eq!(Element::from(Tuple::monomial(Monomial::AB)).to_string(), "ab");
    }

    #[test]
    fn test_identities_over_every_element() {
        for x in Element::all() {
            assert_eq!(Element::ONE.multiply(x), x);
            assert_eq!(x.multiply(Element::ONE), x);
            assert_eq!(Element::ZERO.add(x), x);
            assert_eq!(Element::ZERO.multiply(x), Element::ZERO);
            assert_eq!(Element::from_tuple(&x.tuple()), x);
        }
    }

    #[test]
    fn test_first_elements_print() {
        let printed: Vec<String> = Element::range(6).map(|e| e.to_string()).collect();
        assert_eq!(printed, vec!["0", "1", "2", "3", "a", "1+a"]);
    }

    proptest! {
        #[test]
        fn prop_addition_commutes(x in 0..ELEMENT_COUNT, y in 0..ELEMENT_COUNT) {
            let (x, y) = (Element::new(x).unwrap(), Element::new(y).unwrap());
            prop_assert_eq!(x.add(y), y.add(x));
        }
    }
}
