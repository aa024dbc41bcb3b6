//! Product and sum lookup over a finite universe of elements

mod dense;

pub use dense::OperationTables;

use crate::algebra::{Element, ELEMENT_COUNT};

/// Total binary operations on the elements `0..universe_size()`
///
/// The partition engine only ever reads through this trait. Every result
/// must itself lie in `0..universe_size()`.
pub trait Operations {
    /// Number of elements in the universe
    fn universe_size(&self) -> usize;

    /// Product `x * y`
    fn mul(&self, x: Element, y: Element) -> Element;

    /// Sum `x + y`
    fn add(&self, x: Element, y: Element) -> Element;
}

/// The rig operations computed on demand from coefficient tuples
///
/// Gives the same answers as [`OperationTables::for_rig`] without
/// materializing the two dense tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct DirectAlgebra;

impl Operations for DirectAlgebra {
    fn universe_size(&self) -> usize {
        ELEMENT_COUNT
    }

    fn mul(&self, x: Element, y: Element) -> Element {
        x.multiply(y)
    }

    fn add(&self, x: Element, y: Element) -> Element {
        x.add(y)
    }
}

impl<O: Operations + ?Sized> Operations for &O {
    fn universe_size(&self) -> usize {
        (**self).universe_size()
    }

    fn mul(&self, x: Element, y: Element) -> Element {
        (**self).mul(x, y)
    }

    fn add(&self, x: Element, y: Element) -> Element {
        (**self).add(x, y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_identity_elements() {
        let ops = DirectAlgebra;
        for x in Element::all() {
            assert_eq!(ops.mul(Element::ONE, x), x);
            assert_eq!(ops.mul(x, Element::ONE), x);
            assert_eq!(ops.add(Element::ZERO, x), x);
            assert_eq!(ops.mul(Element::ZERO, x), Element::ZERO);
        }
    }

    #[test]
    fn test_direct_is_not_commutative() {
        let a = Element::new(4).unwrap();
        let b = Element::new(16).unwrap();
        assert_eq!(a.to_string(), "a");
        assert_eq!(b.to_string(), "b");
        assert_ne!(DirectAlgebra.mul(a, b), DirectAlgebra.mul(b, a));
    }
}
