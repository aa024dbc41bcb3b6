//! Monomials, coefficient tuples and canonical elements of the rig

mod monomial;
mod tuple;
mod element;

pub use monomial::{Monomial, MONOMIAL_COUNT, PRODUCT_TABLE, product_table_text};
pub use tuple::{Tuple, Parenthesized, normalize_coeff, MAX_COEFF};
pub use element::{Element, ELEMENT_COUNT};
