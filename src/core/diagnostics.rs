//! Start-of-run self checks and samples

use crate::algebra::{product_table_text, Element, Tuple, ELEMENT_COUNT};
use crate::{RigError, Result};
use tracing::info;

/// Confirm `index -> tuple -> index` is the identity on every element
pub fn check_bijection() -> Result<()> {
    for index in 0..ELEMENT_COUNT as u16 {
        let back = Tuple::from_index(index).to_index();
        if back != index {
            return Err(RigError::InvariantViolation(format!(
                "index/tuple bijection fails at index {} (got {})",
                index, back
            )));
        }
    }
    Ok(())
}

/// The first `count` elements as expressions
pub fn first_elements(count: usize) -> Vec<String> {
    Element::range(count).map(|e| e.to_string()).collect()
}

/// `(a+b)` and its square
pub fn square_of_a_plus_b() -> (Tuple, Tuple) {
    let a_plus_b = Tuple::from([0, 1, 1, 0, 0, 0, 0]);
    (a_plus_b, a_plus_b.multiply(&a_plus_b))
}

/// Log the monomial table, the bijection check and sample elements
pub fn log_diagnostics() -> Result<()> {
    info!("monomial multiplication table\n{}", product_table_text());

    info!("checking index/tuple bijection");
    check_bijection()?;
    info!(elements = ELEMENT_COUNT, "bijection holds");

    info!("first few sums: {}", first_elements(20).join(", "));

    let (base, square) = square_of_a_plus_b();
    info!("test multiplication: {}^2 = {}", base.parenthesized(), square);
    Ok(())
}
