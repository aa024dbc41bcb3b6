//! Dense MTAB/ATAB tables

use super::Operations;
use crate::algebra::{Element, ELEMENT_COUNT};
use crate::{RigError, Result};
use ndarray::{Array2, ArrayView2};
use rayon::prelude::*;
use tracing::{debug, info};

/// Materialized product and sum tables, read-only once built
///
/// `mtab[[x, y]]` holds the raw index of `x * y`; `atab[[x, y]]` of `x + y`.
/// For the full rig each table is 16384 x 16384 `u16`, i.e. 512 MiB.
#[derive(Clone, Debug)]
pub struct OperationTables {
    size: usize,
    mtab: Array2<u16>,
    atab: Array2<u16>,
}

impl OperationTables {
    /// Tables for the idempotent rig on two generators
    pub fn for_rig() -> Result<Self> {
        info!(
            elements = ELEMENT_COUNT,
            "creating multiplication and addition tables"
        );
        Self::from_fn(ELEMENT_COUNT, Element::multiply, Element::add)
    }

    /// Tabulate two operations over `0..size`
    ///
    /// Rows are filled in parallel; every cell is written exactly once.
    pub fn from_fn<M, A>(size: usize, mul: M, add: A) -> Result<Self>
    where
        M: Fn(Element, Element) -> Element + Sync,
        A: Fn(Element, Element) -> Element + Sync,
    {
        if size == 0 || size > ELEMENT_COUNT {
            return Err(RigError::InvalidConfig(format!(
                "table size {} outside 1..={}",
                size, ELEMENT_COUNT
            )));
        }

        let mtab = Self::tabulate(size, &mul)?;
        let atab = Self::tabulate(size, &add)?;
        let tables = OperationTables { size, mtab, atab };
        tables.check_closed()?;
        debug!(size, "operation tables built");
        Ok(tables)
    }

    fn tabulate<F>(size: usize, op: &F) -> Result<Array2<u16>>
    where
        F: Fn(Element, Element) -> Element + Sync,
    {
        let mut cells = vec![0u16; size * size];
        cells
            .par_chunks_mut(size)
            .enumerate()
            .for_each(|(x, row)| {
                let x = Element::from_raw(x as u16);
                for (cell, y) in row.iter_mut().zip(Element::range(size)) {
                    *cell = op(x, y).raw();
                }
            });
        Ok(Array2::from_shape_vec((size, size), cells)?)
    }

    fn check_closed(&self) -> Result<()> {
        let limit = self.size as u16;
        for (name, table) in [("product", &self.mtab), ("sum", &self.atab)] {
            if let Some(((x, y), value)) = table.indexed_iter().find(|(_, v)| **v >= limit) {
                return Err(RigError::InvariantViolation(format!(
                    "{} table entry [{}, {}] = {} leaves the universe of {} elements",
                    name, x, y, value, self.size
                )));
            }
        }
        Ok(())
    }

    /// Product table view
    pub fn mtab(&self) -> ArrayView2<'_, u16> {
        self.mtab.view()
    }

    /// Sum table view
    pub fn atab(&self) -> ArrayView2<'_, u16> {
        self.atab.view()
    }

    /// Check that the sum table is symmetric
    pub fn addition_commutes(&self) -> bool {
        self.atab == self.atab.t()
    }
}

impl Operations for OperationTables {
    fn universe_size(&self) -> usize {
        self.size
    }

    #[inline]
    fn mul(&self, x: Element, y: Element) -> Element {
        Element::from_raw(self.mtab[[x.index(), y.index()]])
    }

    #[inline]
    fn add(&self, x: Element, y: Element) -> Element {
        Element::from_raw(self.atab[[x.index(), y.index()]])
    }
}
