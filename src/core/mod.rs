//! Configuration, diagnostics and the run driver

mod config;
mod diagnostics;
mod run;

pub use config::{RunConfig, TableMode};
pub use diagnostics::{check_bijection, first_elements, square_of_a_plus_b, log_diagnostics};
pub use run::{RunStats, run, run_with};
