//! Calculation logic for the salary engine.
//!
//! This module contains the pure conversion functions: contribution and
//! income tax calculation, the forward gross-to-net conversion, the inverse
//! net-to-gross conversion with its threshold and branch selection, the
//! direction dispatcher, and an audited variant of the dispatcher.
//!
//! None of these functions perform I/O, hold state, or return errors.

mod audit;
mod contributions;
mod gross_salary;
mod income_tax;
mod net_salary;
mod salary;

pub use audit::explain_salary;
pub use contributions::{compute_contributions, total_contribution_rate};
pub use gross_salary::{
    InverseBranch, TaxThreshold, compute_gross_salary, compute_threshold, select_branch,
    solve_gross,
};
pub use income_tax::compute_tax;
pub use net_salary::compute_net_salary;
pub use salary::compute_salary;
