//! Compound-interest and annuity primitives shared by every calculator
//!
//! All rates entering this module are decimal periodic rates (0.01 for 1% per
//! period) unless the function name says `percent`. Callers convert once at
//! the top of a calculator so the order of operations stays fixed.

mod annuity;
mod rounding;

pub use annuity::{
    annuity_due_future_value, compound_growth, emi_payment, lump_sum_future_value,
    monthly_rate, ordinary_annuity_factor, present_value_annuity_factor, AmortizationStep,
};
pub use rounding::{percentage_of, round_half_up};
