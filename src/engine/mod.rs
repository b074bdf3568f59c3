//! Core engine — the claim → swap → add-liquidity → stake sequence.

pub mod compounder;

pub use compounder::{CompoundPlan, Compounder};
