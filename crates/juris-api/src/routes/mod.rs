//! Route modules, one per API area.

pub mod audit;
pub mod fx;
pub mod jurisdictions;
