//! Pure helpers shared by the reconciliation layers.

pub mod conferencing;
pub mod datetime;
