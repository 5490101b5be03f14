//! Derived reports over stored data
//!
//! Reports are pure computations: they consume a snapshot of a profile's
//! records and produce a new value, never mutating their input.

pub mod summary;

pub use summary::ExpenseSummary;
