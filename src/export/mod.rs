//! Verdict export.
//!
//! Positive verdicts are written as a CSV table. The column order and
//! naming are an external contract; downstream consumers key on them.

mod csv;

pub use csv::write_verdicts;
