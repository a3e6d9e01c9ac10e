//! Grade-point aggregation and qualitative classification.
//!
//! This module reduces user-entered subject and semester rows to a single
//! average, splits credited and uncredited entries into separate accounting
//! pools, and assigns a qualitative performance level to the result.

pub mod cgpa;
pub mod classify;
pub mod sgpa;
pub mod types;
pub mod utility;
