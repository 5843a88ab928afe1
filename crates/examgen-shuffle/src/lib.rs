//! Exam shuffling.
//!
//! [`generate`] turns an item bank into one exam variant: the items are
//! reordered with a uniform random permutation, answer options are permuted
//! within each item subject to the pinning constraints, the answer key is
//! extracted from the markup, and the markup is stripped from the returned
//! bank.

mod shuffler;

pub use shuffler::{generate, generate_with};
