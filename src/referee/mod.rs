//! State mutation.
//!
//! `Referee` is the only code path that changes a `GameState`. Each
//! `commit_round` is all-or-nothing: it either returns a `RoundOutcome`
//! with every field updated, or an error with nothing touched.

mod arbiter;

pub use arbiter::{Referee, RoundOutcome};
