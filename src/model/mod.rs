//! Problem model: items, instances, solutions, and the objective evaluator.
//!
//! An [`Instance`] is immutable once constructed and shared read-only by
//! every engine. A [`Solution`] is a fixed-length bit vector, one bit per
//! item, always index-aligned with the instance's item list. Engines copy
//! solutions between steps (clone-before-mutate) rather than aliasing them.

mod err;
mod instance;
mod loader;
mod solution;

pub use err::InstanceLoadError;
pub use instance::{Instance, Item};
pub use loader::{load_kplib, read_kplib};
pub use solution::{Evaluation, Solution};
