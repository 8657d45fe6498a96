//! Algorithms over any sequence, built on the fold family.

pub mod fold;
pub mod query;
pub mod transform;

pub use fold::{Accumulate, Fold, IterFold, OnItem, ReverseFold, ReverseIterFold};
pub use query::{CountIf, FindIf};
pub use transform::{Collect, CopyIf, RemoveIf, Reverse, Transform};
