//! Scalar types: typed identities, exact currency amounts, and
//! second-resolution instants and durations.

mod id;
mod money;
mod timestamp;

pub use id::Id;
pub use money::Money;
pub use timestamp::{Duration, Timestamp};
