//! Port traits (interfaces for adapters).
//!
//! These are the contracts that adapters must implement.
//! The application layer depends on these traits, not concrete implementations.

mod clock;
mod provider;
mod source;

pub use clock::{Clock, SystemClock};
pub use provider::RateProvider;
pub use source::{FetchError, MarkupSource};
