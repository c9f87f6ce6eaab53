//! Intent classification for customer messages.
//!
//! Intents are assigned by an ordered list of keyword rules evaluated against
//! the lower-cased message; the first rule that fires wins.

mod classifier;
mod rules;
mod types;

pub use classifier::*;
pub use rules::*;
pub use types::*;
