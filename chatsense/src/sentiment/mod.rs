//! Lexicon-based sentiment scoring and conversation-level aggregation.

mod aggregate;
mod lexicon;
mod scorer;
mod types;

pub use aggregate::*;
pub use lexicon::*;
pub use scorer::*;
pub use types::*;
