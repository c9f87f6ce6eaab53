//! Entity extraction for message text.
//!
//! This module detects structured entities (email addresses, phone numbers,
//! URLs and dates) in message content and reports them as spans into the
//! original text.

mod pattern_extractor;
mod traits;
mod types;
pub mod post_processors;

pub use pattern_extractor::*;
pub use post_processors::*;
pub use traits::*;
pub use types::*;
