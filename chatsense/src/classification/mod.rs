//! Message classification records and batch analytics.

mod analytics;
mod request;
mod types;

pub use analytics::*;
pub use request::*;
pub use types::*;
