//! Post-processors applied to extracted entities.

mod overlap;

pub use overlap::OverlapResolver;
