//! Data models shared by both literature sources.
//!
//! Every upstream entry is normalized into one [`PaperRecord`] so the
//! classifier and the exporter see a uniform shape.

mod enums;
mod paper;

pub use enums::Source;
pub use paper::{NO_TITLE, PaperRecord};
