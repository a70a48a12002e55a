//! Shot-list export
//!
//! Writes a sequence's video tracks out as a comma-delimited shot list:
//! one row per shot with event number, media status, reel, speed, and
//! source/destination timecodes.

mod shotlist;
pub mod timecode;

pub use shotlist::{REEL_METADATA_KEY, SHOT_LIST_COLUMNS, ShotListExporter};
