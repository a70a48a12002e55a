//! Project snapshot model
//!
//! A project snapshot is a JSON document describing a project's bin tree:
//! bins containing bins, clips, and sequences, with sequences carrying
//! tracks of shots. Snapshots are read-only input; nothing in the
//! application mutates or writes them back.

mod loader;
mod model;

pub use loader::load_project;
pub use model::{
    Bin, BinEntry, Clip, MediaSource, Project, Sequence, Shot, Tag, Track, TrackKind,
};
