use std::collections::BTreeMap;

use serde::Deserialize;

/// A loaded project snapshot: a name and the root bin of its media tree.
#[derive(Debug, Clone, Deserialize)]
pub struct Project {
    pub name: String,
    pub root: Bin,
}

/// Hierarchical container for clips, sequences, and nested bins.
#[derive(Debug, Clone, Deserialize)]
pub struct Bin {
    pub name: String,
    #[serde(default)]
    pub children: Vec<BinEntry>,
}

/// One entry in a bin. Tagged by `"type"` in the snapshot JSON.
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BinEntry {
    Bin(Bin),
    Clip(Clip),
    Sequence(Sequence),
}

/// A source clip: named media with metadata and an optional media source.
#[derive(Debug, Clone, Deserialize)]
pub struct Clip {
    pub name: String,
    /// First frame of the clip expressed as an absolute timecode frame count.
    #[serde(default)]
    pub timecode_start: u64,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub media: Option<MediaSource>,
}

impl Clip {
    /// Whether the clip's media is present on disk.
    pub fn is_media_present(&self) -> bool {
        self.media.as_ref().is_some_and(|m| m.online)
    }
}

/// Where a clip's frames live on disk.
#[derive(Debug, Clone, Deserialize)]
pub struct MediaSource {
    pub path: String,
    #[serde(default = "default_online")]
    pub online: bool,
    /// Movie files are single-file; image sequences are not.
    #[serde(default = "default_single_file")]
    pub single_file: bool,
    #[serde(default)]
    pub start_frame: u64,
    #[serde(default)]
    pub end_frame: u64,
}

fn default_online() -> bool {
    true
}

fn default_single_file() -> bool {
    true
}

/// An editable timeline: an ordered stack of tracks.
#[derive(Debug, Clone, Deserialize)]
pub struct Sequence {
    pub name: String,
    /// Frames per second, integral and non-drop.
    pub frame_rate: u32,
    /// Sequence start expressed as an absolute timecode frame count.
    #[serde(default)]
    pub timecode_start: u64,
    #[serde(default)]
    pub tracks: Vec<Track>,
}

impl Sequence {
    pub fn video_tracks(&self) -> impl Iterator<Item = &Track> {
        self.tracks.iter().filter(|t| t.kind == TrackKind::Video)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrackKind {
    Video,
    Audio,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Track {
    pub name: String,
    pub kind: TrackKind,
    #[serde(default)]
    pub items: Vec<Shot>,
}

/// A placement of a clip onto a timeline with an in/out range.
#[derive(Debug, Clone, Deserialize)]
pub struct Shot {
    pub name: String,
    /// Name of the clip this shot cuts from.
    pub clip: String,
    pub timeline_in: u64,
    pub timeline_out: u64,
    pub source_in: u64,
    pub source_out: u64,
    #[serde(default = "default_speed")]
    pub playback_speed: f64,
    #[serde(default)]
    pub metadata: BTreeMap<String, String>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// Shots sharing a group id are linked representations (e.g. video+audio)
    /// of the same logical placement.
    #[serde(default)]
    pub link_group: Option<u32>,
}

fn default_speed() -> f64 {
    1.0
}

impl Shot {
    /// Inclusive duration on the timeline, in frames.
    pub fn duration(&self) -> u64 {
        self.timeline_out - self.timeline_in + 1
    }

    /// Inclusive duration of the source range, in frames.
    pub fn source_duration(&self) -> u64 {
        self.source_out - self.source_in + 1
    }
}

/// A user annotation attached to a shot. The note is free text.
#[derive(Debug, Clone, Deserialize)]
pub struct Tag {
    pub name: String,
    #[serde(default)]
    pub note: String,
}

impl Project {
    /// Look up a clip anywhere in the bin tree by name.
    pub fn clip(&self, name: &str) -> Option<&Clip> {
        fn walk<'a>(bin: &'a Bin, name: &str) -> Option<&'a Clip> {
            for entry in &bin.children {
                match entry {
                    BinEntry::Clip(clip) if clip.name == name => return Some(clip),
                    BinEntry::Bin(inner) => {
                        if let Some(clip) = walk(inner, name) {
                            return Some(clip);
                        }
                    }
                    _ => {}
                }
            }
            None
        }
        walk(&self.root, name)
    }

    /// All sequences reachable from the root bin, in bin-walk order.
    pub fn sequences(&self) -> Vec<&Sequence> {
        fn walk<'a>(bin: &'a Bin, out: &mut Vec<&'a Sequence>) {
            for entry in &bin.children {
                match entry {
                    BinEntry::Sequence(seq) => out.push(seq),
                    BinEntry::Bin(inner) => walk(inner, out),
                    BinEntry::Clip(_) => {}
                }
            }
        }
        let mut out = Vec::new();
        walk(&self.root, &mut out);
        out
    }

    /// Look up a sequence by name.
    pub fn sequence(&self, name: &str) -> Option<&Sequence> {
        self.sequences().into_iter().find(|s| s.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_project() -> Project {
        serde_json::from_str(
            r#"{
                "name": "Demo",
                "root": {
                    "name": "clips",
                    "children": [
                        {"type": "clip", "name": "A001", "media": {"path": "/m/A001.mov"}},
                        {"type": "bin", "name": "dailies", "children": [
                            {"type": "clip", "name": "B002", "media": {"path": "/m/B002.mov", "online": false}}
                        ]},
                        {"type": "sequence", "name": "cut01", "frame_rate": 24, "tracks": [
                            {"name": "V1", "kind": "video", "items": [
                                {"name": "Shot010", "clip": "A001",
                                 "timeline_in": 0, "timeline_out": 23,
                                 "source_in": 0, "source_out": 23}
                            ]}
                        ]}
                    ]
                }
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_clip_lookup_recurses_into_bins() {
        let project = sample_project();
        assert!(project.clip("A001").is_some());
        assert!(project.clip("B002").is_some());
        assert!(project.clip("C003").is_none());
    }

    #[test]
    fn test_media_presence() {
        let project = sample_project();
        assert!(project.clip("A001").unwrap().is_media_present());
        assert!(!project.clip("B002").unwrap().is_media_present());

        let orphan: Clip = serde_json::from_str(r#"{"name": "X"}"#).unwrap();
        assert!(!orphan.is_media_present());
    }

    #[test]
    fn test_sequences_found_in_walk_order() {
        let project = sample_project();
        let names: Vec<_> = project.sequences().iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, vec!["cut01"]);
        assert!(project.sequence("cut01").is_some());
    }

    #[test]
    fn test_shot_durations_are_inclusive() {
        let project = sample_project();
        let seq = project.sequence("cut01").unwrap();
        let shot = &seq.tracks[0].items[0];
        assert_eq!(shot.duration(), 24);
        assert_eq!(shot.source_duration(), 24);
    }

    #[test]
    fn test_playback_speed_defaults_to_realtime() {
        let shot: Shot = serde_json::from_str(
            r#"{"name": "s", "clip": "c",
                "timeline_in": 0, "timeline_out": 0,
                "source_in": 0, "source_out": 0}"#,
        )
        .unwrap();
        assert_eq!(shot.playback_speed, 1.0);
        assert!(shot.link_group.is_none());
    }
}
