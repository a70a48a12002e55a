//! Shared helpers for unit tests that need a fully wired App.

use crate::project::Project;
use crate::settings::Settings;

use super::state::App;

/// A small project with three shots on one video track, one tagged, one
/// carrying metadata, plus a linked audio representation of the first shot.
pub fn sample_project() -> Project {
    serde_json::from_str(
        r#"{
            "name": "Demo",
            "root": {"name": "clips", "children": [
                {"type": "clip", "name": "A001",
                 "metadata": {"artist": "rivera"},
                 "media": {"path": "/media/plates/A001.mov"}},
                {"type": "clip", "name": "B002",
                 "media": {"path": "/media/plates/B002.mov"}},
                {"type": "sequence", "name": "cut01", "frame_rate": 24, "tracks": [
                    {"name": "V1", "kind": "video", "items": [
                        {"name": "Shot010", "clip": "A001",
                         "timeline_in": 0, "timeline_out": 23,
                         "source_in": 0, "source_out": 23,
                         "link_group": 1},
                        {"name": "Shot020", "clip": "A001",
                         "timeline_in": 24, "timeline_out": 47,
                         "source_in": 0, "source_out": 23,
                         "metadata": {"status": "approved"}},
                        {"name": "Shot030", "clip": "B002",
                         "timeline_in": 48, "timeline_out": 71,
                         "source_in": 0, "source_out": 23,
                         "tags": [{"name": "Review", "note": "needs regrade"}]}
                    ]},
                    {"name": "A1", "kind": "audio", "items": [
                        {"name": "Shot010", "clip": "A001",
                         "timeline_in": 0, "timeline_out": 23,
                         "source_in": 0, "source_out": 23,
                         "link_group": 1}
                    ]}
                ]}
            ]}
        }"#,
    )
    .unwrap()
}

/// An App over the sample project with persistence disabled.
pub fn test_app() -> App {
    test_app_with_settings(Settings::default())
}

pub fn test_app_with_settings(settings: Settings) -> App {
    App::new(vec![sample_project()], settings).with_persistence(false)
}
