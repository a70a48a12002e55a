//! Item collection
//!
//! Flattens the bin/track structure of loaded projects into searchable
//! shot records. Each collection pass is recomputed wholesale; records are
//! owned snapshots of the fields search and display need, so the match set
//! never dangles into the project tree.

use std::collections::BTreeMap;
use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::project::{Project, Sequence, Tag};

/// How far a collection pass reaches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CollectReach {
    /// Only the current sequence.
    Sequence,
    /// Every sequence in the current project.
    #[default]
    Project,
    /// Every sequence in every loaded project.
    All,
}

impl CollectReach {
    pub fn label(self) -> &'static str {
        match self {
            CollectReach::Sequence => "Sequence",
            CollectReach::Project => "Project",
            CollectReach::All => "All Projects",
        }
    }

    pub fn next(self) -> Self {
        match self {
            CollectReach::Sequence => CollectReach::Project,
            CollectReach::Project => CollectReach::All,
            CollectReach::All => CollectReach::Sequence,
        }
    }
}

/// One searchable shot, flattened out of its project context.
#[derive(Debug, Clone)]
pub struct ShotRecord {
    pub shot_name: String,
    pub clip_name: String,
    pub track: String,
    pub sequence: String,
    pub project: String,
    pub timeline_in: u64,
    pub timeline_out: u64,
    pub shot_metadata: BTreeMap<String, String>,
    pub clip_metadata: BTreeMap<String, String>,
    pub tags: Vec<Tag>,
    pub media_path: Option<String>,
    pub media_online: bool,
}

impl ShotRecord {
    /// Tag notes in tag order, for the tag-notes search scope.
    pub fn tag_notes(&self) -> impl Iterator<Item = &str> {
        self.tags.iter().map(|t| t.note.as_str())
    }
}

/// Position of the current sequence within the loaded projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Focused {
    pub project: usize,
    pub sequence: usize,
}

/// Collect searchable shot records from the loaded projects.
///
/// Output order is deterministic: track order within a sequence, sequences in
/// bin-walk order, projects in load order. Shots sharing a link group are
/// collected once (first occurrence in track order); double-counting linked
/// items would duplicate result rows and corrupt navigation indices.
pub fn collect_shots(
    projects: &[Project],
    focused: Focused,
    reach: CollectReach,
) -> Vec<ShotRecord> {
    let mut records = Vec::new();

    match reach {
        CollectReach::Sequence => {
            if let Some(project) = projects.get(focused.project)
                && let Some(sequence) = project.sequences().get(focused.sequence).copied()
            {
                collect_sequence(project, sequence, &mut records);
            }
        }
        CollectReach::Project => {
            if let Some(project) = projects.get(focused.project) {
                for sequence in project.sequences() {
                    collect_sequence(project, sequence, &mut records);
                }
            }
        }
        CollectReach::All => {
            for project in projects {
                for sequence in project.sequences() {
                    collect_sequence(project, sequence, &mut records);
                }
            }
        }
    }

    #[cfg(debug_assertions)]
    log::debug!("Collected {} shot record(s) at reach {:?}", records.len(), reach);

    records
}

fn collect_sequence(project: &Project, sequence: &Sequence, records: &mut Vec<ShotRecord>) {
    let mut seen_groups: HashSet<u32> = HashSet::new();

    for track in &sequence.tracks {
        for shot in &track.items {
            if let Some(group) = shot.link_group
                && !seen_groups.insert(group)
            {
                continue;
            }

            let clip = project.clip(&shot.clip);
            records.push(ShotRecord {
                shot_name: shot.name.clone(),
                clip_name: shot.clip.clone(),
                track: track.name.clone(),
                sequence: sequence.name.clone(),
                project: project.name.clone(),
                timeline_in: shot.timeline_in,
                timeline_out: shot.timeline_out,
                shot_metadata: shot.metadata.clone(),
                clip_metadata: clip.map(|c| c.metadata.clone()).unwrap_or_default(),
                tags: shot.tags.clone(),
                media_path: clip.and_then(|c| c.media.as_ref()).map(|m| m.path.clone()),
                media_online: clip.is_some_and(|c| c.is_media_present()),
            });
        }
    }
}
