use std::fs;
use std::path::Path;

use crate::error::FindError;

use super::model::{Project, Sequence, Shot};

/// Load and validate a project snapshot from a JSON file.
///
/// Validation catches the mistakes that would otherwise surface as panics or
/// nonsense deep inside search and export: zero frame rates, inverted shot
/// ranges, and shots cutting from clips that are not in the bin tree.
pub fn load_project(path: &Path) -> Result<Project, FindError> {
    let contents = fs::read_to_string(path).map_err(|e| {
        FindError::ProjectLoad(format!("{}: {}", path.display(), e))
    })?;

    let project: Project = serde_json::from_str(&contents).map_err(|e| {
        FindError::ProjectLoad(format!("{}: {}", path.display(), e))
    })?;

    validate(&project)?;

    #[cfg(debug_assertions)]
    log::debug!(
        "Loaded project '{}' with {} sequence(s) from {}",
        project.name,
        project.sequences().len(),
        path.display()
    );

    Ok(project)
}

fn validate(project: &Project) -> Result<(), FindError> {
    for sequence in project.sequences() {
        validate_sequence(project, sequence)?;
    }
    Ok(())
}

fn validate_sequence(project: &Project, sequence: &Sequence) -> Result<(), FindError> {
    if sequence.frame_rate == 0 {
        return Err(FindError::ProjectLoad(format!(
            "sequence '{}' has a zero frame rate",
            sequence.name
        )));
    }

    for track in &sequence.tracks {
        for shot in &track.items {
            validate_shot(project, &sequence.name, &track.name, shot)?;
        }
    }
    Ok(())
}

fn validate_shot(
    project: &Project,
    sequence: &str,
    track: &str,
    shot: &Shot,
) -> Result<(), FindError> {
    if shot.timeline_in > shot.timeline_out || shot.source_in > shot.source_out {
        return Err(FindError::ProjectLoad(format!(
            "shot '{}' on {}/{} has an inverted frame range",
            shot.name, sequence, track
        )));
    }
    if project.clip(&shot.clip).is_none() {
        return Err(FindError::ProjectLoad(format!(
            "shot '{}' on {}/{} references unknown clip '{}'",
            shot.name, sequence, track, shot.clip
        )));
    }
    Ok(())
}
