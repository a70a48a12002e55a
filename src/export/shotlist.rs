use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use crate::config::ExportConfig;
use crate::error::FindError;
use crate::project::{Clip, Project, Sequence, Shot, Track};

use super::timecode;

/// Fixed column set, in output order.
pub const SHOT_LIST_COLUMNS: [&str; 14] = [
    "Event",
    "Status",
    "Shot Name",
    "Reel",
    "Track",
    "Speed",
    "Src In",
    "Src Out",
    "Src Duration",
    "Dst In",
    "Dst Out",
    "Dst Duration",
    "Clip",
    "Clip Media",
];

/// Metadata key carrying the EDL source reel name.
pub const REEL_METADATA_KEY: &str = "edl.source_reel";

/// Writes one sequence's video tracks as a shot-list CSV.
pub struct ShotListExporter<'a> {
    project: &'a Project,
    sequence: &'a Sequence,
    config: &'a ExportConfig,
}

impl<'a> ShotListExporter<'a> {
    pub fn new(project: &'a Project, sequence: &'a Sequence, config: &'a ExportConfig) -> Self {
        Self {
            project,
            sequence,
            config,
        }
    }

    /// Write the shot list to `path`, appending a `.csv` extension if the
    /// path has none. Overwrites any existing file. I/O failures are logged
    /// and propagated; the export stops at the first failure.
    pub fn write_to(&self, path: &Path) -> Result<PathBuf, FindError> {
        let path = ensure_csv_extension(path);

        if let Some(parent) = path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent)?;
        }

        let result = self.write_rows(&path);
        if let Err(e) = &result {
            #[cfg(debug_assertions)]
            log::error!("Shot list export to {} failed: {}", path.display(), e);
            let _ = e;
        }
        result?;

        Ok(path)
    }

    fn write_rows(&self, path: &Path) -> Result<(), FindError> {
        let mut writer = csv::Writer::from_path(path).map_err(csv_to_find_error)?;

        writer
            .write_record(SHOT_LIST_COLUMNS)
            .map_err(csv_to_find_error)?;

        for track in self.sequence.video_tracks() {
            // EDL event indexes start at 1, counted per track.
            for (offset, shot) in track.items.iter().enumerate() {
                let row = self.row(offset + 1, track, shot);
                writer.write_record(&row).map_err(csv_to_find_error)?;
            }
        }

        writer.flush()?;
        Ok(())
    }

    fn row(&self, event: usize, track: &Track, shot: &Shot) -> Vec<String> {
        let clip = self.project.clip(&shot.clip);
        let fps = self.sequence.frame_rate;
        let clip_start = clip.map(|c| c.timecode_start).unwrap_or(0);
        // EDL-style spreadsheets show Out as the frame after the last.
        let out_extra = u64::from(self.config.edl_style_timecodes);

        vec![
            event.to_string(),
            self.status(clip).to_string(),
            shot.name.clone(),
            self.reel(shot, clip),
            track.name.clone(),
            format!("{:.1}", 100.0 * shot.playback_speed),
            timecode::to_display(clip_start + shot.source_in, fps),
            timecode::to_display(clip_start + shot.source_out + out_extra, fps),
            shot.source_duration().to_string(),
            timecode::to_display(self.sequence.timecode_start + shot.timeline_in, fps),
            timecode::to_display(self.sequence.timecode_start + shot.timeline_out + out_extra, fps),
            shot.duration().to_string(),
            shot.clip.clone(),
            self.media_path(clip),
        ]
    }

    fn status(&self, clip: Option<&Clip>) -> &'static str {
        if clip.is_some_and(Clip::is_media_present) {
            "OK"
        } else {
            "OFF"
        }
    }

    fn reel(&self, shot: &Shot, clip: Option<&Clip>) -> String {
        shot.metadata
            .get(REEL_METADATA_KEY)
            .or_else(|| clip.and_then(|c| c.metadata.get(REEL_METADATA_KEY)))
            .cloned()
            .unwrap_or_default()
    }

    fn media_path(&self, clip: Option<&Clip>) -> String {
        let Some(media) = clip.and_then(|c| c.media.as_ref()) else {
            return String::new();
        };

        let path = if self.config.absolute_paths {
            media.path.clone()
        } else {
            Path::new(&media.path)
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| media.path.clone())
        };

        if media.single_file {
            path
        } else {
            format!("{} {}-{}", path, media.start_frame, media.end_frame)
        }
    }
}

fn ensure_csv_extension(path: &Path) -> PathBuf {
    match path.extension() {
        Some(ext) if ext.eq_ignore_ascii_case("csv") => path.to_path_buf(),
        _ => {
            let mut with_ext = path.as_os_str().to_owned();
            with_ext.push(".csv");
            PathBuf::from(with_ext)
        }
    }
}

fn csv_to_find_error(e: csv::Error) -> FindError {
    match e.into_kind() {
        csv::ErrorKind::Io(io_err) => FindError::Io(io_err),
        other => FindError::Io(io::Error::other(format!("{:?}", other))),
    }
}
