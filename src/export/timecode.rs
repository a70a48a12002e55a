//! Non-drop timecode display
//!
//! Renders absolute frame counts as `HH:MM:SS:FF` at an integral frame
//! rate. Hours wrap at 24, as on a timecode clock.

/// Format a frame count as a display timecode.
///
/// `fps` must be non-zero; sequence loading validates this.
pub fn to_display(frames: u64, fps: u32) -> String {
    let fps = u64::from(fps.max(1));

    let ff = frames % fps;
    let total_seconds = frames / fps;
    let ss = total_seconds % 60;
    let mm = (total_seconds / 60) % 60;
    let hh = (total_seconds / 3600) % 24;

    format!("{:02}:{:02}:{:02}:{:02}", hh, mm, ss, ff)
}
