//! Formatting and scaling helpers for the transport bar.

/// Clamp into `[0, 1]`; NaN collapses to 0.
pub fn clamp_unit(value: f64) -> f64 {
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 1.0)
    }
}

/// `MM:SS` with floor-truncated seconds. Unknown or negative input renders `00:00`.
pub fn seconds_to_display(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "00:00".to_string();
    }
    let whole = seconds.floor() as u64;
    format!("{:02}:{:02}", whole / 60, whole % 60)
}

/// `position / duration`, each side formatted by [`seconds_to_display`].
pub fn time_display(position: f64, duration: f64) -> String {
    format!(
        "{} / {}",
        seconds_to_display(position),
        seconds_to_display(duration)
    )
}

/// Seek-bar knob offset in percent; 0 while the duration is unknown.
pub fn progress_percent(position: f64, duration: f64) -> f64 {
    if !duration.is_finite() || duration <= 0.0 || !position.is_finite() {
        return 0.0;
    }
    clamp_unit(position / duration) * 100.0
}

/// Volume slider value (0-100) to an output level.
pub fn slider_to_volume(value: f64) -> f64 {
    clamp_unit(value / 100.0)
}

pub fn volume_to_slider(level: f64) -> i32 {
    (clamp_unit(level) * 100.0).round() as i32
}
