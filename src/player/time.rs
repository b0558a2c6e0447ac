use std::time::Duration;

/// Format a `Duration` as `MM:SS`.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Integer percentage of `elapsed` within `total`, capped at 100.
pub fn position_percent(elapsed: Duration, total: Duration) -> u8 {
    if total.is_zero() {
        return 0;
    }
    let pct = (elapsed.as_secs_f64() / total.as_secs_f64()) * 100.0;
    pct.min(100.0) as u8
}
