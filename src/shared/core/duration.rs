/// Render a span of seconds the way worklog screens show it: `"2h 5m"`, or `"45m"` under an hour.
/// Seconds below a full minute are dropped.
pub fn format_duration(seconds: i64) -> String {
    let seconds = seconds.max(0);
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    if hours > 0 {
        format!("{hours}h {minutes}m")
    } else {
        format!("{minutes}m")
    }
}
