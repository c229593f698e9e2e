/// Formats a millisecond duration as `mm:ss`.
///
/// Minutes are unbounded and padded to two digits, seconds are the remainder. Fractional
/// seconds are truncated. Negative inputs (clock adjusted backwards) render as `00:00`.
pub fn format_mm_ss(duration_ms: i64) -> String {
    let total_seconds = duration_ms.max(0) / 1000;
    let minutes = total_seconds / 60;
    let seconds = total_seconds % 60;
    format!("{minutes:02}:{seconds:02}")
}
