//! Display formatting helpers.

const UNITS: [&str; 5] = ["B", "KB", "MB", "GB", "TB"];

/// Human-readable byte count with 1024 steps, at most two decimals, and
/// trailing zeros trimmed ("0 B", "1 KB", "1.5 KB").
pub fn format_file_size(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut value = bytes as f64;
    let mut unit = 0usize;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    let rounded = format!("{value:.2}");
    let trimmed = rounded.trim_end_matches('0').trim_end_matches('.');
    format!("{trimmed} {}", UNITS[unit])
}

/// Size column text; directories show nothing.
pub fn size_label(size: u64, is_directory: bool) -> String {
    if is_directory {
        String::new()
    } else {
        format_file_size(size)
    }
}
