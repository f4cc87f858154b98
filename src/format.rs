//! Display helpers shared by every renderer.

const BYTE_UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

// `{:.1}` alone rounds exact ties to even; halves must round up.
fn one_decimal(value: f64) -> String {
    format!("{:.1}", (value * 10.0).round() / 10.0)
}

/// Compact magnitude: `999`, `1.5K`, `2.5M`.
pub fn format_number(value: u64) -> String {
    if value >= 1_000_000 {
        format!("{}M", one_decimal(value as f64 / 1_000_000.0))
    } else if value >= 1_000 {
        format!("{}K", one_decimal(value as f64 / 1_000.0))
    } else {
        value.to_string()
    }
}

/// Binary-unit size with at most one decimal; a trailing `.0` is dropped
/// (`1024` renders as `1 KB`). Anything past GB stays in GB.
pub fn format_bytes(bytes: u64) -> String {
    if bytes == 0 {
        return "0 B".to_string();
    }

    let mut scaled = bytes as f64;
    let mut unit = 0;
    while scaled >= 1024.0 && unit < BYTE_UNITS.len() - 1 {
        scaled /= 1024.0;
        unit += 1;
    }

    let rendered = one_decimal(scaled);
    let rendered = rendered.strip_suffix(".0").unwrap_or(&rendered);
    format!("{} {}", rendered, BYTE_UNITS[unit])
}

pub fn format_percent(percentage: f64) -> String {
    format!("{}%", one_decimal(percentage))
}
