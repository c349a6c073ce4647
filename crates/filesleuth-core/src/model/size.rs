/// Human-readable formatting for report output.
///
/// Sizes are `u64` bytes everywhere in the model; floating point appears
/// only here, at the display boundary.

const UNITS: [(&str, f64); 4] = [
    ("TB", 1024.0 * 1024.0 * 1024.0 * 1024.0),
    ("GB", 1024.0 * 1024.0 * 1024.0),
    ("MB", 1024.0 * 1024.0),
    ("KB", 1024.0),
];

/// Format a byte count using binary multiples with short labels.
///
/// KB and MB get one decimal, GB and TB two.
pub fn format_size(bytes: u64) -> String {
    let b = bytes as f64;
    for (label, scale) in UNITS {
        if b >= scale {
            let decimals = if scale >= UNITS[1].1 { 2 } else { 1 };
            return format!("{:.*} {}", decimals, b / scale, label);
        }
    }
    format!("{bytes} B")
}

/// Format an average byte size (e.g. `LanguageStats::average_size`).
pub fn format_average_size(avg: f64) -> String {
    if avg < 1024.0 {
        format!("{avg:.1} B")
    } else {
        format_size(avg.round() as u64)
    }
}

/// Format a count with thousand separators.
pub fn format_count(count: u64) -> String {
    let digits = count.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}
