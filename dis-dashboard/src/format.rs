//! Number formatting for labels, tooltips and legends.

/// A fraction as a one-decimal percent: `0.123` -> `"12.3%"`.
pub fn percent_label(fraction: f64) -> String {
    format!("{:.1}%", fraction * 100.0)
}

/// A raw percentage to one decimal place: `12.345` -> `"12.3"`.
pub fn fixed1(value: f64) -> String {
    format!("{:.1}", value)
}

/// Format a value with a d3-style pattern: `".0%"` or `".1f"`. Other patterns
/// fall back to the plain value.
pub fn with_pattern(value: f64, pattern: &str) -> String {
    let Some(rest) = pattern.strip_prefix('.') else {
        return value.to_string();
    };
    let precision = |digits: &str| digits.parse::<usize>().ok();
    if let Some(p) = rest.strip_suffix('%').and_then(precision) {
        format!("{:.*}%", p, value * 100.0)
    } else if let Some(p) = rest.strip_suffix('f').and_then(precision) {
        format!("{:.*}", p, value)
    } else {
        value.to_string()
    }
}
