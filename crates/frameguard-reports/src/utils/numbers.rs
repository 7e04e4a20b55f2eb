const UNITS: [(usize, &str); 3] = [
    (1_000_000_000, "B"),
    (1_000_000, "M"),
    (1_000, "K"),
];

/// Abbreviate a row count: `4536` becomes `4.5K`.
pub fn format_numbers(n: usize) -> String {
    UNITS
        .iter()
        .find(|(unit, _)| n >= *unit)
        .map(|(unit, suffix)| format!("{:.1}{}", n as f64 / *unit as f64, suffix))
        .unwrap_or_else(|| n.to_string())
}
