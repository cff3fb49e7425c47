//! Number formatting for prices.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Group the integer part with commas and keep up to two decimals,
/// dropping trailing zeros: `11250.0` -> `"11,250"`, `1234.5` -> `"1,234.5"`.
#[must_use]
pub fn group_thousands(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let fixed = format!("{:.2}", value.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if value < 0.0 && fixed != "0.00" { "-" } else { "" };
    if frac.is_empty() { format!("{sign}{grouped}") } else { format!("{sign}{grouped}.{frac}") }
}

/// Price label in Egyptian pounds.
#[must_use]
pub fn egp(value: f64) -> String {
    format!("{} EGP", group_thousands(value))
}
