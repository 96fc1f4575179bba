//! Utility functions and helpers

/// Insert a thousands separator into the integer digits of a formatted number.
///
/// Accepts an optional leading `-` and an optional fractional part, which are
/// preserved as-is.
pub fn format_number<T: ToString>(n: T, separator: &str) -> String {
    let s = n.to_string();
    let (sign, unsigned) = match s.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", s.as_str()),
    };
    let (digits, fraction) = match unsigned.find('.') {
        Some(pos) => unsigned.split_at(pos),
        None => (unsigned, ""),
    };

    let mut result = String::new();
    let mut count = 0;
    for c in digits.chars().rev() {
        if count == 3 {
            result.push_str(&separator.chars().rev().collect::<String>());
            count = 0;
        }
        result.push(c);
        count += 1;
    }
    let grouped: String = result.chars().rev().collect();
    format!("{}{}{}", sign, grouped, fraction)
}

/// Format a value as a whole currency amount, e.g. `$1,234` or `$-25`.
///
/// The sign follows the symbol.
pub fn format_currency(value: f64, symbol: &str, separator: &str) -> String {
    format!("{}{}", symbol, format_number(format!("{:.0}", value), separator))
}

/// Format a single amount the way a person would write it down:
/// whole numbers without decimals, everything else in its shortest form.
pub fn format_amount(value: f64) -> String {
    if value.fract() == 0.0 && value.abs() < 1e15 {
        format!("{:.0}", value)
    } else {
        format!("{}", value)
    }
}

/// Escape text for safe inclusion in HTML content and attribute values
pub fn escape_html(content: &str) -> String {
    let mut escaped = String::with_capacity(content.len());
    for c in content.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

/// Generate a random 128-bit identifier as lowercase hex
pub fn generate_id() -> String {
    format!("{:032x}", rand::random::<u128>())
}
