// src/filters/format.rs

/// Groups thousands with commas and keeps at most two decimals: `1234567.5` -> `1,234,567.5`.
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }

    let rounded = (value.abs() * 100.0).round() / 100.0;
    let whole = rounded.trunc() as u64;
    let cents = ((rounded - whole as f64) * 100.0).round() as u64;

    let digits = whole.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 4);
    if value < 0.0 && (whole > 0 || cents > 0) {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    if cents > 0 {
        let decimals = format!("{cents:02}");
        out.push('.');
        out.push_str(decimals.trim_end_matches('0'));
    }
    out
}

/// Number followed by its unit, if the facet has one.
pub fn format_amount(value: f64, unit: Option<&str>) -> String {
    match unit {
        Some(unit) => format!("{} {unit}", format_number(value)),
        None => format_number(value),
    }
}

pub fn format_range(min: f64, max: f64, unit: Option<&str>) -> String {
    format!("{} - {}", format_number(min), format_amount(max, unit))
}

pub fn pluralize(count: u32, singular: &str, plural: &str) -> String {
    if count == 1 {
        format!("{count} {singular}")
    } else {
        format!("{count} {plural}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_thousands() {
        assert_eq!(format_number(0.0), "0");
        assert_eq!(format_number(999.0), "999");
        assert_eq!(format_number(1000.0), "1,000");
        assert_eq!(format_number(1234567.0), "1,234,567");
        assert_eq!(format_number(-25000.0), "-25,000");
    }

    #[test]
    fn keeps_short_decimals() {
        assert_eq!(format_number(2.7), "2.7");
        assert_eq!(format_number(1500.25), "1,500.25");
        assert_eq!(format_number(3.456), "3.46");
        assert_eq!(format_number(10.0001), "10");
    }

    #[test]
    fn units_and_ranges() {
        assert_eq!(format_amount(1000.0, Some("DH")), "1,000 DH");
        assert_eq!(format_amount(50.0, None), "50");
        assert_eq!(format_range(50.0, 120.0, Some("m²")), "50 - 120 m²");
    }

    #[test]
    fn plural_forms() {
        assert_eq!(pluralize(1, "Bath", "Baths"), "1 Bath");
        assert_eq!(pluralize(2, "Room", "Rooms"), "2 Rooms");
        assert_eq!(pluralize(0, "guest", "guests"), "0 guests");
    }
}
