//! Rupiah formatting (`id-ID` locale: dot as thousands separator, no decimals)

/// Upper bound for any single price or payment (Rp 1 triliun)
pub const MAX_RUPIAH: i64 = 1_000_000_000_000;

/// Insert a dot every three digits: `28500000` -> `"28.500.000"`
pub fn format_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut result = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    if value < 0 {
        result.insert(0, '-');
    }
    result
}

/// `28500000` -> `"Rp 28.500.000"`, negative values as `"-Rp 1.000"`
pub fn format_rupiah(value: i64) -> String {
    if value < 0 {
        format!("-Rp {}", format_thousands(value).trim_start_matches('-'))
    } else {
        format!("Rp {}", format_thousands(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0), "0");
        assert_eq!(format_thousands(999), "999");
        assert_eq!(format_thousands(1_000), "1.000");
        assert_eq!(format_thousands(28_500_000), "28.500.000");
        assert_eq!(format_thousands(-1_234_567), "-1.234.567");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(35_000_000), "Rp 35.000.000");
        assert_eq!(format_rupiah(0), "Rp 0");
        assert_eq!(format_rupiah(-5_000_000), "-Rp 5.000.000");
    }
}
