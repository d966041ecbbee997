/// Display helpers shared by the report and log messages

/// Shorten an address to `prefix...suffix` when it is long enough to matter
pub fn shorten_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let chars: Vec<char> = address.chars().collect();
    if chars.len() > prefix_len + suffix_len + 3 {
        let prefix: String = chars[..prefix_len].iter().collect();
        let suffix: String = chars[chars.len() - suffix_len..].iter().collect();
        format!("{}...{}", prefix, suffix)
    } else {
        address.to_string()
    }
}

/// Format a number with two decimals and comma thousands separators
pub fn format_thousands(value: f64) -> String {
    let formatted = format!("{:.2}", value.abs());
    let (int_part, frac_part) = formatted.split_once('.').unwrap_or((&formatted, "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    // -0.00 prints as 0.00
    let sign = if value < 0.0 && formatted.chars().any(|c| c != '0' && c != '.') {
        "-"
    } else {
        ""
    };
    format!("{}{}.{}", sign, grouped, frac_part)
}

/// `$1,234.56`
pub fn format_usd(value: f64) -> String {
    format!("${}", format_thousands(value))
}

/// Amount u128 in base units to a decimal amount
pub fn from_base_units(amount: u128, decimals: u8) -> f64 {
    amount as f64 / 10f64.powi(decimals as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shorten_address() {
        assert_eq!(
            shorten_address("0x1234567890abcdef", 5, 3),
            "0x123...def"
        );
        // 11 characters is not worth shortening
        assert_eq!(shorten_address("0x123456789", 5, 3), "0x123456789");
    }

    #[test]
    fn test_format_thousands() {
        assert_eq!(format_thousands(0.0), "0.00");
        assert_eq!(format_thousands(999.994), "999.99");
        assert_eq!(format_thousands(1234.5), "1,234.50");
        assert_eq!(format_thousands(1234567.891), "1,234,567.89");
        assert_eq!(format_thousands(-1234.5), "-1,234.50");
        assert_eq!(format_thousands(-0.001), "0.00");
    }

    #[test]
    fn test_base_units() {
        assert_eq!(from_base_units(1_500_000_000, 9), 1.5);
        assert_eq!(from_base_units(2_000_000, 6), 2.0);
    }
}
