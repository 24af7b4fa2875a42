//! Number formatting in the Indonesian locale

/// Groups the integer part with '.' and writes up to two decimals after ','
///
/// # Examples
///
/// ```
/// use frontend::shared::number_format::format_id_number;
/// assert_eq!(format_id_number(1234567.5), "1.234.567,5");
/// ```
pub fn format_id_number(value: f64) -> String {
    let formatted = format!("{:.2}", value);
    let (integer_part, decimal_part) = formatted.split_once('.').unwrap_or((&formatted, ""));

    let mut result = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            result.push('.');
        }
        result.push(*c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    let decimals = decimal_part.trim_end_matches('0');
    if decimals.is_empty() {
        formatted_integer
    } else {
        format!("{formatted_integer},{decimals}")
    }
}

/// Money cell: "Rp. 120.000"
pub fn format_rupiah(value: f64, prefix: &str) -> String {
    format!("{prefix} {}", format_id_number(value))
}

/// Order count detail: "1.250 pesanan"
pub fn format_orders(count: u64) -> String {
    format!("{} pesanan", format_id_number(count as f64))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_id_number() {
        assert_eq!(format_id_number(0.0), "0");
        assert_eq!(format_id_number(999.0), "999");
        assert_eq!(format_id_number(120000.0), "120.000");
        assert_eq!(format_id_number(2500000.0), "2.500.000");
        assert_eq!(format_id_number(-1234.0), "-1.234");
        assert_eq!(format_id_number(10777.25), "10.777,25");
    }

    #[test]
    fn test_format_rupiah() {
        assert_eq!(format_rupiah(120000.0, "Rp."), "Rp. 120.000");
        assert_eq!(format_rupiah(269.0, "Rp."), "Rp. 269");
    }

    #[test]
    fn test_format_orders() {
        assert_eq!(format_orders(0), "0 pesanan");
        assert_eq!(format_orders(5), "5 pesanan");
        assert_eq!(format_orders(1250), "1.250 pesanan");
    }
}
