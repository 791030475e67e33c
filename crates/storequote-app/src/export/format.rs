//! Rupee formatting helpers

/// Group digits the Indian way: last three, then pairs (`12,34,567`)
pub fn group_indian(value: u64) -> String {
    let digits = value.to_string();
    if digits.len() <= 3 {
        return digits;
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();
    format!("{},{}", groups.join(","), tail)
}

/// Whole-rupee amount, e.g. `₹1,23,456`
pub fn format_rupees(amount: u64) -> String {
    format!("₹{}", group_indian(amount))
}

/// Per-unit rate; whole rates print without decimals
pub fn format_rate(rate: f64) -> String {
    if rate.fract() == 0.0 && rate >= 0.0 && rate < u64::MAX as f64 {
        format_rupees(rate as u64)
    } else {
        format!("₹{:.2}", rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian(0), "0");
        assert_eq!(group_indian(999), "999");
        assert_eq!(group_indian(1000), "1,000");
        assert_eq!(group_indian(123456), "1,23,456");
        assert_eq!(group_indian(12345678), "1,23,45,678");
    }

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(4202), "₹4,202");
        assert_eq!(format_rupees(348), "₹348");
    }

    #[test]
    fn test_format_rate() {
        assert_eq!(format_rate(45.0), "₹45");
        assert_eq!(format_rate(2.5), "₹2.50");
    }
}
