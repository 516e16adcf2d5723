use chrono::NaiveDateTime;

/// Currency glyph prefixed to every rendered amount
pub const TAKA_SIGN: char = '৳';

/// Group an integer into thousands with commas: 1234567 -> "1,234,567"
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }

    grouped
}

/// Format a whole-unit amount for display, e.g. 3485 -> "৳3,485"
pub fn format_taka(amount: u64) -> String {
    format!("{}{}", TAKA_SIGN, group_thousands(amount))
}

/// Format an admission deadline the way the notice reads it:
/// "August 17, 2025 at 12:00 PM"
pub fn format_deadline(deadline: &NaiveDateTime) -> String {
    deadline.format("%B %-d, %Y at %-I:%M %p").to_string()
}

/// Truncate a string to a maximum number of characters, adding ellipsis if needed
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        s.chars().take(max_len).collect()
    } else {
        let truncated: String = s.chars().take(max_len - 3).collect();
        format!("{}...", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1000), "1,000");
        assert_eq!(group_thousands(3485), "3,485");
        assert_eq!(group_thousands(100000), "100,000");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }

    #[test]
    fn test_format_taka() {
        assert_eq!(format_taka(3485), "৳3,485");
        assert_eq!(format_taka(35), "৳35");
    }

    #[test]
    fn test_format_deadline() {
        let deadline = NaiveDate::from_ymd_opt(2025, 8, 17)
            .and_then(|d| d.and_hms_opt(12, 0, 0))
            .expect("valid date");
        assert_eq!(format_deadline(&deadline), "August 17, 2025 at 12:00 PM");

        let morning = NaiveDate::from_ymd_opt(2025, 9, 3)
            .and_then(|d| d.and_hms_opt(9, 30, 0))
            .expect("valid date");
        assert_eq!(format_deadline(&morning), "September 3, 2025 at 9:30 AM");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("12345", 10), "12345");
        assert_eq!(truncate_string("Hello World", 8), "Hello...");
        assert_eq!(truncate_string("Hi", 2), "Hi");
    }
}
