//! Rupee formatting with Indian digit grouping

/// `₹` followed by lakh/crore grouping: the last three digits, then pairs
///
/// `format_inr(12_345_678) == "₹1,23,45,678"`
pub fn format_inr(amount: i64) -> String {
    let digits = amount.unsigned_abs().to_string();
    let sign = if amount < 0 { "-" } else { "" };
    format!("{}₹{}", sign, group_indian(&digits))
}

/// Whole-number percentage, `"12%"`
///
/// Chart and insight percentages are already rounded integers, so no
/// fraction digits are rendered. This is not the site's percent formatter,
/// which shows one or two fraction digits.
pub fn format_percent(value: i64) -> String {
    format!("{}%", value)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
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
