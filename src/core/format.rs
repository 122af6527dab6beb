//! Display formatting for amounts, counts and percentages.

const CRORE: f64 = 10_000_000.0;

/// Rupee amount with Indian digit grouping, e.g. `₹62,50,000`.
pub fn format_inr(amount: i64) -> String {
    let sign = if amount < 0 { "-" } else { "" };
    format!("{sign}₹{}", group_indian(amount.unsigned_abs()))
}

/// Rupee amount in crores with two decimals, e.g. `₹3750.00Cr`.
pub fn format_crore(amount: i64) -> String {
    format!("₹{:.2}Cr", amount as f64 / CRORE)
}

/// Count with western thousands grouping, e.g. `8,247,000`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

pub fn format_percent(value: f64) -> String {
    format!("{value}%")
}

pub fn format_growth(value: f64) -> String {
    let arrow = if value < 0.0 { "↓" } else { "↑" };
    format!("{arrow} {}%", value.abs())
}

pub fn format_latency(ms: u64) -> String {
    format!("{ms}ms")
}

pub fn initials(first_name: &str, last_name: &str) -> String {
    first_name
        .chars()
        .next()
        .into_iter()
        .chain(last_name.chars().next())
        .collect()
}

fn group_indian(value: u64) -> String {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_inr_grouping() {
        assert_eq!(format_inr(0), "₹0");
        assert_eq!(format_inr(999), "₹999");
        assert_eq!(format_inr(7499), "₹7,499");
        assert_eq!(format_inr(154166), "₹1,54,166");
        assert_eq!(format_inr(6250000), "₹62,50,000");
        assert_eq!(format_inr(15000000), "₹1,50,00,000");
        assert_eq!(format_inr(-1850000), "-₹18,50,000");
    }

    #[test]
    fn test_format_crore() {
        assert_eq!(format_crore(37500000000), "₹3750.00Cr");
        assert_eq!(format_crore(45800000000), "₹4580.00Cr");
        assert_eq!(format_crore(0), "₹0.00Cr");
    }

    #[test]
    fn test_format_count() {
        assert_eq!(format_count(0), "0");
        assert_eq!(format_count(999), "999");
        assert_eq!(format_count(5200), "5,200");
        assert_eq!(format_count(8247000), "8,247,000");
    }

    #[test]
    fn test_format_percent_and_growth() {
        assert_eq!(format_percent(99.97), "99.97%");
        assert_eq!(format_percent(28.0), "28%");
        assert_eq!(format_growth(12.0), "↑ 12%");
        assert_eq!(format_growth(-3.5), "↓ 3.5%");
        assert_eq!(format_latency(42), "42ms");
    }

    #[test]
    fn test_initials() {
        assert_eq!(initials("Sarah", "Johnson"), "SJ");
        assert_eq!(initials("", "Johnson"), "J");
    }
}
