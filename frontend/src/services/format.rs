//! Currency formatting for the two screens.
//!
//! The list shows earnings in dollars with thousands separators, the detail
//! screen shows entry amounts in rupees with two decimals.

use shared::without_negative_zero;

/// Format an amount as rupees, e.g. `₹200.00` or `₹-50.00`
pub fn format_rupees(amount: f64) -> String {
    format!("₹{:.2}", without_negative_zero(amount))
}

/// Format a deposit or due, prefixing received money with `+`
pub fn format_deposit(amount: f64) -> String {
    if amount >= 0.0 {
        format!("+{}", format_rupees(amount))
    } else {
        format_rupees(amount)
    }
}

/// Format earnings in dollars, e.g. `$75,000` or `$1,250.50`
pub fn format_dollars(amount: f64) -> String {
    let sign = if amount < 0.0 { "-" } else { "" };
    let cents = (amount.abs() * 100.0).round() as u64;
    let whole = group_thousands(cents / 100);
    match cents % 100 {
        0 => format!("{}${}", sign, whole),
        fraction => format!("{}${}.{:02}", sign, whole, fraction),
    }
}

fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    grouped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_rupees() {
        assert_eq!(format_rupees(200.0), "₹200.00");
        assert_eq!(format_rupees(22.5), "₹22.50");
        assert_eq!(format_rupees(-50.0), "₹-50.00");
        assert_eq!(format_rupees(-0.0), "₹0.00");
    }

    #[test]
    fn test_format_deposit() {
        assert_eq!(format_deposit(180.0), "+₹180.00");
        assert_eq!(format_deposit(0.0), "+₹0.00");
        assert_eq!(format_deposit(-50.0), "₹-50.00");
        assert_eq!(format_deposit(-0.0), "+₹0.00");
    }

    #[test]
    fn test_format_dollars() {
        assert_eq!(format_dollars(75000.0), "$75,000");
        assert_eq!(format_dollars(0.0), "$0");
        assert_eq!(format_dollars(999.0), "$999");
        assert_eq!(format_dollars(1250.5), "$1,250.50");
        assert_eq!(format_dollars(1234567.0), "$1,234,567");
        assert_eq!(format_dollars(-560.0), "-$560");
    }
}
