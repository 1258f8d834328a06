use rust_decimal::Decimal;

/// Formats a dollar amount with thousands separators: `$1,446`, `$12.50`.
/// Whole amounts drop the fraction.
pub fn format_money(amount: Decimal) -> String {
    let normalized = amount.normalize();
    let negative = normalized.is_sign_negative() && !normalized.is_zero();
    let text = normalized.abs().to_string();

    let (whole, fraction) = match text.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (text.as_str(), None),
    };

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    match fraction {
        Some(fraction) => format!("{sign}${grouped}.{fraction:0<2}"),
        None => format!("{sign}${grouped}"),
    }
}

/// Formats a flag for summaries.
pub fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn whole_amounts_have_no_fraction() {
        assert_eq!(format_money(dec!(548)), "$548");
        assert_eq!(format_money(dec!(548.00)), "$548");
    }

    #[test]
    fn thousands_are_grouped() {
        assert_eq!(format_money(dec!(1446)), "$1,446");
        assert_eq!(format_money(dec!(1234567)), "$1,234,567");
    }

    #[test]
    fn fractions_padded_to_cents() {
        assert_eq!(format_money(dec!(12.5)), "$12.50");
    }

    #[test]
    fn negative_and_zero() {
        assert_eq!(format_money(dec!(-1000)), "-$1,000");
        assert_eq!(format_money(Decimal::ZERO), "$0");
    }
}
