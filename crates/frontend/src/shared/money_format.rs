//! Форматирование денежных сумм для итогов заказа

use contracts::domain::common::Money;

/// Форматирует число с разделителем тысяч (пробел) и указанным количеством знаков после запятой
///
/// ```
/// use order_dashboard::shared::money_format::format_number_with_decimals;
/// assert_eq!(format_number_with_decimals(1234.567, 2), "1 234.57");
/// ```
pub fn format_number_with_decimals(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.*}", decimals, value);

    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted.as_str(), None),
    };

    // Вставляем пробелы каждые 3 цифры с конца целой части
    let mut result = String::new();
    for (i, c) in integer_part.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 && c != '-' {
            result.push(' ');
        }
        result.push(c);
    }
    let formatted_integer = result.chars().rev().collect::<String>();

    match decimal_part {
        Some(d) => format!("{}.{}", formatted_integer, d),
        None => formatted_integer,
    }
}

/// Сумма с кодом валюты: "1 234.50 USD"
pub fn format_money(money: &Money) -> String {
    format!(
        "{} {}",
        format_number_with_decimals(money.amount, 2),
        money.currency
    )
}

/// Сумма или прочерк, пока сумма не известна
pub fn format_money_opt(money: Option<&Money>) -> String {
    money.map(format_money).unwrap_or_else(|| "—".to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number_with_decimals() {
        assert_eq!(format_number_with_decimals(1234.567, 0), "1 235");
        assert_eq!(format_number_with_decimals(1234.567, 1), "1 234.6");
        assert_eq!(format_number_with_decimals(-1234.5, 2), "-1 234.50");
        assert_eq!(format_number_with_decimals(123.0, 2), "123.00");
    }

    #[test]
    fn test_format_money() {
        assert_eq!(format_money(&Money::new(1234567.891, "USD")), "1 234 567.89 USD");
        assert_eq!(format_money_opt(None), "—");
    }
}
