//! Форматирование чисел в стиле pt-BR (разделитель тысяч ".", дробной части ",")

/// Группирует целое число точками
///
/// # Примеры
/// ```
/// use contracts::dashboards::d404_fiscal_outlook::format::format_thousands;
/// assert_eq!(format_thousands(1234567), "1.234.567");
/// assert_eq!(format_thousands(42), "42");
/// ```
pub fn format_thousands(n: u64) -> String {
    group_digits(&n.to_string())
}

fn group_digits(digits: &str) -> String {
    let mut result = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push('.');
        }
        result.push(ch);
    }
    result.chars().rev().collect()
}

/// Число с `decimals` знаками после запятой: `1234.5` -> `"1.234,50"`
pub fn format_decimal(value: f64, decimals: usize) -> String {
    let formatted = format!("{:.prec$}", value.abs(), prec = decimals);
    let (int_part, frac_part) = match formatted.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (formatted.as_str(), None),
    };

    let mut result = String::new();
    // "-0,00" не показываем
    if value < 0.0 && formatted.chars().any(|c| c.is_ascii_digit() && c != '0') {
        result.push('-');
    }
    result.push_str(&group_digits(int_part));
    if let Some(frac) = frac_part {
        result.push(',');
        result.push_str(frac);
    }
    result
}

/// Денежная сумма без символа валюты: `28068170.22` -> `"28.068.170,22"`
pub fn format_brl(value: f64) -> String {
    format_decimal(value, 2)
}

/// Сумма в миллионах: `377266566.48, 0` -> `"R$ 377M"`
pub fn format_brl_millions(value: f64, decimals: usize) -> String {
    format!("R$ {}M", format_decimal(value / 1_000_000.0, decimals))
}

/// Сумма в тысячах для списка: `28068170.22` -> `"R$ 28.068k"`
pub fn format_brl_thousands(value: f64) -> String {
    format!("R$ {}k", format_decimal(value / 1_000.0, 0))
}

/// Процент со знаком "+" для положительных: `36.6` -> `"+36,60%"`
pub fn format_signed_percent(value: f64, decimals: usize) -> String {
    let sign = if value > 0.0 { "+" } else { "" };
    format!("{}{}%", sign, format_decimal(value, decimals))
}

/// Значение индекса IVA/IPM, 4 знака
pub fn format_index(value: f64) -> String {
    format_decimal(value, 4)
}
