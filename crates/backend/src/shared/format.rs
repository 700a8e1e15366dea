/// Форматирует число с разделителями триад `sep`.
///
/// # Примеры
/// ```
/// use backend::shared::format::group_thousands;
/// assert_eq!(group_thousands(1234567, '.'), "1.234.567");
/// assert_eq!(group_thousands(42, ','), "42");
/// ```
pub fn group_thousands(n: usize, sep: char) -> String {
    let digits = n.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(sep);
        }
        grouped.push(ch);
    }
    grouped
}
