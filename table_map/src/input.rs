//! Проверка и приведение значений в поле количества мест.
//!
//! Вызывается обработчиком изменения поля, до пересчёта стоимости.

use serde::Serialize;

/// Допустимый диапазон количества мест для стола: `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SeatDomain {
    pub min: u32,
    pub max: u32,
}

impl SeatDomain {
    /// Диапазон `[1, free_seats]`.
    pub fn for_free_seats(free_seats: u32) -> Self {
        Self {
            min: 1,
            max: free_seats,
        }
    }

    /// Ближайшая граница, если `value` вне диапазона.
    ///
    /// Пустой диапазон (`min > max`, стол без свободных мест) всегда
    /// сводится к `max`.
    fn nearest_bound(&self, value: f64) -> Option<u32> {
        if self.min > self.max {
            Some(self.max)
        } else if value < f64::from(self.min) {
            Some(self.min)
        } else if value > f64::from(self.max) {
            Some(self.max)
        } else {
            None
        }
    }
}

/// Целое число: необязательный минус и одна или более ASCII-цифр.
pub fn is_numeric(value: &str) -> bool {
    let digits = value.strip_prefix('-').unwrap_or(value);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

/// Оставить текст до второй десятичной точки: `"1.5.2"` → `"1.5"`.
fn collapse_decimal_points(raw: &str) -> &str {
    let Some(first) = raw.find('.') else {
        return raw;
    };
    match raw[first + 1..].find('.') {
        Some(second) => &raw[..first + 1 + second],
        None => raw,
    }
}

/// Привести сырое значение поля к допустимому виду.
///
/// 1. Схлопываются повторные десятичные точки.
/// 2. Отбрасываются символы, кроме цифр, точки и ведущего минуса.
/// 3. Число вне `domain` заменяется ближайшей границей.
///
/// Остальное возвращается как есть: `""` или `"2.5"` не являются целыми
/// и при подсчёте стоимости дают 0.
pub fn sanitize_input(raw: &str, domain: SeatDomain) -> String {
    let collapsed = collapse_decimal_points(raw);
    let filtered: String = collapsed
        .char_indices()
        .filter(|&(i, c)| c.is_ascii_digit() || c == '.' || (i == 0 && c == '-'))
        .map(|(_, c)| c)
        .collect();

    match filtered.parse::<f64>() {
        Ok(value) => match domain.nearest_bound(value) {
            Some(bound) => bound.to_string(),
            None => filtered,
        },
        Err(_) => filtered,
    }
}
