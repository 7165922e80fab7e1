//! Подсчёт итоговой стоимости и табло с ценой.

use crate::config::{CURRENCY, MAX_TABLES, UNIT_PRICE};
use crate::input::is_numeric;
use serde::Serialize;

/// Правила подсчёта стоимости.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PriceRules {
    /// Стоимость одного места.
    pub unit_price: u32,
    /// Максимум мест, ограничивает допустимую сумму.
    pub max_tables: u32,
}

impl Default for PriceRules {
    fn default() -> Self {
        Self {
            unit_price: UNIT_PRICE,
            max_tables: MAX_TABLES,
        }
    }
}

impl PriceRules {
    /// Наибольшая сумма, которую допустимо показать на табло.
    pub fn ceiling(&self) -> i64 {
        i64::from(self.max_tables) * i64::from(self.unit_price)
    }
}

/// Посчитать итог по значениям полей ввода.
///
/// Нецелые значения дают 0. Возвращает `None`, если сумма вне
/// `[0, ceiling]` (в том числе при переполнении), и тогда табло
/// обновлять нельзя.
pub fn compute_total<'a, I>(values: I, rules: &PriceRules) -> Option<i64>
where
    I: IntoIterator<Item = &'a str>,
{
    let unit_price = i64::from(rules.unit_price);
    let mut total: i64 = 0;

    for value in values {
        if !is_numeric(value) {
            continue;
        }
        let seats: i64 = value.parse().ok()?;
        total = total.checked_add(seats.checked_mul(unit_price)?)?;
    }

    (0..=rules.ceiling()).contains(&total).then_some(total)
}

/// Табло с итоговой стоимостью (`id="cena"`).
///
/// Пока ни один итог не был принят, табло пустое, как в исходной разметке.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PriceDisplay {
    total: Option<i64>,
}

impl PriceDisplay {
    pub fn new() -> Self {
        Self::default()
    }

    /// Показать итог. `None` оставляет прежнее значение.
    ///
    /// Возвращает `true`, если табло обновлено.
    pub fn show(&mut self, total: Option<i64>) -> bool {
        match total {
            Some(total) => {
                self.total = Some(total);
                true
            }
            None => false,
        }
    }

    /// Последний показанный итог.
    pub fn total(&self) -> Option<i64> {
        self.total
    }

    /// Текст табло.
    pub fn text(&self) -> String {
        match self.total {
            Some(total) => format!("Total price: {} {}", total, CURRENCY),
            None => String::new(),
        }
    }
}
