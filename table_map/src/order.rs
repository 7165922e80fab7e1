//! Разбор отправленной формы с выбранными столами в заказ.

use crate::config::FIELD_PREFIX;
use crate::models::Catalog;
use crate::pricing::PriceRules;
use commons::errors::SeatError;
use commons::models::TableInfo;
use serde::Serialize;

/// Строка заказа: стол и количество мест.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderLine {
    pub table: TableInfo,
    pub seats: u32,
}

/// Заказ мест по столам.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Order {
    lines: Vec<OrderLine>,
}

impl Order {
    /// Собрать заказ из полей формы.
    ///
    /// Учитываются только поля, имя которых начинается с `field`; остаток
    /// имени — `id` стола.
    ///
    /// ## Ошибки
    ///
    /// [`SeatError::OrderError`] с сообщением для пользователя, если значение
    /// не целое положительное, стол неизвестен или на нём меньше свободных мест, если
    /// не выбран ни один стол, либо мест больше лимита `rules.max_tables`.
    pub fn from_form<I, K, V>(
        fields: I,
        catalog: &Catalog,
        rules: &PriceRules,
    ) -> Result<Self, SeatError>
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut lines: Vec<OrderLine> = Vec::new();

        for (name, value) in fields {
            let Some(table_id) = name.as_ref().strip_prefix(FIELD_PREFIX) else {
                continue;
            };

            let seats = value
                .as_ref()
                .trim()
                .parse::<u32>()
                .ok()
                .filter(|&seats| seats > 0)
                .ok_or_else(|| SeatError::order_err("Wrongly entered table."))?;

            let table = catalog.get(table_id).ok_or_else(|| {
                SeatError::order_err(format!("Table {} does not exist.", table_id))
            })?;

            if seats > table.free_seats {
                return Err(SeatError::order_err(format!(
                    "Table no. {} ({}) has only {} free seats.",
                    table.number_in_hall, table.hall, table.free_seats
                )));
            }

            match lines.iter_mut().find(|l| l.table.id == table.id) {
                Some(line) => line.seats = seats,
                None => lines.push(OrderLine {
                    table: table.clone(),
                    seats,
                }),
            }
        }

        if lines.is_empty() {
            return Err(SeatError::order_err("Choose at least one table."));
        }

        let order = Self { lines };
        if order.seats() > u64::from(rules.max_tables) {
            return Err(SeatError::order_err(format!(
                "You choose too many seats. The limit is {}.",
                rules.max_tables
            )));
        }

        Ok(order)
    }

    #[cfg(test)]
    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    /// Всего мест в заказе.
    pub fn seats(&self) -> u64 {
        self.lines.iter().map(|l| u64::from(l.seats)).sum()
    }

    /// Стоимость заказа.
    pub fn price(&self, rules: &PriceRules) -> u64 {
        self.seats() * u64::from(rules.unit_price)
    }

    /// Строки для подтверждения заказа, упорядоченные по `id` стола:
    /// `"table no. 5 (Great Hall, 3 seats)"`.
    pub fn summary(&self) -> Vec<String> {
        let mut lines: Vec<&OrderLine> = self.lines.iter().collect();
        lines.sort_by(|a, b| table_order(&a.table.id, &b.table.id));

        lines
            .into_iter()
            .map(|l| {
                format!(
                    "table no. {} ({}, {} seats)",
                    l.table.number_in_hall, l.table.hall, l.seats
                )
            })
            .collect()
    }
}

/// Числовые `id` сравниваются как числа, остальные — как строки после них.
fn table_order(a: &str, b: &str) -> std::cmp::Ordering {
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(a), Ok(b)) => a.cmp(&b),
        (Ok(_), Err(_)) => std::cmp::Ordering::Less,
        (Err(_), Ok(_)) => std::cmp::Ordering::Greater,
        (Err(_), Err(_)) => a.cmp(b),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Catalog {
        Catalog::new(vec![
            "5|10|5|Great Hall|velky_sal_div".parse().unwrap(),
            "44|4|44|Left Hall|levy_sal_div".parse().unwrap(),
            "84|6|1|Second Floor|galerie_div".parse().unwrap(),
        ])
        .unwrap()
    }

    #[test]
    fn builds_order_from_field_inputs() {
        let rules = PriceRules::default();
        let form = [("field84", "2"), ("field5", "3"), ("submit_btn", "send")];

        let order = Order::from_form(form, &catalog(), &rules).unwrap();

        assert_eq!(order.lines().len(), 2);
        assert_eq!(order.seats(), 5);
        assert_eq!(order.price(&rules), 1500);
        assert_eq!(
            order.summary(),
            vec![
                "table no. 5 (Great Hall, 3 seats)",
                "table no. 1 (Second Floor, 2 seats)",
            ]
        );
    }

    #[test]
    fn rejects_non_integer_value() {
        let err = Order::from_form([("field5", "2.5")], &catalog(), &PriceRules::default())
            .unwrap_err();
        assert_eq!(err.to_string(), "Wrongly entered table.");
    }

    #[test]
    fn rejects_zero_seats() {
        let rules = PriceRules::default();
        let form = [("field84", "2"), ("field5", "0")];

        let err = Order::from_form(form, &catalog(), &rules).unwrap_err();

        assert_eq!(err.to_string(), "Wrongly entered table.");
    }

    #[test]
    fn rejects_empty_form() {
        let form: [(&str, &str); 0] = [];
        let err = Order::from_form(form, &catalog(), &PriceRules::default()).unwrap_err();
        assert_eq!(err.to_string(), "Choose at least one table.");
    }

    #[test]
    fn rejects_too_many_seats() {
        let rules = PriceRules {
            unit_price: 300,
            max_tables: 12,
        };
        let form = [("field5", "10"), ("field44", "4")];

        let err = Order::from_form(form, &catalog(), &rules).unwrap_err();

        assert_eq!(err.to_string(), "You choose too many seats. The limit is 12.");
    }

    #[test]
    fn rejects_more_than_free_seats_and_unknown_tables() {
        let rules = PriceRules::default();
        assert!(Order::from_form([("field44", "5")], &catalog(), &rules).is_err());
        assert!(Order::from_form([("field999", "1")], &catalog(), &rules).is_err());
    }

    #[test]
    fn numeric_ids_sort_numerically() {
        assert!(table_order("5", "44").is_lt());
        assert!(table_order("44", "x1").is_lt());
        assert!(table_order("a", "b").is_lt());
    }
}
