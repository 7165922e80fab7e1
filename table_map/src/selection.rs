//! Учёт выбранных столов.
//!
//! Выбор стола — это запись в реестре [`Selections`] со значением поля
//! количества мест. Повторный выбор того же стола снимает запись целиком.

use crate::input::{SeatDomain, sanitize_input};
use commons::models::TableInfo;
use serde::Serialize;

/// Результат переключения стола.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Toggle {
    /// Стол выбран, создано поле ввода.
    Selected,
    /// Выбор снят, поле удалено.
    Deselected,
}

/// Выбранный стол и текущее (сырое) значение его поля ввода.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Selection {
    table: TableInfo,
    value: String,
}

impl Selection {
    /// Новый выбор: значение поля равно числу свободных мест.
    pub fn new(table: TableInfo) -> Self {
        let value = table.free_seats.to_string();
        Self { table, value }
    }

    pub fn table(&self) -> &TableInfo {
        &self.table
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Допустимый диапазон количества мест, `[1, free_seats]`.
    pub fn domain(&self) -> SeatDomain {
        SeatDomain::for_free_seats(self.table.free_seats)
    }

    /// Подпись к полю, например `"Table no. 5 (Great Hall) "`.
    pub fn label(&self) -> String {
        format!(
            "Table no. {} ({}) ",
            self.table.number_in_hall, self.table.hall
        )
    }

    /// Принять правку поля: значение проходит через [`sanitize_input`].
    ///
    /// Возвращает значение, сохранённое после приведения.
    pub fn edit(&mut self, raw: &str) -> &str {
        self.value = sanitize_input(raw, self.domain());
        &self.value
    }
}

/// Реестр выбранных столов в порядке выбора.
///
/// Для каждого стола существует не более одной записи.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Selections {
    items: Vec<Selection>,
}

impl Selections {
    pub fn new() -> Self {
        Self::default()
    }

    /// Переключить стол: создать запись, если её нет, иначе удалить.
    pub fn toggle(&mut self, table: &TableInfo) -> Toggle {
        match self.position(&table.id) {
            Some(index) => {
                self.items.remove(index);
                Toggle::Deselected
            }
            None => {
                self.items.push(Selection::new(table.clone()));
                Toggle::Selected
            }
        }
    }

    /// Чистый вариант [`Selections::toggle`]: возвращает новое состояние.
    #[cfg(test)]
    pub fn toggled(mut self, table: &TableInfo) -> Self {
        self.toggle(table);
        self
    }

    pub fn contains(&self, table_id: &str) -> bool {
        self.position(table_id).is_some()
    }

    #[cfg(test)]
    pub fn get(&self, table_id: &str) -> Option<&Selection> {
        self.items.iter().find(|s| s.table.id == table_id)
    }

    pub fn get_mut(&mut self, table_id: &str) -> Option<&mut Selection> {
        self.items.iter_mut().find(|s| s.table.id == table_id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Selection> {
        self.items.iter()
    }

    /// Значения всех полей ввода.
    pub fn values(&self) -> impl Iterator<Item = &str> {
        self.items.iter().map(|s| s.value())
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn position(&self, table_id: &str) -> Option<usize> {
        self.items.iter().position(|s| s.table.id == table_id)
    }
}
