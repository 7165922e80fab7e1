//! Модели данных для приложения.

use commons::errors::SeatError;
use commons::get_table_data;
use commons::models::TableInfo;
use std::collections::HashMap;
use std::path::Path;

/// Каталог столов схемы зала. Неизменяем в течение сессии.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    /// Столы в порядке описания.
    tables: Vec<TableInfo>,
    /// Индекс `id` → позиция в `tables`.
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Создать каталог из готового списка столов.
    pub fn new(tables: Vec<TableInfo>) -> Result<Self, SeatError> {
        let mut index = HashMap::with_capacity(tables.len());
        for (pos, table) in tables.iter().enumerate() {
            if index.insert(table.id.clone(), pos).is_some() {
                return Err(SeatError::table_err(format!(
                    "стол '{}' описан повторно",
                    table.id
                )));
            }
        }
        Ok(Self { tables, index })
    }

    /// Загрузить каталог из файла данных.
    pub fn load(path: &Path) -> Result<Self, SeatError> {
        Self::new(get_table_data(path)?)
    }

    pub fn get(&self, table_id: &str) -> Option<&TableInfo> {
        self.index.get(table_id).map(|&pos| &self.tables[pos])
    }

    /// Найти стол или вернуть [`SeatError::TableError`].
    pub fn require(&self, table_id: &str) -> Result<&TableInfo, SeatError> {
        self.get(table_id)
            .ok_or_else(|| SeatError::table_err(format!("стол '{}' не найден", table_id)))
    }

    pub fn iter(&self) -> impl Iterator<Item = &TableInfo> {
        self.tables.iter()
    }

    pub fn len(&self) -> usize {
        self.tables.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{DATA_FOLDER, TABLES_FILENAME};
    use commons::utils::get_workspace_root;

    fn sample() -> Vec<TableInfo> {
        vec![
            "5|10|5|Great Hall|velky_sal_div".parse().unwrap(),
            "84|6|1|Second Floor|galerie_div".parse().unwrap(),
        ]
    }

    #[test]
    fn finds_table_by_id() {
        let catalog = Catalog::new(sample()).unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.get("84").unwrap().number_in_hall, 1);
        assert!(catalog.get("6").is_none());
        assert!(matches!(catalog.require("6"), Err(SeatError::TableError(_))));
    }

    #[test]
    fn rejects_duplicates() {
        let mut tables = sample();
        tables.push(tables[0].clone());
        assert!(Catalog::new(tables).is_err());
    }

    #[test]
    fn bundled_data_loads() {
        let path = get_workspace_root().join(DATA_FOLDER).join(TABLES_FILENAME);
        let catalog = Catalog::load(&path).unwrap();

        assert_eq!(catalog.len(), 113);
        assert_eq!(catalog.get("84").unwrap().hall, "Second Floor");
    }
}
