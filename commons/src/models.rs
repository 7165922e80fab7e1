//! Модели данных для приложений.

use crate::errors::SeatError;
use macros::{PipeRecord, StrEnum};
use serde::{Deserialize, Serialize};

/// Панель схемы зала. Одновременно видна только одна.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, StrEnum, Serialize, Deserialize,
)]
pub enum Panel {
    /// Большой зал.
    #[str("velky_sal_div")]
    GreatHall,
    /// Левый зал.
    #[str("levy_sal_div")]
    LeftHall,
    /// Правый зал.
    #[str("pravy_sal_div")]
    RightHall,
    /// Зал первого этажа.
    #[str("prizemi_sal_div")]
    GroundFloor,
    /// Галерея (второй этаж).
    #[str("galerie_div")]
    Gallery,
}

/// Кнопка-переключатель панелей.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, StrEnum, Serialize, Deserialize,
)]
pub enum Selector {
    #[str("show_velky_sal")]
    GreatHall,
    #[str("show_levy_sal")]
    LeftHall,
    #[str("show_pravy_sal")]
    RightHall,
    #[str("show_prizemi_sal")]
    GroundFloor,
    #[str("show_galerie")]
    Gallery,
}

impl Selector {
    /// Переключатель, который на схеме соответствует панели.
    pub fn for_panel(panel: Panel) -> Selector {
        match panel {
            Panel::GreatHall => Selector::GreatHall,
            Panel::LeftHall => Selector::LeftHall,
            Panel::RightHall => Selector::RightHall,
            Panel::GroundFloor => Selector::GroundFloor,
            Panel::Gallery => Selector::Gallery,
        }
    }
}

/// Стол на схеме зала.
///
/// Данные поступают извне (файл с описанием столов) и не меняются в течение
/// сессии. Строковое представление: `id|free_seats|number_in_hall|hall|panel`.
#[derive(Debug, Clone, PartialEq, Eq, PipeRecord, Serialize, Deserialize)]
pub struct TableInfo {
    /// Идентификатор стола (он же `id` кнопки на схеме).
    pub id: String,
    /// Количество свободных мест.
    pub free_seats: u32,
    /// Номер стола внутри зала.
    pub number_in_hall: u32,
    /// Отображаемое название зала.
    pub hall: String,
    /// Панель, на которой расположен стол.
    pub panel: Panel,
}

impl TableInfo {
    /// Можно ли выбрать стол (есть хотя бы одно свободное место).
    pub fn is_selectable(&self) -> bool {
        self.free_seats > 0
    }
}
