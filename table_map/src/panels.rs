//! Переключение панелей схемы зала.

use commons::models::{Panel, Selector};
use serde::Serialize;
use std::collections::BTreeSet;

/// Видимость панелей и активность переключателей.
///
/// Начальное состояние задаётся разметкой страницы; после любого вызова
/// [`PanelBoard::show_panel`] видна ровно одна панель и активен ровно один
/// переключатель.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PanelBoard {
    visible: BTreeSet<Panel>,
    active: BTreeSet<Selector>,
}

impl Default for PanelBoard {
    fn default() -> Self {
        Self::from_markup([Panel::GreatHall], [Selector::GreatHall])
    }
}

impl PanelBoard {
    /// Состояние, заданное разметкой: видимые панели и активные переключатели.
    pub fn from_markup(
        visible: impl IntoIterator<Item = Panel>,
        active: impl IntoIterator<Item = Selector>,
    ) -> Self {
        Self {
            visible: visible.into_iter().collect(),
            active: active.into_iter().collect(),
        }
    }

    /// Скрыть все панели, снять активность со всех переключателей, затем
    /// показать `panel` и активировать `selector`.
    pub fn show_panel(&mut self, panel: Panel, selector: Selector) {
        self.visible.clear();
        self.active.clear();
        self.visible.insert(panel);
        self.active.insert(selector);
    }

    pub fn is_visible(&self, panel: Panel) -> bool {
        self.visible.contains(&panel)
    }

    pub fn is_active(&self, selector: Selector) -> bool {
        self.active.contains(&selector)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn show_panel_leaves_exactly_one_visible() {
        let mut board = PanelBoard::from_markup(Panel::ALL, Selector::ALL);

        board.show_panel(Panel::Gallery, Selector::Gallery);

        for panel in Panel::ALL {
            assert_eq!(board.is_visible(panel), panel == Panel::Gallery);
        }
        for selector in Selector::ALL {
            assert_eq!(board.is_active(selector), selector == Selector::Gallery);
        }
    }

    #[test]
    fn show_panel_is_idempotent() {
        let mut once = PanelBoard::default();
        once.show_panel(Panel::LeftHall, Selector::LeftHall);
        let mut twice = once.clone();
        twice.show_panel(Panel::LeftHall, Selector::LeftHall);

        assert_eq!(once, twice);
    }

    #[test]
    fn initial_state_comes_from_markup() {
        let board = PanelBoard::from_markup([] as [Panel; 0], [] as [Selector; 0]);
        assert!(Panel::ALL.iter().all(|p| !board.is_visible(*p)));

        let board = PanelBoard::default();
        assert!(board.is_visible(Panel::GreatHall));
        assert!(board.is_active(Selector::GreatHall));
    }
}
