//! Состояние страницы со схемой зала и операции над ним.
//!
//! Все операции синхронны и выполняются до конца в рамках одного события
//! (клик по столу, правка поля, переключение панели).

use crate::models::Catalog;
use crate::order::Order;
use crate::panels::PanelBoard;
use crate::pricing::{PriceDisplay, PriceRules, compute_total};
use crate::render::{Element, form_fields, render_page};
use crate::selection::{Selections, Toggle};
use commons::errors::SeatError;
use commons::models::{Panel, Selector, TableInfo};
use log::{debug, info};
use serde::Serialize;

/// Снимок состояния для выгрузки в JSON.
#[derive(Debug, Serialize)]
pub struct Snapshot<'a> {
    pub selections: &'a Selections,
    pub total: Option<i64>,
    pub panels: &'a PanelBoard,
    pub rules: &'a PriceRules,
}

/// Страница выбора столов.
#[derive(Debug, Clone)]
pub struct TableMap {
    catalog: Catalog,
    rules: PriceRules,
    selections: Selections,
    display: PriceDisplay,
    panels: PanelBoard,
}

impl TableMap {
    pub fn new(catalog: Catalog, rules: PriceRules) -> Self {
        Self::with_panels(catalog, rules, PanelBoard::default())
    }

    /// Страница с начальным состоянием панелей из разметки.
    pub fn with_panels(catalog: Catalog, rules: PriceRules, panels: PanelBoard) -> Self {
        Self {
            catalog,
            rules,
            selections: Selections::new(),
            display: PriceDisplay::new(),
            panels,
        }
    }

    /// Переключить выбор стола и пересчитать итог.
    ///
    /// Стол без свободных мест тоже переключается: отсекать такие столы
    /// должен вызывающий код.
    pub fn toggle_table(&mut self, table: &TableInfo) -> Toggle {
        let outcome = self.selections.toggle(table);
        info!(
            "Стол {}: {:?}, выбрано столов: {}",
            table.id,
            outcome,
            self.selections.len()
        );

        self.recompute_total();
        outcome
    }

    /// Пересчитать итог по всем выбранным столам и обновить табло.
    ///
    /// Возвращает `true`, если табло обновлено (итог в допустимом диапазоне).
    pub fn recompute_total(&mut self) -> bool {
        let total = compute_total(self.selections.values(), &self.rules);
        let updated = self.display.show(total);
        if !updated {
            debug!("Итог вне допустимого диапазона, табло не изменено");
        }
        updated
    }

    /// Правка поля количества мест выбранного стола.
    ///
    /// Значение приводится к допустимому виду, затем итог пересчитывается.
    /// Возвращает сохранённое значение.
    pub fn edit_seats(&mut self, table_id: &str, raw: &str) -> Result<String, SeatError> {
        let selection = self.selections.get_mut(table_id).ok_or_else(|| {
            SeatError::value_err(format!("стол '{}' не выбран", table_id))
        })?;

        let stored = selection.edit(raw).to_string();
        debug!("Поле стола {}: '{}' -> '{}'", table_id, raw, stored);

        self.recompute_total();
        Ok(stored)
    }

    /// Показать панель и активировать переключатель.
    pub fn show_panel(&mut self, panel: Panel, selector: Selector) {
        self.panels.show_panel(panel, selector);
        info!("Показана панель {} ({})", panel, selector);
    }

    /// Отправить форму: собрать заказ из текущих полей ввода.
    pub fn submit(&self) -> Result<Order, SeatError> {
        let fields = form_fields(&self.render());
        Order::from_form(fields, &self.catalog, &self.rules)
    }

    pub fn render(&self) -> Element {
        render_page(self)
    }

    pub fn snapshot(&self) -> Snapshot<'_> {
        Snapshot {
            selections: &self.selections,
            total: self.display.total(),
            panels: &self.panels,
            rules: &self.rules,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn rules(&self) -> &PriceRules {
        &self.rules
    }

    pub fn selections(&self) -> &Selections {
        &self.selections
    }

    pub fn display(&self) -> &PriceDisplay {
        &self.display
    }

    pub fn panels(&self) -> &PanelBoard {
        &self.panels
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{CLICKED_CLASS, HIDDEN_CLASS, PRICE_DISPLAY_ID, SELECTOR_ACTIVE_CLASS};

    fn page() -> TableMap {
        let catalog = Catalog::new(vec![
            "5|10|5|Great Hall|velky_sal_div".parse().unwrap(),
            "6|5|6|Great Hall|velky_sal_div".parse().unwrap(),
            "44|4|44|Left Hall|levy_sal_div".parse().unwrap(),
            "84|8|1|Second Floor|galerie_div".parse().unwrap(),
        ])
        .unwrap();
        TableMap::new(catalog, PriceRules::default())
    }

    fn table(page: &TableMap, id: &str) -> TableInfo {
        page.catalog().get(id).unwrap().clone()
    }

    fn price_text(page: &TableMap) -> String {
        page.render()
            .find(PRICE_DISPLAY_ID)
            .and_then(|e| e.text.clone())
            .unwrap_or_default()
    }

    #[test]
    fn scenario_toggle_creates_input_and_total() {
        let mut page = page();
        let t5 = table(&page, "5");

        assert_eq!(page.toggle_table(&t5), Toggle::Selected);

        let tree = page.render();
        let input = tree.find("field5").unwrap();
        assert_eq!(input.attr_value("value"), Some("10"));
        assert_eq!(input.attr_value("min"), Some("1"));
        assert_eq!(input.attr_value("max"), Some("10"));
        assert_eq!(
            tree.find("label5").unwrap().text.as_deref(),
            Some("Table no. 5 (Great Hall) ")
        );
        assert!(tree.find("5").unwrap().has_class(CLICKED_CLASS));
        assert_eq!(tree.find_by_prefix("field").len(), 2);
        assert_eq!(price_text(&page), "Total price: 3000 Kč");
    }

    #[test]
    fn scenario_second_toggle_removes_everything() {
        let mut page = page();
        let t5 = table(&page, "5");
        let t44 = table(&page, "44");
        page.toggle_table(&t44);
        let before = page.render();

        page.toggle_table(&t5);
        assert_eq!(page.toggle_table(&t5), Toggle::Deselected);

        let tree = page.render();
        for id in ["field5", "label5", "br5", "field_div5"] {
            assert!(tree.find(id).is_none(), "{id} должен быть удалён");
        }
        assert!(!tree.find("5").unwrap().has_class(CLICKED_CLASS));
        assert_eq!(tree, before);
        assert_eq!(price_text(&page), "Total price: 1200 Kč");
    }

    #[test]
    fn scenario_two_tables_sum() {
        let mut page = page();
        let t5 = table(&page, "5");
        let t6 = table(&page, "6");
        page.toggle_table(&t5);
        page.toggle_table(&t6);

        page.edit_seats("5", "3").unwrap();
        page.edit_seats("6", "4").unwrap();

        assert_eq!(page.display().total(), Some(2100));
    }

    #[test]
    fn scenario_edit_clamps_before_recompute() {
        let mut page = page();
        let t6 = table(&page, "6");
        page.toggle_table(&t6);

        let stored = page.edit_seats("6", "999").unwrap();

        assert_eq!(stored, "5");
        assert_eq!(page.display().total(), Some(1500));
    }

    #[test]
    fn out_of_range_total_leaves_display_stale() {
        let mut page = page();
        let t5 = table(&page, "5");
        let t6 = table(&page, "6");
        let t84 = table(&page, "84");
        page.toggle_table(&t5);
        page.toggle_table(&t6);
        assert_eq!(page.display().total(), Some(4500));

        // 10 + 5 + 8 = 23 мест > 21
        page.toggle_table(&t84);

        assert_eq!(page.display().total(), Some(4500));
        assert!(!page.recompute_total());
    }

    #[test]
    fn non_numeric_edit_contributes_zero() {
        let mut page = page();
        let t5 = table(&page, "5");
        let t6 = table(&page, "6");
        page.toggle_table(&t5);
        page.toggle_table(&t6);

        assert_eq!(page.edit_seats("5", "abc").unwrap(), "");
        assert_eq!(page.display().total(), Some(1500));

        assert_eq!(page.edit_seats("6", "1.5.2").unwrap(), "1.5");
        assert_eq!(page.display().total(), Some(0));
    }

    #[test]
    fn zero_capacity_edit_never_exceeds_free_seats() {
        let mut page = page();
        let full: TableInfo = "7|0|7|Great Hall|velky_sal_div".parse().unwrap();
        page.toggle_table(&full);

        assert_eq!(page.edit_seats("7", "0").unwrap(), "0");
        assert_eq!(page.display().total(), Some(0));
        assert_eq!(page.edit_seats("7", "3").unwrap(), "0");
        assert_eq!(page.display().total(), Some(0));
    }

    #[test]
    fn edit_of_unselected_table_fails() {
        let mut page = page();
        assert!(page.edit_seats("5", "3").is_err());
    }

    #[test]
    fn scenario_panel_switch() {
        let mut page = page();

        page.show_panel(Panel::Gallery, Selector::Gallery);

        let tree = page.render();
        for panel in Panel::ALL {
            let div = tree.find(&panel.to_string()).unwrap();
            assert_eq!(div.has_class(HIDDEN_CLASS), panel != Panel::Gallery);
        }
        for selector in Selector::ALL {
            let button = tree.find(&selector.to_string()).unwrap();
            assert_eq!(
                button.has_class(SELECTOR_ACTIVE_CLASS),
                selector == Selector::Gallery
            );
        }
    }

    #[test]
    fn submit_uses_current_inputs() {
        let mut page = page();
        let t5 = table(&page, "5");
        page.toggle_table(&t5);
        page.edit_seats("5", "3").unwrap();

        let order = page.submit().unwrap();

        assert_eq!(order.seats(), 3);
        assert_eq!(order.summary(), vec!["table no. 5 (Great Hall, 3 seats)"]);
    }

    #[test]
    fn submit_without_selection_is_rejected() {
        let page = page();
        assert!(page.submit().is_err());
    }
}
