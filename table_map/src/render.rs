//! Проекция состояния страницы на дерево элементов.
//!
//! Дерево строится заново из состояния при каждом запросе и сохраняет
//! соглашение об `id`, на которое опирается окружающая разметка и форма
//! отправки заказа.

use crate::config::*;
use crate::page::TableMap;
use crate::selection::Selection;
use commons::models::{Panel, Selector};
use commons::utils::escape_html;
use std::fmt::{Display, Formatter};

/// Теги без закрывающей части.
const VOID_TAGS: [&str; 2] = ["input", "br"];

/// Элемент дерева.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: &'static str,
    pub id: Option<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub classes: Vec<&'static str>,
    pub text: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            id: None,
            attrs: Vec::new(),
            classes: Vec::new(),
            text: None,
            children: Vec::new(),
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Добавить класс, если `enabled`.
    pub fn class_if(mut self, class: &'static str, enabled: bool) -> Self {
        if enabled {
            self.classes.push(class);
        }
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = Some(text.into());
        self
    }

    pub fn child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    pub fn attr_value(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| v.as_str())
    }

    #[cfg(test)]
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| *c == class)
    }

    /// Найти элемент по `id` (обход в глубину, включая сам элемент).
    #[cfg(test)]
    pub fn find(&self, id: &str) -> Option<&Element> {
        if self.id.as_deref() == Some(id) {
            return Some(self);
        }
        self.children.iter().find_map(|child| child.find(id))
    }

    /// Все элементы, чей `id` начинается с `prefix`, в порядке документа.
    pub fn find_by_prefix<'a>(&'a self, prefix: &str) -> Vec<&'a Element> {
        let mut found = Vec::new();
        self.collect_by_prefix(prefix, &mut found);
        found
    }

    fn collect_by_prefix<'a>(&'a self, prefix: &str, found: &mut Vec<&'a Element>) {
        if self.id.as_deref().is_some_and(|id| id.starts_with(prefix)) {
            found.push(self);
        }
        for child in &self.children {
            child.collect_by_prefix(prefix, found);
        }
    }
}

impl Display for Element {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}", self.tag)?;
        if let Some(id) = &self.id {
            write!(f, " id=\"{}\"", escape_html(id))?;
        }
        if !self.classes.is_empty() {
            write!(f, " class=\"{}\"", self.classes.join(" "))?;
        }
        for (name, value) in &self.attrs {
            write!(f, " {}=\"{}\"", name, escape_html(value))?;
        }
        write!(f, ">")?;

        if VOID_TAGS.contains(&self.tag) {
            return Ok(());
        }

        if let Some(text) = &self.text {
            write!(f, "{}", escape_html(text))?;
        }
        for child in &self.children {
            write!(f, "{}", child)?;
        }
        write!(f, "</{}>", self.tag)
    }
}

/// Блок поля ввода для выбранного стола:
/// `field_div{id}` → `input#field{id}`, `label#label{id}`, `br#br{id}`.
pub fn selection_block(selection: &Selection) -> Element {
    let id = &selection.table().id;
    let domain = selection.domain();
    let field_id = format!("{FIELD_PREFIX}{id}");

    let input = Element::new("input")
        .with_id(&field_id)
        .attr("type", "number")
        .attr("name", &field_id)
        .attr("min", domain.min.to_string())
        .attr("max", domain.max.to_string())
        .attr("value", selection.value());

    let label = Element::new("label")
        .with_id(format!("{LABEL_PREFIX}{id}"))
        .attr("for", &field_id)
        .text(selection.label());

    let line_break = Element::new("br").with_id(format!("{BR_PREFIX}{id}"));

    Element::new("div")
        .with_id(format!("{FIELD_DIV_PREFIX}{id}"))
        .child(input)
        .child(label)
        .child(line_break)
}

/// Построить дерево всей страницы.
pub fn render_page(page: &TableMap) -> Element {
    let selections = page.selections();
    let panels = page.panels();

    let mut nav = Element::new("nav");
    for selector in Selector::ALL {
        nav = nav.child(
            Element::new("button")
                .with_id(selector.to_string())
                .class_if(SELECTOR_ACTIVE_CLASS, panels.is_active(selector)),
        );
    }

    let mut body = Element::new("body").child(nav);

    for panel in Panel::ALL {
        let mut panel_div = Element::new("div")
            .with_id(panel.to_string())
            .class_if(HIDDEN_CLASS, !panels.is_visible(panel));

        for table in page.catalog().iter().filter(|t| t.panel == panel) {
            let mut button = Element::new("button")
                .with_id(&table.id)
                .class_if(CLICKED_CLASS, selections.contains(&table.id))
                .text(table.number_in_hall.to_string());
            if !table.is_selectable() {
                button = button.attr("disabled", "disabled");
            }
            panel_div = panel_div.child(button);
        }
        body = body.child(panel_div);
    }

    let mut container = Element::new("div").with_id(FIELDS_CONTAINER_ID);
    for selection in selections.iter() {
        container = container.child(selection_block(selection));
    }

    body.child(container).child(
        Element::new("p")
            .with_id(PRICE_DISPLAY_ID)
            .text(page.display().text()),
    )
}

/// Пары `(name, value)` полей ввода, как их отправит форма страницы.
pub fn form_fields(root: &Element) -> Vec<(String, String)> {
    root.find_by_prefix(FIELD_PREFIX)
        .into_iter()
        .filter(|e| e.tag == "input")
        .filter_map(|e| {
            let name = e.attr_value("name")?;
            let value = e.attr_value("value").unwrap_or_default();
            Some((name.to_string(), value.to_string()))
        })
        .collect()
}
