//! Универсальные утилиты.

use std::path::PathBuf;

/// Предоставить родительский каталог проекта.
///
/// Для `debug` это будет директория расположения `cargo.toml`, а для `release`
/// расположение скомпилированного файла.
#[cfg(debug_assertions)]
pub fn get_project_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

#[cfg(not(debug_assertions))]
pub fn get_project_root() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|p| p.parent().map(|p| p.to_path_buf()))
        .expect("Не удалось определить путь к исполняемому файлу")
}

/// Предоставить корневую директорию всего проекта.
///
/// В зависимости от статуса проекта предоставляет путь к корневой директории
/// `workspace`, а для `release` к месту расположения скомпилированного файла,
/// что также является корневым путём.
///
/// Вызывает панику при неудачах определения путей.
pub fn get_workspace_root() -> PathBuf {
    let project_root = get_project_root();
    if cfg!(debug_assertions) {
        project_root
            .parent()
            .expect("Не удалось получить родительский каталог workspace")
            .to_path_buf()
    } else {
        project_root.to_path_buf()
    }
}

/// Экранировать текст для вставки в HTML (содержимое и значения атрибутов).
pub fn escape_html(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
