//! Table Map. Консольное приложение выбора столов на схеме зала: выбор
//! и снятие выбора столов, правка количества мест, подсчёт итоговой
//! стоимости и переключение панелей залов.

#![warn(missing_docs)]

use commons::utils::get_workspace_root;
use log::{error, info};
use std::io;
use std::process::exit;

mod cli;
mod config;
mod input;
mod models;
mod order;
mod page;
mod panels;
mod pricing;
mod render;
mod selection;
mod session;

use cli::parse_cli_args;
use commons::init_simple_logger;
use config::LOG_FOLDER;
use models::Catalog;
use page::TableMap;
use session::run_session;

/// Перечисление ошибок при завершении приложения.
#[derive(Copy, Clone)]
#[repr(u8)]
enum ExitCode {
    /// Данные о столах не загружены.
    InvalidTableData = 1,
}

impl ExitCode {
    /// Предоставить цифровое значение выбранного перечисления (`u8`).
    fn value(&self) -> u8 {
        *self as u8
    }
}

fn main() -> io::Result<()> {
    // Инициализация логгера.
    init_logger();

    let settings = parse_cli_args();

    let catalog = Catalog::load(&settings.tables_path).unwrap_or_else(|err| {
        let message = format!(
            "не удалось загрузить столы из {}: {}",
            settings.tables_path.display(),
            err
        );
        exit_err(&message, ExitCode::InvalidTableData)
    });

    info!(
        "Table Map запущен: столов {}, цена места {}, лимит {}",
        catalog.len(),
        settings.rules.unit_price,
        settings.rules.max_tables
    );
    println!("Table Map. Команды: help. Завершение: quit или Ctrl-D.");

    let mut page = TableMap::new(catalog, settings.rules);
    let stdin = io::stdin();
    let mut stdout = io::stdout();
    run_session(&mut page, stdin.lock(), &mut stdout)?;

    info!("Table Map завершён");
    Ok(())
}

/// Инициализировать логгер приложения.
///
/// Используется метод [`init_simple_logger`] из крейта [`commons`].
fn init_logger() {
    let log_folder = get_workspace_root().join(LOG_FOLDER);
    let app_name = env!("CARGO_PKG_NAME");
    init_simple_logger(app_name, log_folder);
}

/// Опубликовать сообщение об ошибке и завершить работу приложения.
fn exit_err(message: &str, code: ExitCode) -> ! {
    error!("Ошибка: {} (код {})", message, code.value());
    eprintln!("Ошибка: {}", message);
    exit(code.value() as i32);
}
