//! Интерактивная сессия: строковые команды вместо событий страницы.
//!
//! Одна строка — одно событие. Ответ на каждую команду — одна строка
//! `OK[|сообщение]` или `ERROR[|сообщение]`.

use crate::page::TableMap;
use commons::{
    errors::SeatError,
    models::{Panel, Selector},
    traits::WriteExt,
};
use log::{error, info, warn};
use macros::StrEnum;
use std::fmt::Display;
use std::io::{self, BufRead, Write};
use std::str::FromStr;

/// Справка по командам.
const HELP: &str = "toggle ID; edit ID VALUE; show PANEL [SELECTOR]; total; render; state; submit; quit";

/// Тип ответа на команду.
enum Response {
    /// Успешное исполнение команды.
    Ok { message: Option<String> },
    /// Ошибка при выполнении команды.
    Err { message: Option<String> },
}

impl Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Ok { message } => match message {
                Some(msg) => write!(f, "OK|{}", msg),
                None => write!(f, "OK"),
            },
            Response::Err { message } => match message {
                Some(msg) => write!(f, "ERROR|{}", msg),
                None => write!(f, "ERROR"),
            },
        }
    }
}

impl Response {
    /// Успешный ответ.
    fn ok(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Response::Ok { message: None }
        } else {
            Response::Ok {
                message: Some(message),
            }
        }
    }

    /// Ответ с ошибкой.
    fn err(message: impl Into<String>) -> Self {
        let message = message.into();
        if message.trim().is_empty() {
            Response::Err { message: None }
        } else {
            Response::Err {
                message: Some(message),
            }
        }
    }

    /// Отправить ответ.
    fn send<W: Write>(&self, writer: &mut W) {
        if let Response::Err { message: Some(msg) } = self {
            warn!("Команда отклонена: {}", msg);
        }
        writer.write_line(self.to_string());
    }
}

impl From<Result<Response, SeatError>> for Response {
    fn from(result: Result<Response, SeatError>) -> Self {
        result.unwrap_or_else(|err| Response::err(err.to_string()))
    }
}

/// Команды сессии.
#[derive(Debug, StrEnum)]
enum Command {
    /// Клик по столу.
    #[str("toggle")]
    Toggle,
    /// Правка поля количества мест.
    #[str("edit")]
    Edit,
    /// Переключение панели.
    #[str("show")]
    Show,
    /// Пересчёт и текст табло.
    #[str("total")]
    Total,
    /// HTML страницы.
    #[str("render")]
    Render,
    /// Снимок состояния в JSON.
    #[str("state")]
    State,
    /// Отправка формы.
    #[str("submit")]
    Submit,
    #[str("help")]
    Help,
    #[str("quit")]
    Quit,
}

impl Command {
    /// Выполнить команду над страницей.
    fn execute(&self, page: &mut TableMap, args: &[&str]) -> Result<Response, SeatError> {
        match self {
            Command::Toggle => {
                let [table_id] = args else {
                    return Err(SeatError::command_err("ожидается: toggle ID"));
                };
                let table = page.catalog().require(table_id)?.clone();
                if !table.is_selectable() && !page.selections().contains(&table.id) {
                    return Err(SeatError::table_err(format!(
                        "на столе {} нет свободных мест",
                        table.id
                    )));
                }
                let outcome = page.toggle_table(&table);
                Ok(Response::ok(format!(
                    "{:?} {}",
                    outcome,
                    page.display().text()
                )))
            }
            Command::Edit => {
                let (table_id, raw) = match args {
                    [table_id] => (*table_id, ""),
                    [table_id, raw] => (*table_id, *raw),
                    _ => return Err(SeatError::command_err("ожидается: edit ID VALUE")),
                };
                let stored = page.edit_seats(table_id, raw)?;
                Ok(Response::ok(stored))
            }
            Command::Show => {
                let (panel, selector) = match args {
                    [panel] => {
                        let panel = Panel::from_str(panel)?;
                        (panel, Selector::for_panel(panel))
                    }
                    [panel, selector] => (Panel::from_str(panel)?, Selector::from_str(selector)?),
                    _ => return Err(SeatError::command_err("ожидается: show PANEL [SELECTOR]")),
                };
                page.show_panel(panel, selector);
                Ok(Response::ok(""))
            }
            Command::Total => {
                page.recompute_total();
                Ok(Response::ok(page.display().text()))
            }
            Command::Render => Ok(Response::ok(page.render().to_string())),
            Command::State => {
                let json = serde_json::to_string(&page.snapshot())
                    .map_err(|err| SeatError::value_err(err.to_string()))?;
                Ok(Response::ok(json))
            }
            Command::Submit => {
                let order = page.submit()?;
                info!("Заказ принят: {} мест", order.seats());
                let mut parts = order.summary();
                parts.push(format!("total {} Kč", order.price(page.rules())));
                Ok(Response::ok(parts.join("; ")))
            }
            Command::Help => Ok(Response::ok(HELP)),
            Command::Quit => Ok(Response::ok("bye")),
        }
    }
}

/// Обработать поток команд до `quit` или конца ввода.
///
/// ## Args
///
/// - `page` — состояние страницы
/// - `reader` — источник строк-команд
/// - `writer` — получатель ответов
pub fn run_session<R: BufRead, W: Write>(
    page: &mut TableMap,
    mut reader: R,
    writer: &mut W,
) -> io::Result<()> {
    let mut line = String::new();
    loop {
        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => return Ok(()),
            Ok(_) => {
                let input = line.trim();
                if input.is_empty() {
                    continue;
                }

                let mut parts: Vec<&str> = input.split_whitespace().collect();
                let cmd = parts.remove(0);

                match Command::from_str(cmd) {
                    Ok(command) => {
                        Response::from(command.execute(page, &parts)).send(writer);
                        if matches!(command, Command::Quit) {
                            info!("Сессия завершена командой quit");
                            return Ok(());
                        }
                    }
                    Err(_) => Response::err("invalid command").send(writer),
                }
            }
            Err(err) => {
                error!("Ошибка чтения: '{}': {}", line.trim_end(), err);
                return Err(err);
            }
        }
    }
}
