use crate::errors::SeatError;
use crate::models::TableInfo;
use log::*;
use simplelog::{CombinedLogger, Config, WriteLogger};
use std::fs;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

pub mod errors;
pub mod models;
pub mod traits;
pub mod utils;

/// Загрузить описание столов из файла.
///
/// Каждая непустая строка — запись [`TableInfo`] в формате
/// `id|free_seats|number_in_hall|hall|panel`. Строки, начинающиеся с `#`,
/// считаются комментариями.
///
/// ## Пример
///
/// ```no_run
/// use commons::get_table_data;
/// use commons::utils::get_workspace_root;
///
/// let path = get_workspace_root().join("data").join("tables.txt");
/// let tables = get_table_data(&path).unwrap();
///
/// println!("Столов: {}", tables.len());
/// ```
///
/// ## Ошибки
///
/// - [`SeatError::Io`] — файл не удалось открыть или прочитать;
/// - [`SeatError::TableError`] — строка не разбирается, либо `id` стола
///   повторяется.
pub fn get_table_data(path: &Path) -> Result<Vec<TableInfo>, SeatError> {
    let file = File::open(path)?;

    let mut tables: Vec<TableInfo> = Vec::new();
    for (number, line) in BufReader::new(file).lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let table: TableInfo = line.parse().map_err(|err| {
            SeatError::table_err(format!("строка {}: {}", number + 1, err))
        })?;

        if tables.iter().any(|t| t.id == table.id) {
            return Err(SeatError::table_err(format!(
                "строка {}: стол '{}' описан повторно",
                number + 1,
                table.id
            )));
        }
        tables.push(table);
    }

    debug!("Загружено столов: {} из {}", tables.len(), path.display());
    Ok(tables)
}

/// Фабрика по созданию индивидуальных логгеров для приложений.
///
/// Инициализация требуется один раз при запуске приложения. Далее используются
/// стандартные макросы [`log::info`], [`log::warn`], [`log::error`] для
/// логирования событий.
///
/// ## Args
///
/// - `app_name` — название приложения (будет использовано для создания файла)
/// - `log_dir` — путь к директории расположения log-файлов (при отсутствии
///   пытается создать)
///
/// ## Пример
///
/// ```no_run
/// use log::*;
/// use commons::init_simple_logger;
/// use commons::utils::get_workspace_root;
///
/// let log_dir = get_workspace_root().join("log");
/// init_simple_logger("app_name", log_dir);
///
/// info!("Стол 5 выбран");
/// ```
///
/// ## Паника
///
/// Паникует при ошибке создания (открытия) директории и (или) log-файла,
/// и при инициализации логгера (предоставляет сообщение о причинах, если
/// есть).
pub fn init_simple_logger(app_name: &str, log_dir: PathBuf) {
    let config = Config::default();
    let log_file_path = log_dir.join(format!("{}.log", app_name));

    if !log_dir.exists() {
        fs::create_dir_all(&log_dir)
            .unwrap_or_else(|_| panic!("Не удалось сформировать путь: {}", log_dir.display()));
    }

    let log_file = File::create(&log_file_path)
        .unwrap_or_else(|_| panic!("Ошибка работы с log-файлом: {}", log_file_path.display()));

    let logger = WriteLogger::new(LevelFilter::Info, config, log_file);

    CombinedLogger::init(vec![logger])
        .unwrap_or_else(|e| panic!("Ошибка инициализации логгера: {e}"));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Panel;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn data_file(content: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_tables_skipping_comments_and_blanks() {
        let file = data_file(
            "# id|free|number|hall|panel\n\
             5|10|5|Great Hall|velky_sal_div\n\
             \n\
             84|6|1|Second Floor|galerie_div\n",
        );

        let tables = get_table_data(file.path()).unwrap();

        assert_eq!(tables.len(), 2);
        assert_eq!(tables[0].id, "5");
        assert_eq!(tables[1].panel, Panel::Gallery);
    }

    #[test]
    fn reports_line_of_broken_record() {
        let file = data_file("5|10|5|Great Hall|velky_sal_div\n6|ten|6|Great Hall|velky_sal_div\n");

        let err = get_table_data(file.path()).unwrap_err();

        assert!(matches!(err, SeatError::TableError(_)));
        assert!(err.to_string().contains("строка 2"));
    }

    #[test]
    fn rejects_duplicate_table_id() {
        let file = data_file("5|10|5|Great Hall|velky_sal_div\n5|4|5|Left Hall|levy_sal_div\n");
        assert!(get_table_data(file.path()).is_err());
    }

    #[test]
    fn missing_file_is_io_error() {
        let err = get_table_data(Path::new("/nonexistent/tables.txt")).unwrap_err();
        assert!(matches!(err, SeatError::Io(_)));
    }
}
