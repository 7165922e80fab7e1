//! Обработка аргументов командной строки при запуске приложения.
//! ## Пример
//!
//! ```text
//! $ tmap --tables data/tables.txt --unit-price 300 --max-tables 21
//! ```

use crate::config::*;
use crate::pricing::PriceRules;
use clap::Parser;
use commons::utils::get_workspace_root;
use std::ops::RangeInclusive;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Table Map. Interactive table selection and ticket price calculation.")]
#[command(author, version, long_about = None)]
struct CliArgs {
    /// File with table data (`id|free_seats|number_in_hall|hall|panel` per line).
    #[arg(short, long, required = false, value_name = "FILE")]
    tables: Option<PathBuf>,

    /// Price of one seat.
    #[arg(short, long, required = false, default_value_t = UNIT_PRICE, value_parser = validate_unit_price)]
    unit_price: u32,

    /// Seat limit per order; also bounds the displayed total.
    #[arg(short, long, required = false, default_value_t = MAX_TABLES, value_parser = validate_max_tables)]
    max_tables: u32,
}

/// Валидатор числовых аргументов.
fn number_in_range(s: &str, range: RangeInclusive<u32>) -> Result<u32, String> {
    let value: u32 = s.parse().map_err(|_| format!("invalid number: {s}"))?;
    if range.contains(&value) {
        Ok(value)
    } else {
        Err(format!(
            "number {} not in range {} — {}",
            s,
            range.start(),
            range.end()
        ))
    }
}

/// Валидатор для поля `unit_price`.
fn validate_unit_price(s: &str) -> Result<u32, String> {
    number_in_range(s, UNIT_PRICE_ALLOWED)
}

/// Валидатор для поля `max_tables`.
fn validate_max_tables(s: &str) -> Result<u32, String> {
    number_in_range(s, MAX_TABLES_ALLOWED)
}

/// Параметры, полученные из командной строки при запуске приложения.
#[derive(Debug)]
pub struct PageSet {
    /// Путь к файлу с описанием столов.
    pub tables_path: PathBuf,
    /// Правила подсчёта стоимости.
    pub rules: PriceRules,
}

impl PageSet {
    /// Создать экземпляр на основе аргументов из командной строки.
    fn new(args: &CliArgs) -> Self {
        let tables_path = args
            .tables
            .clone()
            .unwrap_or_else(|| get_workspace_root().join(DATA_FOLDER).join(TABLES_FILENAME));

        let rules = PriceRules {
            unit_price: args.unit_price,
            max_tables: args.max_tables,
        };

        Self { tables_path, rules }
    }
}

/// Получить от пользователя первичные настройки приложения.
pub fn parse_cli_args() -> PageSet {
    let args = CliArgs::parse();

    PageSet::new(&args)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unit_price_validator_accepts_allowed() {
        let ok = UNIT_PRICE_ALLOWED.start().to_string();
        assert!(validate_unit_price(&ok).is_ok());
    }

    #[test]
    fn max_tables_validator_rejects_out_of_range() {
        let bad = (MAX_TABLES_ALLOWED.end() + 1).to_string();
        assert!(validate_max_tables(&bad).is_err());
        assert!(validate_max_tables("0").is_err());
        assert!(validate_max_tables("many").is_err());
    }

    #[test]
    fn defaults_match_config() {
        let args = CliArgs::parse_from(["tmap"]);
        let set = PageSet::new(&args);

        assert_eq!(set.rules, PriceRules::default());
        assert!(set.tables_path.ends_with(TABLES_FILENAME));
    }

    #[test]
    fn overrides_are_applied() {
        let args = CliArgs::parse_from([
            "tmap",
            "--tables",
            "/tmp/hall.txt",
            "--unit-price",
            "450",
            "--max-tables",
            "10",
        ]);
        let set = PageSet::new(&args);

        assert_eq!(set.tables_path, PathBuf::from("/tmp/hall.txt"));
        assert_eq!(set.rules.unit_price, 450);
        assert_eq!(set.rules.max_tables, 10);
        assert_eq!(set.rules.ceiling(), 4500);
    }
}
