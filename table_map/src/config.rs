//! Конфигурация приложения.

use std::ops::RangeInclusive;

/// Название директории для log-файлов.
pub const LOG_FOLDER: &str = "log";

/// Название каталога для хранения данных проекта.
pub const DATA_FOLDER: &str = "data";

/// Название файла с описанием столов.
pub const TABLES_FILENAME: &str = "tables.txt";

/// Стоимость одного места.
pub const UNIT_PRICE: u32 = 300;

/// Максимум мест в одном заказе. Ограничивает и допустимую сумму на табло.
pub const MAX_TABLES: u32 = 21;

/// Диапазон допустимой стоимости места при запуске.
pub const UNIT_PRICE_ALLOWED: RangeInclusive<u32> = RangeInclusive::new(1, 100_000);

/// Диапазон допустимого лимита мест при запуске.
pub const MAX_TABLES_ALLOWED: RangeInclusive<u32> = RangeInclusive::new(1, 1_000);

/// Суффикс валюты на табло.
pub const CURRENCY: &str = "Kč";

/// Префикс `id` поля ввода количества мест. Также общий признак полей
/// при отправке формы.
pub const FIELD_PREFIX: &str = "field";

/// Префикс `id` контейнера поля ввода.
pub const FIELD_DIV_PREFIX: &str = "field_div";

/// Префикс `id` подписи к полю ввода.
pub const LABEL_PREFIX: &str = "label";

/// Префикс `id` переноса строки после поля ввода.
pub const BR_PREFIX: &str = "br";

/// `id` контейнера, куда добавляются поля ввода.
pub const FIELDS_CONTAINER_ID: &str = "pocty_mist";

/// `id` табло с итоговой стоимостью.
pub const PRICE_DISPLAY_ID: &str = "cena";

/// Класс выбранного стола.
pub const CLICKED_CLASS: &str = "clicked";

/// Класс скрытой панели.
pub const HIDDEN_CLASS: &str = "skryte";

/// Класс активного переключателя панелей.
pub const SELECTOR_ACTIVE_CLASS: &str = "sal_active";
