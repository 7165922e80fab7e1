//! Собственные типы ошибок приложения.
//!
//! Для поддержки функциональности применяется крейт `thiserror`.

use thiserror::Error;

/// Дерево ошибок приложений Table Map.
#[derive(Error, Debug)]
pub enum SeatError {
    /// Некорректное значение.
    ///
    /// Например, если ожидается число мест, а передано `"abc"`.
    #[error("неверное значение: {0}")]
    ValueError(String),

    /// Ошибка данных о столах (файл, каталог, неизвестный стол).
    #[error("ошибка данных о столах: {0}")]
    TableError(String),

    /// Некорректная команда интерактивной сессии.
    #[error("ошибка команды: {0}")]
    CommandError(String),

    /// Заказ отклонён. Сообщение предназначено пользователю как есть.
    #[error("{0}")]
    OrderError(String),

    /// Ошибка ввода-вывода.
    #[error("ошибка ввода-вывода: {0}")]
    Io(#[from] std::io::Error),
}

impl SeatError {
    /// Конструктор для ошибки [`SeatError::ValueError`].
    pub fn value_err(message: impl Into<String>) -> SeatError {
        Self::ValueError(message.into())
    }

    /// Конструктор для ошибки [`SeatError::TableError`].
    pub fn table_err(message: impl Into<String>) -> SeatError {
        Self::TableError(message.into())
    }

    /// Конструктор для ошибки [`SeatError::CommandError`].
    pub fn command_err(message: impl Into<String>) -> SeatError {
        Self::CommandError(message.into())
    }

    /// Конструктор для ошибки [`SeatError::OrderError`].
    pub fn order_err(message: impl Into<String>) -> SeatError {
        Self::OrderError(message.into())
    }
}
