use thiserror::Error;

// Доменные ошибки: все они обрабатываются локально и превращаются
// в сообщение для пользователя, процесс из-за них не завершается.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookingError {
    #[error("Фильм с ID {0} не найден.")]
    MovieNotFound(u32),

    #[error("Сеанс с ID {0} не найден.")]
    ShowtimeNotFound(u32),

    #[error("Место {0} уже продано.")]
    SeatAlreadySold(u32),

    #[error("Билет с ID {0} не найден или уже возвращен.")]
    TicketNotFoundOrAlreadyRefunded(u32),

    #[error("Сеанс для билета с ID {0} не найден.")]
    ShowtimeMissingForTicket(u32),

    #[error("Некорректный ввод.")]
    InvalidInput,
}

// Ошибки хранилища фатальны: при старте (если данные есть, но не читаются)
// и при сохранении.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("хранилище недоступно: {0}")]
    Unavailable(#[from] std::io::Error),

    #[error("файл {file} поврежден: {source}")]
    Corrupt {
        file: String,
        #[source]
        source: serde_json::Error,
    },
}
