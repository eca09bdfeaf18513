use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cinema_system::{
    cli::{auth::AuthUi, CinemaUi, ConsoleReporter},
    config::Config,
    services::Authenticator,
    storage::JsonStore,
    BookingManager,
};

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = Config::from_env();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.app.rust_log))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting cinema console");

    let store = JsonStore::new(&config.app.data_dir);
    let mut reporter = ConsoleReporter;

    // Сначала вход: меню кинотеатра доступно только после логина
    if config.features.enable_auth {
        let users = store
            .load_users()
            .context("не удалось загрузить пользователей")?;
        let mut authenticator = Authenticator::from_records(users);
        AuthUi::new(&mut authenticator, &mut reporter).run();
        store
            .save_users(&authenticator.records())
            .context("не удалось сохранить пользователей")?;
    }

    // Отсутствие файлов данных - это "данных еще нет", а не ошибка;
    // поврежденный файл фатален.
    let (movies, showtimes, tickets) = store
        .load()
        .context("не удалось загрузить данные кинотеатра")?;
    let mut manager = BookingManager::from_parts(movies, showtimes, tickets);

    CinemaUi::new(&mut manager, &mut reporter).run();

    store
        .save(manager.movies(), manager.showtimes(), manager.tickets())
        .context("не удалось сохранить данные кинотеатра")?;
    info!("State saved, shutting down");
    Ok(())
}
