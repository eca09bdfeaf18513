use std::env;

// Главная структура конфигурации - контейнер для всех настроек
#[derive(Debug, Clone)]
pub struct Config {
    pub app: AppConfig,
    pub features: FeatureFlags,
}

// Настройки приложения
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub data_dir: String,
    pub rust_log: String,
}

// Feature flags для включения/выключения функциональности
#[derive(Debug, Clone)]
pub struct FeatureFlags {
    pub enable_auth: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            app: AppConfig {
                data_dir: env::var("CINEMA_DATA_DIR").unwrap_or_else(|_| ".".to_string()),
                rust_log: env::var("RUST_LOG")
                    .unwrap_or_else(|_| "cinema_system=info".to_string()),
            },
            features: FeatureFlags {
                enable_auth: env::var("ENABLE_AUTH")
                    .unwrap_or_else(|_| "true".to_string())
                    .parse()
                    .expect("ENABLE_AUTH must be true or false"),
            },
        }
    }
}
