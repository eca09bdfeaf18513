use serde::{Deserialize, Serialize};

// Запись в users.json: пароль хранится только как hex-строка SHA-256
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserRecord {
    pub username: String,
    pub password_hash: String,
}
