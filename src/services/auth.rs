use std::collections::HashMap;
use std::fmt::Write as _;

use sha2::{Digest, Sha256};

use crate::models::UserRecord;

/// Хранилище пользователей: имя -> hex-строка SHA-256 от пароля.
/// Открытый пароль нигде не сохраняется.
#[derive(Debug, Default)]
pub struct Authenticator {
    users: HashMap<String, String>,
}

impl Authenticator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<UserRecord>) -> Self {
        Authenticator {
            users: records
                .into_iter()
                .map(|r| (r.username, r.password_hash))
                .collect(),
        }
    }

    // Экспорт для users.json; сортировка дает стабильный файл
    pub fn records(&self) -> Vec<UserRecord> {
        let mut records: Vec<UserRecord> = self
            .users
            .iter()
            .map(|(username, password_hash)| UserRecord {
                username: username.clone(),
                password_hash: password_hash.clone(),
            })
            .collect();
        records.sort_by(|a, b| a.username.cmp(&b.username));
        records
    }

    // Повторная регистрация перезаписывает старый хэш
    pub fn register(&mut self, username: &str, password: &str) {
        self.users
            .insert(username.to_string(), hash_password(password));
    }

    pub fn authenticate(&self, username: &str, password: &str) -> bool {
        self.users.get(username) == Some(&hash_password(password))
    }
}

fn hash_password(password: &str) -> String {
    let digest = Sha256::digest(password.as_bytes());
    digest.iter().fold(String::new(), |mut out, byte| {
        let _ = write!(out, "{byte:02x}");
        out
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn register_then_authenticate() {
        let mut auth = Authenticator::new();
        auth.register("ivan", "secret");

        assert!(auth.authenticate("ivan", "secret"));
        assert!(!auth.authenticate("ivan", "wrong"));
        assert!(!auth.authenticate("unknown", "secret"));
    }

    #[test]
    fn password_is_stored_as_sha256_hex() {
        let mut auth = Authenticator::new();
        auth.register("ivan", "secret");

        let records = auth.records();
        assert_eq!(records.len(), 1);
        // SHA-256("secret")
        assert_eq!(
            records[0].password_hash,
            "2bb80d537b1da3e38bd30361aa855686bde0eacd7162fef6a25fe97bf527a25b"
        );
    }

    #[test]
    fn records_round_trip() {
        let mut auth = Authenticator::new();
        auth.register("boris", "b");
        auth.register("anna", "a");

        let restored = Authenticator::from_records(auth.records());
        assert!(restored.authenticate("anna", "a"));
        assert!(restored.authenticate("boris", "b"));

        // Экспорт отсортирован по имени
        let names: Vec<String> = restored.records().into_iter().map(|r| r.username).collect();
        assert_eq!(names, vec!["anna".to_string(), "boris".to_string()]);
    }

    #[test]
    fn re_register_overwrites_hash() {
        let mut auth = Authenticator::new();
        auth.register("ivan", "old");
        auth.register("ivan", "new");

        assert!(!auth.authenticate("ivan", "old"));
        assert!(auth.authenticate("ivan", "new"));
    }
}
