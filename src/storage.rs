use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::info;

use crate::error::StorageError;
use crate::models::{Movie, Showtime, Ticket, UserRecord};

const MOVIES_FILE: &str = "movies.json";
const SHOWTIMES_FILE: &str = "showtimes.json";
const TICKETS_FILE: &str = "tickets.json";
const USERS_FILE: &str = "users.json";

/// Плоское JSON-хранилище: по одному файлу на коллекцию в data_dir.
/// Отсутствующий файл означает "данных еще нет"; нечитаемый файл -
/// фатальная ошибка для вызывающей стороны.
#[derive(Debug, Clone)]
pub struct JsonStore {
    data_dir: PathBuf,
}

impl JsonStore {
    pub fn new(data_dir: impl AsRef<Path>) -> Self {
        JsonStore {
            data_dir: data_dir.as_ref().to_path_buf(),
        }
    }

    pub fn load(&self) -> Result<(Vec<Movie>, Vec<Showtime>, Vec<Ticket>), StorageError> {
        let movies = self.read_collection(MOVIES_FILE)?;
        let showtimes = self.read_collection(SHOWTIMES_FILE)?;
        let tickets = self.read_collection(TICKETS_FILE)?;
        info!(
            movies = movies.len(),
            showtimes = showtimes.len(),
            tickets = tickets.len(),
            "state loaded"
        );
        Ok((movies, showtimes, tickets))
    }

    // Перезапись целиком, без частичных обновлений
    pub fn save(
        &self,
        movies: &[Movie],
        showtimes: &[Showtime],
        tickets: &[Ticket],
    ) -> Result<(), StorageError> {
        self.write_collection(MOVIES_FILE, movies)?;
        self.write_collection(SHOWTIMES_FILE, showtimes)?;
        self.write_collection(TICKETS_FILE, tickets)?;
        info!("state saved");
        Ok(())
    }

    pub fn load_users(&self) -> Result<Vec<UserRecord>, StorageError> {
        self.read_collection(USERS_FILE)
    }

    pub fn save_users(&self, users: &[UserRecord]) -> Result<(), StorageError> {
        self.write_collection(USERS_FILE, users)
    }

    fn read_collection<T: DeserializeOwned>(&self, file: &str) -> Result<Vec<T>, StorageError> {
        let path = self.data_dir.join(file);
        if !path.exists() {
            return Ok(Vec::new());
        }
        let text = fs::read_to_string(&path)?;
        serde_json::from_str(&text).map_err(|source| StorageError::Corrupt {
            file: file.to_string(),
            source,
        })
    }

    fn write_collection<T: Serialize>(&self, file: &str, items: &[T]) -> Result<(), StorageError> {
        fs::create_dir_all(&self.data_dir)?;
        let text = serde_json::to_string_pretty(items).map_err(|source| StorageError::Corrupt {
            file: file.to_string(),
            source,
        })?;
        fs::write(self.data_dir.join(file), text)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BookingManager;

    #[test]
    fn missing_files_load_as_empty_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let (movies, showtimes, tickets) = store.load().unwrap();
        assert!(movies.is_empty());
        assert!(showtimes.is_empty());
        assert!(tickets.is_empty());
    }

    #[test]
    fn save_then_load_round_trips_the_manager_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        let mut manager = BookingManager::new();
        manager.add_movie("Дюна", "фантастика");
        manager.add_showtime(1, "18:00");
        manager.sell_ticket(1, 15).unwrap();

        store
            .save(manager.movies(), manager.showtimes(), manager.tickets())
            .unwrap();

        let (movies, showtimes, tickets) = store.load().unwrap();
        let restored = BookingManager::from_parts(movies, showtimes, tickets);

        assert_eq!(restored.movies().len(), 1);
        assert_eq!(restored.movies()[0].title, "Дюна");
        assert_eq!(restored.showtimes()[0].start_time, "18:00");
        assert_eq!(restored.tickets()[0].id, 1);
        assert!(restored.tickets()[0].is_sold);

        // Занятость зала переживает перезапуск
        let map = restored.seat_map(1).unwrap();
        assert_eq!(map.iter().filter(|(_, occupied)| *occupied).count(), 1);
    }

    #[test]
    fn corrupt_file_is_a_fatal_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("movies.json"), "{ not json").unwrap();
        let store = JsonStore::new(dir.path());

        match store.load() {
            Err(StorageError::Corrupt { file, .. }) => assert_eq!(file, "movies.json"),
            other => panic!("expected Corrupt error, got {other:?}"),
        }
    }

    #[test]
    fn users_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let store = JsonStore::new(dir.path());

        assert!(store.load_users().unwrap().is_empty());
        store
            .save_users(&[UserRecord {
                username: "ivan".to_string(),
                password_hash: "abc".to_string(),
            }])
            .unwrap();

        let users = store.load_users().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0].username, "ivan");
    }
}
