use serde::{Deserialize, Serialize};

use super::Hall;

// start_time - текстовая метка ("18:00"), без валидации пересечений.
// movie_id не проверяется на существование фильма.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Showtime {
    pub id: u32,
    pub movie_id: u32,
    pub start_time: String,
    pub hall: Hall,
}
