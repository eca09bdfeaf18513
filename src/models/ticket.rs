use serde::{Deserialize, Serialize};

// Билет никогда не удаляется: после возврата запись остается в истории
// и используется повторно при следующей продаже того же места.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: u32,
    pub showtime_id: u32,
    pub seat_number: u32,
    pub is_sold: bool,
    pub is_refunded: bool,
}
