use tracing::info;

use crate::error::BookingError;
use crate::models::{Hall, Movie, Seat, Showtime, Ticket};

// Все залы одинаковые: 10 рядов по 10 мест, номера мест 0..99
pub const HALL_ROWS: u32 = 10;
pub const HALL_SEATS_PER_ROW: u32 = 10;

/// Единая точка входа для всех доменных операций: каталог фильмов и
/// сеансов плюс реестр билетов. Владеет всеми тремя коллекциями; никаких
/// глобальных синглтонов - в тестах создается свежий экземпляр.
///
/// Машина состояний пары (сеанс, место):
/// - нет билета, или is_sold=false -> место свободно;
/// - is_sold=true, is_refunded=false -> место занято, в ячейке зала ID билета;
/// - is_refunded=true -> место свободно, билет остается в истории.
#[derive(Debug, Default)]
pub struct BookingManager {
    movies: Vec<Movie>,
    showtimes: Vec<Showtime>,
    tickets: Vec<Ticket>,
}

impl BookingManager {
    pub fn new() -> Self {
        Self::default()
    }

    // Восстановление состояния из хранилища
    pub fn from_parts(movies: Vec<Movie>, showtimes: Vec<Showtime>, tickets: Vec<Ticket>) -> Self {
        BookingManager {
            movies,
            showtimes,
            tickets,
        }
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn showtimes(&self) -> &[Showtime] {
        &self.showtimes
    }

    pub fn tickets(&self) -> &[Ticket] {
        &self.tickets
    }

    pub fn movie_title(&self, movie_id: u32) -> Option<&str> {
        self.movies
            .iter()
            .find(|m| m.id == movie_id)
            .map(|m| m.title.as_str())
    }

    /* ---------- каталог: фильмы ---------- */

    pub fn add_movie(&mut self, title: &str, description: &str) -> u32 {
        let id = next_id(self.movies.iter().map(|m| m.id));
        self.movies.push(Movie {
            id,
            title: title.to_string(),
            description: description.to_string(),
        });
        info!(movie_id = id, "movie added");
        id
    }

    pub fn edit_movie(
        &mut self,
        movie_id: u32,
        title: &str,
        description: &str,
    ) -> Result<(), BookingError> {
        let movie = self
            .movies
            .iter_mut()
            .find(|m| m.id == movie_id)
            .ok_or(BookingError::MovieNotFound(movie_id))?;
        movie.title = title.to_string();
        movie.description = description.to_string();
        Ok(())
    }

    // Сеансы удаленного фильма не трогаем: висячий movie_id допустим
    pub fn delete_movie(&mut self, movie_id: u32) -> Result<(), BookingError> {
        let index = self
            .movies
            .iter()
            .position(|m| m.id == movie_id)
            .ok_or(BookingError::MovieNotFound(movie_id))?;
        self.movies.remove(index);
        Ok(())
    }

    /* ---------- каталог: сеансы ---------- */

    // movie_id намеренно не проверяется на существование фильма
    pub fn add_showtime(&mut self, movie_id: u32, start_time: &str) -> u32 {
        let id = next_id(self.showtimes.iter().map(|s| s.id));
        self.showtimes.push(Showtime {
            id,
            movie_id,
            start_time: start_time.to_string(),
            hall: Hall::new(HALL_ROWS, HALL_SEATS_PER_ROW),
        });
        info!(showtime_id = id, movie_id, "showtime added");
        id
    }

    // Меняется только время; зал и занятость мест сохраняются
    pub fn edit_showtime(
        &mut self,
        showtime_id: u32,
        new_start_time: &str,
    ) -> Result<(), BookingError> {
        let showtime = self
            .showtimes
            .iter_mut()
            .find(|s| s.id == showtime_id)
            .ok_or(BookingError::ShowtimeNotFound(showtime_id))?;
        showtime.start_time = new_start_time.to_string();
        Ok(())
    }

    // Отмена сеансов фильма: удаляются ВСЕ сеансы с этим movie_id.
    // Билеты остаются в реестре как история.
    pub fn delete_showtimes_for_movie(&mut self, movie_id: u32) -> usize {
        let before = self.showtimes.len();
        self.showtimes.retain(|s| s.movie_id != movie_id);
        before - self.showtimes.len()
    }

    pub fn seat_map(&self, showtime_id: u32) -> Result<Vec<(Seat, bool)>, BookingError> {
        let showtime = self
            .showtimes
            .iter()
            .find(|s| s.id == showtime_id)
            .ok_or(BookingError::ShowtimeNotFound(showtime_id))?;
        Ok(showtime.hall.snapshot())
    }

    /* ---------- реестр билетов ---------- */

    pub fn sell_ticket(&mut self, showtime_id: u32, seat_number: u32) -> Result<u32, BookingError> {
        let st_index = self
            .showtimes
            .iter()
            .position(|s| s.id == showtime_id)
            .ok_or(BookingError::ShowtimeNotFound(showtime_id))?;

        let seats_per_row = self.showtimes[st_index].hall.seats_per_row();
        let seat = Seat::from_number(seat_number, seats_per_row);
        if !self.showtimes[st_index].hall.contains(seat) {
            return Err(BookingError::InvalidInput);
        }

        let ticket_id = match self
            .tickets
            .iter_mut()
            .find(|t| t.showtime_id == showtime_id && t.seat_number == seat_number)
        {
            Some(ticket) if ticket.is_sold => {
                return Err(BookingError::SeatAlreadySold(seat_number));
            }
            // Повторная продажа после возврата: тот же ID билета
            Some(ticket) => {
                ticket.is_sold = true;
                ticket.is_refunded = false;
                ticket.id
            }
            None => {
                let id = next_id(self.tickets.iter().map(|t| t.id));
                self.tickets.push(Ticket {
                    id,
                    showtime_id,
                    seat_number,
                    is_sold: true,
                    is_refunded: false,
                });
                id
            }
        };

        self.showtimes[st_index].hall.occupy(seat, ticket_id);
        info!(ticket_id, showtime_id, seat_number, "ticket sold");
        Ok(ticket_id)
    }

    // Возврат атомарен: билет и его сеанс находятся до любой мутации,
    // поэтому частично примененных возвратов не бывает.
    pub fn refund_ticket(&mut self, ticket_id: u32) -> Result<(), BookingError> {
        let t_index = self
            .tickets
            .iter()
            .position(|t| t.id == ticket_id && !t.is_refunded)
            .ok_or(BookingError::TicketNotFoundOrAlreadyRefunded(ticket_id))?;

        let showtime_id = self.tickets[t_index].showtime_id;
        let st_index = self
            .showtimes
            .iter()
            .position(|s| s.id == showtime_id)
            .ok_or(BookingError::ShowtimeMissingForTicket(ticket_id))?;

        let ticket = &mut self.tickets[t_index];
        ticket.is_refunded = true;
        ticket.is_sold = false;
        let seat_number = ticket.seat_number;

        let hall = &mut self.showtimes[st_index].hall;
        hall.vacate(Seat::from_number(seat_number, hall.seats_per_row()));
        info!(ticket_id, showtime_id, "ticket refunded");
        Ok(())
    }
}

// id = max(существующих) + 1, либо 1 для пустой коллекции
fn next_id(ids: impl Iterator<Item = u32>) -> u32 {
    ids.max().map_or(1, |max| max + 1)
}
