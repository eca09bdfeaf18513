pub mod auth;

use std::io;

use tracing::warn;

use crate::error::BookingError;
use crate::BookingManager;

/// Порт вывода: одна человекочитаемая строка на исход каждой операции.
pub trait Reporter {
    fn report(&mut self, message: &str);
}

// Консольный вывод для интерактивного запуска
#[derive(Debug, Default)]
pub struct ConsoleReporter;

impl Reporter for ConsoleReporter {
    fn report(&mut self, message: &str) {
        println!("{message}");
    }
}

// Нечисловой ввод превращается в заведомо несуществующий ID и идет
// обычным путем "не найдено", отдельной ошибки парсинга нет.
const SENTINEL_ID: u32 = u32::MAX;

pub struct CinemaUi<'a, R: Reporter> {
    manager: &'a mut BookingManager,
    reporter: &'a mut R,
}

impl<'a, R: Reporter> CinemaUi<'a, R> {
    pub fn new(manager: &'a mut BookingManager, reporter: &'a mut R) -> Self {
        CinemaUi { manager, reporter }
    }

    pub fn run(&mut self) {
        self.reporter.report("Добро пожаловать в кинотеатр!");

        loop {
            print_main_menu();
            match prompt_number("") {
                1 => self.show_movies(),
                2 => self.add_movie(),
                3 => self.show_showtimes(),
                4 => self.add_showtime(),
                5 => self.sell_ticket(),
                6 => self.refund_ticket(),
                7 => self.show_seats(),
                8 => self.manage(),
                0 => break,
                _ => self.reporter.report("Некорректный ввод. Попробуйте еще раз."),
            }
        }
    }

    fn manage(&mut self) {
        loop {
            print_manage_menu();
            match prompt_number("") {
                1 => self.edit_movie(),
                2 => self.delete_movie(),
                3 => self.edit_showtime(),
                4 => self.cancel_showtimes(),
                5 => break,
                _ => self.reporter.report("Некорректный ввод. Попробуйте еще раз."),
            }
        }
    }

    /* ---------- фильмы ---------- */

    fn show_movies(&mut self) {
        self.reporter.report("Список фильмов:");
        for movie in self.manager.movies() {
            self.reporter.report(&format!("{}. {}", movie.id, movie.title));
        }
    }

    fn add_movie(&mut self) {
        let title = prompt("Введите название фильма:");
        let description = prompt("Введите описание фильма:");
        let id = self.manager.add_movie(&title, &description);
        self.reporter
            .report(&format!("Фильм \"{title}\" добавлен (ID {id})."));
    }

    fn edit_movie(&mut self) {
        let movie_id = prompt_number("Введите ID фильма для изменения:");
        let title = prompt("Введите новое название фильма:");
        let description = prompt("Введите новое описание фильма:");
        let outcome = self
            .manager
            .edit_movie(movie_id, &title, &description)
            .map(|()| format!("Фильм с ID {movie_id} обновлен."));
        self.report_outcome(outcome);
    }

    fn delete_movie(&mut self) {
        let movie_id = prompt_number("Введите ID фильма для удаления:");
        let outcome = self
            .manager
            .delete_movie(movie_id)
            .map(|()| format!("Фильм с ID {movie_id} удален."));
        self.report_outcome(outcome);
    }

    /* ---------- сеансы ---------- */

    fn show_showtimes(&mut self) {
        self.reporter.report("Расписание сеансов:");
        for showtime in self.manager.showtimes() {
            let title = self
                .manager
                .movie_title(showtime.movie_id)
                .unwrap_or("<фильм удален>");
            self.reporter.report(&format!(
                "ID сеанса: {}, Фильм: \"{}\", Время: {}",
                showtime.id, title, showtime.start_time
            ));
        }
    }

    fn add_showtime(&mut self) {
        let movie_id = prompt_number("Введите ID фильма:");
        let start_time = prompt("Введите время сеанса (например, \"12:00\"):");
        let id = self.manager.add_showtime(movie_id, &start_time);
        self.reporter.report(&format!("Сеанс добавлен (ID {id})."));
    }

    fn edit_showtime(&mut self) {
        let showtime_id = prompt_number("Введите ID сеанса для изменения времени:");
        let start_time = prompt("Введите новое время сеанса (например, \"12:00\"):");
        let outcome = self
            .manager
            .edit_showtime(showtime_id, &start_time)
            .map(|()| format!("Время сеанса с ID {showtime_id} обновлено."));
        self.report_outcome(outcome);
    }

    fn cancel_showtimes(&mut self) {
        let movie_id = prompt_number("Введите ID фильма для отмены сеансов:");
        let removed = self.manager.delete_showtimes_for_movie(movie_id);
        self.reporter.report(&format!("Отменено сеансов: {removed}."));
    }

    fn show_seats(&mut self) {
        let showtime_id = prompt_number("Введите ID сеанса:");
        match self.manager.seat_map(showtime_id) {
            Ok(map) => {
                for (seat, occupied) in map {
                    let status = if occupied { "Занято" } else { "Свободно" };
                    self.reporter.report(&format!(
                        "Ряд {}, Место {}: {status}",
                        seat.row + 1,
                        seat.col + 1
                    ));
                }
            }
            Err(err) => self.report_outcome::<String>(Err(err)),
        }
    }

    /* ---------- билеты ---------- */

    fn sell_ticket(&mut self) {
        let showtime_id = prompt_number("Введите ID сеанса:");
        let seat_number = prompt_number("Введите номер места:");
        let outcome = self.manager.sell_ticket(showtime_id, seat_number).map(|id| {
            format!(
                "Билет на место {seat_number} продан для сеанса {showtime_id} (ID билета {id})."
            )
        });
        self.report_outcome(outcome);
    }

    fn refund_ticket(&mut self) {
        let ticket_id = prompt_number("Введите ID билета:");
        let outcome = self
            .manager
            .refund_ticket(ticket_id)
            .map(|()| format!("Билет с ID {ticket_id} возвращен."));
        self.report_outcome(outcome);
    }

    // Доменная ошибка не прерывает работу: логируем и показываем строку
    fn report_outcome<T: AsRef<str>>(&mut self, outcome: Result<T, BookingError>) {
        match outcome {
            Ok(message) => self.reporter.report(message.as_ref()),
            Err(err) => {
                warn!(error = %err, "operation rejected");
                self.reporter.report(&err.to_string());
            }
        }
    }
}

fn print_main_menu() {
    println!("\nВыберите действие:");
    println!("1. Показать список фильмов");
    println!("2. Добавить фильм");
    println!("3. Показать расписание сеансов");
    println!("4. Добавить сеанс");
    println!("5. Продать билет");
    println!("6. Вернуть билет");
    println!("7. Отобразить места для сеанса");
    println!("8. Редактировать данные фильмов / сеансов");
    println!("0. Выйти из программы");
}

fn print_manage_menu() {
    println!("\nВыберите действие:");
    println!("1. Изменить данные о фильме");
    println!("2. Удалить фильм из списка");
    println!("3. Изменить время сеанса");
    println!("4. Отменить сеансы фильма");
    println!("5. Вернуться в главное меню");
}

pub(crate) fn prompt(text: &str) -> String {
    if !text.is_empty() {
        println!("{text}");
    }
    let mut line = String::new();
    if io::stdin().read_line(&mut line).is_err() {
        return String::new();
    }
    line.trim().to_string()
}

pub(crate) fn prompt_number(text: &str) -> u32 {
    prompt(text).parse().unwrap_or(SENTINEL_ID)
}
