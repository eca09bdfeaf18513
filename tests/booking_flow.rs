use cinema_system::error::BookingError;
use cinema_system::models::Seat;
use cinema_system::storage::JsonStore;
use cinema_system::BookingManager;

// Полный сценарий работы кассы: продажа, отказ в двойной продаже,
// возврат, повторная продажа того же места.
#[test]
fn box_office_lifecycle() {
    let mut manager = BookingManager::new();

    assert_eq!(manager.add_movie("Дюна", "фантастика"), 1);
    assert_eq!(manager.add_showtime(1, "18:00"), 1);

    let ticket_id = manager.sell_ticket(1, 0).unwrap();
    assert_eq!(ticket_id, 1);
    assert_eq!(
        manager.sell_ticket(1, 0),
        Err(BookingError::SeatAlreadySold(0))
    );

    manager.refund_ticket(ticket_id).unwrap();
    assert_eq!(
        manager.refund_ticket(ticket_id),
        Err(BookingError::TicketNotFoundOrAlreadyRefunded(1))
    );

    // Перепродажа возвращенного места использует прежний билет
    assert_eq!(manager.sell_ticket(1, 0), Ok(1));
    assert_eq!(manager.tickets().len(), 1);
}

// Состояние, включая занятость зала, переживает перезапуск процесса
#[test]
fn state_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let store = JsonStore::new(dir.path());

    {
        let mut manager = BookingManager::new();
        manager.add_movie("Дюна", "фантастика");
        manager.add_showtime(1, "18:00");
        manager.sell_ticket(1, 42).unwrap();
        manager.sell_ticket(1, 43).unwrap();
        manager.refund_ticket(2).unwrap();
        store
            .save(manager.movies(), manager.showtimes(), manager.tickets())
            .unwrap();
    }

    let (movies, showtimes, tickets) = store.load().unwrap();
    let mut manager = BookingManager::from_parts(movies, showtimes, tickets);

    // Место 42 занято, место 43 свободно после возврата
    let map = manager.seat_map(1).unwrap();
    assert!(map.contains(&(Seat::from_number(42, 10), true)));
    assert!(map.contains(&(Seat::from_number(43, 10), false)));

    // Счетчики ID продолжаются от сохраненного максимума
    assert_eq!(manager.add_movie("Солярис", "классика"), 2);
    assert_eq!(manager.add_showtime(2, "21:00"), 2);
    assert_eq!(manager.sell_ticket(2, 0), Ok(3));
}
