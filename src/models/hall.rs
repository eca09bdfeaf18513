use serde::{Deserialize, Serialize};

/// Координаты места в зале. Взаимно-однозначно переводятся в сквозной
/// номер места: `number = row * seats_per_row + col`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Seat {
    pub row: u32,
    pub col: u32,
}

impl Seat {
    pub fn from_number(number: u32, seats_per_row: u32) -> Self {
        Seat {
            row: number / seats_per_row,
            col: number % seats_per_row,
        }
    }

    pub fn number(&self, seats_per_row: u32) -> u32 {
        self.row * seats_per_row + self.col
    }
}

/// Зал сеанса: сетка rows × seats_per_row, в занятой ячейке лежит ID
/// занимающего ее билета. Зал принадлежит ровно одному сеансу; всю
/// согласованность с реестром билетов поддерживает BookingManager -
/// единственный, кто мутирует сетку.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Hall {
    rows: u32,
    seats_per_row: u32,
    seats: Vec<Vec<Option<u32>>>,
}

impl Hall {
    pub fn new(rows: u32, seats_per_row: u32) -> Self {
        Hall {
            rows,
            seats_per_row,
            seats: vec![vec![None; seats_per_row as usize]; rows as usize],
        }
    }

    pub fn rows(&self) -> u32 {
        self.rows
    }

    pub fn seats_per_row(&self) -> u32 {
        self.seats_per_row
    }

    pub fn capacity(&self) -> u32 {
        self.rows * self.seats_per_row
    }

    pub fn contains(&self, seat: Seat) -> bool {
        seat.row < self.rows && seat.col < self.seats_per_row
    }

    // Границы проверяет вызывающая сторона (менеджер).
    pub fn occupy(&mut self, seat: Seat, ticket_id: u32) {
        self.seats[seat.row as usize][seat.col as usize] = Some(ticket_id);
    }

    pub fn vacate(&mut self, seat: Seat) {
        self.seats[seat.row as usize][seat.col as usize] = None;
    }

    pub fn is_occupied(&self, seat: Seat) -> bool {
        self.seats[seat.row as usize][seat.col as usize].is_some()
    }

    pub fn occupant(&self, seat: Seat) -> Option<u32> {
        self.seats[seat.row as usize][seat.col as usize]
    }

    // Снимок занятости всех мест в порядке ряд-за-рядом
    pub fn snapshot(&self) -> Vec<(Seat, bool)> {
        let mut cells = Vec::with_capacity(self.capacity() as usize);
        for (r, row) in self.seats.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                let seat = Seat {
                    row: r as u32,
                    col: c as u32,
                };
                cells.push((seat, cell.is_some()));
            }
        }
        cells
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seat_number_conversion_is_bidirectional() {
        let seat = Seat::from_number(37, 10);
        assert_eq!(seat, Seat { row: 3, col: 7 });
        assert_eq!(seat.number(10), 37);

        // Нестандартная ширина ряда
        let seat = Seat::from_number(13, 6);
        assert_eq!(seat, Seat { row: 2, col: 1 });
        assert_eq!(seat.number(6), 13);
    }

    #[test]
    fn occupy_and_vacate_track_ticket_ids() {
        let mut hall = Hall::new(10, 10);
        let seat = Seat { row: 0, col: 0 };

        assert!(!hall.is_occupied(seat));
        hall.occupy(seat, 42);
        assert_eq!(hall.occupant(seat), Some(42));
        hall.vacate(seat);
        assert!(!hall.is_occupied(seat));
    }

    #[test]
    fn snapshot_is_row_major_and_complete() {
        let mut hall = Hall::new(2, 3);
        hall.occupy(Seat { row: 1, col: 2 }, 7);

        let snapshot = hall.snapshot();
        assert_eq!(snapshot.len(), 6);
        assert_eq!(snapshot[0], (Seat { row: 0, col: 0 }, false));
        assert_eq!(snapshot[5], (Seat { row: 1, col: 2 }, true));
    }

    #[test]
    fn contains_checks_both_axes() {
        let hall = Hall::new(2, 3);
        assert!(hall.contains(Seat { row: 1, col: 2 }));
        assert!(!hall.contains(Seat { row: 2, col: 0 }));
        assert!(!hall.contains(Seat { row: 0, col: 3 }));
    }
}
