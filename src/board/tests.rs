use super::*;

#[test]
fn test_color_opponent() {
    assert_eq!(Color::Black.opponent(), Color::White);
    assert_eq!(Color::White.opponent(), Color::Black);
}

#[test]
fn test_color_designator() {
    assert_eq!(Color::from_designator("w"), Color::White);
    assert_eq!(Color::from_designator(" w\n"), Color::White);
    assert_eq!(Color::from_designator("white"), Color::Black);
    assert_eq!(Color::from_designator("wx"), Color::Black);
    assert_eq!(Color::from_designator("W"), Color::Black);
    assert_eq!(Color::from_designator("b"), Color::Black);
    assert_eq!(Color::from_designator(""), Color::Black);
    assert_eq!(Color::from_designator("x"), Color::Black);
}

#[test]
fn test_color_initial() {
    assert_eq!(Color::from_initial("w"), Color::White);
    assert_eq!(Color::from_initial("white"), Color::White);
    assert_eq!(Color::from_initial("b"), Color::Black);
    assert_eq!(Color::from_initial("black"), Color::Black);
    assert_eq!(Color::from_initial(""), Color::Black);
}

#[test]
fn test_pos_conversion() {
    let pos = Pos::new(3, 4);
    assert_eq!(pos.to_index(), 3 + 8 * 4);
    assert_eq!(pos.to_index(), 35);

    let pos2 = Pos::from_index(35);
    assert_eq!(pos2.x, 3);
    assert_eq!(pos2.y, 4);
}

#[test]
fn test_pos_validity() {
    assert!(Pos::is_valid(0, 0));
    assert!(Pos::is_valid(7, 7));
    assert!(!Pos::is_valid(-1, 0));
    assert!(!Pos::is_valid(0, -1));
    assert!(!Pos::is_valid(8, 0));
    assert!(!Pos::is_valid(0, 8));
}

#[test]
fn test_pos_offset() {
    assert_eq!(Pos::new(0, 0).offset(1, 1), Some(Pos::new(1, 1)));
    assert_eq!(Pos::new(0, 0).offset(-1, 0), None);
    assert_eq!(Pos::new(7, 3).offset(1, 0), None);
}

#[test]
fn test_pos_ordering_is_row_major() {
    let pos1 = Pos::new(0, 0);
    let pos2 = Pos::new(1, 0);
    let pos3 = Pos::new(0, 1);

    assert!(pos1 < pos2);
    assert!(pos2 < pos3);

    let all: Vec<Pos> = Pos::all().collect();
    assert_eq!(all.len(), TOTAL_CELLS);
    assert_eq!(all[8], Pos::new(0, 1));
    assert!(all.windows(2).all(|w| w[0] < w[1]));
}

#[test]
fn test_initial_position() {
    let board = Board::initial();
    assert_eq!(board.cell_at(3, 3), Cell::White);
    assert_eq!(board.cell_at(4, 4), Cell::White);
    assert_eq!(board.cell_at(3, 4), Cell::Black);
    assert_eq!(board.cell_at(4, 3), Cell::Black);
    assert_eq!(board.occupied_count(), 4);
    assert_eq!(board.empty_count(), 60);
}

#[test]
fn test_swapped_and_empty_openings() {
    let swapped = Board::with_opening(Opening::Swapped);
    assert_eq!(swapped.cell_at(3, 3), Cell::Black);
    assert_eq!(swapped.cell_at(3, 4), Cell::White);

    let empty = Board::with_opening(Opening::Empty);
    assert_eq!(empty.occupied_count(), 0);
}

#[test]
fn test_with_cell_is_pure() {
    let board = Board::initial();
    let changed = board.with_cell(Pos::new(0, 0), Cell::Black);

    assert_eq!(board.cell_at(0, 0), Cell::Empty);
    assert_eq!(changed.cell_at(0, 0), Cell::Black);

    // Overwriting replaces the colour rather than setting both bits
    let overwritten = changed.with_cell(Pos::new(0, 0), Cell::White);
    assert_eq!(overwritten.cell_at(0, 0), Cell::White);
    assert_eq!(overwritten.disc_count(Color::Black), 2);
}

#[test]
fn test_from_cells() {
    let mut cells = [Cell::Empty; TOTAL_CELLS];
    cells[0] = Cell::Black;
    cells[63] = Cell::White;
    let board = Board::from_cells(&cells);

    assert_eq!(board.cell_at(0, 0), Cell::Black);
    assert_eq!(board.cell_at(7, 7), Cell::White);
    assert_eq!(board.occupied_count(), 2);
}

#[test]
fn test_display() {
    let text = Board::initial().to_string();
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines[0], "  a b c d e f g h");
    assert_eq!(lines[4], "4 - - - W B - - -");
    assert_eq!(lines[5], "5 - - - B W - - -");
}
