//! Field tests - occupancy grid and line clearing

use tui_blockfall::core::{Field, Piece};
use tui_blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

fn fill_row(field: &mut Field, row: i8) {
    for col in 0..BOARD_WIDTH as i8 {
        field.set(row, col, true);
    }
}

#[test]
fn test_field_new_empty() {
    let field = Field::new();
    assert_eq!(field.width(), BOARD_WIDTH);
    assert_eq!(field.height(), BOARD_HEIGHT);
    assert_eq!(field.filled_count(), 0);

    for row in 0..BOARD_HEIGHT as i8 {
        for col in 0..BOARD_WIDTH as i8 {
            assert_eq!(field.get(row, col), Some(false), "({row}, {col})");
        }
    }
}

#[test]
fn test_field_get_out_of_bounds() {
    let field = Field::new();
    assert_eq!(field.get(-1, 0), None);
    assert_eq!(field.get(0, -1), None);
    assert_eq!(field.get(BOARD_HEIGHT as i8, 0), None);
    assert_eq!(field.get(0, BOARD_WIDTH as i8), None);
}

#[test]
fn test_field_set_out_of_bounds_is_rejected() {
    let mut field = Field::new();
    assert!(!field.set(20, 0, true));
    assert!(!field.set(0, 10, true));
    assert_eq!(field.filled_count(), 0);
}

#[test]
fn test_clear_rows_zero_and_two() {
    let mut field = Field::new();
    fill_row(&mut field, 0);
    fill_row(&mut field, 2);
    // Markers on the surviving rows.
    field.set(1, 3, true);
    field.set(3, 7, true);
    field.set(19, 0, true);

    assert_eq!(field.clear_filled_rows(), 2);

    // Row 1 fell to 0, row 3 fell to 1, order preserved.
    assert_eq!(field.row(0).unwrap().iter().filter(|&&c| c).count(), 1);
    assert_eq!(field.get(0, 3), Some(true));
    assert_eq!(field.get(1, 7), Some(true));
    assert_eq!(field.get(17, 0), Some(true));

    // Two fresh empty rows on top.
    assert!(field.row(18).unwrap().iter().all(|&c| !c));
    assert!(field.row(19).unwrap().iter().all(|&c| !c));
    assert_eq!(field.filled_count(), 3);
}

#[test]
fn test_clear_four_rows() {
    let mut field = Field::new();
    for row in 0..4 {
        fill_row(&mut field, row);
    }
    field.set(4, 5, true);

    let cleared = field.clear_full_rows();
    assert_eq!(cleared.as_slice(), &[0, 1, 2, 3]);
    assert_eq!(field.get(0, 5), Some(true));
    assert_eq!(field.filled_count(), 1);
}

#[test]
fn test_clear_nothing_when_no_full_rows() {
    let mut field = Field::new();
    for col in 0..BOARD_WIDTH as i8 - 1 {
        field.set(0, col, true);
    }
    let before = field.clone();
    assert_eq!(field.clear_filled_rows(), 0);
    assert_eq!(field, before);
}

#[test]
fn test_commit_marks_piece_cells() {
    let mut field = Field::new();
    let piece = Piece::at(PieceKind::T, 1, 0);
    field.commit(&piece);

    assert_eq!(field.get(1, 0), Some(true));
    assert_eq!(field.get(1, 1), Some(true));
    assert_eq!(field.get(1, 2), Some(true));
    assert_eq!(field.get(0, 1), Some(true));
    assert_eq!(field.filled_count(), 4);
}

#[test]
fn test_commit_drops_cells_above_ceiling() {
    let mut field = Field::new();
    // Vertical I anchored one row above the top: only three cells land.
    let mut piece = Piece::at(PieceKind::I, 20, 0);
    assert!(piece.rotate(&field, true));
    field.commit(&piece);
    assert_eq!(field.filled_count(), 3);
    assert_eq!(field.get(17, 0), Some(true));
}
