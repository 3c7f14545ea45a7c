use crate::Point;
use crate::stone::Stone;

/// Board sizes a renderer knows how to lay out.
pub const SUPPORTED_SIZES: [u8; 3] = [9, 13, 19];

/// The occupancy grid, stored as a flat row-major array of cell values.
///
/// Coordinates are 1-indexed `(column, row)` pairs in `[1, size]`. Passing
/// an out-of-range coordinate to `stone_at`, `set` or `clear` is a caller
/// contract violation; use [`Board::on_board`] to screen untrusted input.
/// This type holds no game rules; legality lives in [`crate::GameState`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: Vec<i8>,
    size: u8,
}

impl Board {
    /// Create an empty square board.
    ///
    /// # Panics
    ///
    /// Panics if `size` is not one of 9, 13 or 19. Size is fixed
    /// configuration, not user input.
    pub fn new(size: u8) -> Self {
        assert!(
            SUPPORTED_SIZES.contains(&size),
            "unsupported board size {size}"
        );
        Board {
            cells: vec![0i8; size as usize * size as usize],
            size,
        }
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    /// The raw cell values, row-major: 0 empty, 1 black, -1 white.
    pub fn cells(&self) -> &[i8] {
        &self.cells
    }

    pub fn on_board(&self, (col, row): Point) -> bool {
        (1..=self.size).contains(&col) && (1..=self.size).contains(&row)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|&c| c == 0)
    }

    /// Occupancy of a cell: `None` when empty.
    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        Stone::from_cell(self.cells[self.idx(point)])
    }

    /// Overwrite a cell unconditionally. No legality checking.
    pub fn set(&mut self, point: Point, stone: Stone) {
        let i = self.idx(point);
        self.cells[i] = stone.to_cell();
    }

    /// Empty a cell unconditionally.
    pub fn clear(&mut self, point: Point) {
        let i = self.idx(point);
        self.cells[i] = 0;
    }

    #[inline]
    fn idx(&self, point: Point) -> usize {
        assert!(self.on_board(point), "point {point:?} off the board");
        let (col, row) = point;
        (row as usize - 1) * self.size as usize + (col as usize - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn creates_empty_board_of_each_size() {
        for size in SUPPORTED_SIZES {
            let board = Board::new(size);
            assert_eq!(board.size(), size);
            assert_eq!(board.cells().len(), size as usize * size as usize);
            assert!(board.is_empty());
        }
    }

    #[test]
    #[should_panic(expected = "unsupported board size")]
    fn rejects_unsupported_size() {
        Board::new(10);
    }

    #[test]
    fn on_board_is_one_indexed() {
        let board = Board::new(9);
        assert!(board.on_board((1, 1)));
        assert!(board.on_board((9, 9)));
        assert!(!board.on_board((0, 1)));
        assert!(!board.on_board((1, 0)));
        assert!(!board.on_board((10, 1)));
        assert!(!board.on_board((1, 10)));
    }

    #[test]
    fn set_and_read_back() {
        let mut board = Board::new(9);
        board.set((3, 3), Stone::Black);
        assert_eq!(board.stone_at((3, 3)), Some(Stone::Black));
        assert_eq!(board.stone_at((3, 4)), None);
        // flat index: (row - 1) * size + (col - 1)
        assert_eq!(board.cells()[2 * 9 + 2], Stone::Black.to_cell());
    }

    #[test]
    fn set_overwrites_unconditionally() {
        let mut board = Board::new(9);
        board.set((5, 5), Stone::Black);
        board.set((5, 5), Stone::White);
        assert_eq!(board.stone_at((5, 5)), Some(Stone::White));
    }

    #[test]
    fn clear_empties_cell() {
        let mut board = Board::new(9);
        board.set((2, 7), Stone::White);
        board.clear((2, 7));
        assert_eq!(board.stone_at((2, 7)), None);
        assert!(board.is_empty());
    }

    #[test]
    #[should_panic(expected = "off the board")]
    fn out_of_range_access_panics() {
        let board = Board::new(9);
        board.stone_at((10, 1));
    }
}
