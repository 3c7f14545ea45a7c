use serde::{Deserialize, Serialize};

use crate::Point;
use crate::board::Board;
use crate::error::PlaceError;
use crate::stone::Stone;

/// Read-only snapshot of the session for a renderer: cell values (row-major,
/// 0 / 1 / -1), board size, the stone to play, and the hover cursor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoardView {
    pub board: Vec<i8>,
    pub size: u8,
    pub to_play: Stone,
    pub cursor: Option<Point>,
}

/// The move-legality state machine for one playing session.
///
/// Owns the board exclusively; the UI layer mutates it only through
/// [`GameState::place`] and [`GameState::record_cursor`] and reads it through
/// the accessors or a [`BoardView`] snapshot.
///
/// Exactly one legality rule is enforced: the target point must be on the
/// board and empty. Suicide, ko and group capture are intentionally absent —
/// a stone with no liberties stays on the board, and surrounding an opposing
/// group removes nothing. Adding those rules would change observable play
/// and belongs to a future ruleset extension, not here.
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    to_play: Stone,
    cursor: Option<Point>,
}

impl GameState {
    /// Start a session on an empty board of the given size, Black to play.
    pub fn new(size: u8) -> Self {
        GameState {
            board: Board::new(size),
            to_play: Stone::Black,
            cursor: None,
        }
    }

    // -- Accessors --

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn size(&self) -> u8 {
        self.board.size()
    }

    pub fn to_play(&self) -> Stone {
        self.to_play
    }

    pub fn cursor(&self) -> Option<Point> {
        self.cursor
    }

    pub fn stone_at(&self, point: Point) -> Option<Stone> {
        self.board.stone_at(point)
    }

    // -- Mutations --

    /// Attempt to place the current player's stone.
    ///
    /// On success the cell takes `to_play`'s color and the turn flips. On
    /// rejection board and turn are untouched and the reason is returned.
    /// Off-board points fail closed with [`PlaceError::OutOfBounds`].
    pub fn place(&mut self, point: Point) -> Result<(), PlaceError> {
        if !self.board.on_board(point) {
            return Err(self.reject(point, PlaceError::OutOfBounds));
        }
        if self.board.stone_at(point).is_some() {
            return Err(self.reject(point, PlaceError::AlreadyOccupied));
        }

        self.board.set(point, self.to_play);
        self.to_play = self.to_play.opp();
        Ok(())
    }

    /// Record the latest hover position reported by the input adapter.
    ///
    /// Purely advisory: overwritten unconditionally, never validated, and
    /// has no bearing on what [`GameState::place`] accepts.
    pub fn record_cursor(&mut self, point: Point) {
        self.cursor = Some(point);
    }

    /// Owned snapshot for the renderer.
    pub fn view(&self) -> BoardView {
        BoardView {
            board: self.board.cells().to_vec(),
            size: self.board.size(),
            to_play: self.to_play,
            cursor: self.cursor,
        }
    }

    fn reject(&self, (col, row): Point, reason: PlaceError) -> PlaceError {
        tracing::debug!("rejected placement at ({col}, {row}): {reason}");
        reason
    }
}
