pub mod board;
pub mod error;
pub mod game;
pub mod star;
pub mod stone;

/// A 1-indexed `(column, row)` grid coordinate, each in `[1, size]`.
pub type Point = (u8, u8);

pub use board::Board;
pub use error::PlaceError;
pub use game::{BoardView, GameState};
pub use star::star_points;
pub use stone::Stone;
