use std::fmt;

/// Why a placement was rejected. Rejections are routine outcomes (a click on
/// an occupied point), surfaced for user feedback, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaceError {
    AlreadyOccupied,
    OutOfBounds,
}

impl fmt::Display for PlaceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlaceError::AlreadyOccupied => write!(f, "point already occupied"),
            PlaceError::OutOfBounds => write!(f, "point off the board"),
        }
    }
}

impl std::error::Error for PlaceError {}
