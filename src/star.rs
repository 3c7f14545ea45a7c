use crate::Point;

/// Star-point (hoshi) coordinates for a board size, 1-indexed.
///
/// Reference intersections for a renderer to mark; they carry no gameplay
/// meaning. Sizes without a conventional layout yield an empty list.
pub fn star_points(size: u8) -> Vec<Point> {
    match size {
        9 => vec![(3, 3), (7, 3), (5, 5), (3, 7), (7, 7)],
        13 => vec![(4, 4), (10, 4), (7, 7), (4, 10), (10, 10)],
        19 => vec![
            (4, 4),
            (10, 4),
            (16, 4),
            (4, 10),
            (10, 10),
            (16, 10),
            (4, 16),
            (10, 16),
            (16, 16),
        ],
        _ => Vec::new(),
    }
}
