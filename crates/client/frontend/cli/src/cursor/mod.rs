//! Grid cursor used by the workshop to address object cells.

use game_core::GameConfig;

/// Cursor position in block-sized grid cells.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct GridCursor {
    pub col: i32,
    pub row: i32,
}

impl GridCursor {
    pub fn new(col: i32, row: i32) -> Self {
        Self { col, row }
    }

    /// Cell containing the world point `(x, y)`.
    pub fn containing(x: f64, y: f64) -> Self {
        Self {
            col: (x / GameConfig::BLOCK_SIZE).floor() as i32,
            row: (y / GameConfig::BLOCK_SIZE).floor() as i32,
        }
    }

    /// Moves the cursor by the given delta, clamped to `cols` x `rows`.
    pub fn move_by(&mut self, dx: i32, dy: i32, cols: i32, rows: i32) {
        self.col = (self.col + dx).clamp(0, cols - 1);
        self.row = (self.row + dy).clamp(0, rows - 1);
    }

    /// Top-left corner of the cell in world pixels.
    pub fn to_world(self) -> (f64, f64) {
        (
            f64::from(self.col) * GameConfig::BLOCK_SIZE,
            f64::from(self.row) * GameConfig::BLOCK_SIZE,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_movement_clamps_to_bounds() {
        let mut cursor = GridCursor::new(5, 5);
        cursor.move_by(-10, -10, 20, 10);
        assert_eq!(cursor, GridCursor::new(0, 0));

        cursor.move_by(100, 100, 20, 10);
        assert_eq!(cursor, GridCursor::new(19, 9));
    }

    #[test]
    fn world_round_trip() {
        let cursor = GridCursor::new(15, 9);
        assert_eq!(cursor.to_world(), (600.0, 360.0));
        assert_eq!(GridCursor::containing(615.0, 379.0), cursor);
    }
}
