/// Collision predicates — pure functions over axis-aligned rectangles.
///
/// Obstacle rows are fractional (garbage falls half a cell per tick), so
/// rectangles carry an `f32` top row and are rounded to display cells
/// before comparison.  Extents are half-open: a rectangle at row 3 with
/// height 2 covers rows 3 and 4, not 5.

/// Bounding box of a sprite on the field.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    /// Top row, fractional while falling.
    pub row: f32,
    /// Left column.
    pub col: i32,
    pub rows: u16,
    pub cols: u16,
}

impl Rect {
    pub fn new(row: f32, col: i32, rows: u16, cols: u16) -> Rect {
        Rect { row, col, rows, cols }
    }

    pub fn top(&self) -> i32 {
        self.row.round() as i32
    }

    /// One past the last covered row.
    pub fn bottom(&self) -> i32 {
        self.top() + self.rows as i32
    }

    pub fn left(&self) -> i32 {
        self.col
    }

    /// One past the last covered column.
    pub fn right(&self) -> i32 {
        self.col + self.cols as i32
    }

    /// Center cell, for placing explosions.
    pub fn center(&self) -> (i32, i32) {
        (
            self.top() + self.rows as i32 / 2,
            self.col + self.cols as i32 / 2,
        )
    }
}

/// Rectangle-overlap test (ship vs. obstacle).
pub fn rects_overlap(a: &Rect, b: &Rect) -> bool {
    a.top() < b.bottom() && b.top() < a.bottom() && a.left() < b.right() && b.left() < a.right()
}

/// Point-in-rectangle test (projectile vs. obstacle).
pub fn rect_contains(r: &Rect, row: i32, col: i32) -> bool {
    row >= r.top() && row < r.bottom() && col >= r.left() && col < r.right()
}
