use std::fmt;
use std::str::FromStr;

use crate::error::BoardError;

/// Cell contents: `0` is empty, any other value is a piece of that player/kind.
pub type Tag = u8;

pub const EMPTY: Tag = 0;
pub const DEFAULT_BOARD_SIZE: usize = 5;

/// A `(row, col)` pair. Row 0 is the top, col 0 the left edge.
///
/// Signed so that requests pointing off the board can be represented and
/// rejected by name rather than wrapping around.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Coord {
    pub row: isize,
    pub col: isize,
}

impl Coord {
    pub const fn new(row: isize, col: isize) -> Self {
        Coord { row, col }
    }

    /// Shift by `(dr, dc)`, or `None` if either axis overflows.
    pub fn offset(self, dr: isize, dc: isize) -> Option<Coord> {
        Some(Coord::new(
            self.row.checked_add(dr)?,
            self.col.checked_add(dc)?,
        ))
    }

    /// The square halfway to `other`, e.g. the jumped-over square of a capture.
    pub fn midpoint(self, other: Coord) -> Coord {
        Coord::new((self.row + other.row) / 2, (self.col + other.col) / 2)
    }

    /// True if `other` is exactly one diagonal step away.
    pub fn is_diagonal_step(self, other: Coord) -> bool {
        (self.row - other.row).abs() == 1 && (self.col - other.col).abs() == 1
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(isize, isize)> for Coord {
    fn from((row, col): (isize, isize)) -> Self {
        Coord::new(row, col)
    }
}

impl FromStr for Coord {
    type Err = BoardError;

    /// Parses `"r,c"` (surrounding parentheses and spaces are tolerated).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_start_matches('(').trim_end_matches(')');
        let mut parts = trimmed.split(',').map(str::trim);
        let (Some(row), Some(col), None) = (parts.next(), parts.next(), parts.next()) else {
            return Err(BoardError::Parse(format!("coordinate '{s}'")));
        };
        let row = row
            .parse()
            .map_err(|_| BoardError::Parse(format!("row in '{s}'")))?;
        let col = col
            .parse()
            .map_err(|_| BoardError::Parse(format!("column in '{s}'")))?;
        Ok(Coord::new(row, col))
    }
}

/// Square grid of cell tags, owned so that search branches can copy freely.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    size: usize,
    cells: Vec<Vec<Tag>>,
}

impl Board {
    /// Create an empty `size x size` board
    pub fn empty(size: usize) -> Result<Self, BoardError> {
        cell_count(size)?;
        Ok(Board {
            size,
            cells: vec![vec![EMPTY; size]; size],
        })
    }

    /// Reshape a row-major flat list into a grid: `grid[r][c] == flat[r * size + c]`.
    ///
    /// The caller's slice is copied, never borrowed, so later edits to the
    /// board (or its branch copies) cannot reach back into it.
    pub fn from_flat(flat: &[Tag], size: usize) -> Result<Self, BoardError> {
        let expected = cell_count(size)?;
        if flat.len() != expected {
            return Err(BoardError::WrongLength {
                expected,
                actual: flat.len(),
            });
        }
        Ok(Board {
            size,
            cells: flat.chunks(size).map(<[Tag]>::to_vec).collect(),
        })
    }

    /// Flatten back into row-major order.
    pub fn to_flat(&self) -> Vec<Tag> {
        self.cells.iter().flatten().copied().collect()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn in_bounds(&self, coord: Coord) -> bool {
        in_bounds(self.size, coord)
    }

    /// Get the tag at `coord`, or `None` when it lies off the board.
    pub fn get(&self, coord: Coord) -> Option<Tag> {
        if !self.in_bounds(coord) {
            return None;
        }
        Some(self.cells[coord.row as usize][coord.col as usize])
    }

    /// True if `coord` is on the board and holds no piece.
    pub fn is_empty_at(&self, coord: Coord) -> bool {
        self.get(coord) == Some(EMPTY)
    }

    /// Place `tag` at `coord`. Returns false (and changes nothing) off the board.
    pub fn set(&mut self, coord: Coord, tag: Tag) -> bool {
        if !self.in_bounds(coord) {
            return false;
        }
        self.cells[coord.row as usize][coord.col as usize] = tag;
        true
    }

    /// A copy of this board with `coord` emptied.
    pub fn with_cleared(&self, coord: Coord) -> Board {
        let mut copy = self.clone();
        copy.set(coord, EMPTY);
        copy
    }

    /// Number of cells holding any piece.
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().flatten().filter(|&&t| t != EMPTY).count()
    }
}

/// Number of cells on a `size x size` board.
fn cell_count(size: usize) -> Result<usize, BoardError> {
    if size == 0 {
        return Err(BoardError::ZeroSize);
    }
    // Coordinates are signed, so the side must also fit in an isize.
    if isize::try_from(size).is_err() {
        return Err(BoardError::SizeTooLarge(size));
    }
    size.checked_mul(size).ok_or(BoardError::SizeTooLarge(size))
}

/// True iff `0 <= row < size` and `0 <= col < size`.
pub fn in_bounds(size: usize, coord: Coord) -> bool {
    let size = size as isize;
    (0..size).contains(&coord.row) && (0..size).contains(&coord.col)
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            let line: Vec<String> = row.iter().map(Tag::to_string).collect();
            write!(f, "{}", line.join(" "))?;
        }
        Ok(())
    }
}

impl FromStr for Board {
    type Err = BoardError;

    /// Parse a flat list of tags separated by commas and/or whitespace. The
    /// side length is inferred, so the cell count must be a perfect square.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let flat = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .map(|t| {
                t.parse::<Tag>()
                    .map_err(|_| BoardError::Parse(format!("cell '{t}'")))
            })
            .collect::<Result<Vec<_>, _>>()?;

        let size = (flat.len() as f64).sqrt().round() as usize;
        if size * size != flat.len() {
            return Err(BoardError::NotSquare(flat.len()));
        }
        Board::from_flat(&flat, size)
    }
}
