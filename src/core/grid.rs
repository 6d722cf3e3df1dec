//! Board representation
//!
//! A `Grid` is an immutable rows×cols matrix of cells. Each cell holds an
//! optional uppercase letter (blank cells are impassable) and an optional
//! score multiplier. Adjacency is 8-directional.

use std::fmt;

/// Offsets of the 8 neighbouring cells
const DIRECTIONS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Cell multiplier bonus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Multiplier {
    DoubleLetter,
    TripleLetter,
    DoubleWord,
    TripleWord,
}

impl Multiplier {
    /// All multipliers, letter bonuses first
    pub const ALL: [Self; 4] = [
        Self::DoubleLetter,
        Self::TripleLetter,
        Self::DoubleWord,
        Self::TripleWord,
    ];

    /// Factor applied to the letter sitting on this cell
    #[inline]
    #[must_use]
    pub const fn letter_factor(self) -> u32 {
        match self {
            Self::DoubleLetter => 2,
            Self::TripleLetter => 3,
            Self::DoubleWord | Self::TripleWord => 1,
        }
    }

    /// Factor applied to the whole word when its path crosses this cell
    #[inline]
    #[must_use]
    pub const fn word_factor(self) -> u32 {
        match self {
            Self::DoubleWord => 2,
            Self::TripleWord => 3,
            Self::DoubleLetter | Self::TripleLetter => 1,
        }
    }

    /// Extra start priority for a cell carrying this multiplier
    ///
    /// Word multipliers rank above letter multipliers so that searches
    /// rooted on them run first and raise the pruning bar early.
    #[must_use]
    pub const fn start_bonus(self) -> u32 {
        match self {
            Self::TripleWord => 50,
            Self::DoubleWord => 30,
            Self::TripleLetter => 20,
            Self::DoubleLetter => 10,
        }
    }

    /// Short tag used in board text ("DL", "TL", "DW", "TW")
    #[must_use]
    pub const fn tag(self) -> &'static str {
        match self {
            Self::DoubleLetter => "DL",
            Self::TripleLetter => "TL",
            Self::DoubleWord => "DW",
            Self::TripleWord => "TW",
        }
    }

    /// Parse a tag, case-insensitively
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|m| m.tag().eq_ignore_ascii_case(tag.trim()))
    }
}

/// Row/column coordinate on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    #[inline]
    #[must_use]
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// True if `other` is one of the 8 cells surrounding `self`
    #[must_use]
    pub const fn is_adjacent(self, other: Self) -> bool {
        let dr = self.row.abs_diff(other.row);
        let dc = self.col.abs_diff(other.col);
        dr <= 1 && dc <= 1 && (dr + dc) > 0
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.row, self.col)
    }
}

/// A single board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    letter: Option<u8>,
    multiplier: Option<Multiplier>,
}

impl Cell {
    /// Create a lettered cell
    ///
    /// Lowercase input is normalised to uppercase.
    ///
    /// # Errors
    /// Returns `GridError::InvalidLetter` if `letter` is not an ASCII letter.
    pub fn new(letter: char) -> Result<Self, GridError> {
        if !letter.is_ascii_alphabetic() {
            return Err(GridError::InvalidLetter(letter));
        }
        Ok(Self {
            letter: Some(letter.to_ascii_uppercase() as u8),
            multiplier: None,
        })
    }

    /// An empty, impassable cell
    #[must_use]
    pub const fn blank() -> Self {
        Self {
            letter: None,
            multiplier: None,
        }
    }

    #[must_use]
    pub const fn with_multiplier(mut self, multiplier: Multiplier) -> Self {
        self.multiplier = Some(multiplier);
        self
    }

    /// The cell letter as an uppercase ASCII byte
    #[inline]
    #[must_use]
    pub const fn letter(&self) -> Option<u8> {
        self.letter
    }

    #[inline]
    #[must_use]
    pub const fn multiplier(&self) -> Option<Multiplier> {
        self.multiplier
    }

    #[inline]
    #[must_use]
    pub const fn is_occupied(&self) -> bool {
        self.letter.is_some()
    }

    /// Letter factor of this cell (1 when no letter multiplier)
    #[inline]
    #[must_use]
    pub fn letter_factor(&self) -> u32 {
        self.multiplier.map_or(1, Multiplier::letter_factor)
    }

    /// Word factor of this cell (1 when no word multiplier)
    #[inline]
    #[must_use]
    pub fn word_factor(&self) -> u32 {
        self.multiplier.map_or(1, Multiplier::word_factor)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.letter {
            Some(letter) => write!(f, "{}", char::from(letter))?,
            None => write!(f, ".")?,
        }
        if let Some(multiplier) = self.multiplier {
            write!(f, "({})", multiplier.tag())?;
        }
        Ok(())
    }
}

/// Error type for invalid boards
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    Empty,
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    InvalidLetter(char),
    UnknownMultiplier(String),
    UnclosedTag(usize),
    TooLarge {
        rows: usize,
        cols: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Grid must have at least one row and one column"),
            Self::Ragged {
                row,
                expected,
                found,
            } => write!(
                f,
                "Row {row} has {found} cells, expected {expected} (grid must be rectangular)"
            ),
            Self::InvalidLetter(ch) => write!(f, "Invalid cell letter '{ch}'"),
            Self::UnknownMultiplier(tag) => {
                write!(f, "Unknown multiplier '{tag}' (expected DL, TL, DW or TW)")
            }
            Self::UnclosedTag(row) => write!(f, "Unclosed multiplier tag in row {row}"),
            Self::TooLarge { rows, cols } => write!(f, "Grid of {rows}×{cols} cells is too large"),
        }
    }
}

impl std::error::Error for GridError {}

/// Rectangular letter board
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create a grid from rows of cells
    ///
    /// # Errors
    /// Returns `GridError::Empty` for a grid without rows or columns and
    /// `GridError::Ragged` if rows differ in length.
    pub fn new(rows: Vec<Vec<Cell>>) -> Result<Self, GridError> {
        let cols = rows.first().map_or(0, Vec::len);
        if cols == 0 {
            return Err(GridError::Empty);
        }

        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            return Err(GridError::Ragged {
                row,
                expected: cols,
                found,
            });
        }

        let row_count = rows.len();
        Ok(Self {
            rows: row_count,
            cols,
            cells: rows.into_iter().flatten().collect(),
        })
    }

    /// Fill a `rows`×`cols` board row-major from free text
    ///
    /// Non-letters are skipped; cells left over once the text runs out stay blank.
    ///
    /// # Errors
    /// Returns `GridError::Empty` if either dimension is zero and
    /// `GridError::TooLarge` if the cell count overflows.
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::core::{Grid, Position};
    ///
    /// let grid = Grid::from_letters(2, 2, "c a t").unwrap();
    /// assert_eq!(grid.letter_at(Position::new(1, 0)), Some(b'T'));
    /// assert!(!grid.is_occupied(Position::new(1, 1)));
    /// ```
    pub fn from_letters(rows: usize, cols: usize, text: &str) -> Result<Self, GridError> {
        if rows == 0 || cols == 0 {
            return Err(GridError::Empty);
        }

        let len = rows
            .checked_mul(cols)
            .ok_or(GridError::TooLarge { rows, cols })?;
        let mut letters = text.chars().filter(char::is_ascii_alphabetic);
        let cells = (0..len)
            .map(|_| {
                letters
                    .next()
                    .and_then(|ch| Cell::new(ch).ok())
                    .unwrap_or_default()
            })
            .collect();

        Ok(Self { rows, cols, cells })
    }

    /// Parse a board from its text form
    ///
    /// Rows are separated by `/` or newlines. Each cell is a letter, or `.`/`_`
    /// for a blank, optionally followed by a `(DL)`, `(TL)`, `(DW)` or `(TW)`
    /// tag. Whitespace is ignored.
    ///
    /// # Errors
    /// Returns a `GridError` for unknown characters or tags and for
    /// empty or non-rectangular boards.
    ///
    /// # Examples
    /// ```
    /// use spellcast_solver::core::{Grid, Multiplier, Position};
    ///
    /// let grid = Grid::parse("CA(DW)T / DOG").unwrap();
    /// assert_eq!(grid.rows(), 2);
    /// assert_eq!(grid.multiplier_at(Position::new(0, 1)), Some(Multiplier::DoubleWord));
    /// ```
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows = text
            .split(['/', '\n'])
            .filter(|line| !line.trim().is_empty())
            .enumerate()
            .map(|(row, line)| parse_row(row, line))
            .collect::<Result<Vec<_>, _>>()?;

        Self::new(rows)
    }

    #[inline]
    #[must_use]
    pub const fn rows(&self) -> usize {
        self.rows
    }

    #[inline]
    #[must_use]
    pub const fn cols(&self) -> usize {
        self.cols
    }

    /// Total number of cells, blank or not
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.cells.len()
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    #[inline]
    #[must_use]
    pub const fn contains(&self, pos: Position) -> bool {
        pos.row < self.rows && pos.col < self.cols
    }

    /// Flat row-major index of `pos`, if in bounds
    #[inline]
    #[must_use]
    pub const fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some(pos.row * self.cols + pos.col)
        } else {
            None
        }
    }

    #[inline]
    #[must_use]
    pub fn cell(&self, pos: Position) -> Option<&Cell> {
        self.index(pos).map(|i| &self.cells[i])
    }

    #[inline]
    #[must_use]
    pub fn letter_at(&self, pos: Position) -> Option<u8> {
        self.cell(pos).and_then(Cell::letter)
    }

    #[inline]
    #[must_use]
    pub fn multiplier_at(&self, pos: Position) -> Option<Multiplier> {
        self.cell(pos).and_then(Cell::multiplier)
    }

    /// True if `pos` is in bounds and holds a letter
    #[inline]
    #[must_use]
    pub fn is_occupied(&self, pos: Position) -> bool {
        self.cell(pos).is_some_and(Cell::is_occupied)
    }

    /// The up to 8 in-bounds positions surrounding `pos`
    pub fn neighbors(&self, pos: Position) -> impl Iterator<Item = Position> + '_ {
        DIRECTIONS.iter().filter_map(move |&(dr, dc)| {
            let row = pos.row.checked_add_signed(dr)?;
            let col = pos.col.checked_add_signed(dc)?;
            let next = Position::new(row, col);
            self.contains(next).then_some(next)
        })
    }

    /// All positions in row-major order
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.cols).map(move |col| Position::new(row, col)))
    }

    /// Number of cells that hold a letter
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }

    /// Iterate cells row by row
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.cols)
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.iter_rows().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for cell in row {
                write!(f, "{cell}")?;
            }
        }
        Ok(())
    }
}

fn parse_row(row: usize, line: &str) -> Result<Vec<Cell>, GridError> {
    let mut cells = Vec::new();
    let mut chars = line.chars().filter(|c| !c.is_whitespace()).peekable();

    while let Some(ch) = chars.next() {
        let mut cell = match ch {
            '.' | '_' => Cell::blank(),
            other => Cell::new(other)?,
        };

        if chars.peek() == Some(&'(') {
            chars.next();
            let mut tag = String::new();
            let mut closed = false;
            for c in chars.by_ref() {
                if c == ')' {
                    closed = true;
                    break;
                }
                tag.push(c);
            }
            if !closed {
                return Err(GridError::UnclosedTag(row));
            }
            let multiplier =
                Multiplier::from_tag(&tag).ok_or_else(|| GridError::UnknownMultiplier(tag))?;
            cell = cell.with_multiplier(multiplier);
        }

        cells.push(cell);
    }

    Ok(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn letters(grid: &Grid) -> String {
        grid.positions()
            .map(|p| grid.letter_at(p).map_or('.', char::from))
            .collect()
    }

    #[test]
    fn cell_normalises_case() {
        let cell = Cell::new('q').unwrap();
        assert_eq!(cell.letter(), Some(b'Q'));
        assert!(cell.is_occupied());
    }

    #[test]
    fn cell_rejects_non_letters() {
        assert_eq!(Cell::new('3'), Err(GridError::InvalidLetter('3')));
        assert_eq!(Cell::new(' '), Err(GridError::InvalidLetter(' ')));
        assert_eq!(Cell::new('é'), Err(GridError::InvalidLetter('é')));
    }

    #[test]
    fn multiplier_factors() {
        assert_eq!(Multiplier::DoubleLetter.letter_factor(), 2);
        assert_eq!(Multiplier::TripleLetter.letter_factor(), 3);
        assert_eq!(Multiplier::DoubleWord.letter_factor(), 1);
        assert_eq!(Multiplier::DoubleWord.word_factor(), 2);
        assert_eq!(Multiplier::TripleWord.word_factor(), 3);
        assert_eq!(Multiplier::TripleLetter.word_factor(), 1);
    }

    #[test]
    fn multiplier_tags_round_trip() {
        for m in Multiplier::ALL {
            assert_eq!(Multiplier::from_tag(m.tag()), Some(m));
        }
        assert_eq!(Multiplier::from_tag("dw"), Some(Multiplier::DoubleWord));
        assert_eq!(Multiplier::from_tag("QW"), None);
    }

    #[test]
    fn grid_rejects_empty() {
        assert_eq!(Grid::new(vec![]), Err(GridError::Empty));
        assert_eq!(Grid::new(vec![vec![]]), Err(GridError::Empty));
    }

    #[test]
    fn grid_rejects_ragged_rows() {
        let a = Cell::new('A').unwrap();
        let result = Grid::new(vec![vec![a, a], vec![a]]);
        assert_eq!(
            result,
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
    }

    #[test]
    fn neighbors_of_corner_edge_and_centre() {
        let grid = Grid::from_letters(3, 3, "abcdefghi").unwrap();
        assert_eq!(grid.neighbors(Position::new(0, 0)).count(), 3);
        assert_eq!(grid.neighbors(Position::new(0, 1)).count(), 5);
        assert_eq!(grid.neighbors(Position::new(1, 1)).count(), 8);

        for n in grid.neighbors(Position::new(1, 1)) {
            assert!(n.is_adjacent(Position::new(1, 1)));
        }
    }

    #[test]
    fn neighbors_on_single_row() {
        let grid = Grid::from_letters(1, 3, "cat").unwrap();
        let around_middle: Vec<_> = grid.neighbors(Position::new(0, 1)).collect();
        assert_eq!(around_middle, vec![Position::new(0, 0), Position::new(0, 2)]);
    }

    #[test]
    fn adjacency_excludes_self_and_far_cells() {
        let p = Position::new(2, 2);
        assert!(!p.is_adjacent(p));
        assert!(p.is_adjacent(Position::new(1, 1)));
        assert!(p.is_adjacent(Position::new(3, 2)));
        assert!(!p.is_adjacent(Position::new(4, 2)));
        assert!(!p.is_adjacent(Position::new(2, 0)));
    }

    #[test]
    fn from_letters_rejects_overflowing_size() {
        assert_eq!(
            Grid::from_letters(usize::MAX, 2, "ab"),
            Err(GridError::TooLarge {
                rows: usize::MAX,
                cols: 2
            })
        );
    }

    #[test]
    fn from_letters_pads_with_blanks() {
        let grid = Grid::from_letters(2, 3, "ab-c").unwrap();
        assert_eq!(letters(&grid), "ABC...");
        assert_eq!(grid.occupied_count(), 3);
    }

    #[test]
    fn from_letters_ignores_overflow() {
        let grid = Grid::from_letters(1, 2, "abcdef").unwrap();
        assert_eq!(letters(&grid), "AB");
    }

    #[test]
    fn parse_with_multipliers_and_blanks() {
        let grid = Grid::parse("c a(dw) t\n. o(TL) g").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 3);
        assert_eq!(letters(&grid), "CAT.OG");
        assert_eq!(
            grid.multiplier_at(Position::new(0, 1)),
            Some(Multiplier::DoubleWord)
        );
        assert_eq!(
            grid.multiplier_at(Position::new(1, 1)),
            Some(Multiplier::TripleLetter)
        );
        assert!(!grid.is_occupied(Position::new(1, 0)));
    }

    #[test]
    fn parse_errors() {
        assert_eq!(Grid::parse(""), Err(GridError::Empty));
        assert_eq!(
            Grid::parse("ab/c"),
            Err(GridError::Ragged {
                row: 1,
                expected: 2,
                found: 1
            })
        );
        assert_eq!(
            Grid::parse("a(XX)b"),
            Err(GridError::UnknownMultiplier("XX".to_string()))
        );
        assert_eq!(Grid::parse("a(DW"), Err(GridError::UnclosedTag(0)));
        assert_eq!(Grid::parse("a1"), Err(GridError::InvalidLetter('1')));
    }

    #[test]
    fn display_round_trips_through_parse() {
        let grid = Grid::parse("AB(DL)C/D(TW)._").unwrap();
        let text = grid.to_string();
        assert_eq!(text, "AB(DL)C\nD(TW)..");
        assert_eq!(Grid::parse(&text).unwrap(), grid);
    }

    #[test]
    fn out_of_bounds_lookups() {
        let grid = Grid::from_letters(2, 2, "abcd").unwrap();
        let outside = Position::new(2, 0);
        assert_eq!(grid.cell(outside), None);
        assert_eq!(grid.index(outside), None);
        assert!(!grid.is_occupied(outside));
    }
}
