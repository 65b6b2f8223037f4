use std::error::Error;
use std::fmt;
use std::fs;
use std::path::Path;

/// The four logical corners of a dual tile, in pattern order.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Corner {
    TopLeft = 0,
    TopRight = 1,
    BottomLeft = 2,
    BottomRight = 3,
}

impl Corner {
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Primary-grid offset of the cell this corner samples, relative to the
    /// dual tile's own coordinates.
    #[inline]
    pub fn cell_offset(self) -> (i32, i32) {
        match self {
            Corner::TopLeft => (-1, -1),
            Corner::TopRight => (0, -1),
            Corner::BottomLeft => (-1, 0),
            Corner::BottomRight => (0, 0),
        }
    }
}

/// A cell of the dual lattice: grid coordinates plus the marching-squares
/// corner pattern `[top_left, top_right, bottom_left, bottom_right]`.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct DualTile {
    pub x: i32,
    pub y: i32,
    pub corners: [u8; 4],
}

impl DualTile {
    #[inline]
    pub const fn new(x: i32, y: i32, corners: [u8; 4]) -> Self {
        Self { x, y, corners }
    }

    #[inline]
    pub fn marching_squares(&self) -> [u8; 4] {
        self.corners
    }

    /// Any nonzero value counts as set; patterns are not validated.
    #[inline]
    pub fn is_set(&self, corner: Corner) -> bool {
        self.corners[corner.index()] != 0
    }

    /// True for the all-clear pattern `0000`.
    #[inline]
    pub fn is_clear(&self) -> bool {
        self.corners.iter().all(|&c| c == 0)
    }

    /// Classic 0..16 marching-squares case number (TL=8, TR=4, BR=2, BL=1).
    pub fn case_index(&self) -> u8 {
        let bit = |c: Corner| self.is_set(c) as u8;
        bit(Corner::TopLeft) << 3
            | bit(Corner::TopRight) << 2
            | bit(Corner::BottomRight) << 1
            | bit(Corner::BottomLeft)
    }
}

/// Read-only view of a finished map.
pub trait TileMap {
    fn width(&self) -> i32;
    fn height(&self) -> i32;
    /// Dual tiles in processing order.
    fn dual_tiles(&self) -> &[DualTile];
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum MapParseError {
    Empty,
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    BadChar {
        row: usize,
        col: usize,
        ch: char,
    },
}

impl fmt::Display for MapParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MapParseError::Empty => write!(f, "map has no rows"),
            MapParseError::RaggedRow {
                row,
                expected,
                found,
            } => write!(f, "row {row} has {found} cells, expected {expected}"),
            MapParseError::BadChar { row, col, ch } => {
                write!(f, "unexpected {ch:?} at row {row}, column {col}")
            }
        }
    }
}

impl Error for MapParseError {}

/// Row-major boolean grid with its dual lattice precomputed.
///
/// The dual lattice is `(width + 1) x (height + 1)`; cells outside the grid
/// read as clear, so the outer ring of dual tiles sits on the map boundary.
#[derive(Clone, Debug)]
pub struct OccupancyGrid {
    width: usize,
    height: usize,
    cells: Vec<bool>,
    dual: Vec<DualTile>,
}

impl OccupancyGrid {
    /// Builds a grid from row-major cells. Short input is padded with clear
    /// cells and long input truncated.
    pub fn new(width: usize, height: usize, cells: Vec<bool>) -> Self {
        let mut cells = cells;
        cells.resize(width * height, false);
        let mut grid = Self {
            width,
            height,
            cells,
            dual: Vec::new(),
        };
        grid.dual = grid.compute_dual();
        grid
    }

    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> bool) -> Self {
        let mut cells = Vec::with_capacity(width * height);
        for y in 0..height {
            for x in 0..width {
                cells.push(f(x, y));
            }
        }
        Self::new(width, height, cells)
    }

    /// Parses `#`/`1` as set and `.`/`0`/space as clear. Lines holding only
    /// whitespace are skipped; spaces inside a row are cells, so rows must
    /// keep their trailing spaces to stay rectangular.
    pub fn from_ascii(text: &str) -> Result<Self, MapParseError> {
        let mut width = None;
        let mut cells = Vec::new();
        let mut height = 0;
        for line in text.lines() {
            if line.trim().is_empty() {
                continue;
            }
            let mut found = 0;
            for (col, ch) in line.chars().enumerate() {
                let set = match ch {
                    '#' | '1' => true,
                    '.' | '0' | ' ' => false,
                    _ => {
                        return Err(MapParseError::BadChar {
                            row: height,
                            col,
                            ch,
                        });
                    }
                };
                cells.push(set);
                found += 1;
            }
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(MapParseError::RaggedRow {
                    row: height,
                    expected,
                    found,
                });
            }
            height += 1;
        }
        match width {
            Some(w) => Ok(Self::new(w, height, cells)),
            None => Err(MapParseError::Empty),
        }
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self, Box<dyn Error>> {
        let s = fs::read_to_string(path)?;
        Ok(Self::from_ascii(&s)?)
    }

    /// Cell state; anything outside the grid is clear.
    #[inline]
    pub fn get(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 || x as usize >= self.width || y as usize >= self.height {
            return false;
        }
        self.cells[y as usize * self.width + x as usize]
    }

    /// Fraction of set cells, `0.0` for an empty grid.
    pub fn coverage(&self) -> f32 {
        if self.cells.is_empty() {
            return 0.0;
        }
        self.cells.iter().filter(|&&c| c).count() as f32 / self.cells.len() as f32
    }

    fn compute_dual(&self) -> Vec<DualTile> {
        let mut out = Vec::with_capacity((self.width + 1) * (self.height + 1));
        for y in 0..=self.height as i32 {
            for x in 0..=self.width as i32 {
                let mut corners = [0u8; 4];
                for c in Corner::ALL {
                    let (dx, dy) = c.cell_offset();
                    corners[c.index()] = self.get(x + dx, y + dy) as u8;
                }
                out.push(DualTile::new(x, y, corners));
            }
        }
        out
    }
}

impl TileMap for OccupancyGrid {
    fn width(&self) -> i32 {
        self.width as i32
    }

    fn height(&self) -> i32 {
        self.height as i32
    }

    fn dual_tiles(&self) -> &[DualTile] {
        &self.dual
    }
}
