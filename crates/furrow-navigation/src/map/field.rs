//! Field grid model for path planning.
//!
//! A field is a rectangular grid of labelled cells. The label decides whether
//! the drone may enter a cell: `stone` and `truck` block, every other label
//! costs one step to enter.

#![warn(missing_docs)]

use std::fmt;

use super::Position;
use crate::error::NavigationError;

/// Entry cost reported for blocked and out-of-range cells.
pub const IMPASSABLE: usize = usize::MAX;

/// Entry cost of every passable cell.
pub const STEP_COST: usize = 1;

/// Classification of a single field cell.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "String", into = "String")
)]
pub enum CellKind {
    /// Untouched ground.
    BarrenLand,
    /// Grass cover.
    Grass,
    /// Rock. Blocks movement.
    Stone,
    /// Parked vehicle. Blocks movement.
    Truck,
    /// Cell not yet revealed by exploration.
    Card,
    /// Ploughed ground, ready for seeding.
    PloughLand,
    /// Seeds that have just germinated.
    Germinated,
    /// Young crop.
    Young,
    /// Crop ready for harvest.
    Final,
    /// Harvested ground.
    Harvested,
    /// Any label this crate does not know about. Passable.
    Other(String),
}

impl CellKind {
    /// The label used on the wire and in scenario files.
    pub fn label(&self) -> &str {
        match self {
            CellKind::BarrenLand => "barren_land",
            CellKind::Grass => "grass",
            CellKind::Stone => "stone",
            CellKind::Truck => "truck",
            CellKind::Card => "card",
            CellKind::PloughLand => "plough_land",
            CellKind::Germinated => "germinated",
            CellKind::Young => "young",
            CellKind::Final => "final",
            CellKind::Harvested => "harvested",
            CellKind::Other(label) => label,
        }
    }

    /// Whether this cell can never be entered.
    pub fn is_blocking(&self) -> bool {
        matches!(self, CellKind::Stone | CellKind::Truck)
    }

    /// Cost of entering a cell of this kind.
    pub fn entry_cost(&self) -> usize {
        if self.is_blocking() {
            IMPASSABLE
        } else {
            STEP_COST
        }
    }

    fn glyph(&self) -> char {
        match self {
            CellKind::BarrenLand => '.',
            CellKind::Grass => '"',
            CellKind::Stone => '#',
            CellKind::Truck => 'T',
            CellKind::Card => '?',
            CellKind::PloughLand => '=',
            CellKind::Germinated => ',',
            CellKind::Young => 'y',
            CellKind::Final => 'F',
            CellKind::Harvested => '_',
            CellKind::Other(_) => 'o',
        }
    }
}

impl From<&str> for CellKind {
    fn from(label: &str) -> Self {
        match label {
            "barren_land" => CellKind::BarrenLand,
            "grass" => CellKind::Grass,
            "stone" => CellKind::Stone,
            "truck" => CellKind::Truck,
            "card" => CellKind::Card,
            "plough_land" => CellKind::PloughLand,
            "germinated" => CellKind::Germinated,
            "young" => CellKind::Young,
            "final" => CellKind::Final,
            "harvested" => CellKind::Harvested,
            other => CellKind::Other(other.to_owned()),
        }
    }
}

impl From<String> for CellKind {
    fn from(label: String) -> Self {
        CellKind::from(label.as_str())
    }
}

impl From<CellKind> for String {
    fn from(kind: CellKind) -> Self {
        kind.label().to_owned()
    }
}

impl fmt::Display for CellKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A read-only rectangular field addressed as `grid[y][x]`.
///
/// Planners never mutate the grid; a caller building one up uses
/// [`FieldGrid::set_cell`] before handing out shared references.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<CellKind>>", into = "Vec<Vec<CellKind>>")
)]
pub struct FieldGrid {
    /// Number of columns.
    width: usize,
    /// Number of rows.
    height: usize,
    /// Row-major cell storage.
    cells: Vec<CellKind>,
}

impl FieldGrid {
    /// Creates a `width` x `height` grid with every cell set to `fill`.
    pub fn new(width: usize, height: usize, fill: CellKind) -> Self {
        let (width, height) = if width == 0 || height == 0 {
            (0, 0)
        } else {
            (width, height)
        };
        Self {
            width,
            height,
            cells: vec![fill; width * height],
        }
    }

    /// Builds a grid from rows, rejecting rows whose length differs from row 0.
    pub fn from_rows<R, C>(rows: R) -> Result<Self, NavigationError>
    where
        R: IntoIterator,
        R::Item: IntoIterator<Item = C>,
        C: Into<CellKind>,
    {
        let mut width = None;
        let mut height = 0;
        let mut cells = Vec::new();

        for (row_idx, row) in rows.into_iter().enumerate() {
            let before = cells.len();
            cells.extend(row.into_iter().map(Into::into));
            let found = cells.len() - before;
            let expected = *width.get_or_insert(found);
            if found != expected {
                return Err(NavigationError::MalformedGrid {
                    row: row_idx,
                    expected,
                    found,
                });
            }
            height += 1;
        }

        let width = width.unwrap_or(0);
        if width == 0 {
            return Ok(Self::new(0, 0, CellKind::BarrenLand));
        }

        Ok(Self {
            width,
            height,
            cells,
        })
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Total number of cells.
    pub fn total_cells(&self) -> usize {
        self.cells.len()
    }

    /// True for a grid with no cells.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `p` lies within `[0, width) x [0, height)`.
    pub fn in_bounds(&self, p: Position) -> bool {
        p.x >= 0 && p.y >= 0 && (p.x as usize) < self.width && (p.y as usize) < self.height
    }

    fn index(&self, p: Position) -> Option<usize> {
        self.in_bounds(p)
            .then(|| p.y as usize * self.width + p.x as usize)
    }

    /// Cell at `p`, or `None` when out of bounds.
    pub fn cell(&self, p: Position) -> Option<&CellKind> {
        self.index(p).map(|i| &self.cells[i])
    }

    /// Replaces the cell at `p`.
    pub fn set_cell(&mut self, p: Position, kind: CellKind) -> Result<(), NavigationError> {
        let i = self.index(p).ok_or(NavigationError::OutOfBounds(p))?;
        self.cells[i] = kind;
        Ok(())
    }

    /// Cost of entering `p`: [`STEP_COST`] for passable cells, [`IMPASSABLE`]
    /// for blocked or out-of-range ones.
    pub fn entry_cost(&self, p: Position) -> usize {
        self.cell(p).map_or(IMPASSABLE, CellKind::entry_cost)
    }

    /// Whether `p` is on the grid and may be entered.
    pub fn is_passable(&self, p: Position) -> bool {
        self.entry_cost(p) != IMPASSABLE
    }

    /// All positions holding `kind`, in row-major order.
    pub fn positions_of(&self, kind: &CellKind) -> Vec<Position> {
        self.positions()
            .filter(|&p| self.cell(p) == Some(kind))
            .collect()
    }

    /// Every grid position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.height).flat_map(move |y| {
            (0..self.width).map(move |x| Position::new(x as i32, y as i32))
        })
    }

    /// The grid as rows of cells.
    pub fn rows(&self) -> Vec<Vec<CellKind>> {
        if self.width == 0 {
            return Vec::new();
        }
        self.cells.chunks(self.width).map(<[CellKind]>::to_vec).collect()
    }
}

impl TryFrom<Vec<Vec<CellKind>>> for FieldGrid {
    type Error = NavigationError;

    fn try_from(rows: Vec<Vec<CellKind>>) -> Result<Self, Self::Error> {
        FieldGrid::from_rows(rows)
    }
}

impl From<FieldGrid> for Vec<Vec<CellKind>> {
    fn from(grid: FieldGrid) -> Self {
        grid.rows()
    }
}

impl fmt::Display for FieldGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "FieldGrid ({}x{})", self.width, self.height)?;
        for row in self.cells.chunks(self.width.max(1)) {
            for cell in row {
                write!(f, "{} ", cell.glyph())?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
