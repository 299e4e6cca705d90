use serde::Deserialize;
use thiserror::Error;

/// Errors raised while reading or applying an [ObstacleLayout].
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("layout is not a JSON array of rows: {0}")]
    Json(#[from] serde_json::Error),
    #[error("layout has no cells")]
    Empty,
    #[error("row {row} has {found} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("cell ({row}, {col}) is {value}, expected 0 or 1")]
    InvalidCell { row: usize, col: usize, value: u8 },
    #[error("layout is {found:?} (rows, columns) but the grid is {expected:?}")]
    DimensionMismatch {
        expected: (usize, usize),
        found: (usize, usize),
    },
}

/// Rectangular row-major obstacle flags, `true` marking an obstacle. Read from a JSON matrix of
/// 0/1 values such as `[[0, 1], [0, 0]]`.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(try_from = "Vec<Vec<u8>>")]
pub struct ObstacleLayout {
    cells: Vec<bool>,
    rows: usize,
    columns: usize,
}

impl TryFrom<Vec<Vec<u8>>> for ObstacleLayout {
    type Error = LayoutError;

    fn try_from(matrix: Vec<Vec<u8>>) -> Result<Self, Self::Error> {
        let columns = matrix.first().map_or(0, Vec::len);
        if columns == 0 {
            return Err(LayoutError::Empty);
        }
        let mut cells = Vec::with_capacity(matrix.len() * columns);
        for (row, values) in matrix.iter().enumerate() {
            if values.len() != columns {
                return Err(LayoutError::Ragged {
                    row,
                    expected: columns,
                    found: values.len(),
                });
            }
            for (col, &value) in values.iter().enumerate() {
                match value {
                    0 => cells.push(false),
                    1 => cells.push(true),
                    _ => return Err(LayoutError::InvalidCell { row, col, value }),
                }
            }
        }
        Ok(ObstacleLayout {
            cells,
            rows: matrix.len(),
            columns,
        })
    }
}

impl ObstacleLayout {
    pub fn from_json(json: &str) -> Result<ObstacleLayout, LayoutError> {
        let matrix: Vec<Vec<u8>> = serde_json::from_str(json)?;
        ObstacleLayout::try_from(matrix)
    }
    pub fn rows(&self) -> usize {
        self.rows
    }
    pub fn columns(&self) -> usize {
        self.columns
    }
    pub fn is_obstacle(&self, row: usize, col: usize) -> bool {
        row < self.rows && col < self.columns && self.cells[row * self.columns + col]
    }
    /// (row, col) of every obstacle in row-major order.
    pub fn obstacles(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let columns = self.columns;
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &blocked)| blocked)
            .map(move |(ix, _)| (ix / columns, ix % columns))
    }
}
