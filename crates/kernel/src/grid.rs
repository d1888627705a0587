use glam::Vec2;

/// Errors from grid construction.
#[derive(Debug, thiserror::Error)]
pub enum GridError {
    #[error("grid has no rows or no columns")]
    Empty,
    #[error("row {row} has {got} cells, expected {expected}")]
    Ragged {
        row: usize,
        expected: usize,
        got: usize,
    },
}

/// Immutable 2D occupancy matrix. Zero is open space, any nonzero value is
/// solid.
///
/// Constructed once at level load and read-only for the lifetime of a
/// session. Coordinates are `(x, y)` with x running along a row and y
/// selecting the row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridMap {
    width: usize,
    height: usize,
    cells: Box<[u8]>,
}

impl GridMap {
    /// Build a grid from row-major occupancy rows.
    ///
    /// Rows must be non-empty and all the same length.
    pub fn from_rows(rows: Vec<Vec<u8>>) -> Result<Self, GridError> {
        let height = rows.len();
        let width = rows.first().map(Vec::len).unwrap_or(0);
        if height == 0 || width == 0 {
            return Err(GridError::Empty);
        }
        let mut cells = Vec::with_capacity(width * height);
        for (row, r) in rows.iter().enumerate() {
            if r.len() != width {
                return Err(GridError::Ragged {
                    row,
                    expected: width,
                    got: r.len(),
                });
            }
            cells.extend_from_slice(r);
        }
        Ok(Self {
            width,
            height,
            cells: cells.into_boxed_slice(),
        })
    }

    /// A solid perimeter around an open interior.
    pub fn bordered_box(width: usize, height: usize) -> Result<Self, GridError> {
        if width < 2 || height < 2 {
            return Err(GridError::Empty);
        }
        let mut cells = vec![0u8; width * height];
        for x in 0..width {
            cells[x] = 1;
            cells[(height - 1) * width + x] = 1;
        }
        for y in 0..height {
            cells[y * width] = 1;
            cells[y * width + width - 1] = 1;
        }
        Ok(Self {
            width,
            height,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Built-in demo level: a bordered room with scattered pillars.
    pub fn demo() -> Self {
        #[rustfmt::skip]
        let rows: [[u8; 12]; 10] = [
            [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 1, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 1],
            [1, 0, 0, 0, 1, 0, 0, 0, 1, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 1, 1, 1, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1],
            [1, 0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 1],
            [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 0, 1],
            [1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1, 1],
        ];
        Self {
            width: 12,
            height: 10,
            cells: rows.into_iter().flatten().collect(),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Occupancy of the cell at integer coordinates.
    ///
    /// Coordinates outside the grid report solid, so callers can never
    /// index an undefined cell; the boundary behaves like a wall.
    pub fn is_solid(&self, x: i32, y: i32) -> bool {
        if x < 0 || y < 0 {
            return true;
        }
        let (x, y) = (x as usize, y as usize);
        if x >= self.width || y >= self.height {
            return true;
        }
        self.cells[y * self.width + x] != 0
    }

    /// Occupancy of the cell containing a continuous point.
    pub fn solid_at(&self, point: Vec2) -> bool {
        self.is_solid(point.x.floor() as i32, point.y.floor() as i32)
    }

    /// True if the point lies inside the grid extent.
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= 0.0
            && point.y >= 0.0
            && point.x < self.width as f32
            && point.y < self.height as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_rows_rejects_empty() {
        assert!(matches!(GridMap::from_rows(vec![]), Err(GridError::Empty)));
        assert!(matches!(
            GridMap::from_rows(vec![vec![]]),
            Err(GridError::Empty)
        ));
    }

    #[test]
    fn from_rows_rejects_ragged() {
        let err = GridMap::from_rows(vec![vec![0, 0, 0], vec![0, 0]]).unwrap_err();
        assert!(matches!(
            err,
            GridError::Ragged {
                row: 1,
                expected: 3,
                got: 2
            }
        ));
    }

    #[test]
    fn occupancy_lookup() {
        let grid = GridMap::from_rows(vec![vec![1, 0], vec![0, 1]]).unwrap();
        assert!(grid.is_solid(0, 0));
        assert!(!grid.is_solid(1, 0));
        assert!(!grid.is_solid(0, 1));
        assert!(grid.is_solid(1, 1));
    }

    #[test]
    fn out_of_range_reads_solid() {
        let grid = GridMap::bordered_box(4, 4).unwrap();
        assert!(grid.is_solid(-1, 0));
        assert!(grid.is_solid(0, -1));
        assert!(grid.is_solid(4, 0));
        assert!(grid.is_solid(0, 4));
        assert!(grid.is_solid(i32::MIN, i32::MAX));
    }

    #[test]
    fn solid_at_floors_to_cell() {
        let grid = GridMap::bordered_box(4, 4).unwrap();
        assert!(grid.solid_at(Vec2::new(0.9, 0.9)));
        assert!(!grid.solid_at(Vec2::new(1.5, 1.5)));
        assert!(grid.solid_at(Vec2::new(3.1, 1.5)));
    }

    #[test]
    fn bordered_box_has_open_interior() {
        let grid = GridMap::bordered_box(10, 10).unwrap();
        for y in 1..9 {
            for x in 1..9 {
                assert!(!grid.is_solid(x, y), "cell ({x}, {y}) should be open");
            }
        }
        for i in 0..10 {
            assert!(grid.is_solid(i, 0));
            assert!(grid.is_solid(i, 9));
            assert!(grid.is_solid(0, i));
            assert!(grid.is_solid(9, i));
        }
    }

    #[test]
    fn demo_level_is_bordered() {
        let grid = GridMap::demo();
        assert_eq!(grid.width(), 12);
        assert_eq!(grid.height(), 10);
        for x in 0..12 {
            assert!(grid.is_solid(x, 0));
            assert!(grid.is_solid(x, 9));
        }
        assert!(!grid.solid_at(Vec2::new(2.0, 2.0)));
    }
}
