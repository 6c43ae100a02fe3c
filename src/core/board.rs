//! Board module - manages the 4x4 grid
//!
//! Uses a flat array for the 16 cells, index = row * 4 + col.
//! Placements use overwrite semantics: throwing onto an occupied cell always
//! succeeds and landing on an opponent's ring counts as a steal.

use arrayvec::ArrayVec;

use crate::types::{Cell, Player, GRID_SIZE, TOTAL_CELLS};

/// The 10 scoring lines: 4 rows, 4 columns, 2 diagonals
pub const WIN_LINES: [[usize; 4]; 10] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [8, 9, 10, 11],
    [12, 13, 14, 15],
    [0, 4, 8, 12],
    [1, 5, 9, 13],
    [2, 6, 10, 14],
    [3, 7, 11, 15],
    [0, 5, 10, 15],
    [3, 6, 9, 12],
];

/// Result of a scoring pass
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LineScore {
    /// One point per line owned entirely by the scoring player
    pub points: u32,
    /// Union of the indices of every scoring line, ascending
    pub cleared: ArrayVec<usize, TOTAL_CELLS>,
}

/// The game board - 16 cells in row-major order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    cells: [Cell; TOTAL_CELLS],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; TOTAL_CELLS],
        }
    }

    /// Calculate flat index from (row, col) coordinates
    #[inline(always)]
    pub fn index(row: usize, col: usize) -> Option<usize> {
        if row >= GRID_SIZE || col >= GRID_SIZE {
            return None;
        }
        Some(row * GRID_SIZE + col)
    }

    /// Get cell at a flat index.
    ///
    /// An out-of-range index is a programming error, not a runtime condition.
    pub fn get(&self, idx: usize) -> Cell {
        assert!(idx < TOTAL_CELLS, "cell index out of range: {idx}");
        self.cells[idx]
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell; TOTAL_CELLS] {
        &self.cells
    }

    /// Check whether every cell is empty
    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|cell| cell.is_none())
    }

    /// Place the player's ring(s) on the given cells.
    ///
    /// Overwrite semantics: a placement never fails for occupancy. Returns
    /// true if any target cell was owned by the opponent (a steal).
    pub fn apply_placement(&mut self, player: Player, cells: &[usize]) -> bool {
        let mut stole = false;
        for &idx in cells {
            assert!(idx < TOTAL_CELLS, "cell index out of range: {idx}");
            if self.cells[idx] == Some(player.other()) {
                stole = true;
            }
            self.cells[idx] = Some(player);
        }
        stole
    }

    /// Tally and clear every line owned entirely by `player`.
    ///
    /// All lines are evaluated against the pre-clear board, so overlapping
    /// lines each score independently; the union of their indices is cleared
    /// afterwards in one pass. Running the pass again on the cleared board
    /// yields zero points.
    pub fn score_lines(&mut self, player: Player) -> LineScore {
        let mut points = 0;
        let mut marked = [false; TOTAL_CELLS];

        for line in &WIN_LINES {
            if line.iter().all(|&idx| self.cells[idx] == Some(player)) {
                points += 1;
                for &idx in line {
                    marked[idx] = true;
                }
            }
        }

        let mut cleared = ArrayVec::new();
        if points > 0 {
            for (idx, hit) in marked.iter().enumerate() {
                if *hit {
                    self.cells[idx] = None;
                    cleared.push(idx);
                }
            }
        }

        LineScore { points, cleared }
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells = [None; TOTAL_CELLS];
    }

    /// Set a single cell for test setup
    #[cfg(test)]
    pub fn set(&mut self, idx: usize, cell: Cell) {
        assert!(idx < TOTAL_CELLS, "cell index out of range: {idx}");
        self.cells[idx] = cell;
    }

    /// Create from a flat array for testing
    #[cfg(test)]
    pub fn from_cells(cells: [Cell; TOTAL_CELLS]) -> Self {
        Self { cells }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
