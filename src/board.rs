use std::fmt;

use thiserror::Error;
use tracing::debug;
use tracing::trace;
use tracing::warn;

use crate::Coord;
use crate::config::BoardConfig;
use crate::grid;
use crate::grid::Grid;
use crate::grid::GridError;
use crate::grid::Topology;
use crate::patterns::Pattern;
use crate::rule_set::RuleError;
use crate::rule_set::RuleSet;

/// Offsets of the Moore neighborhood.
const NEIGHBORHOOD: [(Coord, Coord); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BoardError {
    #[error("Grid error: {0}")]
    Grid(#[from] GridError),

    #[error("Invalid rule: {0}")]
    Rule(#[from] RuleError),
}

/// A Life-like cellular automaton on a finite grid.
///
/// Every mutating method either applies fully or leaves the board as it was.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    rule: RuleSet,

    /// Generations advanced since construction or the last [`Board::clear`].
    generation: u64,
}

impl Board {
    /// Create an all-dead board.
    pub fn new(config: BoardConfig) -> Result<Self, BoardError> {
        let BoardConfig {
            width,
            height,
            topology,
            rule,
        } = config;

        let grid = Grid::new(width, height, topology)?;

        debug!(width, height, ?topology, %rule, "Created board");

        Ok(Self {
            grid,
            rule,
            generation: 0,
        })
    }

    pub fn width(&self) -> usize {
        self.grid.width()
    }

    pub fn height(&self) -> usize {
        self.grid.height()
    }

    pub fn topology(&self) -> Topology {
        self.grid.topology()
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn rule(&self) -> RuleSet {
        self.rule
    }

    /// The rule in its canonical `B<births>/S<survivals>` form.
    pub fn rule_string(&self) -> String {
        self.rule.to_string()
    }

    pub fn set_rule(&mut self, rule: RuleSet) {
        debug!(old = %self.rule, new = %rule, "Changed rule");

        self.rule = rule;
    }

    /// Parse and apply a rule string. On error the current rule is kept.
    pub fn set_rule_str(&mut self, rule: &str) -> Result<(), BoardError> {
        let rule = rule.parse()?;
        self.set_rule(rule);

        Ok(())
    }

    pub fn is_alive(&self, x: Coord, y: Coord) -> bool {
        self.grid.get(x, y)
    }

    /// Flip a cell and return its new state.
    ///
    /// Cells past the edges of a bounded board stay dead; toggling them does nothing and returns
    /// `false`.
    pub fn toggle(&mut self, x: Coord, y: Coord) -> bool {
        let Some(cell) = self.grid.cell_mut(x, y) else {
            trace!(x, y, "Ignored toggle outside of the board");
            return false;
        };

        *cell = !*cell;
        *cell
    }

    /// Set a cell and return its new state, with the same edge policy as [`Board::toggle`].
    pub fn set_cell(&mut self, x: Coord, y: Coord, alive: bool) -> bool {
        let Some(cell) = self.grid.cell_mut(x, y) else {
            return false;
        };

        *cell = alive;
        *cell
    }

    /// Bring `pattern` to life with its top left corner at `(x, y)`. Returns how many of its cells
    /// landed on the board. Cells whose coordinates overflow a [`Coord`] are skipped.
    pub fn stamp(&mut self, pattern: &Pattern, x: Coord, y: Coord) -> usize {
        pattern
            .cells
            .iter()
            .filter_map(|&(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
            .filter(|&(x, y)| self.set_cell(x, y, true))
            .count()
    }

    /// Number of alive cells in the Moore neighborhood of `(x, y)`.
    pub fn neighbors(&self, x: Coord, y: Coord) -> u8 {
        NEIGHBORHOOD
            .iter()
            .filter_map(|&(dx, dy)| Some((x.checked_add(dx)?, y.checked_add(dy)?)))
            .filter(|&(x, y)| self.grid.get(x, y))
            .count() as u8
    }

    pub fn population(&self) -> usize {
        self.grid.cells().iter().filter(|&&c| c).count()
    }

    /// Coordinates of every alive cell, row by row.
    pub fn alive_cells(&self) -> impl Iterator<Item = (Coord, Coord)> + '_ {
        self.grid
            .cells()
            .iter()
            .enumerate()
            .filter(|&(_, &c)| c)
            .map(|(i, _)| self.grid.xy_to(i))
    }

    /// Kill every cell. Dimensions, topology and rule are kept.
    pub fn clear(&mut self) {
        self.grid.clear();
        self.generation = 0;

        debug!("Cleared board");
    }

    /// Compute the next generation.
    ///
    /// On failure the board stays at the current generation.
    pub fn advance(&mut self) -> Result<(), BoardError> {
        self.advance_with(grid::alloc_cells)
    }

    /// Advance `n` generations, stopping at the first failure.
    pub fn advance_by(&mut self, n: u64) -> Result<(), BoardError> {
        for _ in 0..n {
            self.advance()?;
        }

        Ok(())
    }

    /// Like [`Board::advance`], with the scratch buffer obtained from `alloc`.
    ///
    /// The next generation is written to the scratch buffer while the current one is only read,
    /// then swapped in whole.
    fn advance_with<A>(&mut self, alloc: A) -> Result<(), BoardError>
    where
        A: FnOnce(usize) -> Result<Vec<bool>, GridError>,
    {
        let mut next = alloc(self.grid.len()).inspect_err(|e| {
            warn!(generation = self.generation, "Failed to advance board: {e}");
        })?;

        for (i, (cell, &alive)) in next.iter_mut().zip(self.grid.cells()).enumerate() {
            let (x, y) = self.grid.xy_to(i);

            *cell = self.rule.next_state(alive, self.neighbors(x, y));
        }

        self.grid.commit(next);
        self.generation += 1;

        trace!(
            generation = self.generation,
            population = self.population(),
            "Advanced board"
        );

        Ok(())
    }
}

impl fmt::Display for Board {
    /// One line per row, top row first. `#` is alive, `.` is dead.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.grid.cells().chunks(self.width()) {
            for &c in row {
                f.write_str(if c { "#" } else { "." })?;
            }

            f.write_str("\n")?;
        }

        Ok(())
    }
}
