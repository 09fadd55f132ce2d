use crate::board::Board;
use crate::board::BoardError;
use crate::grid::Topology;
use crate::rule_set::RuleSet;

/// Number of cells in a row when none is given.
pub const DEFAULT_WIDTH: usize = 80;

/// Number of cells in a column when none is given.
pub const DEFAULT_HEIGHT: usize = 60;

/// Everything needed to build a [`Board`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardConfig {
    pub width: usize,
    pub height: usize,
    pub topology: Topology,
    pub rule: RuleSet,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            topology: Topology::default(),
            rule: RuleSet::default(),
        }
    }
}

impl BoardConfig {
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    /// Shorthand for [`BoardConfig::with_topology`].
    pub fn with_wrap(self, wrap: bool) -> Self {
        self.with_topology(Topology::from_wrap(wrap))
    }

    pub fn with_rule(mut self, rule: RuleSet) -> Self {
        self.rule = rule;
        self
    }

    /// Build an all-dead board from this configuration.
    pub fn board(self) -> Result<Board, BoardError> {
        Board::new(self)
    }
}
