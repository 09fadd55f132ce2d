pub mod board;
pub mod camera;
pub mod config;
pub mod grid;
pub mod patterns;
pub mod rule_set;

mod parse_util;

pub use board::Board;
pub use board::BoardError;
pub use config::BoardConfig;
pub use grid::Topology;
pub use rule_set::RuleSet;

/// Cell coordinate. Signed so that neighbors of edge cells can be addressed.
pub type Coord = isize;
