use crate::Coord;

/// A small seed pattern, as `(x, y)` offsets of its alive cells from its top left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pattern {
    pub name: &'static str,
    pub cells: &'static [(Coord, Coord)],
}

impl Pattern {
    /// Width of the bounding box.
    pub fn width(&self) -> usize {
        self.cells.iter().map(|&(x, _)| x + 1).max().unwrap_or(0) as usize
    }

    /// Height of the bounding box.
    pub fn height(&self) -> usize {
        self.cells.iter().map(|&(_, y)| y + 1).max().unwrap_or(0) as usize
    }
}

/// No cells at all, for starting from an empty board.
pub const NONE: Pattern = Pattern {
    name: "none",
    cells: &[],
};

pub const BLINKER: Pattern = Pattern {
    name: "blinker",
    cells: &[(0, 0), (1, 0), (2, 0)],
};

pub const TOAD: Pattern = Pattern {
    name: "toad",
    cells: &[(1, 0), (2, 0), (3, 0), (0, 1), (1, 1), (2, 1)],
};

pub const BEACON: Pattern = Pattern {
    name: "beacon",
    cells: &[(0, 0), (1, 0), (0, 1), (1, 1), (2, 2), (3, 2), (2, 3), (3, 3)],
};

/// Travels one cell down and to the right every 4 generations.
pub const GLIDER: Pattern = Pattern {
    name: "glider",
    cells: &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)],
};

/// Lightweight spaceship, travelling left.
#[rustfmt::skip]
pub const LWSS: Pattern = Pattern {
    name: "lwss",
    cells: &[
        (1, 0), (4, 0),
        (0, 1),
        (0, 2), (4, 2),
        (0, 3), (1, 3), (2, 3), (3, 3),
    ],
};

pub const R_PENTOMINO: Pattern = Pattern {
    name: "r-pentomino",
    cells: &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)],
};

pub const PATTERNS: &[Pattern] = &[NONE, BLINKER, TOAD, BEACON, GLIDER, LWSS, R_PENTOMINO];

/// Look up a pattern by name, ignoring case.
pub fn find(name: &str) -> Option<Pattern> {
    PATTERNS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
        .copied()
}
