use lifeboard::Board;
use lifeboard::BoardConfig;
use lifeboard::BoardError;
use lifeboard::Topology;
use lifeboard::grid::GridError;
use lifeboard::patterns;
use lifeboard::rule_set;

fn board(width: usize, height: usize, wrap: bool) -> anyhow::Result<Board> {
    Ok(BoardConfig::new(width, height).with_wrap(wrap).board()?)
}

#[test]
fn isolated_cell_dies() -> anyhow::Result<()> {
    let mut board = board(3, 3, true)?;
    board.toggle(1, 1);

    board.advance()?;

    assert_eq!(board.population(), 0);
    assert_eq!(board.generation(), 1);

    Ok(())
}

#[test]
fn blinker_oscillates() -> anyhow::Result<()> {
    let mut board = board(5, 5, false)?;
    for x in 1..=3 {
        board.toggle(x, 2);
    }
    let start = board.to_string();

    board.advance()?;
    insta::assert_snapshot!(board.to_string(), @r"
    .....
    ..#..
    ..#..
    ..#..
    .....
    ");

    board.advance()?;
    assert_eq!(board.to_string(), start);

    Ok(())
}

#[test]
fn toad_oscillates() -> anyhow::Result<()> {
    let mut board = board(6, 6, false)?;
    board.stamp(&patterns::TOAD, 1, 2);
    let start = board.to_string();

    board.advance()?;
    insta::assert_snapshot!(board.to_string(), @r"
    ......
    ...#..
    .#..#.
    .#..#.
    ..#...
    ......
    ");

    board.advance()?;
    assert_eq!(board.to_string(), start);

    Ok(())
}

#[test]
fn glider_circles_torus() -> anyhow::Result<()> {
    let mut board = board(6, 6, true)?;
    board.stamp(&patterns::GLIDER, 0, 0);
    let start: Vec<_> = board.alive_cells().collect();

    board.advance_by(4)?;
    let moved: Vec<_> = board.alive_cells().collect();
    let shifted: Vec<_> = start.iter().map(|&(x, y)| (x + 1, y + 1)).collect();
    assert_eq!(moved, shifted);

    board.advance_by(20)?;
    let back: Vec<_> = board.alive_cells().collect();
    assert_eq!(back, start);
    assert_eq!(board.generation(), 24);

    Ok(())
}

#[test]
fn glider_dies_in_bounded_corner() -> anyhow::Result<()> {
    let mut board = board(6, 6, false)?;
    board.stamp(&patterns::GLIDER, 0, 0);

    board.advance_by(40)?;

    // The glider turns into a block in the corner
    insta::assert_snapshot!(board.to_string(), @r"
    ......
    ......
    ......
    ......
    ....##
    ....##
    ");

    Ok(())
}

#[test]
fn toroidal_counts_across_edges() -> anyhow::Result<()> {
    let mut board = board(7, 4, true)?;
    board.toggle(6, 1);

    for y in 0..=2 {
        assert_eq!(board.neighbors(0, y), 1);
    }
    assert_eq!(board.neighbors(0, 3), 0);

    Ok(())
}

#[test]
fn bounded_corner_counts_in_grid_only() -> anyhow::Result<()> {
    let mut board = board(3, 3, false)?;
    for y in 0..3 {
        for x in 0..3 {
            board.toggle(x, y);
        }
    }

    for (x, y) in [(0, 0), (2, 0), (0, 2), (2, 2)] {
        assert_eq!(board.neighbors(x, y), 3);
    }

    Ok(())
}

#[test]
fn clear_keeps_settings() -> anyhow::Result<()> {
    let mut board = board(8, 5, true)?;
    board.set_rule(rule_set::B36S23);
    board.stamp(&patterns::R_PENTOMINO, 2, 1);
    board.advance_by(3)?;

    board.clear();

    assert_eq!(board.population(), 0);
    assert_eq!((board.width(), board.height()), (8, 5));
    assert_eq!(board.topology(), Topology::Toroidal);
    assert_eq!(board.rule_string(), "B36/S23");

    Ok(())
}

#[test]
fn seeds_rule_never_survives() -> anyhow::Result<()> {
    let mut board = board(8, 8, false)?;
    board.set_rule_str("B2/S")?;
    board.toggle(3, 3);
    board.toggle(4, 3);

    board.advance()?;

    assert!(!board.is_alive(3, 3));
    assert!(!board.is_alive(4, 3));
    insta::assert_snapshot!(board.to_string(), @r"
    ........
    ........
    ...##...
    ........
    ...##...
    ........
    ........
    ........
    ");

    Ok(())
}

#[test]
fn rule_changes_between_generations() -> anyhow::Result<()> {
    let mut board = board(5, 5, false)?;
    board.stamp(&patterns::BLINKER, 1, 2);

    board.set_rule_str("B/S")?;
    board.advance()?;

    assert_eq!(board.population(), 0);
    assert_eq!(board.rule_string(), "B/S");

    Ok(())
}

#[test]
fn invalid_rule_is_rejected() -> anyhow::Result<()> {
    let mut board = board(5, 5, false)?;

    for rule in ["B3/S2a", "B9/S23", "3/23", "B3/", "S23", "b3/s23"] {
        let res = board.set_rule_str(rule);

        assert!(matches!(res, Err(BoardError::Rule(_))), "accepted {rule:?}");
        assert_eq!(board.rule_string(), "B3/S23");
    }

    Ok(())
}

#[test]
fn empty_dimensions_are_rejected() {
    let res = BoardConfig::new(0, 60).board();

    assert_eq!(
        res.err(),
        Some(BoardError::Grid(GridError::EmptyDimension {
            width: 0,
            height: 60
        }))
    );
}

#[test]
fn unobtainable_buffer_is_reported() {
    let res = BoardConfig::new(isize::MAX as usize, 1).board();

    assert_eq!(
        res.err(),
        Some(BoardError::Grid(GridError::Allocation {
            cells: isize::MAX as usize
        }))
    );
}
