use lifeloop_lib::{
    advance, advance_with_rule, initialize, neighbors, rules::Life, seed, Config, ConfigError,
    Controller, Coord, Error, Status, TextFormat, TextPresenter, Tick, World,
};
use rand::{rngs::StdRng, SeedableRng};
use std::{collections::HashSet, error::Error as StdError};

fn set(cells: &[Coord]) -> HashSet<Coord> {
    cells.iter().copied().collect()
}

/// A controller on a `rows` × `cols` grid with the given living cells.
fn controller_with(rows: usize, cols: usize, cells: &[Coord]) -> Controller {
    let config = Config::new(rows as isize, cols as isize, 1).set_seed_count(0);
    let world = World::new(rows, cols, Life::conway(), set(cells));
    Controller::with_world(config, world).unwrap()
}

#[test]
fn default() -> Result<(), Box<dyn StdError>> {
    let config = Config::default();
    assert_eq!((config.rows(), config.cols()), (80, 60));
    let controller = initialize(config)?;
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.population(), 1234);
    assert_eq!(snapshot.generation(), 0);
    assert_eq!(controller.status(), Status::Running);
    Ok(())
}

#[test]
fn seed_in_bounds() -> Result<(), Box<dyn StdError>> {
    let mut rng = StdRng::seed_from_u64(42);
    for &(rows, cols, count) in &[
        (10, 10, 0),
        (10, 10, 37),
        (3, 7, 21),
        (1, 1, 1),
        (50, 2, 99),
    ] {
        let cells = seed(rows, cols, count, &mut rng)?;
        assert_eq!(cells.len(), count);
        assert!(cells.iter().all(|&(r, c)| r < rows && c < cols));
    }
    Ok(())
}

#[test]
fn seed_full_grid() -> Result<(), Box<dyn StdError>> {
    let cells = seed(4, 3, 12, &mut StdRng::seed_from_u64(7))?;
    let all: HashSet<Coord> = (0..4).flat_map(|r| (0..3).map(move |c| (r, c))).collect();
    assert_eq!(cells, all);
    Ok(())
}

#[test]
fn seed_exceeds_capacity() {
    let result = seed(4, 3, 13, &mut StdRng::seed_from_u64(7));
    assert_eq!(
        result,
        Err(Error::SeedExceedsCapacity {
            count: 13,
            capacity: 12
        })
    );
}

#[test]
fn seed_reproducible() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(200, 200, 10)
        .set_seed_count(50)
        .set_rng_seed(2024);
    let a = config.controller()?;
    let b = config.controller()?;
    assert_eq!(a.snapshot().live_cells(), b.snapshot().live_cells());
    Ok(())
}

#[test]
fn neighbors_of_corner() {
    let corner: HashSet<Coord> = neighbors((0, 0), 10, 10).collect();
    assert_eq!(corner, set(&[(0, 1), (1, 0), (1, 1)]));

    let far_corner: HashSet<Coord> = neighbors((9, 4), 10, 5).collect();
    assert_eq!(far_corner, set(&[(8, 3), (8, 4), (9, 3)]));

    assert_eq!(neighbors((0, 0), 1, 1).count(), 0);
}

#[test]
fn neighbors_of_edge_and_inner() {
    let edge: HashSet<Coord> = neighbors((0, 5), 10, 10).collect();
    assert_eq!(edge, set(&[(0, 4), (0, 6), (1, 4), (1, 5), (1, 6)]));

    let inner: HashSet<Coord> = neighbors((5, 5), 10, 10).collect();
    assert_eq!(
        inner,
        set(&[
            (4, 4),
            (4, 5),
            (4, 6),
            (5, 4),
            (5, 6),
            (6, 4),
            (6, 5),
            (6, 6)
        ])
    );
}

#[test]
fn block_is_still_life() {
    let block = set(&[(1, 1), (1, 2), (2, 1), (2, 2)]);
    assert_eq!(advance(&block, 10, 10), block);
}

#[test]
fn block_in_corner_is_still_life() {
    let block = set(&[(0, 0), (0, 1), (1, 0), (1, 1)]);
    assert_eq!(advance(&block, 2, 2), block);
}

#[test]
fn isolated_cells_die() {
    let cells = set(&[(1, 1), (8, 8)]);
    assert!(advance(&cells, 10, 10).is_empty());
}

#[test]
fn empty_stays_empty() {
    assert!(advance(&HashSet::new(), 10, 10).is_empty());
}

#[test]
fn advance_deterministic() -> Result<(), Box<dyn StdError>> {
    let cells = seed(30, 30, 300, &mut StdRng::seed_from_u64(1))?;
    assert_eq!(advance(&cells, 30, 30), advance(&cells, 30, 30));
    Ok(())
}

#[test]
fn blinker() {
    let horizontal = set(&[(4, 5), (5, 5), (6, 5)]);
    let vertical = set(&[(5, 4), (5, 5), (5, 6)]);
    assert_eq!(advance(&horizontal, 10, 10), vertical);
    assert_eq!(advance(&vertical, 10, 10), horizontal);
}

#[test]
fn no_wraparound() {
    // Half a blinker is cut off by the edge. On a torus `(0, 5)` would be born.
    let cells = set(&[(9, 4), (9, 5), (9, 6)]);
    assert_eq!(advance(&cells, 10, 10), set(&[(8, 5), (9, 5)]));
}

#[test]
fn glider() {
    let glider = set(&[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
    let mut cells = glider.clone();
    for _ in 0..4 {
        cells = advance(&cells, 20, 20);
    }
    let moved: HashSet<Coord> = glider.iter().map(|&(r, c)| (r + 1, c + 1)).collect();
    assert_eq!(cells, moved);
}

#[test]
fn glider_stays_in_grid() {
    let mut cells = set(&[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]);
    for _ in 0..100 {
        cells = advance(&cells, 12, 12);
        assert!(cells.iter().all(|&(r, c)| r < 12 && c < 12));
    }
}

#[test]
fn highlife() -> Result<(), Box<dyn StdError>> {
    let rule: Life = "B36/S23".parse()?;
    assert_eq!(rule.to_string(), "B36/S23");

    // A dead cell with 6 living neighbors is born in HighLife, not in Life.
    let cells = set(&[(0, 0), (1, 0), (2, 0), (0, 2), (1, 2), (2, 2)]);
    assert!(advance_with_rule(&cells, 3, 3, &rule).contains(&(1, 1)));
    assert!(!advance(&cells, 3, 3).contains(&(1, 1)));
    Ok(())
}

#[test]
fn rule_with_s0() -> Result<(), Box<dyn StdError>> {
    let rule: Life = "B3/S0".parse()?;
    let cells = set(&[(1, 1), (8, 8)]);
    assert_eq!(advance_with_rule(&cells, 10, 10, &rule), cells);
    Ok(())
}

#[test]
fn conway_rule_string() {
    assert_eq!(Life::conway().to_string(), "B3/S23");
    assert_eq!(Life::default(), Life::conway());
}

#[test]
fn invalid_config() {
    let zero = Config::new(800, 600, 0);
    assert_eq!((zero.rows(), zero.cols()), (0, 0));
    assert_eq!(
        initialize(zero).err(),
        Some(Error::InvalidConfig(ConfigError::NonPositiveCellSize))
    );

    let negative = Config::new(800, 600, -10);
    assert_eq!(
        initialize(negative).err(),
        Some(Error::InvalidConfig(ConfigError::NonPositiveCellSize))
    );

    let narrow = Config::new(5, 600, 10).set_seed_count(0);
    assert_eq!(
        initialize(narrow).err(),
        Some(Error::InvalidConfig(ConfigError::EmptyGrid))
    );
}

#[test]
fn huge_grid() {
    let config = Config::new(isize::MAX, isize::MAX, 1).set_seed_count(0);
    assert_eq!(
        config.controller().err(),
        Some(Error::InvalidConfig(ConfigError::GridTooLarge))
    );

    let config = Config::new(isize::MAX, 2, 1).set_seed_count(0);
    assert_eq!(config.validate(), Ok((isize::MAX as usize, 2, Life::conway())));
}

#[test]
fn with_world_mismatch() {
    let world = World::new(0, 0, Life::conway(), HashSet::new());
    assert_eq!(
        Controller::with_world(Config::default(), world).err(),
        Some(Error::InvalidConfig(ConfigError::WorldMismatch))
    );

    let world = World::new(80, 60, Life::conway(), set(&[(1, 1)]));
    let config = Config::default().set_rule_string("B36/S23");
    assert_eq!(
        Controller::with_world(config, world).err(),
        Some(Error::InvalidConfig(ConfigError::WorldMismatch))
    );

    let world = World::new(80, 60, Life::conway(), set(&[(1, 1)]));
    let config = Config::default().set_rule_string("foo");
    assert!(matches!(
        Controller::with_world(config, world),
        Err(Error::InvalidConfig(ConfigError::ParseRuleError(_)))
    ));
}

#[test]
fn with_world_matching() -> Result<(), Box<dyn StdError>> {
    let world = World::new(80, 60, Life::conway(), set(&[(1, 1)]));
    let controller = Controller::with_world(Config::default(), world)?;
    let snapshot = controller.snapshot();
    assert_eq!((snapshot.rows(), snapshot.cols()), (80, 60));
    let config = controller.config();
    assert_eq!((config.rows(), config.cols()), (80, 60));
    assert_eq!(snapshot.population(), 1);
    Ok(())
}

#[test]
fn invalid_rule() {
    let config = Config::default().set_rule_string("foo");
    assert!(matches!(
        config.controller(),
        Err(Error::InvalidConfig(ConfigError::ParseRuleError(_)))
    ));

    let config = Config::default().set_rule_string("B036/S23");
    assert_eq!(
        config.controller().err(),
        Some(Error::InvalidConfig(ConfigError::B0Rule))
    );
}

#[test]
fn initialize_exceeds_capacity() {
    let config = Config::new(40, 30, 10).set_seed_count(13);
    assert_eq!(
        initialize(config).err(),
        Some(Error::SeedExceedsCapacity {
            count: 13,
            capacity: 12
        })
    );
}

#[test]
fn toggle_twice() -> Result<(), Box<dyn StdError>> {
    let mut controller = Config::new(100, 100, 10).set_seed_count(10).controller()?;
    assert!(!controller.is_paused());
    assert_eq!(controller.toggle(), Status::Paused);
    assert!(controller.is_paused());
    assert_eq!(controller.toggle(), Status::Running);
    assert!(!controller.is_paused());
    Ok(())
}

#[test]
fn step_in_both_states() {
    let mut controller = controller_with(10, 10, &[(4, 5), (5, 5), (6, 5)]);
    assert_eq!(controller.step(), 1);
    controller.toggle();
    assert_eq!(controller.step(), 2);
    assert_eq!(controller.generation(), 2);
    assert_eq!(
        controller.snapshot().live_cells(),
        &set(&[(4, 5), (5, 5), (6, 5)])
    );
}

#[test]
fn tick_only_when_running() {
    let mut controller = controller_with(10, 10, &[(4, 5), (5, 5), (6, 5)]);
    assert_eq!(controller.tick(), Tick::Advanced(1));
    assert_eq!(controller.generation(), 1);

    controller.toggle();
    let before = controller.snapshot().live_cells().clone();
    assert_eq!(controller.tick(), Tick::Paused);
    assert_eq!(controller.tick(), Tick::Paused);
    assert_eq!(controller.generation(), 1);
    assert_eq!(controller.snapshot().live_cells(), &before);

    controller.toggle();
    assert_eq!(controller.tick(), Tick::Advanced(2));
}

#[test]
fn block_keeps_population() {
    let mut controller = controller_with(10, 10, &[(1, 1), (1, 2), (2, 1), (2, 2)]);
    for _ in 0..5 {
        controller.step();
    }
    assert_eq!(controller.population(), 4);
    assert_eq!(controller.generation(), 5);
}

#[test]
fn world_drops_outside_cells() {
    let world = World::new(3, 3, Life::conway(), set(&[(1, 1), (3, 0), (0, 7)]));
    assert_eq!(world.population(), 1);
    assert!(world.snapshot().is_alive((1, 1)));
    assert!(!world.snapshot().is_alive((3, 0)));
}

#[test]
fn display() {
    let controller = controller_with(3, 2, &[(0, 0), (2, 1)]);
    let snapshot = controller.snapshot();
    assert_eq!(snapshot.plaintext(), "o..\n..o\n");
    assert_eq!(
        snapshot.rle(),
        String::from(
            "x = 3, y = 2, rule = B3/S23\n\
             o..$\n\
             ..o!\n"
        )
    );
}

#[test]
fn plaintext_without_columns() {
    let world = World::new(usize::MAX, 0, Life::conway(), HashSet::new());
    assert_eq!(world.snapshot().plaintext(), "");
}

#[test]
fn text_presenter() -> Result<(), Box<dyn StdError>> {
    let mut controller = controller_with(3, 3, &[(0, 1), (1, 1), (2, 1)]);
    let mut presenter = TextPresenter::new(Vec::new(), TextFormat::Plaintext);
    controller.present(&mut presenter)?;
    controller.step();
    controller.present(&mut presenter)?;
    let output = String::from_utf8(presenter.into_inner())?;
    assert_eq!(output, "...\nooo\n...\n.o.\n.o.\n.o.\n");
    Ok(())
}

#[test]
#[cfg(feature = "serde")]
fn config_serde() -> Result<(), Box<dyn StdError>> {
    let config = Config::new(400, 300, 20).set_rng_seed(5);
    let json = serde_json::to_string(&config)?;
    assert_eq!(serde_json::from_str::<Config>(&json)?, config);

    let partial: Config = serde_json::from_str(r#"{ "cell_size": 20 }"#)?;
    assert_eq!((partial.rows(), partial.cols()), (40, 30));
    assert_eq!(partial.rule_string, "B3/S23");
    Ok(())
}
