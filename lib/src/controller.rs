//! Pausing, resuming and stepping the simulation.

use crate::{
    config::Config,
    error::{ConfigError, Error},
    present::{Presenter, Snapshot},
    seed::seed,
    world::World,
};
use educe::Educe;
use log::{debug, info, trace};
use rand::{rngs::StdRng, thread_rng, Rng, SeedableRng};
use std::io;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Whether the simulation is running.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Status {
    /// Each tick computes a new generation.
    #[educe(Default)]
    Running,
    /// Ticks do nothing. Steps still work.
    Paused,
}

/// The result of a [`Controller::tick`].
///
/// Whatever the result is, the caller should schedule the next tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tick {
    /// A new generation was computed. Contains its number.
    Advanced(u64),
    /// The simulation is paused. Nothing changed.
    Paused,
}

/// Owns the world and decides when it evolves.
///
/// The controller knows nothing about time. Whoever presents the world is
/// expected to call [`tick`](Self::tick) every
/// [`step_interval_ms`](Config#structfield.step_interval_ms) milliseconds,
/// and [`step`](Self::step) when the user asks for a single step.
#[derive(Clone, Debug)]
pub struct Controller {
    /// Configuration.
    config: Config,

    /// The world.
    world: World,

    /// Running or paused.
    status: Status,
}

impl Controller {
    /// Creates a new controller, choosing the first generation with a
    /// random number generator.
    ///
    /// If the configuration has an [`rng_seed`](Config#structfield.rng_seed),
    /// the generator is seeded with it. Otherwise the thread-local generator
    /// is used.
    pub fn new(config: Config) -> Result<Self, Error> {
        let rng_seed = config.rng_seed;
        match rng_seed {
            Some(rng_seed) => Self::with_rng(config, &mut StdRng::seed_from_u64(rng_seed)),
            None => Self::with_rng(config, &mut thread_rng()),
        }
    }

    /// Creates a new controller, choosing the first generation with the
    /// given random number generator.
    pub fn with_rng<R: Rng + ?Sized>(config: Config, rng: &mut R) -> Result<Self, Error> {
        let (rows, cols, rule) = config.validate()?;
        let cells = seed(rows, cols, config.seed_count, rng)?;
        info!(
            "Initialized a {}x{} grid with {} living cells, rule {}.",
            rows,
            cols,
            cells.len(),
            rule
        );
        Ok(Controller {
            world: World::new(rows, cols, rule, cells),
            config,
            status: Status::Running,
        })
    }

    /// Creates a new controller with a given world.
    ///
    /// The world is used as is; the seed count of the configuration is ignored.
    /// The world must have the grid size and the rule of the configuration.
    pub fn with_world(config: Config, world: World) -> Result<Self, Error> {
        let (rows, cols, rule) = config.validate()?;
        if (rows, cols, &rule) != (world.rows(), world.cols(), world.rule()) {
            return Err(ConfigError::WorldMismatch.into());
        }
        Ok(Controller {
            config,
            world,
            status: Status::Running,
        })
    }

    /// Configuration.
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Running or paused.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Whether the simulation is paused.
    pub fn is_paused(&self) -> bool {
        self.status == Status::Paused
    }

    /// The current generation.
    pub fn generation(&self) -> u64 {
        self.world.generation()
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.world.population()
    }

    /// Pauses a running simulation, or resumes a paused one.
    ///
    /// Returns the new status.
    pub fn toggle(&mut self) -> Status {
        self.status = match self.status {
            Status::Running => Status::Paused,
            Status::Paused => Status::Running,
        };
        debug!("Simulation {:?}.", self.status);
        self.status
    }

    /// Computes the next generation, whether paused or not.
    ///
    /// Returns the number of the new generation, which is now ready to be
    /// presented.
    pub fn step(&mut self) -> u64 {
        self.world.evolve();
        debug!(
            "Generation {}: {} living cells.",
            self.world.generation(),
            self.world.population()
        );
        self.world.generation()
    }

    /// Called periodically by whatever drives the simulation.
    ///
    /// Steps if running, does nothing if paused.
    pub fn tick(&mut self) -> Tick {
        match self.status {
            Status::Running => Tick::Advanced(self.step()),
            Status::Paused => {
                trace!("Tick skipped at generation {}.", self.world.generation());
                Tick::Paused
            }
        }
    }

    /// A read-only view of the current generation.
    pub fn snapshot(&self) -> Snapshot<'_> {
        self.world.snapshot()
    }

    /// Hands the current generation to a presenter.
    pub fn present<P: Presenter + ?Sized>(&self, presenter: &mut P) -> io::Result<()> {
        presenter.present(self.snapshot(), self.status)
    }
}

/// Creates a new controller from the configuration.
///
/// The same as [`Config::controller`].
pub fn initialize(config: Config) -> Result<Controller, Error> {
    Controller::new(config)
}
