//! __Lifeloop__ is a bounded [Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! simulation engine.
//!
//! The living cells of a finite grid are kept in a set. A [`Controller`]
//! owns the grid and advances it one generation per [`tick`](Controller::tick)
//! or [`step`](Controller::step). Drawing the grid and calling `tick` on a
//! timer are left to a presentation layer, which reads the grid through
//! [`Snapshot`]s.
//!
//! # Example
//!
//! ```rust
//! use lifeloop_lib::{Config, Tick};
//!
//! let config = Config::new(100, 100, 10).set_seed_count(20);
//! let mut controller = config.controller().unwrap();
//! assert_eq!(controller.snapshot().population(), 20);
//!
//! assert_eq!(controller.tick(), Tick::Advanced(1));
//! controller.toggle();
//! assert_eq!(controller.tick(), Tick::Paused);
//! assert_eq!(controller.step(), 2);
//! ```

mod cells;
mod config;
mod controller;
mod error;
mod evolve;
mod present;
pub mod rules;
mod seed;
mod world;

pub use cells::{neighbors, Coord};
pub use config::Config;
pub use controller::{initialize, Controller, Status, Tick};
pub use error::{ConfigError, Error};
pub use evolve::{advance, advance_with_rule};
pub use present::{Presenter, Snapshot, TextFormat, TextPresenter};
pub use seed::seed;
pub use world::World;
