//! Simulation configuration.

use crate::{
    controller::Controller,
    error::{ConfigError, Error},
    rules::Life,
};
use educe::Educe;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Simulation configuration.
///
/// The grid is measured in pixels of the presentation surface. The number of
/// rows and columns are derived from the pixel extents and the cell size:
/// the rows run along the width, the columns along the height.
///
/// The default values describe an 800×600 surface with 10 pixel cells,
/// i.e. an 80×60 grid.
#[derive(Clone, Debug, Educe, PartialEq, Eq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Width of the surface, in pixels.
    #[educe(Default = 800)]
    pub width: isize,

    /// Height of the surface, in pixels.
    #[educe(Default = 600)]
    pub height: isize,

    /// Length of the edge of a cell, in pixels.
    #[educe(Default = 10)]
    pub cell_size: isize,

    /// Number of living cells in the first generation.
    #[educe(Default = 1234)]
    pub seed_count: usize,

    /// Interval between two steps, in milliseconds.
    ///
    /// The controller never looks at this value.
    /// It is a hint for whatever drives [`Controller::tick`].
    #[educe(Default = 150)]
    pub step_interval_ms: u64,

    /// The rule string of the cellular automaton.
    ///
    /// Only Life-like rules without `B0` are supported.
    #[educe(Default = "B3/S23")]
    pub rule_string: String,

    /// Seed of the random number generator used to choose the first generation.
    ///
    /// `None` means that the first generation is different on every run.
    pub rng_seed: Option<u64>,
}

impl Config {
    /// Sets up a new configuration with given surface size and cell size.
    pub fn new(width: isize, height: isize, cell_size: isize) -> Self {
        Config {
            width,
            height,
            cell_size,
            ..Config::default()
        }
    }

    /// Sets the number of living cells in the first generation.
    pub fn set_seed_count(mut self, seed_count: usize) -> Self {
        self.seed_count = seed_count;
        self
    }

    /// Sets the interval between two steps.
    pub fn set_step_interval_ms(mut self, step_interval_ms: u64) -> Self {
        self.step_interval_ms = step_interval_ms;
        self
    }

    /// Sets the rule string.
    pub fn set_rule_string<S: ToString>(mut self, rule_string: S) -> Self {
        self.rule_string = rule_string.to_string();
        self
    }

    /// Sets the seed of the random number generator.
    pub fn set_rng_seed<T: Into<Option<u64>>>(mut self, rng_seed: T) -> Self {
        self.rng_seed = rng_seed.into();
        self
    }

    /// Number of rows, i.e., `width / cell_size`.
    ///
    /// Returns `0` when the cell size is not positive.
    pub fn rows(&self) -> isize {
        if self.cell_size > 0 {
            self.width / self.cell_size
        } else {
            0
        }
    }

    /// Number of columns, i.e., `height / cell_size`.
    ///
    /// Returns `0` when the cell size is not positive.
    pub fn cols(&self) -> isize {
        if self.cell_size > 0 {
            self.height / self.cell_size
        } else {
            0
        }
    }

    /// Checks the configuration.
    ///
    /// Returns the number of rows and columns and the parsed rule.
    pub fn validate(&self) -> Result<(usize, usize, Life), ConfigError> {
        if self.cell_size <= 0 {
            return Err(ConfigError::NonPositiveCellSize);
        }
        let (rows, cols) = (self.rows(), self.cols());
        if rows <= 0 || cols <= 0 {
            return Err(ConfigError::EmptyGrid);
        }
        let (rows, cols) = (rows as usize, cols as usize);
        if rows.checked_mul(cols).is_none() {
            return Err(ConfigError::GridTooLarge);
        }
        let rule = self.rule_string.parse::<Life>()?;
        Ok((rows, cols, rule))
    }

    /// Creates a new controller from the configuration.
    ///
    /// Returns an error if the configuration is invalid, or if the grid is
    /// too small to hold [`seed_count`](#structfield.seed_count) cells.
    pub fn controller(&self) -> Result<Controller, Error> {
        Controller::new(self.clone())
    }
}
