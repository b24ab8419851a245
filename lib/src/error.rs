//! All kinds of errors in this crate.

use ca_rules::ParseRuleError;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
///
/// Both can only happen while creating a [`Controller`](crate::Controller).
/// Once a controller exists, nothing it does can fail.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum Error {
    /// Invalid configuration: {0}
    InvalidConfig(#[from] ConfigError),
    /// Cannot seed {count} living cells in a grid of only {capacity} cells.
    SeedExceedsCapacity {
        /// The requested number of living cells.
        count: usize,
        /// The number of cells in the grid.
        capacity: usize,
    },
}

/// Ways a [`Config`](crate::Config) can be malformed.
#[derive(Clone, Debug, PartialEq, Eq, Display, Error)]
pub enum ConfigError {
    /// cell size should be positive.
    NonPositiveCellSize,
    /// the grid should have at least one row and one column.
    EmptyGrid,
    /// the grid has more cells than can be counted.
    GridTooLarge,
    /// invalid rule: {0:?}.
    ParseRuleError(#[from] ParseRuleError),
    /// B0 rules are not supported.
    B0Rule,
    /// the world does not have the size or the rule of the configuration.
    WorldMismatch,
}
