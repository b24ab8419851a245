//! Totalistic Life-like rules.

use crate::error::ConfigError;
use ca_rules::ParseLife;
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

/// Totalistic Life-like rules.
///
/// The state of a cell in the next generation only depends on its own state
/// and the number of living cells among its eight neighbors.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Life {
    /// `b[n]` is whether a dead cell with `n` living neighbors is born.
    b: [bool; 9],
    /// `s[n]` is whether a living cell with `n` living neighbors survives.
    s: [bool; 9],
}

impl Life {
    /// Constructs a new rule from the `b` and `s` data.
    pub fn new(b: Vec<u8>, s: Vec<u8>) -> Self {
        let mut rule = Life {
            b: [false; 9],
            s: [false; 9],
        };
        for i in b.into_iter().filter(|&i| i <= 8) {
            rule.b[i as usize] = true;
        }
        for i in s.into_iter().filter(|&i| i <= 8) {
            rule.s[i as usize] = true;
        }
        rule
    }

    /// Conway's Game of Life, `B3/S23`.
    pub fn conway() -> Self {
        Life::new(vec![3], vec![2, 3])
    }

    /// Whether the rule contains `B0`.
    ///
    /// In other words, whether a dead cell would become alive in the next
    /// generation, if all its neighbors in this generation are dead.
    pub fn has_b0(&self) -> bool {
        self.b[0]
    }

    /// The state of a cell in the next generation,
    /// given its current state and the number of its living neighbors.
    #[inline]
    pub fn next_state(&self, alive: bool, count: usize) -> bool {
        let table = if alive { &self.s } else { &self.b };
        table.get(count).copied().unwrap_or(false)
    }
}

impl Default for Life {
    fn default() -> Self {
        Life::conway()
    }
}

/// A parser for the rule.
impl ParseLife for Life {
    fn from_bs(b: Vec<u8>, s: Vec<u8>) -> Self {
        Self::new(b, s)
    }
}

impl FromStr for Life {
    type Err = ConfigError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        let rule = <Life as ParseLife>::parse_rule(input)?;
        if rule.has_b0() {
            Err(ConfigError::B0Rule)
        } else {
            Ok(rule)
        }
    }
}

/// Displays the rule in the `B3/S23` notation.
impl Display for Life {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "B")?;
        for i in (0..=8).filter(|&i| self.b[i]) {
            write!(f, "{}", i)?;
        }
        write!(f, "/S")?;
        for i in (0..=8).filter(|&i| self.s[i]) {
            write!(f, "{}", i)?;
        }
        Ok(())
    }
}
