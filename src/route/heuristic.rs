// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::fmt;
use std::str::FromStr;

use crate::model::Cell;

/// Remaining-distance estimate used to order the A* frontier.
///
/// Movement is 4-directional with unit cost, so Manhattan distance is the tight bound. Chebyshev
/// never exceeds it and yields the same path lengths, only with more expansions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Heuristic {
    #[default]
    Manhattan,
    Chebyshev,
}

impl Heuristic {
    pub fn estimate(self, a: Cell, b: Cell) -> u32 {
        let d_row = a.row().abs_diff(b.row());
        let d_col = a.col().abs_diff(b.col());
        let estimate = match self {
            Self::Manhattan => d_row.saturating_add(d_col),
            Self::Chebyshev => d_row.max(d_col),
        };
        u32::try_from(estimate).unwrap_or(u32::MAX)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manhattan => "manhattan",
            Self::Chebyshev => "chebyshev",
        }
    }
}

impl fmt::Display for Heuristic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Heuristic {
    type Err = ParseHeuristicError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "manhattan" => Ok(Self::Manhattan),
            "chebyshev" => Ok(Self::Chebyshev),
            _ => Err(ParseHeuristicError { value: s.to_owned() }),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseHeuristicError {
    value: String,
}

impl fmt::Display for ParseHeuristicError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "unknown heuristic {:?} (expected manhattan or chebyshev)", self.value)
    }
}

impl std::error::Error for ParseHeuristicError {}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::Heuristic;
    use crate::model::Cell;

    #[rstest]
    #[case(Cell::new(0, 0), Cell::new(0, 7), 7, 7)]
    #[case(Cell::new(0, 0), Cell::new(3, 4), 7, 4)]
    #[case(Cell::new(5, 2), Cell::new(1, 2), 4, 4)]
    #[case(Cell::new(2, 2), Cell::new(2, 2), 0, 0)]
    fn estimates(
        #[case] a: Cell,
        #[case] b: Cell,
        #[case] manhattan: u32,
        #[case] chebyshev: u32,
    ) {
        assert_eq!(Heuristic::Manhattan.estimate(a, b), manhattan);
        assert_eq!(Heuristic::Chebyshev.estimate(a, b), chebyshev);
        assert_eq!(Heuristic::Manhattan.estimate(b, a), manhattan);
    }

    #[test]
    fn parses_case_insensitively() {
        assert_eq!("Chebyshev".parse::<Heuristic>(), Ok(Heuristic::Chebyshev));
        assert_eq!(" manhattan ".parse::<Heuristic>(), Ok(Heuristic::Manhattan));
        assert!("euclid".parse::<Heuristic>().is_err());
    }
}
