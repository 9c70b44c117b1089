// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Nereid-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Colorpath and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use smol_str::SmolStr;

/// Default color assignment for endpoint pairs, in placement order.
pub const PALETTE: [&str; 6] = ["red", "green", "blue", "orange", "purple", "yellow"];

/// A demand's color label.
///
/// Colors are compared by name. Two demands with the same color belong to the same network and
/// may route through each other's claimed cells.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Color {
    name: SmolStr,
}

impl Color {
    pub fn new(name: impl AsRef<str>) -> Result<Self, ColorError> {
        let name = name.as_ref().trim();
        if name.is_empty() {
            return Err(ColorError::Empty);
        }
        if name.chars().any(char::is_whitespace) {
            return Err(ColorError::ContainsWhitespace);
        }
        Ok(Self { name: SmolStr::new(name) })
    }

    /// The color for the `pair_index`-th endpoint pair.
    ///
    /// Pairs past the end of [`PALETTE`] get numbered names (`color6`, `color7`, ...) so that no
    /// two pairs ever share a network.
    pub fn palette(pair_index: usize) -> Self {
        let name = match PALETTE.get(pair_index) {
            Some(name) => SmolStr::new_static(name),
            None => SmolStr::new(format!("color{pair_index}")),
        };
        Self { name }
    }

    pub fn as_str(&self) -> &str {
        &self.name
    }

    /// First character of the name, used as the cell glyph in text renders.
    pub fn glyph(&self) -> char {
        self.name.chars().next().unwrap_or('?')
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

impl AsRef<str> for Color {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

impl Borrow<str> for Color {
    fn borrow(&self) -> &str {
        self.as_str()
    }
}

impl FromStr for Color {
    type Err = ColorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    Empty,
    ContainsWhitespace,
}

impl fmt::Display for ColorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => f.write_str("color name must not be empty"),
            Self::ContainsWhitespace => f.write_str("color name must not contain whitespace"),
        }
    }
}

impl std::error::Error for ColorError {}
