//! The four card attributes and the content tuple built from them.
//!
//! Each attribute has exactly three values. `CardContent` combines one value
//! from each; the 81 combinations are the whole deck.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many symbols are printed on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Number {
    One,
    Two,
    Three,
}

impl Number {
    pub const ALL: [Number; 3] = [Number::One, Number::Two, Number::Three];

    /// Symbol count for rendering.
    #[must_use]
    pub const fn count(self) -> u8 {
        match self {
            Number::One => 1,
            Number::Two => 2,
            Number::Three => 3,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shape {
    Diamond,
    Squiggle,
    Oval,
}

impl Shape {
    pub const ALL: [Shape; 3] = [Shape::Diamond, Shape::Squiggle, Shape::Oval];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Shading {
    Solid,
    Striped,
    Open,
}

impl Shading {
    pub const ALL: [Shading; 3] = [Shading::Solid, Shading::Striped, Shading::Open];
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Purple,
}

impl Color {
    pub const ALL: [Color; 3] = [Color::Red, Color::Green, Color::Purple];
}

impl fmt::Display for Shape {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shape::Diamond => "diamond",
            Shape::Squiggle => "squiggle",
            Shape::Oval => "oval",
        })
    }
}

impl fmt::Display for Shading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Shading::Solid => "solid",
            Shading::Striped => "striped",
            Shading::Open => "open",
        })
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Color::Red => "red",
            Color::Green => "green",
            Color::Purple => "purple",
        })
    }
}

/// Immutable face of a card: one value per attribute.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardContent {
    pub number: Number,
    pub shape: Shape,
    pub shading: Shading,
    pub color: Color,
}

impl CardContent {
    #[must_use]
    pub const fn new(number: Number, shape: Shape, shading: Shading, color: Color) -> Self {
        Self {
            number,
            shape,
            shading,
            color,
        }
    }

    /// Attribute values as indices in 0..3, in (number, shape, shading, color) order.
    ///
    /// The set rule works on these: three values form a valid attribute iff
    /// their sum is divisible by 3.
    #[must_use]
    pub const fn indices(&self) -> [u8; 4] {
        [
            self.number as u8,
            self.shape as u8,
            self.shading as u8,
            self.color as u8,
        ]
    }

    /// Inverse of [`CardContent::indices`]. Each index is taken modulo 3.
    #[must_use]
    pub const fn from_indices(indices: [u8; 4]) -> Self {
        Self {
            number: Number::ALL[(indices[0] % 3) as usize],
            shape: Shape::ALL[(indices[1] % 3) as usize],
            shading: Shading::ALL[(indices[2] % 3) as usize],
            color: Color::ALL[(indices[3] % 3) as usize],
        }
    }
}

impl fmt::Display for CardContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.number.count(),
            self.color,
            self.shading,
            self.shape
        )
    }
}
