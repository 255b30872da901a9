//! Shapes and the factory that builds them from a string key.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// A drawable product of the [`ShapeFactory`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shape {
    Circle,
    Square,
}

impl Shape {
    /// Every shape the factory knows about.
    pub const ALL: [Shape; 2] = [Shape::Circle, Shape::Square];

    /// Factory key, lowercase.
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Circle => "circle",
            Self::Square => "square",
        }
    }

    #[must_use]
    pub fn draw(self) -> &'static str {
        match self {
            Self::Circle => "Drawing a Circle",
            Self::Square => "Drawing a Square",
        }
    }
}

impl FromStr for Shape {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|shape| shape.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::UnknownShape {
                value: s.to_string(),
            })
    }
}

impl std::fmt::Display for Shape {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.key())
    }
}

/// Builds [`Shape`]s without exposing how each one is made.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShapeFactory;

impl ShapeFactory {
    /// Case-insensitive lookup. Unknown or absent keys yield `None`.
    pub fn create<'a>(&self, kind: impl Into<Option<&'a str>>) -> Option<Shape> {
        let kind: Option<&str> = kind.into();
        kind?.parse().ok()
    }
}
