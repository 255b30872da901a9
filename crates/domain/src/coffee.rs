//! Coffee — a base drink wrapped by add-ons, each adding to the description
//! and the price.
//!
//! A decorated coffee owns the coffee it wraps. Descriptions follow wrap
//! order; prices are summed in whole cents so the total never depends on
//! the order add-ons were applied.

use serde::{Deserialize, Serialize};

/// A price in whole cents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Price(u32);

impl Price {
    pub const MAX: Price = Price(u32::MAX);

    #[must_use]
    pub const fn from_cents(cents: u32) -> Self {
        Self(cents)
    }

    #[must_use]
    pub const fn cents(self) -> u32 {
        self.0
    }

    #[must_use]
    pub fn as_f64(self) -> f64 {
        f64::from(self.0) / 100.0
    }

    /// `None` when the sum exceeds [`Price::MAX`].
    #[must_use]
    pub const fn checked_add(self, rhs: Self) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(cents) => Some(Self(cents)),
            None => None,
        }
    }

    /// Clamps at [`Price::MAX`].
    #[must_use]
    pub const fn saturating_add(self, rhs: Self) -> Self {
        Self(self.0.saturating_add(rhs.0))
    }
}

/// Saturates at [`Price::MAX`]; use [`Price::checked_add`] to detect it.
impl std::ops::Add for Price {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        self.saturating_add(rhs)
    }
}

impl std::fmt::Display for Price {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "${}.{:02}", self.0 / 100, self.0 % 100)
    }
}

/// Something added on top of a coffee.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Addon {
    Milk,
    Sugar,
}

impl Addon {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Milk => "Milk",
            Self::Sugar => "Sugar",
        }
    }

    #[must_use]
    pub fn price(self) -> Price {
        match self {
            Self::Milk => Price::from_cents(50),
            Self::Sugar => Price::from_cents(20),
        }
    }
}

/// A coffee, either plain or wrapping another coffee with one add-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Coffee {
    Simple,
    Decorated { base: Box<Coffee>, addon: Addon },
}

impl Coffee {
    /// Price of a [`Coffee::Simple`].
    pub const BASE_PRICE: Price = Price::from_cents(200);

    /// Wrap this coffee with `addon`.
    #[must_use]
    pub fn with(self, addon: Addon) -> Self {
        Self::Decorated {
            base: Box::new(self),
            addon,
        }
    }

    #[must_use]
    pub fn description(&self) -> String {
        match self {
            Self::Simple => "Simple Coffee".to_string(),
            Self::Decorated { base, addon } => {
                format!("{}, {}", base.description(), addon.name())
            }
        }
    }

    #[must_use]
    pub fn cost(&self) -> Price {
        match self {
            Self::Simple => Self::BASE_PRICE,
            Self::Decorated { base, addon } => base.cost() + addon.price(),
        }
    }
}

impl std::fmt::Display for Coffee {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} costs {}", self.description(), self.cost())
    }
}
