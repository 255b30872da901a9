//! Room — a meeting room whose occupancy drives its air conditioning and lights.
//!
//! Every room is created with the same two effectors subscribed, in this
//! order: air conditioning, then lights. Any occupancy-changing call notifies
//! both, even when the occupancy flag did not actually change.

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::RoomNumber;
use crate::observer::{Observer, Subscribers};

/// Minimum head count for a room to count as occupied.
pub const OCCUPANCY_THRESHOLD: u32 = 2;

/// Power state of an effector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Power {
    On,
    #[default]
    Off,
}

impl From<bool> for Power {
    fn from(on: bool) -> Self {
        if on { Self::On } else { Self::Off }
    }
}

impl std::fmt::Display for Power {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::On => f.write_str("on"),
            Self::Off => f.write_str("off"),
        }
    }
}

/// The kinds of equipment a room switches with its occupancy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EffectorKind {
    AirConditioning,
    Lights,
}

impl EffectorKind {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::AirConditioning => "AC",
            Self::Lights => "Lights",
        }
    }
}

/// A piece of equipment subscribed to a room's occupancy.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Effector {
    kind: EffectorKind,
    power: Power,
}

impl Effector {
    #[must_use]
    pub fn new(kind: EffectorKind) -> Self {
        Self {
            kind,
            power: Power::Off,
        }
    }

    #[must_use]
    pub fn kind(&self) -> EffectorKind {
        self.kind
    }

    #[must_use]
    pub fn power(&self) -> Power {
        self.power
    }
}

impl Observer for Effector {
    type Value = bool;
    type Notice = EffectorNotice;

    fn update(&mut self, occupied: &bool) -> EffectorNotice {
        self.power = Power::from(*occupied);
        EffectorNotice {
            kind: self.kind,
            power: self.power,
        }
    }
}

/// What an effector did in response to an occupancy notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectorNotice {
    pub kind: EffectorKind,
    pub power: Power,
}

impl std::fmt::Display for EffectorNotice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} turned {}.", self.kind.label(), self.power)
    }
}

/// Result of an occupancy-changing call on a [`Room`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OccupancyChange {
    pub room: RoomNumber,
    /// Head count supplied by the caller; `None` for a release.
    pub occupants: Option<u32>,
    pub occupied: bool,
    /// Effector reactions, in subscription order.
    pub notices: Vec<EffectorNotice>,
}

impl std::fmt::Display for OccupancyChange {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.occupants, self.occupied) {
            (Some(count), true) => {
                write!(f, "Room {} is now occupied by {count} persons.", self.room)
            }
            (Some(_), false) => write!(
                f,
                "Room {} occupancy insufficient to mark as occupied.",
                self.room
            ),
            (None, _) => write!(f, "Room {} is now unoccupied.", self.room),
        }
    }
}

/// A meeting room.
#[derive(Debug, Clone)]
pub struct Room {
    number: RoomNumber,
    occupied: bool,
    max_capacity: u64,
    effectors: Subscribers<Effector>,
}

impl Room {
    /// Create a free room with zero capacity and its effectors subscribed.
    #[must_use]
    pub fn new(number: RoomNumber) -> Self {
        let mut effectors = Subscribers::new();
        effectors.register(Effector::new(EffectorKind::AirConditioning));
        effectors.register(Effector::new(EffectorKind::Lights));
        Self {
            number,
            occupied: false,
            max_capacity: 0,
            effectors,
        }
    }

    #[must_use]
    pub fn number(&self) -> RoomNumber {
        self.number
    }

    #[must_use]
    pub fn is_occupied(&self) -> bool {
        self.occupied
    }

    #[must_use]
    pub fn max_capacity(&self) -> u64 {
        self.max_capacity
    }

    /// Subscribed effectors, in notification order.
    pub fn effectors(&self) -> impl Iterator<Item = &Effector> {
        self.effectors.iter()
    }

    /// Set the maximum capacity, returning the stored value.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::InvalidCapacity`] when `capacity` is not
    /// positive; the current capacity is left untouched.
    pub fn set_max_capacity(&mut self, capacity: i64) -> Result<u64, ValidationError> {
        let capacity = u64::try_from(capacity)
            .ok()
            .filter(|value| *value > 0)
            .ok_or(ValidationError::InvalidCapacity { value: capacity })?;
        self.max_capacity = capacity;
        Ok(capacity)
    }

    /// Record a head count. The room is occupied iff `count` reaches
    /// [`OCCUPANCY_THRESHOLD`], whatever its previous state.
    pub fn add_occupants(&mut self, count: u32) -> OccupancyChange {
        self.occupied = count >= OCCUPANCY_THRESHOLD;
        self.change(Some(count))
    }

    /// Mark the room free.
    pub fn release(&mut self) -> OccupancyChange {
        self.occupied = false;
        self.change(None)
    }

    fn change(&mut self, occupants: Option<u32>) -> OccupancyChange {
        let notices = self.effectors.notify(&self.occupied);
        OccupancyChange {
            room: self.number,
            occupants,
            occupied: self.occupied,
            notices,
        }
    }
}
