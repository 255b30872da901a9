//! Office registry — the one place rooms live for the duration of a run.
//!
//! Callers create a single [`OfficeRegistry`] at start-up and pass it to
//! whatever needs room access.

use patternbook_domain::error::NotFoundError;
use patternbook_domain::id::RoomNumber;
use patternbook_domain::room::Room;

/// Ordered collection of rooms, addressed by 1-based [`RoomNumber`].
#[derive(Debug, Default)]
pub struct OfficeRegistry {
    rooms: Vec<Room>,
}

impl OfficeRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `count` new rooms, numbered after the existing ones.
    ///
    /// Calling this again adds more rooms; it never replaces existing ones.
    /// Numbering stops at `u32::MAX`, so fewer than `count` rooms may be
    /// created. Returns the numbers of the rooms just created.
    #[tracing::instrument(skip(self), fields(existing = self.rooms.len()))]
    pub fn configure(&mut self, count: u32) -> Vec<RoomNumber> {
        let created = next_numbers(self.rooms.len(), count);
        if usize::try_from(count).is_ok_and(|requested| created.len() < requested) {
            tracing::warn!(
                requested = count,
                created = created.len(),
                "room numbers exhausted"
            );
        }
        self.rooms.extend(created.iter().copied().map(Room::new));
        tracing::debug!(total = self.rooms.len(), "rooms configured");
        created
    }

    /// Look up a room.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when `number` is 0 or beyond the last room.
    pub fn room(&self, number: RoomNumber) -> Result<&Room, NotFoundError> {
        number
            .index()
            .and_then(|index| self.rooms.get(index))
            .ok_or_else(|| not_found(number))
    }

    /// Look up a room for mutation.
    ///
    /// # Errors
    ///
    /// Returns [`NotFoundError`] when `number` is 0 or beyond the last room.
    pub fn room_mut(&mut self, number: RoomNumber) -> Result<&mut Room, NotFoundError> {
        number
            .index()
            .and_then(|index| self.rooms.get_mut(index))
            .ok_or_else(|| not_found(number))
    }

    /// All rooms, in number order.
    #[must_use]
    pub fn rooms(&self) -> &[Room] {
        &self.rooms
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rooms.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rooms.is_empty()
    }
}

/// Up to `count` numbers following `existing` rooms, never past `u32::MAX`.
fn next_numbers(existing: usize, count: u32) -> Vec<RoomNumber> {
    let Ok(last) = u32::try_from(existing) else {
        return Vec::new();
    };
    (1..=count)
        .map_while(|offset| last.checked_add(offset))
        .map(RoomNumber::new)
        .collect()
}

fn not_found(number: RoomNumber) -> NotFoundError {
    tracing::debug!(%number, "invalid room number");
    NotFoundError {
        entity: "Room",
        id: number.to_string(),
    }
}
