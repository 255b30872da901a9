//! Booking commands — book and cancel actions as invocable values.
//!
//! A command is built once and may be executed any number of times against
//! the [`OfficeRegistry`]. Its outcome depends only on the target room's
//! occupancy at the moment it runs.

use patternbook_domain::error::{PatternbookError, ValidationError};
use patternbook_domain::id::RoomNumber;
use patternbook_domain::room::OccupancyChange;
use patternbook_domain::time::{BookingSlot, CLOCK_FORMAT};

use crate::registry::OfficeRegistry;

/// Head count recorded when a booking occupies a room.
pub const BOOKING_OCCUPANTS: u32 = 2;

/// An action executed against the office.
pub trait Command {
    /// Run the action.
    ///
    /// # Errors
    ///
    /// Returns [`PatternbookError::NotFound`] when the target room is not in
    /// the registry. Nothing is mutated in that case.
    fn execute(&self, office: &mut OfficeRegistry) -> Result<BookingOutcome, PatternbookError>;
}

/// What a booking command decided.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BookingOutcome {
    /// The room was free and is now occupied.
    Booked {
        room: RoomNumber,
        slot: BookingSlot,
        change: OccupancyChange,
    },
    /// The room was already occupied; nothing changed.
    AlreadyBooked { room: RoomNumber },
    /// The room was occupied and has been released.
    Cancelled {
        room: RoomNumber,
        change: OccupancyChange,
    },
    /// The room was already free; nothing changed.
    NotBooked { room: RoomNumber },
}

impl BookingOutcome {
    /// Occupancy change caused by the command, if it mutated the room.
    #[must_use]
    pub fn change(&self) -> Option<&OccupancyChange> {
        match self {
            Self::Booked { change, .. } | Self::Cancelled { change, .. } => Some(change),
            Self::AlreadyBooked { .. } | Self::NotBooked { .. } => None,
        }
    }
}

impl std::fmt::Display for BookingOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Booked { room, slot, .. } => write!(
                f,
                "Room {room} booked from {} until {} ({} minutes).",
                slot.start.format(CLOCK_FORMAT),
                slot.end().format(CLOCK_FORMAT),
                slot.duration_minutes
            ),
            Self::AlreadyBooked { room } => write!(f, "Room {room} is already booked."),
            Self::Cancelled { room, .. } => {
                write!(f, "Booking for Room {room} cancelled successfully.")
            }
            Self::NotBooked { room } => write!(f, "Room {room} is not booked."),
        }
    }
}

/// Occupy a room for a slot, unless it is already occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BookRoomCommand {
    room: RoomNumber,
    slot: BookingSlot,
}

impl BookRoomCommand {
    /// Build a booking for `room` starting at `start` (`HH:MM`).
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError`] when `start` is not a valid time of day
    /// or `duration_minutes` is zero.
    pub fn new(
        room: RoomNumber,
        start: &str,
        duration_minutes: u32,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            room,
            slot: BookingSlot::parse(start, duration_minutes)?,
        })
    }

    #[must_use]
    pub fn room(&self) -> RoomNumber {
        self.room
    }

    #[must_use]
    pub fn slot(&self) -> BookingSlot {
        self.slot
    }
}

impl Command for BookRoomCommand {
    #[tracing::instrument(skip(self, office), fields(room = %self.room, slot = %self.slot))]
    fn execute(&self, office: &mut OfficeRegistry) -> Result<BookingOutcome, PatternbookError> {
        let room = office.room_mut(self.room)?;
        if room.is_occupied() {
            tracing::debug!("room already occupied, booking refused");
            return Ok(BookingOutcome::AlreadyBooked { room: self.room });
        }
        let change = room.add_occupants(BOOKING_OCCUPANTS);
        tracing::info!("room booked");
        Ok(BookingOutcome::Booked {
            room: self.room,
            slot: self.slot,
            change,
        })
    }
}

/// Release a room, if it is occupied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CancelBookingCommand {
    room: RoomNumber,
}

impl CancelBookingCommand {
    #[must_use]
    pub fn new(room: RoomNumber) -> Self {
        Self { room }
    }

    #[must_use]
    pub fn room(&self) -> RoomNumber {
        self.room
    }
}

impl Command for CancelBookingCommand {
    #[tracing::instrument(skip(self, office), fields(room = %self.room))]
    fn execute(&self, office: &mut OfficeRegistry) -> Result<BookingOutcome, PatternbookError> {
        let room = office.room_mut(self.room)?;
        if !room.is_occupied() {
            tracing::debug!("room is free, nothing to cancel");
            return Ok(BookingOutcome::NotBooked { room: self.room });
        }
        let change = room.release();
        tracing::info!("booking cancelled");
        Ok(BookingOutcome::Cancelled {
            room: self.room,
            change,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use patternbook_domain::room::Power;

    fn office() -> OfficeRegistry {
        let mut office = OfficeRegistry::new();
        office.configure(2);
        office
    }

    fn book(room: u32) -> BookRoomCommand {
        BookRoomCommand::new(RoomNumber::new(room), "09:00", 60).unwrap()
    }

    fn cancel(room: u32) -> CancelBookingCommand {
        CancelBookingCommand::new(RoomNumber::new(room))
    }

    fn occupied(office: &OfficeRegistry, room: u32) -> bool {
        office.room(RoomNumber::new(room)).unwrap().is_occupied()
    }

    #[test]
    fn should_book_free_room() {
        let mut office = office();
        let outcome = book(1).execute(&mut office).unwrap();

        assert!(matches!(outcome, BookingOutcome::Booked { .. }));
        assert!(occupied(&office, 1));
        let change = outcome.change().unwrap();
        assert_eq!(change.occupants, Some(BOOKING_OCCUPANTS));
        assert!(change.notices.iter().all(|n| n.power == Power::On));
    }

    #[test]
    fn should_refuse_booking_when_already_occupied() {
        let mut office = office();
        let command = book(1);
        command.execute(&mut office).unwrap();

        let outcome = command.execute(&mut office).unwrap();
        assert_eq!(
            outcome,
            BookingOutcome::AlreadyBooked {
                room: RoomNumber::new(1)
            }
        );
        assert!(outcome.change().is_none());
        assert!(occupied(&office, 1));
    }

    #[test]
    fn should_cancel_occupied_room() {
        let mut office = office();
        book(1).execute(&mut office).unwrap();

        let outcome = cancel(1).execute(&mut office).unwrap();
        assert!(matches!(outcome, BookingOutcome::Cancelled { .. }));
        assert!(!occupied(&office, 1));
    }

    #[test]
    fn should_report_not_booked_when_cancelling_free_room() {
        let mut office = office();
        let outcome = cancel(2).execute(&mut office).unwrap();
        assert_eq!(
            outcome,
            BookingOutcome::NotBooked {
                room: RoomNumber::new(2)
            }
        );
        assert!(!occupied(&office, 2));
    }

    #[test]
    fn should_rebook_after_cancellation() {
        let mut office = office();
        let booking = book(1);
        booking.execute(&mut office).unwrap();
        cancel(1).execute(&mut office).unwrap();

        let outcome = booking.execute(&mut office).unwrap();
        assert!(matches!(outcome, BookingOutcome::Booked { .. }));
    }

    #[test]
    fn should_fail_without_mutation_for_unknown_room() {
        let mut office = office();
        let result = book(9).execute(&mut office);
        assert!(matches!(result, Err(PatternbookError::NotFound(_))));
        assert!(office.rooms().iter().all(|r| !r.is_occupied()));
    }

    #[test]
    fn should_reject_invalid_start_time() {
        let result = BookRoomCommand::new(RoomNumber::new(1), "25:00", 60);
        assert!(matches!(
            result,
            Err(ValidationError::InvalidStartTime { .. })
        ));
    }

    #[test]
    fn should_describe_booking_with_end_time() {
        let mut office = office();
        let outcome = book(1).execute(&mut office).unwrap();
        assert_eq!(
            outcome.to_string(),
            "Room 1 booked from 09:00 until 10:00 (60 minutes)."
        );
    }

    #[test]
    fn should_run_commands_through_trait_objects() {
        let mut office = office();
        let queue: Vec<Box<dyn Command>> = vec![Box::new(book(2)), Box::new(cancel(2))];

        let outcomes: Vec<_> = queue
            .iter()
            .map(|command| command.execute(&mut office).unwrap())
            .collect();
        assert!(matches!(outcomes[0], BookingOutcome::Booked { .. }));
        assert!(matches!(outcomes[1], BookingOutcome::Cancelled { .. }));
    }
}
