//! Office transcript — room registry, booking commands and occupancy
//! notifications.

use std::io::Write;

use patternbook_app::commands::{BookRoomCommand, BookingOutcome, CancelBookingCommand, Command};
use patternbook_app::registry::OfficeRegistry;
use patternbook_domain::error::PatternbookError;
use patternbook_domain::id::RoomNumber;
use patternbook_domain::room::OccupancyChange;

const ROOM_COUNT: u32 = 3;

/// Run the office demonstration, writing the transcript to `out`.
///
/// Invalid input along the way is reported in the transcript, not returned.
///
/// # Errors
///
/// Returns an error when writing to `out` fails or a hard-coded booking is
/// malformed.
pub fn run(out: &mut impl Write) -> anyhow::Result<()> {
    let mut office = OfficeRegistry::new();
    let room1 = RoomNumber::new(1);
    let room2 = RoomNumber::new(2);

    writeln!(out, "---- Singleton Pattern Demo ----")?;
    office.configure(ROOM_COUNT);
    writeln!(out, "Office configured with {ROOM_COUNT} meeting rooms.")?;
    set_capacity(out, &mut office, room1, 10)?;
    set_capacity(out, &mut office, room2, 8)?;

    writeln!(out, "\n---- Command Pattern Demo ----")?;
    let book_room1 = BookRoomCommand::new(room1, "09:00", 60)?;
    let cancel_room1 = CancelBookingCommand::new(room1);
    execute(out, &mut office, &book_room1)?;
    execute(out, &mut office, &cancel_room1)?;
    execute(out, &mut office, &book_room1)?;

    let book_room2 = BookRoomCommand::new(room2, "09:00", 60)?;
    let cancel_room2 = CancelBookingCommand::new(room2);
    tracing::debug!(command = ?book_room2, "booking prepared but not executed");
    execute(out, &mut office, &cancel_room2)?;

    writeln!(out, "\n---- Observer Pattern Demo ----")?;
    for count in [0, 3] {
        match office.room_mut(room1) {
            Ok(room) => {
                let change = room.add_occupants(count);
                write_change(out, &change)?;
            }
            Err(err) => writeln!(out, "{}", PatternbookError::from(err))?,
        }
    }

    Ok(())
}

fn set_capacity(
    out: &mut impl Write,
    office: &mut OfficeRegistry,
    number: RoomNumber,
    capacity: i64,
) -> std::io::Result<()> {
    let result = office
        .room_mut(number)
        .map_err(PatternbookError::from)
        .and_then(|room| room.set_max_capacity(capacity).map_err(Into::into));
    match result {
        Ok(stored) => writeln!(out, "Room {number} maximum capacity set to {stored}."),
        Err(err) => writeln!(out, "{err}"),
    }
}

fn execute(
    out: &mut impl Write,
    office: &mut OfficeRegistry,
    command: &dyn Command,
) -> std::io::Result<()> {
    match command.execute(office) {
        Ok(outcome @ BookingOutcome::Booked { .. }) => {
            writeln!(out, "{outcome}")?;
            if let Some(change) = outcome.change() {
                write_change(out, change)?;
            }
            Ok(())
        }
        Ok(outcome @ BookingOutcome::Cancelled { .. }) => {
            if let Some(change) = outcome.change() {
                write_change(out, change)?;
            }
            writeln!(out, "{outcome}")
        }
        Ok(outcome) => writeln!(out, "{outcome}"),
        Err(err) => writeln!(out, "{err}"),
    }
}

fn write_change(out: &mut impl Write, change: &OccupancyChange) -> std::io::Result<()> {
    writeln!(out, "{change}")?;
    for notice in &change.notices {
        writeln!(out, "{notice}")?;
    }
    Ok(())
}
