//! Showcase transcript — observer, strategy, singleton, factory, adapter and
//! decorator, one section each.

use std::io::Write;

use patternbook_adapter_legacy_payment::{LegacyPaymentSystem, PaymentAdapter};
use patternbook_app::connection::SharedConnection;
use patternbook_app::ports::PaymentProcessor;
use patternbook_domain::coffee::{Addon, Coffee};
use patternbook_domain::shape::ShapeFactory;
use patternbook_domain::sorting::{SortStrategy, Sorter};
use patternbook_domain::weather::{DisplayKind, WeatherDisplay, WeatherMonitor};

/// Run the showcase demonstration, writing the transcript to `out`.
///
/// `connection` is the run's shared connection; it is opened on first use.
///
/// # Errors
///
/// Returns an error when writing to `out` fails.
pub fn run(out: &mut impl Write, connection: &SharedConnection) -> anyhow::Result<()> {
    writeln!(out, "---- Observer Pattern Demo ----")?;
    observer(out)?;

    writeln!(out, "\n---- Strategy Pattern Demo ----")?;
    strategy(out)?;

    writeln!(out, "\n---- Singleton Pattern Demo ----")?;
    singleton(out, connection)?;

    writeln!(out, "\n---- Factory Pattern Demo ----")?;
    factory(out)?;

    writeln!(out, "\n---- Adapter Pattern Demo ----")?;
    adapter(out)?;

    writeln!(out, "\n---- Decorator Pattern Demo ----")?;
    decorator(out)?;

    Ok(())
}

fn observer(out: &mut impl Write) -> std::io::Result<()> {
    let mut station = WeatherMonitor::new();
    station.register(WeatherDisplay::new(DisplayKind::Mobile));
    station.register(WeatherDisplay::new(DisplayKind::Television));
    for reading in station.set_temperature(25.5) {
        writeln!(out, "{reading}")?;
    }
    Ok(())
}

fn strategy(out: &mut impl Write) -> std::io::Result<()> {
    let mut items = [10, 5, 2, 8, 7];
    let mut sorter = Sorter::new(SortStrategy::Bubble);
    for strategy in [SortStrategy::Bubble, SortStrategy::Quick] {
        sorter.set_strategy(strategy);
        writeln!(out, "Sorting array using {}", sorter.strategy())?;
        sorter.sort(&mut items);
        writeln!(out, "Sorted array: {items:?}")?;
    }
    Ok(())
}

fn singleton(out: &mut impl Write, shared: &SharedConnection) -> std::io::Result<()> {
    let (connection, opened) = shared.connect();
    if opened {
        writeln!(out, "Creating Database Connection...")?;
    }
    let report = connection.execute_query("SELECT * FROM users");
    writeln!(out, "{report}")
}

fn factory(out: &mut impl Write) -> std::io::Result<()> {
    let factory = ShapeFactory;
    for key in ["CIRCLE", "SQUARE"] {
        match factory.create(key) {
            Some(shape) => writeln!(out, "{}", shape.draw())?,
            None => writeln!(out, "No shape is known as {key:?}.")?,
        }
    }
    Ok(())
}

fn adapter(out: &mut impl Write) -> std::io::Result<()> {
    let legacy = LegacyPaymentSystem::new();
    let processor: &dyn PaymentProcessor = &PaymentAdapter::new(&legacy);
    let receipt = processor.process_payment(100.0);
    writeln!(out, "{receipt}")
}

fn decorator(out: &mut impl Write) -> std::io::Result<()> {
    let coffee = Coffee::Simple.with(Addon::Milk).with(Addon::Sugar);
    writeln!(out, "{coffee}")
}
