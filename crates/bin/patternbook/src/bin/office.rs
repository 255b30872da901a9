//! `office` — meeting-room booking demonstration.

use patternbook::config::Config;
use patternbook::{logging, office};

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    logging::init(&config.logging)?;

    let stdout = std::io::stdout();
    office::run(&mut stdout.lock())
}
