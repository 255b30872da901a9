//! `showcase` — weather, sorting, connection, shapes, payment and coffee.

use patternbook::config::Config;
use patternbook::{logging, showcase};
use patternbook_app::connection::SharedConnection;

fn main() -> anyhow::Result<()> {
    let config = Config::load()?;
    logging::init(&config.logging)?;

    let connection = SharedConnection::new();
    let stdout = std::io::stdout();
    showcase::run(&mut stdout.lock(), &connection)
}
