//! cmdbook is a terminal catalog for command-line shortcuts: store named
//! references to executable commands, browse and search them, and copy a
//! chosen path to the clipboard to paste and run.

mod app;
mod events;
mod state;
mod store;
mod ui;
mod validate;

use crate::app::App;
use crate::store::{Store, DB_FILE};
use anyhow::Result;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

/// Open the storage file and hand control to the application. Storage
/// errors are unrecoverable: they propagate here and end the process
/// with a non-zero status.
fn run() -> Result<()> {
    let store = Store::open(DB_FILE)?;
    App::start(store)
}
