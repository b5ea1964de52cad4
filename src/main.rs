use anyhow::Result;
use clap::Parser;

use expense_tracker::storage::{EntryStore, STORE_FILE};
use expense_tracker::tui::run_tui;

/// The data file lives at a fixed path in the working directory; there are
/// no flags beyond the standard --help/--version.
#[derive(Parser)]
#[command(
    name = "expenses",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "Record, list, delete, and total personal expense entries. \
                  Entries are stored in expenses.csv in the current working \
                  directory."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let mut store = EntryStore::new(STORE_FILE);

    // A missing file just means an empty store; any other load failure is
    // shown in the UI while the rows loaded before the failure stay usable.
    let load_error = store.load().err();

    run_tui(store, load_error)?;

    Ok(())
}
