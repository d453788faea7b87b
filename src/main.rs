//! Binary entry point that glues the SQLite-backed record store to the
//! command-line front end: parse the flags, print the start-up summary,
//! locate and open the database, run exactly one action, and report the
//! resulting record counts.

use anyhow::{bail, Context, Result};
use clap::{CommandFactory, Parser};
use flexi_logger::{Logger, LoggerHandle};
use log::debug;
use rusqlite::Connection;

use amt::cli::{Action, Cli};
use amt::db;
use amt::ui::{group_digits, print_banner, print_store_summary, Prompter};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let _logger = init_diagnostics(cli.debug)?;
    debug!("parsed command line: {cli:?}");

    print_banner();

    let Some(action) = cli.action() else {
        // No action flag given: show usage and finish cleanly.
        println!();
        Cli::command().print_help().context("failed to print usage")?;
        return Ok(());
    };

    let path = db::locate_db(cli.file.as_deref())?;
    let store = db::StoreFile::inspect(&path)?;
    print_store_summary(&store);

    let conn = db::open_db(&path)?;
    let total = db::count(&conn)?;
    println!(" - Record count is: {}", group_digits(total));
    match db::last_acronym(&conn)? {
        Some(last) => println!(" - Last acronym entered was: '{last}'"),
        None => println!(" - The database holds no acronyms yet"),
    }

    debug!("dispatching action: {action:?}");
    match action {
        Action::Search(pattern) => run_search(&conn, &pattern, total)?,
        Action::New => run_add(&conn)?,
        Action::Remove(id) => run_remove(&conn, id)?,
    }

    println!("\nAll is well");
    Ok(())
}

/// Route `log` output to stderr; `--debug` raises the level so the `debug!`
/// trace lines become visible.
fn init_diagnostics(debug: bool) -> Result<LoggerHandle> {
    let level = if debug { "debug" } else { "warn" };
    Logger::try_with_env_or_str(level)
        .context("invalid log specification")?
        .start()
        .context("failed to start diagnostics logging")
}

fn run_search(conn: &Connection, pattern: &str, total: i64) -> Result<()> {
    if pattern.trim().is_empty() {
        bail!("the search pattern must not be empty");
    }

    println!("\nSEARCH FOR ACRONYM");
    println!("{}", "\u{af}".repeat(18));
    println!(
        "Searching for: '{pattern}' across {} records...\n",
        group_digits(total)
    );

    let matches = db::search(conn, pattern)?;
    for record in &matches {
        println!("{record}\n");
    }
    println!("Matches found: {}", matches.len());
    Ok(())
}

fn run_add(conn: &Connection) -> Result<()> {
    let before = db::count(conn)?;
    let sources = db::list_sources(conn)?;

    let mut prompter = Prompter::new()?;
    match prompter.new_record(&sources)? {
        Some(record) => {
            db::insert(conn, &record)?;
            let after = db::count(conn)?;
            println!(
                "\nInserted {} new record. Total record count is now {} (was {}).",
                after - before,
                group_digits(after),
                group_digits(before)
            );
        }
        None => println!("\nRecord entry abandoned - nothing was added"),
    }
    Ok(())
}

fn run_remove(conn: &Connection, id: i64) -> Result<()> {
    let before = db::count(conn)?;

    println!("\nDELETE ACRONYM RECORD");
    println!("{}", "\u{af}".repeat(21));
    println!("Searching for record ID '{id}'...\n");

    let Some(record) = db::fetch_by_id(conn, id)? else {
        println!(" \u{bb} no record with ID '{id}' found \u{ab}");
        println!(
            "\nDeleted 0 records. Total record count is now {} (was {}).",
            group_digits(before),
            group_digits(before)
        );
        return Ok(());
    };

    println!("{record}");

    let mut prompter = Prompter::new()?;
    if prompter.confirm("\nDelete the above record? [ y/n ] : ")? {
        let removed = db::delete(conn, id)?;
        let after = db::count(conn)?;
        println!(
            "\nDeleted {removed} record. Total record count is now {} (was {}).",
            group_digits(after),
            group_digits(before)
        );
    } else {
        println!("\nDelete abandoned - no records were removed");
    }
    Ok(())
}
