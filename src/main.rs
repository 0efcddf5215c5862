use std::io;

use anyhow::Result;
use clap::Parser;

use spendlog::session::Session;

#[derive(Parser)]
#[command(
    name = "spendlog",
    version,
    about = "Terminal-based personal expense tracker",
    long_about = "spendlog is an interactive expense tracker for the terminal. \
                  Record expenses with a description, amount, and date, group \
                  them into monthly categories, and view itemized reports. \
                  Nothing is written to disk; state lasts for one session."
)]
struct Cli {}

fn main() -> Result<()> {
    let _cli = Cli::parse();

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = Session::new();
    session.run(&mut stdin.lock(), &mut stdout.lock())?;

    Ok(())
}
