use anyhow::Result;
use clap::Parser;

use imreg::{app, cli};

fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    app::run(cli)
}
