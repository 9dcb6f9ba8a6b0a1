mod app;
mod config;
mod field;
mod input;
mod star;
mod surface;
mod term;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    env_logger::init();
    let args = config::Args::parse();
    app::run(args)
}
