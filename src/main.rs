#![allow(clippy::doc_markdown)]

mod api;
mod cli;
mod clock;
mod desktop;
mod occupancy;
mod prelude;
mod refresh;
mod schedule;
mod tables;
mod theme;
mod time;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

#[tokio::main]
async fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().init();
    info!(version = crate_version!(), "starting…");

    match Args::parse().command {
        Command::Watch(args) => args.run().await?,
        Command::Hours(args) => args.run().await?,
        Command::Desktops(args) => args.run().await?,
        Command::ShortTime(args) => args.run(),
    }

    info!("done!");
    Ok(())
}
