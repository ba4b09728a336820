mod desktops;
mod hours;
mod short_time;
mod watch;

use clap::{Parser, Subcommand};
use enumset::EnumSet;
use reqwest::Url;

pub use self::{
    desktops::DesktopsArgs,
    hours::HoursArgs,
    short_time::ShortTimeArgs,
    watch::WatchArgs,
};
use crate::{api::ocf, desktop::Desktop, prelude::*};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Main command: keep the lab map, the clock, and the theme up to date.
    #[clap(name = "watch")]
    Watch(Box<WatchArgs>),

    /// Show today's opening hours.
    #[clap(name = "hours")]
    Hours(HoursArgs),

    /// Show the lab map once.
    #[clap(name = "desktops")]
    Desktops(DesktopsArgs),

    /// Format wall-clock times like `16:30:00` as short labels like `4:30 pm`.
    #[clap(name = "short-time")]
    ShortTime(ShortTimeArgs),
}

#[derive(Parser)]
pub struct ApiArgs {
    /// Lab status API base URL, must end with a slash.
    #[clap(
        long = "api-base-url",
        env = "LABMAP_API_BASE_URL",
        default_value = "https://www.ocf.berkeley.edu/api/"
    )]
    pub base_url: Url,
}

impl ApiArgs {
    pub fn new_client(&self) -> Result<ocf::Api> {
        ocf::Api::new(self.base_url.clone())
    }
}

#[derive(Parser)]
pub struct OccupancyArgs {
    /// Desktops to always show as occupied.
    #[clap(
        long = "always-occupied",
        env = "ALWAYS_OCCUPIED",
        value_delimiter = ',',
        num_args = 0..,
        default_value = "eruption,invasion"
    )]
    pub always_occupied: Vec<Desktop>,
}

impl OccupancyArgs {
    #[must_use]
    pub fn always_occupied(&self) -> EnumSet<Desktop> {
        self.always_occupied.iter().copied().collect()
    }
}
