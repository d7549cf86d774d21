use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use crate::error::{Error, Result};
use crate::models::{Region, ServerStatus};

#[derive(Parser, Debug)]
#[command(name = "fleet-status")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load one snapshot and print the fleet report
    Status(StatusArgs),
    /// Drive repeated manual refreshes through the controller
    Simulate(SimulateArgs),
    /// Print the supported region names
    ListRegions,
    /// Parse and echo the effective configuration
    ShowConfig(ConfigArgs),
}

#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(
        long,
        help = "Seed snapshot generation for reproducible output; omit for a fresh fleet"
    )]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct StatusArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
    #[arg(long, default_value = "")]
    pub search: String,
    #[arg(long, value_enum)]
    pub region: Option<RegionArg>,
    #[arg(long, value_enum)]
    pub status: Option<StatusArg>,
    #[arg(long, value_enum, default_value = "human")]
    pub format: FormatArg,
}

#[derive(Args, Debug)]
pub struct SimulateArgs {
    #[command(flatten)]
    pub config: ConfigArgs,
    #[arg(long, default_value_t = 1)]
    pub refreshes: u32,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum RegionArg {
    Europe,
    NorthAmerica,
    Asia,
    SouthAmerica,
    Oceania,
}

impl From<RegionArg> for Region {
    fn from(value: RegionArg) -> Self {
        match value {
            RegionArg::Europe => Region::Europe,
            RegionArg::NorthAmerica => Region::NorthAmerica,
            RegionArg::Asia => Region::Asia,
            RegionArg::SouthAmerica => Region::SouthAmerica,
            RegionArg::Oceania => Region::Oceania,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug)]
pub enum StatusArg {
    Online,
    Offline,
    Maintenance,
}

impl From<StatusArg> for ServerStatus {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Online => ServerStatus::Online,
            StatusArg::Offline => ServerStatus::Offline,
            StatusArg::Maintenance => ServerStatus::Maintenance,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormatArg {
    Human,
    Summary,
    Json,
}

pub fn parse_args() -> Result<Cli> {
    Cli::try_parse().map_err(|e| Error::Cli(e.to_string()))
}
