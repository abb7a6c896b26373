pub mod commands;
pub mod config;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bloglist")]
#[command(about = "Serve and summarize a list of blogs")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write a .bloglist.toml config in the current directory
    Init(InitArgs),
    /// Run the HTTP API
    Serve(ServeArgs),
    /// Print aggregate statistics for a JSON file of blogs
    Stats(StatsArgs),
}

#[derive(clap::Args)]
pub struct InitArgs {
    /// Address to listen on
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(long)]
    pub port: Option<u16>,

    /// JSON snapshot file for the blog collection
    #[arg(long)]
    pub data_file: Option<String>,

    /// Overwrite an existing config file
    #[arg(long)]
    pub force: bool,
}

#[derive(clap::Args)]
pub struct ServeArgs {
    /// Address to listen on (overrides config)
    #[arg(long, env = "BLOGLIST_HOST")]
    pub host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(long, env = "PORT")]
    pub port: Option<u16>,

    /// JSON snapshot file; blogs are kept in memory only when unset
    #[arg(long, env = "BLOGLIST_DATA_FILE")]
    pub data_file: Option<String>,

    /// Config file to load instead of ./.bloglist.toml
    #[arg(long)]
    pub config: Option<String>,
}

#[derive(clap::Args)]
pub struct StatsArgs {
    /// JSON file containing an array of blogs
    pub file: String,

    /// Only count blogs by this author
    #[arg(long)]
    pub author: Option<String>,
}
