use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub const DEFAULT_HOSTNAME: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 3000;

#[derive(Parser, Debug)]
#[command(name = "devops-assessment", version, about = "DevOps Assessment page server")]
pub struct Cli {
    #[arg(
        long,
        global = true,
        env = "HOSTNAME",
        default_value = DEFAULT_HOSTNAME,
        help = "Interface or host name to bind"
    )]
    pub hostname: String,
    #[arg(long, global = true, env = "PORT", default_value_t = DEFAULT_PORT, help = "Port to listen on")]
    pub port: u16,
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq)]
pub enum Commands {
    /// Serve the page over HTTP (default)
    Serve,
    /// Render the page once and write the HTML document
    Render {
        #[arg(long, short, help = "Write to this file instead of stdout")]
        output: Option<PathBuf>,
    },
}
