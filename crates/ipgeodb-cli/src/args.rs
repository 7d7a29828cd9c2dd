use clap::{Parser, Subcommand};

/// CLI arguments for ipgeodb-cli
#[derive(Debug, Parser)]
#[command(
    name = "ipgeodb",
    version,
    about = "CLI for querying a segmented IP geolocation database"
)]
pub struct CliArgs {
    /// Path to the database directory (default: ./database)
    #[arg(short = 'd', long = "database", global = true)]
    pub database: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Look up geolocation data for an IP address
    Query {
        /// IPv4 or IPv6 address (e.g. 1.2.3.4, 2001:db8::1)
        address: String,

        /// Print the result as JSON instead of text
        #[cfg(feature = "json")]
        #[arg(long)]
        json: bool,
    },

    /// Show the index files a lookup for an address would start from
    Files {
        /// IPv4 or IPv6 address
        address: String,
    },
}
