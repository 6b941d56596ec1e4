//! [`Args`] definitions.

use clap::Parser;

/// Server of the deal status board.
#[derive(Debug, Parser)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Path to the TOML file configuring the board, its deals backend and
    /// the server.
    #[arg(short, long, env = "BOARD_CONFIG", default_value = "config.toml")]
    pub config: String,
}

impl Args {
    /// Parses command line arguments, falling back to the `BOARD_CONFIG`
    /// environment variable for the configuration path.
    ///
    /// # Errors
    ///
    /// If command line arguments are malformed, or `--help`/`--version` is
    /// requested.
    pub fn parse() -> Result<Self, clap::Error> {
        <Self as Parser>::try_parse()
    }
}
