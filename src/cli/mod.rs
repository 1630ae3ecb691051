mod sheet;

use crate::error::Result;
use clap::{CommandFactory, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "kaonavi")]
#[command(about = "Request the Kaonavi public API from the command line", long_about = None)]
#[command(
    after_help = "Configuration is read from KAONAVI_CONSUMER_KEY, KAONAVI_CONSUMER_SECRET,\n\
                  KAONAVI_API_ENDPOINT (e.g. https://api.kaonavi.jp/api/v2.0/) and\n\
                  KAONAVI_API_TIMEOUT (seconds, default 30). Missing credentials are\n\
                  prompted for interactively."
)]
#[command(version)]
pub struct Cli {
    /// Fail instead of prompting when a credential is missing from the environment
    #[arg(long, global = true)]
    pub non_interactive: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    pub async fn run(&self) -> Result<()> {
        match &self.command {
            Some(Commands::Sheet { sheet_id }) => {
                sheet::execute(*sheet_id, self.non_interactive).await
            }
            None => {
                Cli::command().print_help()?;
                Ok(())
            }
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Fetch a sheet by its numeric ID
    Sheet {
        /// ID of the sheet to fetch
        sheet_id: u64,
    },
}
