use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "regbot")]
#[command(author, version, about = "Telegram bot that collects registration forms and forwards them to a group", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Commands {
    /// Run the bot with long polling (default)
    Run,

    /// Validate the environment configuration and print a summary, then exit
    CheckConfig,
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
