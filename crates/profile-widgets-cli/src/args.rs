use crate::types::{LogLevel, OutputFormat};
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "profile-widgets")]
#[command(about = "Render user handles, names and avatar badges that link to profile pages", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Config file (defaults to $PROFILE_WIDGETS_CONFIG, then the user config dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    #[arg(long, default_value = "html", global = true)]
    pub format: OutputFormat,

    #[arg(long, default_value = "warn", global = true)]
    pub log_level: LogLevel,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Render a user's optional full name followed by their @handle
    Display {
        #[command(flatten)]
        user: UserArgs,

        #[arg(long)]
        include_full_name: bool,

        #[arg(long)]
        hide_link: bool,

        /// Click the first link and print the navigation it triggers
        #[arg(long)]
        activate: bool,
    },

    /// Render a user's avatar badge
    Picture {
        #[command(flatten)]
        user: UserArgs,

        #[arg(long)]
        hide_link: bool,

        /// Click the badge and print the navigation it triggers
        #[arg(long)]
        activate: bool,
    },

    /// Render arbitrary text as a link to a profile
    Link {
        #[arg(long)]
        username: String,

        /// Link content (defaults to the @handle)
        #[arg(long)]
        text: Option<String>,

        #[arg(long)]
        activate: bool,
    },

    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Print the effective configuration as TOML
    Show,
    /// Print the config file path in use
    Path,
}

#[derive(Args, Debug, Clone)]
pub struct UserArgs {
    /// JSON user record; `-` reads stdin
    #[arg(long, conflicts_with_all = ["username", "first_name", "last_name"])]
    pub user_file: Option<String>,

    #[arg(long)]
    pub username: Option<String>,

    #[arg(long)]
    pub first_name: Option<String>,

    #[arg(long)]
    pub last_name: Option<String>,
}
