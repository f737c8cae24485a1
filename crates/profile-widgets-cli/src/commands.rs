use super::args::{Cli, Commands, ConfigCommand};
use super::handlers;
use super::handlers::render::RenderContext;
use anyhow::{Context, Result};
use profile_widgets::config::resolve_config_path;
use profile_widgets::{DisplayOptions, PictureOptions, WidgetConfig};

pub fn run(cli: Cli) -> Result<()> {
    let config_path = resolve_config_path(cli.config.as_deref())?;
    if cli.config.is_some() && !config_path.exists() {
        tracing::warn!(path = %config_path.display(), "config file not found, using defaults");
    }
    let config = WidgetConfig::load_from(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    let ctx = RenderContext::new(config, cli.format.into());

    match cli.command {
        Commands::Display {
            user,
            include_full_name,
            hide_link,
            activate,
        } => {
            let user = handlers::user::load(&user)?;
            let options = DisplayOptions {
                include_full_name,
                hide_link,
            };
            handlers::render::display(&ctx, &user, options, activate)
        }

        Commands::Picture {
            user,
            hide_link,
            activate,
        } => {
            let user = handlers::user::load(&user)?;
            handlers::render::picture(&ctx, &user, PictureOptions { hide_link }, activate)
        }

        Commands::Link {
            username,
            text,
            activate,
        } => handlers::render::link(&ctx, &username, text, activate),

        Commands::Config { command } => match command {
            ConfigCommand::Show => handlers::config::show(ctx.config()),
            ConfigCommand::Path => handlers::config::path(&config_path),
        },
    }
}
