//! folio - Entry Point

use clap::Parser;
use folio::config::{self, THEME_AURORA, THEME_MIDNIGHT, THEME_PAPER};
use folio::model::Portfolio;
use folio::state::AppState;
use folio::view::{self, ColorConfig, Theme, ViewOptions};
use std::path::PathBuf;
use std::time::Instant;
use tracing::info;

/// folio - an animated portfolio in the terminal
#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(version)]
#[command(about = "Animated single-page portfolio for the terminal")]
pub struct Args {
    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Color theme
    #[arg(long, value_parser = [THEME_AURORA, THEME_MIDNIGHT, THEME_PAPER])]
    pub theme: Option<String>,

    /// Skip the loading splash
    #[arg(long)]
    pub no_intro: bool,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// TOML file with the portfolio content
    #[arg(long)]
    pub content: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = config::load_config_with_precedence(args.config.clone())?;
        let merged = config::merge_config(config_file);
        let with_env = config::apply_env_overrides(merged);

        let intro_override = if args.no_intro { Some(false) } else { None };
        config::apply_cli_overrides(with_env, args.theme.clone(), intro_override, args.content.clone())
    };

    // Dropping the guard flushes pending log lines
    let _log_guard = folio::logging::init(&config.log_file_path)?;

    info!(
        config = ?config,
        "Configuration loaded and resolved"
    );

    let portfolio = match &config.content_file {
        Some(path) => Portfolio::load(path)?,
        None => Portfolio::default(),
    };

    let theme = Theme::from_name(&config.theme, ColorConfig::from_env_and_args(args.no_color));
    let state = AppState::new(
        portfolio,
        config.animation_settings(),
        config.intro,
        Instant::now(),
    )?;

    view::run(state, ViewOptions::new(theme, config.frame_interval()))?;

    info!("Exited cleanly");
    Ok(())
}
