use anyhow::{Context, Result, anyhow, bail};
use clap::{Parser, Subcommand};
use folio::AppError;
use folio::config::{self, ConfigLoadResult};
use folio::logger;
use folio::services::build_theme_store;
use folio::theme::{
    StyleVariables, ThemeChange, ThemeContext, ThemeSelector, catalog, import::load_palette,
};
use std::{fs, path::PathBuf, sync::Arc};

#[derive(Parser)]
#[command(name = "folio", about = "Theme management for the Folio portfolio site")]
struct Cli {
    /// Configuration file (defaults to ./config.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Inspect or change the site theme
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum ThemeAction {
    /// List selectable themes, marking the current one
    List,
    /// Show the current theme and its palette
    Current {
        /// Print the theme as JSON
        #[arg(long)]
        json: bool,
    },
    /// Select a catalog theme by name or id
    Set { theme: String },
    /// Write the current theme as a `:root` style block
    Css {
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// List persisted theme records
    Rows,
    /// Select a theme from a TOML palette file
    Import { file: PathBuf },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let app_config = match config::load_config(cli.config.as_deref()) {
        ConfigLoadResult::Success(config) => config,
        ConfigLoadResult::LoadError(msg) | ConfigLoadResult::DeserializeError(msg) => {
            bail!(msg)
        }
    };
    logger::setup_logger(app_config.logging()).context("Failed to initialize logger")?;

    let store = build_theme_store(app_config.store())?;
    let surface = Arc::new(StyleVariables::new());
    let context = Arc::new(ThemeContext::new(store, surface.clone()));

    match cli.command {
        Command::Theme { action } => run_theme(action, context, surface).await,
    }
}

async fn run_theme(
    action: ThemeAction,
    context: Arc<ThemeContext>,
    surface: Arc<StyleVariables>,
) -> Result<()> {
    // Same order as the site: resolve the persisted theme before anything else
    if !matches!(action, ThemeAction::Rows) {
        context.initialize().await;
    }

    match action {
        ThemeAction::List => {
            let mut selector = ThemeSelector::new(context.clone());
            selector.focus_current().await;
            match selector.current_name().await {
                Some(name) => println!("Current theme: {name}"),
                None => println!("No theme is current"),
            }
            for line in selector.render_lines().await {
                println!("{line}");
            }
        }
        ThemeAction::Current { json } => {
            let theme = context.require_current().await?;
            if json {
                println!("{}", serde_json::to_string_pretty(&theme)?);
                return Ok(());
            }
            println!("{} ({})", theme.name, theme.id);
            for (role, value) in theme.colors.atomic() {
                println!("  {:<16} {value}", role.as_str());
            }
            println!("  {:<16} {}", "gradient", theme.colors.gradient);
        }
        ThemeAction::Set { theme } => {
            let index = catalog::lookup(&theme)
                .and_then(|wanted| context.themes().iter().position(|t| t.id == wanted.id))
                .ok_or_else(|| anyhow!("Unknown theme '{theme}'. Run `folio theme list`."))?;
            let mut selector = ThemeSelector::new(context.clone());
            if let Some(change) = selector.select(index).await {
                let current = context.require_current().await?;
                println!("{}", describe_change(&current.name, &change));
            }
        }
        ThemeAction::Css { output } => {
            if surface.is_empty() {
                bail!("No theme could be resolved; check the log for theme store errors");
            }
            let css = surface.to_css();
            match output {
                Some(path) => fs::write(&path, css)
                    .with_context(|| format!("Failed to write {}", path.display()))?,
                None => print!("{css}"),
            }
        }
        ThemeAction::Import { file } => {
            let theme = load_palette(&file)?;
            let name = theme.name.clone();
            let change = context.set_theme(theme).await;
            println!("{}", describe_change(&name, &change));
        }
        ThemeAction::Rows => {
            let rows = context
                .store()
                .list_themes()
                .await
                .map_err(AppError::from)?;
            if rows.is_empty() {
                println!("No theme records persisted");
            }
            for row in rows {
                let marker = if row.is_active { '*' } else { ' ' };
                println!("{marker} {:<12} {}", row.name, row.id);
            }
        }
    }

    Ok(())
}

fn describe_change(name: &str, change: &ThemeChange) -> String {
    match change {
        ThemeChange::Inserted { id } => format!("Selected {name} (new record {id})"),
        ThemeChange::Updated { id } => format!("Selected {name} (updated record {id})"),
        ThemeChange::PersistFailed { step } => {
            format!("Selected {name} for this session only; saving failed at {step:?}")
        }
    }
}
