use std::path::PathBuf;

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use bias_reel_blueprint::{export, stylesheet, SiteConfig, BLUEPRINT};

#[derive(Parser, Debug)]
#[command(name = "blueprint-export", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render the page into a static HTML document.
    Build(BuildArgs),
    /// Validate the content tables and the site config without writing anything.
    Check(ConfigArgs),
    /// Print (or write) the stylesheet generated from the theme tokens.
    Stylesheet(StylesheetArgs),
}

#[derive(Parser, Debug)]
struct ConfigArgs {
    /// Site config JSON (metadata and theme overrides).
    #[arg(long)]
    config: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct BuildArgs {
    /// Output HTML path.
    #[arg(long, default_value = "dist/index.html")]
    out: PathBuf,

    #[command(flatten)]
    config: ConfigArgs,
}

#[derive(Parser, Debug)]
struct StylesheetArgs {
    /// Output CSS path; stdout when omitted.
    #[arg(long)]
    out: Option<PathBuf>,

    #[command(flatten)]
    config: ConfigArgs,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bias_reel_blueprint=info,blueprint_export=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Build(args) => cmd_build(args).await,
        Command::Check(args) => cmd_check(args),
        Command::Stylesheet(args) => cmd_stylesheet(args),
    }
}

async fn cmd_build(args: BuildArgs) -> anyhow::Result<()> {
    export::build(&args.out, args.config.config.as_deref(), BLUEPRINT)
        .await
        .with_context(|| format!("build '{}'", args.out.display()))?;
    Ok(())
}

fn cmd_check(args: ConfigArgs) -> anyhow::Result<()> {
    export::load_checked(args.config.as_deref(), &BLUEPRINT)
        .context("validate config and content")?;
    tracing::info!(
        story_beats = BLUEPRINT.story_beats.len(),
        palette = BLUEPRINT.palette.len(),
        typography = BLUEPRINT.typography.len(),
        animation_beats = BLUEPRINT.animation_beats.len(),
        audio = BLUEPRINT.audio_plan.len(),
        specs = BLUEPRINT.technical_specs.len(),
        workflow_steps = BLUEPRINT.workflow_steps.len(),
        "content and config are valid"
    );
    Ok(())
}

fn cmd_stylesheet(args: StylesheetArgs) -> anyhow::Result<()> {
    let config = args.config.config.as_deref();
    match args.out {
        Some(out) => {
            export::build_stylesheet(&out, config)
                .with_context(|| format!("write stylesheet '{}'", out.display()))?;
            tracing::info!(out = %out.display(), "wrote stylesheet");
        }
        None => {
            let site = SiteConfig::load(config).context("load site config")?;
            site.theme.validate().context("validate theme")?;
            print!("{}", stylesheet(&site.theme));
        }
    }
    Ok(())
}
