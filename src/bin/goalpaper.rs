use std::{net::SocketAddr, path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "goalpaper", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Serve wallpapers over HTTP.
    Serve(ServeArgs),
    /// Render a single wallpaper as a PNG.
    Render(RenderArgs),
}

#[derive(Parser, Debug)]
struct CommonArgs {
    /// Custom font file (falls back to $GOALPAPER_FONT, then assets/Inter-Medium.ttf, then a
    /// system sans-serif face).
    #[arg(long)]
    font: Option<PathBuf>,

    /// Offset from UTC, in minutes, used to decide what "today" is.
    #[arg(long, default_value_t = goalpaper::DEFAULT_UTC_OFFSET_MINUTES, allow_hyphen_values = true)]
    utc_offset_minutes: i32,
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Listen address.
    #[arg(long, default_value = goalpaper::server::DEFAULT_BIND)]
    bind: SocketAddr,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Parser, Debug)]
struct RenderArgs {
    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Title text.
    #[arg(long)]
    goal: Option<String>,

    /// Range start (YYYY-MM-DD); defaults to today.
    #[arg(long)]
    start_date: Option<String>,

    /// Range end (YYYY-MM-DD); defaults to three months from today.
    #[arg(long)]
    goal_date: Option<String>,

    /// Canvas width in pixels.
    #[arg(long, allow_hyphen_values = true)]
    width: Option<String>,

    /// Canvas height in pixels.
    #[arg(long, allow_hyphen_values = true)]
    height: Option<String>,

    /// Palette: dark, light, midnight, forest or sunset.
    #[arg(long)]
    theme: Option<String>,

    /// Hex color (RRGGBB) for today's dot and the stats highlight.
    #[arg(long)]
    accent: Option<String>,

    /// Pixels excluded from the top of the safe zone.
    #[arg(long, allow_hyphen_values = true)]
    top_padding: Option<String>,

    /// Pixels excluded from the bottom of the safe zone.
    #[arg(long, allow_hyphen_values = true)]
    bottom_padding: Option<String>,

    /// Grid, font and resolution multiplier.
    #[arg(long, allow_hyphen_values = true)]
    scale: Option<String>,

    #[command(flatten)]
    common: CommonArgs,
}

impl RenderArgs {
    fn params(&self) -> goalpaper::WallpaperParams {
        goalpaper::WallpaperParams {
            goal: self.goal.clone(),
            start_date: self.start_date.clone(),
            goal_date: self.goal_date.clone(),
            width: self.width.clone(),
            height: self.height.clone(),
            theme: self.theme.clone(),
            accent: self.accent.clone(),
            top_padding: self.top_padding.clone(),
            bottom_padding: self.bottom_padding.clone(),
            scale: self.scale.clone(),
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Serve(args) => cmd_serve(args),
        Command::Render(args) => cmd_render(args),
    }
}

fn today_policy(common: &CommonArgs) -> anyhow::Result<goalpaper::TodayPolicy> {
    Ok(goalpaper::TodayPolicy::from_offset_minutes(
        common.utc_offset_minutes,
    )?)
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let config = goalpaper::server::ServerConfig {
        bind: args.bind,
        font_path: args.common.font.clone(),
        today: today_policy(&args.common)?,
    };

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("build tokio runtime")?;
    runtime.block_on(goalpaper::server::serve(config))
}

fn cmd_render(args: RenderArgs) -> anyhow::Result<()> {
    let today = today_policy(&args.common)?;
    let fonts = goalpaper::FontBook::load_default(args.common.font.as_deref());
    let renderer = goalpaper::WallpaperRenderer::new(Arc::new(fonts), today);

    let today = renderer.today();
    let config = args.params().resolve(today)?;
    let png = renderer.render_at(&config, today)?;

    if let Some(parent) = args.out.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    std::fs::write(&args.out, &png)
        .with_context(|| format!("write png '{}'", args.out.display()))?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}
