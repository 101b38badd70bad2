use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::Context as _;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "catvid", version)]
struct Cli {
    #[command(subcommand)]
    cmd: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a single frame of the sequence as a PNG.
    Frame(FrameArgs),
    /// Generate the sequence and loop it in real time for a number of ticks.
    Play(PlayArgs),
    /// Print the idle page.
    View(ViewArgs),
}

#[derive(Parser, Debug)]
struct FrameArgs {
    /// Frame index (0-based).
    #[arg(long)]
    index: u64,

    /// Output PNG path.
    #[arg(long)]
    out: PathBuf,

    /// Sparkle seed (defaults to the clock).
    #[arg(long)]
    seed: Option<u64>,
}

#[derive(Parser, Debug)]
struct PlayArgs {
    /// Ticks to play before stopping.
    #[arg(long, default_value_t = 90)]
    ticks: u64,

    /// Sparkle seed (defaults to the clock).
    #[arg(long)]
    seed: Option<u64>,

    /// Save the surface as drawn by the last tick.
    #[arg(long)]
    snapshot: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct ViewArgs {
    /// Print as JSON instead of text.
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    match cli.cmd {
        Command::Frame(args) => cmd_frame(args),
        Command::Play(args) => cmd_play(args),
        Command::View(args) => cmd_view(args),
    }
}

fn cmd_frame(args: FrameArgs) -> anyhow::Result<()> {
    let cfg = catvid::AnimatorConfig::default();
    let seed = args.seed.unwrap_or_else(catvid::seed_from_clock);
    let mut backend = catvid::create_backend(catvid::BackendKind::Cpu);

    let frame = catvid::render_single_frame(
        &cfg,
        backend.as_mut(),
        catvid::FrameIndex(args.index),
        seed,
    )?;
    write_png(&args.out, &frame)?;

    eprintln!("wrote {}", args.out.display());
    Ok(())
}

fn cmd_play(args: PlayArgs) -> anyhow::Result<()> {
    let cfg = catvid::AnimatorConfig::default();
    let seed = args.seed.unwrap_or_else(catvid::seed_from_clock);
    let surface = catvid::PixelSurface::new(cfg.canvas);
    let mut animator = catvid::Animator::new(
        cfg,
        catvid::create_backend(catvid::BackendKind::Cpu),
        catvid::IntervalTimers::new(),
        surface,
        seed,
    )?;

    match animator.start() {
        catvid::StartOutcome::Playing => {}
        catvid::StartOutcome::Failed | catvid::StartOutcome::Ignored => {
            eprintln!("{}", animator.view());
            anyhow::bail!(
                "{}",
                animator.error().unwrap_or("animator did not start playing")
            );
        }
    }
    tracing::info!(seed, ticks = args.ticks, "playing");

    // The redraw timer was registered at clock zero, which we pin to now.
    let origin = Instant::now();
    let mut drawn = 0u64;
    while drawn < args.ticks {
        let Some(deadline) = animator.timers().next_deadline() else {
            break;
        };
        let elapsed = origin.elapsed();
        if deadline > elapsed {
            std::thread::sleep(deadline - elapsed);
        }
        drawn += animator.pump(origin.elapsed());
    }

    let last = animator.surface().last_drawn();
    animator.stop();
    tracing::info!(drawn, last_frame = ?last.map(|f| f.0), "stopped");

    if let Some(path) = &args.snapshot {
        write_png(path, animator.surface().pixels())?;
        eprintln!("wrote {}", path.display());
    }
    Ok(())
}

fn cmd_view(args: ViewArgs) -> anyhow::Result<()> {
    let view = catvid::ViewModel::for_state(catvid::Phase::Idle, None);
    if args.json {
        println!(
            "{}",
            serde_json::to_string_pretty(&view).context("serialize view")?
        );
    } else {
        println!("{view}");
    }
    Ok(())
}

fn write_png(path: &Path, frame: &catvid::FrameRGBA) -> anyhow::Result<()> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    let png = catvid::encode_png(frame)?;
    std::fs::write(path, png).with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}
