//! Headless host: runs autopiloted sessions and writes frame snapshots.

use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::{info, warn};

use grid_raycaster::autopilot::Autopilot;
use grid_raycaster::{DifficultyLevel, DifficultyTable, GameEngine, GameMode, InputSnapshot};

#[derive(Parser, Debug)]
#[command(name = "grid-raycaster", about = "Run a labyrinth session headless")]
struct Args {
    /// Difficulty preset to play
    #[arg(long, value_enum, default_value_t = DifficultyLevel::Easy)]
    difficulty: DifficultyLevel,

    /// JSON file overriding the difficulty presets
    #[arg(long)]
    config: Option<PathBuf>,

    /// Maximum steps to run
    #[arg(long, default_value_t = 7200)]
    frames: u32,

    /// Seconds per step
    #[arg(long, default_value_t = 1.0 / 60.0)]
    dt: f32,

    /// Directory for PNG snapshots; none are written when unset
    #[arg(long)]
    output: Option<PathBuf>,

    /// Write a snapshot every N steps
    #[arg(long, default_value_t = 120)]
    snapshot_every: u32,

    /// Seed for the procedural sprite textures
    #[arg(long, default_value_t = 0)]
    seed: u64,

    /// Serve puffin profiling data while running
    #[arg(long)]
    profile: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let _profiler = if args.profile {
        let addr = format!("127.0.0.1:{}", puffin_http::DEFAULT_PORT);
        let server = puffin_http::Server::new(&addr)
            .with_context(|| format!("starting profiler server on {addr}"))?;
        puffin::set_scopes_on(true);
        info!(%addr, "puffin server listening");
        Some(server)
    } else {
        None
    };

    let table = match &args.config {
        Some(path) => DifficultyTable::load(path)
            .with_context(|| format!("loading difficulty table {}", path.display()))?,
        None => DifficultyTable::default(),
    };

    if let Some(dir) = &args.output {
        fs::create_dir_all(dir)
            .with_context(|| format!("creating snapshot directory {}", dir.display()))?;
    }

    let mut rng = StdRng::seed_from_u64(args.seed);
    let mut engine = GameEngine::new(table, &mut rng);
    engine.start(args.difficulty);

    let mut pilot = Autopilot::new();
    let snapshot_every = args.snapshot_every.max(1);
    let mut mode = GameMode::Playing;

    for frame in 0..args.frames {
        puffin::GlobalProfiler::lock().new_frame();

        let mut input = match engine.state.as_ref() {
            Some(state) => pilot.drive(state),
            None => InputSnapshot::new(),
        };

        let out = engine.advance(args.dt, &mut input);
        mode = out.mode;

        for note in &out.notifications {
            info!(frame, text = note.text, duration_ms = note.duration_ms, "notification");
        }

        if let Some(dir) = &args.output {
            if frame % snapshot_every == 0 {
                let path = dir.join(format!("frame_{frame:05}.png"));
                out.frame
                    .save(&path)
                    .with_context(|| format!("writing snapshot {}", path.display()))?;
            }
        }

        if mode != GameMode::Playing {
            info!(frame, ?mode, "session ended");
            break;
        }
    }

    if let Some(hud) = engine.hud() {
        info!(
            health = hud.health,
            max_health = hud.max_health,
            has_key = hud.has_key,
            "final state"
        );
    }

    if let Some(dir) = &args.output {
        let path = dir.join("final.png");
        engine
            .frame()
            .save(&path)
            .with_context(|| format!("writing snapshot {}", path.display()))?;
    }

    match mode {
        GameMode::Won => println!("won"),
        GameMode::Lost => println!("lost"),
        _ => {
            warn!(frames = args.frames, "step limit reached before the session ended");
            println!("unfinished");
        }
    }

    Ok(())
}
