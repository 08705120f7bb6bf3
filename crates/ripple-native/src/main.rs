use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use glam::Vec2;

use ripple_core::shade::DisplacementField;
use ripple_core::{FrameReport, RippleConfig, RippleEngine};

/// Drive the ripple engine off-browser on a fixed-step clock.
#[derive(Parser, Debug)]
#[command(name = "ripple-native", version, about)]
struct Args {
    /// Simulated seconds to run.
    #[arg(long, default_value_t = 60.0)]
    seconds: f32,

    /// Frames per simulated second.
    #[arg(long, default_value_t = 60)]
    fps: u32,

    /// Seed for spawn placement.
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Width of the sampled displacement grid.
    #[arg(long, default_value_t = 48)]
    width: usize,

    /// Height of the sampled displacement grid.
    #[arg(long, default_value_t = 24)]
    height: usize,

    /// JSON file with a (partial) ripple config.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Print the last frame's displacement magnitude as text.
    #[arg(long)]
    ascii: bool,

    /// Pointer ripple at `x,y` (normalized) injected after the first second.
    #[arg(long, value_parser = parse_point)]
    poke: Option<Vec2>,
}

fn parse_point(s: &str) -> Result<Vec2, String> {
    let (x, y) = s
        .split_once(',')
        .ok_or_else(|| format!("expected x,y, got {s:?}"))?;
    let x: f32 = x.trim().parse().map_err(|e| format!("bad x: {e}"))?;
    let y: f32 = y.trim().parse().map_err(|e| format!("bad y: {e}"))?;
    Ok(Vec2::new(x, y))
}

fn load_config(path: Option<&PathBuf>) -> anyhow::Result<RippleConfig> {
    let Some(path) = path else {
        return Ok(RippleConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parsing config {}", path.display()))
}

#[derive(Default)]
struct SecondStats {
    spawned: usize,
    pruned: usize,
    evicted: usize,
    peak_live: usize,
    peak_offset: f32,
}

impl SecondStats {
    fn add(&mut self, report: &FrameReport, offset: f32) {
        self.spawned += report.spawned;
        self.pruned += report.pruned;
        self.evicted += report.evicted;
        self.peak_live = self.peak_live.max(report.count);
        self.peak_offset = self.peak_offset.max(offset);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    anyhow::ensure!(args.fps > 0, "--fps must be at least 1");
    anyhow::ensure!(args.width > 0 && args.height > 0, "grid must not be empty");

    let config = load_config(args.config.as_ref())?;
    let mut field = DisplacementField::new(args.width, args.height, config.shading());
    let mut engine = RippleEngine::new(config, args.seed).context("invalid ripple config")?;

    let dt = 1.0 / args.fps as f32;
    let frames = (args.seconds * args.fps as f32).round() as u32;
    let mut stats = SecondStats::default();
    let mut total_spawned = 0;

    for frame in 0..frames {
        let now = frame as f32 * dt;
        if frame == args.fps {
            if let Some(p) = args.poke {
                if !engine.queue_ripple(p) {
                    log::warn!("[native] poke at {p} dropped");
                }
            }
        }
        let report = engine.frame(dt, now, &mut field);
        stats.add(&report, field.max_magnitude());
        total_spawned += report.spawned;

        if (frame + 1) % args.fps == 0 {
            log::info!(
                "[t={:>6.1}s] live={} spawned={} pruned={} evicted={} max_offset={:.5}",
                now,
                stats.peak_live,
                stats.spawned,
                stats.pruned,
                stats.evicted,
                stats.peak_offset
            );
            stats = SecondStats::default();
        }
    }

    log::info!(
        "done: {frames} frames, {total_spawned} ripples spawned, {} live at end",
        engine.params().count()
    );
    if args.ascii {
        print_field(&field);
    }
    Ok(())
}

fn print_field(field: &DisplacementField) {
    const RAMP: &[u8] = b" .:-=+*#%@";
    let peak = field.max_magnitude().max(f32::EPSILON);
    for y in 0..field.height() {
        let row: String = (0..field.width())
            .map(|x| {
                let m = field.get(x, y).map(|o| o.length()).unwrap_or(0.0) / peak;
                let idx = ((m * (RAMP.len() - 1) as f32).round() as usize).min(RAMP.len() - 1);
                RAMP[idx] as char
            })
            .collect();
        println!("{row}");
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .parse_default_env()
        .init();
    run(Args::parse())
}
