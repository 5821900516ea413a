//! Dynamic resize demo host.
//!
//! Loads the autoscaler configuration and drives an [`Autoscaler`]:
//!
//! - with the `raylib` feature, against a resizable raylib window whose render
//!   texture plays the game's canvas;
//! - otherwise (or with `--simulate`), headless, feeding it randomized bursts
//!   of resize notifications and logging every surface resize.
//!
//! # Running
//!
//! ```sh
//! cargo run -- --plugins demos/js/plugins.js --simulate 5
//! cargo run --release --features raylib -- --config demos/config.ini
//! ```

use clap::Parser;
use dynamicresize::autoscaler::Autoscaler;
use dynamicresize::host::WindowEvents;
use dynamicresize::host::parameters::{DEFAULT_PLUGIN_NAME, PluginParameters};
use dynamicresize::resources::autoscaleconfig::{AutoscaleConfig, ConfigError};
use log::info;
use std::path::PathBuf;
use std::time::Duration;

/// Simulated frame length for headless runs.
const SIM_FRAME: Duration = Duration::from_millis(16);
/// Bursts simulated when no window is available and none were requested.
const DEFAULT_SIM_BURSTS: u32 = 5;

/// Dynamic Resize
#[derive(Parser)]
#[command(version, about = "Keeps a game's render surface fitted to its window")]
struct Cli {
    /// RPG Maker style plugins.js manifest to read parameters from.
    #[arg(long, value_name = "PATH", conflicts_with = "config")]
    plugins: Option<PathBuf>,

    /// INI file with an [autoscale] section to read parameters from.
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Plugin entry to look up in the manifest.
    #[arg(long, value_name = "NAME", default_value = DEFAULT_PLUGIN_NAME)]
    plugin_name: String,

    /// Run headless, simulating this many bursts of window resizes.
    #[arg(long, value_name = "BURSTS")]
    simulate: Option<u32>,

    /// Seed for the simulated resize bursts.
    #[arg(long)]
    seed: Option<u64>,
}

fn load_config(cli: &Cli) -> Result<AutoscaleConfig, ConfigError> {
    let params = if let Some(path) = &cli.plugins {
        PluginParameters::load_plugins_js(path, &cli.plugin_name)?
    } else if let Some(path) = &cli.config {
        PluginParameters::load_ini(path)?
    } else {
        info!("No parameter source given, using defaults");
        PluginParameters::new()
    };
    AutoscaleConfig::from_parameters(&params)
}

/// Feed `bursts` bursts of random resizes, each followed by enough idle
/// frames for the debounce timer to fire.
fn simulate(config: AutoscaleConfig, bursts: u32, seed: u64) {
    let mut rng = fastrand::Rng::with_seed(seed);
    let mut window = WindowEvents::new();
    let mut autoscaler = Autoscaler::new(config, |w: u32, h: u32| {
        println!("resize_surface({}, {})", w, h);
    });
    autoscaler.attach(&mut window);

    let (mut win_w, mut win_h) = (rng.u32(640..=2560), rng.u32(480..=1440));
    window.emit_ready(win_w, win_h);
    autoscaler.tick(Duration::ZERO);

    let settle = config.resize_delay + SIM_FRAME;
    for burst in 0..bursts {
        let events = rng.u32(1..=12);
        info!("Burst {}: {} resize notifications", burst + 1, events);
        for _ in 0..events {
            win_w = win_w.saturating_add_signed(rng.i32(-120..=120)).clamp(320, 3840);
            win_h = win_h.saturating_add_signed(rng.i32(-80..=80)).clamp(240, 2160);
            window.emit_resize(win_w, win_h);
            autoscaler.tick(SIM_FRAME);
        }

        let mut idle = Duration::ZERO;
        while autoscaler.is_pending() && idle <= settle {
            autoscaler.tick(SIM_FRAME);
            idle += SIM_FRAME;
        }
    }

    info!(
        "Simulation finished after {:?}, final surface {:?} for window {}x{}",
        autoscaler.elapsed(),
        autoscaler.surface_size(),
        win_w,
        win_h
    );
}

#[cfg(feature = "raylib")]
fn run_window(config: AutoscaleConfig) -> Result<(), String> {
    use dynamicresize::host::raylib::{
        PendingSurfaceSize, RenderTarget, draw_frame, poll_window_events, window_inner_size,
    };
    use log::warn;

    let (mut rl, thread) = raylib::init()
        .size(config.base_width as i32, config.base_height as i32)
        .resizable()
        .title("Dynamic Resize")
        .build();
    rl.set_target_fps(60);

    let mut target = RenderTarget::new(&mut rl, &thread, config.base_width, config.base_height)?;
    let pending = PendingSurfaceSize::default();

    let mut window = WindowEvents::new();
    let mut autoscaler = Autoscaler::new(config, pending.clone());
    autoscaler.attach(&mut window);

    let (w, h) = window_inner_size(&rl);
    window.emit_ready(w, h);

    // --------------- Main loop ---------------
    while !rl.window_should_close() {
        poll_window_events(&rl, &mut window);
        autoscaler.tick(Duration::from_secs_f32(rl.get_frame_time()));

        if let Some((w, h)) = pending.take() {
            if w == 0 || h == 0 {
                warn!("Skipping {}x{} surface, window is collapsed", w, h);
            } else {
                target.recreate(&mut rl, &thread, w, h)?;
            }
        }

        draw_frame(&mut rl, &thread, &mut target);
    }

    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    };

    let seed = cli.seed.unwrap_or_else(|| fastrand::u64(..));

    #[cfg(feature = "raylib")]
    {
        if cli.simulate.is_none() {
            if let Err(e) = run_window(config) {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
            return;
        }
    }

    info!("Simulating with seed {}", seed);
    simulate(config, cli.simulate.unwrap_or(DEFAULT_SIM_BURSTS), seed);
}
