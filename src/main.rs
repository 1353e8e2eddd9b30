mod bell;
mod display;
mod keyboard;
mod level;

use std::io::{stdout, BufWriter, Write};
use std::path::PathBuf;
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};

use star_box::camera::Camera;
use star_box::config::GameConfig;
use star_box::render::Renderer;
use star_box::scenario::Scenario;
use star_box::world::World;

use bell::Bell;
use keyboard::TerminalKeyboard;

/// Frames a key stays down after its last press or repeat, for terminals
/// that never report releases. At 15 FPS this spans about a quarter second,
/// longer than the gap between two OS key repeats.
const HOLD_WINDOW: u64 = 4;

#[derive(Parser, Debug)]
#[command(name = "star_box", about = "A 3D shooter in the terminal")]
struct Args {
    /// TOML configuration file
    #[arg(long)]
    config: Option<PathBuf>,

    /// Seed for explosion debris
    #[arg(long)]
    seed: Option<u64>,

    /// Do not ring the terminal bell
    #[arg(long)]
    mute: bool,
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Returns `true` → quit program, `false` → start over.
///
/// Each frame drains the pending key events into the keyboard, runs one
/// world frame and draws it; the two never overlap.
fn game_loop<W: Write>(
    out: &mut W,
    config: &GameConfig,
    mute: bool,
    rx: &mpsc::Receiver<Event>,
) -> anyhow::Result<bool> {
    let scenario = Scenario::new(level::star_box(), config.world.visible_distances());
    let mut world = World::new(scenario, TerminalKeyboard::new(HOLD_WINDOW), Bell::new(mute), &config.world);

    let projection = config.projection.kind.build(config.projection.distance)?;
    let mut renderer = Renderer::new(
        config.canvas.width,
        config.canvas.height,
        Camera::from_config(&config.camera),
        projection,
    );

    let frame_time = Duration::from_secs_f64(1.0 / f64::from(config.game.fps.max(1)));
    let mut frame: u64 = 0;

    loop {
        let frame_start = Instant::now();
        frame += 1;
        world.keyboard_mut().set_frame(frame);

        // ── Input ───────────────────────────────────────────────────────────────────
        while let Ok(event) = rx.try_recv() {
            let Event::Key(KeyEvent { code, kind, modifiers, .. }) = event else {
                continue; // resize and focus events need no handling
            };
            match kind {
                KeyEventKind::Press => {
                    world.keyboard_mut().press(code);
                    match code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(true),
                        KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => return Ok(true),
                        KeyCode::Char('r') | KeyCode::Char('R') if world.message().is_some() => {
                            return Ok(false);
                        }
                        _ => {}
                    }
                }
                KeyEventKind::Repeat => world.keyboard_mut().press(code),
                KeyEventKind::Release => world.keyboard_mut().release(code),
            }
        }

        world.proceed(-config.game.speed);
        display::render(out, &renderer.render(&world))?;

        let elapsed = frame_start.elapsed();
        if elapsed < frame_time {
            thread::sleep(frame_time - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    let mut config = match &args.config {
        Some(path) => GameConfig::load(path).with_context(|| format!("loading {}", path.display()))?,
        None => GameConfig::default(),
    };
    if let Some(seed) = args.seed {
        config.world.seed = seed;
    }
    // fail before touching the terminal
    config.projection.kind.build(config.projection.distance)?;
    log::info!("starting with {config:?}");

    let mut out = BufWriter::new(stdout());

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Ask for release and repeat events where the terminal supports them.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES))
        .is_ok();

    // Blocking reads happen on their own thread; the loop only polls the channel.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // the game has quit
            }
        }
    });

    let result = run(&mut out, &config, args.mute, &rx);

    // Restore the terminal whatever the outcome
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, config: &GameConfig, mute: bool, rx: &mpsc::Receiver<Event>) -> anyhow::Result<()> {
    loop {
        if game_loop(out, config, mute, rx)? {
            return Ok(());
        }
        log::info!("restarting");
    }
}
