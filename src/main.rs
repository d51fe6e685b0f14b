mod display;

use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    cursor,
    event::{self, Event, KeyEvent, KeyEventKind},
    terminal, ExecutableCommand,
};
use log::info;

use crossing_game::config::SessionConfig;
use crossing_game::input::{direction_for_key, should_quit};
use crossing_game::rng::{RandomSource, RngSource};
use crossing_game::session::Session;

use display::TerminalCanvas;

const FRAME: Duration = Duration::from_millis(33); // ≈30 FPS

// ── Game loop ─────────────────────────────────────────────────────────────────

/// Runs until a quit key arrives or the input thread goes away.
///
/// Key presses are queued on the session as soon as they are drained from
/// the channel; they take effect at the start of the following update.
fn game_loop<W: Write>(
    canvas: &mut TerminalCanvas<W>,
    session: &mut Session,
    rx: &mpsc::Receiver<Event>,
) -> Result<()> {
    let mut last_frame = Instant::now();

    loop {
        let frame_start = Instant::now();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        loop {
            match rx.try_recv() {
                Ok(Event::Key(key @ KeyEvent { kind: KeyEventKind::Press, .. })) => {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(direction) = direction_for_key(key.code) {
                        session.queue_input(direction);
                    }
                }
                Ok(_) => {}
                Err(mpsc::TryRecvError::Empty) => break,
                Err(mpsc::TryRecvError::Disconnected) => return Ok(()),
            }
        }

        let dt = last_frame.elapsed().as_secs_f64();
        last_frame = Instant::now();

        let report = session.update(dt);
        if report.pickups_collected > 0 || report.player_resets > 0 {
            info!("{:?} score={}", report, session.score());
        }

        canvas.begin_frame()?;
        session.render(canvas)?;
        canvas.finish_frame()?;

        let elapsed = frame_start.elapsed();
        if elapsed < FRAME {
            thread::sleep(FRAME - elapsed);
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let config = SessionConfig::from_env().context("loading session config")?;
    let rng: Box<dyn RandomSource> = match config.seed {
        Some(seed) => Box::new(RngSource::seeded(seed)),
        None => Box::new(RngSource::from_entropy()),
    };
    let mut session = Session::new(&config, rng).context("starting session")?;
    info!("session config: {:?}", config);

    let mut out = BufWriter::new(stdout());
    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let mut canvas = TerminalCanvas::new(out);
    let result = game_loop(&mut canvas, &mut session, &rx);

    // Always restore the terminal
    let out = canvas.writer();
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    info!("final score {}", session.score());
    result
}
