use std::io::{stdout, BufWriter, Write};
use std::sync::mpsc;
use std::thread;
use std::time::{Duration, Instant};

use anyhow::Context;
use crossterm::{
    cursor,
    event::{
        self, Event, KeyCode, KeyEvent, KeyModifiers, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::Rng;

use space_patrol::assets;
use space_patrol::display::{self, Canvas, TermCanvas};
use space_patrol::input::KeyTracker;
use space_patrol::scheduler::Scheduler;
use space_patrol::tasks::{BlinkTask, CaptionTask, EpochClockTask, ShipTask, SpawnerTask};
use space_patrol::world::World;

/// One scheduling step of the whole system.
const TIC: Duration = Duration::from_millis(100);

const STARS: usize = 80;
const STAR_SYMBOLS: [char; 4] = ['*', '+', '.', ':'];

fn main() -> anyhow::Result<()> {
    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode()?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(terminal::Clear(terminal::ClearType::All))?;

    // Request key-release events where the terminal supports them; classic
    // terminals fall back to the key-repeat hold window.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread to blocking event reads so the tick loop never
    // blocks on input.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || loop {
        match event::read() {
            Ok(ev) => {
                if tx.send(ev).is_err() {
                    break;
                }
            }
            Err(_) => break,
        }
    });

    let result = run(&mut out, &rx);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result
}

fn run<W: Write>(out: &mut W, rx: &mpsc::Receiver<Event>) -> anyhow::Result<()> {
    let assets = assets::load().context("loading sprite frames")?;

    let (cols, rows) = terminal::size().context("reading terminal size")?;
    let mut canvas = TermCanvas::new(out, rows, cols);
    let mut world = World::new(rows, cols, rand::random());
    let mut scheduler = Scheduler::new();

    display::draw_border(&mut canvas)?;

    let field = world.field;
    for _ in 0..STARS {
        let row = world.rng.gen_range(field.top()..field.bottom());
        let col = world.rng.gen_range(field.left()..field.right());
        let symbol = STAR_SYMBOLS[world.rng.gen_range(0..STAR_SYMBOLS.len())];
        let offset = world.rng.gen_range(0..20);
        scheduler.admit(Box::new(BlinkTask::new(row, col, symbol, offset)));
    }

    scheduler.admit(Box::new(ShipTask::new(
        &field,
        assets.ship,
        assets.explosion.clone(),
        assets.game_over.clone(),
    )));
    scheduler.admit(Box::new(SpawnerTask::new(
        assets.garbage,
        assets.explosion,
    )));
    scheduler.admit(Box::new(EpochClockTask::new()));
    scheduler.admit(Box::new(CaptionTask::new()));

    let mut tracker = KeyTracker::new();

    loop {
        let tick_start = Instant::now();

        while let Ok(ev) = rx.try_recv() {
            if let Event::Key(key @ KeyEvent { code, modifiers, .. }) = ev {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                    KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                        return Ok(());
                    }
                    _ => tracker.record(&key),
                }
            }
        }

        let intent = tracker.intent();
        scheduler.tick(&mut world, &mut canvas, intent)?;
        canvas.present()?;
        tracker.advance();

        let elapsed = tick_start.elapsed();
        if elapsed < TIC {
            thread::sleep(TIC - elapsed);
        }
    }
}
