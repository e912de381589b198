mod app;
mod braille;
mod particle;
mod rules;
mod run;
mod simulation;
mod surface;
mod ui;
mod vec2;

use app::App;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use ratatui::{backend::CrosstermBackend, Terminal};
use run::{world_bounds, Run, WORLD_COUNT};
use std::io;
use std::time::Duration;
use surface::{NullSurface, Surface};

#[derive(Parser, Debug)]
#[command(name = "particle-life")]
#[command(about = "Particle-life simulation in the terminal")]
struct Args {
    /// Run the full schedule without a terminal UI and print the records
    #[arg(long, default_value = "false")]
    headless: bool,

    /// RNG seed for a reproducible run (random when omitted)
    #[arg(long)]
    seed: Option<u64>,
}

fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let mut rng = make_rng(args.seed);

    if args.headless {
        run_headless(&mut rng);
        return Ok(());
    }

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Get initial terminal size and create app
    let size = terminal.size()?;
    let frame_rect = ratatui::layout::Rect {
        x: 0,
        y: 0,
        width: size.width,
        height: size.height,
    };
    let (canvas_width, canvas_height) = ui::world_canvas_size(frame_rect);
    let mut app = App::new(canvas_width, canvas_height, &mut rng);

    // Run the app
    let res = run_app(&mut terminal, &mut app);

    // Cleanup
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    match res {
        Err(err) => eprintln!("Error: {:?}", err),
        // Leaving the alternate screen discards the sidebar, so repeat
        // the records on the regular terminal
        Ok(()) => print_records(&app.run),
    }

    Ok(())
}

/// Drive the full tick schedule against discarding surfaces and print
/// each world's records.
fn run_headless(rng: &mut StdRng) {
    let surfaces = (0..WORLD_COUNT)
        .map(|_| NullSurface::new(world_bounds()))
        .collect();
    let mut run = Run::new(surfaces, rng);
    while !run.is_finished() {
        run.advance();
    }
    print_records(&run);
}

/// End-of-run records: one summary line and one VAR-tagged deviation
/// line per world that finished sampling.
fn print_records<S: Surface>(run: &Run<S>) {
    for (index, world) in run.worlds().iter().enumerate() {
        if let Some(report) = world.sim.report() {
            println!(
                "world {}: mean stability {:.3} over {} samples",
                index + 1,
                report.mean,
                report.samples
            );
            println!("VAR {}", report.std_dev);
        }
    }
}

fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> io::Result<()> {
    // One tick per displayed frame, targeting ~60fps
    const FRAME_DURATION: Duration = Duration::from_millis(16);

    loop {
        // Render current state
        terminal.draw(|frame| ui::render(frame, app))?;

        // Poll for events with timeout
        if event::poll(FRAME_DURATION)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only process Press events
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }

                    // Handle Ctrl+C
                    if key.code == KeyCode::Char('c')
                        && key.modifiers.contains(KeyModifiers::CONTROL)
                    {
                        return Ok(());
                    }

                    match key.code {
                        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => return Ok(()),
                        _ => {}
                    }
                }
                Event::Resize(width, height) => {
                    let (canvas_width, canvas_height) =
                        ui::world_canvas_size(ratatui::layout::Rect {
                            x: 0,
                            y: 0,
                            width,
                            height,
                        });
                    app.resize(canvas_width, canvas_height);
                }
                _ => {}
            }
        }

        // Advance the run; once finished this is a no-op and the final
        // frame stays up until the user quits
        app.tick();
    }
}
