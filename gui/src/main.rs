use std::time::{Duration, Instant};

use anyhow::Context;
use clap::Parser;
use eframe::egui;
use eframe::egui::{Color32, ScrollArea, Ui};
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shared::grid::{CellState, Grid};
use shared::{par_step, seed};

const GRID_ROWS: usize = 50;
const GRID_COLS: usize = 50;
const CELL_SIZE: f32 = 12.0;
const ALIVE_COLOR: Color32 = Color32::WHITE;
const DEAD_COLOR: Color32 = Color32::DARK_GRAY;
const REPORT_EVERY: u64 = 100;

/// Conway's Game of Life on a bounded 50x50 grid.
#[derive(Parser, Debug)]
#[command(name = "gui-of-life")]
struct Args {
    /// Pattern placed in the middle of the grid
    #[arg(long, default_value = "r-pentomino")]
    pattern: String,

    /// Seed a random soup with this share of live cells instead of a pattern
    #[arg(long, value_name = "DENSITY")]
    random: Option<f64>,

    /// RNG seed for --random, for reproducible soups
    #[arg(long)]
    seed: Option<u64>,

    /// Minimum time between generations
    #[arg(long, default_value_t = 100)]
    interval_ms: u64,

    /// Compute each generation on all cores
    #[arg(long)]
    parallel: bool,

    /// Print the built-in patterns and exit
    #[arg(long)]
    list_patterns: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.list_patterns {
        for pattern in seed::PATTERNS {
            println!("{}", pattern.name);
        }
        return Ok(());
    }

    let grid = seed_grid(&args)?;
    info!("seeded {}x{} grid with {} live cells", grid.rows(), grid.cols(), grid.population());

    let app = GuiOfLife::new(grid, Duration::from_millis(args.interval_ms), args.parallel);
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default().with_inner_size([
            CELL_SIZE * GRID_COLS as f32 + 40.0,
            CELL_SIZE * GRID_ROWS as f32 + 100.0,
        ]),
        ..Default::default()
    };

    eframe::run_native("Game of Life GUI", options, Box::new(|_cc| Ok(Box::new(app))))
        .map_err(|err| anyhow::anyhow!("running the window: {err}"))
}

fn seed_grid(args: &Args) -> anyhow::Result<Grid> {
    let grid = Grid::empty(GRID_ROWS, GRID_COLS);
    match args.random {
        Some(density) => {
            let mut rng = match args.seed {
                Some(seed) => StdRng::seed_from_u64(seed),
                None => StdRng::from_os_rng(),
            };
            seed::randomize(grid, &mut rng, density).context("seeding a random soup")
        }
        None => {
            let pattern = seed::find_pattern(&args.pattern).context("choosing the seed pattern")?;
            Ok(pattern.place_centered(grid))
        }
    }
}

fn cell_color(state: CellState) -> Color32 {
    match state {
        CellState::Alive => ALIVE_COLOR,
        CellState::Dead => DEAD_COLOR,
    }
}

struct GuiOfLife {
    grid: Grid,
    population: usize,
    generation: u64,
    interval: Duration,
    last_step: Instant,
    parallel: bool,
    settled: bool,
}

impl GuiOfLife {
    fn new(grid: Grid, interval: Duration, parallel: bool) -> Self {
        Self {
            population: grid.population(),
            grid,
            generation: 0,
            interval,
            last_step: Instant::now(),
            parallel,
            settled: false,
        }
    }

    /// Replace the current generation with the next one once the interval has passed.
    fn update_grid(&mut self) {
        if self.settled || self.last_step.elapsed() < self.interval {
            return;
        }

        let next = if self.parallel { par_step(&self.grid) } else { self.grid.step() };
        self.last_step = Instant::now();

        if next == self.grid {
            self.settled = true;
            info!(
                "grid settled after {} generations with {} live cells",
                self.generation, self.population
            );
            return;
        }

        self.population = next.population();
        self.grid = next;
        self.generation += 1;
        if self.generation % REPORT_EVERY == 0 {
            info!("generation {}: {} live cells", self.generation, self.population);
        }
    }

    fn create_grid(&self, ui: &mut Ui) {
        let (rect, _) = ui.allocate_exact_size(
            egui::vec2(CELL_SIZE * self.grid.cols() as f32, CELL_SIZE * self.grid.rows() as f32),
            egui::Sense::hover(),
        );

        let painter = ui.painter();
        for row in self.grid.row_slices() {
            for cell in row {
                let pos = rect.min + egui::vec2(cell.col() as f32 * CELL_SIZE, cell.row() as f32 * CELL_SIZE);
                painter.rect_filled(
                    egui::Rect::from_min_size(pos, egui::vec2(CELL_SIZE, CELL_SIZE)),
                    CELL_SIZE / 4f32,
                    cell_color(cell.state()),
                );
            }
        }
    }
}

impl eframe::App for GuiOfLife {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.update_grid();

        egui::CentralPanel::default().show(ctx, |ui| {
            ScrollArea::both().show(ui, |ui| {
                ui.heading("Game of Life");
                ui.label(format!(
                    "generation {}, population {}{}",
                    self.generation,
                    self.population,
                    if self.settled { " (settled)" } else { "" }
                ));

                self.create_grid(ui);
            });
        });

        if !self.settled {
            ctx.request_repaint_after(self.interval);
        }
    }
}
