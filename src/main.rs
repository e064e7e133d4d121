use crossterm::cursor::{Hide, MoveTo, Show};
use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, Clear, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{ExecutableCommand, QueueableCommand};
use neon_labyrinth::{format_clock, Difficulty, Direction, Session, Settings, Tile, TileMap};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::io::{self, Stdout, Write};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

const CELL_W: usize = 2;

#[derive(Clone, Copy, PartialEq)]
enum Glyph {
    Player,
    Goal,
    Wall,
    Floor,
}

#[derive(Clone, Copy, PartialEq)]
struct Cell {
    glyph: Glyph,
    color: Color,
}

enum Command {
    Move(Direction),
    Restart,
    Select(Difficulty),
    Quit,
}

struct Game {
    session: Session,
    tiles: TileMap,
    difficulty: Difficulty,
    rng: StdRng,
}

impl Game {
    fn new(settings: &Settings) -> io::Result<Self> {
        let mut rng = match settings.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let session = new_session(settings.difficulty, &mut rng)?;
        Ok(Self {
            tiles: TileMap::from_maze(session.maze()),
            session,
            difficulty: settings.difficulty,
            rng,
        })
    }

    fn restart(&mut self, difficulty: Difficulty) -> io::Result<()> {
        self.session = new_session(difficulty, &mut self.rng)?;
        self.tiles = TileMap::from_maze(self.session.maze());
        self.difficulty = difficulty;
        Ok(())
    }
}

struct Renderer {
    last: Vec<Cell>,
    last_hud: String,
    needs_full: bool,
    origin_x: u16,
    origin_y: u16,
}

impl Renderer {
    fn new(width: usize, height: usize) -> Self {
        Self {
            last: vec![
                Cell {
                    glyph: Glyph::Floor,
                    color: Color::Reset,
                };
                width * height
            ],
            last_hud: String::new(),
            needs_full: true,
            origin_x: 0,
            origin_y: 1,
        }
    }
}

fn main() -> io::Result<()> {
    let settings = Settings::from_env();
    let mut stdout = io::stdout();
    terminal::enable_raw_mode()?;
    stdout.execute(EnterAlternateScreen)?;
    stdout.execute(Hide)?;

    let result = run(&mut stdout, &settings);

    stdout.execute(Show)?;
    stdout.execute(LeaveAlternateScreen)?;
    terminal::disable_raw_mode()?;

    match &result {
        Ok(game) => eprintln!("{}", summary(game, &settings)),
        Err(err) => eprintln!("labyrinth: {err}"),
    }
    result.map(|_| ())
}

fn run(stdout: &mut Stdout, settings: &Settings) -> io::Result<Game> {
    let mut game = Game::new(settings)?;
    let mut renderer = Renderer::new(game.tiles.width(), game.tiles.height());
    let frame_time = Duration::from_micros(1_000_000 / settings.fps.max(1));

    loop {
        render(stdout, &game, &mut renderer)?;
        if !event::poll(frame_time)? {
            continue;
        }
        let command = match event::read()? {
            Event::Key(key) => match key.kind {
                KeyEventKind::Press | KeyEventKind::Repeat => command_for(key.code),
                _ => None,
            },
            Event::Resize(_, _) => {
                renderer.needs_full = true;
                None
            }
            _ => None,
        };
        match command {
            Some(Command::Quit) => return Ok(game),
            Some(Command::Move(dir)) => {
                game.session.attempt_move(dir);
            }
            Some(Command::Restart) => {
                let difficulty = game.difficulty;
                game.restart(difficulty)?;
                renderer = Renderer::new(game.tiles.width(), game.tiles.height());
            }
            Some(Command::Select(difficulty)) => {
                game.restart(difficulty)?;
                renderer = Renderer::new(game.tiles.width(), game.tiles.height());
            }
            None => {}
        }
    }
}

fn new_session(difficulty: Difficulty, rng: &mut StdRng) -> io::Result<Session> {
    let (cols, rows) = difficulty.dimensions();
    Ok(Session::generate(cols, rows, difficulty.braid_factor(), rng)?)
}

fn command_for(code: KeyCode) -> Option<Command> {
    let command = match code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('k') => Command::Move(Direction::North),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('l') => Command::Move(Direction::East),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('j') => Command::Move(Direction::South),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('h') => Command::Move(Direction::West),
        KeyCode::Char('r') => Command::Restart,
        KeyCode::Char('1') => Command::Select(Difficulty::Easy),
        KeyCode::Char('2') => Command::Select(Difficulty::Medium),
        KeyCode::Char('3') => Command::Select(Difficulty::Hard),
        KeyCode::Char('q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

fn render(stdout: &mut Stdout, game: &Game, renderer: &mut Renderer) -> io::Result<()> {
    let tiles = &game.tiles;
    let needed_h = (tiles.height() + 2) as u16;
    let needed_w = (tiles.width() * CELL_W) as u16;

    stdout.queue(MoveTo(0, 0))?;

    let (term_w, term_h) = terminal::size()?;
    if term_w < needed_w || term_h < needed_h {
        stdout.queue(Clear(ClearType::All))?;
        let msg = format!(
            "Terminal too small. Need at least {}x{} (cols x rows). Current: {}x{}. Press 1 for a smaller maze.",
            needed_w, needed_h, term_w, term_h
        );
        stdout.queue(Print(msg))?;
        stdout.flush()?;
        renderer.needs_full = true;
        return Ok(());
    }

    let origin_x = (term_w - needed_w) / 2;
    let origin_y = (term_h - needed_h) / 2 + 1;
    if origin_x != renderer.origin_x || origin_y != renderer.origin_y {
        renderer.origin_x = origin_x;
        renderer.origin_y = origin_y;
        renderer.needs_full = true;
    }
    if renderer.needs_full {
        stdout.queue(Clear(ClearType::All))?;
    }

    let session = &game.session;
    let hud = format!(
        "Level: {}  Time: {}  Moves: {}  (arrows/wasd move, r restart, 1-3 level, q quit)",
        game.difficulty,
        format_clock(session.elapsed()),
        session.moves()
    );
    if renderer.needs_full || hud != renderer.last_hud {
        stdout.queue(MoveTo(renderer.origin_x, renderer.origin_y - 1))?;
        stdout.queue(SetForegroundColor(Color::White))?;
        stdout.queue(Clear(ClearType::CurrentLine))?;
        stdout.queue(Print(&hud))?;
        stdout.queue(ResetColor)?;
        renderer.last_hud = hud;
    }

    let player = TileMap::cell_tile(session.player());
    let goal = TileMap::cell_tile(session.goal());
    for y in 0..tiles.height() {
        for x in 0..tiles.width() {
            let cell = cell_for(tiles, (x, y), player, goal);
            let idx = y * tiles.width() + x;
            if renderer.needs_full || cell != renderer.last[idx] {
                renderer.last[idx] = cell;
                draw_cell(stdout, renderer, x, y, cell)?;
            }
        }
    }

    stdout.queue(MoveTo(renderer.origin_x, renderer.origin_y + tiles.height() as u16))?;
    stdout.queue(Clear(ClearType::CurrentLine))?;
    if session.is_won() {
        stdout.queue(SetForegroundColor(Color::Cyan))?;
        stdout.queue(Print(format!(
            "ESCAPED! Time {}  Moves {}  (r to play again)",
            format_clock(session.elapsed()),
            session.moves()
        )))?;
        stdout.queue(ResetColor)?;
    }
    renderer.needs_full = false;

    stdout.flush()?;
    Ok(())
}

fn cell_for(tiles: &TileMap, at: (usize, usize), player: (usize, usize), goal: (usize, usize)) -> Cell {
    if at == player {
        return Cell {
            glyph: Glyph::Player,
            color: Color::Magenta,
        };
    }
    if at == goal {
        return Cell {
            glyph: Glyph::Goal,
            color: Color::Cyan,
        };
    }
    match tiles.get(at.0, at.1) {
        Tile::Wall => Cell {
            glyph: Glyph::Wall,
            color: Color::White,
        },
        Tile::Floor => Cell {
            glyph: Glyph::Floor,
            color: Color::Reset,
        },
    }
}

fn draw_cell(stdout: &mut Stdout, renderer: &Renderer, x: usize, y: usize, cell: Cell) -> io::Result<()> {
    let text = match cell.glyph {
        Glyph::Player => "●",
        Glyph::Goal => "◆",
        Glyph::Wall => "██",
        Glyph::Floor => "  ",
    };
    let x_pos = renderer.origin_x + (x * CELL_W) as u16;
    let y_pos = renderer.origin_y + y as u16;
    stdout.queue(MoveTo(x_pos, y_pos))?;
    stdout.queue(SetForegroundColor(cell.color))?;
    stdout.queue(Print(text))?;
    let w = UnicodeWidthStr::width(text);
    if w < CELL_W {
        for _ in 0..(CELL_W - w) {
            stdout.queue(Print(' '))?;
        }
    }
    stdout.queue(ResetColor)?;
    Ok(())
}

fn summary(game: &Game, settings: &Settings) -> String {
    let session = &game.session;
    let seed = settings
        .seed
        .map(|seed| format!(" seed={seed}"))
        .unwrap_or_default();
    let outcome = if session.is_won() { "escaped" } else { "quit" };
    let maze = session.maze();
    format!(
        "labyrinth: {} {}x{}{}: {} after {} moves in {} ({} loops)",
        game.difficulty,
        maze.cols(),
        maze.rows(),
        seed,
        outcome,
        session.moves(),
        format_clock(session.elapsed()),
        maze.loops_added()
    )
}
