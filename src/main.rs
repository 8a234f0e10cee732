use std::io;
use std::time::Duration;

use clap::Parser;
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    MouseEventKind,
};
use crossterm::terminal::{EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, terminal};
use indoc::indoc;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Block, Borders, Paragraph};
use ratatui::{Frame, Terminal};

use hotbox::geometry::map_from_parent;
use hotbox::{Hotbox, Point, Region, Size};

const BUTTON_LABELS: [&str; 9] = [
    "Blur",
    "Grade",
    "Merge",
    "Transform",
    "Crop",
    "Roto",
    "Shuffle",
    "Switch",
    "Write",
];

const HELP_FOOTER: &str = indoc! {"
    move the mouse to highlight a button
    q / Esc / Ctrl+C quits
"};

#[derive(Parser, Debug)]
#[command(
    name = "hotbox",
    version = env!("CARGO_PKG_VERSION"),
    about = "Interactive hover-tracking demo for the hotbox menu surface"
)]
struct Cli {
    /// Buttons per row.
    #[arg(short = 'c', long = "columns", value_name = "COUNT", default_value_t = 3)]
    columns: usize,

    /// Button width in terminal cells.
    #[arg(long = "button-width", value_name = "CELLS", default_value_t = 16)]
    button_width: i32,

    /// Button height in terminal cells.
    #[arg(long = "button-height", value_name = "CELLS", default_value_t = 3)]
    button_height: i32,

    /// Log hover transitions to stderr (visible after exit or when redirected).
    #[arg(long = "trace")]
    trace: bool,
}

struct MenuConfig {
    columns: usize,
    button_width: i32,
    button_height: i32,
}

impl TryFrom<&Cli> for MenuConfig {
    type Error = String;

    fn try_from(cli: &Cli) -> Result<Self, Self::Error> {
        if !(1..=BUTTON_LABELS.len()).contains(&cli.columns) {
            return Err(format!(
                "columns must be between 1 and {}",
                BUTTON_LABELS.len()
            ));
        }
        if !(4..=40).contains(&cli.button_width) {
            return Err("button width must be between 4 and 40 cells".to_string());
        }
        if !(3..=9).contains(&cli.button_height) {
            return Err("button height must be between 3 and 9 cells".to_string());
        }
        Ok(Self {
            columns: cli.columns,
            button_width: cli.button_width,
            button_height: cli.button_height,
        })
    }
}

struct DemoApp {
    surface: Hotbox<usize>,
    // Where the surface origin currently sits on the terminal, updated each
    // draw so mouse events can be mapped into surface space.
    surface_origin: Point,
    surface_size: Size,
}

impl DemoApp {
    fn new(config: &MenuConfig) -> Self {
        let mut surface = Hotbox::new();
        // Region sizes are inclusive far edges: a button drawn w cells wide
        // spans local columns 0..=w-1.
        let size = Size::new(config.button_width - 1, config.button_height - 1);
        for (index, _) in BUTTON_LABELS.iter().enumerate() {
            let column = (index % config.columns) as i32;
            let row = (index / config.columns) as i32;
            let origin = Point::new(
                column * (config.button_width + 1),
                row * (config.button_height + 1),
            );
            surface.add_region(Region::new(index, origin, size));
        }
        let rows = BUTTON_LABELS.len().div_ceil(config.columns) as i32;
        Self {
            surface,
            surface_origin: Point::default(),
            surface_size: Size::new(
                config.columns as i32 * (config.button_width + 1) - 1,
                rows * (config.button_height + 1) - 1,
            ),
        }
    }
}

fn main() -> io::Result<()> {
    let args = Cli::parse();
    let config = MenuConfig::try_from(&args)
        .map_err(|msg| io::Error::new(io::ErrorKind::InvalidInput, msg))?;
    if args.trace {
        hotbox::tracing_sub::init_default();
    }

    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(
        stdout,
        EnterAlternateScreen,
        EnableMouseCapture,
        cursor::Hide
    )?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = DemoApp::new(&config);
    let result = run_demo(&mut terminal, &mut app);

    // The menu is closing; drop any remaining highlight.
    app.surface.clear_hover();

    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen,
        cursor::Show
    )?;
    terminal::disable_raw_mode()?;
    result
}

fn run_demo(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut DemoApp,
) -> io::Result<()> {
    loop {
        terminal.draw(|frame| draw_menu(frame, app))?;

        if !event::poll(Duration::from_millis(33))? {
            continue;
        }
        // Drain the queue so bursts of mouse movement don't outrun rendering.
        loop {
            if dispatch_event(&event::read()?, app) {
                return Ok(());
            }
            if !event::poll(Duration::ZERO)? {
                break;
            }
        }
    }
}

/// Returns true when the demo should quit.
fn dispatch_event(event: &Event, app: &mut DemoApp) -> bool {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Press => {
            matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
                || (key.code == KeyCode::Char('c')
                    && key.modifiers.contains(KeyModifiers::CONTROL))
        }
        Event::Mouse(mouse) => {
            if matches!(
                mouse.kind,
                MouseEventKind::Moved | MouseEventKind::Drag(_)
            ) {
                let pointer = map_from_parent(
                    Point::new(mouse.column as i32, mouse.row as i32),
                    app.surface_origin,
                );
                app.surface.handle_pointer_move(pointer);
            }
            false
        }
        _ => false,
    }
}

fn draw_menu(frame: &mut Frame, app: &mut DemoApp) {
    let area = frame.area();
    if area.width == 0 || area.height == 0 {
        return;
    }

    // Center the surface; regions keep their surface-space origins while the
    // whole popup floats wherever the terminal has room.
    let surface_width = (app.surface_size.width + 1).clamp(0, area.width as i32);
    let surface_height = (app.surface_size.height + 1).clamp(0, area.height as i32);
    app.surface_origin = Point::new(
        (area.width as i32 - surface_width) / 2,
        (area.height as i32 - surface_height) / 2,
    );

    for region in app.surface.regions() {
        let Some(rect) = button_rect(app.surface_origin, region.origin(), region.size(), area)
        else {
            continue;
        };
        let label = BUTTON_LABELS[region.id()];
        let style = if region.is_selected() {
            Style::default()
                .fg(Color::Black)
                .bg(Color::Gray)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::White)
        };
        let button = Paragraph::new(label)
            .alignment(Alignment::Center)
            .style(style)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(button, rect);
    }

    let hovered = app
        .surface
        .hovered()
        .map(|id| BUTTON_LABELS[id])
        .unwrap_or("none");
    let footer_y = area.height.saturating_sub(3);
    let footer = Rect {
        x: area.x,
        y: area.y.saturating_add(footer_y),
        width: area.width,
        height: area.height.saturating_sub(footer_y),
    };
    frame.render_widget(
        Paragraph::new(format!("hovered: {hovered}\n{HELP_FOOTER}"))
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray)),
        footer,
    );
}

fn button_rect(surface_origin: Point, origin: Point, size: Size, bounds: Rect) -> Option<Rect> {
    let x = surface_origin.x + origin.x;
    let y = surface_origin.y + origin.y;
    let width = size.width + 1;
    let height = size.height + 1;
    if x < 0 || y < 0 || width <= 0 || height <= 0 {
        return None;
    }
    let rect = Rect {
        x: u16::try_from(x).ok()?,
        y: u16::try_from(y).ok()?,
        width: u16::try_from(width).ok()?,
        height: u16::try_from(height).ok()?,
    };
    let clipped = rect.intersection(bounds);
    if clipped.width == 0 || clipped.height == 0 {
        None
    } else {
        Some(clipped)
    }
}
