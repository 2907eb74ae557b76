mod app;
mod celebration;
mod config;
mod event;
mod session;
mod ui;
mod verses;

use std::io;

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

use app::App;
use config::Config;
use event::{AppEvent, EventHandler, TICK_RATE};
use session::Verse;
use ui::components::confetti::ConfettiOverlay;
use ui::components::progress_bar::ProgressBar;
use ui::components::verse_area::VerseArea;
use ui::layout::AppLayout;
use verses::VersePack;

#[derive(Parser)]
#[command(name = "versed", version, about = "Terminal verse memorization trainer")]
struct Cli {
    #[arg(short, long, help = "Theme name")]
    theme: Option<String>,

    #[arg(short, long, help = "Practice a pack verse by reference")]
    verse: Option<String>,

    #[arg(long, requires = "text", help = "Reference label for a custom verse")]
    reference: Option<String>,

    #[arg(long, requires = "reference", help = "Text of a custom verse")]
    text: Option<String>,

    #[arg(long, help = "List the verse pack references and exit")]
    list_verses: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let pack = VersePack::load();

    if cli.list_verses {
        if pack.is_empty() {
            println!("(no verses)");
        }
        for verse in pack.verses() {
            println!("{} ({} words)", verse.reference, verse.word_count());
        }
        return Ok(());
    }

    let mut config = Config::load().unwrap_or_default();
    let references: Vec<&str> = pack.references().collect();
    config.normalize_verse(&references);
    if let Some(theme_name) = cli.theme {
        config.theme = theme_name;
    }

    let verse = match (cli.reference, cli.text) {
        (Some(reference), Some(text)) => Verse::new(reference, text),
        _ => {
            let key = cli.verse.as_deref().unwrap_or(&config.verse);
            pack.select(key)
                .cloned()
                .context("no verses available: the verse pack is empty")?
        }
    };

    let mut app = App::new(config, verse);

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let events = EventHandler::new(TICK_RATE);

    let result = run_app(&mut terminal, &mut app, &events);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = result {
        eprintln!("Error: {err:?}");
    }

    Ok(())
}

fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    events: &EventHandler,
) -> Result<()> {
    loop {
        terminal.draw(|frame| render(frame, app))?;

        match events.next()? {
            AppEvent::Key(key) => handle_key(app, key),
            AppEvent::Tick => app.on_tick(),
            AppEvent::Resize => {}
        }

        if app.should_quit {
            return Ok(());
        }
    }
}

fn handle_key(app: &mut App, key: KeyEvent) {
    // Only Press events mutate state; Repeat would hide several words per
    // held key, Release arrives on enhanced terminals only.
    if key.kind != KeyEventKind::Press {
        return;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.should_quit = true,
        KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Up => app.advance(),
        KeyCode::Char('r') => app.restart(),
        KeyCode::Char('t') => app.cycle_theme(),
        _ => {}
    }
}

fn render(frame: &mut ratatui::Frame, app: &App) {
    let area = frame.area();
    let colors = &app.theme.colors;

    let bg = Block::default().style(Style::default().bg(colors.bg()));
    frame.render_widget(bg, area);

    let layout = AppLayout::new(area);
    render_header(frame, app, &layout);
    render_practice(frame, app, &layout);
    render_footer(frame, app, &layout);

    if app.celebration.is_active() {
        frame.render_widget(ConfettiOverlay::new(&app.celebration, app.theme), area);
    }
}

fn render_header(frame: &mut ratatui::Frame, app: &App, layout: &AppLayout) {
    let colors = &app.theme.colors;
    let session = &app.session;

    let header_info = if layout.tier.show_word_detail() {
        format!(
            " {} | {}/{} words hidden | {}%",
            session.verse().reference,
            session.hidden_count(),
            session.total_count(),
            session.progress_percent(),
        )
    } else {
        format!(
            " {} | {}%",
            session.verse().reference,
            session.progress_percent()
        )
    };

    let header = Paragraph::new(Line::from(vec![
        Span::styled(
            " versed ",
            Style::default()
                .fg(colors.header_fg())
                .bg(colors.header_bg())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(
            header_info,
            Style::default().fg(colors.fg()).bg(colors.header_bg()),
        ),
    ]))
    .style(Style::default().bg(colors.header_bg()));
    frame.render_widget(header, layout.header);
}

fn render_practice(frame: &mut ratatui::Frame, app: &App, layout: &AppLayout) {
    let colors = &app.theme.colors;
    let session = &app.session;

    let show_progress = layout.tier.show_progress_bar(frame.area().height);

    let mut constraints: Vec<Constraint> = Vec::new();
    if show_progress {
        constraints.push(Constraint::Length(3));
    }
    constraints.push(Constraint::Min(5));
    constraints.push(Constraint::Length(1));

    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(layout.main);

    let mut idx = 0;
    if show_progress {
        let bar = ProgressBar::new(session.hidden_count(), session.total_count(), app.theme);
        frame.render_widget(bar, main_layout[idx]);
        idx += 1;
    }

    let verse_rect = ui::layout::centered_rect(84, 100, main_layout[idx]);
    let verse = VerseArea::new(
        session.cells(),
        &session.verse().reference,
        app.config.placeholder_char(),
        app.theme,
    );
    frame.render_widget(verse, verse_rect);
    idx += 1;

    let status = if session.is_complete() {
        Line::from(Span::styled(
            "* Well done! The whole verse is hidden *",
            Style::default()
                .fg(colors.success())
                .add_modifier(Modifier::BOLD),
        ))
    } else {
        Line::from(Span::styled(
            format!(
                "{} of {} words hidden",
                session.hidden_count(),
                session.total_count()
            ),
            Style::default().fg(colors.text_hidden()),
        ))
    };
    frame.render_widget(
        Paragraph::new(status).alignment(Alignment::Center),
        main_layout[idx],
    );
}

fn render_footer(frame: &mut ratatui::Frame, app: &App, layout: &AppLayout) {
    let colors = &app.theme.colors;

    let hints = if app.session.is_complete() {
        " [r] Try again  [t] Theme  [q] Quit "
    } else {
        " [Space] Hide a word  [r] Start over  [t] Theme  [q] Quit "
    };

    let footer = Paragraph::new(Line::from(Span::styled(
        hints,
        Style::default().fg(colors.accent_dim()),
    )));
    frame.render_widget(footer, layout.footer);
}
