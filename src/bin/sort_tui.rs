//! Sortviz - Terminal User Interface
//!
//! Interactive bar-chart visualization of the sorting algorithms using
//! ratatui. App logic lives in `sortviz::tui::sort_app`.
//!
//! Usage: `sort-tui [--config sortviz.yaml]`

#![forbid(unsafe_code)]

#[cfg(feature = "tui")]
fn main() -> std::process::ExitCode {
    use sortviz::config::VisualizerConfig;
    use sortviz::tui::SortApp;
    use std::process::ExitCode;

    if let Err(e) = sortviz::logging::init_from_env() {
        eprintln!("Warning: {e}");
    }

    let args: Vec<String> = std::env::args().collect();
    let config = match args.iter().position(|a| a == "--config" || a == "-c") {
        Some(i) => match args.get(i + 1).map(VisualizerConfig::load) {
            Some(Ok(config)) => config,
            Some(Err(e)) => {
                eprintln!("Error: {e}");
                return ExitCode::from(2);
            }
            None => {
                eprintln!("Error: --config requires a path");
                return ExitCode::from(2);
            }
        },
        None => VisualizerConfig::default(),
    };

    let app = match SortApp::new(&config) {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::from(2);
        }
    };

    match tui::run(app) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::from(1)
        }
    }
}

#[cfg(not(feature = "tui"))]
fn main() {
    eprintln!("TUI feature not enabled. Run with --features tui");
    std::process::exit(1);
}

#[cfg(feature = "tui")]
mod tui {
    use crossterm::{
        event::{self, Event, KeyEventKind},
        execute,
        terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    };
    use ratatui::{
        backend::CrosstermBackend,
        layout::{Constraint, Direction, Layout, Rect},
        style::{Color, Modifier, Style},
        text::{Line, Span},
        widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap},
        Frame, Terminal,
    };
    use sortviz::engine::format_elapsed;
    use sortviz::tui::{RunStatus, SortApp};
    use sortviz::visualization::BarState;
    use std::io;
    use std::time::{Duration, Instant};

    /// Arrays up to this length show their values on the bars.
    const LABEL_LIMIT: usize = 20;

    /// Run the TUI application.
    pub fn run(mut app: SortApp) -> io::Result<()> {
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;

        let tick_rate = Duration::from_millis(33);

        loop {
            let start = Instant::now();
            terminal.draw(|f| ui(f, &app))?;

            let timeout = tick_rate.saturating_sub(start.elapsed());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        app.handle_key(key.code);
                    }
                }
            }

            if app.should_quit() {
                break;
            }

            app.update();
        }

        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()?;

        Ok(())
    }

    fn ui(f: &mut Frame, app: &SortApp) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(10),
                Constraint::Length(3),
                Constraint::Length(12),
            ])
            .split(f.area());

        render_title(f, chunks[0], app);
        render_bars(f, chunks[1], app);
        render_description(f, chunks[2], app);
        render_panels(f, chunks[3], app);
    }

    const fn status_color(status: RunStatus) -> Color {
        match status {
            RunStatus::Idle => Color::White,
            RunStatus::Running => Color::Green,
            RunStatus::Paused => Color::Yellow,
            RunStatus::Finished => Color::Cyan,
            RunStatus::Stopped => Color::Red,
        }
    }

    const fn bar_color(state: BarState) -> Color {
        match state {
            BarState::Idle => Color::Blue,
            BarState::Comparing => Color::Yellow,
            BarState::Swapping => Color::Red,
            BarState::Pivot => Color::Magenta,
            BarState::Sorted => Color::Green,
        }
    }

    fn render_title(f: &mut Frame, area: Rect, app: &SortApp) {
        let title = Paragraph::new(vec![Line::from(vec![
            Span::styled(
                " SORTVIZ ",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("[{}]", app.status.label()),
                Style::default().fg(status_color(app.status)),
            ),
            Span::raw(" | "),
            Span::styled(app.algorithm.name(), Style::default().fg(Color::White)),
            Span::raw(" | "),
            Span::styled(
                format!("{} x{}", app.pattern.label(), app.size),
                Style::default().fg(Color::Gray),
            ),
            Span::raw(" | "),
            Span::styled(
                format!("Speed {}", app.speed().get()),
                Style::default().fg(Color::Gray),
            ),
        ])])
        .block(Block::default().borders(Borders::ALL).title(
            "[Space] Play/Pause [S] Step [Esc] Stop [R] Reset [G] Generate \
             [A] Algorithm [P] Pattern [+/-] Speed [ [ ] ] Size [Q] Quit",
        ));
        f.render_widget(title, area);
    }

    fn render_bars(f: &mut Frame, area: Rect, app: &SortApp) {
        let n = app.chart.len().max(1);
        let inner_width = usize::from(area.width.saturating_sub(2));
        let gap: u16 = if n * 2 <= inner_width { 1 } else { 0 };
        let width = ((inner_width.saturating_sub(n * usize::from(gap))) / n).max(1);
        let show_values = app.chart.len() <= LABEL_LIMIT;

        let bars: Vec<Bar> = app
            .chart
            .bars()
            .map(|(value, state)| {
                let bar = Bar::default()
                    .value(u64::from(*value))
                    .style(Style::default().fg(bar_color(state)));
                if show_values {
                    bar.text_value(value.to_string())
                } else {
                    bar.text_value(String::new())
                }
            })
            .collect();

        #[allow(clippy::cast_possible_truncation)]
        let chart = BarChart::default()
            .block(Block::default().borders(Borders::ALL).title("Array"))
            .data(BarGroup::default().bars(&bars))
            .bar_width(width.min(usize::from(u16::MAX)) as u16)
            .bar_gap(gap);
        f.render_widget(chart, area);
    }

    fn render_description(f: &mut Frame, area: Rect, app: &SortApp) {
        let description = Paragraph::new(app.chart.description())
            .style(Style::default().fg(Color::White))
            .block(Block::default().borders(Borders::ALL).title("Step"));
        f.render_widget(description, area);
    }

    fn render_panels(f: &mut Frame, area: Rect, app: &SortApp) {
        let chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(25),
                Constraint::Percentage(30),
                Constraint::Percentage(45),
            ])
            .split(area);

        let stats = app.stats();
        let label = |text: &'static str| Span::styled(text, Style::default().fg(Color::Gray));
        let value = |text: String| Span::styled(text, Style::default().fg(Color::White));
        let stats_widget = Paragraph::new(vec![
            Line::from(vec![label("Comparisons: "), value(stats.comparisons.to_string())]),
            Line::from(vec![label("Swaps:       "), value(stats.swaps.to_string())]),
            Line::from(vec![label("Array states:"), value(format!(" {}", stats.accesses))]),
            Line::from(vec![label("Elapsed:     "), value(format_elapsed(app.elapsed()))]),
        ])
        .block(Block::default().borders(Borders::ALL).title("Statistics"));
        f.render_widget(stats_widget, chunks[0]);

        let info = app.info();
        let info_widget = Paragraph::new(vec![
            Line::from(vec![label("Time:     "), value(info.time_complexity.to_string())]),
            Line::from(vec![label("Space:    "), value(info.space_complexity.to_string())]),
            Line::from(vec![label("Stable:   "), value(info.stable.to_string())]),
            Line::from(vec![label("In place: "), value(info.in_place.to_string())]),
            Line::from(""),
            Line::from(Span::styled(info.description, Style::default().fg(Color::Gray))),
        ])
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::ALL).title(info.name));
        f.render_widget(info_widget, chunks[1]);

        let code = Paragraph::new(info.pseudocode)
            .style(Style::default().fg(Color::Cyan))
            .block(Block::default().borders(Borders::ALL).title("Pseudocode"));
        f.render_widget(code, chunks[2]);
    }
}
