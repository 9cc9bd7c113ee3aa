use crate::analysis::center::Eccentricity;
use crate::analysis::trend::{Trend, trends};
use crate::tui::app::{App, Mode, Tone};
use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout};
use ratatui::style::Color::White;
use ratatui::style::{Color, Modifier, Style, Stylize};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Cell, Padding, Paragraph, Row, Table};

pub fn draw_app(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(5),
            Constraint::Length(3),
        ])
        .split(frame.area());

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[1]);

    frame.render_widget(build_header(app), chunks[0]);
    frame.render_widget(build_city_table(app), body[0]);
    frame.render_widget(build_road_table(app), body[1]);
    frame.render_widget(build_message(app), chunks[2]);
    frame.render_widget(build_input(app), chunks[3]);
}

fn eccentricity_style(eccentricity: Eccentricity, is_center: bool) -> Style {
    match eccentricity {
        _ if is_center => Style::default().fg(Color::Green).bold(),
        Eccentricity::Finite(_) => Style::default(),
        Eccentricity::Infinite => Style::default().add_modifier(Modifier::DIM),
    }
}

fn build_header(app: &'_ App) -> Block<'_> {
    let network = &app.network;
    let center = network.get_center().unwrap_or_else(|_| "-".to_string());
    let dim = Style::default().add_modifier(Modifier::DIM);
    Block::new()
        .title(Line::from(vec![
            Span::raw(" Roadgraph ").style(Style::default().bold().cyan()),
            Span::raw("|").style(dim),
            Span::raw(" Revision: ").style(dim),
            Span::raw(network.revision().to_string()).style(Style::default().bold()),
            Span::raw("  Cities: ").style(dim),
            Span::raw(network.graph().node_count().to_string()).style(Style::default().bold()),
            Span::raw("  Roads: ").style(dim),
            Span::raw(network.graph().edge_count().to_string()).style(Style::default().bold()),
            Span::raw("  Center: ").style(dim),
            Span::raw(center).style(Style::default().bold().green()),
            Span::raw(" "),
        ]))
        .title_alignment(Alignment::Center)
}

fn build_city_table(app: &'_ App) -> Table<'_> {
    let network = &app.network;
    let stats = network.stats();
    let trend = trends(&stats, &network.previous_stats());
    let center = network.get_center().ok();

    let mut rows = stats.iter().zip(trend).collect::<Vec<_>>();
    rows.sort_by_key(|(s, _)| s.eccentricity());

    Table::new(
        rows.into_iter().map(|(s, trend)| {
            let is_center = center.as_deref() == Some(s.name());
            let arrow = match trend {
                Trend::Up => "  ↗",
                Trend::Down => "  ↘",
                Trend::Flat => "  →",
                Trend::New => "  +",
            };
            let mean = s
                .mean_distance()
                .map(|m| format!("{m:>7.1}"))
                .unwrap_or_else(|| format!("{:>7}", "-"));

            Row::new(vec![
                Cell::from(s.name().to_owned()),
                Cell::from(format!("{:>6}", s.eccentricity()))
                    .style(eccentricity_style(s.eccentricity(), is_center)),
                Cell::from(format!("{:>5}", s.reachable())),
                Cell::from(mean),
                Cell::from(arrow).style(Style::default().bold()),
            ])
        }),
        [
            Constraint::Length(20),
            Constraint::Length(8),
            Constraint::Length(7),
            Constraint::Length(9),
            Constraint::Length(6),
        ],
    )
    .header(
        Row::new([
            Cell::from("City"),
            Cell::from("   Ecc"),
            Cell::from("Reach"),
            Cell::from("   Mean"),
            Cell::from("Trend"),
        ])
        .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Cities ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_road_table(app: &'_ App) -> Table<'_> {
    Table::new(
        app.network.list_edges().map(|road| {
            Row::new(vec![
                Cell::from(road.origin.to_owned()),
                Cell::from(road.destination.to_owned()),
                Cell::from(format!("{:>6}", road.weight)),
            ])
        }),
        [
            Constraint::Length(16),
            Constraint::Length(16),
            Constraint::Length(8),
        ],
    )
    .header(
        Row::new([Cell::from("From"), Cell::from("To"), Cell::from("    KM")])
            .style(Style::default().bg(Color::DarkGray).fg(White)),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(Line::from(vec![
                Span::from(" Roads ").style(Style::default().bold()),
            ]))
            .padding(Padding::horizontal(1)),
    )
}

fn build_message(app: &'_ App) -> Paragraph<'_> {
    let message = app.message();
    let style = match message.tone() {
        Tone::Info => Style::default(),
        Tone::Success => Style::default().green(),
        Tone::Error => Style::default().red().bold(),
    };
    Paragraph::new(
        message
            .lines()
            .iter()
            .map(|l| Line::from(Span::styled(l.as_str(), style)))
            .collect::<Vec<_>>(),
    )
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Result ")
            .padding(Padding::horizontal(1)),
    )
}

fn build_input(app: &'_ App) -> Paragraph<'_> {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let line = match app.mode() {
        Mode::Menu => Line::from(vec![
            Span::raw("[1] ").bold(),
            Span::raw("Route  "),
            Span::raw("[2] ").bold(),
            Span::raw("Center  "),
            Span::raw("[3] ").bold(),
            Span::raw("Interrupt road  "),
            Span::raw("[4] ").bold(),
            Span::raw("New road  "),
            Span::raw("[5] ").bold(),
            Span::raw("Quit"),
        ]),
        Mode::Prompt(prompt) => {
            let mut spans = prompt
                .answers()
                .iter()
                .map(|a| Span::raw(format!("{a} › ")).style(dim))
                .collect::<Vec<_>>();
            spans.push(Span::raw(format!("{}: ", prompt.label())).bold());
            spans.push(Span::raw(prompt.input().to_owned()));
            spans.push(Span::raw("_").style(Style::default().add_modifier(Modifier::SLOW_BLINK)));
            Line::from(spans)
        }
    };
    let title = match app.mode() {
        Mode::Menu => " Menu ".to_string(),
        Mode::Prompt(prompt) => format!(" {} (Esc to cancel) ", prompt.action().title()),
    };
    Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(title)
            .padding(Padding::horizontal(1)),
    )
}
