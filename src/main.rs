use crate::analysis::paths::Route;
use crate::analysis::table::Distance;
use crate::cli::{Cli, Command};
use crate::network::engine::RoadNetwork;
use crate::scenario::scenario::build_graph;
use crate::tui::TerminalGuard;
use crate::tui::app::App;
use crate::tui::draw::draw_app;
use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{Event, KeyEventKind};
use std::fs::File;
use std::sync::Mutex;
use std::time::Duration;
use tracing_subscriber::EnvFilter;

mod analysis;
mod cli;
mod error;
mod graph;
mod network;
mod scenario;
mod tui;

fn setup_logging(cli: &Cli, interactive: bool) -> Result<()> {
    let level = if cli.quiet {
        "error"
    } else if cli.verbose {
        "debug"
    } else {
        "info"
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match &cli.log_file {
        Some(path) => {
            let file = File::create(path)
                .with_context(|| format!("cannot create log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        // the terminal belongs to the menu
        None if interactive => {}
        None => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .without_time()
            .with_writer(std::io::stderr)
            .init(),
    }
    Ok(())
}

fn run_interactive(network: RoadNetwork) -> Result<()> {
    let mut terminal = ratatui::init();
    let _guard = TerminalGuard;
    let mut app = App::new(network);

    while app.running {
        terminal.draw(|frame| draw_app(frame, &app))?;

        if crossterm::event::poll(Duration::from_millis(16))? {
            match crossterm::event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => app.handle_key(key.code),
                _ => continue,
            }
        }
    }
    Ok(())
}

fn print_route(network: &RoadNetwork, origin: &str, destination: &str) -> Result<()> {
    match network.get_distance(origin, destination)? {
        Distance::Unreachable => println!("There is no route from {origin} to {destination}."),
        distance => {
            println!("Shortest distance: {distance}");
            if let Route::Path { cities, .. } = network.get_path(origin, destination)? {
                println!("Route: {}", cities.join(" -> "));
            }
        }
    }
    Ok(())
}

fn print_stats(network: &RoadNetwork) {
    println!("{:<20} {:>8} {:>6} {:>9}", "City", "Ecc", "Reach", "Mean");
    for s in network.stats() {
        let mean = s
            .mean_distance()
            .map(|m| format!("{m:.1}"))
            .unwrap_or_else(|| "-".to_string());
        println!(
            "{:<20} {:>8} {:>6} {:>9}",
            s.name(),
            s.eccentricity(),
            s.reachable(),
            mean
        );
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let command = cli.command.clone().unwrap_or(Command::Interactive);
    setup_logging(&cli, command == Command::Interactive)?;

    let scenario = cli.source.scenario();
    let graph = build_graph(scenario.as_ref())
        .with_context(|| format!("cannot load road network from {}", scenario.name()))?;
    let network = RoadNetwork::new(graph);

    match command {
        Command::Interactive => run_interactive(network)?,
        Command::Route {
            origin,
            destination,
        } => print_route(&network, &origin, &destination)?,
        Command::Center => println!("{}", network.get_center()?),
        Command::Edges => network.list_edges().for_each(|road| {
            println!("{} -> {} ({} km)", road.origin, road.destination, road.weight)
        }),
        Command::Stats => print_stats(&network),
    }
    Ok(())
}
