use crate::analysis::paths::Route;
use crate::analysis::table::Distance;
use crate::network::engine::RoadNetwork;
use crossterm::event::KeyCode;
use std::mem;
use tracing::{debug, info};

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Action {
    Route,
    Interrupt,
    Connect,
}

impl Action {
    pub fn title(&self) -> &'static str {
        match self {
            Action::Route => "Shortest route",
            Action::Interrupt => "Traffic interruption",
            Action::Connect => "New connection",
        }
    }

    fn labels(&self) -> &'static [&'static str] {
        match self {
            Action::Route | Action::Interrupt => &["Origin city", "Destination city"],
            Action::Connect => &["Origin city", "Destination city", "Distance in km"],
        }
    }
}

pub struct Prompt {
    action: Action,
    answers: Vec<String>,
    input: String,
}

impl Prompt {
    fn new(action: Action) -> Self {
        Self {
            action,
            answers: Vec::new(),
            input: String::new(),
        }
    }

    pub fn action(&self) -> Action {
        self.action
    }

    pub fn label(&self) -> &'static str {
        self.action.labels()[self.answers.len()]
    }

    pub fn answers(&self) -> &[String] {
        &self.answers
    }

    pub fn input(&self) -> &str {
        &self.input
    }
}

pub enum Mode {
    Menu,
    Prompt(Prompt),
}

#[derive(Debug, PartialEq)]
pub enum Tone {
    Info,
    Success,
    Error,
}

pub struct Message {
    tone: Tone,
    lines: Vec<String>,
}

impl Message {
    fn new(tone: Tone, lines: Vec<String>) -> Self {
        Self { tone, lines }
    }

    pub fn tone(&self) -> &Tone {
        &self.tone
    }

    pub fn lines(&self) -> &[String] {
        &self.lines
    }
}

pub struct App {
    pub network: RoadNetwork,
    pub running: bool,
    mode: Mode,
    message: Message,
}

impl App {
    pub fn new(network: RoadNetwork) -> Self {
        Self {
            network,
            running: true,
            mode: Mode::Menu,
            message: Message::new(
                Tone::Info,
                vec!["Pick an option from the menu below.".to_string()],
            ),
        }
    }

    pub fn mode(&self) -> &Mode {
        &self.mode
    }

    pub fn message(&self) -> &Message {
        &self.message
    }

    pub fn handle_key(&mut self, code: KeyCode) {
        match &mut self.mode {
            Mode::Menu => self.handle_menu_key(code),
            Mode::Prompt(prompt) => match code {
                KeyCode::Esc => self.mode = Mode::Menu,
                KeyCode::Backspace => {
                    prompt.input.pop();
                }
                KeyCode::Char(c) => prompt.input.push(c),
                KeyCode::Enter if !prompt.input.is_empty() => {
                    prompt.answers.push(mem::take(&mut prompt.input));
                    let complete = prompt.answers.len() == prompt.action.labels().len();
                    if complete {
                        if let Mode::Prompt(done) = mem::replace(&mut self.mode, Mode::Menu) {
                            self.submit(done.action, &done.answers);
                        }
                    }
                }
                _ => {}
            },
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) {
        match code {
            KeyCode::Char('1') | KeyCode::Char('r') => {
                self.mode = Mode::Prompt(Prompt::new(Action::Route))
            }
            KeyCode::Char('2') | KeyCode::Char('c') => self.show_center(),
            KeyCode::Char('3') | KeyCode::Char('i') => {
                self.mode = Mode::Prompt(Prompt::new(Action::Interrupt))
            }
            KeyCode::Char('4') | KeyCode::Char('n') => {
                self.mode = Mode::Prompt(Prompt::new(Action::Connect))
            }
            KeyCode::Char('5') | KeyCode::Char('q') | KeyCode::Esc => self.running = false,
            _ => {}
        }
    }

    fn show_center(&mut self) {
        self.message = match self.network.get_center() {
            Ok(center) => {
                let stats = self.network.stats();
                let eccentricity = stats
                    .iter()
                    .find(|s| s.name() == center)
                    .map(|s| s.eccentricity().to_string())
                    .unwrap_or_default();
                Message::new(
                    Tone::Success,
                    vec![
                        format!("The center of the network is {center}."),
                        format!("Worst-case distance from it: {eccentricity} km"),
                    ],
                )
            }
            Err(e) => Message::new(Tone::Error, vec![e.to_string()]),
        };
    }

    fn submit(&mut self, action: Action, answers: &[String]) {
        let (origin, destination) = (answers[0].as_str(), answers[1].as_str());
        debug!(?action, origin, destination, "menu action");
        self.message = match action {
            Action::Route => self.route(origin, destination),
            Action::Interrupt => {
                let closed = self.network.graph().weight(origin, destination);
                self.network.remove_connection(origin, destination);
                match closed {
                    Some(km) => {
                        info!(origin, destination, km, "road closed");
                        Message::new(
                            Tone::Success,
                            vec![format!("Road {origin} -> {destination} ({km} km) closed.")],
                        )
                    }
                    None => Message::new(
                        Tone::Info,
                        vec![format!("There is no road {origin} -> {destination}.")],
                    ),
                }
            }
            Action::Connect => match answers[2].parse::<i64>() {
                Err(_) => Message::new(
                    Tone::Error,
                    vec![format!("{:?} is not a valid distance.", answers[2])],
                ),
                Ok(km) => match self.network.add_connection(origin, destination, km) {
                    Ok(()) => {
                        info!(origin, destination, km, "road added");
                        Message::new(
                            Tone::Success,
                            vec![format!("Road {origin} -> {destination} set to {km} km.")],
                        )
                    }
                    Err(e) => Message::new(Tone::Error, vec![e.to_string()]),
                },
            },
        };
    }

    fn route(&self, origin: &str, destination: &str) -> Message {
        match self.network.get_distance(origin, destination) {
            Err(e) => Message::new(Tone::Error, vec![e.to_string()]),
            Ok(Distance::Unreachable) => Message::new(
                Tone::Info,
                vec![format!("There is no route from {origin} to {destination}.")],
            ),
            Ok(distance) => {
                let mut lines = vec![format!("Shortest distance: {distance}")];
                if let Ok(Route::Path { cities, .. }) = self.network.get_path(origin, destination) {
                    lines.push(format!("Route: {}", cities.join(" -> ")));
                }
                Message::new(Tone::Success, lines)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::graph::Graph;

    fn app() -> App {
        let mut graph = Graph::new();
        graph.add_edge("A", "B", 5).unwrap();
        graph.add_edge("B", "C", 2).unwrap();
        App::new(RoadNetwork::new(graph))
    }

    fn type_text(app: &mut App, text: &str) {
        text.chars().for_each(|c| app.handle_key(KeyCode::Char(c)));
        app.handle_key(KeyCode::Enter);
    }

    #[test]
    fn test_route_query() {
        let mut app = app();

        app.handle_key(KeyCode::Char('1'));
        type_text(&mut app, "A");
        type_text(&mut app, "C");

        assert!(matches!(app.mode(), Mode::Menu));
        assert_eq!(&Tone::Success, app.message().tone());
        assert_eq!(
            vec!["Shortest distance: 7 km", "Route: A -> B -> C"],
            app.message().lines()
        );
    }

    #[test]
    fn test_route_to_unknown_city() {
        let mut app = app();

        app.handle_key(KeyCode::Char('r'));
        type_text(&mut app, "A");
        type_text(&mut app, "X");

        assert_eq!(&Tone::Error, app.message().tone());
        assert_eq!(vec!["unknown city: X"], app.message().lines());
    }

    #[test]
    fn test_unreachable_route() {
        let mut app = app();

        app.handle_key(KeyCode::Char('1'));
        type_text(&mut app, "C");
        type_text(&mut app, "A");

        assert_eq!(&Tone::Info, app.message().tone());
    }

    #[test]
    fn test_new_connection_rebuilds_network() {
        let mut app = app();

        app.handle_key(KeyCode::Char('4'));
        type_text(&mut app, "C");
        type_text(&mut app, "A");
        type_text(&mut app, "9");

        assert_eq!(1, app.network.revision());
        assert_eq!(Ok(Distance::Km(9)), app.network.get_distance("C", "A"));
    }

    #[test]
    fn test_new_connection_rejects_bad_distance() {
        let mut app = app();

        app.handle_key(KeyCode::Char('4'));
        type_text(&mut app, "C");
        type_text(&mut app, "A");
        type_text(&mut app, "-9");

        assert_eq!(&Tone::Error, app.message().tone());
        assert_eq!(0, app.network.revision());

        app.handle_key(KeyCode::Char('4'));
        type_text(&mut app, "C");
        type_text(&mut app, "A");
        type_text(&mut app, "nine");

        assert_eq!(&Tone::Error, app.message().tone());
        assert_eq!(0, app.network.revision());
    }

    #[test]
    fn test_interruption() {
        let mut app = app();

        app.handle_key(KeyCode::Char('3'));
        type_text(&mut app, "B");
        type_text(&mut app, "C");

        assert_eq!(&Tone::Success, app.message().tone());
        assert_eq!(vec!["Road B -> C (2 km) closed."], app.message().lines());
        assert_eq!(None, app.network.graph().lookup("C"));
    }

    #[test]
    fn test_prompt_editing_and_cancel() {
        let mut app = app();

        app.handle_key(KeyCode::Char('1'));
        app.handle_key(KeyCode::Char('Z'));
        app.handle_key(KeyCode::Backspace);
        app.handle_key(KeyCode::Enter);
        match app.mode() {
            Mode::Prompt(prompt) => {
                assert_eq!(Action::Route, prompt.action());
                assert_eq!("Origin city", prompt.label());
                assert!(prompt.answers().is_empty());
            }
            Mode::Menu => panic!("empty input must not submit"),
        }

        app.handle_key(KeyCode::Esc);
        assert!(matches!(app.mode(), Mode::Menu));
        assert!(app.running);
    }

    #[test]
    fn test_center_and_quit() {
        let mut app = app();

        // A: 7, B: 2, C: inf
        app.handle_key(KeyCode::Char('2'));
        assert_eq!(
            vec![
                "The center of the network is B.",
                "Worst-case distance from it: 2 km"
            ],
            app.message().lines()
        );

        app.handle_key(KeyCode::Char('q'));
        assert!(!app.running);
    }
}
