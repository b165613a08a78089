use std::sync::Arc;

use chrono::{DateTime, Utc};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::DefaultTerminal;

use crate::api::BackendClient;
use crate::api::types::{ClassifiedTweet, MapRequest};
use crate::command::{self, Command};
use crate::config::{AppConfig, DefaultPage};
use crate::event::{ApiResult, AppEvent, Event, EventHandler, PageId};
use crate::map::SpeculativePage;
use crate::ui;

/// Side-menu entries, in render order.
pub const MENU_ENTRIES: [(PageId, &str); 3] = [
    (PageId::Home, "Home"),
    (PageId::Tweets, "Classify Tweets"),
    (PageId::About, "About Us"),
];

// ---------------------------------------------------------------------------
// App mode
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppMode {
    Normal,
    Command,
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

/// Single holder of all view state: current page, menu overlay, the held
/// classification list and the flags around the two backend calls.
pub struct App {
    pub running: bool,
    pub events: EventHandler,
    pub config: AppConfig,
    pub mode: AppMode,

    // Navigation state
    pub page: PageId,
    pub menu_open: bool,
    pub menu_index: usize,
    pub show_help: bool,

    // Classification state
    pub tweets: Vec<ClassifiedTweet>,
    pub loading: bool,
    pub selected_index: usize,
    pub last_fetched: Option<DateTime<Utc>>,
    /// Monotonic token issued per classify dispatch; responses carrying an
    /// older token are discarded instead of overwriting newer state.
    classify_seq: u64,

    // Map state
    pub map_pending: bool,

    // Input state
    pub command_input: String,

    // Backend client (shared with spawned tasks)
    pub client: Arc<BackendClient>,

    // Status
    pub status_message: Option<String>,
    pub error_detail: Option<String>,
}

impl App {
    pub fn new(config: AppConfig, client: BackendClient) -> Self {
        let page = match config.default_page {
            DefaultPage::Home => PageId::Home,
            DefaultPage::Tweets => PageId::Tweets,
            DefaultPage::About => PageId::About,
        };

        Self {
            running: true,
            events: EventHandler::new(config.tick_rate_fps),
            config,
            mode: AppMode::Normal,
            page,
            menu_open: false,
            menu_index: 0,
            show_help: false,
            tweets: Vec::new(),
            loading: false,
            selected_index: 0,
            last_fetched: None,
            classify_seq: 0,
            map_pending: false,
            command_input: String::new(),
            client: Arc::new(client),
            status_message: None,
            error_detail: None,
        }
    }

    // -- Main event loop ----------------------------------------------------

    pub async fn run(mut self, mut terminal: DefaultTerminal) -> color_eyre::Result<()> {
        while self.running {
            terminal.draw(|frame| self.draw(frame))?;
            match self.events.next().await? {
                Event::Tick => self.tick(),
                Event::Crossterm(event) => {
                    if let crossterm::event::Event::Key(key) = event
                        && key.kind == crossterm::event::KeyEventKind::Press
                    {
                        self.handle_key_event(key);
                    }
                }
                Event::App(app_event) => self.handle_app_event(*app_event),
            }
        }
        Ok(())
    }

    fn draw(&self, frame: &mut ratatui::Frame) {
        ui::draw(frame, self);
    }

    fn tick(&self) {}

    // -- Key event routing --------------------------------------------------

    fn handle_key_event(&mut self, key: KeyEvent) {
        // Ctrl-C always quits.
        if key.modifiers.contains(KeyModifiers::CONTROL)
            && matches!(key.code, KeyCode::Char('c' | 'C'))
        {
            self.events.send(AppEvent::Quit);
            return;
        }

        // The error popup is modal: it swallows keys until dismissed.
        if self.error_detail.is_some() {
            if matches!(key.code, KeyCode::Esc | KeyCode::Enter) {
                self.events.send(AppEvent::DismissError);
            }
            return;
        }

        match self.mode {
            AppMode::Normal => self.handle_normal_key(key),
            AppMode::Command => self.handle_command_key(key),
        }
    }

    fn handle_normal_key(&mut self, key: KeyEvent) {
        if self.show_help {
            if matches!(key.code, KeyCode::Esc | KeyCode::Char('q' | '?')) {
                self.show_help = false;
            }
            return;
        }

        match key.code {
            KeyCode::Char('q') => {
                self.events.send(AppEvent::Quit);
            }
            KeyCode::Esc => {
                // Esc acts as the menu's close control when it is open.
                if self.menu_open {
                    self.events.send(AppEvent::CloseMenu);
                } else {
                    self.events.send(AppEvent::Quit);
                }
            }
            KeyCode::Char('m') | KeyCode::Tab => {
                self.events.send(AppEvent::ToggleMenu);
            }
            KeyCode::Char('j') | KeyCode::Down => {
                self.move_selection_down();
            }
            KeyCode::Char('k') | KeyCode::Up => {
                self.move_selection_up();
            }
            KeyCode::Enter => {
                if self.menu_open {
                    let (page, _) = MENU_ENTRIES[self.menu_index.min(MENU_ENTRIES.len() - 1)];
                    self.events.send(AppEvent::GoTo(page));
                } else if self.page == PageId::Home {
                    // "Start Classification" on the home page.
                    self.events.send(AppEvent::GoTo(PageId::Tweets));
                }
            }
            KeyCode::Char('1') => {
                self.events.send(AppEvent::GoTo(PageId::Home));
            }
            KeyCode::Char('2') => {
                self.events.send(AppEvent::GoTo(PageId::Tweets));
            }
            KeyCode::Char('3') => {
                self.events.send(AppEvent::GoTo(PageId::About));
            }
            KeyCode::Char('f') => {
                self.events.send(AppEvent::FetchClassifications);
            }
            KeyCode::Char('d') => {
                self.events.send(AppEvent::ShowDisasterMap);
            }
            KeyCode::Char(':') => {
                self.mode = AppMode::Command;
                self.command_input.clear();
            }
            KeyCode::Char('?') => {
                self.show_help = true;
            }
            _ => {}
        }
    }

    fn handle_command_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                self.mode = AppMode::Normal;
                self.command_input.clear();
            }
            KeyCode::Enter => {
                self.execute_command();
                self.mode = AppMode::Normal;
            }
            KeyCode::Backspace => {
                self.command_input.pop();
            }
            KeyCode::Char(c) => {
                self.command_input.push(c);
            }
            _ => {}
        }
    }

    // -- Command execution --------------------------------------------------

    fn execute_command(&mut self) {
        let input = self.command_input.clone();
        match command::parse_command(&input) {
            Some(Command::Home) => {
                self.events.send(AppEvent::GoTo(PageId::Home));
            }
            Some(Command::Tweets) => {
                self.events.send(AppEvent::GoTo(PageId::Tweets));
            }
            Some(Command::About) => {
                self.events.send(AppEvent::GoTo(PageId::About));
            }
            Some(Command::Classify) => {
                self.events.send(AppEvent::FetchClassifications);
            }
            Some(Command::Map) => {
                self.events.send(AppEvent::ShowDisasterMap);
            }
            Some(Command::Help) => {
                self.show_help = true;
            }
            Some(Command::Quit) => {
                self.events.send(AppEvent::Quit);
            }
            None => {
                self.status_message = Some(format!("Unknown command: {input}"));
            }
        }
        self.command_input.clear();
    }

    // -- Selection helpers --------------------------------------------------

    fn move_selection_down(&mut self) {
        if self.menu_open {
            if self.menu_index + 1 < MENU_ENTRIES.len() {
                self.menu_index += 1;
            }
        } else if self.page == PageId::Tweets && self.selected_index + 1 < self.tweets.len() {
            self.selected_index += 1;
        }
    }

    fn move_selection_up(&mut self) {
        if self.menu_open {
            self.menu_index = self.menu_index.saturating_sub(1);
        } else if self.page == PageId::Tweets {
            self.selected_index = self.selected_index.saturating_sub(1);
        }
    }

    // -- App event handling -------------------------------------------------

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Quit => {
                self.running = false;
            }
            AppEvent::ToggleMenu => {
                self.menu_open = !self.menu_open;
            }
            AppEvent::CloseMenu => {
                self.menu_open = false;
            }
            // Selecting a page never touches the menu-open flag.
            AppEvent::GoTo(page) => {
                self.page = page;
            }

            AppEvent::FetchClassifications => {
                // The trigger is disabled while a fetch is pending.
                if self.loading {
                    return;
                }
                self.classify_seq += 1;
                self.loading = true;
                self.dispatch_classify(self.classify_seq);
            }
            AppEvent::ClassificationsLoaded { request_id, result } => {
                if request_id != self.classify_seq {
                    tracing::debug!(request_id, "discarding stale classify response");
                    return;
                }
                self.loading = false;
                match result {
                    Ok(tweets) => {
                        // Replace wholesale: no merge, no dedup, no sort.
                        self.tweets = tweets;
                        self.selected_index = 0;
                        self.last_fetched = Some(Utc::now());
                        self.status_message =
                            Some(format!("Fetched {} classified tweets", self.tweets.len()));
                    }
                    Err(e) => {
                        self.error_detail = Some(format!("Failed to classify tweets: {e}"));
                    }
                }
            }

            AppEvent::ShowDisasterMap => {
                self.dispatch_map();
            }
            AppEvent::MapFinished(result) => {
                self.map_pending = false;
                match result {
                    Ok(()) => {
                        self.status_message = Some("Disaster map opened in browser".to_string());
                    }
                    Err(e) => {
                        self.error_detail = Some(e.to_string());
                    }
                }
            }

            AppEvent::DismissError => {
                self.error_detail = None;
            }
        }
    }

    // -- Backend dispatch ---------------------------------------------------

    fn dispatch_classify(&self, request_id: u64) {
        let client = Arc::clone(&self.client);
        let sender = self.events.sender();

        tokio::spawn(async move {
            let result: ApiResult<_> = client
                .classify()
                .await
                .map_err(|e| Arc::new(e.to_string()));
            let _ = sender.send(Event::App(Box::new(AppEvent::ClassificationsLoaded {
                request_id,
                result,
            })));
        });
    }

    fn dispatch_map(&mut self) {
        // The page must exist before any await: the browser tab analog has
        // to be acquired in direct response to the user gesture.
        let page = match SpeculativePage::create() {
            Ok(page) => page,
            Err(e) => {
                self.error_detail = Some(format!("Failed to open map page: {e}"));
                return;
            }
        };
        if let Err(e) = open::that_detached(page.path()) {
            tracing::warn!("could not launch browser: {e}");
        }
        self.map_pending = true;

        let request = MapRequest::from_classified(&self.tweets);
        let client = Arc::clone(&self.client);
        let sender = self.events.sender();

        tokio::spawn(async move {
            let result: ApiResult<()> = match client.generate_map(&request).await {
                Ok(markup) => match page.publish(&markup) {
                    Ok(path) => {
                        tracing::info!(path = %path.display(), "disaster map written");
                        Ok(())
                    }
                    // An unpublished page is removed on drop.
                    Err(e) => Err(Arc::new(format!("Failed to write map: {e}"))),
                },
                Err(e) => {
                    let msg = format!("Failed to generate map: {e}");
                    page.discard();
                    Err(Arc::new(msg))
                }
            };
            let _ = sender.send(Event::App(Box::new(AppEvent::MapFinished(result))));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::types::ClassifiedTweet;

    fn test_app() -> App {
        App::new(
            AppConfig::default(),
            BackendClient::new("http://localhost:8000"),
        )
    }

    fn tweet(text: &str) -> ClassifiedTweet {
        ClassifiedTweet {
            text: text.to_string(),
            category: "flood".to_string(),
            location: None,
        }
    }

    #[tokio::test]
    async fn fetch_sets_loading_and_response_replaces_list_in_order() {
        let mut app = test_app();
        app.handle_app_event(AppEvent::FetchClassifications);
        assert!(app.loading);

        app.handle_app_event(AppEvent::ClassificationsLoaded {
            request_id: 1,
            result: Ok(vec![tweet("a"), tweet("b"), tweet("c")]),
        });
        assert!(!app.loading);
        let texts: Vec<&str> = app.tweets.iter().map(|t| t.text.as_str()).collect();
        assert_eq!(texts, ["a", "b", "c"]);
    }

    #[tokio::test]
    async fn refetch_replaces_wholesale_rather_than_merging() {
        let mut app = test_app();
        app.handle_app_event(AppEvent::FetchClassifications);
        app.handle_app_event(AppEvent::ClassificationsLoaded {
            request_id: 1,
            result: Ok(vec![tweet("a"), tweet("b")]),
        });
        app.handle_app_event(AppEvent::FetchClassifications);
        app.handle_app_event(AppEvent::ClassificationsLoaded {
            request_id: 2,
            result: Ok(vec![tweet("z")]),
        });
        assert_eq!(app.tweets.len(), 1);
        assert_eq!(app.tweets[0].text, "z");
    }

    #[tokio::test]
    async fn fetch_is_ignored_while_pending() {
        let mut app = test_app();
        app.handle_app_event(AppEvent::FetchClassifications);
        app.handle_app_event(AppEvent::FetchClassifications);

        // Only the first dispatch counts: resolving token 1 clears loading.
        app.handle_app_event(AppEvent::ClassificationsLoaded {
            request_id: 1,
            result: Ok(vec![tweet("a")]),
        });
        assert!(!app.loading);
        assert_eq!(app.tweets.len(), 1);
    }

    #[tokio::test]
    async fn stale_response_is_discarded() {
        let mut app = test_app();
        app.handle_app_event(AppEvent::FetchClassifications);

        app.handle_app_event(AppEvent::ClassificationsLoaded {
            request_id: 99,
            result: Ok(vec![tweet("stale")]),
        });
        assert!(app.loading, "a stale response must not clear the flag");
        assert!(app.tweets.is_empty());

        app.handle_app_event(AppEvent::ClassificationsLoaded {
            request_id: 1,
            result: Ok(vec![tweet("fresh")]),
        });
        assert!(!app.loading);
        assert_eq!(app.tweets[0].text, "fresh");
    }

    #[tokio::test]
    async fn classify_failure_clears_loading_and_surfaces_error() {
        let mut app = test_app();
        app.handle_app_event(AppEvent::FetchClassifications);
        app.handle_app_event(AppEvent::ClassificationsLoaded {
            request_id: 1,
            result: Err(Arc::new("connection refused".to_string())),
        });
        assert!(!app.loading);
        assert!(app.error_detail.as_deref().unwrap().contains("connection refused"));
        assert!(app.tweets.is_empty());
    }

    #[tokio::test]
    async fn selecting_a_page_leaves_the_menu_open() {
        let mut app = test_app();
        app.handle_app_event(AppEvent::ToggleMenu);
        assert!(app.menu_open);

        app.handle_app_event(AppEvent::GoTo(PageId::Tweets));
        assert_eq!(app.page, PageId::Tweets);
        assert!(app.menu_open, "navigation must not auto-close the menu");

        app.handle_app_event(AppEvent::CloseMenu);
        assert!(!app.menu_open);
    }

    #[tokio::test]
    async fn map_http_failure_surfaces_status_text() {
        let mut app = test_app();
        app.map_pending = true;
        app.handle_app_event(AppEvent::MapFinished(Err(Arc::new(
            "Failed to generate map: backend error (status 500): Server Error".to_string(),
        ))));
        assert!(!app.map_pending);
        assert!(app.error_detail.as_deref().unwrap().contains("Server Error"));
    }

    #[tokio::test]
    async fn map_transport_failure_surfaces_error_message() {
        let mut app = test_app();
        app.map_pending = true;
        app.handle_app_event(AppEvent::MapFinished(Err(Arc::new(
            "Failed to generate map: timeout".to_string(),
        ))));
        assert!(!app.map_pending);
        assert!(app.error_detail.as_deref().unwrap().contains("timeout"));
    }

    #[tokio::test]
    async fn dismiss_clears_the_error_popup() {
        let mut app = test_app();
        app.error_detail = Some("boom".to_string());
        app.handle_app_event(AppEvent::DismissError);
        assert!(app.error_detail.is_none());
    }
}
