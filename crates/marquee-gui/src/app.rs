use std::sync::Arc;
use std::time::Duration;

use iced::widget::{column, container, row, text};
use iced::{Alignment, Element, Length, Subscription, Task, Theme};

use marquee_api::{MovieDatabase, OmdbClient};
use marquee_core::config::{AppConfig, ThemeMode};
use marquee_core::models::{MovieDetails, SearchResultEntry};
use marquee_core::session::{Completion, DetailsRequest, SearchRequest, Session};
use marquee_core::ticket::Ticket;

use crate::format;
use crate::keyboard::{self, Shortcut};
use crate::poster_cache::PosterCache;
use crate::screen::{details, results, search, watched, Action};
use crate::style;
use crate::theme::{self, MarqueeTheme};
use crate::widgets::{self, Collapsible};

/// How often the OS appearance is re-checked when following the system.
const APPEARANCE_POLL: Duration = Duration::from_secs(5);

/// Application state: the session plus the chrome around it.
pub struct Marquee {
    session: Session,
    client: Arc<OmdbClient>,
    search_bar: search::SearchBar,
    // Panels
    results_panel: Collapsible,
    side_panel: Collapsible,
    posters: PosterCache,
    // Theme
    current_theme: MarqueeTheme,
    mode_setting: ThemeMode,
    active_mode: ThemeMode,
    status_message: String,
}

/// All messages the application can handle.
#[derive(Debug, Clone)]
pub enum Message {
    Search(search::Message),
    Results(results::Message),
    Details(details::Message),
    Watched(watched::Message),
    SearchFinished {
        ticket: Ticket,
        result: Result<Vec<SearchResultEntry>, String>,
    },
    DetailsFinished {
        ticket: Ticket,
        result: Result<MovieDetails, String>,
    },
    PosterLoaded {
        url: String,
        result: Result<Vec<u8>, String>,
    },
    ToggleResults,
    ToggleSide,
    Shortcut(Shortcut),
    AppearanceTick,
}

impl Marquee {
    /// Build the app and fire the search for the configured default query.
    pub fn new(config: AppConfig, client: Arc<OmdbClient>) -> (Self, Task<Message>) {
        let (session, request) = Session::start(config.search.default_query.clone());

        let mut app = Self {
            session,
            client,
            search_bar: search::SearchBar::new(config.search.default_query),
            results_panel: Collapsible::default(),
            side_panel: Collapsible::default(),
            posters: PosterCache::default(),
            current_theme: MarqueeTheme::default_theme(),
            mode_setting: config.appearance.mode,
            active_mode: theme::resolve_mode(config.appearance.mode),
            status_message: "Ready".into(),
        };
        let task = app.spawn_search(request);
        (app, task)
    }

    pub fn title(&self) -> String {
        match self.session.details().and_then(|p| p.details()) {
            Some(details) => format!("{} - Marquee", details.title),
            None => String::from("Marquee"),
        }
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::Search(msg) => {
                let action = self.search_bar.update(msg);
                self.handle_action(action)
            }
            Message::Results(msg) => {
                let action = results::update(&mut self.session, msg);
                self.handle_action(action)
            }
            Message::Details(msg) => {
                let action = details::update(&mut self.session, msg);
                self.handle_action(action)
            }
            Message::Watched(msg) => {
                let action = watched::update(&mut self.session, msg);
                self.prune_posters();
                self.handle_action(action)
            }
            Message::SearchFinished { ticket, result } => {
                let error = result.as_ref().err().cloned();
                match self.session.finish_search(ticket, result) {
                    Completion::Applied => {
                        self.status_message = format::results_found(self.session.results().len());
                        self.prune_posters();
                        let urls: Vec<String> = self
                            .session
                            .results()
                            .iter()
                            .filter_map(|r| r.poster_url.clone())
                            .collect();
                        self.request_posters(urls)
                    }
                    Completion::Failed => {
                        self.status_message =
                            format!("Search failed: {}", error.unwrap_or_default());
                        Task::none()
                    }
                    Completion::Stale => Task::none(),
                }
            }
            Message::DetailsFinished { ticket, result } => {
                match self.session.finish_details(ticket, result) {
                    Completion::Applied => {
                        let url = self
                            .session
                            .details()
                            .and_then(|p| p.details())
                            .and_then(|d| d.poster_url.clone());
                        self.request_posters(url)
                    }
                    Completion::Failed => {
                        self.status_message = "Could not load movie details".into();
                        Task::none()
                    }
                    Completion::Stale => Task::none(),
                }
            }
            Message::PosterLoaded { url, result } => {
                self.posters.finish(url, result);
                Task::none()
            }
            Message::ToggleResults => {
                self.results_panel.toggle();
                Task::none()
            }
            Message::ToggleSide => {
                self.side_panel.toggle();
                Task::none()
            }
            Message::Shortcut(shortcut) => self.handle_shortcut(shortcut),
            Message::AppearanceTick => {
                self.active_mode = theme::resolve_mode(self.mode_setting);
                Task::none()
            }
        }
    }

    fn handle_shortcut(&mut self, shortcut: Shortcut) -> Task<Message> {
        match shortcut {
            Shortcut::Escape => {
                if self.session.details().is_some() {
                    self.session.close_details();
                }
                Task::none()
            }
            Shortcut::FocusSearch => {
                iced::widget::operation::focus(iced::widget::Id::new(search::INPUT_ID))
            }
            Shortcut::SetRating(rating) => {
                self.session.set_rating(rating);
                Task::none()
            }
        }
    }

    /// Interpret an Action returned by a screen.
    fn handle_action(&mut self, action: Action) -> Task<Message> {
        match action {
            Action::None => Task::none(),
            Action::SubmitQuery(query) => match self.session.submit_query(query) {
                Some(request) => self.spawn_search(request),
                None => Task::none(),
            },
            Action::FetchDetails(request) => self.spawn_details(request),
            Action::SetStatus(msg) => {
                self.status_message = msg;
                Task::none()
            }
        }
    }

    fn spawn_search(&mut self, request: SearchRequest) -> Task<Message> {
        let SearchRequest { ticket, query } = request;
        self.status_message = format!("Searching for \"{query}\"...");
        let client = Arc::clone(&self.client);
        Task::perform(
            async move { client.search(&query).await.map_err(|e| e.to_string()) },
            move |result| Message::SearchFinished { ticket, result },
        )
    }

    fn spawn_details(&mut self, request: DetailsRequest) -> Task<Message> {
        let DetailsRequest { ticket, id } = request;
        let client = Arc::clone(&self.client);
        Task::perform(
            async move { client.details(&id).await.map_err(|e| e.to_string()) },
            move |result| Message::DetailsFinished { ticket, result },
        )
    }

    /// Evict posters that no result, watched entry, or open details
    /// view refers to.
    fn prune_posters(&mut self) {
        let session = &self.session;
        let keep = session
            .results()
            .iter()
            .filter_map(|r| r.poster_url.as_deref())
            .chain(session.watched().iter().filter_map(|e| e.poster_url.as_deref()))
            .chain(
                session
                    .details()
                    .and_then(|p| p.details())
                    .and_then(|d| d.poster_url.as_deref()),
            );
        self.posters.retain(keep);
    }

    /// Fetch every poster not already loaded or in flight.
    fn request_posters(&mut self, urls: impl IntoIterator<Item = String>) -> Task<Message> {
        let tasks: Vec<Task<Message>> = urls
            .into_iter()
            .filter(|url| self.posters.begin(url))
            .map(|url| {
                let client = Arc::clone(&self.client);
                let fetch_url = url.clone();
                Task::perform(
                    async move {
                        client
                            .fetch_poster(&fetch_url)
                            .await
                            .map_err(|e| e.to_string())
                    },
                    move |result| Message::PosterLoaded { url, result },
                )
            })
            .collect();
        if tasks.is_empty() {
            Task::none()
        } else {
            Task::batch(tasks)
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        let cs = self.current_theme.colors(self.active_mode);

        // ── Top bar ──────────────────────────────────────────────
        let logo = row![
            lucide_icons::iced::icon_clapperboard()
                .size(style::TEXT_XL)
                .color(cs.primary),
            text("Marquee")
                .size(style::TEXT_XL)
                .font(style::FONT_HEADING)
                .line_height(style::LINE_HEIGHT_TIGHT),
        ]
        .spacing(style::SPACE_SM)
        .align_y(Alignment::Center)
        .width(Length::Fill);

        let num_results = container(
            text(format::results_found(self.session.results().len()))
                .size(style::TEXT_SM)
                .line_height(style::LINE_HEIGHT_NORMAL),
        )
        .width(Length::Fill)
        .align_x(iced::alignment::Horizontal::Right);

        let top_bar = container(
            row![
                logo,
                self.search_bar.view(cs).map(Message::Search),
                num_results
            ]
            .spacing(style::SPACE_LG)
            .align_y(Alignment::Center),
        )
        .style(theme::top_bar(cs))
        .padding([style::SPACE_SM, style::SPACE_XL])
        .width(Length::Fill)
        .height(Length::Fixed(style::TOP_BAR_HEIGHT))
        .center_y(Length::Fixed(style::TOP_BAR_HEIGHT));

        // ── Panels ───────────────────────────────────────────────
        let left = widgets::collapsible(
            cs,
            "Results",
            self.results_panel,
            Message::ToggleResults,
            results::view(cs, &self.session, &self.posters).map(Message::Results),
        );

        let right = match self.session.details() {
            Some(panel) => widgets::collapsible(
                cs,
                "Details",
                self.side_panel,
                Message::ToggleSide,
                details::view(cs, panel, self.session.watched(), &self.posters)
                    .map(Message::Details),
            ),
            None => widgets::collapsible(
                cs,
                "Watched",
                self.side_panel,
                Message::ToggleSide,
                watched::view(cs, &self.session, &self.posters).map(Message::Watched),
            ),
        };

        let panels = row![left, right]
            .spacing(style::SPACE_LG)
            .height(Length::Fill);

        let status_bar = container(
            text(&self.status_message)
                .size(style::TEXT_XS)
                .line_height(style::LINE_HEIGHT_LOOSE),
        )
        .style(theme::status_bar(cs))
        .width(Length::Fill)
        .height(Length::Fixed(style::STATUS_BAR_HEIGHT))
        .padding([style::SPACE_XS, style::SPACE_MD]);

        column![
            container(column![top_bar, panels].spacing(style::SPACE_LG))
                .padding(style::SPACE_LG)
                .height(Length::Fill),
            status_bar,
        ]
        .into()
    }

    pub fn subscription(&self) -> Subscription<Message> {
        let appearance = if self.mode_setting == ThemeMode::System {
            iced::time::every(APPEARANCE_POLL).map(|_| Message::AppearanceTick)
        } else {
            Subscription::none()
        };
        Subscription::batch([keyboard::keyboard_subscription(), appearance])
    }

    pub fn theme(&self) -> Theme {
        self.current_theme.iced_theme(self.active_mode)
    }
}
