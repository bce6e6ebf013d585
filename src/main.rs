use iced::widget::{column, container, scrollable, text};
use iced::{Alignment, Element, Length, Task, Theme};

mod api;
mod config;
mod error;
mod logging;
mod state;
mod ui;

use api::UnsplashClient;
use config::Config;
use error::SearchError;
use state::data::SearchPage;
use state::search::{Category, FetchTicket, SearchState};
use state::thumbnails::Thumbnails;

/// Main application state
struct ImageSearch {
    /// Client for the remote search API
    client: UnsplashClient,
    /// Query, results, pagination, loading flag and error line
    search: SearchState,
    /// Thumbnails of the results currently on screen
    thumbnails: Thumbnails,
}

/// Application messages (events)
#[derive(Debug, Clone)]
enum Message {
    /// User edited the search field
    QueryChanged(String),
    /// User pressed Enter or clicked "Search"
    Submit,
    /// User clicked one of the category shortcuts
    CategorySelected(Category),
    /// User clicked "Previous"
    PreviousPage,
    /// User clicked "Next"
    NextPage,
    /// A search request finished (possibly superseded by a newer one)
    SearchCompleted(FetchTicket, Result<SearchPage, SearchError>),
    /// A thumbnail download finished
    ThumbnailLoaded {
        generation: u64,
        id: String,
        result: Result<Vec<u8>, SearchError>,
    },
}

impl ImageSearch {
    /// Create a new instance of the application
    fn new(client: UnsplashClient) -> (Self, Task<Message>) {
        tracing::info!(api_url = %client.config().api_url, "Image Search initialized");

        let mut app = ImageSearch {
            client,
            search: SearchState::new(),
            thumbnails: Thumbnails::new(),
        };

        // Mount-time fetch; a no-op while the search field is empty
        let ticket = app.search.fetch();
        let task = app.start_fetch(ticket);

        (app, task)
    }

    /// Handle application messages and update state
    fn update(&mut self, message: Message) -> Task<Message> {
        match message {
            Message::QueryChanged(query) => {
                self.search.set_query(query);
                Task::none()
            }
            Message::Submit => {
                let ticket = self.search.submit();
                self.start_fetch(ticket)
            }
            Message::CategorySelected(category) => {
                let ticket = self.search.select_category(category);
                self.start_fetch(ticket)
            }
            Message::PreviousPage => {
                let ticket = self.search.previous_page();
                self.start_fetch(ticket)
            }
            Message::NextPage => {
                let ticket = self.search.next_page();
                self.start_fetch(ticket)
            }
            Message::SearchCompleted(ticket, Ok(page)) => {
                let count = page.images.len();
                let total_pages = page.total_pages;

                if !self.search.apply_page(&ticket, page) {
                    tracing::debug!(generation = ticket.generation, "Discarding stale search response");
                    return Task::none();
                }

                tracing::info!(
                    query = %ticket.query,
                    page = ticket.page,
                    count,
                    total_pages,
                    "Search complete"
                );
                self.load_thumbnails(ticket.generation)
            }
            Message::SearchCompleted(ticket, Err(err)) => {
                if self.search.apply_error(&ticket, &err) {
                    tracing::warn!(query = %ticket.query, page = ticket.page, %err, "Search request failed");
                } else {
                    tracing::debug!(generation = ticket.generation, %err, "Discarding stale search failure");
                }
                Task::none()
            }
            Message::ThumbnailLoaded { generation, id, result } => {
                let applied = match result {
                    Ok(bytes) => self.thumbnails.loaded(generation, &id, bytes),
                    Err(err) => {
                        tracing::warn!(%id, %err, "Thumbnail download failed");
                        self.thumbnails.failed(generation, &id)
                    }
                };

                if !applied {
                    tracing::debug!(generation, %id, "Discarding thumbnail from a previous page");
                } else if self.thumbnails.pending() == 0 {
                    tracing::debug!(generation, "All thumbnails loaded");
                }
                Task::none()
            }
        }
    }

    /// Turn an issued fetch into a background request
    fn start_fetch(&self, ticket: Option<FetchTicket>) -> Task<Message> {
        let Some(ticket) = ticket else {
            return Task::none();
        };

        tracing::debug!(
            query = %ticket.query,
            page = ticket.page,
            generation = ticket.generation,
            "Fetching images"
        );

        let client = self.client.clone();
        Task::perform(
            async move {
                let result = client.search(&ticket.query, ticket.page).await;
                (ticket, result)
            },
            |(ticket, result)| Message::SearchCompleted(ticket, result),
        )
    }

    /// Download the thumbnails of the page that was just applied
    fn load_thumbnails(&mut self, generation: u64) -> Task<Message> {
        self.thumbnails.start_page(generation, self.search.images());

        let downloads = self.search.images().iter().map(|photo| {
            let client = self.client.clone();
            let id = photo.id.clone();
            let url = photo.thumbnail_url.clone();

            Task::perform(
                async move {
                    let result = client.download_thumbnail(&url).await;
                    (id, result)
                },
                move |(id, result)| Message::ThumbnailLoaded { generation, id, result },
            )
        });

        Task::batch(downloads)
    }

    /// Build the user interface
    fn view(&self) -> Element<'_, Message> {
        let results: Element<'_, Message> = if self.search.is_loading() {
            ui::grid::loading_indicator()
        } else {
            column![
                ui::grid::thumbnail_grid(self.search.images(), &self.thumbnails),
                ui::controls::pagination(&self.search),
            ]
            .spacing(20)
            .align_x(Alignment::Center)
            .into()
        };

        let content = column![
            text("Image Search").size(48),
            ui::controls::search_bar(&self.search),
            ui::controls::category_shortcuts(),
            results,
            ui::controls::error_line(&self.search),
        ]
        .spacing(20)
        .padding(40)
        .max_width(1100)
        .align_x(Alignment::Center);

        container(scrollable(container(content).center_x(Length::Fill)))
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }

    /// Set the application theme
    fn theme(&self) -> Theme {
        Theme::Dark
    }
}

fn main() -> iced::Result {
    logging::init();

    let config = Config::load();
    if !config.has_access_key() {
        tracing::warn!("No Unsplash access key configured; build with UNSPLASH_ACCESS_KEY set");
    }

    let client = match UnsplashClient::new(config) {
        Ok(client) => client,
        Err(err) => {
            tracing::error!(%err, "Failed to initialize HTTP client");
            std::process::exit(1);
        }
    };

    iced::application(
        "Image Search",
        ImageSearch::update,
        ImageSearch::view,
    )
    .theme(ImageSearch::theme)
    .centered()
    .run_with(move || ImageSearch::new(client.clone()))
}
