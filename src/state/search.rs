/// Search screen state machine
///
/// All transitions are plain methods on `SearchState`. Any transition that
/// needs data from the network returns a `FetchTicket`; the caller performs
/// the request and hands the ticket back together with the outcome. Only the
/// ticket of the most recently issued fetch is applied, so a slow response
/// for an old page can never overwrite a newer one.

use super::data::{Image, SearchPage};
use crate::config::IMAGES_PER_PAGE;
use crate::error::SearchError;

/// Preset search terms offered as one-click shortcuts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Nature,
    Birds,
    Cats,
    Shoes,
}

impl Category {
    /// All shortcuts in display order
    pub const ALL: [Category; 4] = [
        Category::Nature,
        Category::Birds,
        Category::Cats,
        Category::Shoes,
    ];

    /// Search term sent to the API
    pub fn query(self) -> &'static str {
        match self {
            Category::Nature => "nature",
            Category::Birds => "birds",
            Category::Cats => "cats",
            Category::Shoes => "shoes",
        }
    }

    /// Label shown on the shortcut
    pub fn label(self) -> &'static str {
        match self {
            Category::Nature => "Nature",
            Category::Birds => "Birds",
            Category::Cats => "Cats",
            Category::Shoes => "Shoes",
        }
    }
}

/// Identifies one issued fetch: what was asked for, and in which order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchTicket {
    /// Sequence number; the highest one issued is the only live fetch
    pub generation: u64,
    /// Search term, exactly as entered
    pub query: String,
    /// 1-based page requested
    pub page: u32,
}

/// Everything the search screen displays
#[derive(Debug, Clone)]
pub struct SearchState {
    query: String,
    images: Vec<Image>,
    page: u32,
    total_pages: u32,
    loading: bool,
    error_message: String,
    generation: u64,
}

impl Default for SearchState {
    fn default() -> Self {
        Self {
            query: String::new(),
            images: Vec::new(),
            page: 1,
            total_pages: 0,
            loading: false,
            error_message: String::new(),
            generation: 0,
        }
    }
}

impl SearchState {
    /// Create the initial (empty) screen state
    pub fn new() -> Self {
        Self::default()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn images(&self) -> &[Image] {
        &self.images
    }

    pub fn page(&self) -> u32 {
        self.page
    }

    pub fn total_pages(&self) -> u32 {
        self.total_pages
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    /// Last error, or an empty string
    pub fn error_message(&self) -> &str {
        &self.error_message
    }

    /// Generation of the latest issued fetch (0 before the first one)
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Store the text of the search field. Does not fetch.
    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    /// Start a new search for the current query from page 1
    pub fn submit(&mut self) -> Option<FetchTicket> {
        self.page = 1;
        self.fetch()
    }

    /// Replace the query with a preset term and search from page 1
    pub fn select_category(&mut self, category: Category) -> Option<FetchTicket> {
        self.set_query(category.query());
        self.submit()
    }

    pub fn has_previous(&self) -> bool {
        self.page > 1
    }

    pub fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Step back one page and fetch it
    pub fn previous_page(&mut self) -> Option<FetchTicket> {
        if !self.has_previous() {
            return None;
        }
        self.page -= 1;
        self.fetch()
    }

    /// Step forward one page and fetch it
    pub fn next_page(&mut self) -> Option<FetchTicket> {
        if !self.has_next() {
            return None;
        }
        self.page += 1;
        self.fetch()
    }

    /// Issue a fetch for the current query and page.
    ///
    /// Returns `None` without touching any state when the query is empty.
    /// Otherwise marks the screen as loading, clears the previous error and
    /// supersedes any fetch still in flight. The query is sent as typed.
    pub fn fetch(&mut self) -> Option<FetchTicket> {
        if self.query.is_empty() {
            return None;
        }

        self.generation += 1;
        self.loading = true;
        self.error_message.clear();

        Some(FetchTicket {
            generation: self.generation,
            query: self.query.clone(),
            page: self.page,
        })
    }

    /// Whether a completed fetch is still the one the screen is waiting for
    pub fn is_current(&self, ticket: &FetchTicket) -> bool {
        ticket.generation == self.generation
    }

    /// Apply a successful response. Returns `false` (and changes nothing)
    /// for a superseded ticket.
    pub fn apply_page(&mut self, ticket: &FetchTicket, mut result: SearchPage) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        result.images.truncate(IMAGES_PER_PAGE as usize);
        self.images = result.images;
        self.total_pages = result.total_pages;
        self.loading = false;
        true
    }

    /// Record a failed fetch. Results and page stay as they were.
    /// Returns `false` (and changes nothing) for a superseded ticket.
    pub fn apply_error(&mut self, ticket: &FetchTicket, error: &SearchError) -> bool {
        if !self.is_current(ticket) {
            return false;
        }

        self.error_message = error.user_message();
        self.loading = false;
        true
    }
}
