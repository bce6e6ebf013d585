/// State management module
///
/// This module holds all application state, including:
/// - API wire types and the UI image model (data.rs)
/// - The search screen state machine and category shortcuts (search.rs)
/// - Thumbnail download tracking for the visible page (thumbnails.rs)

pub mod data;
pub mod search;
pub mod thumbnails;
