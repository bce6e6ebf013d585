/// Remote API module
///
/// This module handles:
/// - Building and sending photo search requests
/// - Downloading thumbnails for the result grid

pub mod client;

pub use client::UnsplashClient;
