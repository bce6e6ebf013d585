/// Download state of the thumbnails on the current result page
///
/// Entries are keyed by photo ID and tagged with the fetch generation they
/// belong to. Starting a new page throws everything away; late downloads
/// from an older page are ignored.

use iced::widget::image::Handle;
use std::collections::HashMap;

use super::data::Image;

/// State of a single thumbnail
#[derive(Debug, Clone)]
pub enum Thumbnail {
    /// Download in flight
    Loading,
    /// Decoded lazily by the image widget
    Ready(Handle),
    /// Download failed; the grid falls back to the alt text
    Failed,
}

/// Thumbnails for one page of results
#[derive(Debug, Default)]
pub struct Thumbnails {
    generation: u64,
    entries: HashMap<String, Thumbnail>,
}

impl Thumbnails {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a freshly applied page and mark every image as loading
    pub fn start_page(&mut self, generation: u64, images: &[Image]) {
        self.generation = generation;
        self.entries = images
            .iter()
            .map(|image| (image.id.clone(), Thumbnail::Loading))
            .collect();
    }

    /// Store downloaded bytes. Ignored for another generation or an unknown id.
    pub fn loaded(&mut self, generation: u64, id: &str, bytes: Vec<u8>) -> bool {
        self.set(generation, id, Thumbnail::Ready(Handle::from_bytes(bytes)))
    }

    /// Mark a thumbnail as failed. Ignored for another generation or an unknown id.
    pub fn failed(&mut self, generation: u64, id: &str) -> bool {
        self.set(generation, id, Thumbnail::Failed)
    }

    pub fn get(&self, id: &str) -> Option<&Thumbnail> {
        self.entries.get(id)
    }

    /// Number of thumbnails still downloading
    pub fn pending(&self) -> usize {
        self.entries
            .values()
            .filter(|thumbnail| matches!(thumbnail, Thumbnail::Loading))
            .count()
    }

    fn set(&mut self, generation: u64, id: &str, thumbnail: Thumbnail) -> bool {
        if generation != self.generation {
            return false;
        }
        match self.entries.get_mut(id) {
            Some(entry) => {
                *entry = thumbnail;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(ids: &[&str]) -> Vec<Image> {
        ids.iter()
            .map(|id| Image {
                id: id.to_string(),
                thumbnail_url: format!("https://images.example/{}.jpg", id),
                alt_description: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_start_page_marks_all_loading() {
        let page = images(&["a", "b", "c"]);
        let mut thumbnails = Thumbnails::new();

        thumbnails.start_page(1, &page);

        assert_eq!(thumbnails.pending(), 3);
        assert!(matches!(thumbnails.get("b"), Some(Thumbnail::Loading)));
    }

    #[test]
    fn test_loaded_and_failed() {
        let page = images(&["a", "b"]);
        let mut thumbnails = Thumbnails::new();
        thumbnails.start_page(1, &page);

        assert!(thumbnails.loaded(1, "a", vec![0xFF, 0xD8, 0xFF, 0xD9]));
        assert!(thumbnails.failed(1, "b"));

        assert!(matches!(thumbnails.get("a"), Some(Thumbnail::Ready(_))));
        assert!(matches!(thumbnails.get("b"), Some(Thumbnail::Failed)));
        assert_eq!(thumbnails.pending(), 0);
    }

    #[test]
    fn test_late_download_from_old_page_ignored() {
        let mut thumbnails = Thumbnails::new();
        thumbnails.start_page(1, &images(&["a"]));
        thumbnails.start_page(2, &images(&["a", "z"]));

        assert!(!thumbnails.loaded(1, "a", vec![1, 2, 3]));
        assert!(matches!(thumbnails.get("a"), Some(Thumbnail::Loading)));
    }

    #[test]
    fn test_late_failure_from_old_page_reports_not_applied() {
        let mut thumbnails = Thumbnails::new();
        thumbnails.start_page(1, &images(&["a", "b"]));
        thumbnails.start_page(2, &images(&["c"]));

        assert!(!thumbnails.failed(1, "a"));
        assert!(thumbnails.get("a").is_none());
        assert_eq!(thumbnails.pending(), 1);

        assert!(thumbnails.loaded(2, "c", vec![0xFF, 0xD8]));
        assert_eq!(thumbnails.pending(), 0);
    }

    #[test]
    fn test_unknown_id_ignored() {
        let mut thumbnails = Thumbnails::new();
        thumbnails.start_page(4, &images(&["a"]));
        assert!(!thumbnails.failed(4, "missing"));
        assert!(thumbnails.get("missing").is_none());
    }
}
