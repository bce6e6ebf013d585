/// Shared data structures for the application state
///
/// The `Api*` structs mirror the JSON returned by the Unsplash search
/// endpoint. `Image` is the trimmed-down form the UI works with.

use serde::Deserialize;

/// Body of a successful `GET /search/photos`
#[derive(Debug, Clone, Deserialize)]
pub struct SearchResponse {
    /// Photos on the requested page, in rank order
    pub results: Vec<ApiPhoto>,
    /// Number of pages available for this query
    pub total_pages: u32,
}

/// One photo entry as returned by the API (unused fields ignored)
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPhoto {
    pub id: String,
    pub urls: ApiPhotoUrls,
    #[serde(default)]
    pub alt_description: Option<String>,
}

/// Rendition URLs of a photo; only the small one is displayed
#[derive(Debug, Clone, Deserialize)]
pub struct ApiPhotoUrls {
    pub small: String,
}

/// Represents a single search result
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Image {
    /// Unique photo ID from the API
    pub id: String,
    /// URL of the small rendition shown in the grid
    pub thumbnail_url: String,
    /// Alt text; empty when the API has none
    pub alt_description: String,
}

impl From<ApiPhoto> for Image {
    fn from(photo: ApiPhoto) -> Self {
        Self {
            id: photo.id,
            thumbnail_url: photo.urls.small,
            alt_description: photo.alt_description.unwrap_or_default(),
        }
    }
}

/// One page of results, converted for the UI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchPage {
    pub images: Vec<Image>,
    pub total_pages: u32,
}

impl From<SearchResponse> for SearchPage {
    fn from(response: SearchResponse) -> Self {
        Self {
            images: response.results.into_iter().map(Image::from).collect(),
            total_pages: response.total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "total": 2,
        "total_pages": 1,
        "results": [
            {
                "id": "eOLpJytrbsQ",
                "width": 4000,
                "urls": {
                    "raw": "https://images.unsplash.com/photo-1?raw",
                    "small": "https://images.unsplash.com/photo-1?w=400"
                },
                "alt_description": "a bird on a branch"
            },
            {
                "id": "Xz9Yq1",
                "urls": { "small": "https://images.unsplash.com/photo-2?w=400" },
                "alt_description": null
            }
        ]
    }"#;

    #[test]
    fn test_parse_search_response() {
        let response: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
        let page = SearchPage::from(response);

        assert_eq!(page.total_pages, 1);
        assert_eq!(page.images.len(), 2);
        assert_eq!(page.images[0].id, "eOLpJytrbsQ");
        assert_eq!(
            page.images[0].thumbnail_url,
            "https://images.unsplash.com/photo-1?w=400"
        );
        assert_eq!(page.images[0].alt_description, "a bird on a branch");
    }

    #[test]
    fn test_null_alt_description_becomes_empty() {
        let response: SearchResponse = serde_json::from_str(SAMPLE).unwrap();
        let page = SearchPage::from(response);
        assert_eq!(page.images[1].alt_description, "");
    }

    #[test]
    fn test_missing_results_is_an_error() {
        let parsed = serde_json::from_str::<SearchResponse>(r#"{"total_pages": 3}"#);
        assert!(parsed.is_err());
    }
}
