use iced::widget::{column, container, image, text, Space};
use iced::{ContentFit, Element, Length};
use iced_aw::Wrap;

use crate::state::data::Image;
use crate::state::thumbnails::{Thumbnail, Thumbnails};
use crate::Message;

/// Size of one grid tile in logical pixels
const TILE_WIDTH: f32 = 240.0;
const TILE_HEIGHT: f32 = 180.0;

/// Shown in place of the grid while a search is running
pub fn loading_indicator<'a>() -> Element<'a, Message> {
    container(text("Loading...").size(20))
        .padding(40)
        .center_x(Length::Fill)
        .into()
}

/// Wrapped grid of result thumbnails, in API rank order
pub fn thumbnail_grid<'a>(images: &'a [Image], thumbnails: &'a Thumbnails) -> Element<'a, Message> {
    if images.is_empty() {
        return Space::new(Length::Shrink, Length::Shrink).into();
    }

    let tiles: Vec<Element<'a, Message>> = images
        .iter()
        .map(|photo| tile(photo, thumbnails.get(&photo.id)))
        .collect();

    Wrap::with_elements(tiles)
        .spacing(12.0)
        .line_spacing(12.0)
        .into()
}

/// A single tile: the picture (or a placeholder) above its alt text
fn tile<'a>(photo: &'a Image, thumbnail: Option<&'a Thumbnail>) -> Element<'a, Message> {
    let picture: Element<'a, Message> = match thumbnail {
        Some(Thumbnail::Ready(handle)) => image(handle.clone())
            .width(Length::Fixed(TILE_WIDTH))
            .height(Length::Fixed(TILE_HEIGHT))
            .content_fit(ContentFit::Cover)
            .into(),
        Some(Thumbnail::Failed) => placeholder("Image unavailable"),
        Some(Thumbnail::Loading) | None => placeholder("..."),
    };

    column![
        picture,
        text(&photo.alt_description)
            .size(12)
            .width(Length::Fixed(TILE_WIDTH)),
    ]
    .spacing(4)
    .into()
}

fn placeholder<'a>(label: &'a str) -> Element<'a, Message> {
    container(text(label).size(14))
        .width(Length::Fixed(TILE_WIDTH))
        .height(Length::Fixed(TILE_HEIGHT))
        .center_x(Length::Fixed(TILE_WIDTH))
        .center_y(Length::Fixed(TILE_HEIGHT))
        .style(container::rounded_box)
        .into()
}
