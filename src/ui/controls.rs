use iced::widget::{button, row, text, text_input, Row};
use iced::{Alignment, Element, Length};

use crate::state::search::{Category, SearchState};
use crate::Message;

/// Search field with its submit button. Enter submits as well.
pub fn search_bar(state: &SearchState) -> Element<'_, Message> {
    let input = text_input("Type something to search...", state.query())
        .on_input(Message::QueryChanged)
        .on_submit(Message::Submit)
        .padding(10)
        .size(18)
        .width(Length::Fill);

    row![
        input,
        button("Search").on_press(Message::Submit).padding(10),
    ]
    .spacing(10)
    .align_y(Alignment::Center)
    .into()
}

/// One button per preset category
pub fn category_shortcuts<'a>() -> Element<'a, Message> {
    let shortcuts: Vec<Element<'a, Message>> = Category::ALL
        .iter()
        .map(|&category| {
            button(text(category.label()))
                .on_press(Message::CategorySelected(category))
                .style(button::secondary)
                .padding([6, 16])
                .into()
        })
        .collect();

    Row::with_children(shortcuts).spacing(10).into()
}

/// Previous/next buttons. Each one is only rendered when it can be used.
pub fn pagination(state: &SearchState) -> Element<'_, Message> {
    let mut controls = row![].spacing(20).align_y(Alignment::Center);

    if state.has_previous() {
        controls = controls.push(
            button("Previous")
                .on_press(Message::PreviousPage)
                .padding(10),
        );
    }

    if state.total_pages() > 0 {
        controls = controls.push(
            text(format!("Page {} of {}", state.page(), state.total_pages())).size(14),
        );
    }

    if state.has_next() {
        controls = controls.push(button("Next").on_press(Message::NextPage).padding(10));
    }

    controls.into()
}

/// Last error message; blank when there is none
pub fn error_line(state: &SearchState) -> Element<'_, Message> {
    text(state.error_message())
        .size(16)
        .style(text::danger)
        .into()
}
