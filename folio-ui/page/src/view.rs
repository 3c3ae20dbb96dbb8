use iced::widget::{
    Column, Row, button, column, container, row, scrollable, space, text,
};
use iced::{Alignment, Element, Length};

use folio_state::{Project, TestimonialItem, ThemeMode};

use crate::page::{Event, Page};

const OUTER_PADDING: f32 = 24.0;
const HEADER_PADDING: f32 = 16.0;

/// Height used for blocks rendered before any layout was registered.
const FALLBACK_BLOCK_HEIGHT: f32 = 600.0;

pub(crate) fn page(page: &Page) -> Element<'_, Event> {
    let mut stack = Column::new().push(header(page));
    if page.menu().is_open() {
        stack = stack.push(drawer(page));
    }

    stack.push(body(page)).into()
}

fn header(page: &Page) -> Element<'_, Event> {
    let active = page.scroll_state().active_section.as_str();

    let mut links = Row::new().spacing(12.0);
    for link in &page.content().nav_links {
        let style = if link.id == active {
            button::primary
        } else {
            button::text
        };
        links = links.push(
            button(text(link.label.as_str()))
                .style(style)
                .on_press(Event::NavLinkPressed(link.id.clone())),
        );
    }

    let theme_label = match page.theme_mode() {
        ThemeMode::Dark => "Light mode",
        ThemeMode::Light => "Dark mode",
    };

    let bar = row![
        text("folio").size(20),
        space::horizontal(),
        links,
        button(text(theme_label))
            .style(button::text)
            .on_press(Event::ThemeToggled),
        button(text("Menu"))
            .style(button::text)
            .on_press(Event::MenuToggled),
    ]
    .spacing(16.0)
    .align_y(Alignment::Center);

    // The border stands in for the elevated header treatment applied
    // once the page is scrolled.
    let style = if page.scroll_state().scrolled {
        container::bordered_box
    } else {
        container::transparent
    };

    container(bar)
        .width(Length::Fill)
        .padding(HEADER_PADDING)
        .style(style)
        .into()
}

fn drawer(page: &Page) -> Element<'_, Event> {
    let mut links = Column::new().spacing(8.0);
    for link in &page.content().nav_links {
        links = links.push(
            button(text(link.label.as_str()))
                .style(button::text)
                .on_press(Event::NavLinkPressed(link.id.clone())),
        );
    }

    container(links)
        .width(Length::Fill)
        .padding(HEADER_PADDING)
        .style(container::bordered_box)
        .into()
}

fn body(page: &Page) -> Element<'_, Event> {
    let mut stack = Column::new().width(Length::Fill);
    match page.layout() {
        Some(layout) => {
            for bounds in &layout.sections {
                stack = stack.push(section(page, &bounds.id, bounds.height));
            }
            stack = stack.push(carousel(page, layout.carousel.height));
        },
        None => {
            for link in &page.content().nav_links {
                stack = stack
                    .push(section(page, &link.id, FALLBACK_BLOCK_HEIGHT));
            }
            stack = stack.push(carousel(page, FALLBACK_BLOCK_HEIGHT));
        },
    }

    scrollable(stack)
        .id(page.scrollable_id())
        .on_scroll(|viewport| Event::Scrolled(viewport.absolute_offset()))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

fn section<'a>(
    page: &'a Page,
    id: &'a str,
    height: f32,
) -> Element<'a, Event> {
    let label = page
        .content()
        .nav_links
        .iter()
        .find(|link| link.id == id)
        .map(|link| link.label.as_str())
        .unwrap_or(id);

    let mut block = Column::new().spacing(16.0).push(text(label).size(32));
    if id == "projects" {
        block = block.push(featured_projects(page));
    }

    container(block)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(OUTER_PADDING)
        .into()
}

fn featured_projects(page: &Page) -> Element<'_, Event> {
    let mut cards = Row::new().spacing(16.0);
    for project in page.content().featured() {
        cards = cards.push(project_card(project));
    }

    cards.into()
}

fn project_card(project: &Project) -> Element<'_, Event> {
    container(
        column![
            text(project.title.as_str()).size(18),
            text(project.description.as_str()).size(14),
            text(project.tags.join(" / ")).size(12),
        ]
        .spacing(8.0),
    )
    .padding(HEADER_PADDING)
    .style(container::rounded_box)
    .into()
}

fn carousel(page: &Page, height: f32) -> Element<'_, Event> {
    let items = &page.content().testimonials;
    let state = page.carousel_state();

    let mut block =
        Column::new().spacing(16.0).push(text("Testimonials").size(32));

    if let Some(item) = items.get(state.current_index) {
        let mut dots = Row::new().spacing(8.0);
        for index in 0..items.len() {
            let marker =
                if index == state.current_index { "●" } else { "○" };
            dots = dots.push(
                button(text(marker))
                    .style(button::text)
                    .on_press(Event::DotPressed(index)),
            );
        }

        let controls = row![
            button(text("Prev"))
                .style(button::text)
                .on_press(Event::PreviousPressed),
            dots,
            button(text("Next"))
                .style(button::text)
                .on_press(Event::NextPressed),
        ]
        .spacing(16.0)
        .align_y(Alignment::Center);

        block = block.push(quote(item)).push(controls);
    }

    container(block)
        .width(Length::Fill)
        .height(Length::Fixed(height))
        .padding(OUTER_PADDING)
        .into()
}

fn quote(item: &TestimonialItem) -> Element<'_, Event> {
    column![
        text(item.content.as_str()).size(18),
        text(item.name.as_str()).size(14),
        text(format!("{}, {}", item.role, item.company)).size(12),
    ]
    .spacing(8.0)
    .into()
}
