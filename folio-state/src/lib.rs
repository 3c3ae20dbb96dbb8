//! State machines behind a one-page portfolio site.
//!
//! Pure logic with no UI dependency: the scroll-driven navigation state,
//! the auto-advancing testimonial carousel, the mobile menu drawer, the
//! color scheme toggle, and the static content model they read from.
//! Every time-sensitive operation takes an injected clock, so scheduling
//! behavior is fully deterministic under test.

mod carousel;
mod content;
mod menu;
mod scroll;
mod theme;

pub use carousel::{
    CarouselController, CarouselError, CarouselSettings, CarouselState,
    Direction, Phase,
};
pub use content::{Content, ContentError, NavLink, Project, TestimonialItem};
pub use menu::MenuState;
pub use scroll::{ScrollSettings, ScrollState, ScrollTracker, SectionBounds};
pub use theme::ThemeMode;
