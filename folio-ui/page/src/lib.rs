//! One-page portfolio choreography for iced.
//!
//! [`Page`] owns the pure state machines from `folio-state` and adapts
//! them to the iced runtime: scrollable viewport updates and button
//! presses flow in as [`Event`]s, a demand-driven tick subscription
//! drives the scroll throttle and the carousel cadence, and nav presses
//! come back out as `scroll_to` tasks. A minimal set of built-in widgets
//! renders the page; embedders that bring their own view only need the
//! event routing and the snapshots.

mod page;
mod settings;
mod view;
mod viewport;

pub use page::{Event, Page};
pub use settings::PageSettings;
pub use viewport::{Layout, Region};
