use std::time::Instant;

use iced::widget::{Id, operation::scroll_to, scrollable::AbsoluteOffset};
use iced::{Element, Subscription, Task};

use folio_state::{
    CarouselController, CarouselState, Content, MenuState, ScrollState,
    ScrollTracker, ThemeMode,
};

use crate::settings::PageSettings;
use crate::view;
use crate::viewport::Layout;

/// Smallest visible share of the carousel block that keeps its automatic
/// cadence running.
const VISIBILITY_THRESHOLD: f32 = 0.5;

/// Interactive events produced by the page widgets and subscriptions.
#[derive(Debug, Clone)]
pub enum Event {
    /// The page scrollable reported a new absolute offset.
    Scrolled(AbsoluteOffset),

    /// Periodic tick driving throttle flushes and the carousel cadence.
    Tick,

    /// A header or drawer nav link was pressed.
    NavLinkPressed(String),

    /// Manual carousel advance.
    NextPressed,

    /// Manual carousel retreat.
    PreviousPressed,

    /// One of the carousel dots was pressed.
    DotPressed(usize),

    /// The mobile menu button was pressed.
    MenuToggled,

    /// The color scheme button was pressed.
    ThemeToggled,
}

/// Controller for a one-page portfolio.
///
/// Owns the pure state machines and the scrollable they observe, routes
/// [`Event`]s into them, and reports what the embedding application
/// should render. Timer work is demand-driven: [`Page::subscription`]
/// arms a tick stream only while some machine needs time to pass.
pub struct Page {
    settings: PageSettings,
    content: Content,
    scroll: ScrollTracker,
    carousel: CarouselController,
    menu: MenuState,
    theme: ThemeMode,
    layout: Option<Layout>,
    offset: f32,
    scrollable_id: Id,
}

impl Page {
    /// Build a page over a validated content document.
    pub fn new(content: Content, settings: PageSettings) -> Self {
        let scroll = ScrollTracker::new(settings.scroll());
        let carousel = CarouselController::new(
            content.testimonials.len(),
            settings.carousel(),
        );

        Self {
            settings,
            content,
            scroll,
            carousel,
            menu: MenuState::default(),
            theme: ThemeMode::default(),
            layout: None,
            offset: 0.0,
            scrollable_id: Id::unique(),
        }
    }

    /// Register measured geometry.
    ///
    /// Replaces the tracked section list and re-evaluates scroll state
    /// and carousel visibility immediately, so a reflow never waits for
    /// the next scroll event.
    pub fn set_layout(&mut self, layout: Layout) {
        if self.scroll.set_sections(layout.sections.clone()) {
            log::debug!(
                "layout registered, active section is {}",
                self.scroll.state().active_section
            );
        }
        self.layout = Some(layout);
        self.sync_visibility(Instant::now());
    }

    /// Route one event; returns any follow-up task for the runtime.
    pub fn handle(&mut self, event: Event) -> Task<Event> {
        let now = Instant::now();
        match event {
            Event::Scrolled(offset) => {
                self.offset = offset.y;
                // Visibility is plain arithmetic and stays unthrottled;
                // only the section scan is rate-limited.
                self.sync_visibility(now);
                self.scroll.record_scroll(self.offset, now);
                Task::none()
            },
            Event::Tick => {
                self.scroll.flush(now);
                if self.carousel.tick(now) {
                    log::debug!(
                        "carousel auto-advanced to {}",
                        self.carousel.current_index()
                    );
                }
                Task::none()
            },
            Event::NavLinkPressed(id) => {
                self.menu.close();
                self.scroll_to_section(&id, now)
            },
            Event::NextPressed => {
                self.carousel.next(now);
                Task::none()
            },
            Event::PreviousPressed => {
                self.carousel.previous(now);
                Task::none()
            },
            Event::DotPressed(index) => {
                if let Err(err) = self.carousel.jump_to(index, now) {
                    log::warn!("ignored carousel jump: {err}");
                }
                Task::none()
            },
            Event::MenuToggled => {
                self.menu.toggle();
                Task::none()
            },
            Event::ThemeToggled => {
                self.theme.toggle();
                log::debug!("theme switched to {:?}", self.theme);
                Task::none()
            },
        }
    }

    /// Periodic tick, armed only while some machine needs time to pass.
    pub fn subscription(&self) -> Subscription<Event> {
        if self.needs_tick() {
            iced::time::every(self.settings.tick_interval())
                .map(|_| Event::Tick)
        } else {
            Subscription::none()
        }
    }

    /// Whether the tick subscription has any work to drive.
    pub fn needs_tick(&self) -> bool {
        self.scroll.needs_flush() || self.carousel.deadline().is_some()
    }

    /// Render the page with the built-in widgets.
    pub fn view(&self) -> Element<'_, Event> {
        view::page(self)
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn scroll_state(&self) -> &ScrollState {
        self.scroll.state()
    }

    pub fn carousel_state(&self) -> CarouselState {
        self.carousel.state()
    }

    pub fn menu(&self) -> MenuState {
        self.menu
    }

    pub fn theme_mode(&self) -> ThemeMode {
        self.theme
    }

    /// The iced theme matching the current color scheme.
    pub fn theme(&self) -> iced::Theme {
        match self.theme {
            ThemeMode::Dark => iced::Theme::Dark,
            ThemeMode::Light => iced::Theme::Light,
        }
    }

    pub fn layout(&self) -> Option<&Layout> {
        self.layout.as_ref()
    }

    pub fn scrollable_id(&self) -> Id {
        self.scrollable_id.clone()
    }

    fn scroll_to_section(&mut self, id: &str, now: Instant) -> Task<Event> {
        let top = self
            .layout
            .as_ref()
            .and_then(|layout| layout.section_top(id));
        let Some(top) = top else {
            log::warn!("nav link targets unknown section {id}");
            return Task::none();
        };

        // Programmatic scrolls do not echo back through `on_scroll`, so
        // the target offset is applied locally as well.
        self.offset = top;
        self.sync_visibility(now);
        self.scroll.record_scroll(top, now);

        scroll_to(
            self.scrollable_id.clone(),
            AbsoluteOffset { x: 0.0, y: top },
        )
    }

    fn sync_visibility(&mut self, now: Instant) {
        let visible = self.layout.as_ref().map(|layout| {
            let fraction = layout
                .carousel
                .visible_fraction(self.offset, layout.viewport_height);
            fraction >= VISIBILITY_THRESHOLD
        });

        if let Some(visible) = visible {
            self.carousel.set_visible(visible, now);
        }
    }
}

#[cfg(test)]
mod tests {
    use folio_state::{Direction, SectionBounds};

    use super::*;
    use crate::viewport::Region;

    fn sample_content() -> Content {
        let raw = r#"{
            "nav_links": [
                { "id": "home", "label": "Home" },
                { "id": "about", "label": "About" },
                { "id": "projects", "label": "Projects" }
            ],
            "projects": [],
            "testimonials": [
                {
                    "id": 1, "name": "Sarah", "role": "PM",
                    "company": "Techify", "content": "Great work.",
                    "avatar": "/avatars/sarah.png"
                },
                {
                    "id": 2, "name": "Michael", "role": "CTO",
                    "company": "Webify", "content": "Ships fast.",
                    "avatar": "/avatars/michael.png"
                },
                {
                    "id": 3, "name": "Emily", "role": "Founder",
                    "company": "Appify", "content": "Would hire again.",
                    "avatar": "/avatars/emily.png"
                }
            ]
        }"#;
        Content::from_json_str(raw).expect("sample content")
    }

    fn sample_layout() -> Layout {
        Layout {
            sections: vec![
                SectionBounds::new("home", 0.0, 600.0),
                SectionBounds::new("about", 600.0, 600.0),
                SectionBounds::new("projects", 1200.0, 600.0),
            ],
            carousel: Region::new(2000.0, 400.0),
            viewport_height: 800.0,
        }
    }

    fn ready_page() -> Page {
        let mut page = Page::new(sample_content(), PageSettings::default());
        page.set_layout(sample_layout());
        page
    }

    fn scrolled_to(y: f32) -> Event {
        Event::Scrolled(AbsoluteOffset { x: 0.0, y })
    }

    #[test]
    fn layout_registration_seeds_the_first_section() {
        let page = ready_page();

        assert_eq!(page.scroll_state().active_section, "home");
        assert!(!page.scroll_state().scrolled);
    }

    #[test]
    fn nav_press_closes_the_menu_and_tracks_the_target() {
        let mut page = ready_page();
        let _ = page.handle(Event::MenuToggled);
        assert!(page.menu().is_open());

        let _ = page.handle(Event::NavLinkPressed("about".into()));

        assert!(!page.menu().is_open());
        assert_eq!(page.scroll_state().active_section, "about");
        assert!(page.scroll_state().scrolled);
    }

    #[test]
    fn nav_press_to_unknown_section_changes_nothing() {
        let mut page = ready_page();

        let _ = page.handle(Event::NavLinkPressed("blog".into()));

        assert_eq!(page.scroll_state().active_section, "home");
        assert!(!page.scroll_state().scrolled);
    }

    #[test]
    fn scroll_target_is_stable_and_distinct_per_page() {
        let page = ready_page();

        // The rendered scrollable and every scroll task share one id.
        assert_eq!(page.scrollable_id(), page.scrollable_id());

        let other = Page::new(sample_content(), PageSettings::default());
        assert_ne!(page.scrollable_id(), other.scrollable_id());
    }

    #[test]
    fn half_visibility_arms_the_cadence() {
        let mut page = ready_page();

        // Window 1800..2600 fully contains the carousel block.
        let _ = page.handle(scrolled_to(1800.0));

        assert!(page.carousel_state().is_auto_advancing);
        assert!(page.needs_tick());
    }

    #[test]
    fn visibility_below_half_keeps_the_cadence_idle() {
        let mut page = ready_page();

        // Window 2250..3050 covers only 150 of the 400 tall block.
        let _ = page.handle(scrolled_to(2250.0));

        assert!(!page.carousel_state().is_auto_advancing);
        assert!(!page.needs_tick());
    }

    #[test]
    fn exactly_half_visibility_arms_the_cadence() {
        let mut page = ready_page();

        // Window 1400..2200 covers exactly half of the 2000..2400 block.
        let _ = page.handle(scrolled_to(1400.0));

        assert!(page.carousel_state().is_auto_advancing);
    }

    #[test]
    fn scrolling_away_cancels_the_cadence() {
        let mut page = ready_page();

        let _ = page.handle(scrolled_to(1800.0));
        assert!(page.carousel_state().is_auto_advancing);

        let _ = page.handle(scrolled_to(100.0));
        assert!(!page.carousel_state().is_auto_advancing);
    }

    #[test]
    fn layout_visible_at_mount_arms_without_scrolling() {
        let mut page = Page::new(sample_content(), PageSettings::default());
        page.set_layout(Layout {
            sections: vec![SectionBounds::new("home", 0.0, 400.0)],
            carousel: Region::new(400.0, 300.0),
            viewport_height: 800.0,
        });

        assert!(page.carousel_state().is_auto_advancing);
    }

    #[test]
    fn dot_press_maps_direction_like_the_dots_row() {
        let mut page = ready_page();

        let _ = page.handle(Event::DotPressed(2));
        assert_eq!(page.carousel_state().current_index, 2);
        assert_eq!(page.carousel_state().direction, Direction::Forward);

        let _ = page.handle(Event::DotPressed(0));
        assert_eq!(page.carousel_state().current_index, 0);
        assert_eq!(page.carousel_state().direction, Direction::Backward);

        // Jumping to the current dot keeps the backward comparison.
        let _ = page.handle(Event::DotPressed(0));
        assert_eq!(page.carousel_state().current_index, 0);
        assert_eq!(page.carousel_state().direction, Direction::Backward);
    }

    #[test]
    fn out_of_range_dot_press_is_ignored() {
        let mut page = ready_page();
        let before = page.carousel_state();

        let _ = page.handle(Event::DotPressed(7));

        assert_eq!(page.carousel_state(), before);
    }

    #[test]
    fn next_and_previous_presses_move_the_index() {
        let mut page = ready_page();

        let _ = page.handle(Event::NextPressed);
        assert_eq!(page.carousel_state().current_index, 1);
        assert_eq!(page.carousel_state().direction, Direction::Forward);

        let _ = page.handle(Event::PreviousPressed);
        assert_eq!(page.carousel_state().current_index, 0);
        assert_eq!(page.carousel_state().direction, Direction::Backward);
    }

    #[test]
    fn menu_toggle_flips_the_drawer() {
        let mut page = ready_page();

        let _ = page.handle(Event::MenuToggled);
        assert!(page.menu().is_open());

        let _ = page.handle(Event::MenuToggled);
        assert!(!page.menu().is_open());
    }

    #[test]
    fn theme_toggle_switches_the_palette() {
        let mut page = ready_page();
        assert_eq!(page.theme_mode(), ThemeMode::Dark);
        assert!(matches!(page.theme(), iced::Theme::Dark));

        let _ = page.handle(Event::ThemeToggled);

        assert_eq!(page.theme_mode(), ThemeMode::Light);
        assert!(matches!(page.theme(), iced::Theme::Light));
    }

    #[test]
    fn idle_page_needs_no_tick() {
        let page = ready_page();

        assert!(!page.needs_tick());
    }

    #[test]
    fn relayout_moves_the_active_section() {
        let mut page = ready_page();

        page.set_layout(Layout {
            sections: vec![
                SectionBounds::new("about", 0.0, 1000.0),
                SectionBounds::new("home", 1000.0, 600.0),
            ],
            carousel: Region::new(2000.0, 400.0),
            viewport_height: 800.0,
        });

        assert_eq!(page.scroll_state().active_section, "about");
    }
}
