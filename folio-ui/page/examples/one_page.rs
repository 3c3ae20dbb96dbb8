use folio_state::{Content, SectionBounds};
use folio_ui_page::{Layout, Page, PageSettings, Region};
use iced::{Element, Size, Subscription, Task, Theme};

const WINDOW_WIDTH: f32 = 1280.0;
const WINDOW_HEIGHT: f32 = 800.0;
const HEADER_HEIGHT: f32 = 64.0;
const SECTION_HEIGHT: f32 = 600.0;
const CAROUSEL_HEIGHT: f32 = 400.0;

const CONTENT: &str = r#"{
    "nav_links": [
        { "id": "home", "label": "Home" },
        { "id": "about", "label": "About" },
        { "id": "projects", "label": "Projects" },
        { "id": "skills", "label": "Skills" },
        { "id": "timeline", "label": "Timeline" },
        { "id": "contact", "label": "Contact" }
    ],
    "projects": [
        {
            "id": 1,
            "title": "Lumen Store",
            "description": "Storefront with cart and checkout flows",
            "image": "/projects/lumen.png",
            "tags": ["commerce", "payments"],
            "demo_url": "https://example.com/lumen",
            "github_url": "https://example.com/lumen.git",
            "featured": true
        },
        {
            "id": 2,
            "title": "Drift Board",
            "description": "Kanban board with offline sync",
            "image": "/projects/drift.png",
            "tags": ["productivity"],
            "demo_url": "https://example.com/drift",
            "github_url": "https://example.com/drift.git",
            "featured": true
        },
        {
            "id": 3,
            "title": "Aurora Charts",
            "description": "Weather dashboard with hourly forecasts",
            "image": "/projects/aurora.png",
            "tags": ["data", "charts"],
            "demo_url": "https://example.com/aurora",
            "github_url": "https://example.com/aurora.git",
            "featured": true
        },
        {
            "id": 4,
            "title": "Quiet Notes",
            "description": "Minimal markdown notebook",
            "image": "/projects/quiet.png",
            "tags": ["writing"],
            "demo_url": "https://example.com/quiet",
            "github_url": "https://example.com/quiet.git"
        }
    ],
    "testimonials": [
        {
            "id": 1,
            "name": "Dana Whitfield",
            "role": "Product Lead",
            "company": "Northwind",
            "content": "Delivered the whole redesign ahead of schedule.",
            "avatar": "/avatars/dana.png"
        },
        {
            "id": 2,
            "name": "Priya Raman",
            "role": "CTO",
            "company": "Fieldstone",
            "content": "Rare mix of design taste and engineering rigor.",
            "avatar": "/avatars/priya.png"
        },
        {
            "id": 3,
            "name": "Marco Ellis",
            "role": "Founder",
            "company": "Harbor Labs",
            "content": "Our conversion doubled after the relaunch.",
            "avatar": "/avatars/marco.png"
        }
    ]
}"#;

fn main() -> iced::Result {
    env_logger::init();

    iced::application(App::new, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window_size(Size {
            width: WINDOW_WIDTH,
            height: WINDOW_HEIGHT,
        })
        .subscription(App::subscription)
        .run()
}

#[derive(Debug, Clone)]
enum Event {
    Page(folio_ui_page::Event),
}

struct App {
    page: Page,
}

impl App {
    fn new() -> (Self, Task<Event>) {
        let content =
            Content::from_json_str(CONTENT).expect("demo content is valid");
        let layout = demo_layout(&content);

        let mut page = Page::new(content, PageSettings::default());
        page.set_layout(layout);

        (Self { page }, Task::none())
    }

    fn title(&self) -> String {
        String::from("one_page")
    }

    fn theme(&self) -> Theme {
        self.page.theme()
    }

    fn subscription(&self) -> Subscription<Event> {
        self.page.subscription().map(Event::Page)
    }

    fn update(&mut self, event: Event) -> Task<Event> {
        match event {
            Event::Page(event) => self.page.handle(event).map(Event::Page),
        }
    }

    fn view(&self) -> Element<'_, Event> {
        self.page.view().map(Event::Page)
    }
}

/// Fixed-height demo geometry: sections stacked in nav order with the
/// testimonial carousel after them.
fn demo_layout(content: &Content) -> Layout {
    let mut sections = Vec::with_capacity(content.nav_links.len());
    let mut top = 0.0;
    for link in &content.nav_links {
        sections.push(SectionBounds::new(
            link.id.as_str(),
            top,
            SECTION_HEIGHT,
        ));
        top += SECTION_HEIGHT;
    }

    Layout {
        sections,
        carousel: Region::new(top, CAROUSEL_HEIGHT),
        viewport_height: WINDOW_HEIGHT - HEADER_HEIGHT,
    }
}
