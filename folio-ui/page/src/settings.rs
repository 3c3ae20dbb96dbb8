use std::time::Duration;

use folio_state::{CarouselSettings, ScrollSettings};

const DEFAULT_TICK_MS: u64 = 100;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PageSettings {
    tick_interval: Duration,
    scroll: ScrollSettings,
    carousel: CarouselSettings,
}

impl Default for PageSettings {
    fn default() -> Self {
        Self {
            tick_interval: Duration::from_millis(DEFAULT_TICK_MS),
            scroll: ScrollSettings::default(),
            carousel: CarouselSettings::default(),
        }
    }
}

impl PageSettings {
    pub fn with_tick_interval(mut self, tick_interval: Duration) -> Self {
        self.tick_interval = tick_interval;
        self
    }

    pub fn with_scroll(mut self, scroll: ScrollSettings) -> Self {
        self.scroll = scroll;
        self
    }

    pub fn with_carousel(mut self, carousel: CarouselSettings) -> Self {
        self.carousel = carousel;
        self
    }

    pub fn tick_interval(&self) -> Duration {
        self.tick_interval
    }

    pub fn scroll(&self) -> ScrollSettings {
        self.scroll
    }

    pub fn carousel(&self) -> CarouselSettings {
        self.carousel
    }
}
