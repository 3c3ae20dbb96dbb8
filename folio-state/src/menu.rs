//! Mobile navigation drawer state.

/// Open/closed flag of the mobile navigation drawer.
///
/// Following a nav link always closes the drawer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Flip the drawer.
    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Close the drawer, e.g. after following a nav link.
    pub fn close(&mut self) {
        self.open = false;
    }
}
