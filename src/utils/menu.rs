/// Open state of the collapsible navigation menu.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MenuState {
    pub open: bool,
}

impl MenuState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Class list for `#nav-menu`.
    pub fn class(self) -> &'static str {
        if self.open { "nav-menu open" } else { "nav-menu" }
    }

    /// Value for the toggle button's `aria-expanded`.
    pub fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}
