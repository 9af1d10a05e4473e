//! Collapsible navigation menu state (narrow viewports)

/// Whether the mobile menu is expanded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NavMenuState {
    Open,
    #[default]
    Closed,
}

/// Mobile menu; lives in memory only and starts closed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NavMenu {
    state: NavMenuState,
}

impl NavMenu {
    pub fn state(&self) -> NavMenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == NavMenuState::Open
    }

    pub fn toggle(&mut self) {
        self.state = match self.state {
            NavMenuState::Open => NavMenuState::Closed,
            NavMenuState::Closed => NavMenuState::Open,
        };
    }

    pub fn close(&mut self) {
        self.state = NavMenuState::Closed;
    }
}
