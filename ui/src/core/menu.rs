//! Mobile menu state and the ordered effects of activating a nav control.

use super::anchor::{dispatch, Fragment, NavAction, NavIntent, NavLocation};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MenuState {
    open: bool,
}

impl MenuState {
    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }

    pub fn close(&mut self) {
        self.open = false;
    }
}

/// Where a control lives; only the mobile menu closes itself on activation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlSource {
    Desktop,
    MobileMenu,
}

/// Side effects of an activation, in the order they must run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEffect {
    CloseMenu,
    ScrollTo(Fragment),
    Navigate(String),
}

impl From<NavAction> for NavEffect {
    fn from(action: NavAction) -> Self {
        match action {
            NavAction::ScrollTo(fragment) => Self::ScrollTo(fragment),
            NavAction::Navigate(path) => Self::Navigate(path),
        }
    }
}

pub fn activate(
    menu: &MenuState,
    location: &NavLocation,
    intent: &NavIntent,
    source: ControlSource,
) -> Vec<NavEffect> {
    let mut effects = Vec::with_capacity(2);
    if source == ControlSource::MobileMenu && menu.is_open() {
        effects.push(NavEffect::CloseMenu);
    }
    effects.push(dispatch(location, intent).into());
    effects
}
