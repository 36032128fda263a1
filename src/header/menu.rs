//! Dismissible Menu
//!
//! Two-state popover controller used for the profile dropdown. The trigger
//! toggles it; a press outside its region closes it; picking an item is
//! terminal and closes it too.

use std::fmt;

use super::location::Location;

/// Visibility of a dismissible menu
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

/// Orientation of the chevron next to the trigger
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indicator {
    /// Pointing down
    Collapsed,
    /// Rotated 180 degrees
    Expanded,
}

impl Indicator {
    /// CSS class for the chevron
    pub fn css_class(&self) -> &'static str {
        match self {
            Indicator::Collapsed => "",
            Indicator::Expanded => "rotate-180",
        }
    }
}

/// Entries of the profile dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuItem {
    Profile,
    History,
    Settings,
    SignOut,
}

impl MenuItem {
    /// All entries in display order
    pub const ALL: [MenuItem; 4] = [
        MenuItem::Profile,
        MenuItem::History,
        MenuItem::Settings,
        MenuItem::SignOut,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            MenuItem::Profile => "Profile",
            MenuItem::History => "Watch History",
            MenuItem::Settings => "Settings",
            MenuItem::SignOut => "Sign Out",
        }
    }

    /// Route the entry links to; sign-out has none
    pub fn path(&self) -> Option<&'static str> {
        match self {
            MenuItem::Profile => Some("/profile"),
            MenuItem::History => Some("/history"),
            MenuItem::Settings => Some("/settings"),
            MenuItem::SignOut => None,
        }
    }
}

impl fmt::Display for MenuItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// What the host should do after an item was picked
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MenuAction {
    Navigate(Location),
    /// Placeholder: session handling lives outside the header
    SignOut,
}

/// Toggle-and-auto-close controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DismissibleMenu {
    state: MenuState,
}

impl DismissibleMenu {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> MenuState {
        self.state
    }

    pub fn is_open(&self) -> bool {
        self.state == MenuState::Open
    }

    /// Trigger activation: strict toggle
    pub fn toggle(&mut self) {
        self.state = match self.state {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
        tracing::trace!(state = ?self.state, "Menu toggled");
    }

    /// Force closed. Idempotent.
    pub fn dismiss(&mut self) {
        if self.state == MenuState::Open {
            tracing::trace!("Menu dismissed");
        }
        self.state = MenuState::Closed;
    }

    /// Feed one document press: `inside` is the region check, `None`
    /// when the region is not mounted. Only a press known to be outside
    /// closes the menu; inside presses never toggle it.
    pub fn observe_press(&mut self, inside: Option<bool>) {
        if inside == Some(false) {
            self.dismiss();
        }
    }

    /// Pick an entry. The menu closes whatever the entry is.
    pub fn select(&mut self, item: MenuItem) -> MenuAction {
        self.dismiss();
        match item.path() {
            Some(path) => MenuAction::Navigate(Location::new(path, "")),
            None => {
                tracing::debug!("Sign-out requested");
                MenuAction::SignOut
            }
        }
    }

    pub fn indicator(&self) -> Indicator {
        match self.state {
            MenuState::Closed => Indicator::Collapsed,
            MenuState::Open => Indicator::Expanded,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::header::press::{observe_presses, PressBus, Region, Subscription};
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_toggle_law() {
        let mut menu = DismissibleMenu::new();
        assert_eq!(menu.state(), MenuState::Closed);

        menu.toggle();
        assert!(menu.is_open());

        menu.toggle();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_indicator_tracks_state() {
        let mut menu = DismissibleMenu::new();
        assert_eq!(menu.indicator(), Indicator::Collapsed);
        assert_eq!(menu.indicator().css_class(), "");

        menu.toggle();
        assert_eq!(menu.indicator(), Indicator::Expanded);
        assert_eq!(menu.indicator().css_class(), "rotate-180");
    }

    #[test]
    fn test_select_closes_and_reports_action() {
        let mut menu = DismissibleMenu::new();
        menu.toggle();

        let action = menu.select(MenuItem::History);
        assert_eq!(action, MenuAction::Navigate(Location::new("/history", "")));
        assert!(!menu.is_open());

        menu.toggle();
        assert_eq!(menu.select(MenuItem::SignOut), MenuAction::SignOut);
        assert!(!menu.is_open());
    }

    #[test]
    fn test_item_labels() {
        let labels: Vec<_> = MenuItem::ALL.iter().map(|i| i.to_string()).collect();
        assert_eq!(labels, vec!["Profile", "Watch History", "Settings", "Sign Out"]);
    }

    /// Header subtree: 1 = trigger, 2 = panel, 3 = panel link
    struct ProfileRegion {
        mounted: bool,
    }

    impl Region for ProfileRegion {
        type Target = u32;

        fn contains(&self, target: &u32) -> Option<bool> {
            self.mounted.then(|| matches!(target, 1 | 2 | 3))
        }
    }

    /// Menu wired to the bus the way the header wires it to the document
    fn observed_menu(
        bus: &PressBus<u32>,
        mounted: bool,
    ) -> (Rc<RefCell<DismissibleMenu>>, Subscription) {
        let menu = Rc::new(RefCell::new(DismissibleMenu::new()));
        let m = Rc::clone(&menu);
        let observer = observe_presses(bus, ProfileRegion { mounted }, move |inside| {
            m.borrow_mut().observe_press(inside)
        });
        (menu, observer)
    }

    #[test]
    fn test_outside_presses_while_closed_are_idempotent() {
        let bus = PressBus::<u32>::new();
        let (menu, _observer) = observed_menu(&bus, true);

        for _ in 0..5 {
            bus.dispatch(&42);
        }
        assert_eq!(menu.borrow().state(), MenuState::Closed);
    }

    #[test]
    fn test_outside_press_closes() {
        let bus = PressBus::<u32>::new();
        let (menu, _observer) = observed_menu(&bus, true);
        menu.borrow_mut().toggle();

        bus.dispatch(&42);
        assert!(!menu.borrow().is_open());
    }

    #[test]
    fn test_unmounted_region_keeps_state() {
        let bus = PressBus::<u32>::new();
        let (menu, _observer) = observed_menu(&bus, false);
        menu.borrow_mut().toggle();

        bus.dispatch(&42);
        assert!(menu.borrow().is_open());
    }

    #[test]
    fn test_released_observer_stops_closing() {
        let bus = PressBus::<u32>::new();
        let (menu, mut observer) = observed_menu(&bus, true);
        menu.borrow_mut().toggle();

        observer.release();
        bus.dispatch(&42);
        assert!(menu.borrow().is_open());
    }

    #[test]
    fn test_inside_click_scenario() {
        let bus = PressBus::<u32>::new();
        let (menu, _observer) = observed_menu(&bus, true);

        // Click trigger: press reaches the observer first, then the click toggles.
        bus.dispatch(&1);
        menu.borrow_mut().toggle();
        assert!(menu.borrow().is_open());

        // Press on a link inside the panel.
        bus.dispatch(&3);
        assert!(menu.borrow().is_open());

        // Press on the page body.
        bus.dispatch(&42);
        assert!(!menu.borrow().is_open());
    }
}
