//! Panel navigation and the class-selection gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Tab clicks and home-panel shortcuts all go through [`NavState::request`].
//! The header, the home page, and the class modal read this state to decide
//! what is visible.
//!
//! DESIGN
//! ======
//! Class-scoped panels are unreachable until a class is selected; a blocked
//! request opens the class modal and falls back to the home panel. The admin
//! panel is hidden unless the identity check says so. That guard is cosmetic:
//! the backend authorizes every admin call on its own.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

/// The panels of the web app. Exactly one is visible at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Panel {
    #[default]
    Home,
    Homework,
    Schedule,
    Rebuses,
    Admin,
}

impl Panel {
    pub const ALL: [Self; 5] = [Self::Home, Self::Homework, Self::Schedule, Self::Rebuses, Self::Admin];

    /// Panels that only make sense for a selected class.
    #[must_use]
    pub fn is_class_scoped(self) -> bool {
        matches!(self, Self::Homework | Self::Schedule | Self::Rebuses)
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Home => "Home",
            Self::Homework => "Homework",
            Self::Schedule => "Schedule",
            Self::Rebuses => "Rebuses",
            Self::Admin => "Admin",
        }
    }

    /// Stable key used for DOM ids (`tab-homework`).
    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            Self::Home => "home",
            Self::Homework => "homework",
            Self::Schedule => "schedule",
            Self::Rebuses => "rebuses",
            Self::Admin => "admin",
        }
    }

    /// Tabs shown in the header for the current identity.
    #[must_use]
    pub fn visible_tabs(is_admin: bool) -> Vec<Self> {
        Self::ALL.into_iter().filter(|p| is_admin || *p != Self::Admin).collect()
    }
}

/// What a navigation request did.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NavOutcome {
    Activated(Panel),
    /// No class selected: the class modal was opened and home is active.
    ClassRequired,
    /// Admin requested by a non-admin: nothing changed.
    AdminOnly,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub active: Panel,
    pub class_modal_open: bool,
}

impl NavState {
    pub fn request(&mut self, panel: Panel, has_class: bool, is_admin: bool) -> NavOutcome {
        if panel == Panel::Admin && !is_admin {
            return NavOutcome::AdminOnly;
        }
        if panel.is_class_scoped() && !has_class {
            self.class_modal_open = true;
            self.active = Panel::Home;
            return NavOutcome::ClassRequired;
        }
        self.active = panel;
        NavOutcome::Activated(panel)
    }

    pub fn open_class_modal(&mut self) {
        self.class_modal_open = true;
    }

    pub fn close_class_modal(&mut self) {
        self.class_modal_open = false;
    }

    /// Drop back to home if admin rights were lost while the admin panel was open.
    pub fn revoke_admin(&mut self) {
        if self.active == Panel::Admin {
            self.active = Panel::Home;
        }
    }
}
