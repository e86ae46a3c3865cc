//! Header layout decisions driven by viewport width and session state.

use crate::{config::SiteLinks, models::User};

/// Widths at or above this many CSS pixels use the wide layout.
pub const WIDE_BREAKPOINT_PX: f64 = 992.0;

/// Discrete header layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LayoutMode {
    /// Phones and narrow tablets: nav in a secondary row with a menu toggle.
    #[default]
    Compact,
    /// Desktop: inline nav and the account control.
    Wide,
}

impl LayoutMode {
    /// Layout for a viewport `width` CSS pixels wide.
    #[must_use]
    pub fn from_width(width: f64) -> Self {
        if width >= WIDE_BREAKPOINT_PX {
            Self::Wide
        } else {
            Self::Compact
        }
    }

    /// Media query equivalent of [`Self::Wide`].
    #[must_use]
    pub fn wide_media_query() -> String {
        format!("(min-width: {WIDE_BREAKPOINT_PX}px)")
    }
}

/// What occupies the account slot at the end of the primary row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountControl {
    /// Avatar that opens the profile menu.
    Avatar,
    /// Prompts a signed-out visitor to log in.
    LoginButton,
    /// Left to the side menu opened by the toggle.
    Hidden,
}

/// Which pieces of the header render for a given mode and session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderSlots {
    /// Layout the slots were resolved for.
    pub mode: LayoutMode,
    /// Tabs sit in the primary row.
    pub inline_nav: bool,
    /// Tabs and the menu toggle sit in a row of their own.
    pub secondary_row: bool,
    /// Control at the end of the primary row.
    pub account: AccountControl,
}

impl HeaderSlots {
    /// Slots for `mode`; a named `user` gets the avatar on wide screens.
    #[must_use]
    pub fn resolve(mode: LayoutMode, user: Option<&User>) -> Self {
        match mode {
            LayoutMode::Wide => Self {
                mode,
                inline_nav: true,
                secondary_row: false,
                account: if user.and_then(User::display_name).is_some() {
                    AccountControl::Avatar
                } else {
                    AccountControl::LoginButton
                },
            },
            LayoutMode::Compact => Self {
                mode,
                inline_nav: false,
                secondary_row: true,
                account: AccountControl::Hidden,
            },
        }
    }

    /// Logo asset path for the mode.
    #[must_use]
    pub fn logo_src(&self) -> &'static str {
        match self.mode {
            LayoutMode::Wide => "/logo-desktop.png",
            LayoutMode::Compact => "/logo-mobile.png",
        }
    }
}

/// Where a navigation entry leads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavTarget {
    /// An in-app route path.
    Internal(&'static str),
    /// An absolute URL opened in a new tab.
    External(String),
}

/// One tab in the header navigation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavEntry {
    /// Translation key of the label.
    pub label_key: &'static str,
    /// Destination.
    pub target: NavTarget,
    /// Dropped on extra-small screens to keep the tab row on one line.
    pub hidden_on_xs: bool,
}

impl NavEntry {
    /// Whether this entry corresponds to the current in-app path.
    #[must_use]
    pub fn is_active(&self, current_path: &str) -> bool {
        match self.target {
            NavTarget::Internal(path) => {
                current_path == path
                    || current_path
                        .strip_prefix(path)
                        .is_some_and(|rest| rest.starts_with('/'))
            }
            NavTarget::External(_) => false,
        }
    }
}

/// The fixed header navigation, in display order.
#[must_use]
pub fn nav_entries(links: &SiteLinks) -> Vec<NavEntry> {
    vec![
        NavEntry {
            label_key: "header.nav.articles",
            target: NavTarget::Internal("/articles"),
            hidden_on_xs: false,
        },
        NavEntry {
            label_key: "header.nav.replies",
            target: NavTarget::Internal("/replies"),
            hidden_on_xs: false,
        },
        NavEntry {
            label_key: "header.nav.forum",
            target: NavTarget::External(links.editor_forum_url.clone()),
            hidden_on_xs: true,
        },
        NavEntry {
            label_key: "header.nav.about",
            target: NavTarget::External(links.project_folder_url.clone()),
            hidden_on_xs: false,
        },
    ]
}
