//! Open/closed state of the header's profile dropdown.

use strum::EnumIter;

/// Rows in the profile dropdown, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter)]
pub enum ProfileMenuItem {
    /// Avatar and name of the signed-in user.
    Summary,
    /// The user's public profile.
    MyProfile,
    /// The project's about page.
    About,
    /// Sign out.
    Logout,
}

impl ProfileMenuItem {
    /// Translation key of the row label; the summary row shows the user name.
    #[must_use]
    pub fn label_key(self) -> Option<&'static str> {
        match self {
            Self::Summary => None,
            Self::MyProfile => Some("header.profile.my_profile"),
            Self::About => Some("header.profile.about"),
            Self::Logout => Some("header.profile.logout"),
        }
    }
}

/// Whether the dropdown is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProfileMenuState {
    /// Only the avatar shows.
    #[default]
    Closed,
    /// The dropdown is anchored under the avatar.
    Open,
}

/// Input to [`ProfileMenuState::transition`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMenuEvent {
    /// The avatar was clicked.
    AvatarClicked,
    /// Explicit close request from the menu itself.
    Close,
    /// Click outside or Escape.
    Dismiss,
    /// A row was chosen.
    Select(ProfileMenuItem),
}

/// Side effect the host must perform after a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfileMenuEffect {
    /// Sign the user out.
    Logout,
}

impl ProfileMenuState {
    /// Whether the dropdown is showing.
    #[must_use]
    pub fn is_open(self) -> bool {
        self == Self::Open
    }

    /// Apply one event. The newest event always determines the state.
    #[must_use]
    pub fn transition(self, event: ProfileMenuEvent) -> (Self, Option<ProfileMenuEffect>) {
        match event {
            ProfileMenuEvent::AvatarClicked => (Self::Open, None),
            ProfileMenuEvent::Close | ProfileMenuEvent::Dismiss => (Self::Closed, None),
            ProfileMenuEvent::Select(ProfileMenuItem::Logout) => {
                (Self::Closed, Some(ProfileMenuEffect::Logout))
            }
            ProfileMenuEvent::Select(_) => (Self::Closed, None),
        }
    }
}

/// Text of the read-only level badge.
#[must_use]
pub fn level_badge(level: u32) -> String {
    format!("LV. {level}")
}
