//! Navigation shell state machine and static link sets.
//!
//! The header's account sidebar is a binary overlay: opening is gated on an
//! authenticated session, and every dismissal path (backdrop, close button,
//! navigating, logging out) closes it. Navigation targets and the outbound
//! social links are static configuration, not user data.

/// Whether the account sidebar is shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarState {
    /// Sidebar hidden.
    #[default]
    Closed,
    /// Sidebar overlay visible.
    Open,
}

/// Logical destinations of the sidebar navigation items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavTarget {
    Dashboard,
    AccountInfo,
    Settings,
}

impl NavTarget {
    /// All sidebar navigation items, in display order.
    pub const ALL: [Self; 3] = [Self::Dashboard, Self::AccountInfo, Self::Settings];

    /// The label shown on the navigation item.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Dashboard => "Dashboard",
            Self::AccountInfo => "Account Info",
            Self::Settings => "Settings",
        }
    }

    /// The path the item navigates to. Account info and settings both land
    /// on the profile page.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Dashboard => "/",
            Self::AccountInfo | Self::Settings => "/profile",
        }
    }
}

/// An outbound social link shown at the bottom of the sidebar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SocialLink {
    /// Short label, also used for accessibility text.
    pub label: &'static str,
    /// Absolute destination URL.
    pub href: &'static str,
}

/// The three fixed outbound social links (Facebook page, Messenger, Zalo).
pub const SOCIAL_LINKS: [SocialLink; 3] = [
    SocialLink {
        label: "Facebook",
        href: "https://facebook.com/havanhuan",
    },
    SocialLink {
        label: "Messenger",
        href: "https://m.me/havanhuan",
    },
    SocialLink {
        label: "Zalo",
        href: "https://zalo.me/havanhuan",
    },
];

/// Destinations of the logged-out header controls.
pub const LOGIN_PATH: &str = "/login";
/// Destination of the register control.
pub const REGISTER_PATH: &str = "/register";

/// The header's navigation shell.
///
/// Holds only the sidebar state; the session itself is owned elsewhere and
/// passed in as an `authenticated` flag where it gates a transition.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavShell {
    sidebar: SidebarState,
}

impl NavShell {
    /// A shell with the sidebar closed.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sidebar: SidebarState::Closed,
        }
    }

    /// Current sidebar state.
    #[must_use]
    pub const fn sidebar(&self) -> SidebarState {
        self.sidebar
    }

    /// True when the sidebar overlay is visible.
    #[must_use]
    pub const fn is_open(&self) -> bool {
        matches!(self.sidebar, SidebarState::Open)
    }

    /// Open the sidebar. Gated on a live session: clicking the brand mark
    /// while logged out has no effect. Returns whether the sidebar is open
    /// after the call.
    pub const fn open(&mut self, authenticated: bool) -> bool {
        if authenticated {
            self.sidebar = SidebarState::Open;
        }
        self.is_open()
    }

    /// Close the sidebar. Backdrop click and the close button both land
    /// here.
    pub const fn close(&mut self) {
        self.sidebar = SidebarState::Closed;
    }

    /// Activate a navigation item: closes the sidebar and yields the
    /// destination path as one logical step. Closing is unconditional -
    /// it does not depend on the navigation itself succeeding.
    pub const fn navigate(&mut self, target: NavTarget) -> &'static str {
        self.close();
        target.path()
    }

    /// Record a logout click. The caller invokes the actual session
    /// termination; the sidebar closes unconditionally, whatever that
    /// call's outcome. Logout failures are the session layer's to report.
    pub const fn logout(&mut self) {
        self.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cannot_open_while_logged_out() {
        let mut shell = NavShell::new();
        assert!(!shell.open(false));
        assert_eq!(shell.sidebar(), SidebarState::Closed);
    }

    #[test]
    fn test_open_while_authenticated() {
        let mut shell = NavShell::new();
        assert!(shell.open(true));
        assert_eq!(shell.sidebar(), SidebarState::Open);
    }

    #[test]
    fn test_every_dismissal_closes() {
        // Backdrop / close button.
        let mut shell = NavShell::new();
        shell.open(true);
        shell.close();
        assert!(!shell.is_open());

        // Navigation item.
        shell.open(true);
        let path = shell.navigate(NavTarget::AccountInfo);
        assert_eq!(path, "/profile");
        assert!(!shell.is_open());

        // Logout.
        shell.open(true);
        shell.logout();
        assert!(!shell.is_open());
    }

    #[test]
    fn test_nav_targets() {
        assert_eq!(NavTarget::Dashboard.path(), "/");
        assert_eq!(NavTarget::AccountInfo.path(), "/profile");
        assert_eq!(NavTarget::Settings.path(), "/profile");
        assert_eq!(NavTarget::ALL.len(), 3);
    }

    #[test]
    fn test_reopen_after_dismissal() {
        let mut shell = NavShell::new();
        shell.open(true);
        shell.navigate(NavTarget::Dashboard);
        assert!(shell.open(true));
    }

    #[test]
    fn test_social_links_are_absolute() {
        for link in SOCIAL_LINKS {
            assert!(link.href.starts_with("https://"), "{}", link.href);
        }
    }
}
