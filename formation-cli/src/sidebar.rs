//! Navigation sidebar state.
//!
//! The session owns one [`SidebarState`] and hands it to whatever renders the
//! layout; there is no broadcast of collapse changes.

use std::fmt;

use tracing::debug;

/// User shown after a mock login.
pub const MOCK_USERNAME: &str = "张三";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum NavItem {
    #[default]
    Home,
    Services,
    Faq,
}

impl NavItem {
    pub fn all() -> &'static [NavItem] {
        &[NavItem::Home, NavItem::Services, NavItem::Faq]
    }

    pub fn key(&self) -> &'static str {
        match self {
            NavItem::Home => "home",
            NavItem::Services => "services",
            NavItem::Faq => "faq",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            NavItem::Home => "首页",
            NavItem::Services => "业务办理",
            NavItem::Faq => "百问百答",
        }
    }

    pub fn parse(key: &str) -> Option<Self> {
        let key = key.trim();
        Self::all()
            .iter()
            .copied()
            .find(|item| item.key().eq_ignore_ascii_case(key))
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SidebarState {
    pub collapsed: bool,
    pub active: NavItem,
    pub logged_in: bool,
    pub username: Option<String>,
}

impl SidebarState {
    /// Flips between collapsed and expanded; returns the new `collapsed`.
    pub fn toggle(&mut self) -> bool {
        self.collapsed = !self.collapsed;
        debug!(collapsed = self.collapsed, "sidebar toggled");
        self.collapsed
    }

    pub fn select(
        &mut self,
        item: NavItem,
    ) {
        self.active = item;
    }

    /// Mock login; no credentials are checked.
    pub fn login(&mut self) {
        self.logged_in = true;
        self.username = Some(MOCK_USERNAME.to_string());
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
        self.username = None;
    }
}

impl fmt::Display for SidebarState {
    fn fmt(
        &self,
        f: &mut fmt::Formatter<'_>,
    ) -> fmt::Result {
        let user = match (&self.username, self.logged_in) {
            (Some(name), true) => name.as_str(),
            _ => "登录",
        };

        if self.collapsed {
            return write!(f, "[{}] {user}", self.active.key());
        }

        for item in NavItem::all() {
            let marker = if *item == self.active { '>' } else { ' ' };
            writeln!(f, "{marker} {}", item.label())?;
        }
        write!(f, "  {user}")
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn starts_expanded_on_home_logged_out() {
        let sidebar = SidebarState::default();

        assert!(!sidebar.collapsed);
        assert_eq!(sidebar.active, NavItem::Home);
        assert!(!sidebar.logged_in);
    }

    #[test]
    fn toggle_flips_collapsed() {
        let mut sidebar = SidebarState::default();

        assert!(sidebar.toggle());
        assert!(!sidebar.toggle());
    }

    #[test]
    fn login_and_logout_flip_flag_and_name() {
        let mut sidebar = SidebarState::default();

        sidebar.login();
        assert!(sidebar.logged_in);
        assert_eq!(sidebar.username.as_deref(), Some(MOCK_USERNAME));

        sidebar.logout();
        assert_eq!(sidebar, SidebarState::default());
    }

    #[test]
    fn nav_item_parse_is_case_insensitive() {
        assert_eq!(NavItem::parse(" FAQ "), Some(NavItem::Faq));
        assert_eq!(NavItem::parse("settings"), None);
    }

    #[test]
    fn collapsed_display_is_one_line() {
        let mut sidebar = SidebarState::default();
        sidebar.select(NavItem::Services);
        sidebar.toggle();

        assert_eq!(sidebar.to_string(), "[services] 登录");
    }

    #[test]
    fn expanded_display_marks_active_item() {
        let mut sidebar = SidebarState::default();
        sidebar.login();

        assert_eq!(
            sidebar.to_string(),
            "> 首页\n  业务办理\n  百问百答\n  张三"
        );
    }
}
