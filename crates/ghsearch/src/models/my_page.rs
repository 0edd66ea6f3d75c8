use serde::{Deserialize, Serialize};

/// Account pages reachable with the `my` command, in display order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MyPage {
    Dashboard,
    Notifications,
    Issues,
    Pulls,
    Settings,
    Stars,
    Gist,
}

impl MyPage {
    pub const ALL: [MyPage; 7] = [
        MyPage::Dashboard,
        MyPage::Notifications,
        MyPage::Issues,
        MyPage::Pulls,
        MyPage::Settings,
        MyPage::Stars,
        MyPage::Gist,
    ];

    /// Path segment of the page, also used as its display name.
    pub fn name(&self) -> &'static str {
        match self {
            MyPage::Dashboard => "dashboard",
            MyPage::Notifications => "notifications",
            MyPage::Issues => "issues",
            MyPage::Pulls => "pulls",
            MyPage::Settings => "settings",
            MyPage::Stars => "stars",
            MyPage::Gist => "gist",
        }
    }

    pub fn description(&self) -> String {
        format!("Open {} page", self.name())
    }
}

impl std::fmt::Display for MyPage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
