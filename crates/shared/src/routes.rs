/// Pages reachable from the admin navigation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdminRoute {
    Plans,
}

impl AdminRoute {
    /// Sidebar order
    pub const ALL: [AdminRoute; 1] = [AdminRoute::Plans];

    pub const fn path(self) -> &'static str {
        match self {
            Self::Plans => "/admin/plans",
        }
    }

    pub const fn ui_text(self) -> &'static str {
        match self {
            Self::Plans => "Plans",
        }
    }

    /// `None` for paths without a page, the content area stays empty for those
    pub fn from_path(path: &str) -> Option<Self> {
        let path = match path.trim_end_matches('/') {
            "" => "/",
            p => p,
        };
        Self::ALL.into_iter().find(|route| route.path() == path)
    }
}
