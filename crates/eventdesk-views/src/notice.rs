//! User-facing results of view-model actions.

use crate::route::Route;

/// Severity of a notice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Success,
    Error,
}

/// A transient message for the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    /// Creates a success notice.
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    /// Creates an error notice.
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }

    /// Returns true for error notices.
    pub fn is_error(&self) -> bool {
        self.level == NoticeLevel::Error
    }
}

/// What the host should do after an action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Outcome {
    /// Message to show, if any.
    pub notice: Option<Notice>,
    /// Screen to navigate to, if any.
    pub navigate: Option<Route>,
}

impl Outcome {
    /// Nothing to show, stay on the screen.
    pub fn none() -> Self {
        Self::default()
    }

    /// Show a notice and stay.
    pub fn notify(notice: Notice) -> Self {
        Self {
            notice: Some(notice),
            navigate: None,
        }
    }

    /// Navigate without a notice.
    pub fn go(route: Route) -> Self {
        Self {
            notice: None,
            navigate: Some(route),
        }
    }

    /// Adds a navigation target.
    pub fn then_navigate(mut self, route: Route) -> Self {
        self.navigate = Some(route);
        self
    }

    /// Returns true if the outcome carries an error notice.
    pub fn is_error(&self) -> bool {
        self.notice.as_ref().is_some_and(Notice::is_error)
    }
}
