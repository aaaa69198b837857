#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

/// Severity of a flash notice; drives the banner's styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Error,
}

/// A transient user-facing message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub level: NoticeLevel,
    pub text: String,
}

/// At most one notice is shown at a time; a new one replaces the old.
/// Each notice gets a fresh id so a stale auto-dismiss timer cannot
/// clear a newer message.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Show a notice, returning its id for targeted dismissal.
    pub fn show(&mut self, level: NoticeLevel, text: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.current = Some(Notice { id, level, text: text.into() });
        id
    }

    pub fn info(&mut self, text: impl Into<String>) -> u64 {
        self.show(NoticeLevel::Info, text)
    }

    pub fn success(&mut self, text: impl Into<String>) -> u64 {
        self.show(NoticeLevel::Success, text)
    }

    pub fn error(&mut self, text: impl Into<String>) -> u64 {
        self.show(NoticeLevel::Error, text)
    }

    /// Dismiss the notice with this id; a no-op if it was already
    /// replaced.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    pub fn clear(&mut self) {
        self.current = None;
    }
}
