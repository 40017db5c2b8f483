//! Purpose: Define the transient user-visible report channel for operation outcomes.
//! Exports: `Notice`, `NoticeKind`.
//! Role: Shared contract between the roster store and the presentation layer.
//! Invariants: Notices are non-fatal; a failed operation emits exactly one.
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub time: String,
    pub message: String,
    pub record_id: Option<String>,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Success, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeKind::Error, message)
    }

    pub fn with_record_id(mut self, record_id: impl Into<String>) -> Self {
        self.record_id = Some(record_id.into());
        self
    }

    fn new(kind: NoticeKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            time: now_rfc3339(),
            message: message.into(),
            record_id: None,
        }
    }
}

fn now_rfc3339() -> String {
    OffsetDateTime::now_utc()
        .format(&Rfc3339)
        .unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::{Notice, NoticeKind};

    #[test]
    fn constructors_set_kind_and_message() {
        let notice = Notice::success("record removed").with_record_id("abc123");
        assert_eq!(notice.kind, NoticeKind::Success);
        assert_eq!(notice.message, "record removed");
        assert_eq!(notice.record_id.as_deref(), Some("abc123"));
        assert!(!notice.time.is_empty());
    }

    #[test]
    fn error_notice_has_no_record_by_default() {
        let notice = Notice::error("load failed");
        assert_eq!(notice.kind, NoticeKind::Error);
        assert!(notice.record_id.is_none());
    }
}
