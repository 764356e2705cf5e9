use time::{OffsetDateTime, format_description::FormatItem, macros::format_description};

pub const TIMESTAMP_FORMAT: &[FormatItem<'static>] =
    format_description!("[year]-[month]-[day] [hour]:[minute]");
pub const REVIEW_DATE_FORMAT: &[FormatItem<'static>] = format_description!("[year]-[month]-[day]");

pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;

    /// Display timestamp for a new comment.
    fn timestamp(&self) -> String {
        let now = self.now();
        now.format(TIMESTAMP_FORMAT)
            .unwrap_or_else(|_| now.to_string())
    }

    /// Today's date as used for comment grouping.
    fn today(&self) -> String {
        let now = self.now();
        now.format(REVIEW_DATE_FORMAT)
            .unwrap_or_else(|_| now.date().to_string())
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub OffsetDateTime);

impl Clock for FixedClock {
    fn now(&self) -> OffsetDateTime {
        self.0
    }
}
