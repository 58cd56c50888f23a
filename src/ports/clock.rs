use chrono::{DateTime, Utc};

/// Wall-clock source for default order timestamps
#[mockall::automock]
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}
