//! Index instance naming.
//!
//! Every rebuild writes into a fresh index whose name is the alias followed
//! by the creation time at second resolution, e.g.
//! `vessels-2024-03-05-07-08-09`. Two rebuilds of the same alias started in
//! the same second get the same name.

use std::fmt::Display;

use chrono::{DateTime, TimeZone};

/// `strftime` format of the timestamp suffix.
pub const INDEX_TIMESTAMP_FORMAT: &str = "%Y-%m-%d-%H-%M-%S";

/// Get the name of the index instance created for `alias` at `created_at`.
///
/// # Example
///
/// ```
/// use carrier_portal_repository::instance_name;
/// use chrono::{TimeZone, Utc};
///
/// let created_at = Utc.with_ymd_and_hms(2024, 3, 5, 7, 8, 9).unwrap();
/// assert_eq!(instance_name("vessels", &created_at), "vessels-2024-03-05-07-08-09");
/// ```
pub fn instance_name<Tz>(alias: &str, created_at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("{}-{}", alias, created_at.format(INDEX_TIMESTAMP_FORMAT))
}
