use chrono_tz::Tz;

/// IANA zone that raw export timestamps are written in.
pub const DEFAULT_SOURCE_TIMEZONE: &str = "America/New_York";

/// Label of the remainder entry appended to a truncated occurrence ranking.
pub const OTHER_LABEL: &str = "Other";

pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Layout of normalized timestamps, e.g. `2024-03-05T19:30:00.000Z`.
pub const ISO_UTC_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.3fZ";

/// Date-only layout of normalized timestamps, read as UTC midnight.
pub const ISO_DATE_FORMAT: &str = "%Y-%m-%d";

/// Wall-clock layouts accepted for raw (source time zone) timestamps.
///
/// Each `%y` layout precedes its `%Y` twin: `%Y` also accepts two digits.
pub const LOCAL_DATETIME_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%dT%H:%M",
    "%m/%d/%y %H:%M:%S",
    "%m/%d/%Y %H:%M:%S",
    "%m/%d/%y %H:%M",
    "%m/%d/%Y %H:%M",
    "%m/%d/%y %I:%M %p",
    "%m/%d/%Y %I:%M %p",
    "%B %d, %Y %I:%M %p",
];

/// Date-only layouts accepted for raw timestamps, read as local midnight.
///
/// `%y` is tried before `%Y` so `03/05/24` is not read as year 24.
pub const LOCAL_DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%m/%d/%y", "%m/%d/%Y", "%B %d, %Y"];

pub fn default_source_timezone() -> Tz {
    chrono_tz::America::New_York
}
