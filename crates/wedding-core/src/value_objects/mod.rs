//! Value objects - immutable types that represent domain concepts

mod attendance;
mod event_date;
mod lang;
mod short_code;

pub use attendance::{Attendance, ParseAttendanceError};
pub use event_date::parse_event_date;
pub use lang::{Lang, ParseLangError};
pub use short_code::{generate_short_code, normalize_short_code, SHORT_CODE_LEN};
