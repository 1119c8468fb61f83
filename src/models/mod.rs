pub mod book;
pub mod check_in;
pub mod contact;
pub mod section;
pub mod student;

pub use book::AttendanceBook;
pub use check_in::CheckIn;
pub use contact::Contact;
pub use section::{AttendanceEntry, DateSection};
pub use student::StudentName;

/// The full set of known students, independent of any date.
pub type Roster = std::collections::BTreeSet<StudentName>;
