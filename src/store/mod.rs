//! Flat-file persistence: the attendance archive and its structured log,
//! the roster, the contact book and the activity log.

pub mod activity;
pub mod archive;
pub mod contacts;
pub mod roster;
pub mod structured;

pub use archive::RecordStore;
pub use contacts::ContactStore;
pub use roster::RosterStore;
