pub mod record;
pub mod roster;
pub mod error;

pub use record::{UserId, UserRecord, UserDraft, Address, Company, Geo};
pub use roster::Roster;
pub use error::{RosterError, RosterResult};
