use std::error;

use crate::core::record::UserId;

#[derive(Debug, PartialEq, Eq)]
pub enum RosterError {
    /// Occurs when adding a record whose id is already
    /// present in the collection.
    DuplicateId(UserId),
    /// Occurs when addressing a record by an id which
    /// does not exist in the collection.
    UnknownId(UserId)
}

pub type RosterResult<T> = Result<T, RosterError>;

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::DuplicateId(id) => {
                write!(f, "user id {} already exists", id)
            },
            RosterError::UnknownId(id) => {
                write!(f, "no user with id {}", id)
            }
        }
    }
}

impl error::Error for RosterError {}
