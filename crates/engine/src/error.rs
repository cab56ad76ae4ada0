//! The module contains the error the engine can throw.
//!
//! Ledger computations fail fast: when any of these errors is returned no
//! partial balance map or suggestion list is produced.
//!
//! - [`UnknownMemberReference`] thrown when a record points to a member that
//!   is not part of the supplied member set.
//! - [`InvalidAmount`] thrown for NaN/infinite amounts, negative expense or
//!   share amounts and non-positive settlement amounts.
//! - [`SelfSettlement`] thrown when a settlement has the same payer and
//!   receiver.
//! - [`KeyNotFound`] thrown when a group or one of its items is not found.
//!
//!  [`UnknownMemberReference`]: EngineError::UnknownMemberReference
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`SelfSettlement`]: EngineError::SelfSettlement
//!  [`KeyNotFound`]: EngineError::KeyNotFound
use thiserror::Error;
use uuid::Uuid;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("{record} references unknown member {member_id}")]
    UnknownMemberReference { record: String, member_id: Uuid },
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Member {0} cannot settle with themselves")]
    SelfSettlement(Uuid),
    #[error("\"{0}\" key not found!")]
    KeyNotFound(String),
    #[error("Invalid name: {0}")]
    InvalidName(String),
    #[error("Invalid split: {0}")]
    InvalidSplit(String),
    #[error("Member in use: {0}")]
    MemberInUse(String),
}
