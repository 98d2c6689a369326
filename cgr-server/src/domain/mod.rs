//! Domain types for contact graph routing.
//!
//! This module contains the core model types for a contact schedule. All
//! types enforce their invariants at construction time, so code that
//! receives these types can trust their validity.

mod contact;
mod error;
mod node;
mod time;

pub use contact::{Contact, Window};
pub use error::DomainError;
pub use node::{ContactId, InvalidId, NodeId};
pub use time::{DtnTime, TimeError};
