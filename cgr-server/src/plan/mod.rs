//! Contact topology for one planning epoch.
//!
//! A `ContactPlan` is the static contact graph: every contact, in input
//! order, with lookups by contact id and by sending node. It is immutable
//! once built and can be shared between any number of concurrent queries;
//! per-query search state lives in the planner.

mod error;
mod parse;

use std::collections::{BTreeSet, HashMap};
use std::path::Path;
use std::str::FromStr;

use crate::domain::{Contact, ContactId, NodeId};

pub use error::PlanError;
pub use parse::parse_contact_plan;

/// Position of a contact within its plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ContactIndex(pub usize);

/// The full, ordered collection of contacts.
#[derive(Debug, Clone, Default)]
pub struct ContactPlan {
    contacts: Vec<Contact>,
    by_id: HashMap<ContactId, ContactIndex>,
    /// Contacts leaving each node, in plan order.
    by_sender: HashMap<NodeId, Vec<ContactIndex>>,
    nodes: BTreeSet<NodeId>,
}

impl ContactPlan {
    /// Build a plan from contacts, rejecting duplicate ids.
    ///
    /// The `line` of a duplicate error is the 1-based position in `contacts`.
    pub fn new(contacts: impl IntoIterator<Item = Contact>) -> Result<Self, PlanError> {
        let mut plan = Self::default();
        for (idx, contact) in contacts.into_iter().enumerate() {
            let id = contact.id();
            if plan.insert(contact).is_err() {
                return Err(PlanError::DuplicateContactId { id, line: idx + 1 });
            }
        }
        Ok(plan)
    }

    /// Read and parse a plan file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, PlanError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PlanError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        parse_contact_plan(&text)
    }

    /// Append a contact. Returns the rejected contact's id if already present.
    fn insert(&mut self, contact: Contact) -> Result<ContactIndex, ContactId> {
        let id = contact.id();
        if self.by_id.contains_key(&id) {
            return Err(id);
        }

        let index = ContactIndex(self.contacts.len());
        self.by_id.insert(id, index);
        self.by_sender
            .entry(contact.sender())
            .or_default()
            .push(index);
        self.nodes.insert(contact.sender());
        self.nodes.insert(contact.receiver());
        self.contacts.push(contact);

        Ok(index)
    }

    /// Number of contacts.
    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// All contacts in input order.
    pub fn contacts(&self) -> &[Contact] {
        &self.contacts
    }

    /// Contact at a position, if in range.
    pub fn get(&self, index: ContactIndex) -> Option<&Contact> {
        self.contacts.get(index.0)
    }

    /// Resolve a contact id to its position.
    pub fn index_of(&self, id: ContactId) -> Option<ContactIndex> {
        self.by_id.get(&id).copied()
    }

    /// Look up a contact by id.
    pub fn by_id(&self, id: ContactId) -> Option<&Contact> {
        self.index_of(id).and_then(|idx| self.get(idx))
    }

    /// Positions of the contacts sent by `node`, in plan order.
    pub fn departing_from(&self, node: NodeId) -> &[ContactIndex] {
        self.by_sender
            .get(&node)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Every node that sends or receives on some contact, ascending.
    pub fn nodes(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().copied()
    }

    /// True if `node` is the sender or receiver of at least one contact.
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.contains(&node)
    }
}

impl FromStr for ContactPlan {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_contact_plan(s)
    }
}
