//! Search outcomes.

use crate::domain::{ContactId, DtnTime, NodeId};

/// A best-case delivery route.
///
/// # Invariants
///
/// - `nodes` runs from source to destination inclusive
/// - `nodes.len() == contacts.len() + 1`
/// - no node appears twice
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    nodes: Vec<NodeId>,
    contacts: Vec<ContactId>,
    delivery_time: DtnTime,
}

impl Route {
    pub(super) fn new(
        nodes: Vec<NodeId>,
        contacts: Vec<ContactId>,
        delivery_time: DtnTime,
    ) -> Self {
        debug_assert_eq!(nodes.len(), contacts.len() + 1);
        Self {
            nodes,
            contacts,
            delivery_time,
        }
    }

    /// The route for a query whose source is its destination.
    pub(super) fn trivial(node: NodeId) -> Self {
        Self::new(vec![node], Vec::new(), DtnTime::ZERO)
    }

    /// Network nodes visited, source first.
    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    /// Contacts used, in order of use.
    pub fn contacts(&self) -> &[ContactId] {
        &self.contacts
    }

    /// Best-case delivery time at the destination.
    pub fn delivery_time(&self) -> DtnTime {
        self.delivery_time
    }

    pub fn source(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn destination(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// Number of contacts traversed.
    pub fn hop_count(&self) -> usize {
        self.contacts.len()
    }
}

/// Result of a route query.
///
/// An unreachable destination is an ordinary answer, not an error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteOutcome {
    Delivered(Route),
    Unreachable,
}

impl RouteOutcome {
    pub fn route(&self) -> Option<&Route> {
        match self {
            RouteOutcome::Delivered(route) => Some(route),
            RouteOutcome::Unreachable => None,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, RouteOutcome::Unreachable)
    }

    /// Best-case delivery time, if delivered.
    pub fn delivery_time(&self) -> Option<DtnTime> {
        self.route().map(Route::delivery_time)
    }
}

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
    /// Review rounds run, the root's included.
    pub iterations: usize,
    /// Successful arrival-time improvements.
    pub relaxations: usize,
    /// Frontier entries dropped because their contact was already finalized.
    pub stale_discarded: usize,
    /// True if the search stopped on the delivery-time bound rather than an
    /// empty frontier.
    pub pruned: bool,
}

/// Outcome of a search plus its counters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchResult {
    pub outcome: RouteOutcome,
    pub stats: SearchStats,
}
