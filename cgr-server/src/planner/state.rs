//! Per-query search state.
//!
//! The plan is shared and immutable, so everything a search mutates lives
//! here in arrays parallel to the plan's contact order. A fresh state is
//! allocated for every query.

use crate::domain::{DtnTime, NodeId};
use crate::plan::{ContactIndex, ContactPlan};

/// A vertex of the contact graph: a real contact or the synthetic root.
///
/// The root stands for "already at the source at time zero".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Vertex {
    Root,
    Contact(ContactIndex),
}

/// Mutable search state for one query.
#[derive(Debug)]
pub struct SearchState {
    best_arrival: Vec<DtnTime>,
    predecessor: Vec<Option<Vertex>>,
    finalized: Vec<bool>,
}

impl SearchState {
    /// Initial state for a plan: nothing reached, nothing finalized.
    pub fn new(plan: &ContactPlan) -> Self {
        let n = plan.len();
        Self {
            best_arrival: vec![DtnTime::INFINITY; n],
            predecessor: vec![None; n],
            finalized: vec![false; n],
        }
    }

    pub fn best_arrival(&self, idx: ContactIndex) -> DtnTime {
        self.best_arrival[idx.0]
    }

    pub fn predecessor(&self, idx: ContactIndex) -> Option<Vertex> {
        self.predecessor[idx.0]
    }

    pub fn is_finalized(&self, idx: ContactIndex) -> bool {
        self.finalized[idx.0]
    }

    /// Record a strictly better arrival. Returns false (and changes nothing)
    /// if `arrival` is not an improvement or the contact is finalized.
    pub fn relax(&mut self, idx: ContactIndex, arrival: DtnTime, via: Vertex) -> bool {
        if self.finalized[idx.0] || arrival >= self.best_arrival[idx.0] {
            return false;
        }
        self.best_arrival[idx.0] = arrival;
        self.predecessor[idx.0] = Some(via);
        true
    }

    /// Commit to the contact's current arrival. Returns false if it was
    /// already finalized.
    pub fn finalize(&mut self, idx: ContactIndex) -> bool {
        !std::mem::replace(&mut self.finalized[idx.0], true)
    }

    /// True if `node` is the receiver of any contact on the best-known
    /// chain ending at `from`.
    ///
    /// The root contributes nothing. Fails with the index of the first
    /// contact on the chain that was never relaxed.
    pub fn path_contains(
        &self,
        plan: &ContactPlan,
        from: Vertex,
        node: NodeId,
    ) -> Result<bool, ContactIndex> {
        let mut vertex = from;
        while let Vertex::Contact(idx) = vertex {
            if plan.contacts()[idx.0].receiver() == node {
                return Ok(true);
            }
            vertex = self.predecessor(idx).ok_or(idx)?;
        }
        Ok(false)
    }
}
