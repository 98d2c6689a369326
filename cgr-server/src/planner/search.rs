//! Contact graph route search.
//!
//! Finds the earliest possible delivery from a source node to a destination
//! node over a contact plan. The search is Dijkstra over contacts rather than
//! nodes: a review step relaxes every contact that can follow the one just
//! finalized, and a selection step pulls the next contact to finalize off the
//! frontier. Loops are avoided per path by refusing to revisit a node already
//! on the chain being extended.

use tracing::{debug, trace};

use crate::domain::{ContactId, DtnTime, NodeId};
use crate::plan::{ContactIndex, ContactPlan};

use super::config::SearchConfig;
use super::frontier::Frontier;
use super::route::{Route, RouteOutcome, SearchResult, SearchStats};
use super::state::{SearchState, Vertex};

/// Error from route search.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SearchError {
    /// Source or destination does not appear in the plan
    #[error("node {node} does not appear in the contact plan")]
    InvalidQueryEndpoints { node: NodeId },

    /// A frontier entry names a contact the plan does not hold
    #[error("search referenced unknown contact {0}")]
    UnknownContactReference(ContactId),

    /// A contact on a chain being walked was never reached
    #[error("contact {0} has no predecessor on its best-known chain")]
    MissingPredecessor(ContactId),

    /// The caller's iteration cap was hit before the search finished
    #[error("search exceeded {limit} iterations")]
    IterationLimit { limit: usize },

    /// The worker running the search panicked or was cancelled
    #[error("route search did not complete")]
    Interrupted,
}

/// Request for route search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteQuery {
    pub source: NodeId,
    pub destination: NodeId,
}

impl RouteQuery {
    /// Create a new route query.
    pub fn new(source: NodeId, destination: NodeId) -> Self {
        Self {
            source,
            destination,
        }
    }

    /// Validate the query against a plan.
    pub fn validate(&self, plan: &ContactPlan) -> Result<(), SearchError> {
        for node in [self.source, self.destination] {
            if !plan.contains_node(node) {
                return Err(SearchError::InvalidQueryEndpoints { node });
            }
        }
        Ok(())
    }
}

/// Route planner over a shared contact plan.
///
/// Holds only shared references; every call to [`Planner::search`] allocates
/// its own search state, so one plan can serve many queries.
pub struct Planner<'a> {
    plan: &'a ContactPlan,
    config: &'a SearchConfig,
}

impl<'a> Planner<'a> {
    /// Create a new planner.
    pub fn new(plan: &'a ContactPlan, config: &'a SearchConfig) -> Self {
        Self { plan, config }
    }

    /// Find the best-case delivery route for a query.
    ///
    /// With strict endpoints, a source or destination missing from the plan
    /// is an error; otherwise it simply yields [`RouteOutcome::Unreachable`].
    pub fn search(&self, query: &RouteQuery) -> Result<SearchResult, SearchError> {
        if self.config.strict_endpoints {
            query.validate(self.plan)?;
        } else if !self.plan.contains_node(query.source) {
            debug!(source = %query.source, "source not in contact plan");
            return Ok(SearchResult {
                outcome: RouteOutcome::Unreachable,
                stats: SearchStats::default(),
            });
        }

        if query.source == query.destination {
            return Ok(SearchResult {
                outcome: RouteOutcome::Delivered(Route::trivial(query.source)),
                stats: SearchStats::default(),
            });
        }

        let mut search = Search::new(self.plan, *query);
        let mut current = Vertex::Root;

        loop {
            search.stats.iterations += 1;
            if self.config.exceeded(search.stats.iterations) {
                let limit = self.config.max_iterations.unwrap_or_default();
                debug!(limit, "route search hit iteration cap");
                return Err(SearchError::IterationLimit { limit });
            }

            search.review(current)?;

            match search.select()? {
                Some(next) => current = Vertex::Contact(next),
                None => break,
            }
        }

        let outcome = search.reconstruct()?;
        debug!(
            source = %query.source,
            destination = %query.destination,
            delivery_time = ?outcome.delivery_time(),
            iterations = search.stats.iterations,
            relaxations = search.stats.relaxations,
            stale_discarded = search.stats.stale_discarded,
            pruned = search.stats.pruned,
            "route search finished"
        );

        Ok(SearchResult {
            outcome,
            stats: search.stats,
        })
    }
}

/// One query in progress.
struct Search<'a> {
    plan: &'a ContactPlan,
    query: RouteQuery,
    state: SearchState,
    frontier: Frontier,
    /// Best-case delivery time found so far.
    bdt: DtnTime,
    best_delivery: Option<ContactIndex>,
    stats: SearchStats,
}

impl<'a> Search<'a> {
    fn new(plan: &'a ContactPlan, query: RouteQuery) -> Self {
        Self {
            plan,
            query,
            state: SearchState::new(plan),
            frontier: Frontier::new(),
            bdt: DtnTime::INFINITY,
            best_delivery: None,
            stats: SearchStats::default(),
        }
    }

    /// Receiver and best arrival time of a vertex.
    fn position(&self, vertex: Vertex) -> (NodeId, DtnTime) {
        match vertex {
            Vertex::Root => (self.query.source, DtnTime::ZERO),
            Vertex::Contact(idx) => (
                self.plan.contacts()[idx.0].receiver(),
                self.state.best_arrival(idx),
            ),
        }
    }

    /// Relax every contact that can follow `current`, then finalize it.
    ///
    /// Reaching the destination only tightens the delivery bound. The
    /// search carries on, since a different chain may still deliver earlier.
    fn review(&mut self, current: Vertex) -> Result<(), SearchError> {
        let plan = self.plan;
        let (at, ready) = self.position(current);

        for &idx in plan.departing_from(at) {
            let contact = &plan.contacts()[idx.0];

            if !contact.window().open_at_or_after(ready) || self.state.is_finalized(idx) {
                continue;
            }

            let revisits = self
                .state
                .path_contains(plan, current, contact.receiver())
                .map_err(|broken| {
                    SearchError::MissingPredecessor(plan.contacts()[broken.0].id())
                })?;
            if revisits {
                continue;
            }

            let arrival = contact.arrival_from(ready);
            if !self.state.relax(idx, arrival, current) {
                continue;
            }

            self.stats.relaxations += 1;
            self.frontier.push(arrival, contact.id());
            trace!(contact = %contact.id(), %arrival, "relaxed");

            if contact.receiver() == self.query.destination && arrival < self.bdt {
                self.bdt = arrival;
                self.best_delivery = Some(idx);
                trace!(contact = %contact.id(), %arrival, "new best delivery");
            }
        }

        if let Vertex::Contact(idx) = current {
            self.state.finalize(idx);
        }

        Ok(())
    }

    /// Pop the next contact to finalize.
    ///
    /// Entries for finalized contacts are stale and dropped. If a stale
    /// contact's arrival is already past the delivery bound, nothing left in
    /// the frontier can beat it and the search stops.
    fn select(&mut self) -> Result<Option<ContactIndex>, SearchError> {
        while let Some(entry) = self.frontier.pop() {
            let idx = self
                .plan
                .index_of(entry.contact)
                .ok_or(SearchError::UnknownContactReference(entry.contact))?;

            if !self.state.is_finalized(idx) {
                return Ok(Some(idx));
            }

            self.stats.stale_discarded += 1;
            trace!(contact = %entry.contact, arrival = %entry.arrival, "discarded stale entry");

            if self.state.best_arrival(idx) > self.bdt {
                self.stats.pruned = true;
                return Ok(None);
            }
        }

        Ok(None)
    }

    /// Walk predecessors back from the best delivery contact.
    fn reconstruct(&self) -> Result<RouteOutcome, SearchError> {
        let Some(best) = self.best_delivery else {
            return Ok(RouteOutcome::Unreachable);
        };

        let mut nodes = Vec::new();
        let mut contacts = Vec::new();
        let mut vertex = Vertex::Contact(best);

        while let Vertex::Contact(idx) = vertex {
            let contact = &self.plan.contacts()[idx.0];
            nodes.push(contact.receiver());
            contacts.push(contact.id());
            vertex = self
                .state
                .predecessor(idx)
                .ok_or(SearchError::MissingPredecessor(contact.id()))?;
        }
        nodes.push(self.query.source);

        nodes.reverse();
        contacts.reverse();

        Ok(RouteOutcome::Delivered(Route::new(nodes, contacts, self.bdt)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = SearchError::InvalidQueryEndpoints { node: NodeId(4) };
        assert_eq!(err.to_string(), "node 4 does not appear in the contact plan");

        let err = SearchError::UnknownContactReference(ContactId(12));
        assert_eq!(err.to_string(), "search referenced unknown contact 12");

        let err = SearchError::IterationLimit { limit: 3 };
        assert_eq!(err.to_string(), "search exceeded 3 iterations");
    }

    #[test]
    fn query_validation() {
        let plan: ContactPlan = "1 0 10 1 2 1".parse().unwrap();

        assert!(RouteQuery::new(NodeId(1), NodeId(2)).validate(&plan).is_ok());
        assert_eq!(
            RouteQuery::new(NodeId(3), NodeId(2)).validate(&plan),
            Err(SearchError::InvalidQueryEndpoints { node: NodeId(3) })
        );
        assert_eq!(
            RouteQuery::new(NodeId(1), NodeId(9)).validate(&plan),
            Err(SearchError::InvalidQueryEndpoints { node: NodeId(9) })
        );
    }

    #[test]
    fn select_rejects_unknown_frontier_entry() {
        let plan: ContactPlan = "1 0 10 1 2 1".parse().unwrap();
        let mut search = Search::new(&plan, RouteQuery::new(NodeId(1), NodeId(2)));
        search.frontier.push(DtnTime::ZERO, ContactId(99));

        assert_eq!(
            search.select(),
            Err(SearchError::UnknownContactReference(ContactId(99)))
        );
    }

    #[test]
    fn select_skips_stale_entries() {
        let plan: ContactPlan = "1 0 10 1 2 1\n2 0 10 1 3 5".parse().unwrap();
        let mut search = Search::new(&plan, RouteQuery::new(NodeId(1), NodeId(3)));
        search.review(Vertex::Root).unwrap();

        let first = search.select().unwrap().unwrap();
        assert_eq!(plan.contacts()[first.0].id(), ContactId(1));

        // Leave a stale duplicate of contact 1 behind contact 2.
        search.review(Vertex::Contact(first)).unwrap();
        search.frontier.push(DtnTime::new(1.0).unwrap(), ContactId(1));

        let second = search.select().unwrap().unwrap();
        assert_eq!(plan.contacts()[second.0].id(), ContactId(2));
        assert_eq!(search.stats.stale_discarded, 1);
    }

    #[test]
    fn select_prunes_past_delivery_bound() {
        let plan: ContactPlan = "1 0 10 1 2 1\n2 0 10 1 3 5".parse().unwrap();
        let mut search = Search::new(&plan, RouteQuery::new(NodeId(1), NodeId(2)));
        search.review(Vertex::Root).unwrap();
        assert_eq!(search.bdt, DtnTime::new(1.0).unwrap());

        // Finalize contact 2 (arrival 5) and leave a stale entry for it.
        let c2 = plan.index_of(ContactId(2)).unwrap();
        search.state.finalize(c2);
        search.frontier = Frontier::new();
        search.frontier.push(DtnTime::new(5.0).unwrap(), ContactId(2));
        search.frontier.push(DtnTime::new(6.0).unwrap(), ContactId(1));

        assert_eq!(search.select(), Ok(None));
        assert!(search.stats.pruned);
    }

    #[test]
    fn reconstruct_without_delivery_is_unreachable() {
        let plan: ContactPlan = "1 0 10 1 2 1".parse().unwrap();
        let search = Search::new(&plan, RouteQuery::new(NodeId(1), NodeId(2)));

        assert_eq!(search.reconstruct(), Ok(RouteOutcome::Unreachable));
    }
}
