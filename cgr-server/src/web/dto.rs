//! Data transfer objects for web requests and responses.

use serde::{Deserialize, Serialize};

use crate::domain::{Contact, ContactId, NodeId};
use crate::plan::ContactPlan;
use crate::planner::{RouteOutcome, SearchResult, SearchStats};

/// Request to plan a route.
#[derive(Debug, Deserialize)]
pub struct RouteRequest {
    /// Node the data starts at
    pub source: NodeId,

    /// Node the data must reach
    pub destination: NodeId,
}

/// Search counters.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct StatsResult {
    pub iterations: usize,
    pub relaxations: usize,
    pub stale_discarded: usize,
    pub pruned: bool,
}

impl From<&SearchStats> for StatsResult {
    fn from(stats: &SearchStats) -> Self {
        Self {
            iterations: stats.iterations,
            relaxations: stats.relaxations,
            stale_discarded: stats.stale_discarded,
            pruned: stats.pruned,
        }
    }
}

/// Response for route planning.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum RouteResponse {
    /// A route exists
    Delivered {
        /// Network nodes from source to destination inclusive
        nodes: Vec<NodeId>,
        /// Contacts used, in order
        contacts: Vec<ContactId>,
        /// Best-case delivery time
        delivery_time: f64,
        stats: StatsResult,
    },

    /// No chain of contacts reaches the destination
    Unreachable { stats: StatsResult },
}

impl RouteResponse {
    /// Build from a search result.
    pub fn from_result(result: &SearchResult) -> Self {
        let stats = StatsResult::from(&result.stats);
        match &result.outcome {
            RouteOutcome::Delivered(route) => RouteResponse::Delivered {
                nodes: route.nodes().to_vec(),
                contacts: route.contacts().to_vec(),
                delivery_time: route.delivery_time().as_secs(),
                stats,
            },
            RouteOutcome::Unreachable => RouteResponse::Unreachable { stats },
        }
    }
}

/// A contact in the plan listing.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct ContactResult {
    pub id: ContactId,
    pub start: f64,
    /// `None` for a window that never closes
    pub end: Option<f64>,
    pub sender: NodeId,
    pub receiver: NodeId,
    pub one_way_delay: f64,
}

impl ContactResult {
    pub fn from_contact(contact: &Contact) -> Self {
        let window = contact.window();
        Self {
            id: contact.id(),
            start: window.start().as_secs(),
            end: window.end().finite_secs(),
            sender: contact.sender(),
            receiver: contact.receiver(),
            one_way_delay: contact.one_way_delay().as_secs(),
        }
    }
}

/// Response listing every contact.
#[derive(Debug, Serialize, Deserialize)]
pub struct ContactsResponse {
    pub contacts: Vec<ContactResult>,
}

/// Summary of the loaded plan.
#[derive(Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PlanSummaryResponse {
    /// Number of contacts
    pub contact_count: usize,

    /// Every node that sends or receives, ascending
    pub nodes: Vec<NodeId>,
}

impl PlanSummaryResponse {
    pub fn from_plan(plan: &ContactPlan) -> Self {
        Self {
            contact_count: plan.len(),
            nodes: plan.nodes().collect(),
        }
    }
}

/// Error response.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::{Planner, RouteQuery, SearchConfig};

    fn plan() -> ContactPlan {
        "1 0 10 1 2 1\n2 2 inf 2 3 2\n".parse().unwrap()
    }

    fn search(source: u64, destination: u64) -> SearchResult {
        let plan = plan();
        let config = SearchConfig::default();
        Planner::new(&plan, &config)
            .search(&RouteQuery::new(NodeId(source), NodeId(destination)))
            .unwrap()
    }

    #[test]
    fn delivered_response_json() {
        let response = RouteResponse::from_result(&search(1, 3));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "delivered");
        assert_eq!(json["nodes"], serde_json::json!([1, 2, 3]));
        assert_eq!(json["contacts"], serde_json::json!([1, 2]));
        assert_eq!(json["delivery_time"], 4.0);
        assert_eq!(json["stats"]["iterations"], 3);
    }

    #[test]
    fn unreachable_response_json() {
        let response = RouteResponse::from_result(&search(3, 1));
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["status"], "unreachable");
        assert!(json.get("nodes").is_none());
        assert!(json.get("delivery_time").is_none());
    }

    #[test]
    fn contact_result_renders_open_window_as_null() {
        let plan = plan();
        let open = plan.by_id(ContactId(2)).unwrap();
        let json = serde_json::to_value(ContactResult::from_contact(open)).unwrap();

        assert_eq!(json["end"], serde_json::Value::Null);
        assert_eq!(json["start"], 2.0);
        assert_eq!(json["one_way_delay"], 2.0);
    }

    #[test]
    fn plan_summary() {
        let summary = PlanSummaryResponse::from_plan(&plan());

        assert_eq!(summary.contact_count, 2);
        assert_eq!(summary.nodes, vec![NodeId(1), NodeId(2), NodeId(3)]);
    }

    #[test]
    fn route_request_parses() {
        let req: RouteRequest =
            serde_json::from_str(r#"{"source": 1, "destination": 12}"#).unwrap();

        assert_eq!(req.source, NodeId(1));
        assert_eq!(req.destination, NodeId(12));
    }
}
