//! Routing metrics.
//!
//! # Metrics
//! - `router_matches_total` (counter): path lookups by outcome
//! - `router_registrations_total` (counter): route registrations by outcome
//! - `router_routes` (gauge): routes in the most recently built or published trie
//!
//! # Design Decisions
//! - Goes through the `metrics` facade only; without an installed recorder these are no-ops
//! - The library never installs an exporter

/// Record the outcome of a path lookup.
pub fn record_match(outcome: &'static str) {
    metrics::counter!("router_matches_total", "outcome" => outcome).increment(1);
}

/// Record the outcome of a route registration.
pub fn record_registration(outcome: &'static str) {
    metrics::counter!("router_registrations_total", "outcome" => outcome).increment(1);
}

/// Record the number of registered routes.
pub fn record_route_count(routes: usize) {
    metrics::gauge!("router_routes").set(routes as f64);
}
