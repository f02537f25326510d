//! parcelroute library entry points.
//!
//! This crate loads a flight graph from its line-oriented text source, finds
//! the cheapest route between two named locations with Dijkstra's algorithm,
//! and prices the delivery of a parcel along that route. Higher-level
//! consumers (the CLI) should only depend on the functions exported here
//! instead of reimplementing behavior.
//!

#![deny(warnings)]

pub mod constants;
pub mod dataset;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod loader;
pub mod output;
pub mod parcel;
pub mod path;
pub mod pricing;
pub mod routing;

pub use constants::{DEFAULT_EDGE_WEIGHT, FLIGHT_UNIT_COST};
pub use dataset::{default_graph_path, resolve_graph_path, GRAPH_ENV_VAR, GRAPH_FILENAME};
pub use error::{Error, Result};
pub use frontier::{Frontier, FrontierEntry};
pub use graph::{Edge, Graph, Node, NodeId};
pub use loader::{load_graph, load_graph_from_reader, LoaderConfig};
pub use output::{RouteEndpoint, RouteRenderMode, RouteStep, RouteSummary};
pub use parcel::{Parcel, ParcelSize, ParcelType};
pub use path::{find_route, shortest_paths, shortest_paths_to, ShortestPathTree};
pub use pricing::{calculate_delivery_cost, quote_delivery, DeliveryQuote, PricingConfig};
pub use routing::{plan_route, RoutePlan, RouteRequest};
