pub mod analytics;
pub mod chat;
pub mod recommendation;

use std::collections::BTreeMap;

/// Free-form coordinates as sent by clients, e.g. `{"lat": 40.71, "lng": -74.0}`.
pub type Location = BTreeMap<String, f64>;
