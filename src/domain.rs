use serde::{Deserialize, Serialize};

/// One product as the upstream reports it. Decoded from the upstream JSON
/// array and re-encoded to the caller unchanged; never stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: String,
    pub product_name: String,
    pub price: f64,
    pub rating: f64,
    pub discount: i64,
    pub availability: String,
    pub company: String,
    pub category: String,
}
