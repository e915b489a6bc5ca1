use serde::Deserialize;

// Query parameters arrive as raw strings so each one is validated in order
// with its own error message. A missing parameter fails the same way a
// non-numeric one does.
#[derive(Debug, Deserialize)]
pub struct TopProductsParams {
    pub top: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
}
