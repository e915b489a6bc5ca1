use std::sync::Arc;

use crate::upstream::ProductSource;

#[derive(Clone)]
pub struct AppState<S: ProductSource> {
    pub product_source: Arc<S>,
    pub company: String,
}
