use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use tracing::{event, Level};

use crate::{domain::Product, dtos::TopProductsParams, state::AppState, upstream::ProductSource};

pub fn gateway_router<S: ProductSource + Send + Sync + 'static>(
    state: Arc<AppState<S>>,
) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/categories/{category}", get(top_products::<S>))
        .route("/products/{id}", get(product_details))
        .with_state(state)
}

pub async fn index() -> &'static str {
    "product gateway is running"
}

pub async fn top_products<S: ProductSource + Send + Sync>(
    Path(category): Path<String>,
    Query(params): Query<TopProductsParams>,
    State(state): State<Arc<AppState<S>>>,
) -> Response {
    let top = match params.top.as_deref().unwrap_or("").parse::<i64>() {
        Ok(value) => value,
        Err(_) => return (StatusCode::BAD_REQUEST, "Invalid 'top' parameter").into_response(),
    };

    let min_price = match params.min_price.as_deref().unwrap_or("").parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "Invalid 'minPrice' parameter").into_response()
        }
    };

    let max_price = match params.max_price.as_deref().unwrap_or("").parse::<i64>() {
        Ok(value) => value,
        Err(_) => {
            return (StatusCode::BAD_REQUEST, "Invalid 'maxPrice' parameter").into_response()
        }
    };

    if top < 1 || min_price < 0 || max_price <= 0 || min_price >= max_price {
        return (StatusCode::BAD_REQUEST, "Invalid parameter values").into_response();
    }

    match state
        .product_source
        .top_products(&state.company, &category, top, min_price, max_price)
        .await
    {
        Ok(products) => (StatusCode::OK, Json(products)).into_response(),
        Err(e) => {
            event!(Level::ERROR, "Error fetching products: {}", e);
            (StatusCode::INTERNAL_SERVER_ERROR, "Failed to fetch products").into_response()
        }
    }
}

pub async fn product_details(Path(id): Path<String>) -> Response {
    // TODO: fetch the record from the upstream per-company product endpoint
    // once one exists; until then every field but the id is a placeholder.
    let product = Product {
        product_id: id,
        product_name: String::from("Laptop 1"),
        price: 2236.0,
        rating: 4.7,
        discount: 63,
        availability: String::from("yes"),
        company: String::from("AMZ"),
        category: String::from("Laptop"),
    };

    (StatusCode::OK, Json(product)).into_response()
}
