use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{event, Level};

use crate::domain::Product;

#[derive(Debug)]
pub struct HttpUpstreamInitializationInfo {
    pub base_url: String,
    pub timeout: Duration,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ProductSource {
    async fn top_products(
        &self,
        company: &str,
        category: &str,
        top: i64,
        min_price: i64,
        max_price: i64,
    ) -> Result<Vec<Product>, String>;
}

#[derive(Clone)]
pub struct HttpProductSource {
    client: Client,
    base_url: String,
}

impl HttpProductSource {
    pub fn new(info: &HttpUpstreamInitializationInfo) -> Result<HttpProductSource, String> {
        match Client::builder().timeout(info.timeout).build() {
            Ok(client) => Ok(HttpProductSource {
                client: client,
                base_url: info.base_url.clone(),
            }),
            Err(e) => Err(format!("Failed to build upstream client: {}", e)),
        }
    }

    fn products_url(
        &self,
        company: &str,
        category: &str,
        top: i64,
        min_price: i64,
        max_price: i64,
    ) -> String {
        format!(
            "{}/test/companies/{}/categories/{}/products?top={}&minPrice={}&maxPrice={}",
            self.base_url, company, category, top, min_price, max_price
        )
    }
}

#[async_trait]
impl ProductSource for HttpProductSource {
    async fn top_products(
        &self,
        company: &str,
        category: &str,
        top: i64,
        min_price: i64,
        max_price: i64,
    ) -> Result<Vec<Product>, String> {
        let url = self.products_url(company, category, top, min_price, max_price);
        event!(Level::DEBUG, "Fetching products from {}", url);

        // The upstream status line is not inspected; only a decodable JSON
        // array counts as success.
        match self.client.get(&url).send().await {
            Ok(response) => match response.json::<Vec<Product>>().await {
                Ok(products) => Ok(products),
                Err(e) => Err(format!("Failed to decode upstream response: {}", e)),
            },
            Err(e) => Err(format!("Failed to reach upstream: {}", e)),
        }
    }
}
