//! Products API.

use reqwest::StatusCode;

use crate::client::StorePosClient;
use crate::error::Result;
use crate::types::Product;

/// Products API client.
///
/// Both endpoints require a bearer token; calls made before a successful
/// login fail with [`Error::NotAuthenticated`](crate::Error::NotAuthenticated)
/// without touching the network.
pub struct ProductsApi {
    client: StorePosClient,
}

impl ProductsApi {
    pub(crate) fn new(client: StorePosClient) -> Self {
        Self { client }
    }

    /// List all products.
    pub async fn list(&self) -> Result<Vec<Product>> {
        self.client.ensure_authenticated()?;
        self.client.get("products").await
    }

    /// Create a new product.
    ///
    /// The server replies 201 with the created record, including its
    /// assigned `id`.
    pub async fn create(&self, product: &Product) -> Result<Product> {
        self.client.ensure_authenticated()?;
        self.client
            .post_with_status("products", StatusCode::CREATED, product)
            .await
    }
}
