//! HTTP client SDK for the StorePOS point-of-sale backend.
//!
//! This crate provides a typed client for the StorePOS server API.
//!
//! # Example
//!
//! ```no_run
//! use storepos_client::{Product, StorePosClient};
//!
//! # async fn example() -> storepos_client::Result<()> {
//! // Create a client
//! let client = StorePosClient::builder()
//!     .base_url("http://localhost:5062")
//!     .build()?;
//!
//! // Log in; the returned token is attached to every later request
//! if client.auth().login("admin@storepos.com", "Admin123!").await? {
//!     let products = client.products().list().await?;
//!     println!("Retrieved {} products", products.len());
//!
//!     let new_product = Product {
//!         sku: Some("RUST-001".to_string()),
//!         barcode: Some("1234567890123".to_string()),
//!         name: Some("Product from Rust".to_string()),
//!         category: Some("Test".to_string()),
//!         price: Some(19.99),
//!         cost: Some(12.00),
//!         stock_qty: Some(50),
//!         is_active: Some(true),
//!         ..Default::default()
//!     };
//!
//!     let created = client.products().create(&new_product).await?;
//!     if let Some(id) = created.id {
//!         println!("Created product with ID: {}", id);
//!     }
//! }
//! # Ok(())
//! # }
//! ```
//!
//! # API Coverage
//!
//! - **Auth**: log in and store the bearer token for subsequent calls
//! - **Products**: list products, create a product
//!
//! The client holds no token until [`AuthApi::login`](api::AuthApi::login)
//! succeeds (or one is pre-seeded on the builder); product calls made before
//! that fail with [`Error::NotAuthenticated`].

pub mod api;
pub mod client;
pub mod error;
pub mod types;

pub use api::{AuthApi, ProductsApi};
pub use client::{ClientBuilder, StorePosClient};
pub use error::{Error, Result};
pub use types::*;
