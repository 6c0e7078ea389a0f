//! API endpoint implementations.

mod auth;
mod products;

pub use auth::AuthApi;
pub use products::ProductsApi;
