//! # Products Hex
//!
//! Application service layer, background rate refresher and HTTP adapter for
//! the products service.
//!
//! ## Architecture
//!
//! - `service/` - Application service (currency validation and price conversion)
//! - `refresher/` - Periodic copy of the rate source into the rate cache
//! - `inbound/` - HTTP adapter (Axum server)
//!
//! The service is generic over `R: ProductRepository` and `C: RateCache`, allowing
//! different adapters to be injected.

pub mod inbound;
pub mod openapi;
pub mod refresher;
pub mod service;


pub use refresher::{DEFAULT_REFRESH_INTERVAL, RateRefresher, RefresherHandle};
pub use service::ProductService;
