//! # Products Repository
//!
//! Concrete repository implementations (adapters) for the products service.
//! This crate provides the adapters that implement the `ProductRepository` port.

pub mod memory;

pub use memory::InMemoryProductRepo;

/// Build the default product repository, seeded with the bakery catalogue.
pub fn build_repo() -> InMemoryProductRepo {
    InMemoryProductRepo::with_catalogue()
}
