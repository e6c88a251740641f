//! Catalogue domain for the Sangam Furniture storefront.
//!
//! Immutable product, category and testimonial tables plus the pure derivations
//! the pages render from: listing filters and sorts, product detail resolution,
//! related products, price labels, enquiry links and sitemap entries. Rendering
//! and routing live with the caller.

pub mod category;
pub mod config;
pub mod detail;
pub mod enquiry;
pub mod filter;
pub mod product;
pub mod routes;
pub mod seed;
pub mod sitemap;
pub mod store;
pub mod testimonial;

pub use category::Category;
pub use config::CatalogConfig;
pub use detail::{ProductDetail, resolve, try_resolve};
pub use enquiry::EnquiryLink;
pub use filter::{
    CategoryFilter, Criteria, MaterialFilter, PRICE_PRESETS, PricePreset, PriceRange, SortKey,
    filter_products,
};
pub use product::{Product, Specifications, discount_percent};
pub use store::{ALL_CATEGORIES, Catalog, CatalogData, CatalogStore, LoadError, RELATED_LIMIT};
pub use testimonial::{Faq, Testimonial};

use sangam_core::Rupees;

/// Storefront price label: `₹89,999`, `₹15,00,000`.
pub fn format_price(amount: u64) -> String {
    Rupees(amount).to_string()
}
