//! Catalog Store: the immutable product/category/testimonial tables and the
//! lookup and derivation operations over them.

use std::collections::{HashMap, HashSet};
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use sangam_core::{DomainError, DomainResult, Entity, ProductId};

use crate::category::Category;
use crate::product::Product;
use crate::seed;
use crate::testimonial::{Faq, Testimonial};

/// Reserved category slug meaning "no category filter".
pub const ALL_CATEGORIES: &str = "all";

/// Upper bound on related products shown under a product.
pub const RELATED_LIMIT: usize = 4;

/// Serialized catalogue document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CatalogData {
    pub categories: Vec<Category>,
    pub products: Vec<Product>,
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub faqs: Vec<Faq>,
}

/// Read-only lookup interface over catalogue content.
///
/// Implementors supply the tables; the derivations are provided methods so that
/// every backing store shares the same ordering and back-fill rules. All
/// results follow declaration order.
pub trait CatalogStore {
    fn products(&self) -> &[Product];
    fn categories(&self) -> &[Category];
    fn testimonials(&self) -> &[Testimonial];
    fn faqs(&self) -> &[Faq];

    /// Exact, case-sensitive slug match.
    fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.products().iter().find(|p| p.slug.as_str() == slug)
    }

    fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.categories().iter().find(|c| c.slug.as_str() == slug)
    }

    /// Every product for [`ALL_CATEGORIES`], otherwise the products whose
    /// category slug matches exactly. Unknown slugs give an empty list.
    fn products_by_category(&self, category_slug: &str) -> Vec<&Product> {
        if category_slug == ALL_CATEGORIES {
            return self.products().iter().collect();
        }
        self.products()
            .iter()
            .filter(|p| p.in_category(category_slug))
            .collect()
    }

    fn best_sellers(&self) -> Vec<&Product> {
        self.products().iter().filter(|p| p.is_best_seller).collect()
    }

    fn new_arrivals(&self) -> Vec<&Product> {
        self.products().iter().filter(|p| p.is_new).collect()
    }

    /// Up to [`RELATED_LIMIT`] products for the "you may also like" strip.
    ///
    /// Same-category products come first; when there are fewer than the limit,
    /// products from other categories fill the remaining slots. The product
    /// itself is never included.
    fn related_products(&self, product_id: &ProductId, category_slug: &str) -> Vec<&Product> {
        let (same, other): (Vec<&Product>, Vec<&Product>) = self
            .products()
            .iter()
            .filter(|p| &p.id != product_id)
            .partition(|p| p.in_category(category_slug));

        same.into_iter().chain(other).take(RELATED_LIMIT).collect()
    }

    /// Number of products actually listed under a category.
    fn live_product_count(&self, category_slug: &str) -> usize {
        self.products()
            .iter()
            .filter(|p| p.in_category(category_slug))
            .count()
    }

    /// Leading testimonials, for pages that only show a handful.
    fn featured_testimonials(&self, limit: usize) -> &[Testimonial] {
        let all = self.testimonials();
        &all[..limit.min(all.len())]
    }
}

impl<S> CatalogStore for &S
where
    S: CatalogStore + ?Sized,
{
    fn products(&self) -> &[Product] {
        (**self).products()
    }

    fn categories(&self) -> &[Category] {
        (**self).categories()
    }

    fn testimonials(&self) -> &[Testimonial] {
        (**self).testimonials()
    }

    fn faqs(&self) -> &[Faq] {
        (**self).faqs()
    }

    fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        (**self).product_by_slug(slug)
    }

    fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        (**self).category_by_slug(slug)
    }
}

#[derive(Debug, Error)]
pub enum LoadError {
    #[error("failed to read catalogue file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalogue document: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("catalogue document is invalid: {0}")]
    Invalid(#[from] DomainError),
}

/// In-memory, immutable catalogue.
#[derive(Debug, Clone)]
pub struct Catalog {
    data: CatalogData,
    product_index: HashMap<String, usize>,
    category_index: HashMap<String, usize>,
}

static SAMPLE: LazyLock<Catalog> = LazyLock::new(|| {
    let catalog = Catalog::from_trusted(seed::data());
    catalog.log_summary();
    catalog
});

impl Catalog {
    /// The built-in catalogue, initialised once per process.
    pub fn sample() -> &'static Catalog {
        &SAMPLE
    }

    /// Build a catalogue from externally supplied data, checking the invariants
    /// the lookups rely on.
    pub fn from_data(data: CatalogData) -> DomainResult<Self> {
        validate(&data)?;
        let catalog = Self::from_trusted(data);
        catalog.log_summary();
        Ok(catalog)
    }

    /// Parse a JSON catalogue document.
    pub fn from_json(json: &str) -> Result<Self, LoadError> {
        let data: CatalogData = serde_json::from_str(json)?;
        Ok(Self::from_data(data)?)
    }

    /// Read and parse a JSON catalogue file.
    pub fn load_json(path: impl AsRef<Path>) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), bytes = raw.len(), "read catalogue file");
        Self::from_json(&raw)
    }

    fn from_trusted(data: CatalogData) -> Self {
        let product_index = data
            .products
            .iter()
            .enumerate()
            .map(|(i, p)| (p.slug.to_string(), i))
            .collect();
        let category_index = data
            .categories
            .iter()
            .enumerate()
            .map(|(i, c)| (c.slug.to_string(), i))
            .collect();
        Self {
            data,
            product_index,
            category_index,
        }
    }

    pub fn data(&self) -> &CatalogData {
        &self.data
    }

    fn log_summary(&self) {
        tracing::info!(
            products = self.data.products.len(),
            categories = self.data.categories.len(),
            testimonials = self.data.testimonials.len(),
            faqs = self.data.faqs.len(),
            "catalogue loaded"
        );

        for category in &self.data.categories {
            let live = self.live_product_count(category.slug.as_str());
            if live != category.product_count as usize {
                tracing::warn!(
                    category = %category.slug,
                    declared = category.product_count,
                    live,
                    "category product count differs from listed products"
                );
            }
        }
    }
}

impl CatalogStore for Catalog {
    fn products(&self) -> &[Product] {
        &self.data.products
    }

    fn categories(&self) -> &[Category] {
        &self.data.categories
    }

    fn testimonials(&self) -> &[Testimonial] {
        &self.data.testimonials
    }

    fn faqs(&self) -> &[Faq] {
        &self.data.faqs
    }

    fn product_by_slug(&self, slug: &str) -> Option<&Product> {
        self.product_index
            .get(slug)
            .and_then(|&i| self.data.products.get(i))
    }

    fn category_by_slug(&self, slug: &str) -> Option<&Category> {
        self.category_index
            .get(slug)
            .and_then(|&i| self.data.categories.get(i))
    }
}

/// First identifier that appears twice, if any.
fn duplicate_id<E: Entity>(items: &[E]) -> Option<&E::Id> {
    let mut seen = HashSet::new();
    items.iter().map(Entity::id).find(|id| !seen.insert(*id))
}

fn validate(data: &CatalogData) -> DomainResult<()> {
    if let Some(id) = duplicate_id(&data.categories) {
        return Err(DomainError::duplicate("category id", id.as_str()));
    }
    if let Some(id) = duplicate_id(&data.products) {
        return Err(DomainError::duplicate("product id", id.as_str()));
    }
    if let Some(id) = duplicate_id(&data.testimonials) {
        return Err(DomainError::duplicate("testimonial id", id.as_str()));
    }

    let mut category_slugs = HashSet::new();
    for category in &data.categories {
        if !category_slugs.insert(category.slug.as_str()) {
            return Err(DomainError::duplicate("category slug", category.slug.as_str()));
        }
    }

    let mut product_slugs = HashSet::new();
    for product in &data.products {
        if !product_slugs.insert(product.slug.as_str()) {
            return Err(DomainError::duplicate("product slug", product.slug.as_str()));
        }
        if product.name.trim().is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: name cannot be empty",
                product.id
            )));
        }
        if product.images.is_empty() {
            return Err(DomainError::validation(format!(
                "product {}: at least one image is required",
                product.id
            )));
        }
        if let Some(original) = product.original_price {
            if original < product.price {
                return Err(DomainError::invariant(format!(
                    "product {}: original price {} is below price {}",
                    product.id, original, product.price
                )));
            }
        }
        if !(0.0..=5.0).contains(&product.rating) {
            return Err(DomainError::validation(format!(
                "product {}: rating {} outside 0-5",
                product.id, product.rating
            )));
        }
        if !category_slugs.contains(product.category_slug.as_str()) {
            return Err(DomainError::invariant(format!(
                "product {}: unknown category {}",
                product.id, product.category_slug
            )));
        }
    }

    for testimonial in &data.testimonials {
        if !(1..=5).contains(&testimonial.rating) {
            return Err(DomainError::validation(format!(
                "testimonial {}: rating {} outside 1-5",
                testimonial.id, testimonial.rating
            )));
        }
    }

    Ok(())
}
