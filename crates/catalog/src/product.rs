use serde::{Deserialize, Serialize};

use sangam_core::{Entity, ProductId, Rupees, Slug, ValueObject};

/// Free-text specification sheet shown on the product page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Specifications {
    pub dimensions: String,
    pub material: String,
    pub finish: String,
    pub warranty: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assembly: Option<String>,
}

impl ValueObject for Specifications {}

/// A product as listed in the catalogue.
///
/// Field names serialize in camelCase (`categorySlug`, `originalPrice`,
/// `isBestSeller`) so a catalogue document can be shared with the storefront.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub slug: Slug,
    /// Display name of the category.
    pub category: String,
    pub category_slug: Slug,
    pub price: Rupees,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub original_price: Option<Rupees>,
    pub description: String,
    pub short_description: String,
    pub images: Vec<String>,
    pub specifications: Specifications,
    pub features: Vec<String>,
    pub in_stock: bool,
    #[serde(default)]
    pub is_best_seller: bool,
    #[serde(default)]
    pub is_new: bool,
    /// Average review score in `[0.0, 5.0]`.
    pub rating: f64,
    pub review_count: u32,
}

impl Product {
    /// Percentage saved against the original price, rounded to the nearest
    /// whole percent. Zero when there is no markdown.
    pub fn discount_percent(&self) -> u32 {
        discount_percent(self.price, self.original_price)
    }

    pub fn is_discounted(&self) -> bool {
        self.discount_percent() > 0
    }

    /// First gallery image, used for cards and thumbnails.
    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Case-insensitive substring match against the material specification.
    pub fn material_contains(&self, needle: &str) -> bool {
        self.specifications
            .material
            .to_lowercase()
            .contains(&needle.to_lowercase())
    }

    pub fn in_category(&self, category_slug: &str) -> bool {
        self.category_slug.as_str() == category_slug
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// `round((original - price) / original * 100)` when `original > price`, else 0.
pub fn discount_percent(price: Rupees, original: Option<Rupees>) -> u32 {
    match original {
        Some(original) if original > price && original.amount() > 0 => {
            let saved = (original.amount() - price.amount()) as f64;
            (saved / original.amount() as f64 * 100.0).round() as u32
        }
        _ => 0,
    }
}
