use serde::{Deserialize, Serialize};

use sangam_core::{CategoryId, Entity, Slug};

/// A catalogue category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
    pub slug: Slug,
    pub description: String,
    pub image: String,
    /// Advisory display counter. Not reconciled with the product list; use
    /// `CatalogStore::live_product_count` for the real number.
    pub product_count: u32,
}

impl Entity for Category {
    type Id = CategoryId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
