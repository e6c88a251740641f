//! Filter/Sort Engine for the catalogue listing.
//!
//! A pure function from (products, criteria) to the visible list. Filters are
//! conjunctive (category, then material, then price) and the sort is stable, so
//! ties keep declaration order.

use core::cmp::Ordering;
use core::str::FromStr;

use serde::{Deserialize, Serialize};

use sangam_core::{DomainError, Rupees};

use crate::product::Product;
use crate::store::{ALL_CATEGORIES, CatalogStore};

/// Label of the "no material filter" option.
pub const ALL_MATERIALS: &str = "All Materials";

/// Material choices offered by the catalogue filter bar.
pub const MATERIAL_OPTIONS: [&str; 6] = [
    ALL_MATERIALS,
    "Teak Wood",
    "Sheesham Wood",
    "Mango Wood",
    "Engineered Wood",
    "Metal",
];

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CategoryFilter {
    #[default]
    All,
    Slug(String),
}

impl CategoryFilter {
    /// `"all"` (or an empty value) means no filter; anything else is taken as a
    /// category slug, known or not.
    pub fn from_param(value: &str) -> Self {
        let bare = value.trim();
        if bare.is_empty() || bare == ALL_CATEGORIES {
            Self::All
        } else {
            Self::Slug(value.to_string())
        }
    }

    pub fn as_param(&self) -> &str {
        match self {
            Self::All => ALL_CATEGORIES,
            Self::Slug(slug) => slug,
        }
    }

    fn accepts(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Slug(slug) => product.in_category(slug),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialFilter {
    #[default]
    All,
    /// Case-insensitive substring of the material specification.
    Contains(String),
}

impl MaterialFilter {
    /// The label is kept verbatim as the needle; surrounding whitespace only
    /// matters for recognising the empty and "All Materials" sentinels.
    pub fn from_label(label: &str) -> Self {
        let bare = label.trim();
        if bare.is_empty() || bare == ALL_MATERIALS {
            Self::All
        } else {
            Self::Contains(label.to_string())
        }
    }

    fn accepts(&self, product: &Product) -> bool {
        match self {
            Self::All => true,
            Self::Contains(needle) => product.material_contains(needle),
        }
    }
}

/// Closed price interval; `max: None` is unbounded.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: u64,
    pub max: Option<u64>,
}

impl PriceRange {
    pub const ALL: Self = Self { min: 0, max: None };

    pub const fn between(min: u64, max: u64) -> Self {
        Self {
            min,
            max: Some(max),
        }
    }

    pub const fn at_least(min: u64) -> Self {
        Self { min, max: None }
    }

    pub fn contains(&self, price: Rupees) -> bool {
        let price = price.amount();
        price >= self.min && self.max.is_none_or(|max| price <= max)
    }
}

impl Default for PriceRange {
    fn default() -> Self {
        Self::ALL
    }
}

/// A labelled price band from the filter bar.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct PricePreset {
    pub label: &'static str,
    pub range: PriceRange,
}

pub const PRICE_PRESETS: [PricePreset; 5] = [
    PricePreset {
        label: "All Prices",
        range: PriceRange::ALL,
    },
    PricePreset {
        label: "Under ₹20,000",
        range: PriceRange::between(0, 20_000),
    },
    PricePreset {
        label: "₹20,000 - ₹50,000",
        range: PriceRange::between(20_000, 50_000),
    },
    PricePreset {
        label: "₹50,000 - ₹1,00,000",
        range: PriceRange::between(50_000, 100_000),
    },
    PricePreset {
        label: "Above ₹1,00,000",
        range: PriceRange::at_least(100_000),
    },
];

impl PricePreset {
    pub fn by_label(label: &str) -> Option<&'static PricePreset> {
        PRICE_PRESETS.iter().find(|p| p.label == label)
    }
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Best sellers first.
    #[default]
    Featured,
    PriceAsc,
    PriceDesc,
    /// Products flagged new first. There is no arrival date to sort on.
    Newest,
    /// Highest rating first.
    Rating,
}

impl SortKey {
    pub const ALL: [SortKey; 5] = [
        SortKey::Featured,
        SortKey::PriceAsc,
        SortKey::PriceDesc,
        SortKey::Newest,
        SortKey::Rating,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            SortKey::Featured => "featured",
            SortKey::PriceAsc => "price-asc",
            SortKey::PriceDesc => "price-desc",
            SortKey::Newest => "newest",
            SortKey::Rating => "rating",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            SortKey::Featured => "Featured",
            SortKey::PriceAsc => "Price: Low to High",
            SortKey::PriceDesc => "Price: High to Low",
            SortKey::Newest => "Newest First",
            SortKey::Rating => "Best Rated",
        }
    }

    /// Unknown values fall back to [`SortKey::Featured`], matching how the
    /// listing treats an unrecognised sort option.
    pub fn parse_lenient(value: &str) -> Self {
        value.parse().unwrap_or_default()
    }

    fn compare(self, a: &Product, b: &Product) -> Ordering {
        match self {
            SortKey::Featured => b.is_best_seller.cmp(&a.is_best_seller),
            SortKey::PriceAsc => a.price.cmp(&b.price),
            SortKey::PriceDesc => b.price.cmp(&a.price),
            SortKey::Newest => b.is_new.cmp(&a.is_new),
            SortKey::Rating => b.rating.total_cmp(&a.rating),
        }
    }
}

impl core::fmt::Display for SortKey {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SortKey {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        SortKey::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown sort key: {s}")))
    }
}

/// User-selected listing criteria. Owned by the page, passed in on every render.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Criteria {
    pub category: CategoryFilter,
    pub material: MaterialFilter,
    pub price: PriceRange,
    pub sort: SortKey,
}

impl Criteria {
    /// Criteria for a catalogue request with an optional `?category=` value.
    pub fn from_query(category: Option<&str>) -> Self {
        Self {
            category: category.map(CategoryFilter::from_param).unwrap_or_default(),
            ..Self::default()
        }
    }

    pub fn with_category(mut self, category: CategoryFilter) -> Self {
        self.category = category;
        self
    }

    pub fn with_material(mut self, material: MaterialFilter) -> Self {
        self.material = material;
        self
    }

    pub fn with_price(mut self, price: PriceRange) -> Self {
        self.price = price;
        self
    }

    pub fn with_sort(mut self, sort: SortKey) -> Self {
        self.sort = sort;
        self
    }

    /// Whether any filter differs from its default. The sort order is not a filter.
    pub fn has_active_filters(&self) -> bool {
        self.category != CategoryFilter::All
            || self.material != MaterialFilter::All
            || self.price != PriceRange::ALL
    }

    /// Reset everything, sort included.
    pub fn cleared(&self) -> Self {
        Self::default()
    }

    pub fn accepts(&self, product: &Product) -> bool {
        self.category.accepts(product)
            && self.material.accepts(product)
            && self.price.contains(product.price)
    }

    /// Run the criteria against a store's full product list.
    pub fn apply<'a, S>(&self, store: &'a S) -> Vec<&'a Product>
    where
        S: CatalogStore + ?Sized,
    {
        filter_products(store.products(), self)
    }
}

/// Filter then stable-sort `products` according to `criteria`.
pub fn filter_products<'a>(products: &'a [Product], criteria: &Criteria) -> Vec<&'a Product> {
    let mut visible: Vec<&Product> = products.iter().filter(|p| criteria.accepts(p)).collect();
    // `sort_by` is stable: equal keys keep their incoming order.
    visible.sort_by(|a, b| criteria.sort.compare(a, b));

    tracing::debug!(
        category = criteria.category.as_param(),
        sort = %criteria.sort,
        total = products.len(),
        visible = visible.len(),
        "catalogue filtered"
    );
    visible
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Catalog;

    fn products() -> &'static [Product] {
        Catalog::sample().products()
    }

    fn ids(list: &[&Product]) -> Vec<String> {
        list.iter().map(|p| p.id.to_string()).collect()
    }

    #[test]
    fn default_criteria_is_featured_over_everything() {
        let visible = filter_products(products(), &Criteria::default());
        // Best sellers 1,2,4,6 first, then the rest in declaration order.
        assert_eq!(ids(&visible), vec!["1", "2", "4", "6", "3", "5", "7", "8"]);
    }

    #[test]
    fn office_under_twenty_thousand_keeps_only_the_chair() {
        let criteria = Criteria::default()
            .with_category(CategoryFilter::from_param("office"))
            .with_material(MaterialFilter::from_label(ALL_MATERIALS))
            .with_price(PRICE_PRESETS[1].range);

        assert_eq!(ids(&filter_products(products(), &criteria)), vec!["6"]);
    }

    #[test]
    fn filters_are_conjunctive() {
        // Teak exists, office exists, but no teak office furniture.
        let criteria = Criteria::default()
            .with_category(CategoryFilter::from_param("office"))
            .with_material(MaterialFilter::from_label("Teak Wood"));
        assert!(filter_products(products(), &criteria).is_empty());

        let criteria = Criteria::from_query(Some("living-room")).with_price(PRICE_PRESETS[2].range);
        assert!(filter_products(products(), &criteria).is_empty());
    }

    #[test]
    fn unknown_category_yields_empty_list() {
        let criteria = Criteria::from_query(Some("garden"));
        assert!(filter_products(products(), &criteria).is_empty());
    }

    #[test]
    fn material_filter_is_case_insensitive_substring() {
        let criteria = Criteria::default().with_material(MaterialFilter::from_label("engineered wood"));
        assert_eq!(ids(&filter_products(products(), &criteria)), vec!["3", "8"]);

        let teak = Criteria::default().with_material(MaterialFilter::from_label("Teak Wood"));
        assert_eq!(ids(&filter_products(products(), &teak)), vec!["1"]);

        let metal = Criteria::default().with_material(MaterialFilter::from_label("Metal"));
        assert!(filter_products(products(), &metal).is_empty());
    }

    #[test]
    fn material_needle_keeps_surrounding_whitespace() {
        assert_eq!(
            MaterialFilter::from_label("engineered wood "),
            MaterialFilter::Contains("engineered wood ".into())
        );
        // "Engineered Wood" (id 8) ends the string, so the trailing space excludes it.
        let criteria = Criteria::default().with_material(MaterialFilter::from_label("engineered wood "));
        assert_eq!(ids(&filter_products(products(), &criteria)), vec!["3"]);

        assert_eq!(MaterialFilter::from_label("  All Materials "), MaterialFilter::All);
        assert_eq!(MaterialFilter::from_label("   "), MaterialFilter::All);
    }

    #[test]
    fn category_param_is_matched_as_given() {
        assert_eq!(CategoryFilter::from_param(" all "), CategoryFilter::All);
        assert_eq!(CategoryFilter::from_param(" office"), CategoryFilter::Slug(" office".into()));
        let criteria = Criteria::default().with_category(CategoryFilter::from_param(" office"));
        assert!(filter_products(products(), &criteria).is_empty());
    }

    #[test]
    fn price_bounds_are_inclusive() {
        let range = PriceRange::between(15_500, 28_000);
        assert!(range.contains(Rupees(15_500)));
        assert!(range.contains(Rupees(28_000)));
        assert!(!range.contains(Rupees(28_001)));
        assert!(PriceRange::at_least(100_000).contains(Rupees(u64::MAX)));
    }

    #[test]
    fn price_preset_bands() {
        let above = PricePreset::by_label("Above ₹1,00,000").unwrap();
        let criteria = Criteria::default().with_price(above.range);
        assert!(filter_products(products(), &criteria).is_empty());

        let mid = PricePreset::by_label("₹50,000 - ₹1,00,000").unwrap();
        let criteria = Criteria::default().with_price(mid.range).with_sort(SortKey::PriceAsc);
        assert_eq!(ids(&filter_products(products(), &criteria)), vec!["5", "2", "4", "1"]);
    }

    #[test]
    fn price_sorts() {
        let asc = filter_products(products(), &Criteria::default().with_sort(SortKey::PriceAsc));
        assert_eq!(ids(&asc), vec!["7", "6", "8", "3", "5", "2", "4", "1"]);

        let desc = filter_products(products(), &Criteria::default().with_sort(SortKey::PriceDesc));
        let mut reversed = ids(&asc);
        reversed.reverse();
        assert_eq!(ids(&desc), reversed);
    }

    #[test]
    fn newest_puts_flagged_products_first_stably() {
        let visible = filter_products(products(), &Criteria::default().with_sort(SortKey::Newest));
        assert_eq!(ids(&visible), vec!["3", "6", "8", "1", "2", "4", "5", "7"]);
    }

    #[test]
    fn rating_ties_keep_declaration_order() {
        let visible = filter_products(products(), &Criteria::default().with_sort(SortKey::Rating));
        // 1 and 6 tie at 4.8, 3 and 7 tie at 4.6.
        assert_eq!(ids(&visible), vec!["2", "1", "6", "4", "3", "7", "5", "8"]);
    }

    #[test]
    fn sort_keys_parse_wire_names() {
        for key in SortKey::ALL {
            assert_eq!(key.as_str().parse::<SortKey>().unwrap(), key);
        }
        assert!("cheapest".parse::<SortKey>().is_err());
        assert_eq!(SortKey::parse_lenient("cheapest"), SortKey::Featured);
        assert_eq!(serde_json::to_string(&SortKey::PriceDesc).unwrap(), "\"price-desc\"");
    }

    #[test]
    fn query_defaults_to_all_categories() {
        assert_eq!(Criteria::from_query(None).category, CategoryFilter::All);
        assert_eq!(Criteria::from_query(Some("")).category, CategoryFilter::All);
        assert_eq!(Criteria::from_query(Some("all")).category, CategoryFilter::All);
        assert_eq!(
            Criteria::from_query(Some("dining")).category,
            CategoryFilter::Slug("dining".into())
        );
    }

    #[test]
    fn active_filters_ignore_sort() {
        let criteria = Criteria::default().with_sort(SortKey::Rating);
        assert!(!criteria.has_active_filters());

        let criteria = criteria.with_price(PRICE_PRESETS[1].range);
        assert!(criteria.has_active_filters());
        assert_eq!(criteria.cleared(), Criteria::default());
    }

    #[test]
    fn apply_reads_from_store() {
        let criteria = Criteria::from_query(Some("bedroom")).with_sort(SortKey::PriceAsc);
        assert_eq!(ids(&criteria.apply(Catalog::sample())), vec!["5", "2"]);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn sort_key() -> impl Strategy<Value = SortKey> {
            prop::sample::select(SortKey::ALL.to_vec())
        }

        fn material() -> impl Strategy<Value = MaterialFilter> {
            prop::sample::select(MATERIAL_OPTIONS.to_vec()).prop_map(MaterialFilter::from_label)
        }

        fn category() -> impl Strategy<Value = CategoryFilter> {
            prop::sample::select(vec!["all", "living-room", "bedroom", "office", "dining", "custom", "storage", "garden"])
                .prop_map(CategoryFilter::from_param)
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 500,
                ..ProptestConfig::default()
            })]

            /// Property: output is exactly the accepted subset, reordered.
            #[test]
            fn output_is_permutation_of_accepted(
                category in category(),
                material in material(),
                min in 0u64..120_000,
                span in proptest::option::of(0u64..120_000),
                sort in sort_key(),
            ) {
                let criteria = Criteria {
                    category,
                    material,
                    price: PriceRange { min, max: span.map(|s| min + s) },
                    sort,
                };
                let visible = filter_products(products(), &criteria);

                let mut got = ids(&visible);
                got.sort();
                let mut expected: Vec<String> = products()
                    .iter()
                    .filter(|p| criteria.accepts(p))
                    .map(|p| p.id.to_string())
                    .collect();
                expected.sort();
                prop_assert_eq!(got, expected);
            }

            /// Property: adjacent items are ordered by the sort key, and equal keys
            /// keep declaration order.
            #[test]
            fn sort_is_ordered_and_stable(sort in sort_key()) {
                let visible = filter_products(products(), &Criteria::default().with_sort(sort));
                let position = |p: &Product| products().iter().position(|q| q.id == p.id).unwrap();
                for pair in visible.windows(2) {
                    let ord = sort.compare(pair[0], pair[1]);
                    prop_assert_ne!(ord, Ordering::Greater);
                    if ord == Ordering::Equal {
                        prop_assert!(position(pair[0]) < position(pair[1]));
                    }
                }
            }
        }
    }
}
