//! Product catalog queries.
//!
//! [`ProductSearch`] resolves an optional multi-field filter into the
//! matching products, or into the flattened, deduplicated list of layer
//! identifiers those products can deliver. A search never mutates the
//! catalog and always starts from the full table, so the same configuration
//! can be queried repeatedly (and concurrently) with identical results.

use std::collections::BTreeSet;

use crate::enums::{ProductRegion, ProductTheme, ProductVersion};
use crate::products::{PRODUCTS, Product, ProductAvailability};

/// Filter configuration over the product catalog.
///
/// All five dimensions are optional; an unset dimension is skipped entirely.
/// Dimensions compose as logical AND, members within a dimension as logical
/// OR. Because every dimension is a pure intersection on a shrinking working
/// set, the order they are supplied in never changes the result.
///
/// ```
/// use landfire::{ProductSearch, ProductTheme, ProductVersion};
///
/// let search = ProductSearch::new()
///     .with_themes([ProductTheme::Fuel])
///     .with_versions([ProductVersion::Lf2020]);
/// for product in search.products() {
///     println!("{} ({})", product.name, product.code);
/// }
/// let layers = search.layers();
/// assert!(!layers.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ProductSearch {
    names: Vec<String>,
    codes: Vec<String>,
    themes: Vec<ProductTheme>,
    versions: Vec<ProductVersion>,
    regions: Vec<ProductRegion>,
}

impl ProductSearch {
    /// A search with no filter dimensions set; it matches the whole catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filters by product name. Values are lower-cased to match the
    /// catalog's convention; an unknown name simply matches nothing.
    pub fn with_names<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.names = names.into_iter().map(|n| n.as_ref().to_lowercase()).collect();
        self
    }

    /// Filters by product code (e.g. `FBFM40`). Codes are matched exactly.
    pub fn with_codes<I, S>(mut self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.codes = codes.into_iter().map(|c| c.as_ref().to_string()).collect();
        self
    }

    pub fn with_themes<I>(mut self, themes: I) -> Self
    where
        I: IntoIterator<Item = ProductTheme>,
    {
        self.themes = themes.into_iter().collect();
        self
    }

    /// Filters by dataset release. A product matches when any of its
    /// availability records carries one of the given versions.
    pub fn with_versions<I>(mut self, versions: I) -> Self
    where
        I: IntoIterator<Item = ProductVersion>,
    {
        self.versions = versions.into_iter().collect();
        self
    }

    /// Filters by geographic region. A product matches when any of its
    /// availability records overlaps the given regions; full containment is
    /// not required.
    pub fn with_regions<I>(mut self, regions: I) -> Self
    where
        I: IntoIterator<Item = ProductRegion>,
    {
        self.regions = regions.into_iter().collect();
        self
    }

    /// Resolves the filter to matching products, in catalog declaration
    /// order. With no dimensions set this is the complete catalog.
    pub fn products(&self) -> Vec<&'static Product> {
        let mut matched: Vec<&'static Product> = PRODUCTS.iter().collect();

        if !self.names.is_empty() {
            matched.retain(|p| self.names.iter().any(|n| n == p.name));
        }
        if !self.codes.is_empty() {
            matched.retain(|p| self.codes.iter().any(|c| c == p.code));
        }
        if !self.themes.is_empty() {
            matched.retain(|p| self.themes.contains(&p.theme));
        }
        if !self.versions.is_empty() {
            matched.retain(|p| p.availability.iter().any(|pa| self.versions.contains(&pa.version)));
        }
        if !self.regions.is_empty() {
            matched.retain(|p| p.availability.iter().any(|pa| pa.covers_any(&self.regions)));
        }

        matched
    }

    /// Resolves the filter to the distinct layer identifiers of the matching
    /// products, sorted for deterministic output.
    ///
    /// Layers are collected only from availability records that themselves
    /// satisfy the version and region dimensions, so e.g. a version filter
    /// yields that vintage's bands rather than every vintage of a matching
    /// product. Duplicates collapse: global layers such as `map_zones` are
    /// declared identically under every release because the service cannot
    /// address a per-release copy, and the caller needs a distinct request
    /// list.
    pub fn layers(&self) -> Vec<&'static str> {
        let mut layers: BTreeSet<&'static str> = BTreeSet::new();
        for product in self.products() {
            for pa in product.availability {
                if self.record_applies(pa) {
                    layers.extend(pa.layers);
                }
            }
        }
        layers.into_iter().collect()
    }

    fn record_applies(&self, pa: &ProductAvailability) -> bool {
        if !self.versions.is_empty() && !self.versions.contains(&pa.version) {
            return false;
        }
        if !self.regions.is_empty() && !pa.covers_any(&self.regions) {
            return false;
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CATALOG_LEN: usize = 76;

    #[test]
    fn no_filters_returns_full_catalog() {
        assert_eq!(ProductSearch::new().products().len(), CATALOG_LEN);
    }

    #[test]
    fn repeated_queries_are_identical() {
        let search = ProductSearch::new().with_themes([ProductTheme::Fuel]);
        let first: Vec<&str> = search.products().iter().map(|p| p.name).collect();
        let second: Vec<&str> = search.products().iter().map(|p| p.name).collect();
        assert!(!first.is_empty());
        assert_eq!(first, second);
    }

    #[test]
    fn builder_order_does_not_change_membership() {
        let a = ProductSearch::new()
            .with_regions([ProductRegion::Hi])
            .with_themes([ProductTheme::Fuel]);
        let b = ProductSearch::new()
            .with_themes([ProductTheme::Fuel])
            .with_regions([ProductRegion::Hi]);
        let names_a: Vec<&str> = a.products().iter().map(|p| p.name).collect();
        let names_b: Vec<&str> = b.products().iter().map(|p| p.name).collect();
        assert_eq!(names_a, names_b);
    }

    #[test]
    fn filter_by_names() {
        let products = ProductSearch::new()
            .with_names(["fuel vegetation cover 2020", "landfire map zones"])
            .products();
        assert_eq!(products.len(), 2);
    }

    #[test]
    fn name_matching_is_case_normalized() {
        let products = ProductSearch::new().with_names(["DISTURBANCE"]).products();
        assert_eq!(products.len(), 1);
        assert_eq!(products[0].name, "disturbance");
    }

    #[test]
    fn unknown_name_matches_nothing() {
        assert!(ProductSearch::new().with_names(["no such product"]).products().is_empty());
        assert!(ProductSearch::new().with_codes(["NOPE"]).layers().is_empty());
    }

    #[test]
    fn filter_by_code() {
        let products = ProductSearch::new().with_codes(["FBFM40"]).products();
        assert_eq!(products.len(), 4);
    }

    #[test]
    fn filter_by_themes() {
        let products = ProductSearch::new()
            .with_themes([ProductTheme::Disturbance, ProductTheme::Fuel])
            .products();
        assert_eq!(products.len(), 44);
    }

    #[test]
    fn filter_by_version() {
        let products = ProductSearch::new().with_versions([ProductVersion::Lf2001]).products();
        assert_eq!(products.len(), 23);
    }

    #[test]
    fn filter_by_region_matches_any_overlap() {
        assert_eq!(ProductSearch::new().with_regions([ProductRegion::Hi]).products().len(), 54);
        assert_eq!(
            ProductSearch::new()
                .with_regions([ProductRegion::Hi, ProductRegion::Ak])
                .products()
                .len(),
            57
        );
        assert_eq!(
            ProductSearch::new()
                .with_regions([ProductRegion::Hi, ProductRegion::Ak, ProductRegion::Us])
                .products()
                .len(),
            CATALOG_LEN
        );
    }

    #[test]
    fn region_overlap_counts_each_product_once() {
        // `disturbance` has five availability records overlapping US; it must
        // still appear exactly once.
        let products = ProductSearch::new()
            .with_names(["disturbance"])
            .with_regions([ProductRegion::Us, ProductRegion::Ak])
            .products();
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn combined_filters_narrow_to_one_product() {
        let search = ProductSearch::new()
            .with_versions([ProductVersion::Lf2001])
            .with_themes([ProductTheme::FireRegime])
            .with_codes(["MFRI"])
            .with_names(["mean fire return interval"]);
        let products = search.products();
        assert_eq!(products.len(), 1);
        assert_eq!(search.layers(), vec!["105MFRI"]);
    }

    #[test]
    fn layers_for_single_named_product() {
        let layers = ProductSearch::new().with_names(["disturbance"]).layers();
        assert_eq!(layers.len(), 22);
    }

    #[test]
    fn layers_restricted_to_matching_records() {
        let layers = ProductSearch::new()
            .with_regions([ProductRegion::Ak])
            .with_names(["aspect", "elevation", "slope degrees"])
            .with_versions([ProductVersion::Lf2020])
            .layers();
        assert_eq!(layers, vec!["ASP2020", "ELEV2020", "SLPD2020"]);
    }

    #[test]
    fn layers_fvt_2020() {
        let layers = ProductSearch::new()
            .with_regions([ProductRegion::Ak, ProductRegion::Us])
            .with_codes(["FVT"])
            .with_versions([ProductVersion::Lf2020])
            .layers();
        assert_eq!(layers, vec!["220FVT_22"]);
    }

    #[test]
    fn layers_empty_when_no_record_matches() {
        let layers = ProductSearch::new()
            .with_regions([ProductRegion::Ak, ProductRegion::Us])
            .with_themes([ProductTheme::Transportation])
            .with_versions([ProductVersion::Lf2001])
            .layers();
        assert!(layers.is_empty());
    }

    #[test]
    fn layers_transportation_2020() {
        let layers = ProductSearch::new()
            .with_regions([ProductRegion::Ak, ProductRegion::Us, ProductRegion::Hi])
            .with_themes([ProductTheme::Transportation])
            .with_versions([ProductVersion::Lf2020])
            .layers();
        assert_eq!(layers, vec!["220ROADS_20"]);
    }

    #[test]
    fn layers_across_code_vintages() {
        let layers = ProductSearch::new()
            .with_regions([ProductRegion::Ak])
            .with_codes(["CFFDRS"])
            .layers();
        assert_eq!(layers.len(), 5);

        let layers = ProductSearch::new()
            .with_regions([ProductRegion::Us])
            .with_codes(["FBFM40"])
            .layers();
        assert_eq!(layers.len(), 6);
    }

    #[test]
    fn layers_two_themes_two_versions() {
        let layers = ProductSearch::new()
            .with_regions([ProductRegion::Us])
            .with_themes([ProductTheme::Disturbance, ProductTheme::FireRegime])
            .with_versions([ProductVersion::Lf2016Remap, ProductVersion::Lf2020])
            .layers();
        assert_eq!(layers.len(), 34);
    }

    #[test]
    fn layers_deduplicate_version_repeated_identifiers() {
        // map_zones is declared under all five releases; dedup collapses it.
        let layers = ProductSearch::new().with_themes([ProductTheme::MapZones]).layers();
        assert_eq!(layers, vec!["map_zones"]);
    }

    #[test]
    fn layers_are_sorted_and_distinct() {
        let layers = ProductSearch::new().layers();
        assert_eq!(layers.len(), 146);
        let mut sorted = layers.clone();
        sorted.sort_unstable();
        sorted.dedup();
        assert_eq!(layers, sorted);
    }

    #[test]
    fn empty_availability_contributes_no_layers() {
        // No catalog entry currently has empty availability; exercise the
        // path with a local record shaped like one.
        let product = Product {
            name: "placeholder",
            code: "PLH",
            theme: ProductTheme::Vegetation,
            availability: &[],
        };
        assert_eq!(product.availability.len(), 0);
        let layers: Vec<&str> = product
            .availability
            .iter()
            .flat_map(|pa| pa.layers.iter().copied())
            .collect();
        assert!(layers.is_empty());
    }
}
