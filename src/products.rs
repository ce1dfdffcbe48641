//! The LANDFIRE product catalog.
//!
//! Compiled-in constant data adopted from the LFPS product table
//! (<https://lfps.usgs.gov/helpdocs/productstable.html>). The catalog is
//! immutable for the process lifetime; [`crate::ProductSearch`] queries it.

use std::collections::BTreeMap;

use crate::enums::{ProductRegion, ProductTheme, ProductVersion};

/// Geographic regions and layer identifiers available for one dataset release
/// of a product.
#[derive(Debug, PartialEq, Eq)]
pub struct ProductAvailability {
    pub version: ProductVersion,
    pub regions: &'static [ProductRegion],
    /// Downloadable raster band identifiers. Unique within this record, but
    /// the same identifier may repeat across records (e.g. `map_zones` is
    /// declared identically for every release because the service has no way
    /// to address a per-release copy).
    pub layers: &'static [&'static str],
}

/// A named, themed data offering with version/region-scoped availability.
#[derive(Debug, PartialEq, Eq)]
pub struct Product {
    /// Human-readable identifier, lower-case. Not globally unique: the same
    /// logical product recurs under one code across vintages.
    pub name: &'static str,
    pub code: &'static str,
    pub theme: ProductTheme,
    /// May be empty; such products simply contribute no layers.
    pub availability: &'static [ProductAvailability],
}

impl ProductAvailability {
    /// Whether any of this record's regions overlaps `regions`.
    pub fn covers_any(&self, regions: &[ProductRegion]) -> bool {
        self.regions.iter().any(|r| regions.contains(r))
    }
}

/// Every product the LANDFIRE Product Service can deliver.
pub const PRODUCTS: &[Product] = &[
    Product {
        name: "disturbance",
        code: "DistYear",
        theme: ProductTheme::Disturbance,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak],
                layers: &[
                    "DIST1999", "DIST2000", "DIST2001", "DIST2002", "DIST2003", "DIST2004",
                    "DIST2005", "DIST2006", "DIST2007", "DIST2008", "DIST2009", "DIST2010",
                    "DIST2011", "DIST2012", "DIST2013", "DIST2014", "DIST2015", "DIST2016",
                    "DIST2017", "DIST2018", "DIST2019", "DIST2020",
                ],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &[
                    "DIST1999", "DIST2000", "DIST2001", "DIST2002", "DIST2003", "DIST2004",
                    "DIST2005", "DIST2006", "DIST2007", "DIST2008", "DIST2009", "DIST2010",
                    "DIST2011", "DIST2012", "DIST2013", "DIST2014", "DIST2015", "DIST2016",
                    "DIST2017", "DIST2018", "DIST2019", "DIST2020",
                ],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &[
                    "DIST1999", "DIST2000", "DIST2001", "DIST2002", "DIST2003", "DIST2004",
                    "DIST2005", "DIST2006", "DIST2007", "DIST2008", "DIST2009", "DIST2010",
                    "DIST2011", "DIST2012", "DIST2013", "DIST2014", "DIST2015", "DIST2016",
                    "DIST2017", "DIST2018", "DIST2019", "DIST2020",
                ],
            },
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &[
                    "DIST1999", "DIST2000", "DIST2001", "DIST2002", "DIST2003", "DIST2004",
                    "DIST2005", "DIST2006", "DIST2007", "DIST2008", "DIST2009", "DIST2010",
                    "DIST2011", "DIST2012", "DIST2013", "DIST2014", "DIST2015", "DIST2016",
                    "DIST2017", "DIST2018", "DIST2019", "DIST2020",
                ],
            },
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &[
                    "DIST1999", "DIST2000", "DIST2001", "DIST2002", "DIST2003", "DIST2004",
                    "DIST2005", "DIST2006", "DIST2007", "DIST2008", "DIST2009", "DIST2010",
                    "DIST2011", "DIST2012", "DIST2013", "DIST2014", "DIST2015", "DIST2016",
                    "DIST2017", "DIST2018", "DIST2019", "DIST2020",
                ],
            },
        ],
    },
    Product {
        name: "fuel disturbance",
        code: "FDistYear",
        theme: ProductTheme::Disturbance,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["FDIST2012"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["FDIST2014"],
            },
        ],
    },
    Product {
        name: "fuel disturbance 2019",
        code: "FDistYear",
        theme: ProductTheme::Disturbance,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us],
                layers: &["FDIST2019"],
            },
        ],
    },
    Product {
        name: "fuel disturbance 2020",
        code: "FDistYear",
        theme: ProductTheme::Disturbance,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["FDIST2020"],
            },
        ],
    },
    Product {
        name: "fuel disturbance 2021",
        code: "FDistYear",
        theme: ProductTheme::Disturbance,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["FDIST2021"],
            },
        ],
    },
    Product {
        name: "fuel disturbance 2022",
        code: "FDist",
        theme: ProductTheme::Disturbance,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["FDIST2022"],
            },
        ],
    },
    Product {
        name: "historical disturbance",
        code: "HDist",
        theme: ProductTheme::Disturbance,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["HDIST2016"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["HDIST2020"],
            },
        ],
    },
    Product {
        name: "fire regime groups",
        code: "FRG",
        theme: ProductTheme::FireRegime,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105FRG"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130FRG"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140FRG"],
            },
        ],
    },
    Product {
        name: "mean fire return interval",
        code: "MFRI",
        theme: ProductTheme::FireRegime,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105MFRI"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130MFRI"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140MFRI"],
            },
        ],
    },
    Product {
        name: "percent low-severity fire",
        code: "PLS",
        theme: ProductTheme::FireRegime,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105PLS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130PLS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140PLS"],
            },
        ],
    },
    Product {
        name: "percent mixed-severity fire",
        code: "PMS",
        theme: ProductTheme::FireRegime,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105PMS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130PMS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140PMS"],
            },
        ],
    },
    Product {
        name: "percent replacement-severity fire",
        code: "PRS",
        theme: ProductTheme::FireRegime,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105PLS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130PLS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140PLS"],
            },
        ],
    },
    Product {
        name: "succession classes",
        code: "SClass",
        theme: ProductTheme::FireRegime,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105SCLASS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130SCLASS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140SCLASS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Hi],
                layers: &["200SCLASS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Hi],
                layers: &["220SCLASS"],
            },
        ],
    },
    Product {
        name: "vegetation condition class",
        code: "VCC",
        theme: ProductTheme::FireRegime,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105VCC"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130VCC"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140VCC"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Hi],
                layers: &["200VCC"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Hi],
                layers: &["220VCC"],
            },
        ],
    },
    Product {
        name: "vegetation departure index",
        code: "VDep",
        theme: ProductTheme::FireRegime,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105VDEP"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130VDEP"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140VDEP"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Hi],
                layers: &["200VDEP"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Hi],
                layers: &["220VDEP"],
            },
        ],
    },
    Product {
        name: "13 anderson fire behavior fuel models",
        code: "FBFM13",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105FBFM13"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130FBFM13"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140FBFM13"],
            },
        ],
    },
    Product {
        name: "13 anderson fire behavior fuel models 2019",
        code: "FBFM13",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us],
                layers: &["200F13_19"],
            },
        ],
    },
    Product {
        name: "13 anderson fire behavior fuel models 2020",
        code: "FBFM13",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200F13_20"],
            },
        ],
    },
    Product {
        name: "13 anderson fire behavior fuel models 2022",
        code: "FBFM13",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["220F13_22"],
            },
        ],
    },
    Product {
        name: "40 scott and burgan fire behavior fuel models",
        code: "FBFM40",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105FBFM40"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130FBFM40"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140FBFM40"],
            },
        ],
    },
    Product {
        name: "40 scott and burgan fire behavior fuel models 2019",
        code: "FBFM40",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us],
                layers: &["200F40_19"],
            },
        ],
    },
    Product {
        name: "40 scott and burgan fire behavior fuel models 2020",
        code: "FBFM40",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200F40_20"],
            },
        ],
    },
    Product {
        name: "40 scott and burgan fire behavior fuel models 2022",
        code: "FBFM40",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["220F40_22"],
            },
        ],
    },
    Product {
        name: "canadian forest fire danger rating system",
        code: "CFFDRS",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Ak],
                layers: &["105CFFDRS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Ak],
                layers: &["130CFFDRS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Ak],
                layers: &["140CFFDRS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Ak],
                layers: &["200CFFDRS"],
            },
        ],
    },
    Product {
        name: "canadian forest fire danger rating system 2022",
        code: "CFFDRS",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Ak],
                layers: &["220CFFDRS"],
            },
        ],
    },
    Product {
        name: "forest canopy base height",
        code: "CBH",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105FBFM40"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130FBFM40"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140FBFM40"],
            },
        ],
    },
    Product {
        name: "forest canopy base height 2019",
        code: "CBH",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us],
                layers: &["200CBH_19"],
            },
        ],
    },
    Product {
        name: "forest canopy base height 2020",
        code: "CBH",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200CBH_20"],
            },
        ],
    },
    Product {
        name: "forest canopy base height 2022",
        code: "CBH",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["220CBH_22"],
            },
        ],
    },
    Product {
        name: "forest canopy bulk density",
        code: "CBD",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105CBD"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130CBD"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140CBD"],
            },
        ],
    },
    Product {
        name: "forest canopy bulk density 2019",
        code: "CBD",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us],
                layers: &["200CBD_19"],
            },
        ],
    },
    Product {
        name: "forest canopy bulk density 2020",
        code: "CBD",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200CBD_20"],
            },
        ],
    },
    Product {
        name: "forest canopy bulk density 2022",
        code: "CBD",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["220CBD_22"],
            },
        ],
    },
    Product {
        name: "forest canopy cover",
        code: "CC",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105CC"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130CC"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140CC"],
            },
        ],
    },
    Product {
        name: "forest canopy cover 2019",
        code: "CC",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us],
                layers: &["200CC_19"],
            },
        ],
    },
    Product {
        name: "forest canopy cover 2020",
        code: "CC",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200CC_20"],
            },
        ],
    },
    Product {
        name: "forest canopy cover 2022",
        code: "CC",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["220CC_22"],
            },
        ],
    },
    Product {
        name: "forest canopy height",
        code: "CH",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105CH"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130CH"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140CH"],
            },
        ],
    },
    Product {
        name: "forest canopy height 2019",
        code: "CH",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us],
                layers: &["200CH_19"],
            },
        ],
    },
    Product {
        name: "forest canopy height 2020",
        code: "CH",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200CH_20"],
            },
        ],
    },
    Product {
        name: "forest canopy height 2022",
        code: "CH",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["220CH_22"],
            },
        ],
    },
    Product {
        name: "fuel characteristic classification system fuelbeds",
        code: "FCCS",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105FCCS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140FCCS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200FCCS20"],
            },
        ],
    },
    Product {
        name: "fuel characteristic classification system fuelbeds 2022",
        code: "FCCS",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["220FCCS22"],
            },
        ],
    },
    Product {
        name: "fuel vegetation cover 2019",
        code: "FVC",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us],
                layers: &["200FVC_19"],
            },
        ],
    },
    Product {
        name: "fuel vegetation cover 2020",
        code: "FVC",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200FVC_20"],
            },
        ],
    },
    Product {
        name: "fuel vegetation cover 2022",
        code: "FVC",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["220FVC_22"],
            },
        ],
    },
    Product {
        name: "fuel vegetation height 2019",
        code: "FVH",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us],
                layers: &["200FVH_19"],
            },
        ],
    },
    Product {
        name: "fuel vegetation height 2020",
        code: "FVH",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200FVH_20"],
            },
        ],
    },
    Product {
        name: "fuel vegetation height 2022",
        code: "FVH",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["220FVH_22"],
            },
        ],
    },
    Product {
        name: "fuel vegetation type 2019",
        code: "FVT",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us],
                layers: &["200FVT_19"],
            },
        ],
    },
    Product {
        name: "fuel vegetation type 2020",
        code: "FVT",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200FVT_20"],
            },
        ],
    },
    Product {
        name: "fuel vegetation type 2022",
        code: "FVT",
        theme: ProductTheme::Fuel,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["220FVT_22"],
            },
        ],
    },
    Product {
        name: "aspect",
        code: "ASP",
        theme: ProductTheme::Topographic,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["ASP2020"],
            },
        ],
    },
    Product {
        name: "elevation",
        code: "ELEV",
        theme: ProductTheme::Topographic,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["ELEV2020"],
            },
        ],
    },
    Product {
        name: "slope degrees",
        code: "SLPD",
        theme: ProductTheme::Topographic,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["SLPD2020"],
            },
        ],
    },
    Product {
        name: "slope percent rise",
        code: "SLPP",
        theme: ProductTheme::Topographic,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["SLPP2020"],
            },
        ],
    },
    Product {
        name: "operational roads",
        code: "ROADS",
        theme: ProductTheme::Transportation,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak],
                layers: &["220ROADS_20"],
            },
        ],
    },
    Product {
        name: "biophysical settings",
        code: "BPS",
        theme: ProductTheme::Vegetation,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105BPS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130BPS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140BPS"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Hi],
                layers: &["200BPS"],
            },
        ],
    },
    Product {
        name: "environmental site potential",
        code: "ESP",
        theme: ProductTheme::Vegetation,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105ESP"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130ESP"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140ESP"],
            },
        ],
    },
    Product {
        name: "existing vegetation cover",
        code: "EVC",
        theme: ProductTheme::Vegetation,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105EVC"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130EVC"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140EVC"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200EVC"],
            },
        ],
    },
    Product {
        name: "existing vegetation cover 2022",
        code: "EVC",
        theme: ProductTheme::Vegetation,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["220EVC_22"],
            },
        ],
    },
    Product {
        name: "existing vegetation height",
        code: "EVH",
        theme: ProductTheme::Vegetation,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105EVH"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130EVH"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140EVH"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200EVH"],
            },
        ],
    },
    Product {
        name: "existing vegetation height 2022",
        code: "EVH",
        theme: ProductTheme::Vegetation,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["220EVH_22"],
            },
        ],
    },
    Product {
        name: "existing vegetation type",
        code: "EVT",
        theme: ProductTheme::Vegetation,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["105EVT"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["130EVT"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["140EVT"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200EVT"],
            },
        ],
    },
    Product {
        name: "existing vegetation cover 2020",
        code: "EVT",
        theme: ProductTheme::Vegetation,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["220EVT"],
            },
        ],
    },
    Product {
        name: "national vegetation classification",
        code: "NVC",
        theme: ProductTheme::Vegetation,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["200NVC"],
            },
        ],
    },
    Product {
        name: "mod-fis fuel vegetation cover (spring)",
        code: "MF_FVC",
        theme: ProductTheme::ModFis,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us],
                layers: &["MF_FVCSP22"],
            },
        ],
    },
    Product {
        name: "mod-fis fuel vegetation cover (summer)",
        code: "MF_FVC",
        theme: ProductTheme::ModFis,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us],
                layers: &["MF_FVCSU22"],
            },
        ],
    },
    Product {
        name: "mod-fis fuel vegetation cover (fall)",
        code: "MF_FVC",
        theme: ProductTheme::ModFis,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us],
                layers: &["MF_FVCFA22"],
            },
        ],
    },
    Product {
        name: "mod-fis fuel vegetation height (spring)",
        code: "MF_FVH",
        theme: ProductTheme::ModFis,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us],
                layers: &["MF_FVHSP22"],
            },
        ],
    },
    Product {
        name: "mod-fis fuel vegetation height (summer)",
        code: "MF_FVH",
        theme: ProductTheme::ModFis,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us],
                layers: &["MF_FVHSU22"],
            },
        ],
    },
    Product {
        name: "mod-fis fuel vegetation height (fall)",
        code: "MF_FVH",
        theme: ProductTheme::ModFis,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us],
                layers: &["MF_FVHFA22"],
            },
        ],
    },
    Product {
        name: "mod-fis fire behavior fuel model 40 (spring)",
        code: "MF_F40",
        theme: ProductTheme::ModFis,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us],
                layers: &["MF_F40SP22"],
            },
        ],
    },
    Product {
        name: "mod-fis fire behavior fuel model 40 (summer)",
        code: "MF_F40",
        theme: ProductTheme::ModFis,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us],
                layers: &["MF_F40SU22"],
            },
        ],
    },
    Product {
        name: "mod-fis fire behavior fuel model 40 (fall)",
        code: "MF_F40",
        theme: ProductTheme::ModFis,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us],
                layers: &["MF_F40FA22"],
            },
        ],
    },
    Product {
        name: "landfire map zones",
        code: "map_zones",
        theme: ProductTheme::MapZones,
        availability: &[
            ProductAvailability {
                version: ProductVersion::Lf2001,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["map_zones"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2012,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["map_zones"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2014,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["map_zones"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2016Remap,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["map_zones"],
            },
            ProductAvailability {
                version: ProductVersion::Lf2020,
                regions: &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi],
                layers: &["map_zones"],
            },
        ],
    },
];

/// Names of all catalog products, in declaration order.
pub fn product_names() -> Vec<&'static str> {
    PRODUCTS.iter().map(|p| p.name).collect()
}

/// Codes of all catalog products, in declaration order. Codes repeat for
/// products that recur across vintages.
pub fn product_codes() -> Vec<&'static str> {
    PRODUCTS.iter().map(|p| p.code).collect()
}

/// Names of all product themes, in enum declaration order.
pub fn theme_names() -> Vec<&'static str> {
    ProductTheme::ALL.iter().map(|t| t.name()).collect()
}

/// Names of all product versions, in enum declaration order.
pub fn version_names() -> Vec<&'static str> {
    ProductVersion::ALL.iter().map(|v| v.name()).collect()
}

/// Version name to semantic version string, for callers who forget which
/// LANDFIRE release maps to which year.
pub fn version_mapping() -> BTreeMap<&'static str, &'static str> {
    ProductVersion::ALL.iter().map(|v| (v.name(), v.semver())).collect()
}

/// Names of all product regions, in enum declaration order.
pub fn region_names() -> Vec<&'static str> {
    ProductRegion::ALL.iter().map(|r| r.name()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_has_expected_cardinality() {
        assert_eq!(PRODUCTS.len(), 76);
        assert_eq!(product_names().len(), 76);
        assert_eq!(product_codes().len(), 76);
    }

    #[test]
    fn theme_names_in_declaration_order() {
        assert_eq!(
            theme_names(),
            vec![
                "disturbance",
                "fire_regime",
                "fuel",
                "topographic",
                "transportation",
                "vegetation",
                "mod_fis",
                "map_zones",
            ]
        );
    }

    #[test]
    fn version_names_in_declaration_order() {
        assert_eq!(
            version_names(),
            vec!["lf_2001", "lf_2012", "lf_2014", "lf_2016_remap", "lf_2020"]
        );
    }

    #[test]
    fn version_mapping_is_complete() {
        let mapping = version_mapping();
        assert_eq!(mapping.len(), 5);
        assert_eq!(mapping["lf_2001"], "1.0.5");
        assert_eq!(mapping["lf_2020"], "2.2.0");
    }

    #[test]
    fn region_names_in_declaration_order() {
        assert_eq!(region_names(), vec!["US", "AK", "HI"]);
    }

    #[test]
    fn availability_region_overlap() {
        let pa = &PRODUCTS[0].availability[0];
        assert!(pa.covers_any(&[ProductRegion::Ak, ProductRegion::Hi]));
        assert!(!pa.covers_any(&[ProductRegion::Hi]));
        assert!(!pa.covers_any(&[]));
    }

    #[test]
    fn names_are_lower_case() {
        for p in PRODUCTS {
            assert_eq!(p.name, p.name.to_lowercase(), "name not lower-case: {}", p.name);
        }
    }

    #[test]
    fn layers_unique_within_each_record() {
        for p in PRODUCTS {
            for pa in p.availability {
                let mut seen = std::collections::BTreeSet::new();
                for layer in pa.layers {
                    assert!(seen.insert(layer), "duplicate layer {layer} in {}", p.name);
                }
            }
        }
    }
}
