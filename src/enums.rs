use std::fmt;
use std::str::FromStr;

use crate::error::invalid_filter_value;

/// Thematic category of a product.
///
/// Labels follow the LFPS product table vocabulary (e.g. `"fire regime"`,
/// `"mod-fis"`); `name()` gives the stable snake_case identifier used by
/// string-facing callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductTheme {
    Disturbance,
    FireRegime,
    Fuel,
    Topographic,
    Transportation,
    Vegetation,
    ModFis,
    MapZones,
}

impl ProductTheme {
    pub const ALL: &[ProductTheme] = &[
        ProductTheme::Disturbance,
        ProductTheme::FireRegime,
        ProductTheme::Fuel,
        ProductTheme::Topographic,
        ProductTheme::Transportation,
        ProductTheme::Vegetation,
        ProductTheme::ModFis,
        ProductTheme::MapZones,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProductTheme::Disturbance => "disturbance",
            ProductTheme::FireRegime => "fire_regime",
            ProductTheme::Fuel => "fuel",
            ProductTheme::Topographic => "topographic",
            ProductTheme::Transportation => "transportation",
            ProductTheme::Vegetation => "vegetation",
            ProductTheme::ModFis => "mod_fis",
            ProductTheme::MapZones => "map_zones",
        }
    }

    /// Human label as it appears in the upstream product table.
    pub fn label(&self) -> &'static str {
        match self {
            ProductTheme::FireRegime => "fire regime",
            ProductTheme::ModFis => "mod-fis",
            ProductTheme::MapZones => "map zones",
            other => other.name(),
        }
    }
}

impl fmt::Display for ProductTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProductTheme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|t| t.name() == s || t.label() == s)
            .copied()
            .ok_or_else(|| invalid_filter_value("theme", s, &Self::ALL.iter().map(|t| t.name()).collect::<Vec<_>>()))
    }
}

/// Dataset release of the overall LANDFIRE catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ProductVersion {
    Lf2001,
    Lf2012,
    Lf2014,
    Lf2016Remap,
    Lf2020,
}

impl ProductVersion {
    pub const ALL: &[ProductVersion] = &[
        ProductVersion::Lf2001,
        ProductVersion::Lf2012,
        ProductVersion::Lf2014,
        ProductVersion::Lf2016Remap,
        ProductVersion::Lf2020,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ProductVersion::Lf2001 => "lf_2001",
            ProductVersion::Lf2012 => "lf_2012",
            ProductVersion::Lf2014 => "lf_2014",
            ProductVersion::Lf2016Remap => "lf_2016_remap",
            ProductVersion::Lf2020 => "lf_2020",
        }
    }

    /// Semantic version string of the release (e.g. `lf_2020` -> `"2.2.0"`).
    pub fn semver(&self) -> &'static str {
        match self {
            ProductVersion::Lf2001 => "1.0.5",
            ProductVersion::Lf2012 => "1.3.0",
            ProductVersion::Lf2014 => "1.4.0",
            ProductVersion::Lf2016Remap => "2.0.0",
            ProductVersion::Lf2020 => "2.2.0",
        }
    }
}

impl fmt::Display for ProductVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProductVersion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|v| v.name() == s || v.semver() == s)
            .copied()
            .ok_or_else(|| invalid_filter_value("version", s, &Self::ALL.iter().map(|v| v.name()).collect::<Vec<_>>()))
    }
}

/// Geographic coverage area within which a given version/layer is available.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ProductRegion {
    /// Continental US.
    Us,
    /// Alaska.
    Ak,
    /// Hawaii.
    Hi,
}

impl ProductRegion {
    pub const ALL: &[ProductRegion] = &[ProductRegion::Us, ProductRegion::Ak, ProductRegion::Hi];

    pub fn name(&self) -> &'static str {
        match self {
            ProductRegion::Us => "US",
            ProductRegion::Ak => "AK",
            ProductRegion::Hi => "HI",
        }
    }
}

impl fmt::Display for ProductRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ProductRegion {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .find(|r| r.name() == s)
            .copied()
            .ok_or_else(|| invalid_filter_value("region", s, &Self::ALL.iter().map(|r| r.name()).collect::<Vec<_>>()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn theme_parses_name_and_label() {
        assert_eq!("fire_regime".parse::<ProductTheme>().unwrap(), ProductTheme::FireRegime);
        assert_eq!("fire regime".parse::<ProductTheme>().unwrap(), ProductTheme::FireRegime);
        assert_eq!("mod-fis".parse::<ProductTheme>().unwrap(), ProductTheme::ModFis);
    }

    #[test]
    fn theme_rejects_unknown_value() {
        let err = "weather".parse::<ProductTheme>().unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains("theme"));
        assert!(msg.contains("weather"));
        assert!(msg.contains("map_zones"));
    }

    #[test]
    fn version_parses_name_and_semver() {
        assert_eq!("lf_2016_remap".parse::<ProductVersion>().unwrap(), ProductVersion::Lf2016Remap);
        assert_eq!("2.2.0".parse::<ProductVersion>().unwrap(), ProductVersion::Lf2020);
        assert!("lf_1999".parse::<ProductVersion>().is_err());
    }

    #[test]
    fn version_semver_mapping() {
        let pairs: Vec<(&str, &str)> = ProductVersion::ALL
            .iter()
            .map(|v| (v.name(), v.semver()))
            .collect();
        assert_eq!(
            pairs,
            vec![
                ("lf_2001", "1.0.5"),
                ("lf_2012", "1.3.0"),
                ("lf_2014", "1.4.0"),
                ("lf_2016_remap", "2.0.0"),
                ("lf_2020", "2.2.0"),
            ]
        );
    }

    #[test]
    fn region_parses_and_rejects() {
        assert_eq!("AK".parse::<ProductRegion>().unwrap(), ProductRegion::Ak);
        let err = "PR".parse::<ProductRegion>().unwrap_err();
        assert!(err.to_string().contains("region"));
    }
}
