use anyhow::Result;
use landfire::{Landfire, ProductSearch, ProductTheme, ProductVersion};
use std::path::Path;

fn main() -> Result<()> {
    // Example program that calls the library API.
    // Resolve the 2020 fuel layers for the area of interest, then download.
    let layers = ProductSearch::new()
        .with_themes([ProductTheme::Fuel])
        .with_versions([ProductVersion::Lf2020])
        .layers();
    eprintln!("Requesting {} layers", layers.len());

    let client = Landfire::new("-107.70894965 46.56799094 -106.02718124 47.34869094")?;
    client.request_data(&layers, Path::new("landfire_fuel.zip"))?;
    Ok(())
}
