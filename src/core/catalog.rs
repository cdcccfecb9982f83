//! # Catalog
//!
//! The product data model and how it gets into the widget: a built-in seed
//! product, optionally replaced by a TOML catalog file. Variants are
//! immutable after load — there is no restock or edit operation anywhere in
//! the widget.

use log::info;
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Stable identifier for one purchasable variant (a color-specific SKU).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Deserialize)]
#[serde(transparent)]
pub struct VariantId(pub u32);

impl fmt::Display for VariantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// One purchasable option of the product.
///
/// `image` is an opaque asset path — the widget renders it as a label and
/// assigns no meaning to its content.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Variant {
    pub id: VariantId,
    pub color: String,
    pub image: String,
    pub quantity: u32,
}

/// The displayed product: facts plus its variant list.
///
/// The selected-variant index lives in `ProductWidget`, not here; a
/// `Product` that reaches the widget always has at least one variant
/// (enforced by [`load_catalog`] and by the seed).
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub name: String,
    pub description: String,
    pub brand: String,
    #[serde(default)]
    pub details: Vec<String>,
    pub variants: Vec<Variant>,
}

impl Product {
    /// Built-in demo product, used when no catalog file is configured.
    pub fn seed() -> Self {
        Self {
            name: "Wool Socks".to_string(),
            description: "A pair of warm, fuzzy socks.".to_string(),
            brand: "Alpine Mills".to_string(),
            details: vec![
                "80% cotton".to_string(),
                "20% polyester".to_string(),
                "Gender-neutral".to_string(),
            ],
            variants: vec![
                Variant {
                    id: VariantId(2234),
                    color: "green".to_string(),
                    image: "assets/socks-green.png".to_string(),
                    quantity: 10,
                },
                Variant {
                    id: VariantId(2235),
                    color: "blue".to_string(),
                    image: "assets/socks-blue.png".to_string(),
                    quantity: 0,
                },
            ],
        }
    }
}

#[derive(Debug)]
pub enum CatalogError {
    Io(std::io::Error),
    Parse(toml::de::Error),
    /// The catalog parsed but its product has no variants, which would break
    /// the selected-index invariant before the first render.
    NoVariants,
}

impl fmt::Display for CatalogError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CatalogError::Io(e) => write!(f, "catalog I/O error: {e}"),
            CatalogError::Parse(e) => write!(f, "catalog parse error: {e}"),
            CatalogError::NoVariants => write!(f, "catalog product has no variants"),
        }
    }
}

impl std::error::Error for CatalogError {}

/// On-disk shape: the product sits under a `[product]` table.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    product: Product,
}

/// Load a product from a TOML catalog file.
pub fn load_catalog(path: &Path) -> Result<Product, CatalogError> {
    let contents = fs::read_to_string(path).map_err(CatalogError::Io)?;
    let catalog: CatalogFile = toml::from_str(&contents).map_err(CatalogError::Parse)?;
    if catalog.product.variants.is_empty() {
        return Err(CatalogError::NoVariants);
    }
    info!(
        "Loaded catalog from {} ({} variants)",
        path.display(),
        catalog.product.variants.len()
    );
    Ok(catalog.product)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_has_two_variants() {
        let product = Product::seed();
        assert_eq!(product.variants.len(), 2);
        assert_eq!(product.variants[0].id, VariantId(2234));
        assert_eq!(product.variants[0].quantity, 10);
        assert_eq!(product.variants[1].id, VariantId(2235));
        assert_eq!(product.variants[1].quantity, 0);
    }

    #[test]
    fn test_catalog_toml_parses() {
        let toml_str = r#"
[product]
name = "Canvas Tote"
description = "A sturdy everyday bag."
brand = "Harbor Goods"
details = ["100% canvas", "Machine washable"]

[[product.variants]]
id = 3101
color = "natural"
image = "assets/tote-natural.png"
quantity = 4

[[product.variants]]
id = 3102
color = "navy"
image = "assets/tote-navy.png"
quantity = 0
"#;
        let catalog: CatalogFile = toml::from_str(toml_str).unwrap();
        assert_eq!(catalog.product.brand, "Harbor Goods");
        assert_eq!(catalog.product.variants.len(), 2);
        assert_eq!(catalog.product.variants[1].id, VariantId(3102));
        assert_eq!(catalog.product.variants[1].quantity, 0);
    }

    #[test]
    fn test_details_are_optional() {
        let toml_str = r#"
[product]
name = "Plain Mug"
description = "Holds coffee."
brand = "Harbor Goods"

[[product.variants]]
id = 1
color = "white"
image = "assets/mug.png"
quantity = 3
"#;
        let catalog: CatalogFile = toml::from_str(toml_str).unwrap();
        assert!(catalog.product.details.is_empty());
    }

    #[test]
    fn test_empty_variant_list_is_rejected() {
        let dir = std::env::temp_dir().join("vitrine-catalog-test");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("no-variants.toml");
        fs::write(
            &path,
            r#"
[product]
name = "Ghost"
description = "Nothing to buy."
brand = "Nowhere"
variants = []
"#,
        )
        .unwrap();

        let err = load_catalog(&path).unwrap_err();
        assert!(matches!(err, CatalogError::NoVariants));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_catalog(Path::new("/definitely/not/here.toml")).unwrap_err();
        assert!(matches!(err, CatalogError::Io(_)));
    }
}
