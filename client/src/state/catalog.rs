//! Static kitchen-unit catalog and the Book Now type filter.
//!
//! SYSTEM CONTEXT
//! ==============
//! The catalog is the only source of selectable products. Entries are fixed
//! at build time; the cart stores copies of them in session storage.

#[cfg(test)]
#[path = "catalog_test.rs"]
mod catalog_test;

use serde::{Deserialize, Serialize};

/// A bookable kitchen unit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub name: String,
    /// Display-formatted price, e.g. `"$500"`.
    pub price: String,
    /// Public image path.
    pub image: String,
    pub description: String,
}

struct CatalogEntry {
    id: u32,
    name: &'static str,
    price: &'static str,
    image: &'static str,
    description: &'static str,
}

const CATALOG: &[CatalogEntry] = &[
    CatalogEntry {
        id: 1,
        name: "Modern Kitchen Unit",
        price: "$500",
        image: "/images/villa1.jpg",
        description: "A sleek and modern kitchen unit perfect for contemporary homes.",
    },
    CatalogEntry {
        id: 2,
        name: "Classic Kitchen Unit",
        price: "$350",
        image: "/images/apartment1.jpg",
        description: "Traditional design with modern functionality.",
    },
    CatalogEntry {
        id: 3,
        name: "Premium Kitchen Unit",
        price: "$600",
        image: "/images/office1.jpg",
        description: "High-end kitchen unit with premium materials.",
    },
    CatalogEntry {
        id: 4,
        name: "Compact Kitchen Unit",
        price: "$450",
        image: "/images/villa2.jpg",
        description: "Space-efficient design for smaller kitchens.",
    },
    CatalogEntry {
        id: 5,
        name: "Luxury Kitchen Unit",
        price: "$300",
        image: "/images/apartment2.jpg",
        description: "Luxurious design with high-quality finishes.",
    },
    CatalogEntry {
        id: 6,
        name: "Custom Kitchen Unit",
        price: "$550",
        image: "/images/commercial1.jpg",
        description: "Fully customizable kitchen unit to your specifications.",
    },
];

/// All catalog products in display order.
#[must_use]
pub fn products() -> Vec<Product> {
    CATALOG
        .iter()
        .map(|e| Product {
            id: e.id,
            name: e.name.to_owned(),
            price: e.price.to_owned(),
            image: e.image.to_owned(),
            description: e.description.to_owned(),
        })
        .collect()
}

/// Look up a single catalog product.
#[must_use]
pub fn product_by_id(id: u32) -> Option<Product> {
    products().into_iter().find(|p| p.id == id)
}

/// Label that disables filtering.
pub const FILTER_ALL: &str = "All";

/// Unit-type filter labels shown in the Book Now sidebar.
pub const FILTER_OPTIONS: &[&str] = &[
    FILTER_ALL,
    "Kitchen Units",
    "Shaker",
    "Flat-Panel",
    "Glass-Front",
    "Thermofoil",
    "Melamine",
    "Custom",
    "Pull-Out",
    "Corner Units",
    "Pantry Units",
    "Base Cabinets",
];

/// Products whose name or description contains `filter` (case-insensitive).
///
/// [`FILTER_ALL`] and the empty filter both return the full list.
#[must_use]
pub fn filter_products(products: &[Product], filter: &str) -> Vec<Product> {
    if filter == FILTER_ALL {
        return products.to_vec();
    }
    let needle = filter.to_lowercase();
    products
        .iter()
        .filter(|p| p.name.to_lowercase().contains(&needle) || p.description.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}
