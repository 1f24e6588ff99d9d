//! Catalog of place categories available for discovery.
//!
//! Keys are the provider's place-type identifiers; labels and groups
//! are for presentation. The table is fixed; unknown keys coming back
//! from the provider still get a readable label via `label_for`.

/// One searchable place category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    /// Provider place-type key, e.g. "tourist_attraction".
    pub key: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Display group the category is listed under.
    pub group: &'static str,
}

/// Every category the planner offers, grouped for display.
pub const CATEGORIES: &[Category] = &[
    // Food & Dining
    Category { key: "restaurant", label: "Restaurants", group: "Food & Dining" },
    Category { key: "cafe", label: "Cafes & Coffee Shops", group: "Food & Dining" },
    Category { key: "bakery", label: "Bakeries", group: "Food & Dining" },
    Category { key: "bar", label: "Bars & Pubs", group: "Food & Dining" },
    Category { key: "food", label: "Food Courts", group: "Food & Dining" },
    // Attractions
    Category { key: "tourist_attraction", label: "Tourist Attractions", group: "Attractions" },
    Category { key: "museum", label: "Museums", group: "Attractions" },
    Category { key: "park", label: "Parks & Gardens", group: "Attractions" },
    Category { key: "amusement_park", label: "Amusement Parks", group: "Attractions" },
    Category { key: "aquarium", label: "Aquariums", group: "Attractions" },
    Category { key: "zoo", label: "Zoos", group: "Attractions" },
    // Accommodation
    Category { key: "lodging", label: "Hotels & Lodging", group: "Accommodation" },
    Category { key: "campground", label: "Campgrounds", group: "Accommodation" },
    Category { key: "rv_park", label: "RV Parks", group: "Accommodation" },
    // Utilities
    Category { key: "gas_station", label: "Gas Stations", group: "Utilities" },
    Category { key: "atm", label: "ATMs", group: "Utilities" },
    Category { key: "hospital", label: "Hospitals", group: "Utilities" },
    Category { key: "pharmacy", label: "Pharmacies", group: "Utilities" },
    Category { key: "police", label: "Police Stations", group: "Utilities" },
    // Shopping
    Category { key: "shopping_mall", label: "Shopping Malls", group: "Shopping" },
    Category { key: "grocery_or_supermarket", label: "Grocery Stores", group: "Shopping" },
    Category { key: "convenience_store", label: "Convenience Stores", group: "Shopping" },
];

/// Default discovery set for curated scenic routes.
pub const SCENIC_DEFAULTS: &[&str] = &["restaurant", "tourist_attraction", "gas_station", "lodging"];

/// Display label for a category key.
///
/// Keys outside the catalog are title-cased with underscores turned
/// into spaces, so provider types we never listed still render.
pub fn label_for(key: &str) -> String {
    if let Some(category) = CATEGORIES.iter().find(|c| c.key == key) {
        return category.label.to_string();
    }
    key.split('_')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
