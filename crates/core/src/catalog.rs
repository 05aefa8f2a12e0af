//! Brand/model/year compatibility table.
//!
//! The single source of truth for what a bike may legally be. Compiled in
//! and immutable; editorial changes ship as a redeploy. Lookups are pure and
//! never fail — unknown keys yield empty results, which callers read as
//! "invalid".

/// A supported model and the years it was produced.
struct ModelEntry {
    name: &'static str,
    years: &'static [&'static str],
}

/// A supported brand and its models.
struct BrandEntry {
    name: &'static str,
    models: &'static [ModelEntry],
}

// Declaration order is the enumeration order in validation messages.
static CATALOG: &[BrandEntry] = &[
    BrandEntry {
        name: "Canyon",
        models: &[
            ModelEntry {
                name: "Dude",
                years: &["2020", "2024"],
            },
            ModelEntry {
                name: "Exceed",
                years: &["2020", "2024"],
            },
        ],
    },
    BrandEntry {
        name: "Giant",
        models: &[
            ModelEntry {
                name: "Defy",
                years: &["2020", "2024"],
            },
            ModelEntry {
                name: "Escape",
                years: &["2020", "2024"],
            },
        ],
    },
    BrandEntry {
        name: "Trek",
        models: &[
            ModelEntry {
                name: "Boone",
                years: &["2020", "2024"],
            },
            ModelEntry {
                name: "District",
                years: &["2020", "2024"],
            },
        ],
    },
];

fn find_brand(brand: &str) -> Option<&'static BrandEntry> {
    CATALOG.iter().find(|b| b.name == brand)
}

fn find_model(brand: &str, model: &str) -> Option<&'static ModelEntry> {
    find_brand(brand)?.models.iter().find(|m| m.name == model)
}

/// All supported brand names.
pub fn brands() -> Vec<&'static str> {
    CATALOG.iter().map(|b| b.name).collect()
}

/// Models supported under `brand`. Empty if the brand is unknown.
pub fn models_for(brand: &str) -> Vec<&'static str> {
    find_brand(brand)
        .map(|b| b.models.iter().map(|m| m.name).collect())
        .unwrap_or_default()
}

/// Years supported under `brand` + `model`. Empty if either is unknown.
pub fn years_for(brand: &str, model: &str) -> &'static [&'static str] {
    find_model(brand, model).map(|m| m.years).unwrap_or(&[])
}
