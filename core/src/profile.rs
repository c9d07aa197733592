//! Descriptive copy for each skip size.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dimensions {
    pub length: &'static str,
    pub width: &'static str,
    pub height: &'static str,
}

const VARIES: Dimensions = Dimensions {
    length: "Varies",
    width: "Varies",
    height: "Varies",
};

const GENERIC_SUITABILITY: &[&str] = &["General waste", "Construction waste"];

/// Marketing name, blurb, typical uses and approximate dimensions (metres).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkipProfile {
    pub name: String,
    pub description: Option<&'static str>,
    pub suitable_for: &'static [&'static str],
    pub dimensions: Dimensions,
}

struct KnownSize {
    size: u32,
    name: &'static str,
    description: &'static str,
    suitable_for: &'static [&'static str],
    dimensions: Dimensions,
}

const fn dims(length: &'static str, width: &'static str, height: &'static str) -> Dimensions {
    Dimensions { length, width, height }
}

const KNOWN_SIZES: &[KnownSize] = &[
    KnownSize {
        size: 4,
        name: "Mini Skip",
        description: "Perfect for small garden or house clearance projects",
        suitable_for: &["Small garden waste", "House clearance", "Small renovation projects"],
        dimensions: dims("1.83m", "1.29m", "0.91m"),
    },
    KnownSize {
        size: 6,
        name: "Midi Skip",
        description: "Ideal for medium-sized projects and renovations",
        suitable_for: &["Medium renovation projects", "Garden clearance", "Office clearance"],
        dimensions: dims("2.29m", "1.37m", "1.07m"),
    },
    KnownSize {
        size: 8,
        name: "Builder's Skip",
        description: "The most common skip for larger home projects",
        suitable_for: &["Home renovations", "Building projects", "Large garden clearance"],
        dimensions: dims("3.35m", "1.68m", "1.07m"),
    },
    KnownSize {
        size: 10,
        name: "Large Skip",
        description: "For major projects and commercial use",
        suitable_for: &["Commercial projects", "Major renovations", "Construction waste"],
        dimensions: dims("3.66m", "1.83m", "1.22m"),
    },
    KnownSize {
        size: 12,
        name: "Maxi Skip",
        description: "Suitable for large construction and commercial waste",
        suitable_for: &["Large commercial projects", "Construction waste", "Factory clearance"],
        dimensions: dims("3.96m", "1.83m", "1.52m"),
    },
    KnownSize {
        size: 14,
        name: "Extra Large Skip",
        description: "For large volume waste and commercial projects",
        suitable_for: &["Large volume waste", "Construction sites", "Industrial waste"],
        dimensions: dims("4.57m", "1.83m", "1.68m"),
    },
    KnownSize {
        size: 16,
        name: "Extra Large Skip",
        description: "For large volume waste and commercial projects",
        suitable_for: &["Industrial waste", "Factory clearance", "Large construction projects"],
        dimensions: dims("5.03m", "1.83m", "1.68m"),
    },
    KnownSize {
        size: 20,
        name: "Roll-On Roll-Off",
        description: "For industrial use and large construction sites",
        suitable_for: &["Industrial waste", "Major construction", "Large volume materials"],
        dimensions: dims("6.40m", "2.44m", "2.13m"),
    },
    KnownSize {
        size: 40,
        name: "Roll-On Roll-Off",
        description: "For industrial use and very large construction projects",
        suitable_for: &["Major industrial waste", "Construction sites", "Bulk materials"],
        dimensions: dims("12.19m", "2.44m", "2.13m"),
    },
];

pub fn profile_for(size: u32) -> SkipProfile {
    match KNOWN_SIZES.iter().find(|known| known.size == size) {
        Some(known) => SkipProfile {
            name: known.name.to_string(),
            description: Some(known.description),
            suitable_for: known.suitable_for,
            dimensions: known.dimensions,
        },
        None => SkipProfile {
            name: format!("{size} Yard Skip"),
            description: None,
            suitable_for: GENERIC_SUITABILITY,
            dimensions: VARIES,
        },
    }
}
