//! # Static Rule Tables
//!
//! The keyword, urgency-pattern and category tables that drive every verdict.
//!
//! All tables are ordered slices rather than maps: declaration order decides
//! which keywords a reason quotes and how tied categories are ranked.

use crate::types::SeverityTier;

// =============================================================================
// SEVERITY KEYWORDS
// =============================================================================

/// Keywords attached to one severity tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TierKeywords {
    pub tier: SeverityTier,
    pub keywords: &'static [&'static str],
}

/// Severity keyword table, most severe tier first.
///
/// The low set never influences scoring; it is kept for diagnostics.
pub static SEVERITY_KEYWORDS: [TierKeywords; 4] = [
    TierKeywords {
        tier: SeverityTier::Critical,
        keywords: &[
            "fire", "explosion", "blood", "death", "collapse", "gas leak",
            "electric shock", "spark", "electrocution", "drowning",
            "flood", "landslide", "earthquake", "cyclone", "hurricane",
            "attack", "assault", "rabid", "deadly", "fatal", "emergency",
            "blocked road", "ambulance", "hospital", "school", "child",
            "exposed wire", "transformer", "chemical", "toxic", "poison",
            "weapon", "gun", "bomb", "terror", "riot", "stampede",
            "structural failure", "pillar crack", "bridge crack",
        ],
    },
    TierKeywords {
        tier: SeverityTier::High,
        keywords: &[
            "accident", "injury", "broken", "bleeding", "hazard", "risk",
            "dangerous", "unsafe", "threat", "pollution", "smoke",
            "sewage", "contamination", "infection", "disease",
            "mosquito", "dengue", "malaria", "typhoid", "cholera",
            "rat", "snake", "stray dog", "bite", "attack",
            "theft", "robbery", "burglary", "harassment", "abuse",
            "illegal", "crime", "violation", "bribe", "corruption",
            "traffic jam", "congestion", "gridlock", "delay",
            "no water", "power cut", "blackout", "load shedding",
            "pothole", "manhole", "open drain", "water logging",
        ],
    },
    TierKeywords {
        tier: SeverityTier::Medium,
        keywords: &[
            "garbage", "trash", "waste", "litter", "rubbish", "dustbin",
            "smell", "odor", "stink", "foul", "dirty", "unclean",
            "messy", "ugly", "eyesore", "bad", "poor",
            "leak", "drip", "seepage", "moisture", "damp",
            "noise", "loud", "sound", "music", "party", "barking",
            "encroachment", "hawker", "vendor", "stall", "shop",
            "parking", "parked", "vehicle", "car", "bike", "scooter",
            "construction", "debris", "material", "sand", "cement",
            "graffiti", "poster", "banner", "hoarding", "advertisement",
        ],
    },
    TierKeywords {
        tier: SeverityTier::Low,
        keywords: &[
            "light", "lamp", "bulb", "flicker", "dim", "dark",
            "sign", "board", "paint", "color", "faded",
            "bench", "chair", "seat", "grass", "plant", "tree",
            "leaf", "branch", "garden", "park", "playground",
            "cosmetic", "look", "appearance", "aesthetic",
        ],
    },
];

/// Keywords declared for `tier`.
#[must_use]
pub fn keywords_for(tier: SeverityTier) -> &'static [&'static str] {
    SEVERITY_KEYWORDS
        .iter()
        .find(|entry| entry.tier == tier)
        .map(|entry| entry.keywords)
        .unwrap_or(&[])
}

// =============================================================================
// URGENCY PATTERNS
// =============================================================================

/// A whole-word pattern that raises urgency by `weight` when it matches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UrgencyPattern {
    /// Regular expression source, matched case-insensitively.
    pub pattern: &'static str,
    pub weight: u8,
}

/// Urgency boosters, evaluated in order. Every matching entry contributes.
pub static URGENCY_PATTERNS: [UrgencyPattern; 8] = [
    // Temporal immediacy
    UrgencyPattern {
        pattern: r"\b(now|immediately|urgent|emergency|critical|danger|help)\b",
        weight: 20,
    },
    UrgencyPattern {
        pattern: r"\b(today|tonight|morning|evening|afternoon)\b",
        weight: 10,
    },
    UrgencyPattern {
        pattern: r"\b(yesterday|last night|week|month)\b",
        weight: 5,
    },
    // Injury
    UrgencyPattern {
        pattern: r"\b(blood|bleeding|injury|hurt|pain)\b",
        weight: 25,
    },
    // Fire
    UrgencyPattern {
        pattern: r"\b(fire|smoke|flame|burn)\b",
        weight: 30,
    },
    // Obstruction
    UrgencyPattern {
        pattern: r"\b(blocked|stuck|trapped)\b",
        weight: 15,
    },
    // Sensitive locations
    UrgencyPattern {
        pattern: r"\b(school|hospital|clinic)\b",
        weight: 15,
    },
    // Vulnerable groups
    UrgencyPattern {
        pattern: r"\b(child|kid|baby|elderly|senior)\b",
        weight: 10,
    },
];

// =============================================================================
// CATEGORIES
// =============================================================================

/// A routing category and the keywords that suggest it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Category {
    pub name: &'static str,
    pub keywords: &'static [&'static str],
}

/// Category table. Declaration order breaks ties between equal hit counts.
pub static CATEGORY_TABLE: [Category; 21] = [
    Category {
        name: "Fire",
        keywords: &["fire", "smoke", "flame", "burn", "explosion"],
    },
    Category {
        name: "Pothole",
        keywords: &["pothole", "hole", "crater", "road damage", "broken road"],
    },
    Category {
        name: "Street Light",
        keywords: &["light", "lamp", "bulb", "dark", "street light"],
    },
    Category {
        name: "Garbage",
        keywords: &["garbage", "trash", "waste", "litter", "rubbish", "dump", "dustbin"],
    },
    Category {
        name: "Water Leak",
        keywords: &["water", "leak", "pipe", "burst", "flood", "seepage"],
    },
    Category {
        name: "Stray Animal",
        keywords: &["dog", "cat", "cow", "cattle", "monkey", "bite", "stray", "animal", "rabid"],
    },
    Category {
        name: "Construction Safety",
        keywords: &["construction", "debris", "material", "cement", "sand", "building"],
    },
    Category {
        name: "Illegal Parking",
        keywords: &["parking", "parked", "blocking", "vehicle", "car", "bike"],
    },
    Category {
        name: "Vandalism",
        keywords: &["graffiti", "paint", "broken", "destroy", "damage", "poster"],
    },
    Category {
        name: "Infrastructure",
        keywords: &[
            "bridge", "flyover", "pillar", "crack", "collapse", "structure", "manhole", "drain",
            "wire", "cable", "pole",
        ],
    },
    Category {
        name: "Traffic Sign",
        keywords: &["sign", "signal", "light", "traffic", "board", "direction"],
    },
    Category {
        name: "Public Facilities",
        keywords: &["toilet", "washroom", "bench", "seat", "park", "garden", "playground"],
    },
    Category {
        name: "Tree Hazard",
        keywords: &["tree", "branch", "fallen", "root", "leaf"],
    },
    Category {
        name: "Accessibility",
        keywords: &["ramp", "wheelchair", "step", "stair", "access", "disability"],
    },
    Category {
        name: "Noise Pollution",
        keywords: &["noise", "loud", "sound", "music", "speaker"],
    },
    Category {
        name: "Air Pollution",
        keywords: &["smoke", "dust", "fume", "smell", "pollution", "air"],
    },
    Category {
        name: "Water Pollution",
        keywords: &["river", "lake", "pond", "chemical", "oil", "poison", "fish"],
    },
    Category {
        name: "Health Hazard",
        keywords: &["mosquito", "dengue", "malaria", "rat", "disease", "health"],
    },
    Category {
        name: "Crowd",
        keywords: &["crowd", "gathering", "mob", "people", "protest"],
    },
    Category {
        name: "Gas Leak",
        keywords: &["gas", "leak", "smell", "cylinder", "pipeline"],
    },
    Category {
        name: "Environment",
        keywords: &["tree", "cutting", "deforestation", "forest", "nature"],
    },
];

/// Category names in table order.
pub fn category_names() -> impl Iterator<Item = &'static str> {
    CATEGORY_TABLE.iter().map(|category| category.name)
}

// =============================================================================
// TESTS
// =============================================================================
