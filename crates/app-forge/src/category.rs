//! Keyword-based app category classification
//!
//! Categories are checked in a fixed priority order and the first one with a
//! matching keyword wins: Fintech, Social, E-Commerce, Health. Ideas that
//! match nothing fall back to General. An idea mentioning both "shop" and
//! "chat" is therefore Social.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Closed set of app categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Fintech,
    Social,
    ECommerce,
    Health,
    General,
}

/// Design guidance attached to a category
#[derive(Debug, PartialEq, Eq)]
pub struct CategoryProfile {
    pub category: Category,
    /// Name embedded in the instruction
    pub name: &'static str,
    pub design_style: &'static str,
    pub key_features: &'static str,
    /// Lowercase substrings that select this category
    pub keywords: &'static [&'static str],
}

/// Profiles in classification priority order. General is last and has no keywords.
static PROFILES: [CategoryProfile; 5] = [
    CategoryProfile {
        category: Category::Fintech,
        name: "Fintech",
        design_style: "Trustworthy, Dark Mode capable, Sharp contrasts. Primary: Deep Blue or Emerald.",
        key_features: "Spending graphs (CSS bars), transaction lists, 'Send Money' flow, card management.",
        keywords: &["finance", "bank", "crypto", "wallet", "expense"],
    },
    CategoryProfile {
        category: Category::Social,
        name: "Social",
        design_style: "Vibrant, Friendly, Rounded. Primary: Indigo or Pink.",
        key_features: "Stories carousel, Feed with cards, Chat interface, User profiles with stats.",
        keywords: &["social", "chat", "connect"],
    },
    CategoryProfile {
        category: Category::ECommerce,
        name: "E-Commerce",
        design_style: "Product-first, clean whites/grays. Primary: Black or Brand Color.",
        key_features: "Product grids, sticky 'Add to Cart', Checkout flow with credit card form.",
        keywords: &["shop", "commerce", "store"],
    },
    CategoryProfile {
        category: Category::Health,
        name: "Health",
        design_style: "Calm, Soft gradients, rounded cards. Primary: Sage Green or Ocean Blue.",
        key_features: "Progress rings, activity charts, daily checklists, mindfulness player.",
        keywords: &["health", "fit", "meditat"],
    },
    CategoryProfile {
        category: Category::General,
        name: "General Utility",
        design_style: "Clean, Neutral, Minimalist",
        key_features: "Standard dashboard and list views.",
        keywords: &[],
    },
];

impl Category {
    /// All categories in classification priority order
    pub fn all() -> [Category; 5] {
        [
            Category::Fintech,
            Category::Social,
            Category::ECommerce,
            Category::Health,
            Category::General,
        ]
    }

    /// The static profile for this category
    pub fn profile(self) -> &'static CategoryProfile {
        let index = match self {
            Category::Fintech => 0,
            Category::Social => 1,
            Category::ECommerce => 2,
            Category::Health => 3,
            Category::General => 4,
        };
        &PROFILES[index]
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.profile().name)
    }
}

impl CategoryProfile {
    fn matches(&self, lowered: &str) -> bool {
        self.keywords.iter().any(|keyword| lowered.contains(keyword))
    }
}

/// Classify an idea into its category profile.
///
/// Pure: the same text always yields the same profile.
pub fn classify(idea: &str) -> &'static CategoryProfile {
    let lowered = idea.to_lowercase();
    PROFILES
        .iter()
        .find(|profile| profile.matches(&lowered))
        .unwrap_or_else(|| Category::General.profile())
}
