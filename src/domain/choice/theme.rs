//! Built-in purchase themes: suggested items and default criteria.

use once_cell::sync::Lazy;
use serde::Serialize;
use std::collections::HashMap;

/// A purchase theme offered to students at the start of a session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Theme {
    pub key: &'static str,
    pub label: &'static str,
    pub items: Vec<&'static str>,
    pub criteria: Vec<&'static str>,
}

static THEMES: Lazy<Vec<Theme>> = Lazy::new(|| {
    vec![
        Theme {
            key: "food",
            label: "Food",
            items: vec!["fried chicken", "pizza", "hamburger", "tteokbokki"],
            criteria: vec!["taste", "portion", "delivery speed"],
        },
        Theme {
            key: "shoes",
            label: "Shoes",
            items: vec!["sneakers", "dress shoes", "sandals", "slippers"],
            criteria: vec!["design", "comfort", "durability"],
        },
        Theme {
            key: "bags",
            label: "Bags",
            items: vec!["backpack", "eco bag", "crossbody bag", "suitcase"],
            criteria: vec!["design", "storage space", "weight"],
        },
        Theme {
            key: "school-supplies",
            label: "School supplies",
            items: vec!["pencil", "mechanical pencil", "ballpoint pen", "fountain pen"],
            criteria: vec!["design", "writing feel", "durability"],
        },
    ]
});

static THEME_INDEX: Lazy<HashMap<String, usize>> = Lazy::new(|| {
    let mut index = HashMap::new();
    for (i, theme) in THEMES.iter().enumerate() {
        index.insert(theme.key.to_string(), i);
        index.insert(theme.label.to_lowercase(), i);
    }
    index
});

/// Returns every built-in theme in display order.
pub fn themes() -> &'static [Theme] {
    &THEMES
}

/// Looks up a theme by key or label, ignoring case.
pub fn find_theme(name: &str) -> Option<&'static Theme> {
    THEME_INDEX
        .get(&name.trim().to_lowercase())
        .map(|&i| &THEMES[i])
}

impl Theme {
    /// Returns true if `item` is one of this theme's suggestions.
    pub fn suggests(&self, item: &str) -> bool {
        self.items.iter().any(|i| i.eq_ignore_ascii_case(item.trim()))
    }
}
