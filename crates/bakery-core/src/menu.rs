//! Known items and the availability matcher.

/// The items the bakery sells, in matching order.
pub const KNOWN_ITEMS: [&str; 6] = ["bread", "cake", "croissant", "donut", "muffin", "pie"];

/// An ordered list of known item names.
///
/// Order matters: when a query contains several known items, the one listed
/// first wins.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Menu {
    items: Vec<String>,
}

/// Result of checking a query against the menu.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Availability {
    /// A known item was found in the query.
    Available { item: String },
    /// Nothing on the menu matched. `query` keeps the caller's casing.
    Unavailable { query: String, selection: String },
}

impl Menu {
    /// Create a menu from an ordered list of item names.
    ///
    /// Names are stored lower-cased so matching stays case-insensitive.
    pub fn new<I, S>(items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            items: items
                .into_iter()
                .map(|item| item.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// The bakery's standard menu.
    pub fn bakery() -> Self {
        Self::new(KNOWN_ITEMS)
    }

    /// Item names in matching order.
    pub fn items(&self) -> &[String] {
        &self.items
    }

    /// Comma-separated list of every item, as shown to customers.
    pub fn selection(&self) -> String {
        self.items.join(", ")
    }

    /// Find the first known item contained in `query`, ignoring case.
    pub fn find(&self, query: &str) -> Option<&str> {
        let query = query.to_lowercase();
        self.items
            .iter()
            .find(|item| query.contains(item.as_str()))
            .map(String::as_str)
    }

    /// Check a query against the menu.
    pub fn check(&self, query: &str) -> Availability {
        match self.find(query) {
            Some(item) => Availability::Available {
                item: item.to_string(),
            },
            None => Availability::Unavailable {
                query: query.to_string(),
                selection: self.selection(),
            },
        }
    }
}

impl Default for Menu {
    fn default() -> Self {
        Self::bakery()
    }
}

impl Availability {
    /// Returns true if a known item matched.
    pub fn is_available(&self) -> bool {
        matches!(self, Availability::Available { .. })
    }

    /// Customer-facing message for this result.
    pub fn message(&self) -> String {
        match self {
            Availability::Available { item } => {
                format!("Yes, we have {item} available in our bakery!")
            }
            Availability::Unavailable { query, selection } => {
                format!(
                    "Sorry, we don't have '{query}' available. Our selection includes: {selection}"
                )
            }
        }
    }
}
