//! Emoji catalog model.
//!
//! A [`Catalog`] holds the full emoji collection fetched from the API together
//! with derived data: the ordered list of observed categories and the fetch
//! timestamp. The catalog is replaced wholesale on refresh; derived state is
//! recomputed, never independently mutated.

use super::emoji::EmojiRecord;

/// Number of seconds in one minute.
const SECONDS_PER_MINUTE: i64 = 60;

/// Number of seconds in one hour.
const SECONDS_PER_HOUR: i64 = 3600;

/// Number of seconds in one day.
const SECONDS_PER_DAY: i64 = 86400;

/// The loaded emoji collection with derived category data.
///
/// Invariant: `categories` contains exactly the distinct `category` values of
/// `records`, in first-observation order. Any category filter applied to the
/// catalog must name one of these values.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    /// The full ordered collection as fetched from the API.
    pub records: Vec<EmojiRecord>,

    /// Distinct categories in first-observation order.
    pub categories: Vec<String>,

    /// Unix timestamp of the fetch that produced this catalog, 0 if never loaded.
    pub fetched_at: i64,
}

impl Catalog {
    /// Builds a catalog from freshly parsed records.
    ///
    /// Derives the category list by walking the records in order and stamps the
    /// catalog with the current time.
    ///
    /// # Examples
    ///
    /// ```
    /// use zemoji::domain::Catalog;
    ///
    /// let catalog = Catalog::from_records(vec![]);
    /// assert!(catalog.is_empty());
    /// ```
    #[must_use]
    pub fn from_records(records: Vec<EmojiRecord>) -> Self {
        let mut categories: Vec<String> = Vec::new();
        for record in &records {
            if !categories.iter().any(|c| c == &record.category) {
                categories.push(record.category.clone());
            }
        }

        Self {
            records,
            categories,
            fetched_at: chrono::Utc::now().timestamp(),
        }
    }

    /// Returns `true` if no records have been loaded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Returns `true` if `category` was observed in the loaded collection.
    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Returns a human-readable string describing how long ago the catalog was fetched.
    ///
    /// The format varies based on the time elapsed:
    /// - Less than 1 minute: "just now"
    /// - Less than 1 hour: "Xm ago" (e.g., "5m ago")
    /// - Less than 1 day: "Xh ago" (e.g., "3h ago")
    /// - 1 day or more: "Xd ago" (e.g., "7d ago")
    #[must_use]
    pub fn refreshed_ago(&self) -> String {
        let now = chrono::Utc::now().timestamp();
        let diff = now - self.fetched_at;

        if diff < SECONDS_PER_MINUTE {
            "just now".to_string()
        } else if diff < SECONDS_PER_HOUR {
            let mins = diff / SECONDS_PER_MINUTE;
            format!("{mins}m ago")
        } else if diff < SECONDS_PER_DAY {
            let hours = diff / SECONDS_PER_HOUR;
            format!("{hours}h ago")
        } else {
            let days = diff / SECONDS_PER_DAY;
            format!("{days}d ago")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, category: &str) -> EmojiRecord {
        EmojiRecord {
            name: name.to_string(),
            category: category.to_string(),
            group: category.to_string(),
            html_code: "&#128512;".to_string(),
        }
    }

    #[test]
    fn derives_categories_in_first_observation_order() {
        let catalog = Catalog::from_records(vec![
            record("a", "smileys and people"),
            record("b", "animals and nature"),
            record("c", "smileys and people"),
            record("d", "food and drink"),
        ]);

        assert_eq!(
            catalog.categories,
            vec!["smileys and people", "animals and nature", "food and drink"]
        );
    }

    #[test]
    fn has_category_only_for_observed_values() {
        let catalog = Catalog::from_records(vec![record("a", "flags")]);
        assert!(catalog.has_category("flags"));
        assert!(!catalog.has_category("food and drink"));
    }

    #[test]
    fn refreshed_ago_formats_elapsed_time() {
        let mut catalog = Catalog::from_records(vec![]);
        assert_eq!(catalog.refreshed_ago(), "just now");

        catalog.fetched_at = chrono::Utc::now().timestamp() - 300;
        assert_eq!(catalog.refreshed_ago(), "5m ago");

        catalog.fetched_at = chrono::Utc::now().timestamp() - 2 * SECONDS_PER_DAY;
        assert_eq!(catalog.refreshed_ago(), "2d ago");
    }
}
