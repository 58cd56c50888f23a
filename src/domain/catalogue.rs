use std::fmt;

/// A batch catalogue replacement contained two items whose names collide
/// case-insensitively. The replacement is rejected in full.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("catalogue batch contains duplicate item name: {name:?}")]
pub struct DuplicateItemError {
    pub name: String,
}

/// A purchasable item in the catalogue
///
/// Identity is the name, compared case-insensitively. Read-only after
/// creation; lookups hand out clones so callers can never reach the
/// catalogue's internal state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogueItem {
    name: String,
    points_per_unit: u32,
}

impl CatalogueItem {
    pub fn new(name: impl Into<String>, points_per_unit: u32) -> Self {
        Self {
            name: name.into(),
            points_per_unit,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn points_per_unit(&self) -> u32 {
        self.points_per_unit
    }

    /// True if both items share the same case-insensitive name.
    pub fn is_same_item(&self, other: &CatalogueItem) -> bool {
        self.matches_name(&other.name)
    }

    pub fn matches_name(&self, name: &str) -> bool {
        self.name.eq_ignore_ascii_case(name)
    }
}

impl fmt::Display for CatalogueItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({} pts)", self.name, self.points_per_unit)
    }
}

/// Ordered collection of items with case-insensitive name uniqueness
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalogue {
    items: Vec<CatalogueItem>,
}

impl Catalogue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts the item unless a same-named item already exists.
    ///
    /// Returns `false` on a duplicate name. This is a normal outcome, not an
    /// error.
    pub fn add(&mut self, item: CatalogueItem) -> bool {
        if self.items.iter().any(|existing| existing.is_same_item(&item)) {
            return false;
        }
        self.items.push(item);
        true
    }

    /// Returns a clone of the first item whose name matches
    /// case-insensitively, or `None`. Missing items are not an error.
    pub fn find(&self, name: &str) -> Option<CatalogueItem> {
        self.items.iter().find(|item| item.matches_name(name)).cloned()
    }

    /// Removes and returns the first case-insensitive match.
    pub fn remove(&mut self, name: &str) -> Option<CatalogueItem> {
        let index = self.items.iter().position(|item| item.matches_name(name))?;
        Some(self.items.remove(index))
    }

    /// Replaces the whole collection, all-or-nothing.
    ///
    /// Fails if the incoming batch itself contains two items with the same
    /// case-insensitive name; the prior contents are left untouched.
    pub fn replace_all(&mut self, items: Vec<CatalogueItem>) -> Result<(), DuplicateItemError> {
        for (i, item) in items.iter().enumerate() {
            if items[i + 1..].iter().any(|other| item.is_same_item(other)) {
                return Err(DuplicateItemError {
                    name: item.name().to_string(),
                });
            }
        }
        self.items = items;
        Ok(())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.items.iter().any(|item| item.matches_name(name))
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CatalogueItem> {
        self.items.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    fn cookies() -> CatalogueItem {
        CatalogueItem::new("Cookies", 10)
    }

    #[test]
    fn test_add_rejects_case_insensitive_duplicate() {
        let mut catalogue = Catalogue::new();
        assert_that!(catalogue.add(cookies())).is_true();

        // An item whose name differs only in case is the same item
        let added = catalogue.add(CatalogueItem::new("COOKIES", 25));

        assert_that!(added).is_false();
        assert_that!(catalogue.len()).is_equal_to(1);
    }

    #[test]
    fn test_find_is_case_insensitive() {
        let mut catalogue = Catalogue::new();
        catalogue.add(cookies());

        let lower = catalogue.find("cookies");
        let exact = catalogue.find("Cookies");

        assert_that!(lower).is_some().is_equal_to(cookies());
        assert_that!(exact).is_some().is_equal_to(cookies());
    }

    #[test]
    fn test_find_missing_returns_none() {
        let catalogue = Catalogue::new();
        assert_that!(catalogue.find("Cookies")).is_none();
    }

    #[test]
    fn test_remove_returns_removed_item() {
        let mut catalogue = Catalogue::new();
        catalogue.add(cookies());

        let removed = catalogue.remove("COOKIES");

        assert_that!(removed).is_some().is_equal_to(cookies());
        assert_that!(catalogue.is_empty()).is_true();
        assert_that!(catalogue.remove("Cookies")).is_none();
    }

    #[test]
    fn test_replace_all_rejects_internal_duplicates() {
        let mut catalogue = Catalogue::new();
        catalogue.add(cookies());

        let res = catalogue.replace_all(vec![
            CatalogueItem::new("Tea", 5),
            CatalogueItem::new("tea", 7),
        ]);

        // The whole batch is rejected and the prior state is untouched
        assert_that!(res).is_err().is_equal_to(DuplicateItemError {
            name: "Tea".to_string(),
        });
        assert_that!(catalogue.len()).is_equal_to(1);
        assert_that!(catalogue.contains("Cookies")).is_true();
    }

    #[test]
    fn test_replace_all_swaps_contents() {
        let mut catalogue = Catalogue::new();
        catalogue.add(cookies());

        let res = catalogue.replace_all(vec![
            CatalogueItem::new("Tea", 5),
            CatalogueItem::new("Coffee", 7),
        ]);

        assert_that!(res).is_ok();
        assert_that!(catalogue.len()).is_equal_to(2);
        assert_that!(catalogue.contains("Cookies")).is_false();
        assert_that!(catalogue.contains("coffee")).is_true();
    }
}
