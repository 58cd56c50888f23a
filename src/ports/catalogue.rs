use crate::domain::{CatalogueItem, DuplicateItemError};

/// Access to the shared item catalogue
///
/// Mirrors the operations of [`crate::domain::Catalogue`]; implementations
/// own the collection and uphold its case-insensitive name uniqueness.
#[mockall::automock]
#[async_trait::async_trait]
pub trait CataloguePort {
    /// Case-insensitive lookup returning a snapshot of the item.
    async fn find_item(&self, name: &str) -> Result<Option<CatalogueItem>, Error>;

    /// Inserts the item; `false` means a same-named item already exists.
    async fn add_item(&self, item: CatalogueItem) -> Result<bool, Error>;

    /// Removes and returns the first case-insensitive match.
    async fn remove_item(&self, name: &str) -> Result<Option<CatalogueItem>, Error>;

    /// Atomically replaces the whole catalogue, all-or-nothing.
    async fn replace_items(&self, items: Vec<CatalogueItem>) -> Result<(), Error>;

    async fn contains_item(&self, name: &str) -> Result<bool, Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A replacement batch was not internally unique
    #[error(transparent)]
    Duplicate(#[from] DuplicateItemError),

    /// Concrete adapter errors
    ///
    /// This could represent any errors from a concrete adapter that is not part of the domain
    /// model, such as connectivity, configuration, or permission errors.
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
