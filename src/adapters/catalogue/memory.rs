use crate::{
    domain::{Catalogue, CatalogueItem},
    ports::catalogue::{CataloguePort, Error},
};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory catalogue adapter wrapping the domain collection.
#[derive(Clone, Debug, Default)]
pub struct MemoryCatalogue {
    inner: Arc<Mutex<Catalogue>>,
}

impl MemoryCatalogue {
    pub fn new(catalogue: Catalogue) -> Self {
        Self {
            inner: Arc::new(Mutex::new(catalogue)),
        }
    }
}

#[async_trait::async_trait]
impl CataloguePort for MemoryCatalogue {
    async fn find_item(&self, name: &str) -> Result<Option<CatalogueItem>, Error> {
        Ok(self.inner.lock()?.find(name))
    }

    async fn add_item(&self, item: CatalogueItem) -> Result<bool, Error> {
        Ok(self.inner.lock()?.add(item))
    }

    async fn remove_item(&self, name: &str) -> Result<Option<CatalogueItem>, Error> {
        Ok(self.inner.lock()?.remove(name))
    }

    async fn replace_items(&self, items: Vec<CatalogueItem>) -> Result<(), Error> {
        self.inner.lock()?.replace_all(items)?;
        Ok(())
    }

    async fn contains_item(&self, name: &str) -> Result<bool, Error> {
        Ok(self.inner.lock()?.contains(name))
    }
}

/// Erased [`PoisonError`]
///
/// `PoisonError` keeps the `MutexGuard` internally, which is not send. Thus we erase the error
/// and only keep the string representation instead.
#[derive(Debug, thiserror::Error)]
#[error("poison error: {0}")]
pub struct ErasedPoisonError(String);

/// We need to create a custom `From` implementation here for an error that's specific to this
/// adapter.
impl<T> From<PoisonError<T>> for Error {
    fn from(err: PoisonError<T>) -> Self {
        Self::Adapter(Box::new(ErasedPoisonError(err.to_string())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use speculoos::prelude::*;

    #[tokio::test]
    async fn test_add_then_find() {
        let catalogue = MemoryCatalogue::default();

        let added = catalogue
            .add_item(CatalogueItem::new("Cookies", 10))
            .await
            .unwrap();
        assert_that!(added).is_true();

        let res = catalogue.find_item("cookies").await;
        assert_that!(res)
            .is_ok()
            .is_some()
            .is_equal_to(CatalogueItem::new("Cookies", 10));
    }

    #[tokio::test]
    async fn test_replace_items_duplicate_batch() {
        let catalogue = MemoryCatalogue::default();
        catalogue
            .add_item(CatalogueItem::new("Cookies", 10))
            .await
            .unwrap();

        let res = catalogue
            .replace_items(vec![
                CatalogueItem::new("Tea", 5),
                CatalogueItem::new("TEA", 5),
            ])
            .await;

        assert_that!(res)
            .is_err()
            .matches(|err| matches!(err, Error::Duplicate(_)));
        // Prior contents survive a rejected batch
        let contains = catalogue.contains_item("Cookies").await.unwrap();
        assert_that!(contains).is_true();
    }
}
