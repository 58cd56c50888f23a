use crate::{
    domain::Member,
    ports::roster::{Error, RosterPort},
};
use std::sync::{Arc, Mutex, PoisonError};

/// In-memory roster holding members in insertion order.
#[derive(Clone, Debug, Default)]
pub struct MemoryRoster {
    members: Arc<Mutex<Vec<Member>>>,
}

impl MemoryRoster {
    pub fn new(members: Vec<Member>) -> Self {
        Self {
            members: Arc::new(Mutex::new(members)),
        }
    }

    /// Appends a member at the end of the roster.
    pub fn add(&self, member: Member) -> Result<(), Error> {
        self.members.lock()?.push(member);
        Ok(())
    }
}

#[async_trait::async_trait]
impl RosterPort for MemoryRoster {
    async fn members(&self) -> Result<Vec<Member>, Error> {
        Ok(self.members.lock()?.clone())
    }

    async fn replace(&self, name: &str, member: Member) -> Result<(), Error> {
        let mut members = self.members.lock()?;
        match members.iter_mut().find(|existing| existing.name() == name) {
            Some(entry) => {
                *entry = member;
                Ok(())
            }
            None => Err(Error::MemberDoesNotExist(name.to_string())),
        }
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
