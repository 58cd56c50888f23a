use crate::domain::Member;

/// Ordered member storage
///
/// The commands resolve a member against the snapshot returned by
/// [`RosterPort::members`], compute a new member state, and write it back
/// with [`RosterPort::replace`]. The replace step is the serialization point
/// of that read-modify-write; concurrent callers need external mutual
/// exclusion around the whole sequence.
#[mockall::automock]
#[async_trait::async_trait]
pub trait RosterPort {
    /// Members in roster order.
    async fn members(&self) -> Result<Vec<Member>, Error>;

    /// Replaces the member with the given exact name by the updated state.
    async fn replace(&self, name: &str, member: Member) -> Result<(), Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Domain-level error when the replace target is not in the roster
    #[error("member {0:?} does not exist")]
    MemberDoesNotExist(String),

    /// Concrete adapter errors
    ///
    /// This could represent any errors from a concrete adapter that is not part of the domain
    /// model, such as connectivity, configuration, or permission errors.
    #[error("adapter error: {0:?}")]
    Adapter(Box<dyn std::error::Error + Send + Sync>),
}
