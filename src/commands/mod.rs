use std::sync::Arc;

use crate::domain::Member;

pub mod award_membership_points;
pub mod award_points;
pub mod place_order;

/// Orchestrates the loyalty use-cases over the roster and catalogue ports.
///
/// Each use-case is exposed as a [`tower::Service`] implementation on this
/// struct, one request type per operation.
pub struct DomainLogic<R, C, K> {
    roster: Arc<R>,
    catalogue: Arc<C>,
    clock: Arc<K>,
}

impl<R, C, K> DomainLogic<R, C, K> {
    pub fn new(roster: Arc<R>, catalogue: Arc<C>, clock: Arc<K>) -> Self {
        Self {
            roster,
            catalogue,
            clock,
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("roster port error: {0:?}")]
    Roster(#[from] crate::ports::roster::Error),
    #[error("catalogue port error: {0:?}")]
    Catalogue(#[from] crate::ports::catalogue::Error),

    /// Name resolution found zero matches in the roster
    #[error("no member found matching {0:?}")]
    MemberNotFound(String),
    /// Order placement referenced an item absent from the catalogue
    #[error("item {0:?} not found in the catalogue")]
    ItemNotFound(String),
    /// Order quantity must be a positive integer
    #[error("order quantity must be at least 1, got {0}")]
    InvalidQuantity(u32),
    #[error(transparent)]
    InvalidPoints(#[from] crate::domain::InvalidPointsError),
}

/// Forgiving lookup for point awards: case-insensitive substring containment
/// on the full name, first match in roster order.
fn resolve_containing(members: Vec<Member>, query: &str) -> Option<Member> {
    let query = query.to_lowercase();
    members
        .into_iter()
        .find(|member| member.name().to_lowercase().contains(&query))
}

/// Strict lookup for order placement: case-insensitive exact match, so a
/// partial name can never credit the wrong member on a financial action.
fn resolve_exact(members: Vec<Member>, name: &str) -> Option<Member> {
    members
        .into_iter()
        .find(|member| member.name().eq_ignore_ascii_case(name))
}
