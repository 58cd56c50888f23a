use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{InvalidPointsError, Points},
    ports::roster::RosterPort,
};
use tower::Service;

use super::{resolve_containing, DomainLogic, Error};

/// Adds spendable points to a member resolved by partial name.
pub struct AwardPointsRequest {
    /// Substring of the member's name, matched case-insensitively
    pub member_query: String,
    /// Points to add; must be strictly positive
    pub delta: i64,
}

#[derive(Debug, PartialEq, Eq)]
pub struct AwardPointsResponse {
    pub member_name: String,
    /// Previous number of spendable points
    pub old_points: u32,
    /// New number of spendable points
    pub new_points: u32,
    /// The counter saturated at the maximum; messaging only
    pub capped: bool,
}

impl<R, C, K> Service<AwardPointsRequest> for DomainLogic<R, C, K>
where
    R: RosterPort + 'static,
    C: 'static,
    K: 'static,
{
    type Response = AwardPointsResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: AwardPointsRequest) -> Self::Future {
        let roster = self.roster.clone();
        Box::pin(async move {
            // Validate the delta before touching the roster
            if req.delta <= 0 {
                return Err(InvalidPointsError::NotPositive(req.delta).into());
            }
            let delta = Points::from_raw(req.delta)?;

            // Resolve the member against a roster snapshot
            let members = roster.members().await?;
            let mut member = resolve_containing(members, &req.member_query)
                .ok_or_else(|| Error::MemberNotFound(req.member_query.clone()))?;

            // Saturating-add, then write the new state back
            let old_points = member.points().value();
            member.add_points(delta);
            let new_points = member.points().value();
            let capped = member.points().is_capped();
            let member_name = member.name().to_string();
            roster.replace(&member_name, member).await?;

            tracing::debug!(member = %member_name, old_points, new_points, capped, "awarded points");
            Ok(AwardPointsResponse {
                member_name,
                old_points,
                new_points,
                capped,
            })
        })
    }
}
