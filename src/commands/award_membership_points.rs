use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{MembershipPoints, Tier},
    ports::roster::RosterPort,
};
use tower::Service;

use super::{resolve_containing, DomainLogic, Error};

/// Adds lifetime membership points to a member resolved by partial name.
///
/// May upgrade the member's tier as a side effect of the new total.
pub struct AwardMembershipPointsRequest {
    /// Substring of the member's name, matched case-insensitively
    pub member_query: String,
    /// Membership points to add; must be non-negative
    pub delta: i64,
}

#[derive(Debug, PartialEq, Eq)]
pub struct AwardMembershipPointsResponse {
    pub member_name: String,
    /// Tier derived from the new total
    pub tier: Tier,
    pub old_membership_points: u32,
    pub new_membership_points: u32,
    /// The counter saturated at the maximum; messaging only
    pub capped: bool,
}

impl<R, C, K> Service<AwardMembershipPointsRequest> for DomainLogic<R, C, K>
where
    R: RosterPort + 'static,
    C: 'static,
    K: 'static,
{
    type Response = AwardMembershipPointsResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: AwardMembershipPointsRequest) -> Self::Future {
        let roster = self.roster.clone();
        Box::pin(async move {
            // Negative deltas fail here; zero is a permitted no-op
            let delta = MembershipPoints::from_raw(req.delta)?;

            let members = roster.members().await?;
            let mut member = resolve_containing(members, &req.member_query)
                .ok_or_else(|| Error::MemberNotFound(req.member_query.clone()))?;

            let old_membership_points = member.membership_points().value();
            member.add_membership_points(delta);
            let new_membership_points = member.membership_points().value();
            let capped = member.membership_points().is_capped();
            let tier = member.membership_points().tier();
            let member_name = member.name().to_string();
            roster.replace(&member_name, member).await?;

            tracing::debug!(
                member = %member_name,
                old_membership_points,
                new_membership_points,
                %tier,
                capped,
                "awarded membership points"
            );
            Ok(AwardMembershipPointsResponse {
                member_name,
                tier,
                old_membership_points,
                new_membership_points,
                capped,
            })
        })
    }
}
