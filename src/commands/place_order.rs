use std::{
    future::Future,
    pin::Pin,
    task::{Context, Poll},
};

use crate::{
    domain::{Member, MembershipPoints, Order, Points},
    ports::{catalogue::CataloguePort, clock::Clock, roster::RosterPort},
};
use chrono::{DateTime, Utc};
use tower::Service;

use super::{resolve_exact, DomainLogic, Error};

/// Records an order against a member and awards points for it.
///
/// The member name must match exactly (case-insensitively): a financial
/// action never runs against a partial-name guess.
pub struct PlaceOrderRequest {
    pub member_name: String,
    pub item_name: String,
    /// Number of units ordered; must be at least 1
    pub quantity: u32,
    /// Order time; the current time when not supplied
    pub timestamp: Option<DateTime<Utc>>,
}

#[derive(Debug, PartialEq, Eq)]
pub struct PlaceOrderResponse {
    /// The member state after the order and both point awards
    pub member: Member,
    /// Spendable points saturated at the maximum; messaging only
    pub points_capped: bool,
    /// Membership points saturated at the maximum; messaging only
    pub membership_capped: bool,
}

impl<R, C, K> Service<PlaceOrderRequest> for DomainLogic<R, C, K>
where
    R: RosterPort + 'static,
    C: CataloguePort + 'static,
    K: Clock + 'static,
{
    type Response = PlaceOrderResponse;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: PlaceOrderRequest) -> Self::Future {
        let roster = self.roster.clone();
        let catalogue = self.catalogue.clone();
        let clock = self.clock.clone();
        Box::pin(async move {
            // Resolve the member by exact name
            let members = roster.members().await?;
            let mut member = resolve_exact(members, &req.member_name)
                .ok_or_else(|| Error::MemberNotFound(req.member_name.clone()))?;

            // Resolve the item, then validate the quantity
            let item = catalogue
                .find_item(&req.item_name)
                .await?
                .ok_or_else(|| Error::ItemNotFound(req.item_name.clone()))?;
            if req.quantity < 1 {
                return Err(Error::InvalidQuantity(req.quantity));
            }

            // Record the order as a snapshot of the item at order time
            let timestamp = req.timestamp.unwrap_or_else(|| clock.now());
            member.add_order(Order::new(item.clone(), req.quantity, timestamp));

            // Award the same amount to both counters, clamped independently
            let award = item.points_per_unit() as u64 * req.quantity as u64;
            member.add_points(Points::saturating_from(award));
            member.add_membership_points(MembershipPoints::saturating_from(award));

            let member_name = member.name().to_string();
            roster.replace(&member_name, member.clone()).await?;

            let points_capped = member.points().is_capped();
            let membership_capped = member.membership_points().is_capped();
            tracing::debug!(
                member = %member_name,
                item = item.name(),
                quantity = req.quantity,
                award,
                points_capped,
                membership_capped,
                "placed order"
            );
            Ok(PlaceOrderResponse {
                member,
                points_capped,
                membership_capped,
            })
        })
    }
}
