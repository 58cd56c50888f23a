use std::collections::BTreeSet;
use std::fmt;

use super::{MembershipPoints, Order, Points};

/// An allergen recorded against a member
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Allergen(String);

impl Allergen {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Allergen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A member of the loyalty program
///
/// The central aggregate: identity and contact fields, the order history,
/// and the two point counters. Identity for matching purposes is the name
/// alone ([`Member::is_same_member`]); full equality compares every field.
///
/// Both counters are clamped to [`super::MAX_POINTS`] on every mutation;
/// an over-cap award is absorbed, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    name: String,
    phone: String,
    email: String,
    address: String,
    allergens: BTreeSet<Allergen>,
    orders: Vec<Order>,
    points: Points,
    membership_points: MembershipPoints,
}

impl Member {
    /// Every field is required.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        name: impl Into<String>,
        phone: impl Into<String>,
        email: impl Into<String>,
        address: impl Into<String>,
        allergens: BTreeSet<Allergen>,
        orders: Vec<Order>,
        points: Points,
        membership_points: MembershipPoints,
    ) -> Self {
        Self {
            name: name.into(),
            phone: phone.into(),
            email: email.into(),
            address: address.into(),
            allergens,
            orders,
            points,
            membership_points,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    pub fn allergens(&self) -> &BTreeSet<Allergen> {
        &self.allergens
    }

    /// Returns a copy of the order history.
    pub fn orders(&self) -> Vec<Order> {
        self.orders.clone()
    }

    pub fn points(&self) -> Points {
        self.points
    }

    pub fn membership_points(&self) -> MembershipPoints {
        self.membership_points
    }

    /// Appends an order to the history.
    ///
    /// Recording a purchase never awards points by itself; the award is a
    /// separate step so the two stay independently testable and skippable.
    pub fn add_order(&mut self, order: Order) {
        self.orders.push(order);
    }

    /// Saturating-add to the spendable counter.
    pub fn add_points(&mut self, delta: Points) {
        self.points = self.points.saturating_add(delta);
    }

    /// Saturating-add to the lifetime membership counter.
    pub fn add_membership_points(&mut self, delta: MembershipPoints) {
        self.membership_points = self.membership_points.saturating_add(delta);
    }

    /// Weaker notion of equality: same name means same member.
    pub fn is_same_member(&self, other: &Member) -> bool {
        self.name == other.name
    }
}
