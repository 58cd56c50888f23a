mod catalogue;
mod member;
mod order;
mod points;

pub use catalogue::{Catalogue, CatalogueItem, DuplicateItemError};
pub use member::{Allergen, Member};
pub use order::Order;
pub use points::{InvalidPointsError, MembershipPoints, Points, Tier, MAX_POINTS};
