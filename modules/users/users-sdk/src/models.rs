//! Public models for the `users` module.
//!
//! Transport-agnostic; the REST layer owns the JSON shape.

use time::OffsetDateTime;
use uuid::Uuid;

/// A stored user record.
///
/// `privy_id` is the external identifier issued by the sign-in provider and is
/// unique across the table. The remaining attributes are carried through the
/// lookup untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: Uuid,
    pub privy_id: String,
    pub email: Option<String>,
    pub display_name: Option<String>,
    pub avatar_url: Option<String>,
    pub created_at: OffsetDateTime,
    pub updated_at: OffsetDateTime,
}
