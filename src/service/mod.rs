//! Store-backed services: the crate's operational surface.
//!
//! Each service is generic over the store traits it consumes and over the
//! [`crate::clock::Clock`]. Authorization is the boundary's concern — the
//! caller has already authenticated the user and checked the role before
//! invoking anything here, with one exception: reconciliation itself is
//! only defined for `Role::User` accounts, so the reconciliation service
//! treats other roles as `NotFound`.

pub mod attendance;
pub mod holiday;
pub mod leave;
pub mod reconciliation;
