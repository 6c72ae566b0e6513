//! Repository layer: thin sea-orm query wrappers returning `DbErr`.
//!
//! Repositories are generic over [`sea_orm::ConnectionTrait`] so the same
//! code runs against the pooled connection and inside the transactions that
//! cascade deletes and batch assignment writes require.

pub mod app_user;
pub mod assignment;
pub mod component;
pub mod member;
pub mod revoked_token;
