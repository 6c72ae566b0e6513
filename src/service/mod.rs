//! Business logic services.
//!
//! The payroll aggregator and allowance resolver implement the take-home-pay
//! computation; the assignment service owns the validate-then-write rules
//! for linking members to components; member/component services cover
//! catalog and directory CRUD with atomic cascade deletes; the auth service
//! issues and revokes bearer tokens.

pub mod allowance;
pub mod assignment;
pub mod auth;
pub mod component;
pub mod member;
pub mod payroll;
