pub mod auth;
pub mod component;
pub mod member;
pub mod payroll;
pub mod public;
