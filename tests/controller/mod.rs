mod auth;
mod payroll;
mod public;
