pub mod app_user;
pub mod assignment;
pub mod member;
pub mod revoked_token;
pub mod salary_component;

pub mod prelude {
    pub use super::app_user::Entity as AppUser;
    pub use super::assignment::Entity as Assignment;
    pub use super::member::Entity as Member;
    pub use super::revoked_token::Entity as RevokedToken;
    pub use super::salary_component::Entity as SalaryComponent;
}
