pub use super::flight::Entity as Flight;
pub use super::pet::Entity as Pet;
pub use super::user::Entity as User;
