pub mod admin;
pub mod animal;
pub mod auth;
pub mod breeding;
pub mod farm;
pub mod production;
pub mod theme;

pub use admin::AdminCommands;
pub use animal::AnimalCommands;
pub use auth::AuthCommands;
pub use breeding::BreedingCommands;
pub use farm::FarmCommands;
pub use production::ProductionCommands;
pub use theme::ThemeCommands;
