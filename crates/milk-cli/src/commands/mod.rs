pub mod admin;
pub mod animal;
pub mod auth;
pub mod breeding;
pub mod dispatch;
pub mod farm;
pub mod production;
pub mod shared;
pub mod theme;
