pub mod api;
pub mod gate;
pub mod limit;
