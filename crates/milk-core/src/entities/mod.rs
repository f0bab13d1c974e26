//! Entity structs for every CeialMilk REST resource.
//!
//! Rust field names are English; `#[serde(rename)]` keeps the Portuguese wire
//! names the API uses. Each resource has a read struct plus the create/update
//! payloads accepted by the server.

mod animal;
mod assistant;
mod batch;
mod breeding;
mod farm;
mod production;
mod user;

pub use animal::{Animal, AnimalCreate, AnimalUpdate, BatchMove, Count};
pub use assistant::{
    CodeGeneration, DevStudioRequest, ExecuteRequest, ExecuteResult, GeneratedChanges,
    InterpretRequest, Interpretation,
};
pub use batch::{Batch, BatchCreate, BatchUpdate};
pub use breeding::{
    Birth, BirthCreate, Covering, CoveringCreate, DryOff, DryOffCreate, Gestation, Heat,
    HeatCreate, Lactation, LactationCreate, PregnancyCheck, PregnancyCheckCreate,
};
pub use farm::{Farm, FarmCreate, FarmUpdate};
pub use production::{MilkProduction, MilkProductionCreate, MilkProductionUpdate, ProductionSummary};
pub use user::{RegisteredUser, Registration, User, UserCreate, UserPage, UserUpdate};
