pub mod calculation;
pub mod generation;
pub mod user;

pub use calculation::KitCalculation;
pub use generation::PhoneGeneration;
pub use user::{History, UserDatabase, UserRecord};
