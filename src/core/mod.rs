pub mod assigner;
pub mod engine;
pub mod layout;
pub mod render;
pub mod roster;

pub use crate::domain::model::{Assignment, Page, RunSummary, Slot};
pub use crate::domain::ports::{ConfigProvider, Storage};
pub use crate::utils::error::Result;
