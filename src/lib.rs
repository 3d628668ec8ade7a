pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use config::{cli::LocalStorage, toml_config::TicketSettings};
pub use core::{
    assigner::{assign_numbers, assign_numbers_randomly},
    engine::RaffleEngine,
    layout::{plan_pages, LayoutConfig, COLUMNS_PER_PAGE, ROWS_PER_PAGE, TICKETS_PER_PAGE},
    render::{TicketRenderer, TicketStyle},
};
pub use domain::model::{Assignment, Page, RunSummary, Slot};
pub use utils::error::{RaffleError, Result};
