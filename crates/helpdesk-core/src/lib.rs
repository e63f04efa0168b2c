pub mod config;
pub mod corpus;
pub mod error;
pub mod types;

pub use config::HelpdeskConfig;
pub use corpus::FaqCorpus;
pub use error::{HelpdeskError, Result};
pub use types::*;
