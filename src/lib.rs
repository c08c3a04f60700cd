pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod provider;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::cli::CliConfig;

pub use config::ProviderConfig;
pub use core::pipeline::PoemLookup;
pub use domain::model::{Poem, PoemEnvelope, WirePoem};
pub use domain::ports::{CatalogSource, PoemDataSource};
pub use provider::{Diagnostic, PoetryProvider};
pub use utils::error::{CatalogError, Result};
