pub mod normalize;
pub mod pipeline;

pub use crate::domain::model::{Poem, PoemEnvelope, WirePoem};
pub use crate::domain::ports::{CatalogSource, ConfigProvider, PoemDataSource};
pub use crate::utils::error::Result;
