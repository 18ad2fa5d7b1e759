// Shared helpers

pub mod storage;
pub mod url;

pub use storage::*;
pub use url::*;
