mod cache;
mod loader;
mod source;

pub use cache::DatasetCache;
pub use loader::{load_csv_bytes, load_csv_path, resolve_repo_path};
pub use source::DatasetSource;
