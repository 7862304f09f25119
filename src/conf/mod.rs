mod config;
mod datasets;
mod scenario;
mod server;

pub use config::Config;
pub use datasets::DatasetsConfig;
pub use scenario::ScenarioConfig;
pub use server::ServerConfig;
