mod config;
pub mod legacy;
mod repos;
mod system;

pub use config::Config;
pub use repos::{IEventRepo, ISwingDateRepo, InMemoryEventRepo, InMemorySwingDateRepo, Repos};
use std::sync::Arc;
pub use system::{FixedSys, ISys, RealSys};
use tracing::info;

#[derive(Clone)]
pub struct ListingsContext {
    pub repos: Repos,
    pub config: Config,
    pub sys: Arc<dyn ISys>,
}

impl ListingsContext {
    pub fn create_inmemory(config: Config) -> Self {
        let sys: Arc<dyn ISys> = match config.today {
            Some(today) => Arc::new(FixedSys::new(today)),
            None => Arc::new(RealSys {}),
        };
        Self {
            repos: Repos::create_inmemory(),
            config,
            sys,
        }
    }
}

/// Will setup the infrastructure context given the environment
pub fn setup_context() -> ListingsContext {
    let context = ListingsContext::create_inmemory(Config::new());
    info!("Listings context created for {}", context.sys.today());
    context
}
