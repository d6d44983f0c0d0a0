//! CLI command implementations, one file per command.

mod analyze;
mod compare;
mod http_server;
mod init;
mod mcp_server;
mod network;

pub use analyze::analyze;
pub use compare::compare;
pub use http_server::http_server;
pub use init::init;
pub use mcp_server::mcp_server;
pub use network::network;

use std::sync::Arc;

use tracing::info;

use seilens_analysis::AnalysisService;
use seilens_chain::{ChainDataSource, MockChainSource, RestChainSource};

use crate::config::CliConfig;
use crate::error::CliResult;

/// Build the shared analysis pipeline from configuration.
///
/// `offline` swaps the live REST source for the deterministic sample
/// source; the swap is visible to callers through the `live_data` flag on
/// every result.
pub(crate) fn build_service(config: &CliConfig, offline: bool) -> CliResult<Arc<AnalysisService>> {
    let source: Arc<dyn ChainDataSource> = if offline {
        info!("Offline mode - serving deterministic sample data");
        Arc::new(MockChainSource::with_sample_data())
    } else {
        Arc::new(RestChainSource::new(config.chain.clone())?)
    };

    let service = AnalysisService::new(source, config.service_config())?;
    Ok(Arc::new(service))
}
