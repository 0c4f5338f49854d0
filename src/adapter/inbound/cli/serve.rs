//! Handler for the `serve` command.

use std::sync::Arc;

use crate::adapter::inbound::cli::command::ServeArgs;
use crate::adapter::inbound::http;
use crate::error::Result;
use crate::infrastructure::bootstrap::build_context;
use crate::infrastructure::config::settings::Config;

/// Build the service context and serve until interrupted.
pub async fn execute(mut config: Config, args: &ServeArgs) -> Result<()> {
    if let Some(host) = &args.host {
        config.server.host.clone_from(host);
    }
    if let Some(port) = args.port {
        config.server.port = port;
    }
    config.validate()?;
    let addr = config.server.socket_addr()?;

    let context = Arc::new(build_context(&config)?);
    http::serve(context, addr).await
}
