//! Binary entry point: build the configured repository, bind the catalog
//! service, and hand the facade to the terminal UI.
use anyhow::Context;
use book_browser::logging::start_logging;
use book_browser::{run_app, App, AppConfig, BookServiceFacade, CatalogService, RepositoryFactory};
use tracing::info;

/// Only an unsupported repository kind (or a terminal failure) stops start-up;
/// logging problems are reported and skipped.
fn main() -> anyhow::Result<()> {
    let config = AppConfig::default();
    start_logging(config.log_path.as_deref());
    info!(repository = %config.repository_kind, "starting book browser");

    let repository = RepositoryFactory::create(&config.repository_kind)
        .context("failed to build book repository")?;
    let service = CatalogService::install(repository);

    let mut app = App::new(BookServiceFacade::new(service));
    run_app(&mut app)
}
