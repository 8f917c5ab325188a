//! Server construction and middleware wiring.

mod config;

pub use config::ServerConfig;

use std::sync::Arc;

use actix_web::dev::{Server, ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::{App, HttpServer, web};
use tracing::{info, warn};

use user_search::domain::UserSearchService;
use user_search::domain::ports::{StaticUserDataset, UserDataset};
use user_search::inbound::http::{HttpState, search_users};
use user_search::outbound::access_tokens::HashedTokenVerifier;
use user_search::outbound::dataset::FileUserDataset;
use user_search::{SearchServerSettings, Trace};

fn build_app(
    http_state: web::Data<HttpState>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(http_state)
        .wrap(Trace)
        .service(search_users)
}

/// Translate loaded settings into a [`ServerConfig`].
///
/// With `cache_dataset` enabled the document is parsed once here and a
/// broken file aborts startup; otherwise it is read on every request.
///
/// # Errors
/// Returns [`std::io::Error`] when the cached dataset cannot be loaded.
pub async fn config_from_settings(
    settings: &SearchServerSettings,
) -> std::io::Result<ServerConfig> {
    let file_dataset = FileUserDataset::new(settings.dataset_path());
    let dataset: Arc<dyn UserDataset> = if settings.cache_dataset {
        let users = file_dataset
            .load_users()
            .await
            .map_err(|err| std::io::Error::other(err.to_string()))?;
        let cached = StaticUserDataset::new(users);
        if cached.is_empty() {
            warn!(path = %file_dataset.path().display(), "cached user dataset holds no users");
        } else {
            info!(
                path = %file_dataset.path().display(),
                count = cached.len(),
                "user dataset cached"
            );
        }
        Arc::new(cached)
    } else {
        info!(path = %file_dataset.path().display(), "user dataset read per request");
        Arc::new(file_dataset)
    };

    let tokens = HashedTokenVerifier::new(settings.access_tokens());
    if tokens.is_empty() {
        warn!("no access tokens configured; every search will be rejected");
    } else {
        info!(count = tokens.len(), "access tokens configured");
    }

    Ok(ServerConfig::new(settings.bind_addr(), dataset).with_tokens(Arc::new(tokens)))
}

/// Construct an Actix HTTP server from the provided configuration.
///
/// # Returns
/// A [`Server`] that must be awaited to drive the listener.
///
/// # Errors
/// Propagates [`std::io::Error`] when binding the socket fails.
pub fn create_server(config: ServerConfig) -> std::io::Result<Server> {
    let ServerConfig {
        bind_addr,
        dataset,
        tokens,
    } = config;
    let search = Arc::new(UserSearchService::new(dataset));
    let http_state = web::Data::new(HttpState::new(search, tokens));

    let server = HttpServer::new(move || build_app(http_state.clone()))
        .bind(bind_addr)?
        .run();
    info!(%bind_addr, "user search server listening");
    Ok(server)
}
