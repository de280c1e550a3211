use axum::{Router, middleware};
use grove_core::{GroveService, create_repositories};
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

use crate::{
    config::Config,
    http::{
        health::routes::health_routes,
        messages::routes::message_routes,
        server::{ApiError, AppState, middleware::identity::identity_middleware},
    },
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Grove API",
        description = "Compliment-message service: water trees, grow fruit"
    ),
    tags((name = "messages", description = "Message box operations"))
)]
struct ApiDoc;

pub struct App {
    router: Router,
    listener: TcpListener,
}

impl App {
    pub async fn new(config: Config) -> Result<Self, ApiError> {
        let repositories = create_repositories(config.database.clone().into()).await?;
        let service: GroveService = repositories.into();
        let state = AppState::new(service);

        let (router, openapi) = OpenApiRouter::with_openapi(ApiDoc::openapi())
            .merge(message_routes())
            .split_for_parts();

        let router = router
            .merge(health_routes())
            .merge(Scalar::with_url("/docs", openapi))
            .layer(middleware::from_fn(identity_middleware))
            .layer(CorsLayer::permissive())
            .with_state(state);

        let listener = TcpListener::bind(("0.0.0.0", config.server.api_port)).await?;
        info!(port = config.server.api_port, "listener bound");

        Ok(Self { router, listener })
    }

    pub async fn start(self) -> Result<(), ApiError> {
        axum::serve(self.listener, self.router).await?;
        Ok(())
    }
}
