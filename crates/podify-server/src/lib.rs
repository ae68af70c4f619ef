mod cors;
mod health;

use std::net::SocketAddr;

use axum::Router;
use podify_config::Config;
use tower_http::trace::TraceLayer;

/// Assembled server with all routes and middleware
pub struct Server {
    router: Router,
    listen_address: SocketAddr,
}

impl Server {
    /// Build the server from configuration
    ///
    /// # Errors
    ///
    /// Returns an error if either provider adapter fails to initialize
    pub fn new(config: &Config) -> anyhow::Result<Self> {
        let listen_address = config
            .server
            .listen_address
            .unwrap_or_else(|| SocketAddr::from(([0, 0, 0, 0], 3000)));

        if config.llm.api_key.is_none() {
            tracing::warn!("llm.api_key is not set (OPENAI_API_KEY); summarization requests will be unauthenticated");
        }

        let pipeline = podify_pipeline::build_pipeline(config)?;

        let mut app = Router::new();

        if config.server.health.enabled {
            app = app.route(&config.server.health.path, axum::routing::get(health::health_handler));
        }

        app = app.merge(podify_pipeline::endpoint_router().with_state(pipeline));

        app = app.layer(TraceLayer::new_for_http());

        if let Some(ref cors_config) = config.server.cors {
            app = app.layer(cors::cors_layer(cors_config));
        }

        Ok(Self {
            router: app,
            listen_address,
        })
    }

    /// Get the configured listen address
    #[must_use]
    pub const fn listen_address(&self) -> SocketAddr {
        self.listen_address
    }

    /// Consume the server and return the inner router
    ///
    /// Useful for testing when the caller manages the listener
    pub fn into_router(self) -> Router {
        self.router
    }

    /// Start serving requests
    ///
    /// Blocks until the cancellation token is triggered.
    ///
    /// # Errors
    ///
    /// Returns an error if binding the TCP listener or serving fails
    pub async fn serve(self, shutdown: tokio_util::sync::CancellationToken) -> anyhow::Result<()> {
        let listener = tokio::net::TcpListener::bind(self.listen_address).await?;
        let local_addr = listener.local_addr()?;
        tracing::info!(%local_addr, "server listening");

        axum::serve(listener, self.router)
            .with_graceful_shutdown(async move {
                shutdown.cancelled().await;
                tracing::info!("graceful shutdown initiated");
            })
            .await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use axum::body::Body;
    use http::{Request, StatusCode};
    use tower::ServiceExt;

    use super::*;

    fn config(raw: &str) -> Config {
        Config::from_toml_str(&format!("[tts]\napi_key = \"xi-test\"\n{raw}")).unwrap()
    }

    async fn status(router: Router, method: &str, path: &str) -> StatusCode {
        let request = Request::builder().method(method).uri(path).body(Body::empty()).unwrap();
        router.oneshot(request).await.unwrap().status()
    }

    #[tokio::test]
    async fn health_route_is_mounted_by_default() {
        let server = Server::new(&config("")).unwrap();

        assert_eq!(server.listen_address(), SocketAddr::from(([0, 0, 0, 0], 3000)));
        assert_eq!(status(server.into_router(), "GET", "/health").await, StatusCode::OK);
    }

    #[tokio::test]
    async fn health_route_can_be_moved_or_disabled() {
        let moved = Server::new(&config("[server.health]\npath = \"/healthz\"")).unwrap();
        assert_eq!(status(moved.into_router(), "GET", "/healthz").await, StatusCode::OK);

        let disabled = Server::new(&config("[server.health]\nenabled = false")).unwrap();
        assert_eq!(status(disabled.into_router(), "GET", "/health").await, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn podify_rejects_other_methods() {
        let server = Server::new(&config("")).unwrap();

        assert_eq!(
            status(server.into_router(), "DELETE", "/podify").await,
            StatusCode::METHOD_NOT_ALLOWED
        );
    }
}
