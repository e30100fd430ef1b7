use healthcamp_core::core::config::Config;
use healthcamp_core::core::openapi::{ApiDoc, SwaggerInfoModifier};
use healthcamp_core::core::{database, middleware};
use healthcamp_core::features::auth::{self, routes as auth_routes, AuthService};
use healthcamp_core::features::camp_directory::{routes as directory_routes, DirectoryService};
use healthcamp_core::features::camps::{routes as camps_routes, CampService};
use healthcamp_core::features::documents::{routes as documents_routes, DocumentService};
use healthcamp_core::features::emergency::{routes as emergency_routes, EmergencyService, GeoapifyClient};
use healthcamp_core::features::feedback::{routes as feedback_routes, FeedbackService};
use healthcamp_core::features::govt_import::{routes as govt_import_routes, GovtImportService};
use healthcamp_core::features::registrations::{routes as registrations_routes, RegistrationService};
use healthcamp_core::features::scraper::{routes as scraper_routes, ScraperService};
use healthcamp_core::features::users::{routes as users_routes, UserProfileService};
use healthcamp_core::features::{districts, guidelines, i18n};
use healthcamp_core::modules::storage::MinIOClient;
use axum::{middleware::from_fn, Router};
use std::sync::Arc;
use tower_http::request_id::{PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use utoipa::Modify;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

fn main() -> anyhow::Result<()> {
    // Build Tokio runtime with configurable worker threads
    let worker_threads = std::env::var("TOKIO_WORKER_THREADS")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or_else(|| {
            std::thread::available_parallelism()
                .map(|p| p.get())
                .unwrap_or(4)
        });

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(worker_threads)
        .enable_all()
        .build()?;

    runtime.block_on(async_main(worker_threads))
}

async fn async_main(worker_threads: usize) -> anyhow::Result<()> {
    // Load .env file BEFORE initializing logger so RUST_LOG is available
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().map_err(|e| anyhow::anyhow!(e))?;
    tracing::info!(
        "Configuration loaded (tokio_worker_threads={}, pid={})",
        worker_threads,
        std::process::id()
    );

    let store = database::open_document_store(&config.store).await?;

    let minio_client = MinIOClient::new(config.minio.clone())
        .await
        .map_err(|e| anyhow::anyhow!("MinIO initialization failed: {}", e))?;
    minio_client
        .ensure_bucket_exists()
        .await
        .map_err(|e| anyhow::anyhow!("MinIO bucket check failed: {}", e))?;
    tracing::info!("MinIO storage initialized");

    // Initialize auth
    let jwks_client = Arc::new(auth::JwksClient::new(
        &config.auth.jwks_url,
        config.auth.jwks_cache_ttl,
    ));
    let jwt_validator = Arc::new(auth::JwtValidator::new(jwks_client, &config.auth));
    tracing::info!("Auth configuration initialized");

    // Services
    let auth_service = Arc::new(AuthService::new());
    let camp_service = Arc::new(CampService::new(store.clone()));
    let profile_service = Arc::new(UserProfileService::new(store.clone()));
    let registration_service = Arc::new(RegistrationService::new(
        store.clone(),
        camp_service.clone(),
        profile_service.clone(),
    ));
    let feedback_service = Arc::new(FeedbackService::new(
        store.clone(),
        camp_service.clone(),
        registration_service.clone(),
    ));
    let document_service = Arc::new(DocumentService::new(
        store.clone(),
        Arc::new(minio_client),
    ));
    if config.geoapify.api_key.is_none() {
        tracing::warn!("GEOAPIFY_API_KEY not set; nearby place search will fail");
    }
    let emergency_service = Arc::new(EmergencyService::new(Arc::new(GeoapifyClient::new(
        &config.geoapify,
    ))));
    let scraper_service = Arc::new(
        ScraperService::new(&config.scraper, store.clone())
            .map_err(|e| anyhow::anyhow!("Scraper initialization failed: {}", e))?,
    );
    let directory_service = Arc::new(DirectoryService::new(store.clone()));
    let govt_import_service = Arc::new(GovtImportService::new(store.clone()));
    tracing::info!("Services initialized");

    // Build application router with dynamic swagger config
    let swagger_modifier = SwaggerInfoModifier {
        title: config.swagger.title.clone(),
        version: config.swagger.version.clone(),
        description: config.swagger.description.clone(),
    };

    let mut openapi = ApiDoc::openapi();
    swagger_modifier.modify(&mut openapi);

    // Build swagger router
    let swagger = if let Some(credentials) = config.swagger.credentials() {
        tracing::info!("Swagger UI basic auth enabled");
        Router::new()
            .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
            .layer(from_fn(middleware::basic_auth_middleware(Arc::new(
                credentials,
            ))))
    } else {
        tracing::info!("Swagger UI basic auth disabled (no credentials configured)");
        Router::new().merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", openapi))
    };

    // Protected routes (require JWT authentication)
    let protected_routes = Router::new()
        .merge(auth_routes::protected_routes(auth_service))
        .merge(users_routes::routes(profile_service))
        .merge(camps_routes::protected_routes(camp_service.clone()))
        .merge(registrations_routes::routes(registration_service))
        .merge(feedback_routes::routes(feedback_service))
        .merge(documents_routes::routes(document_service))
        .merge(govt_import_routes::routes(govt_import_service))
        .route_layer(axum::middleware::from_fn_with_state(
            jwt_validator,
            middleware::auth_middleware,
        ));

    // Simple health check endpoint (no auth required)
    async fn health_check() -> axum::http::StatusCode {
        axum::http::StatusCode::OK
    }
    let health_route = Router::new().route("/health", axum::routing::get(health_check));

    // Public routes (no authentication required)
    let public_routes = Router::new()
        .merge(camps_routes::public_routes(camp_service))
        .merge(directory_routes::routes(directory_service))
        .merge(emergency_routes::routes(emergency_service))
        .merge(districts::routes::routes())
        .merge(guidelines::routes::routes())
        .merge(i18n::routes::routes())
        .merge(scraper_routes::routes(scraper_service));

    let app = Router::new()
        .merge(swagger)
        .merge(protected_routes)
        .merge(public_routes)
        .merge(health_route)
        .layer(middleware::cors_layer(
            config.app.cors_allowed_origins.clone(),
        ))
        // Propagate X-Request-Id to response headers
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(middleware::MakeSpanWithRequestId)
                .on_request(DefaultOnRequest::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        // Generate X-Request-Id using UUID v7 (or use client-provided one)
        .layer(SetRequestIdLayer::x_request_id(middleware::MakeRequestUuid));

    // Start server
    let addr = config.app.server_address();
    let socket_addr: std::net::SocketAddr = addr
        .parse()
        .map_err(|e| anyhow::anyhow!("Invalid address: {}", e))?;

    let socket = socket2::Socket::new(
        socket2::Domain::for_address(socket_addr),
        socket2::Type::STREAM,
        Some(socket2::Protocol::TCP),
    )?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nodelay(true)?;

    #[cfg(target_os = "linux")]
    {
        let keepalive = socket2::TcpKeepalive::new()
            .with_time(std::time::Duration::from_secs(60))
            .with_interval(std::time::Duration::from_secs(10))
            .with_retries(3);
        socket.set_tcp_keepalive(&keepalive)?;
    }
    #[cfg(not(target_os = "linux"))]
    {
        let keepalive = socket2::TcpKeepalive::new().with_time(std::time::Duration::from_secs(60));
        socket.set_tcp_keepalive(&keepalive)?;
    }

    socket.set_nonblocking(true)?;
    socket.bind(&socket_addr.into())?;
    socket.listen(1024)?;

    let listener = tokio::net::TcpListener::from_std(socket.into())?;
    tracing::info!("Server listening on http://{}", addr);
    tracing::info!("Swagger UI available at http://{}/swagger-ui/", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
