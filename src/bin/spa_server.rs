use axum::{
    Router,
    body::Body,
    http::{Request, Uri},
    middleware::map_request,
};
use std::net::SocketAddr;
use tower_http::{cors::CorsLayer, services::ServeDir, trace::TraceLayer};

// Serves the built frontend bundle with SPA fallback routing: paths without a
// file extension are client-side routes and get index.html.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let dir = std::env::var("STATIC_DIR").unwrap_or_else(|_| "./build".to_string());
    let port = std::env::var("STATIC_PORT")
        .ok()
        .and_then(|p| p.parse::<u16>().ok())
        .unwrap_or(3000);

    let app = Router::new()
        .fallback_service(ServeDir::new(&dir))
        .layer(map_request(rewrite_spa_path))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("serving {} on {}", dir, addr);

    axum::serve(tokio::net::TcpListener::bind(addr).await?, app).await?;

    Ok(())
}

async fn rewrite_spa_path(mut request: Request<Body>) -> Request<Body> {
    let path = request.uri().path();
    let last_segment = path.rsplit('/').next().unwrap_or_default();
    if path != "/" && !last_segment.contains('.') {
        *request.uri_mut() = Uri::from_static("/index.html");
    }
    request
}
