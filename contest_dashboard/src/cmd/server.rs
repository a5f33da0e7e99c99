use crate::modules::handlers::{
    account::search_account, liveness, past::search_past, platform::list_platforms, readiness,
    trend::contest_trend, upcoming::upcoming_contests,
};
use anyhow::{Context, Result};
use axum::{extract::Extension, routing, Router, Server};
use clap::Args;
use contest_dashboard_libs::clist::core::{ClistCore, ContestCatalog};
use http::header::CONTENT_TYPE;
use std::{env, net::SocketAddr, sync::Arc};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};

#[derive(Debug, Args)]
pub struct ServerArgs {
    #[arg(long)]
    port: Option<u16>,
}

pub async fn run(args: ServerArgs) -> Result<()> {
    let api_url = env::var("CLIST_API_URL").unwrap_or_else(|_| {
        tracing::warn!("CLIST_API_URL environment variable is not set. Default value `https://clist.by/api/v4` will be used.");
        String::from("https://clist.by/api/v4")
    });
    let username = env::var("CLIST_USERNAME").with_context(|| {
        let message = "CLIST_USERNAME environment variable must be set";
        tracing::error!(message);
        format!("{}", message)
    })?;
    let api_key = env::var("CLIST_API_KEY").with_context(|| {
        let message = "CLIST_API_KEY environment variable must be set";
        tracing::error!(message);
        format!("{}", message)
    })?;

    tracing::info!("Connect to CLIST API at {}", api_url);
    let core = ClistCore::new(&api_url, &username, &api_key).with_context(|| {
        let message = "couldn't create CLIST client instance. check the value of CLIST_API_URL environment variable.";
        tracing::error!(message);
        format!("{}", message)
    })?;

    core.ping().await.with_context(|| {
        let message = "CLIST API is not available. check your credentials and network.";
        tracing::error!(message);
        message
    })?;

    let app = create_router(core);
    let port = match args.port {
        Some(port) => port,
        None => {
            tracing::warn!("API server will be launched at default port number 8000");
            8000u16
        }
    };
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Server start at port {}", port);
    Server::bind(&addr)
        .serve(app.into_make_service())
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Failed to bind server.");

    Ok(())
}

fn create_router(core: impl ContestCatalog + Sync + Send + 'static) -> Router {
    let origin =
        env::var("FRONTEND_ORIGIN_URL").unwrap_or(String::from("http://localhost:5173"));

    Router::new()
        .route("/api/upcoming", routing::get(upcoming_contests))
        .route("/api/trend", routing::get(contest_trend))
        .route("/api/past", routing::get(search_past))
        .route("/api/platforms", routing::get(list_platforms))
        .route("/api/accounts", routing::get(search_account))
        .route("/api/liveness", routing::get(liveness))
        .route("/api/readiness", routing::get(readiness))
        .layer(Extension(Arc::new(core)))
        .layer(
            CorsLayer::new()
                .allow_origin(AllowOrigin::exact(origin.parse().unwrap()))
                .allow_methods(Any)
                .allow_headers(vec![CONTENT_TYPE]),
        )
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler.");
    };

    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    tracing::info!("SIGINT signal received, starting graceful shutdown.");
}
