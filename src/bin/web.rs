#[tokio::main]
async fn main() -> std::io::Result<()> {
    // install global collector configured based on RUST_LOG env var.
    tracing_subscriber::fmt::init();

    let server = gf_highlight::web::get_server();

    let addr = std::env::var("GF_HIGHLIGHT_ADDR")
        .unwrap_or_else(|_| gf_highlight::web::DEFAULT_ADDR.to_owned());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "serving previews");
    axum::serve(listener, server).await
}
