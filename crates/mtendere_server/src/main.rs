use tracing::info;

mod core;

use crate::core::{router, setup};

#[tokio::main]
async fn main() {
    let state = setup::setup_components()
        .await
        .expect("Failed to set up server components");

    let addr = state.config.bind_addr();
    let app = router::create_router(state).await;

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .expect("Failed to bind server address");

    info!("listening on {}", listener.local_addr().unwrap());
    axum::serve(listener, app).await.unwrap();
}
