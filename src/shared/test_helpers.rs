use std::collections::HashMap;

use axum::extract::Query;
use axum::http::StatusCode;
use axum::routing::get;
use axum::Router;

/// Serve a canned FRED category response on a local port and return the
/// endpoint URL. Requests missing the expected query parameters get a 400
/// so tests catch broken request wiring instead of silently passing.
pub async fn spawn_fred_stub(status: StatusCode, body: String) -> String {
    let handler = move |Query(params): Query<HashMap<String, String>>| async move {
        let well_formed = params.contains_key("api_key")
            && params.get("file_type").map(String::as_str) == Some("json")
            && params.contains_key("category_id");

        if !well_formed {
            return (
                StatusCode::BAD_REQUEST,
                "missing query parameters".to_string(),
            );
        }

        (status, body)
    };

    let app = Router::new().route("/fred/category", get(handler));
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind stub listener");
    let addr = listener.local_addr().expect("Failed to read stub address");

    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("Stub server failed");
    });

    format!("http://{}/fred/category", addr)
}

/// An endpoint URL that refuses connections (the port was bound once and
/// released, so nothing is listening on it).
pub async fn unreachable_endpoint() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("Failed to bind probe listener");
    let addr = listener.local_addr().expect("Failed to read probe address");
    drop(listener);

    format!("http://{}/fred/category", addr)
}
