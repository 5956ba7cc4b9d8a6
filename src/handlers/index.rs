use axum::response::Html;

/// Handler for GET /
/// Serves the calculator page, embedded at compile time
pub async fn serve_index() -> Html<&'static str> {
    Html(include_str!("../../static/index.html"))
}
