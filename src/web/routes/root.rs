use axum::response::Redirect;

pub const FRONTEND_ENTRY: &str = "/static/index.html";

pub async fn root_redirect() -> Redirect {
    Redirect::temporary(FRONTEND_ENTRY)
}
