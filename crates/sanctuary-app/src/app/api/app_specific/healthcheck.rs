use salvo::http::StatusCode;
use salvo::prelude::Text;
use salvo::{Response, Router, handler};

/// ## Summary
/// GET /api/app/healthcheck - Liveness probe; answers `OK` while the server runs.
#[handler]
async fn healthcheck(res: &mut Response) {
    res.status_code(StatusCode::OK);
    res.render(Text::Plain("OK"));
}

#[must_use]
pub fn routes() -> Router {
    Router::with_path("healthcheck").get(healthcheck)
}
