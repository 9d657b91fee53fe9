use crate::docs::ApiDoc;
use crate::middleware::pipeline::apply_pipeline;
use crate::modules::users::router::init_users_router;
use crate::state::AppState;
use axum::Router;
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as _};
use utoipa_swagger_ui::SwaggerUi;

pub fn init_router(state: AppState) -> Router {
    let routes = Router::new()
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .nest("/users", init_users_router())
        .with_state(state.clone());

    apply_pipeline(routes, &state)
}
