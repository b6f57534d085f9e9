//! Category listing endpoint

use tracing::debug;

use crate::api::types::{CategoriesResponse, Json};

/// GET /v1/categories
pub async fn list_categories() -> Json<CategoriesResponse> {
    debug!("Listing category tables");

    Json(CategoriesResponse::current())
}
