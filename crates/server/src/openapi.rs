use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
pub struct ItemDoc { pub id: i32, pub name: String, pub description: String }

#[derive(ToSchema)]
pub struct ErrorDoc { pub error: String }

#[derive(ToSchema)]
pub struct CreateItemInputDoc {
    pub name: String,
    pub description: Option<String>,
}

#[derive(ToSchema)]
pub struct UpdateItemInputDoc {
    pub name: Option<String>,
    pub description: Option<String>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::routes::items::list,
        crate::routes::items::create,
        crate::routes::items::get,
        crate::routes::items::update,
        crate::routes::items::delete,
    ),
    components(
        schemas(
            HealthResponse,
            ItemDoc,
            ErrorDoc,
            CreateItemInputDoc,
            UpdateItemInputDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "items")
    )
)]
pub struct ApiDoc;
