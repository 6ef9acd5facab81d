use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

/// Stored material cost as returned by the API.
#[derive(ToSchema)]
pub struct MaterialCostDoc {
    pub id: i64,
    pub name: String,
    pub cost: f64,
    /// RFC 3339 timestamp.
    pub created_at: String,
    /// RFC 3339 timestamp.
    pub updated_at: String,
}

/// Request body for create and update. On update a present `id` must equal the path id.
#[derive(ToSchema)]
pub struct MaterialCostPayloadDoc {
    pub id: Option<i64>,
    pub name: String,
    pub cost: f64,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::health,
        crate::material_costs::list,
        crate::material_costs::create,
        crate::material_costs::update,
        crate::material_costs::delete,
    ),
    components(
        schemas(
            HealthResponse,
            MaterialCostDoc,
            MaterialCostPayloadDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "costo-materia")
    )
)]
pub struct ApiDoc;
