pub mod auth;
pub mod users;

#[derive(utoipa::ToSchema)]
pub struct ErrorResponse {
    pub error: String,
}
