use axum::{
    extract::{Request, State},
    http::header::AUTHORIZATION,
    middleware::Next,
    response::Response,
};
use tracing::debug;

use crate::auth::{AuthenticatedUser, JwtService};
use crate::error::AppError;

/// Rejects requests without a valid bearer token and exposes the caller as an
/// `AuthenticatedUser` extension.
pub async fn auth_middleware(
    State(jwt_service): State<JwtService>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "));

    let token = match auth_header {
        Some(token) => token,
        None => return Err(AppError::Unauthorized),
    };

    let claims = jwt_service.verify_token(token).map_err(|e| {
        debug!("Invalid JWT presented: {}", e);
        AppError::Unauthorized
    })?;

    let user = AuthenticatedUser::from(claims);
    request.extensions_mut().insert(user);

    Ok(next.run(request).await)
}
