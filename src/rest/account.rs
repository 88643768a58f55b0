use anyhow::Context;
use axum::{
    Extension, Json,
    extract::{State, rejection::JsonRejection},
    http::{HeaderMap, HeaderValue, header::AUTHORIZATION},
    response::IntoResponse,
};
use tracing::info;

use crate::app::AppState;
use crate::auth::AuthenticatedUser;
use crate::error::{AppError, AppResult};
use crate::rest::json_rejection;
use crate::rest::types::{AccountDto, JwtToken, LoginRequest};

/// `POST /api/authenticate`: exchanges credentials for a bearer token.
pub async fn authenticate(
    State(state): State<AppState>,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    let Json(login) = payload.map_err(json_rejection)?;

    let user = state
        .user_service
        .authenticate(&login.username, &login.password)
        .await?;

    let token = state
        .jwt_service
        .generate_token(&user.user.login, &user.authorities, login.remember_me)
        .context("failed to sign token")?;

    info!("User {} authenticated", user.user.login);

    let mut headers = HeaderMap::new();
    let bearer = HeaderValue::from_str(&format!("Bearer {}", token))
        .context("signed token is not a valid header value")?;
    headers.insert(AUTHORIZATION, bearer);

    Ok((headers, Json(JwtToken { id_token: token })))
}

/// `GET /api/account`: the user behind the bearer token.
pub async fn get_account(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
) -> AppResult<Json<AccountDto>> {
    // A valid token whose user has since been removed no longer authenticates anyone
    let account = state
        .user_service
        .find_with_authorities(&user.login)
        .await?
        .ok_or(AppError::Unauthorized)?;

    Ok(Json(account.into()))
}
