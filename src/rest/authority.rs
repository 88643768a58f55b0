use anyhow::Context;
use axum::{
    Extension, Json,
    extract::{
        Path, State,
        rejection::{JsonRejection, PathRejection},
    },
    http::{HeaderValue, StatusCode, header::LOCATION},
    response::IntoResponse,
};
use tracing::debug;

use crate::app::AppState;
use crate::auth::{AuthenticatedUser, ROLE_ADMIN};
use crate::error::{AppError, AppResult};
use crate::rest::types::AuthorityDto;
use crate::rest::{json_rejection, path_rejection};

const ENTITY_NAME: &str = "authority";
const BASE_URL: &str = "/api/authorities";
const MAX_NAME_LENGTH: usize = 50;

/// `GET /api/authorities`
pub async fn get_all_authorities(
    State(state): State<AppState>,
) -> AppResult<Json<Vec<AuthorityDto>>> {
    let authorities = state.authority_service.find_all().await?;
    Ok(Json(authorities.into_iter().map(Into::into).collect()))
}

/// `GET /api/authorities/{name}`
pub async fn get_authority(
    State(state): State<AppState>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<Json<AuthorityDto>> {
    let Path(name) = path.map_err(path_rejection)?;

    let found = state
        .authority_service
        .find_one(&name)
        .await?
        .ok_or(AppError::NotFound)?;

    Ok(Json(found.into()))
}

/// `POST /api/authorities`, admin only.
pub async fn create_authority(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    payload: Result<Json<AuthorityDto>, JsonRejection>,
) -> AppResult<impl IntoResponse> {
    user.require_authority(ROLE_ADMIN)?;
    let Json(dto) = payload.map_err(json_rejection)?;
    debug!("REST request to save Authority: {:?}", dto);

    let name = dto.name.trim();
    if name.is_empty() || name.chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::bad_request_alert(
            format!("Authority name must be between 1 and {} characters", MAX_NAME_LENGTH),
            ENTITY_NAME,
            "namesize",
        ));
    }

    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(AppError::bad_request_alert(
            "Authority name may only contain ASCII letters, digits and underscores",
            ENTITY_NAME,
            "namepattern",
        ));
    }

    if state.authority_service.exists(name).await? {
        return Err(AppError::bad_request_alert(
            "Authority already exists",
            ENTITY_NAME,
            "idexists",
        ));
    }

    let location = HeaderValue::from_str(&format!("{}/{}", BASE_URL, name))
        .context("authority name produced an invalid Location header")?;

    let created = state.authority_service.create(name).await?;

    let mut headers = state.alerts.entity_created(ENTITY_NAME, &created.name);
    headers.insert(LOCATION, location);

    Ok((StatusCode::CREATED, headers, Json(AuthorityDto::from(created))))
}

/// `DELETE /api/authorities/{name}`, admin only.
pub async fn delete_authority(
    State(state): State<AppState>,
    Extension(user): Extension<AuthenticatedUser>,
    path: Result<Path<String>, PathRejection>,
) -> AppResult<impl IntoResponse> {
    user.require_authority(ROLE_ADMIN)?;
    let Path(name) = path.map_err(path_rejection)?;
    debug!("REST request to delete Authority {}", name);

    if !state.authority_service.delete(&name).await? {
        return Err(AppError::NotFound);
    }

    Ok((
        StatusCode::NO_CONTENT,
        state.alerts.entity_deleted(ENTITY_NAME, &name),
    ))
}
