//! REST resources mapping HTTP verbs onto the services.

pub mod account;
pub mod adress_entity;
pub mod authority;
pub mod headers;
pub mod management;
pub mod types;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};

use crate::error::AppError;

pub(crate) fn json_rejection(rejection: JsonRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

pub(crate) fn path_rejection(rejection: PathRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}

pub(crate) fn query_rejection(rejection: QueryRejection) -> AppError {
    AppError::BadRequest(rejection.body_text())
}
