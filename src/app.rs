use anyhow::Result;
use axum::{
    Router,
    http::{
        HeaderName, HeaderValue, Method,
        header::{AUTHORIZATION, CONTENT_TYPE, LINK, LOCATION},
    },
    middleware,
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::warn;

use crate::auth::{JwtService, auth_middleware};
use crate::config::AppConfig;
use crate::rest::headers::{AlertHeaders, X_TOTAL_COUNT};
use crate::rest::{account, adress_entity, authority, management};
use crate::services::{AdressEntityService, AuthorityService, UserService};

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub jwt_service: JwtService,
    pub alerts: AlertHeaders,
    pub adress_entity_service: AdressEntityService,
    pub authority_service: AuthorityService,
    pub user_service: UserService,
}

impl AppState {
    pub fn new(db: DatabaseConnection, config: &AppConfig) -> Result<Self> {
        let (alert, params) = config.alert_header_names()?;

        Ok(Self {
            jwt_service: JwtService::new(
                &config.jwt_secret,
                config.jwt_expiration_hours,
                config.jwt_remember_me_hours,
            ),
            alerts: AlertHeaders::new(config.application_name.clone(), alert, params),
            adress_entity_service: AdressEntityService::new(db.clone()),
            authority_service: AuthorityService::new(db.clone()),
            user_service: UserService::new(db.clone(), config.bcrypt_cost),
            db,
        })
    }
}

pub fn build_router(state: AppState, config: &AppConfig) -> Router {
    let protected = Router::new()
        .route(
            "/api/adress-entities",
            get(adress_entity::get_all_adress_entities)
                .post(adress_entity::create_adress_entity)
                .put(adress_entity::update_adress_entity),
        )
        .route(
            "/api/adress-entities/{id}",
            get(adress_entity::get_adress_entity)
                .patch(adress_entity::partial_update_adress_entity)
                .delete(adress_entity::delete_adress_entity),
        )
        .route(
            "/api/authorities",
            get(authority::get_all_authorities).post(authority::create_authority),
        )
        .route(
            "/api/authorities/{name}",
            get(authority::get_authority).delete(authority::delete_authority),
        )
        .route("/api/account", get(account::get_account))
        .route_layer(middleware::from_fn_with_state(
            state.jwt_service.clone(),
            auth_middleware,
        ));

    let public = Router::new()
        .route("/api/authenticate", post(account::authenticate))
        .route("/management/health", get(management::health));

    let cors = cors_layer(&config.cors_origins, &state.alerts);

    Router::new()
        .merge(protected)
        .merge(public)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

fn cors_layer(cors_origins: &str, alerts: &AlertHeaders) -> CorsLayer {
    let exposed: Vec<HeaderName> = vec![
        AUTHORIZATION,
        LINK,
        LOCATION,
        X_TOTAL_COUNT,
        alerts.alert_name().clone(),
        alerts.params_name().clone(),
    ];

    if cors_origins.trim() == "*" {
        // Allow any origin (DANGEROUS - only for development!)
        warn!("🚨 CORS set to accept ANY origin (*) - only use in development!");
        return CorsLayer::permissive().expose_headers(exposed);
    }

    let origins: Vec<HeaderValue> = cors_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(origins)
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
            Method::PUT,
            Method::PATCH,
            Method::DELETE,
        ])
        .allow_headers([
            CONTENT_TYPE,
            AUTHORIZATION,
            HeaderName::from_static("x-requested-with"),
        ])
        .expose_headers(exposed)
        .allow_credentials(true)
}
