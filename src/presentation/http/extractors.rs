// src/presentation/http/extractors.rs
use crate::{
    application::{dto::Audience, error::ApplicationError},
    presentation::http::state::HttpState,
};
use axum::{Extension, extract::FromRequestParts, http::request::Parts};
use headers::{Authorization, HeaderMapExt, authorization::Bearer};

use super::error::HttpError;

/// Request carrying a valid admin bearer token.
#[derive(Debug, Clone, Copy)]
pub struct AdminAuthenticated;

/// Who is calling a storefront endpoint. A bearer token, when present, must
/// be the admin token.
#[derive(Debug, Clone, Copy)]
pub struct Caller(pub Audience);

async fn app_state<S: Send + Sync>(parts: &mut Parts, state: &S) -> Result<HttpState, HttpError> {
    let Extension(app_state) = Extension::<HttpState>::from_request_parts(parts, state)
        .await
        .map_err(|_| HttpError::internal("HttpState extension missing from router"))?;
    Ok(app_state)
}

fn check_admin(app_state: &HttpState, token: &str) -> Result<(), HttpError> {
    app_state
        .services
        .authorize_admin(token)
        .map_err(HttpError::from_error)
}

impl<S> FromRequestParts<S> for AdminAuthenticated
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        let header = parts
            .headers
            .typed_get::<Authorization<Bearer>>()
            .ok_or_else(|| {
                HttpError::from_error(ApplicationError::unauthorized(
                    "missing Authorization header",
                ))
            })?;

        check_admin(&app_state, header.token())?;
        Ok(Self)
    }
}

impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = HttpError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = app_state(parts, state).await?;
        match parts.headers.typed_get::<Authorization<Bearer>>() {
            Some(header) => {
                check_admin(&app_state, header.token())?;
                Ok(Self(Audience::Admin))
            }
            None => Ok(Self(Audience::Storefront)),
        }
    }
}
