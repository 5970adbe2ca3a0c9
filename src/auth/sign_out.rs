//! Sign-out route handler that invalidates the authentication cookie.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use axum_extra::extract::PrivateCookieJar;

use crate::auth::invalidate_auth_cookie;

/// Invalidate the auth cookie.
pub async fn post_sign_out(jar: PrivateCookieJar) -> Response {
    let jar = invalidate_auth_cookie(jar);
    tracing::info!("User signed out");

    (jar, StatusCode::NO_CONTENT).into_response()
}
