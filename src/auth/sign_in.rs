//! Route handler for starting a session with the profile given by the identity provider.

use axum::{Json, extract::State};
use axum_extra::extract::PrivateCookieJar;
use serde::Deserialize;

use crate::{
    Error,
    auth::{AuthState, set_auth_cookie},
    user::{UserId, UserProfile},
};

/// The profile sent by the client after the identity provider signs the user in.
#[derive(Debug, Deserialize)]
pub struct SignInData {
    /// The identity provider's ID for the user.
    pub id: String,
    /// The user's display name.
    pub name: String,
    /// URL of the user's photo.
    #[serde(default)]
    pub photo: String,
}

/// Handler for sign-in requests via the POST method.
///
/// Sets the auth cookie and echoes the stored profile back to the client.
///
/// # Errors
///
/// Returns [Error::EmptyUserId] if the ID is empty.
pub async fn post_sign_in(
    State(state): State<AuthState>,
    jar: PrivateCookieJar,
    Json(data): Json<SignInData>,
) -> Result<(PrivateCookieJar, Json<UserProfile>), Error> {
    let user = UserProfile {
        id: UserId::new(&data.id)?,
        name: data.name,
        photo: data.photo,
    };

    let jar = set_auth_cookie(jar, user.clone(), state.cookie_duration)
        .inspect_err(|error| tracing::error!("Could not set auth cookie: {error}"))?;

    tracing::info!("User {} signed in", user.id);

    Ok((jar, Json(user)))
}
