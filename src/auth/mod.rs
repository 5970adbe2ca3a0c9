mod cookie;
mod middleware;
mod sign_in;
mod sign_out;
mod token;

pub use cookie::DEFAULT_COOKIE_DURATION;
pub(crate) use cookie::{invalidate_auth_cookie, set_auth_cookie};
pub use middleware::{AuthState, auth_guard};
pub use sign_in::post_sign_in;
pub use sign_out::post_sign_out;

#[cfg(test)]
pub(crate) use cookie::COOKIE_TOKEN;
