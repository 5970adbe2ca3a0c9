//! The API endpoints URIs.

/// The route for starting a session.
pub const SIGN_IN: &str = "/api/sign_in";
/// The route for the client to sign out the current user.
pub const SIGN_OUT: &str = "/api/sign_out";
/// The route for the signed-in user's dashboard summary.
pub const DASHBOARD_API: &str = "/api/dashboard";
/// The route to add transactions.
pub const TRANSACTIONS_API: &str = "/api/transactions";

// These tests are here so that we know when we call `Uri::from_shared` it will not panic.
#[cfg(test)]
mod endpoints_tests {
    use axum::http::Uri;

    use crate::endpoints;

    fn assert_endpoint_is_valid_uri(uri: &str) {
        assert!(uri.parse::<Uri>().is_ok());
    }

    #[test]
    fn endpoints_are_valid_uris() {
        assert_endpoint_is_valid_uri(endpoints::SIGN_IN);
        assert_endpoint_is_valid_uri(endpoints::SIGN_OUT);
        assert_endpoint_is_valid_uri(endpoints::DASHBOARD_API);
        assert_endpoint_is_valid_uri(endpoints::TRANSACTIONS_API);
    }
}
