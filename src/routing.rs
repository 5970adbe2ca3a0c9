//! Application router configuration with protected and unprotected route definitions.

use axum::{
    Json, Router,
    http::StatusCode,
    middleware,
    response::{IntoResponse, Response},
    routing::{get, post},
};

use crate::{
    AppState,
    auth::{auth_guard, post_sign_in, post_sign_out},
    dashboard::get_dashboard,
    endpoints,
    error::ErrorBody,
    transaction::create_transaction_endpoint,
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    let unprotected_routes = Router::new()
        .route(endpoints::SIGN_IN, post(post_sign_in))
        .route(endpoints::SIGN_OUT, post(post_sign_out));

    let protected_routes = Router::new()
        .route(endpoints::DASHBOARD_API, get(get_dashboard))
        .route(
            endpoints::TRANSACTIONS_API,
            post(create_transaction_endpoint),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth_guard));

    protected_routes
        .merge(unprotected_routes)
        .fallback(get_404_not_found)
        .with_state(state)
}

async fn get_404_not_found() -> Response {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorBody {
            error: "The requested resource could not be found.".to_owned(),
        }),
    )
        .into_response()
}

#[cfg(test)]
mod tests {
    use axum::http::StatusCode;
    use axum_test::TestServer;
    use rusqlite::Connection;
    use serde_json::{Value, json};

    use crate::{
        AppState,
        auth::COOKIE_TOKEN,
        dashboard::DashboardResponse,
        endpoints,
        transaction::{RawTransaction, TransactionType, test_utils::raw_transaction},
    };

    use super::build_router;

    fn get_test_server() -> TestServer {
        let conn = Connection::open_in_memory().unwrap();
        let state = AppState::new(conn, "foobar", "America/Sao_Paulo").unwrap();

        TestServer::try_new(build_router(state)).expect("Could not create test server.")
    }

    async fn sign_in(
        server: &TestServer,
        id: &str,
    ) -> axum_extra::extract::cookie::Cookie<'static> {
        let response = server
            .post(endpoints::SIGN_IN)
            .json(&json!({"id": id, "name": "Leonardo", "photo": ""}))
            .await;
        response.assert_status_ok();

        response.cookie(COOKIE_TOKEN)
    }

    #[tokio::test]
    async fn dashboard_requires_sign_in() {
        let server = get_test_server();

        let response = server.get(endpoints::DASHBOARD_API).await;

        response.assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn created_transactions_show_on_dashboard() {
        let server = get_test_server();
        let token = sign_in(&server, "42").await;

        for transaction in [
            raw_transaction("12000", TransactionType::Positive, "2020-04-13"),
            raw_transaction("59", TransactionType::Negative, "2020-04-10"),
        ] {
            server
                .post(endpoints::TRANSACTIONS_API)
                .add_cookie(token.clone())
                .json(&transaction)
                .await
                .assert_status(StatusCode::CREATED);
        }

        let response = server
            .get(endpoints::DASHBOARD_API)
            .add_cookie(token)
            .await;

        response.assert_status_ok();
        let dashboard = response.json::<DashboardResponse>();
        assert_eq!(dashboard.user.name, "Leonardo");
        assert_eq!(dashboard.transactions.len(), 2);
        assert_eq!(dashboard.highlights.entries.amount, "R$\u{a0}12.000,00");
        assert_eq!(dashboard.highlights.expenses.amount, "R$\u{a0}59,00");
        assert_eq!(dashboard.highlights.total.amount, "R$\u{a0}11.941,00");
        assert_eq!(dashboard.highlights.total.last_transaction, "01 à 10 de abril");
    }

    #[tokio::test]
    async fn invalid_transaction_is_bad_request() {
        let server = get_test_server();
        let token = sign_in(&server, "42").await;
        let transaction = RawTransaction {
            name: String::new(),
            ..raw_transaction("10", TransactionType::Positive, "2020-04-13")
        };

        let response = server
            .post(endpoints::TRANSACTIONS_API)
            .add_cookie(token)
            .json(&transaction)
            .await;

        response.assert_status(StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn sign_out_ends_the_session() {
        let server = get_test_server();
        let token = sign_in(&server, "42").await;

        let response = server.post(endpoints::SIGN_OUT).await;
        response.assert_status(StatusCode::NO_CONTENT);
        let deleted_token = response.cookie(COOKIE_TOKEN);

        assert_ne!(deleted_token.value(), token.value());
        server
            .get(endpoints::DASHBOARD_API)
            .add_cookie(deleted_token)
            .await
            .assert_status(StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn unknown_route_is_json_404() {
        let server = get_test_server();

        let response = server.get("/api/nope").await;

        response.assert_status_not_found();
        assert!(response.json::<Value>()["error"].is_string());
    }
}
