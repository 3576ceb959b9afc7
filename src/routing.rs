//! Application router configuration.

use axum::{
    Router,
    response::Redirect,
    routing::{get, post},
};
use tower_http::services::ServeDir;

use crate::{
    AppState, endpoints,
    internal_server_error::get_internal_server_error_page,
    not_found::get_404_not_found,
    toll_record::{
        add_toll_record_endpoint, get_dashboard_page, get_records_page, get_summary_json,
        get_summary_page, get_toll_records_json,
    },
};

/// Return a router with all the app's routes.
pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route(endpoints::ROOT, get(get_index_page))
        .route(endpoints::DASHBOARD_VIEW, get(get_dashboard_page))
        .route(endpoints::RECORDS_VIEW, get(get_records_page))
        .route(endpoints::SUMMARY_VIEW, get(get_summary_page))
        .route(
            endpoints::INTERNAL_ERROR_VIEW,
            get(get_internal_server_error_page),
        )
        .route(
            endpoints::TOLL_RECORDS_API,
            post(add_toll_record_endpoint).get(get_toll_records_json),
        )
        .route(endpoints::SUMMARY_API, get(get_summary_json))
        .nest_service(endpoints::STATIC, ServeDir::new("static/"))
        .fallback(get_404_not_found)
        .with_state(state)
}

/// The root path '/' redirects to the dashboard page.
async fn get_index_page() -> Redirect {
    Redirect::to(endpoints::DASHBOARD_VIEW)
}


#[cfg(test)]
mod router_tests {
    use axum_test::TestServer;
    use rusqlite::Connection;

    use crate::{
        AppState, endpoints,
        routing::build_router,
        toll_record::{TollRecord, TollRecordForm, TollSummary},
    };

    fn get_test_server() -> TestServer {
        let connection =
            Connection::open_in_memory().expect("Could not open in-memory SQLite database");
        let state = AppState::new(connection).expect("Could not create app state");

        TestServer::new(build_router(state))
    }

    fn form(vehicle_number: &str, toll_paid: &str) -> TollRecordForm {
        TollRecordForm {
            vehicle_number: vehicle_number.to_owned(),
            toll_paid: toll_paid.to_owned(),
        }
    }

    #[tokio::test]
    async fn added_records_show_up_in_json_api() {
        let server = get_test_server();

        server
            .post(endpoints::TOLL_RECORDS_API)
            .form(&form("ka01ab1234", "50"))
            .await
            .assert_status(axum::http::StatusCode::CREATED);
        server
            .post(endpoints::TOLL_RECORDS_API)
            .form(&form("MH12CD5678", "75.5"))
            .await
            .assert_status(axum::http::StatusCode::CREATED);

        let records: Vec<TollRecord> = server.get(endpoints::TOLL_RECORDS_API).await.json();
        let vehicle_numbers: Vec<String> = records
            .iter()
            .map(|record| record.vehicle_number.to_string())
            .collect();
        assert_eq!(vehicle_numbers, vec!["KA01AB1234", "MH12CD5678"]);

        let summary: TollSummary = server.get(endpoints::SUMMARY_API).await.json();
        assert_eq!(
            summary,
            TollSummary {
                count: 2,
                total: 125.5
            }
        );
    }

    #[tokio::test]
    async fn duplicate_post_is_rejected() {
        let server = get_test_server();
        server
            .post(endpoints::TOLL_RECORDS_API)
            .form(&form(" ka01ab1234 ", "10"))
            .await;

        server
            .post(endpoints::TOLL_RECORDS_API)
            .form(&form("KA01AB1234", "20"))
            .await
            .assert_status_bad_request();

        let summary: TollSummary = server.get(endpoints::SUMMARY_API).await.json();
        assert_eq!(summary.count, 1);
        assert_eq!(summary.total, 10.0);
    }

    #[tokio::test]
    async fn pages_render() {
        let server = get_test_server();

        for endpoint in [
            endpoints::DASHBOARD_VIEW,
            endpoints::RECORDS_VIEW,
            endpoints::SUMMARY_VIEW,
        ] {
            server.get(endpoint).await.assert_status_ok();
        }
    }

    #[tokio::test]
    async fn serves_stylesheet() {
        let server = get_test_server();

        let response = server.get("/static/main.css").await;

        response.assert_status_ok();
        assert!(response.text().contains(".bg-slate-900"));
    }

    #[tokio::test]
    async fn unknown_route_is_not_found() {
        let server = get_test_server();

        server
            .get("/does/not/exist")
            .await
            .assert_status_not_found();
    }
}
