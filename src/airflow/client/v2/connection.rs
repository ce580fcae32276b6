use reqwest::Method;

use super::model::connection::{Connection, ConnectionCollection, ConnectionTest};
use super::{ApiError, PageParams, API_PATH, CREATE, DELETE, GET, LIST, UPDATE};
use crate::airflow::client::request::ApiRequest;
use crate::airflow::client::response::Operation;

pub fn get_connections(page: &PageParams) -> Operation<ConnectionCollection, ApiError> {
    let request = page.apply(ApiRequest::new(Method::GET, API_PATH).path("connections"));
    Operation::new(request, LIST)
}

pub fn get_connection(connection_id: &str) -> Operation<Connection, ApiError> {
    let request = ApiRequest::new(Method::GET, API_PATH)
        .path("connections")
        .param(connection_id);
    Operation::new(request, GET)
}

pub fn post_connection(body: &Connection) -> Operation<Connection, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("connections")
        .json(body);
    Operation::new(request, CREATE)
}

pub fn patch_connection(
    connection_id: &str,
    body: &Connection,
    update_mask: &[String],
) -> Operation<Connection, ApiError> {
    let request = ApiRequest::new(Method::PATCH, API_PATH)
        .path("connections")
        .param(connection_id)
        .query("update_mask", update_mask)
        .json(body);
    Operation::new(request, UPDATE)
}

pub fn delete_connection(connection_id: &str) -> Operation<(), ApiError> {
    let request = ApiRequest::new(Method::DELETE, API_PATH)
        .path("connections")
        .param(connection_id);
    Operation::new(request, DELETE)
}

/// Tries the connection from the webserver without storing it. Disabled unless the
/// server sets `test_connection = Enabled`.
pub fn test_connection(body: &Connection) -> Operation<ConnectionTest, ApiError> {
    let request = ApiRequest::new(Method::POST, API_PATH)
        .path("connections/test")
        .json(body);
    Operation::new(request, UPDATE)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airflow::client::testing::blocking_client;
    use crate::airflow::model::Maybe;
    use mockito::Matcher;
    use serde_json::json;

    #[test]
    fn create_then_delete() {
        let mut server = mockito::Server::new();
        let created = server
            .mock("POST", "/api/v1/connections")
            .match_body(Matcher::Json(
                json!({"connection_id": "pg", "conn_type": "postgres", "password": "s3cret"}),
            ))
            .with_status(200)
            .with_body(r#"{"connection_id": "pg", "conn_type": "postgres", "host": null}"#)
            .create();
        let deleted = server
            .mock("DELETE", "/api/v1/connections/pg")
            .with_status(204)
            .create();

        let client = blocking_client(&server);
        let body = Connection {
            connection_id: Maybe::Present("pg".to_string()),
            conn_type: Maybe::Present("postgres".to_string()),
            password: Maybe::Present("s3cret".to_string()),
            ..Connection::default()
        };
        let connection = client
            .execute(post_connection(&body))
            .unwrap()
            .unwrap()
            .into_body()
            .unwrap();
        assert_eq!(connection.host, Maybe::Null);
        assert!(connection.password.is_absent());

        let response = client.execute(delete_connection("pg")).unwrap().unwrap();
        assert!(response.is_success());
        assert_eq!(response.into_result(), Ok(None));

        created.assert();
        deleted.assert();
    }

    #[test]
    fn connection_test_result() {
        let mut server = mockito::Server::new();
        server
            .mock("POST", "/api/v1/connections/test")
            .with_status(200)
            .with_body(r#"{"status": false, "message": "could not connect to server"}"#)
            .create();

        let body = Connection {
            connection_id: Maybe::Present("pg".to_string()),
            conn_type: Maybe::Present("postgres".to_string()),
            ..Connection::default()
        };
        let result = blocking_client(&server)
            .execute(test_connection(&body))
            .unwrap()
            .unwrap()
            .into_body()
            .unwrap();
        assert_eq!(result.status, Maybe::Present(false));
    }

    #[test]
    fn listing_pages() {
        let mut server = mockito::Server::new();
        let mock = server
            .mock("GET", "/api/v1/connections")
            .match_query("limit=2&offset=4&order_by=-connection_id")
            .with_status(200)
            .with_body(r#"{"connections": [{"connection_id": "a"}, {"connection_id": "b"}], "total_entries": 6}"#)
            .create();

        let page = PageParams {
            limit: Some(2),
            offset: Some(4),
            order_by: Some("-connection_id".to_string()),
        };
        let collection = blocking_client(&server)
            .execute(get_connections(&page))
            .unwrap()
            .unwrap()
            .into_body()
            .unwrap();

        mock.assert();
        assert_eq!(collection.connections.len(), 2);
        assert_eq!(collection.total_entries, 6);
    }
}
