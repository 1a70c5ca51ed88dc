use payloads::{
    APIClient, ClientError, FamilyGroupId, QueryParams, QueryValue,
    RegistrationNumber, UploadOutcome, requests,
};
use reqwest::StatusCode;
use secrecy::SecretString;
use serde_json::json;
use wiremock::{
    Mock, MockServer, ResponseTemplate,
    matchers::{
        body_json, body_string_contains, header, header_regex, method, path,
        query_param, query_param_is_missing,
    },
};

fn farmer_json(reg: u32) -> serde_json::Value {
    json!({
        "registrationNumber": reg.to_string(),
        "name": format!("Farmer {reg}"),
        "status": "ACTIVE",
        "ownedArea": 1.0,
        "leasedArea": 0.5
    })
}

fn client(server: &MockServer) -> APIClient {
    APIClient::new(server.uri()).with_token(SecretString::from("abc123"))
}

#[tokio::test]
async fn first_page_request_uses_zero_based_index() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/farmer"))
        .and(query_param("page", "0"))
        .and(query_param("size", "10"))
        .and(header("authorization", "Bearer abc123"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": (1..=10).map(farmer_json).collect::<Vec<_>>(),
            "totalPages": 5,
            "totalElements": 47
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = QueryParams::new().with("page", 0).with("size", 10);
    let page = client(&server).list_farmers(&query).await.unwrap();

    assert_eq!(page.content.len(), 10);
    assert_eq!(page.total_pages, 5);
    assert_eq!(page.total_elements, 47);
}

#[tokio::test]
async fn null_filters_are_not_sent() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/family-group"))
        .and(query_param("page", "1"))
        .and(query_param_is_missing("search"))
        .and(query_param_is_missing("typeId"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "content": [],
            "totalPages": 0,
            "totalElements": 0
        })))
        .expect(1)
        .mount(&server)
        .await;

    let query = QueryParams::new()
        .with("page", 1)
        .with("search", None::<String>)
        .with("typeId", QueryValue::Null);
    let page = client(&server).list_family_groups(&query).await.unwrap();
    assert!(page.content.is_empty());
}

#[tokio::test]
async fn non_success_status_surfaces_body_text() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/family-group/cultivation/4"))
        .respond_with(
            ResponseTemplate::new(400)
                .set_body_string("Canola area exceeds the group's available area."),
        )
        .mount(&server)
        .await;

    let error = client(&server)
        .update_cultivation(FamilyGroupId(4), &Default::default())
        .await
        .unwrap_err();

    match error {
        ClientError::APIError(status, text) => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert!(text.contains("Canola"));
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn login_posts_credentials_without_token() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/auth/login"))
        .and(body_json(json!({"username": "ana", "password": "secret"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"token": "jwt"})))
        .mount(&server)
        .await;

    let client = APIClient::new(format!("{}/", server.uri()));
    let token = client
        .login(&requests::LoginCredentials {
            username: "ana".into(),
            password: "secret".into(),
        })
        .await
        .unwrap();
    assert_eq!(token.token, "jwt");
}

#[tokio::test]
async fn rejected_token_is_unauthorized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/auth/validate"))
        .respond_with(ResponseTemplate::new(401).set_body_string("Invalid token"))
        .mount(&server)
        .await;

    let error = client(&server).validate_token().await.unwrap_err();
    assert!(error.is_unauthorized());
}

#[tokio::test]
async fn permission_check_reads_boolean_body() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/authorization/has-permission"))
        .and(query_param("item", "User"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!(true)))
        .mount(&server)
        .await;

    assert!(client(&server).has_permission("User").await.unwrap());
}

#[tokio::test]
async fn farmer_without_family_group_yields_none() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/family-group/member/77"))
        .respond_with(ResponseTemplate::new(200))
        .mount(&server)
        .await;

    let group = client(&server)
        .family_group_of_member(&RegistrationNumber::from("77"))
        .await
        .unwrap();
    assert!(group.is_none());
}

#[tokio::test]
async fn membership_edits_use_put_without_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/family-group/change-principal/3/12"))
        .respond_with(ResponseTemplate::new(200).set_body_string("Principal updated"))
        .expect(1)
        .mount(&server)
        .await;

    client(&server)
        .change_principal(FamilyGroupId(3), &RegistrationNumber::from("12"))
        .await
        .unwrap();
}

#[tokio::test]
async fn csv_upload_sends_a_multipart_file_part() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .and(header("authorization", "Bearer abc123"))
        .and(header_regex("content-type", "^multipart/form-data; boundary="))
        .and(body_string_contains(r#"name="file"; filename="farmers.csv""#))
        .and(body_string_contains("Content-Type: text/csv"))
        .and(body_string_contains("1042;Ana Souza"))
        .respond_with(ResponseTemplate::new(202).set_body_string("Processing in background."))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = client(&server)
        .upload_csv("farmers.csv", b"1042;Ana Souza\n".to_vec())
        .await
        .unwrap();
    assert_eq!(outcome, UploadOutcome::Processing);
}

#[tokio::test]
async fn rejected_csv_upload_reports_server_text() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(400).set_body_string("Send a .csv file."))
        .mount(&server)
        .await;

    let error = client(&server)
        .upload_csv("farmers.csv", Vec::new())
        .await
        .unwrap_err();

    match error {
        ClientError::APIError(status, text) => {
            assert_eq!(status, StatusCode::BAD_REQUEST);
            assert_eq!(text, "Send a .csv file.");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn synchronous_csv_import_is_stored() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/upload"))
        .respond_with(ResponseTemplate::new(201))
        .mount(&server)
        .await;

    let outcome = client(&server)
        .upload_csv("farmers.csv", b"1042;Ana Souza\n".to_vec())
        .await
        .unwrap();
    assert_eq!(outcome, UploadOutcome::Stored);
}
