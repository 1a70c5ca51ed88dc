use crate::{
    AssetId, BranchId, CSV_MIME, FamilyGroupId, QueryParams, RegistrationNumber,
    UserId,
    requests,
    responses::{
        self, Branch, CultivationReport, FamilyGroupListing, FamilyGroupMembers,
        Farmer, Page,
    },
};
use reqwest::{Method, StatusCode, multipart};
use secrecy::{ExposeSecret, SecretString};
use serde::{Serialize, de::DeserializeOwned};

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
///
/// Every request carries the bearer token, if one has been installed with
/// [`APIClient::with_token`].
#[derive(Clone)]
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
    token: Option<SecretString>,
}

impl APIClient {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            inner_client: reqwest::Client::new(),
            token: None,
        }
    }

    pub fn with_token(mut self, token: SecretString) -> Self {
        self.token = Some(token);
        self
    }

    pub fn has_token(&self) -> bool {
        self.token.is_some()
    }
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}{path}", self.address.trim_end_matches('/'))
    }

    fn request(&self, method: Method, path: &str) -> reqwest::RequestBuilder {
        let request = self.inner_client.request(method, self.format_url(path));
        match &self.token {
            Some(token) => request.bearer_auth(token.expose_secret()),
            None => request,
        }
    }

    async fn get(&self, path: &str, query: &QueryParams) -> ReqwestResult {
        let path = query.append_to(path);
        tracing::debug!(%path, "GET");
        self.request(Method::GET, &path).send().await
    }

    async fn send_json(
        &self,
        method: Method,
        path: &str,
        body: &impl Serialize,
    ) -> ReqwestResult {
        tracing::debug!(%method, %path, "sending");
        self.request(method, path).json(body).send().await
    }

    async fn empty_send(&self, method: Method, path: &str) -> ReqwestResult {
        tracing::debug!(%method, %path, "sending");
        self.request(method, path).send().await
    }

    /// GET `path` with `query` and decode the body.
    pub async fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<T, ClientError> {
        let response = self.get(path, query).await?;
        ok_body(response).await
    }

    /// GET one page of a paginated collection.
    pub async fn get_page<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &QueryParams,
    ) -> Result<Page<T>, ClientError> {
        self.get_json(path, query).await
    }
}

/// Authentication and authorization
impl APIClient {
    pub async fn login(
        &self,
        details: &requests::LoginCredentials,
    ) -> Result<responses::LoginToken, ClientError> {
        let response = self.send_json(Method::POST, "/auth/login", details).await?;
        ok_body(response).await
    }

    /// Check that the installed token is still accepted.
    pub async fn validate_token(&self) -> Result<(), ClientError> {
        let response = self.get("/auth/validate", &QueryParams::new()).await?;
        ok_empty(response).await
    }

    pub async fn register_user(
        &self,
        details: &requests::UserRequest,
    ) -> Result<(), ClientError> {
        let response =
            self.send_json(Method::POST, "/auth/register", details).await?;
        ok_empty(response).await
    }

    /// Whether the current user may manage `item`. An unauthorized response
    /// is reported as `false` rather than an error.
    pub async fn has_permission(&self, item: &str) -> Result<bool, ClientError> {
        let query = QueryParams::new().with("item", item);
        let response =
            self.get("/authorization/has-permission", &query).await?;
        match response.status() {
            StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => Ok(false),
            _ => ok_body(response).await,
        }
    }
}

/// Farmers
impl APIClient {
    pub async fn list_farmers(
        &self,
        query: &QueryParams,
    ) -> Result<Page<Farmer>, ClientError> {
        self.get_page("/farmer", query).await
    }

    pub async fn create_farmer(
        &self,
        details: &requests::FarmerRequest,
    ) -> Result<(), ClientError> {
        let response = self.send_json(Method::POST, "/farmer", details).await?;
        ok_empty(response).await
    }

    pub async fn update_farmer(
        &self,
        registration_number: &RegistrationNumber,
        details: &requests::FarmerRequest,
    ) -> Result<Farmer, ClientError> {
        let path = format!("/farmer/{registration_number}");
        let response = self.send_json(Method::PUT, &path, details).await?;
        ok_body(response).await
    }

    pub async fn get_farmer(
        &self,
        registration_number: &RegistrationNumber,
    ) -> Result<Farmer, ClientError> {
        self.get_json(&format!("/farmer/{registration_number}"), &QueryParams::new())
            .await
    }

}

/// Family groups
impl APIClient {
    pub async fn list_family_groups(
        &self,
        query: &QueryParams,
    ) -> Result<Page<FamilyGroupListing>, ClientError> {
        self.get_page("/family-group", query).await
    }

    pub async fn create_family_group(
        &self,
        details: &requests::CreateFamilyGroup,
    ) -> Result<FamilyGroupListing, ClientError> {
        let response =
            self.send_json(Method::POST, "/family-group", details).await?;
        ok_body(response).await
    }

    /// Rejected by the backend when any crop exceeds the group's total area;
    /// the error text explains which.
    pub async fn update_cultivation(
        &self,
        family_group_id: FamilyGroupId,
        details: &requests::UpdateCultivation,
    ) -> Result<(), ClientError> {
        let path = format!("/family-group/cultivation/{family_group_id}");
        let response = self.send_json(Method::PUT, &path, details).await?;
        ok_empty(response).await
    }

    pub async fn cultivation_by_branch(
        &self,
        branch_id: BranchId,
    ) -> Result<Vec<CultivationReport>, ClientError> {
        self.get_json(
            &format!("/family-group/cultivation/branch/{branch_id}"),
            &QueryParams::new(),
        )
        .await
    }

    pub async fn cultivation_by_technician(
        &self,
        user_id: UserId,
    ) -> Result<Vec<CultivationReport>, ClientError> {
        self.get_json(
            &format!("/family-group/cultivation/user/{user_id}"),
            &QueryParams::new(),
        )
        .await
    }

    /// Hectares of the group's total area not yet assigned to a crop.
    pub async fn free_area(
        &self,
        family_group_id: FamilyGroupId,
    ) -> Result<f64, ClientError> {
        self.get_json(
            &format!("/family-group/free-area/{family_group_id}"),
            &QueryParams::new(),
        )
        .await
    }

    pub async fn change_principal(
        &self,
        family_group_id: FamilyGroupId,
        farmer: &RegistrationNumber,
    ) -> Result<(), ClientError> {
        let path = format!("/family-group/change-principal/{family_group_id}/{farmer}");
        let response = self.empty_send(Method::PUT, &path).await?;
        ok_empty(response).await
    }

    pub async fn add_member(
        &self,
        family_group_id: FamilyGroupId,
        farmer: &RegistrationNumber,
    ) -> Result<(), ClientError> {
        let path = format!("/family-group/add-member/{family_group_id}/{farmer}");
        let response = self.empty_send(Method::PUT, &path).await?;
        ok_empty(response).await
    }

    pub async fn remove_member(
        &self,
        family_group_id: FamilyGroupId,
        farmer: &RegistrationNumber,
    ) -> Result<(), ClientError> {
        let path = format!("/family-group/remove-member/{family_group_id}/{farmer}");
        let response = self.empty_send(Method::PUT, &path).await?;
        ok_empty(response).await
    }

    /// The family group `farmer` belongs to, if any.
    pub async fn family_group_of_member(
        &self,
        farmer: &RegistrationNumber,
    ) -> Result<Option<FamilyGroupMembers>, ClientError> {
        let response = self
            .get(&format!("/family-group/member/{farmer}"), &QueryParams::new())
            .await?;
        ok_optional_body(response).await
    }

}

/// Assets
impl APIClient {
    pub async fn create_asset(
        &self,
        details: &requests::AssetRequest,
    ) -> Result<(), ClientError> {
        let response = self.send_json(Method::POST, "/asset", details).await?;
        ok_empty(response).await
    }

    pub async fn delete_asset(&self, asset_id: AssetId) -> Result<(), ClientError> {
        let response = self
            .empty_send(Method::DELETE, &format!("/asset/{asset_id}"))
            .await?;
        ok_empty(response).await
    }
}

/// Branches
impl APIClient {
    pub async fn create_branch(
        &self,
        details: &requests::BranchRequest,
    ) -> Result<Branch, ClientError> {
        let response = self.send_json(Method::POST, "/branch", details).await?;
        ok_body(response).await
    }

    pub async fn update_branch(
        &self,
        branch_id: BranchId,
        details: &requests::BranchRequest,
    ) -> Result<Branch, ClientError> {
        let path = format!("/branch/{branch_id}");
        let response = self.send_json(Method::PUT, &path, details).await?;
        ok_body(response).await
    }
}

/// Users
impl APIClient {
    pub async fn update_user(
        &self,
        user_id: UserId,
        details: &requests::UserRequest,
    ) -> Result<(), ClientError> {
        let path = format!("/user/{user_id}");
        let response = self.send_json(Method::PUT, &path, details).await?;
        ok_empty(response).await
    }
}

/// How the backend took a bulk import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UploadOutcome {
    Stored,
    /// Accepted and still being processed in the background.
    Processing,
}

/// Bulk import
impl APIClient {
    /// Send `contents` as the `file` part of a multipart form.
    pub async fn upload_csv(
        &self,
        file_name: &str,
        contents: Vec<u8>,
    ) -> Result<UploadOutcome, ClientError> {
        let part = multipart::Part::bytes(contents)
            .file_name(file_name.to_string())
            .mime_str(CSV_MIME)?;
        let form = multipart::Form::new().part("file", part);

        tracing::debug!(%file_name, "uploading csv");
        let response = self
            .request(Method::POST, "/upload")
            .multipart(form)
            .send()
            .await?;

        let accepted = response.status() == StatusCode::ACCEPTED;
        ok_empty(response).await?;
        Ok(if accepted {
            UploadOutcome::Processing
        } else {
            UploadOutcome::Stored
        })
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
    #[error("Unexpected response from the server.")]
    Decode(#[from] serde_json::Error),
}

impl ClientError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(
            self,
            Self::APIError(StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN, _)
        )
    }
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<T, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(response.json::<T>().await?)
}

/// Like [`ok_body`], but an empty successful body decodes to `None`.
pub async fn ok_optional_body<T: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<Option<T>, ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    let text = response.text().await?;
    if text.trim().is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(&text)?))
}

/// Check that a response is OK, discarding any body. Returns a ClientError
/// if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}
