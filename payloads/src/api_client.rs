use crate::{ActivityId, PLACEHOLDER_IMAGE, PhotoId, requests, responses};
use reqwest::StatusCode;
use serde::Serialize;

type ReqwestResult = Result<reqwest::Response, reqwest::Error>;

/// An API client for interfacing with the backend.
pub struct APIClient {
    pub address: String,
    pub inner_client: reqwest::Client,
}

/// Helper methods for http actions
impl APIClient {
    fn format_url(&self, path: &str) -> String {
        format!("{}/api/{path}", &self.address)
    }

    async fn post(&self, path: &str, body: &impl Serialize) -> ReqwestResult {
        let request = self.inner_client.post(self.format_url(path)).json(body);

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }

    async fn empty_get(&self, path: &str) -> ReqwestResult {
        let request = self.inner_client.get(self.format_url(path));

        #[cfg(target_arch = "wasm32")]
        let request = request.fetch_credentials_include();

        request.send().await
    }
}

/// Methods on the backend API
impl APIClient {
    pub async fn list_activities(
        &self,
    ) -> Result<Vec<responses::Activity>, ClientError> {
        let response = self.empty_get("activities").await?;
        ok_body(response).await
    }

    pub async fn get_activity(
        &self,
        activity_id: &ActivityId,
    ) -> Result<responses::Activity, ClientError> {
        let response =
            self.empty_get(&format!("activities/{activity_id}")).await?;
        ok_body(response).await
    }

    /// Create an activity under the client-generated id in the payload.
    pub async fn create_activity(
        &self,
        details: &requests::ActivityPayload,
    ) -> Result<(), ClientError> {
        let response = self.post("create_activity", details).await?;
        ok_empty(response).await
    }

    /// Update the activity identified by the payload's id.
    pub async fn update_activity(
        &self,
        details: &requests::ActivityPayload,
    ) -> Result<(), ClientError> {
        let response = self.post("update_activity", details).await?;
        ok_empty(response).await
    }

    /// Get a user's profile, including their photo gallery.
    pub async fn get_profile(
        &self,
        username: &str,
    ) -> Result<responses::Profile, ClientError> {
        let response = self.empty_get(&format!("profile/{username}")).await?;
        ok_body(response).await
    }

    pub async fn upload_photo(
        &self,
        details: &requests::UploadPhoto,
    ) -> Result<responses::Photo, ClientError> {
        let response = self.post("upload_photo", details).await?;
        ok_body(response).await
    }

    /// Promote a photo to the profile's main photo.
    pub async fn set_main_photo(
        &self,
        photo_id: &PhotoId,
    ) -> Result<(), ClientError> {
        let response = self.post("set_main_photo", photo_id).await?;
        ok_empty(response).await
    }

    pub async fn delete_photo(
        &self,
        photo_id: &PhotoId,
    ) -> Result<(), ClientError> {
        let response = self.post("delete_photo", photo_id).await?;
        ok_empty(response).await
    }

    /// Resolve a relative image path to a fetchable URL.
    /// Use this for `<img src>` attributes in the UI; an absent path yields
    /// the placeholder asset.
    pub fn photo_src(&self, path: Option<&str>) -> String {
        match path {
            Some(path) => format!("{}{path}", self.address),
            None => PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ClientError {
    /// An unhandled API error to display, containing response text.
    #[error("{1}")]
    APIError(StatusCode, String),
    #[error("Network error. Please check your connection.")]
    Network(#[from] reqwest::Error),
}

/// Deserialize a successful request into the desired type, or return an
/// appropriate error.
pub async fn ok_body<T: serde::de::DeserializeOwned>(
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

/// Check that an empty response is OK, returning a ClientError if not.
pub async fn ok_empty(response: reqwest::Response) -> Result<(), ClientError> {
    if !response.status().is_success() {
        return Err(ClientError::APIError(
            response.status(),
            response.text().await?,
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> APIClient {
        APIClient {
            address: "http://localhost:3000".to_string(),
            inner_client: reqwest::Client::new(),
        }
    }

    #[test]
    fn photo_src_prefixes_relative_paths() {
        assert_eq!(
            client().photo_src(Some("/images/abc123.jpg")),
            "http://localhost:3000/images/abc123.jpg"
        );
    }

    #[test]
    fn photo_src_falls_back_to_placeholder() {
        assert_eq!(client().photo_src(None), PLACEHOLDER_IMAGE);
    }
}
