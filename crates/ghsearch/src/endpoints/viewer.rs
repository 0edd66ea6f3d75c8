use super::setup::GithubClient;
use crate::error::{Error, Result};
use crate::models::ViewerData;

pub const VIEWER_LOGIN: &str = r#"
query ViewerLogin {
  viewer {
    login
  }
}
"#;

impl GithubClient {
    /// Login of the user the token belongs to.
    pub async fn viewer_login(&self) -> Result<String> {
        let data: ViewerData = self.execute(VIEWER_LOGIN, serde_json::json!({})).await?;
        data.viewer
            .map(|viewer| viewer.login)
            .ok_or_else(|| Error::Malformed("response has no `viewer`".to_string()))
    }
}
