use serde::{Deserialize, Serialize};

/// `data` payload of the viewer document.
#[derive(Debug, Serialize, Deserialize)]
pub struct ViewerData {
    pub viewer: Option<Viewer>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Viewer {
    pub login: String,
}
