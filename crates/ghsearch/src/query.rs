/// Qualifier that biases search toward repository name and organization.
pub const SCOPE_QUALIFIER: &str = "in:name,org";

/// Append the scope qualifier to free text typed by the user.
pub fn build_search_query(text: &str) -> String {
    format!("{} {}", text, SCOPE_QUALIFIER)
}
