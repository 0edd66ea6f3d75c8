//! Launcher preferences and endpoint selection.
//!
//! Preferences come from a TOML file and are then overridden by environment
//! variables. They are validated before any request is made; a token is
//! only required once a keyword selects its endpoint.

use std::fmt;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::debug;

pub const GITHUB_HOSTNAME: &str = "github.com";
pub const GITHUB_GRAPHQL_URL: &str = "https://api.github.com/graphql";

const PREFERENCES_FILE: &str = "preferences.toml";

/// Environment variables and the preference each one overrides.
const ENV_OVERRIDES: [(&str, Field); 5] = [
    ("GHSEARCH_GITHUB", Field::Github),
    ("GITHUB_TOKEN", Field::GithubToken),
    ("GHSEARCH_GHE", Field::Ghe),
    ("GHE_HOSTNAME", Field::GheHostname),
    ("GHE_TOKEN", Field::GheToken),
];

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("missing required preference: {0}")]
    MissingField(&'static str),
    #[error("invalid value for preference {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },
    #[error("keyword {0:?} matches neither the github nor the ghe preference")]
    UnknownKeyword(String),
    #[error("failed to read preferences file {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse preferences file {path}: {source}")]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy)]
enum Field {
    Github,
    GithubToken,
    Ghe,
    GheHostname,
    GheToken,
}

/// Preferences as written by the user, before validation.
#[derive(Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawPreferences {
    github: Option<String>,
    github_token: Option<String>,
    ghe: Option<String>,
    ghe_hostname: Option<String>,
    ghe_token: Option<String>,
}

impl RawPreferences {
    fn set(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Github => &mut self.github,
            Field::GithubToken => &mut self.github_token,
            Field::Ghe => &mut self.ghe,
            Field::GheHostname => &mut self.ghe_hostname,
            Field::GheToken => &mut self.ghe_token,
        };
        *slot = Some(value);
    }

    fn apply_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for (var, field) in ENV_OVERRIDES {
            if let Some(value) = lookup(var) {
                debug!("preference overridden by {}", var);
                self.set(field, value);
            }
        }
        self
    }

    fn validate(self) -> Result<Preferences, ConfigError> {
        let github = non_empty(self.github).ok_or(ConfigError::MissingField("github"))?;
        let enterprise = match (non_empty(self.ghe_hostname), non_empty(self.ghe_token)) {
            (Some(hostname), Some(token)) => {
                validate_hostname(&hostname)?;
                Some(Enterprise { hostname, token })
            }
            (None, None) => None,
            (Some(_), None) => return Err(ConfigError::MissingField("ghe_token")),
            (None, Some(_)) => return Err(ConfigError::MissingField("ghe_hostname")),
        };
        Ok(Preferences {
            github,
            github_token: non_empty(self.github_token),
            ghe: non_empty(self.ghe),
            enterprise,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn validate_hostname(hostname: &str) -> Result<(), ConfigError> {
    let reason = if hostname.contains("://") {
        Some("expected a bare hostname without a scheme")
    } else if hostname.contains('/') {
        Some("expected a bare hostname without a path")
    } else if hostname.chars().any(char::is_whitespace) {
        Some("hostname contains whitespace")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ConfigError::InvalidValue {
            field: "ghe_hostname",
            reason: format!("{} (got {:?})", reason, hostname),
        }),
        None => Ok(()),
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Enterprise {
    hostname: String,
    token: String,
}

/// Validated launcher preferences.
#[derive(Clone, PartialEq, Eq)]
pub struct Preferences {
    /// Keyword that targets github.com.
    pub github: String,
    /// Only needed when the github keyword is used.
    github_token: Option<String>,
    /// Keyword that targets the enterprise host. When unset, every keyword
    /// other than `github` targets the enterprise host.
    pub ghe: Option<String>,
    enterprise: Option<Enterprise>,
}

impl fmt::Debug for Preferences {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Preferences")
            .field("github", &self.github)
            .field("ghe", &self.ghe)
            .field(
                "ghe_hostname",
                &self.enterprise.as_ref().map(|e| e.hostname.as_str()),
            )
            .finish_non_exhaustive()
    }
}

impl Preferences {
    /// Default location of the preferences file.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("ghsearch").join(PREFERENCES_FILE))
    }

    /// Load preferences from `path` (or the default location) and the process
    /// environment. An explicit `path` must exist; the default one may not.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let raw = match path {
            Some(path) => read_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => read_file(&path)?,
                _ => RawPreferences::default(),
            },
        };
        raw.apply_env(|var| std::env::var(var).ok()).validate()
    }

    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        parse(contents, Path::new("<inline>"))?.validate()
    }

    /// Resolve the endpoint that a launcher keyword targets.
    pub fn endpoint_for(&self, keyword: &str) -> Result<Endpoint, ConfigError> {
        if keyword == self.github {
            let token = self
                .github_token
                .as_deref()
                .ok_or(ConfigError::MissingField("github_token"))?;
            return Ok(Endpoint::github(token));
        }
        if let Some(ghe) = &self.ghe
            && keyword != ghe.as_str()
        {
            return Err(ConfigError::UnknownKeyword(keyword.to_string()));
        }
        let enterprise = self
            .enterprise
            .as_ref()
            .ok_or(ConfigError::MissingField("ghe_hostname"))?;
        Ok(Endpoint::enterprise(&enterprise.hostname, &enterprise.token))
    }
}

fn read_file(path: &Path) -> Result<RawPreferences, ConfigError> {
    debug!("reading preferences from {}", path.display());
    let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    parse(&contents, path)
}

fn parse(contents: &str, path: &Path) -> Result<RawPreferences, ConfigError> {
    toml::from_str(contents).map_err(|source| ConfigError::Parse {
        path: path.to_path_buf(),
        source,
    })
}

/// Where the GraphQL requests of one invocation go.
#[derive(Clone, PartialEq, Eq)]
pub struct Endpoint {
    /// Host used for the URLs of rendered results.
    pub hostname: String,
    pub graphql_url: String,
    pub token: String,
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("hostname", &self.hostname)
            .field("graphql_url", &self.graphql_url)
            .field("token", &"<redacted>")
            .finish()
    }
}

impl Endpoint {
    pub fn github(token: &str) -> Self {
        Self {
            hostname: GITHUB_HOSTNAME.to_string(),
            graphql_url: GITHUB_GRAPHQL_URL.to_string(),
            token: token.to_string(),
        }
    }

    pub fn enterprise(hostname: &str, token: &str) -> Self {
        Self {
            hostname: hostname.to_string(),
            graphql_url: format!("https://{}/api/graphql", hostname),
            token: token.to_string(),
        }
    }

    /// Point the client at another GraphQL URL while keeping the hostname
    /// used for result links.
    pub fn with_graphql_url(mut self, graphql_url: &str) -> Self {
        self.graphql_url = graphql_url.to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::HashMap;

    const FULL: &str = r#"
github = "gh"
github_token = "t-public"
ghe = "ghe"
ghe_hostname = "git.corp.example"
ghe_token = "t-corp"
"#;

    #[test]
    fn github_keyword_selects_public_endpoint() {
        let prefs = Preferences::from_toml_str(FULL).unwrap();
        let endpoint = prefs.endpoint_for("gh").unwrap();
        assert_eq!(endpoint.hostname, "github.com");
        assert_eq!(endpoint.graphql_url, "https://api.github.com/graphql");
        assert_eq!(endpoint.token, "t-public");
    }

    #[test]
    fn enterprise_keyword_selects_enterprise_endpoint() {
        let prefs = Preferences::from_toml_str(FULL).unwrap();
        let endpoint = prefs.endpoint_for("ghe").unwrap();
        assert_eq!(endpoint.hostname, "git.corp.example");
        assert_eq!(endpoint.graphql_url, "https://git.corp.example/api/graphql");
        assert_eq!(endpoint.token, "t-corp");
    }

    #[test]
    fn unknown_keyword_is_rejected_when_ghe_keyword_is_set() {
        let prefs = Preferences::from_toml_str(FULL).unwrap();
        let err = prefs.endpoint_for("gl").unwrap_err();
        assert!(matches!(err, ConfigError::UnknownKeyword(k) if k == "gl"));
    }

    #[test]
    fn any_other_keyword_falls_through_to_enterprise_without_ghe_keyword() {
        let prefs = Preferences::from_toml_str(
            r#"
github = "gh"
github_token = "t"
ghe_hostname = "git.corp.example"
ghe_token = "t-corp"
"#,
        )
        .unwrap();
        let endpoint = prefs.endpoint_for("work").unwrap();
        assert_eq!(endpoint.hostname, "git.corp.example");
    }

    #[test]
    fn enterprise_keyword_without_enterprise_host_fails() {
        let prefs = Preferences::from_toml_str("github = \"gh\"\ngithub_token = \"t\"").unwrap();
        let err = prefs.endpoint_for("ghe").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("ghe_hostname")));
    }

    #[test]
    fn missing_keyword_fails_fast() {
        let err = Preferences::from_toml_str("github_token = \"t\"").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("github")));
    }

    #[test]
    fn github_token_is_only_required_for_the_github_keyword() {
        let prefs = Preferences::from_toml_str(
            r#"
github = "gh"
ghe = "ghe"
ghe_hostname = "git.corp.example"
ghe_token = "t-corp"
"#,
        )
        .unwrap();
        assert_eq!(prefs.endpoint_for("ghe").unwrap().token, "t-corp");
        let err = prefs.endpoint_for("gh").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("github_token")));
    }

    #[test]
    fn blank_values_count_as_missing() {
        let prefs = Preferences::from_toml_str("github = \"gh\"\ngithub_token = \"  \"").unwrap();
        let err = prefs.endpoint_for("gh").unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("github_token")));
    }

    #[test]
    fn enterprise_host_and_token_come_in_pairs() {
        let err = Preferences::from_toml_str(
            "github = \"gh\"\ngithub_token = \"t\"\nghe_hostname = \"git.corp.example\"",
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::MissingField("ghe_token")));
    }

    #[test]
    fn hostname_with_scheme_is_invalid() {
        let err = Preferences::from_toml_str(
            "github = \"gh\"\ngithub_token = \"t\"\nghe_hostname = \"https://git.corp\"\nghe_token = \"x\"",
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue {
                field: "ghe_hostname",
                ..
            }
        ));
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let err = Preferences::from_toml_str("github = \"gh\"\ngithub_token = \"t\"\ntoken = \"x\"")
            .unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn environment_overrides_file_values() {
        let env: HashMap<&str, &str> =
            HashMap::from([("GITHUB_TOKEN", "from-env"), ("GHE_HOSTNAME", "other.corp")]);
        let raw = parse(FULL, Path::new("test")).unwrap();
        let prefs = raw
            .apply_env(|var| env.get(var).map(|v| v.to_string()))
            .validate()
            .unwrap();
        assert_eq!(prefs.endpoint_for("gh").unwrap().token, "from-env");
        assert_eq!(prefs.endpoint_for("ghe").unwrap().hostname, "other.corp");
    }

    #[test]
    fn load_reads_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("prefs.toml");
        std::fs::write(&path, FULL).unwrap();
        let raw = read_file(&path).unwrap();
        assert_eq!(raw.ghe_hostname.as_deref(), Some("git.corp.example"));
    }

    #[test]
    fn load_fails_for_missing_explicit_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = Preferences::load(Some(&dir.path().join("absent.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }

    #[test]
    fn debug_output_hides_tokens() {
        let prefs = Preferences::from_toml_str(FULL).unwrap();
        let rendered = format!("{:?} {:?}", prefs, prefs.endpoint_for("gh").unwrap());
        assert!(!rendered.contains("t-public"));
        assert!(!rendered.contains("t-corp"));
    }
}
