use std::env;

/// Default backend address used when `DAGBOK_API_URL` is unset.
pub const DEFAULT_API_URL: &str = "http://localhost:5555/api";

#[derive(Debug, Clone)]
pub struct DagbokUrl(String);

impl AsRef<str> for DagbokUrl {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl DagbokUrl {
    /// Creates a new DagbokUrl from the environment variable `DAGBOK_API_URL`,
    /// falling back to [`DEFAULT_API_URL`].
    pub fn from_env() -> Self {
        Self(env::var("DAGBOK_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string()))
    }

    pub fn new(url: impl Into<String>) -> Self {
        Self(url.into())
    }

    /// Append the given path to the URL.
    pub fn append_path(&self, path: &str) -> Self {
        let trimmed_url = self.0.trim_end_matches('/');
        let trimmed_path = path.trim_start_matches('/');
        Self(format!("{}/{}", trimmed_url, trimmed_path))
    }
}
