use crate::client::TransmitError;
use crate::introspection::DEFAULT_MAX_DEPTH;
use crate::introspection::Introspector;
use serde::Deserialize;
use serde::Serialize;
use url::Url;

/// Settings for a [`GraphQLClient`](crate::client::GraphQLClient).
///
/// Every key is optional when deserializing; missing keys take their
/// default.
#[derive(Clone, Debug, Deserialize, PartialEq, Serialize)]
#[serde(default)]
pub struct ClientConfig {
    allowed_url_schemes: Vec<String>,
    max_introspection_depth: usize,
}
impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            allowed_url_schemes: vec!["http".to_string(), "https".to_string()],
            max_introspection_depth: DEFAULT_MAX_DEPTH,
        }
    }
}
impl ClientConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn allowed_url_schemes(&self) -> &[String] {
        self.allowed_url_schemes.as_slice()
    }

    pub fn max_introspection_depth(&self) -> usize {
        self.max_introspection_depth
    }

    pub fn set_allowed_url_schemes<S: Into<String>>(
        mut self,
        schemes: impl IntoIterator<Item = S>,
    ) -> Self {
        self.allowed_url_schemes =
            schemes.into_iter()
                .map(|scheme| scheme.into().to_ascii_lowercase())
                .collect();
        self
    }

    pub fn set_max_introspection_depth(mut self, max_depth: usize) -> Self {
        self.max_introspection_depth = max_depth;
        self
    }

    pub(super) fn introspector(&self) -> Introspector {
        Introspector::new(self.max_introspection_depth)
    }

    pub(super) fn parse_url(&self, raw_url: &str) -> Result<Url, TransmitError> {
        let url = Url::parse(raw_url).map_err(|source| TransmitError::InvalidUrl {
            source,
            url: raw_url.to_string(),
        })?;

        if !self.allowed_url_schemes.iter().any(|scheme| scheme == url.scheme()) {
            return Err(TransmitError::UnsupportedUrlScheme {
                allowed: self.allowed_url_schemes.to_owned(),
                scheme: url.scheme().to_string(),
            });
        }

        Ok(url)
    }
}
