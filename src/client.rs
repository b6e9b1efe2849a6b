//! OHGO API client.
//!
//! Low-level transport (endpoint resolution, auth header, pagination
//! walking) plus the typed per-resource operations.

use std::env;
use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{ETAG, IF_NONE_MATCH};
use reqwest::Client;
use url::Url;

use crate::envelope::Envelope;
use crate::error::{OhgoError, Result};
use crate::images::{ImageFetcher, ImageSize, Imagery};
use crate::models::{
    Camera, Construction, DangerousSlowdown, DigitalSign, Incident, TravelDelay,
    WeatherSensorSite,
};
use crate::query::{DigitalSignParams, QueryParams};
use crate::results::{ItemResult, ListResult};
use crate::traits::{Resource, ToQuery};

const DEFAULT_HOST: &str = "publicapi.ohgo.com";
const DEFAULT_VERSION: &str = "v1";
const USER_AGENT: &str = concat!("ohgo/", env!("CARGO_PKG_VERSION"));

/// Options for list operations.
#[derive(Debug, Clone, Default)]
pub struct ListOptions {
    /// Transparently walk all pagination links before returning.
    pub fetch_all: bool,
    /// ETag from a previous response; a 304 answer short-circuits to an
    /// empty cached result.
    pub etag: Option<String>,
}

impl ListOptions {
    /// Options that walk every page.
    #[must_use]
    pub fn all() -> Self {
        Self {
            fetch_all: true,
            etag: None,
        }
    }
}

/// OHGO API client.
///
/// Cheaply cloneable; clones share the underlying connection pool.
/// Configuration (base URL, API key, TLS verification) is fixed at
/// construction.
///
/// # Example
///
/// ```no_run
/// use ohgo::{OhgoClient, QueryParams, ListOptions, Region};
///
/// # async fn example() -> ohgo::Result<()> {
/// let client = OhgoClient::new("your-api-key")?;
///
/// let params = QueryParams {
///     region: Some(Region::Columbus.into()),
///     ..Default::default()
/// };
/// let cameras = client.get_cameras(&params, &ListOptions::all()).await?;
/// println!("{} cameras", cameras.len());
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct OhgoClient {
    http: Client,
    base_url: Arc<Url>,
    api_key: String,
}

impl std::fmt::Debug for OhgoClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OhgoClient")
            .field("base_url", &self.base_url.as_str())
            .finish_non_exhaustive()
    }
}

/// Builder for [`OhgoClient`].
#[derive(Debug, Clone)]
pub struct OhgoClientBuilder {
    api_key: String,
    host: String,
    version: String,
    ssl_verify: bool,
    timeout: Duration,
}

impl OhgoClientBuilder {
    fn new(api_key: &str) -> Self {
        Self {
            api_key: api_key.to_string(),
            host: DEFAULT_HOST.to_string(),
            version: DEFAULT_VERSION.to_string(),
            ssl_verify: true,
            timeout: Duration::from_secs(300),
        }
    }

    /// API hostname, almost always `publicapi.ohgo.com`.
    #[must_use]
    pub fn host(mut self, host: &str) -> Self {
        self.host = host.to_string();
        self
    }

    /// API version segment, defaults to `v1`.
    #[must_use]
    pub fn version(mut self, version: &str) -> Self {
        self.version = version.to_string();
        self
    }

    /// Disable TLS certificate verification.
    #[must_use]
    pub fn ssl_verify(mut self, verify: bool) -> Self {
        self.ssl_verify = verify;
        self
    }

    /// Per-request timeout, defaults to 300 seconds.
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Build the client.
    ///
    /// # Errors
    ///
    /// Returns an error if the assembled base URL is invalid or the
    /// HTTP client cannot be constructed.
    pub fn build(self) -> Result<OhgoClient> {
        let base = format!("https://{}/api/{}/", self.host, self.version);
        OhgoClient::assemble(&self.api_key, &base, self.ssl_verify, self.timeout)
    }
}

impl OhgoClient {
    /// Create a client for the public OHGO API.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(api_key: &str) -> Result<Self> {
        Self::builder(api_key).build()
    }

    /// Start building a client with non-default configuration.
    #[must_use]
    pub fn builder(api_key: &str) -> OhgoClientBuilder {
        OhgoClientBuilder::new(api_key)
    }

    /// Create a client from environment variables.
    ///
    /// Uses `OHGO_API_KEY` for authentication and optionally
    /// `OHGO_API_URL` for the base URL.
    ///
    /// # Errors
    ///
    /// Returns an error if `OHGO_API_KEY` is not set.
    pub fn from_env() -> Result<Self> {
        let api_key = env::var("OHGO_API_KEY").map_err(|_| {
            OhgoError::ConfigMissing("OHGO_API_KEY environment variable not set".to_string())
        })?;
        match env::var("OHGO_API_URL") {
            Ok(base_url) => Self::with_base_url(&api_key, &base_url),
            Err(_) => Self::new(&api_key),
        }
    }

    /// Create a client against an explicit base URL (useful for tests
    /// and staging hosts).
    ///
    /// # Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_base_url(api_key: &str, base_url: &str) -> Result<Self> {
        Self::assemble(api_key, base_url, true, Duration::from_secs(300))
    }

    fn assemble(
        api_key: &str,
        base_url: &str,
        ssl_verify: bool,
        timeout: Duration,
    ) -> Result<Self> {
        // Joining relative endpoints requires a trailing slash.
        let base_url_str = if base_url.ends_with('/') {
            base_url.to_string()
        } else {
            format!("{base_url}/")
        };
        let base_url = Url::parse(&base_url_str)?;

        let http = Client::builder()
            .user_agent(USER_AGENT)
            .brotli(true)
            .gzip(true)
            .deflate(true)
            .timeout(timeout)
            .danger_accept_invalid_certs(!ssl_verify)
            .build()
            .map_err(OhgoError::Transport)?;

        Ok(Self {
            http,
            base_url: Arc::new(base_url),
            api_key: api_key.to_string(),
        })
    }

    /// Get the base URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Resolve a request target: absolute URLs (pagination continuation
    /// links) pass through verbatim, everything else joins onto the
    /// configured base.
    fn resolve(&self, target: &str) -> Result<Url> {
        if target.starts_with("http://") || target.starts_with("https://") {
            Ok(Url::parse(target)?)
        } else {
            Ok(self.base_url.join(target)?)
        }
    }

    /// Issue one GET and decode its envelope.
    async fn request_envelope(
        &self,
        target: &str,
        query: &[(String, String)],
        etag: Option<&str>,
    ) -> Result<Envelope> {
        let url = self.resolve(target)?;

        let mut request = self
            .http
            .get(url)
            .header("Authorization", format!("APIKEY {}", self.api_key));
        if !query.is_empty() {
            request = request.query(query);
        }
        if let Some(etag) = etag {
            request = request.header(IF_NONE_MATCH, etag);
        }

        let response = request.send().await.map_err(OhgoError::Transport)?;
        let status = response.status();
        let reason = status.canonical_reason().unwrap_or("").to_string();
        let response_etag = response
            .headers()
            .get(ETAG)
            .and_then(|v| v.to_str().ok())
            .map(String::from);

        if status.as_u16() == 304 {
            return Ok(Envelope::not_modified(
                response_etag.or_else(|| etag.map(String::from)),
            ));
        }
        if !status.is_success() {
            return Err(OhgoError::Status {
                code: status.as_u16(),
                reason,
            });
        }

        let text = response.text().await.map_err(OhgoError::Transport)?;
        let body = serde_json::from_str(&text).map_err(OhgoError::MalformedBody)?;
        let mut envelope = Envelope::decode(status.as_u16(), &reason, body)?;
        envelope.etag = response_etag;
        Ok(envelope)
    }

    /// GET an endpoint, optionally walking all pagination links.
    ///
    /// Known quirk, preserved deliberately: the merged envelope's
    /// `status`, `message` and `total_result_count` reflect the first
    /// page only; continuation pages contribute their `results` and
    /// their link set, nothing else. A mid-walk failure discards all
    /// accumulated pages and surfaces the error.
    #[tracing::instrument(skip(self, query, etag))]
    pub(crate) async fn get(
        &self,
        endpoint: &str,
        query: &[(String, String)],
        fetch_all: bool,
        etag: Option<&str>,
    ) -> Result<Envelope> {
        let mut envelope = self.request_envelope(endpoint, query, etag).await?;
        if fetch_all {
            while let Some(next) = envelope.next_page.clone() {
                let page = self.request_envelope(&next, query, None).await?;
                envelope.absorb_page(page);
            }
        }
        Ok(envelope)
    }

    /// Fetch raw bytes from an absolute URL, without the API-key header
    /// (image URLs are public).
    ///
    /// # Errors
    ///
    /// Any transport failure or non-2xx status is wrapped in
    /// [`OhgoError::ImageFetch`] naming the URL.
    pub async fn fetch_binary(&self, url: &str) -> Result<Vec<u8>> {
        let wrap = |source: OhgoError| OhgoError::ImageFetch {
            url: url.to_string(),
            source: Box::new(source),
        };

        let response = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|e| wrap(OhgoError::Transport(e)))?;
        let status = response.status();
        if !status.is_success() {
            return Err(wrap(OhgoError::Status {
                code: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("").to_string(),
            }));
        }
        let bytes = response
            .bytes()
            .await
            .map_err(|e| wrap(OhgoError::Transport(e)))?;
        Ok(bytes.to_vec())
    }

    /// List resources of type `T`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request, any pagination continuation, or
    /// record parsing fails.
    pub async fn list<T: Resource>(
        &self,
        params: &impl ToQuery,
        options: &ListOptions,
    ) -> Result<ListResult<T>> {
        let envelope = self
            .get(
                T::ENDPOINT,
                &params.to_query(),
                options.fetch_all,
                options.etag.as_deref(),
            )
            .await?;
        ListResult::from_envelope(envelope)
    }

    /// Fetch a single resource of type `T` by ID.
    ///
    /// # Errors
    ///
    /// Returns [`OhgoError::NotFound`] when the lookup matches nothing.
    pub async fn item<T: Resource>(&self, id: &str) -> Result<ItemResult<T>> {
        let endpoint = format!("{}/{}", T::ENDPOINT, id);
        let envelope = self.get(&endpoint, &[], false, None).await?;
        ItemResult::from_envelope(envelope, id)
    }

    /// The image fetcher bound to this client.
    #[must_use]
    pub fn images(&self) -> ImageFetcher<'_> {
        ImageFetcher::new(self)
    }

    /// Fetch a resource's image at the requested size, dispatched by
    /// capability (see [`Imagery`]).
    pub async fn get_image<R: Imagery + Sync>(
        &self,
        resource: &R,
        size: ImageSize,
    ) -> Result<Vec<u8>> {
        resource.image(&self.images(), size).await
    }

    /// Fetch all of a resource's images, dispatched by capability (see
    /// [`Imagery`] for the multi-view vs. url-list asymmetry).
    pub async fn get_images<R: Imagery + Sync>(
        &self,
        resource: &R,
        size: ImageSize,
    ) -> Result<Vec<Option<Vec<u8>>>> {
        resource.images(&self.images(), size).await
    }

    /// Fetch cameras.
    pub async fn get_cameras(
        &self,
        params: &QueryParams,
        options: &ListOptions,
    ) -> Result<ListResult<Camera>> {
        self.list(params, options).await
    }

    /// Fetch a single camera by ID.
    pub async fn get_camera(&self, camera_id: &str) -> Result<ItemResult<Camera>> {
        self.item(camera_id).await
    }

    /// Fetch digital signs.
    pub async fn get_digital_signs(
        &self,
        params: &DigitalSignParams,
        options: &ListOptions,
    ) -> Result<ListResult<DigitalSign>> {
        self.list(params, options).await
    }

    /// Fetch a single digital sign by ID.
    pub async fn get_digital_sign(&self, sign_id: &str) -> Result<ItemResult<DigitalSign>> {
        self.item(sign_id).await
    }

    /// Fetch construction projects.
    pub async fn get_constructions(
        &self,
        params: &QueryParams,
        options: &ListOptions,
    ) -> Result<ListResult<Construction>> {
        self.list(params, options).await
    }

    /// Fetch a single construction project by ID.
    pub async fn get_construction(
        &self,
        construction_id: &str,
    ) -> Result<ItemResult<Construction>> {
        self.item(construction_id).await
    }

    /// Fetch incidents.
    pub async fn get_incidents(
        &self,
        params: &QueryParams,
        options: &ListOptions,
    ) -> Result<ListResult<Incident>> {
        self.list(params, options).await
    }

    /// Fetch a single incident by ID.
    pub async fn get_incident(&self, incident_id: &str) -> Result<ItemResult<Incident>> {
        self.item(incident_id).await
    }

    /// Fetch weather sensor sites.
    pub async fn get_weather_sensor_sites(
        &self,
        params: &QueryParams,
        options: &ListOptions,
    ) -> Result<ListResult<WeatherSensorSite>> {
        self.list(params, options).await
    }

    /// Fetch a single weather sensor site by ID.
    pub async fn get_weather_sensor_site(
        &self,
        site_id: &str,
    ) -> Result<ItemResult<WeatherSensorSite>> {
        self.item(site_id).await
    }

    /// Fetch dangerous slowdowns.
    pub async fn get_dangerous_slowdowns(
        &self,
        params: &QueryParams,
        options: &ListOptions,
    ) -> Result<ListResult<DangerousSlowdown>> {
        self.list(params, options).await
    }

    /// Fetch a single dangerous slowdown by ID.
    pub async fn get_dangerous_slowdown(
        &self,
        slowdown_id: &str,
    ) -> Result<ItemResult<DangerousSlowdown>> {
        self.item(slowdown_id).await
    }

    /// Fetch travel delays.
    pub async fn get_travel_delays(
        &self,
        params: &QueryParams,
        options: &ListOptions,
    ) -> Result<ListResult<TravelDelay>> {
        self.list(params, options).await
    }

    /// Fetch a single travel delay by ID.
    pub async fn get_travel_delay(&self, delay_id: &str) -> Result<ItemResult<TravelDelay>> {
        self.item(delay_id).await
    }
}
