// crates/prober/src/https.rs
//! HTTPS liveness prober

use async_trait::async_trait;
use reqwest::{redirect::Policy, Client, Response};
use std::net::SocketAddr;
use std::time::Duration;
use tracing::{instrument, trace};

use subsweep_common::{Candidate, ProbeError, ProbeOutcome, Prober, SweepError, SweepResult};

const USER_AGENT: &str = concat!("subsweep/", env!("CARGO_PKG_VERSION"));

/// Probes `https://<hostname>/` with a single GET.
///
/// The underlying client is built once and shared by every worker; redirects
/// are never followed so a 302 is classified as-is.
#[derive(Debug, Clone)]
pub struct HttpsProber {
    client: Client,
    scheme: String,
    port: Option<u16>,
}

impl HttpsProber {
    /// Prober with the given per-request timeout and default settings.
    pub fn new(timeout: Duration) -> SweepResult<Self> {
        Self::builder().with_timeout(timeout).build()
    }

    pub fn builder() -> HttpsProberBuilder {
        HttpsProberBuilder::default()
    }

    /// URL requested for `candidate`.
    pub fn target_url(&self, candidate: &Candidate) -> String {
        match self.port {
            Some(port) => format!("{}://{}:{}/", self.scheme, candidate.hostname, port),
            None => format!("{}://{}/", self.scheme, candidate.hostname),
        }
    }
}

/// Builder for [`HttpsProber`].
#[derive(Debug, Clone)]
pub struct HttpsProberBuilder {
    timeout: Duration,
    scheme: String,
    port: Option<u16>,
    overrides: Vec<(String, SocketAddr)>,
}

impl Default for HttpsProberBuilder {
    fn default() -> Self {
        Self {
            timeout: Duration::from_secs(5),
            scheme: "https".to_string(),
            port: None,
            overrides: Vec::new(),
        }
    }
}

impl HttpsProberBuilder {
    /// Whole-request timeout (connect, TLS, headers and body).
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Replace the URL scheme. Used against plain-HTTP fixtures.
    pub fn with_scheme(mut self, scheme: &str) -> Self {
        self.scheme = scheme.to_string();
        self
    }

    /// Send every request to an explicit port.
    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Pin `hostname` to `addr` instead of resolving it through DNS.
    pub fn resolve(mut self, hostname: &str, addr: SocketAddr) -> Self {
        self.overrides.push((hostname.to_string(), addr));
        self
    }

    pub fn build(self) -> SweepResult<HttpsProber> {
        let mut builder = Client::builder()
            .timeout(self.timeout)
            .redirect(Policy::none())
            .user_agent(USER_AGENT)
            .pool_idle_timeout(Some(Duration::from_secs(30)))
            .tcp_nodelay(true);
        for (host, addr) in &self.overrides {
            builder = builder.resolve(host, *addr);
        }
        let client = builder
            .build()
            .map_err(|e| SweepError::Client(e.to_string()))?;

        Ok(HttpsProber {
            client,
            scheme: self.scheme,
            port: self.port,
        })
    }
}

#[async_trait]
impl Prober for HttpsProber {
    #[instrument(level = "trace", skip_all, fields(host = %candidate))]
    async fn probe(&self, candidate: &Candidate) -> ProbeOutcome {
        let url = self.target_url(candidate);
        match self.client.get(&url).send().await {
            Ok(response) => {
                let status = response.status().as_u16();
                drain(response).await;
                trace!(status, "response");
                ProbeOutcome::from_status(candidate.as_str(), status)
            }
            Err(e) => {
                let err = classify_error(&e);
                trace!(error = %err, "probe failed");
                ProbeOutcome::Failed(err)
            }
        }
    }

    fn name(&self) -> &str {
        "HTTPS GET Prober"
    }
}

/// Read the body to the end, discarding chunks, so the connection can be
/// reused. A body error after the status line does not change the outcome.
async fn drain(mut response: Response) {
    loop {
        match response.chunk().await {
            Ok(Some(_)) => continue,
            Ok(None) => break,
            Err(e) => {
                trace!(error = %e, "body drain aborted");
                break;
            }
        }
    }
}

fn classify_error(e: &reqwest::Error) -> ProbeError {
    if e.is_timeout() {
        ProbeError::Timeout
    } else if e.is_connect() {
        ProbeError::Connect(e.to_string())
    } else {
        ProbeError::Transport(e.to_string())
    }
}
