// Copyright 2025 The Slotcap Authors. All rights reserved.
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//    http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use core::fmt;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;
use prost::Message;
use slotcap_config::{AuthSpec, TransportSpec};
use slotcap_error::{Code, Error, ResultExt, error_if, make_config_err, make_err};
use slotcap_util::auth::{
    EnvTokenSource, ServiceAccountTokenSource, StaticTokenSource, TokenSource,
};
use slotcap_util::tls_utils;
use tokio::sync::{Mutex as AsyncMutex, RwLock};
use tonic::transport::Channel;
use tracing::{debug, info};

use crate::methods::UnaryMethod;
use crate::stub::{StubHandle, UnaryStub};

pub use slotcap_config::DEFAULT_HOST;

/// Callback producing client certificate and key PEM bytes for mutual
/// TLS. Invoked once, during connection resolution.
pub type ClientCertSource = Box<dyn Fn() -> Result<(Vec<u8>, Vec<u8>), Error> + Send + Sync>;

/// Everything a caller may supply to shape the transport's connection.
/// Most fields are optional; an empty value connects lazily to the
/// production host with no credentials.
pub struct TransportOptions {
    /// Service address, `host` or `host:port`.
    pub host: String,
    /// Pre-built channel. When set, every other connection field is
    /// ignored.
    pub channel: Option<Channel>,
    /// Bearer token source attached to outgoing calls.
    pub credentials: Option<Arc<dyn TokenSource>>,
    /// Mutual TLS endpoint. When set, the transport connects here
    /// eagerly instead of deferring to `host`.
    pub api_mtls_endpoint: Option<String>,
    /// Base TLS material for channels the transport establishes itself,
    /// such as a custom certificate authority. `None` uses the system
    /// roots.
    pub tls: Option<tonic::transport::ClientTlsConfig>,
    /// Client certificate material for the mutual TLS endpoint. Without
    /// it, the mutual TLS connection presents no extra client identity.
    pub client_cert_source: Option<ClientCertSource>,
}

impl Default for TransportOptions {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            channel: None,
            credentials: None,
            api_mtls_endpoint: None,
            tls: None,
            client_cert_source: None,
        }
    }
}

impl fmt::Debug for TransportOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TransportOptions")
            .field("host", &self.host)
            .field("has_channel", &self.channel.is_some())
            .field("has_credentials", &self.credentials.is_some())
            .field("api_mtls_endpoint", &self.api_mtls_endpoint)
            .field("has_tls", &self.tls.is_some())
            .field("has_client_cert_source", &self.client_cert_source.is_some())
            .finish()
    }
}

/// Connection plan produced by [`resolve_connection`]. Exactly one
/// variant applies to a given set of options.
pub enum ResolvedConnection {
    /// A caller-supplied channel, used as-is. Note the absence of a
    /// credential field: a token source passed alongside an explicit
    /// channel is dropped, because the channel owner already decided how
    /// calls authenticate.
    Supplied { channel: Channel },
    /// Mutual TLS override. The transport connects eagerly so a bad
    /// certificate surfaces at construction, not on the first call.
    Mtls {
        target: String,
        tls: tonic::transport::ClientTlsConfig,
        credentials: Option<Arc<dyn TokenSource>>,
    },
    /// Ordinary path: connect to `target` on first channel use.
    Deferred {
        target: String,
        tls: Option<tonic::transport::ClientTlsConfig>,
        credentials: Option<Arc<dyn TokenSource>>,
    },
}

impl fmt::Debug for ResolvedConnection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Supplied { .. } => f.debug_struct("Supplied").finish_non_exhaustive(),
            Self::Mtls { target, .. } => f
                .debug_struct("Mtls")
                .field("target", target)
                .finish_non_exhaustive(),
            Self::Deferred { target, .. } => f
                .debug_struct("Deferred")
                .field("target", target)
                .finish_non_exhaustive(),
        }
    }
}

/// Applies the connection precedence rules: an explicit channel beats a
/// mutual TLS endpoint, which beats the plain host. Mutual TLS targets
/// without a port get the default appended.
pub fn resolve_connection(options: TransportOptions) -> Result<ResolvedConnection, Error> {
    let TransportOptions {
        host,
        channel,
        credentials,
        api_mtls_endpoint,
        tls,
        client_cert_source,
    } = options;

    if let Some(channel) = channel {
        if credentials.is_some() {
            debug!("Explicit channel supplied, ignoring credential source");
        }
        return Ok(ResolvedConnection::Supplied { channel });
    }

    if let Some(endpoint) = api_mtls_endpoint {
        let target = tls_utils::with_default_port(&endpoint);
        let base = tls.unwrap_or_else(tls_utils::default_tls_config);
        let tls = match client_cert_source {
            Some(cert_source) => {
                let (cert_pem, key_pem) =
                    cert_source().err_tip(|| "While fetching client certificate material")?;
                tls_utils::mtls_client_config(base, &cert_pem, &key_pem)
            }
            None => base,
        };
        return Ok(ResolvedConnection::Mtls {
            target,
            tls,
            credentials,
        });
    }

    error_if!(host.is_empty(), "Transport host must not be empty");
    Ok(ResolvedConnection::Deferred {
        target: host,
        tls,
        credentials,
    })
}

/// The transport: one shared channel plus a cache of per-method stubs.
///
/// Stubs are created on first request and memoized by method name, so
/// repeated lookups for the same method return handles to the same
/// underlying object. The channel itself may be deferred; it is
/// established at most once, on the first stub that needs it.
pub struct ReservationTransport {
    /// `None` once a supplied or mutual TLS channel is already cached.
    target: Option<String>,
    /// Base TLS material for the deferred connect path.
    tls: Option<tonic::transport::ClientTlsConfig>,
    credentials: Option<Arc<dyn TokenSource>>,
    channel_cache: RwLock<Option<Channel>>,
    connect_lock: AsyncMutex<()>,
    stubs: Mutex<HashMap<&'static str, Arc<StubHandle>>>,
}

impl fmt::Debug for ReservationTransport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ReservationTransport")
            .field("target", &self.target)
            .field("has_credentials", &self.credentials.is_some())
            .field("cached_stubs", &self.cached_stub_count())
            .finish_non_exhaustive()
    }
}

impl ReservationTransport {
    /// Resolves `options` and builds the transport. Only the mutual TLS
    /// path performs I/O here; the other paths return immediately.
    pub async fn new(options: TransportOptions) -> Result<Self, Error> {
        Self::from_resolved(resolve_connection(options)?).await
    }

    pub async fn from_resolved(resolved: ResolvedConnection) -> Result<Self, Error> {
        match resolved {
            ResolvedConnection::Supplied { channel } => {
                Ok(Self::with_channel(None, channel, None))
            }
            ResolvedConnection::Mtls {
                target,
                tls,
                credentials,
            } => {
                let endpoint = tls_utils::endpoint_from(&target, Some(tls))?;
                let channel = endpoint
                    .connect()
                    .await
                    .map_err(Error::from)
                    .err_tip(|| format!("While connecting mutual TLS channel to {target}"))?;
                info!(%target, "Mutual TLS channel established");
                Ok(Self::with_channel(Some(target), channel, credentials))
            }
            ResolvedConnection::Deferred {
                target,
                tls,
                credentials,
            } => Ok(Self {
                target: Some(target),
                tls,
                credentials,
                channel_cache: RwLock::new(None),
                connect_lock: AsyncMutex::new(()),
                stubs: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Builds a transport from a deserialized config spec. TLS material
    /// named in the spec (certificate authority, client cert and key) is
    /// read from disk here, so bad paths fail at construction.
    pub async fn from_spec(spec: &TransportSpec) -> Result<Self, Error> {
        let credentials = match &spec.auth {
            Some(auth) => Some(token_source_from_spec(auth)?),
            None => None,
        };
        let tls = tls_utils::load_client_config(&spec.tls)?;
        let api_mtls_endpoint = spec
            .api_mtls_endpoint
            .as_ref()
            .filter(|endpoint| !endpoint.is_empty())
            .cloned();
        Self::new(TransportOptions {
            host: spec.host.clone(),
            channel: None,
            credentials,
            api_mtls_endpoint,
            tls,
            client_cert_source: None,
        })
        .await
    }

    fn with_channel(
        target: Option<String>,
        channel: Channel,
        credentials: Option<Arc<dyn TokenSource>>,
    ) -> Self {
        Self {
            target,
            tls: None,
            credentials,
            channel_cache: RwLock::new(Some(channel)),
            connect_lock: AsyncMutex::new(()),
            stubs: Mutex::new(HashMap::new()),
        }
    }

    /// The address this transport connects to, when it manages its own
    /// connection. `None` for a caller-supplied channel.
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    /// Whether the shared channel exists yet. Deferred transports report
    /// `false` until the first stub forces a connection.
    pub async fn is_connected(&self) -> bool {
        self.channel_cache.read().await.is_some()
    }

    pub fn cached_stub_count(&self) -> usize {
        self.stubs.lock().len()
    }

    /// The shared channel, connecting it first if this transport was
    /// deferred. Concurrent first calls race on the connect lock and all
    /// end up with the same channel.
    pub async fn channel(&self) -> Result<Channel, Error> {
        if let Some(channel) = self.channel_cache.read().await.as_ref() {
            return Ok(channel.clone());
        }

        let _guard = self.connect_lock.lock().await;
        if let Some(channel) = self.channel_cache.read().await.as_ref() {
            return Ok(channel.clone());
        }

        let Some(target) = self.target.as_deref() else {
            return Err(make_err!(
                Code::Internal,
                "Transport has neither a channel nor a target"
            ));
        };
        // Plaintext targets are only meaningful for local testing and
        // emulators; everything else gets the configured TLS material or
        // ambient roots.
        let tls = if target.starts_with("http://") {
            None
        } else {
            Some(
                self.tls
                    .clone()
                    .unwrap_or_else(tls_utils::default_tls_config),
            )
        };
        let endpoint = tls_utils::endpoint_from(target, tls)?
            .connect_timeout(Duration::from_secs(20));
        let channel = endpoint
            .connect()
            .await
            .map_err(Error::from)
            .err_tip(|| format!("While connecting channel to {target}"))?;
        info!(%target, "Channel established");
        *self.channel_cache.write().await = Some(channel.clone());
        Ok(channel)
    }

    /// The stub for `method`, creating and caching it on first use.
    /// Subsequent calls for the same method return the same handle.
    pub async fn stub<Req, Resp>(
        &self,
        method: &'static UnaryMethod<Req, Resp>,
    ) -> Result<UnaryStub<Req, Resp>, Error>
    where
        Req: Message + Default + Send + Sync + 'static,
        Resp: Message + Default + Send + Sync + 'static,
    {
        let descriptor = method.descriptor();
        if let Some(handle) = self.stubs.lock().get(descriptor.name) {
            return Ok(UnaryStub::new(handle.clone(), method));
        }

        // Cache miss. Connecting can take arbitrarily long, so resolve
        // the channel outside the stub lock; the entry API below keeps
        // racing creators from installing two handles.
        let channel = self.channel().await?;
        let mut stubs = self.stubs.lock();
        let handle = stubs
            .entry(descriptor.name)
            .or_insert_with(|| {
                debug!(method = descriptor.name, "Creating stub");
                Arc::new(StubHandle::new(
                    channel,
                    descriptor,
                    self.credentials.clone(),
                ))
            })
            .clone();
        Ok(UnaryStub::new(handle, method))
    }
}

fn token_source_from_spec(auth: &AuthSpec) -> Result<Arc<dyn TokenSource>, Error> {
    if let Some(var) = &auth.token_env {
        return Ok(Arc::new(EnvTokenSource::from_env(var)?));
    }
    match (&auth.service_email, &auth.private_key_file) {
        (Some(email), Some(key_file)) => {
            let key_pem = std::fs::read_to_string(key_file)
                .err_tip(|| format!("While reading private key {key_file}"))?;
            let lifetime = auth.token_lifetime_secs.map(Duration::from_secs);
            Ok(Arc::new(ServiceAccountTokenSource::new(
                email, &key_pem, lifetime,
            )))
        }
        (None, None) => Err(make_config_err!(
            "Auth spec needs either token_env or a service account email and key"
        )),
        _ => Err(make_config_err!(
            "Service account auth needs both service_email and private_key_file"
        )),
    }
}

/// Convenience helper for tests and tools: a fixed-token credential
/// source.
pub fn static_credentials(token: impl Into<String>) -> Arc<dyn TokenSource> {
    Arc::new(StaticTokenSource::new(token))
}
