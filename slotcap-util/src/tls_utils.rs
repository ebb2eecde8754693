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

use slotcap_error::{Code, Error, make_config_err, make_err};
use tonic::transport::Uri;

/// Port assumed when a target address carries none.
pub const DEFAULT_PORT: u16 = 443;

/// Appends the default port to a bare hostname. Targets that already
/// carry a port are returned unmodified.
pub fn with_default_port(target: &str) -> String {
    if target.contains(':') {
        target.to_string()
    } else {
        format!("{target}:{DEFAULT_PORT}")
    }
}

/// TLS configuration trusting the system certificate roots, with no
/// client identity. This is the ambient material used for ordinary
/// (non mutual TLS) connections.
pub fn default_tls_config() -> tonic::transport::ClientTlsConfig {
    tonic::transport::ClientTlsConfig::new().with_native_roots()
}

/// Layers a client identity built from in-memory PEM material, as
/// produced by a certificate-source callback, onto an existing TLS
/// configuration.
pub fn mtls_client_config(
    base: tonic::transport::ClientTlsConfig,
    cert_pem: &[u8],
    key_pem: &[u8],
) -> tonic::transport::ClientTlsConfig {
    base.identity(tonic::transport::Identity::from_pem(cert_pem, key_pem))
}

/// Builds client TLS configuration from file paths in a config spec.
pub fn load_client_config(
    config: &Option<slotcap_config::ClientTlsConfig>,
) -> Result<Option<tonic::transport::ClientTlsConfig>, Error> {
    let Some(config) = config else {
        return Ok(None);
    };

    let read_config = if let Some(ca_file) = &config.ca_file {
        tonic::transport::ClientTlsConfig::new().ca_certificate(
            tonic::transport::Certificate::from_pem(std::fs::read_to_string(ca_file)?),
        )
    } else {
        default_tls_config()
    };
    let config = if let Some(client_certificate) = &config.cert_file {
        let Some(client_key) = &config.key_file else {
            return Err(make_config_err!("Client certificate specified, but no key"));
        };
        read_config.identity(tonic::transport::Identity::from_pem(
            std::fs::read_to_string(client_certificate)?,
            std::fs::read_to_string(client_key)?,
        ))
    } else {
        if config.key_file.is_some() {
            return Err(make_config_err!("Client key specified, but no certificate"));
        }
        read_config
    };

    Ok(Some(config))
}

/// Turns a target address into a connectable tonic endpoint. Bare
/// `host:port` targets are assumed to be https; a `grpcs` scheme maps to
/// https so tonic applies the TLS configuration.
pub fn endpoint_from(
    target: &str,
    tls_config: Option<tonic::transport::ClientTlsConfig>,
) -> Result<tonic::transport::Endpoint, Error> {
    let target = if target.contains("://") {
        target.to_string()
    } else {
        format!("https://{target}")
    };
    let endpoint = Uri::try_from(target.as_str())
        .map_err(|e| make_config_err!("Unable to parse endpoint {target}: {e:?}"))?;

    // Tonic only applies TLS configuration when the scheme is "https",
    // so replace grpcs with https.
    let endpoint = if endpoint.scheme_str() == Some("grpcs") {
        let mut parts = endpoint.into_parts();
        parts.scheme = Some(
            "https"
                .parse()
                .map_err(|e| make_err!(Code::Internal, "Failed to parse https scheme: {e:?}"))?,
        );
        parts.try_into().map_err(|e| {
            make_err!(
                Code::Internal,
                "Error changing Uri from grpcs to https: {e:?}"
            )
        })?
    } else {
        endpoint
    };

    let endpoint_transport = if let Some(tls_config) = tls_config {
        let Some(authority) = endpoint.authority() else {
            return Err(make_config_err!(
                "Unable to determine authority of endpoint: {endpoint}"
            ));
        };
        if endpoint.scheme_str() != Some("https") {
            return Err(make_config_err!(
                "TLS configured on {endpoint}, but the scheme is not https or grpcs"
            ));
        }
        let tls_config = tls_config.domain_name(authority.host());
        tonic::transport::Endpoint::from(endpoint)
            .tls_config(tls_config)
            .map_err(|e| make_config_err!("Setting TLS configuration: {e:?}"))?
    } else {
        tonic::transport::Endpoint::from(endpoint)
    };

    Ok(endpoint_transport)
}
