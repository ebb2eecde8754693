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

pub mod serde_utils;

use serde::Deserialize;

use crate::serde_utils::{
    convert_optional_string_with_shellexpand, convert_string_with_shellexpand,
};

/// Hostname the transport connects to when no override is given.
pub const DEFAULT_HOST: &str = "bigqueryreservation.googleapis.com";

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

/// Declarative description of a reservation transport. Every string field
/// supports `$VAR` environment expansion.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TransportSpec {
    /// The hostname to connect to.
    ///
    /// Default: bigqueryreservation.googleapis.com
    #[serde(default = "default_host", deserialize_with = "convert_string_with_shellexpand")]
    pub host: String,

    /// The mutual TLS endpoint. If provided, it overrides `host` and the
    /// transport connects with client SSL credentials built from
    /// `tls.cert_file`/`tls.key_file` (or system roots when absent).
    ///
    /// Default: None
    #[serde(default, deserialize_with = "convert_optional_string_with_shellexpand")]
    pub api_mtls_endpoint: Option<String>,

    /// Client TLS material for mutual TLS connections.
    ///
    /// Default: None
    #[serde(default)]
    pub tls: Option<ClientTlsConfig>,

    /// Credential source used to mint bearer tokens for requests.
    ///
    /// Default: None (unauthenticated; only useful against emulators)
    #[serde(default)]
    pub auth: Option<AuthSpec>,
}

impl Default for TransportSpec {
    fn default() -> Self {
        Self {
            host: default_host(),
            api_mtls_endpoint: None,
            tls: None,
            auth: None,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ClientTlsConfig {
    /// Path to the certificate authority to use to validate the remote.
    ///
    /// Default: None (use system roots)
    #[serde(default, deserialize_with = "convert_optional_string_with_shellexpand")]
    pub ca_file: Option<String>,

    /// Path to the certificate file for client authentication.
    ///
    /// Default: None
    #[serde(default, deserialize_with = "convert_optional_string_with_shellexpand")]
    pub cert_file: Option<String>,

    /// Path to the private key file for client authentication.
    ///
    /// Default: None
    #[serde(default, deserialize_with = "convert_optional_string_with_shellexpand")]
    pub key_file: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AuthSpec {
    /// Service account email used as the issuer of self-signed JWTs.
    ///
    /// Default: None (fall back to a token from the environment)
    #[serde(default, deserialize_with = "convert_optional_string_with_shellexpand")]
    pub service_email: Option<String>,

    /// Path to the PEM encoded RSA private key of the service account.
    ///
    /// Default: None
    #[serde(default, deserialize_with = "convert_optional_string_with_shellexpand")]
    pub private_key_file: Option<String>,

    /// Environment variable holding a pre-minted bearer token. Used when
    /// no service account material is configured.
    ///
    /// Default: None
    #[serde(default, deserialize_with = "convert_optional_string_with_shellexpand")]
    pub token_env: Option<String>,

    /// Seconds a minted token stays cached before a refresh.
    ///
    /// Default: 3600
    #[serde(default)]
    pub token_lifetime_secs: Option<u64>,
}
