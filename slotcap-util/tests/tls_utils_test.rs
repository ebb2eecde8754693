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

use pretty_assertions::assert_eq;
use slotcap_config::ClientTlsConfig;
use slotcap_error::Error;
use slotcap_util::tls_utils::{
    default_tls_config, endpoint_from, load_client_config, mtls_client_config, with_default_port,
};
use tempfile::NamedTempFile;

#[test]
fn default_port_is_appended_to_bare_hosts() {
    assert_eq!(with_default_port("svc.example.com"), "svc.example.com:443");
    assert_eq!(
        with_default_port("svc.example.com:8443"),
        "svc.example.com:8443"
    );
}

#[test]
fn bare_target_accepts_tls_config() -> Result<(), Error> {
    // No scheme means https is assumed, so ambient TLS applies cleanly.
    endpoint_from("svc.example.com:443", Some(default_tls_config()))?;
    Ok(())
}

#[test]
fn grpcs_scheme_maps_to_https() -> Result<(), Error> {
    // Would fail with the scheme error below if grpcs were left as-is.
    endpoint_from("grpcs://svc.example.com:443", Some(default_tls_config()))?;
    Ok(())
}

#[test]
fn tls_on_plaintext_scheme_is_rejected() {
    let result = endpoint_from("http://svc.example.com", Some(default_tls_config()));
    assert!(matches!(
        result,
        Err(e) if e.to_string().contains("scheme is not https")
    ));
}

#[test]
fn http_endpoint_without_tls_is_allowed() -> Result<(), Error> {
    endpoint_from("http://127.0.0.1:50051", None)?;
    Ok(())
}

#[test]
fn unparsable_target_is_rejected() {
    let result = endpoint_from("https://exa mple.com", None);
    assert!(matches!(
        result,
        Err(e) if e.to_string().contains("Unable to parse endpoint")
    ));
}

#[test]
fn no_tls_spec_yields_no_config() -> Result<(), Error> {
    let config = load_client_config(&None)?;
    assert!(config.is_none());
    Ok(())
}

#[test]
fn cert_and_key_files_load_together() -> Result<(), Error> {
    let temp_file = NamedTempFile::new()?;
    let path = temp_file.path().to_str().unwrap().to_string();
    let config = load_client_config(&Some(ClientTlsConfig {
        ca_file: Some(path.clone()),
        cert_file: Some(path.clone()),
        key_file: Some(path),
    }))?;
    assert!(config.is_some());
    Ok(())
}

#[test]
fn cert_without_key_is_rejected() {
    let result = load_client_config(&Some(ClientTlsConfig {
        ca_file: None,
        cert_file: Some("tls.crt".to_string()),
        key_file: None,
    }));
    assert!(matches!(
        result,
        Err(e) if e.to_string().contains("Client certificate specified, but no key")
    ));
}

#[test]
fn key_without_cert_is_rejected() {
    let result = load_client_config(&Some(ClientTlsConfig {
        ca_file: None,
        cert_file: None,
        key_file: Some("tls.key".to_string()),
    }));
    assert!(matches!(
        result,
        Err(e) if e.to_string().contains("Client key specified, but no certificate")
    ));
}

#[test]
fn in_memory_mtls_material_builds_config() {
    // Construction only; the material is not parsed until a handshake.
    let _config = mtls_client_config(default_tls_config(), b"cert pem bytes", b"key pem bytes");
}
