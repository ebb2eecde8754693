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
use slotcap_config::{DEFAULT_HOST, TransportSpec};

#[test]
fn empty_spec_uses_production_defaults() {
    let spec: TransportSpec = serde_json::from_str("{}").unwrap();
    assert_eq!(spec.host, DEFAULT_HOST);
    assert!(spec.api_mtls_endpoint.is_none());
    assert!(spec.tls.is_none());
    assert!(spec.auth.is_none());
}

#[test]
fn full_spec_parses() {
    let spec: TransportSpec = serde_json::from_str(
        r#"{
            "host": "staging.example.com:8443",
            "api_mtls_endpoint": "mtls.example.com",
            "tls": {
                "cert_file": "/etc/tls/client.crt",
                "key_file": "/etc/tls/client.key"
            },
            "auth": {
                "service_email": "robot@project.iam.gserviceaccount.com",
                "private_key_file": "/etc/keys/robot.pem",
                "token_lifetime_secs": 1800
            }
        }"#,
    )
    .unwrap();

    assert_eq!(spec.host, "staging.example.com:8443");
    assert_eq!(spec.api_mtls_endpoint.as_deref(), Some("mtls.example.com"));
    let tls = spec.tls.unwrap();
    assert_eq!(tls.cert_file.as_deref(), Some("/etc/tls/client.crt"));
    assert!(tls.ca_file.is_none());
    let auth = spec.auth.unwrap();
    assert_eq!(auth.token_lifetime_secs, Some(1800));
    assert!(auth.token_env.is_none());
}

#[test]
fn environment_variables_expand_in_strings() {
    // Safety: no other test in this binary reads this variable.
    unsafe {
        std::env::set_var("SLOTCAP_SPEC_TEST_HOST", "expanded.example.com");
    }
    let spec: TransportSpec =
        serde_json::from_str(r#"{"host": "$SLOTCAP_SPEC_TEST_HOST"}"#).unwrap();
    assert_eq!(spec.host, "expanded.example.com");
}

#[test]
fn unknown_fields_are_rejected() {
    let result = serde_json::from_str::<TransportSpec>(r#"{"hostname": "typo.example.com"}"#);
    let err = result.err().unwrap().to_string();
    assert!(err.contains("unknown field"), "unexpected error: {err}");
}
