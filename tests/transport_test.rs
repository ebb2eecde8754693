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

use std::io::Write;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use slotcap::methods;
use slotcap::transport::{
    DEFAULT_HOST, ReservationTransport, ResolvedConnection, TransportOptions, resolve_connection,
    static_credentials,
};
use slotcap_config::{ClientTlsConfig, TransportSpec};
use slotcap_error::{Code, Error};
use slotcap_macro::slotcap_test;
use slotcap_util::tls_utils;
use tempfile::NamedTempFile;
use tonic::transport::Endpoint;

fn lazy_local_channel() -> tonic::transport::Channel {
    Endpoint::from_static("http://127.0.0.1:50051").connect_lazy()
}

#[test]
fn default_options_defer_to_production_host() -> Result<(), Error> {
    let resolved = resolve_connection(TransportOptions::default())?;
    match resolved {
        ResolvedConnection::Deferred {
            target,
            tls,
            credentials,
        } => {
            assert_eq!(target, DEFAULT_HOST);
            assert!(tls.is_none());
            assert!(credentials.is_none());
        }
        other => panic!("Expected deferred connection, got {other:?}"),
    }
    Ok(())
}

// Building even a lazy channel needs an ambient tokio runtime, so this
// one runs async despite never touching the network.
#[slotcap_test]
async fn explicit_channel_wins_and_discards_credentials() -> Result<(), Error> {
    let resolved = resolve_connection(TransportOptions {
        channel: Some(lazy_local_channel()),
        credentials: Some(static_credentials("unused-token")),
        api_mtls_endpoint: Some("mtls.example.com".to_string()),
        ..Default::default()
    })?;
    // The Supplied variant has no credential slot, so the token source
    // handed in above is gone by construction.
    assert!(matches!(resolved, ResolvedConnection::Supplied { .. }));
    Ok(())
}

#[test]
fn mtls_endpoint_beats_plain_host() -> Result<(), Error> {
    let resolved = resolve_connection(TransportOptions {
        host: "ignored.example.com".to_string(),
        api_mtls_endpoint: Some("mtls.example.com".to_string()),
        credentials: Some(static_credentials("token")),
        ..Default::default()
    })?;
    match resolved {
        ResolvedConnection::Mtls {
            target,
            credentials,
            ..
        } => {
            assert_eq!(target, "mtls.example.com:443");
            assert!(credentials.is_some());
        }
        other => panic!("Expected mutual TLS connection, got {other:?}"),
    }
    Ok(())
}

#[test]
fn mtls_endpoint_keeps_existing_port() -> Result<(), Error> {
    let resolved = resolve_connection(TransportOptions {
        api_mtls_endpoint: Some("mtls.example.com:8443".to_string()),
        ..Default::default()
    })?;
    match resolved {
        ResolvedConnection::Mtls { target, .. } => assert_eq!(target, "mtls.example.com:8443"),
        other => panic!("Expected mutual TLS connection, got {other:?}"),
    }
    Ok(())
}

#[test]
fn cert_source_failure_propagates() {
    let result = resolve_connection(TransportOptions {
        api_mtls_endpoint: Some("mtls.example.com".to_string()),
        client_cert_source: Some(Box::new(|| {
            Err(Error::new(
                Code::NotFound,
                "No client certificate on this machine".to_string(),
            ))
        })),
        ..Default::default()
    });
    let err = result.err().unwrap();
    assert_eq!(err.code, Code::NotFound);
    assert!(
        err.message_string().contains("client certificate"),
        "unexpected message: {err:?}"
    );
}

#[test]
fn supplied_base_tls_reaches_the_deferred_plan() -> Result<(), Error> {
    let resolved = resolve_connection(TransportOptions {
        tls: Some(tls_utils::default_tls_config()),
        ..Default::default()
    })?;
    match resolved {
        ResolvedConnection::Deferred { tls, .. } => assert!(tls.is_some()),
        other => panic!("Expected deferred connection, got {other:?}"),
    }
    Ok(())
}

#[test]
fn empty_host_is_rejected() {
    let err = resolve_connection(TransportOptions {
        host: String::new(),
        ..Default::default()
    })
    .err()
    .unwrap();
    assert_eq!(err.code, Code::InvalidArgument);
}

#[slotcap_test]
async fn deferred_transport_does_not_connect_up_front() -> Result<(), Error> {
    let transport = ReservationTransport::new(TransportOptions {
        host: "http://127.0.0.1:1".to_string(),
        ..Default::default()
    })
    .await?;
    assert_eq!(transport.target(), Some("http://127.0.0.1:1"));
    assert!(!transport.is_connected().await);
    assert_eq!(transport.cached_stub_count(), 0);
    Ok(())
}

#[slotcap_test]
async fn supplied_channel_is_used_without_connecting() -> Result<(), Error> {
    let transport = ReservationTransport::new(TransportOptions {
        channel: Some(lazy_local_channel()),
        ..Default::default()
    })
    .await?;
    assert_eq!(transport.target(), None);
    assert!(transport.is_connected().await);
    Ok(())
}

#[slotcap_test]
async fn stubs_are_memoized_per_method() -> Result<(), Error> {
    let transport = ReservationTransport::new(TransportOptions {
        channel: Some(lazy_local_channel()),
        ..Default::default()
    })
    .await?;

    let first = transport.stub(&methods::GET_RESERVATION).await?;
    let second = transport.stub(&methods::GET_RESERVATION).await?;
    assert!(Arc::ptr_eq(first.handle(), second.handle()));
    assert_eq!(transport.cached_stub_count(), 1);

    let other = transport.stub(&methods::DELETE_RESERVATION).await?;
    assert!(!Arc::ptr_eq(first.handle(), other.handle()));
    assert_eq!(transport.cached_stub_count(), 2);
    Ok(())
}

#[slotcap_test]
async fn concurrent_misses_create_one_stub() -> Result<(), Error> {
    let transport = Arc::new(
        ReservationTransport::new(TransportOptions {
            channel: Some(lazy_local_channel()),
            ..Default::default()
        })
        .await?,
    );

    let mut tasks = Vec::new();
    for _ in 0..16 {
        let transport = transport.clone();
        tasks.push(tokio::spawn(async move {
            transport.stub(&methods::CREATE_ASSIGNMENT).await
        }));
    }
    let stubs = futures::future::try_join_all(tasks)
        .await
        .map_err(Error::from)?
        .into_iter()
        .collect::<Result<Vec<_>, Error>>()?;

    assert_eq!(transport.cached_stub_count(), 1);
    for stub in &stubs[1..] {
        assert!(Arc::ptr_eq(stubs[0].handle(), stub.handle()));
    }
    Ok(())
}

#[slotcap_test]
async fn spec_with_missing_ca_file_fails_at_construction() {
    let err = ReservationTransport::from_spec(&TransportSpec {
        tls: Some(ClientTlsConfig {
            ca_file: Some("/definitely/not/a/real/ca.pem".to_string()),
            cert_file: None,
            key_file: None,
        }),
        ..Default::default()
    })
    .await
    .err()
    .unwrap();
    assert_eq!(err.code, Code::NotFound);
}

#[slotcap_test]
async fn spec_ca_file_is_read_and_transport_stays_deferred() -> Result<(), Error> {
    let mut ca_file = NamedTempFile::new().map_err(Error::from)?;
    ca_file
        .write_all(b"-----BEGIN CERTIFICATE-----\nMIIB\n-----END CERTIFICATE-----\n")
        .map_err(Error::from)?;

    let transport = ReservationTransport::from_spec(&TransportSpec {
        tls: Some(ClientTlsConfig {
            ca_file: Some(ca_file.path().to_string_lossy().into_owned()),
            cert_file: None,
            key_file: None,
        }),
        ..Default::default()
    })
    .await?;

    assert_eq!(transport.target(), Some(DEFAULT_HOST));
    assert!(!transport.is_connected().await);
    Ok(())
}

#[slotcap_test]
async fn stub_descriptor_matches_requested_method() -> Result<(), Error> {
    let transport = ReservationTransport::new(TransportOptions {
        channel: Some(lazy_local_channel()),
        ..Default::default()
    })
    .await?;
    let stub = transport.stub(&methods::SEARCH_ASSIGNMENTS).await?;
    assert_eq!(stub.handle().descriptor().name, "search_assignments");
    Ok(())
}
