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

use core::sync::atomic::Ordering;
use std::sync::Arc;

use pretty_assertions::assert_eq;
use slotcap::methods;
use slotcap::mocks::{MockReservationState, spawn_mock_server};
use slotcap::transport::{ReservationTransport, TransportOptions, static_credentials};
use slotcap_error::{Code, Error};
use slotcap_macro::slotcap_test;
use slotcap_proto::google::cloud::bigquery::reservation::v1 as pb;

const RESERVATION_NAME: &str = "projects/p/locations/us/reservations/prod";

async fn transport_for_mock(
    state: Arc<MockReservationState>,
    token: Option<&str>,
) -> Result<ReservationTransport, Error> {
    let addr = spawn_mock_server(state).await?;
    ReservationTransport::new(TransportOptions {
        host: format!("http://{addr}"),
        credentials: token.map(static_credentials),
        ..Default::default()
    })
    .await
}

fn seeded_state() -> Arc<MockReservationState> {
    let state = Arc::new(MockReservationState::default());
    state.reservations.lock().insert(
        RESERVATION_NAME.to_string(),
        pb::Reservation {
            name: RESERVATION_NAME.to_string(),
            slot_capacity: 500,
            ignore_idle_slots: true,
        },
    );
    state
}

#[slotcap_test]
async fn get_reservation_decodes_response() -> Result<(), Error> {
    let state = seeded_state();
    let transport = transport_for_mock(state.clone(), None).await?;

    let stub = transport.stub(&methods::GET_RESERVATION).await?;
    let reservation = stub
        .invoke(pb::GetReservationRequest {
            name: RESERVATION_NAME.to_string(),
        })
        .await?;

    assert_eq!(reservation.name, RESERVATION_NAME);
    assert_eq!(reservation.slot_capacity, 500);
    assert!(reservation.ignore_idle_slots);
    assert_eq!(state.calls.get.load(Ordering::Relaxed), 1);
    assert!(transport.is_connected().await);
    Ok(())
}

#[slotcap_test]
async fn create_reservation_round_trips_body() -> Result<(), Error> {
    let state = Arc::new(MockReservationState::default());
    let transport = transport_for_mock(state.clone(), None).await?;

    let stub = transport.stub(&methods::CREATE_RESERVATION).await?;
    let created = stub
        .invoke(pb::CreateReservationRequest {
            parent: "projects/p/locations/us".to_string(),
            reservation_id: "batch".to_string(),
            reservation: Some(pb::Reservation {
                slot_capacity: 100,
                ..Default::default()
            }),
        })
        .await?;

    assert_eq!(created.name, "projects/p/locations/us/reservations/batch");
    assert_eq!(created.slot_capacity, 100);
    assert_eq!(state.calls.create.load(Ordering::Relaxed), 1);
    Ok(())
}

#[slotcap_test]
async fn delete_returns_empty_sentinel() -> Result<(), Error> {
    let state = seeded_state();
    let transport = transport_for_mock(state.clone(), None).await?;

    let stub = transport.stub(&methods::DELETE_RESERVATION).await?;
    let () = stub
        .invoke(pb::DeleteReservationRequest {
            name: RESERVATION_NAME.to_string(),
        })
        .await?;

    assert!(state.reservations.lock().is_empty());
    assert_eq!(state.calls.delete.load(Ordering::Relaxed), 1);
    Ok(())
}

#[slotcap_test]
async fn remote_status_codes_pass_through() -> Result<(), Error> {
    let state = seeded_state();
    let transport = transport_for_mock(state.clone(), None).await?;
    state.fail_next_call(tonic::Code::FailedPrecondition, "reservation has assignments");

    let stub = transport.stub(&methods::DELETE_RESERVATION).await?;
    let err = stub
        .invoke(pb::DeleteReservationRequest {
            name: RESERVATION_NAME.to_string(),
        })
        .await
        .err()
        .unwrap();

    assert_eq!(err.code, Code::FailedPrecondition);
    assert!(
        err.message_string().contains("reservation has assignments"),
        "unexpected message: {err:?}"
    );
    // The failure trigger is one-shot; the reservation is still there.
    assert!(state.reservations.lock().contains_key(RESERVATION_NAME));
    Ok(())
}

#[slotcap_test]
async fn missing_resource_maps_to_not_found() -> Result<(), Error> {
    let state = Arc::new(MockReservationState::default());
    let transport = transport_for_mock(state, None).await?;

    let stub = transport.stub(&methods::GET_RESERVATION).await?;
    let err = stub
        .invoke(pb::GetReservationRequest {
            name: "projects/p/locations/us/reservations/ghost".to_string(),
        })
        .await
        .err()
        .unwrap();
    assert_eq!(err.code, Code::NotFound);
    Ok(())
}

#[slotcap_test]
async fn credentials_attach_bearer_metadata() -> Result<(), Error> {
    let state = seeded_state();
    let transport = transport_for_mock(state.clone(), Some("token-abc")).await?;

    let stub = transport.stub(&methods::GET_RESERVATION).await?;
    stub.invoke(pb::GetReservationRequest {
        name: RESERVATION_NAME.to_string(),
    })
    .await?;

    let seen = state.seen_authorization.lock().clone();
    assert_eq!(seen, vec!["Bearer token-abc".to_string()]);
    Ok(())
}

#[slotcap_test]
async fn calls_without_credentials_send_no_authorization() -> Result<(), Error> {
    let state = seeded_state();
    let transport = transport_for_mock(state.clone(), None).await?;

    let stub = transport.stub(&methods::GET_RESERVATION).await?;
    stub.invoke(pb::GetReservationRequest {
        name: RESERVATION_NAME.to_string(),
    })
    .await?;

    let seen = state.seen_authorization.lock().clone();
    assert_eq!(seen, vec![String::new()]);
    Ok(())
}

#[slotcap_test]
async fn unregistered_method_is_unimplemented() -> Result<(), Error> {
    let state = seeded_state();
    let transport = transport_for_mock(state.clone(), None).await?;

    let stub = transport.stub(&methods::GET_BI_RESERVATION).await?;
    let err = stub
        .invoke(pb::GetBiReservationRequest {
            name: "projects/p/locations/us/biReservation".to_string(),
        })
        .await
        .err()
        .unwrap();
    assert_eq!(err.code, Code::Unimplemented);
    assert_eq!(state.calls.other.load(Ordering::Relaxed), 1);
    Ok(())
}

#[slotcap_test]
async fn unreachable_target_surfaces_unavailable() -> Result<(), Error> {
    let transport = ReservationTransport::new(TransportOptions {
        // Port 1 on loopback refuses connections.
        host: "http://127.0.0.1:1".to_string(),
        ..Default::default()
    })
    .await?;

    let err = transport
        .stub(&methods::GET_RESERVATION)
        .await
        .err()
        .unwrap();
    assert_eq!(err.code, Code::Unavailable);
    assert!(!transport.is_connected().await);
    Ok(())
}
