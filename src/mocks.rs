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

//! In-process reservation service used by the integration tests. Serves
//! a small subset of the real surface over a loopback socket with
//! programmable failures, call counting, and capture of request
//! metadata.

use core::sync::atomic::{AtomicUsize, Ordering};
use core::task::{Context, Poll};
use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use parking_lot::Mutex;
use slotcap_error::{Error, ResultExt};
use tokio::net::TcpListener;
use tokio_stream::wrappers::TcpListenerStream;
use tonic::codegen::http;
use tonic::codegen::{BoxFuture, Service};
use tonic::server::{Grpc, NamedService, UnaryService};

use crate::methods::SERVICE_NAME;

use slotcap_proto::google::cloud::bigquery::reservation::v1 as pb;

/// Per-method call counters.
#[derive(Debug, Default)]
pub struct CallCounts {
    pub create: AtomicUsize,
    pub get: AtomicUsize,
    pub delete: AtomicUsize,
    pub other: AtomicUsize,
}

/// Shared, inspectable state behind a [`MockReservationService`].
#[derive(Debug, Default)]
pub struct MockReservationState {
    /// Reservations by full resource name.
    pub reservations: Mutex<HashMap<String, pb::Reservation>>,
    /// When set, the next handled call fails with this status and the
    /// trigger is cleared.
    pub fail_next: Mutex<Option<(tonic::Code, String)>>,
    /// Authorization header of each request, empty string when absent.
    pub seen_authorization: Mutex<Vec<String>>,
    pub calls: CallCounts,
}

impl MockReservationState {
    pub fn fail_next_call(&self, code: tonic::Code, message: impl Into<String>) {
        *self.fail_next.lock() = Some((code, message.into()));
    }

    fn take_failure(&self) -> Option<tonic::Status> {
        self.fail_next
            .lock()
            .take()
            .map(|(code, message)| tonic::Status::new(code, message))
    }
}

/// The service itself: routes the reservation CRUD paths and answers
/// everything else with UNIMPLEMENTED.
#[derive(Clone, Debug)]
pub struct MockReservationService {
    state: Arc<MockReservationState>,
}

impl MockReservationService {
    pub fn new(state: Arc<MockReservationState>) -> Self {
        Self { state }
    }
}

impl NamedService for MockReservationService {
    const NAME: &'static str = SERVICE_NAME;
}

struct CreateSvc(Arc<MockReservationState>);

impl UnaryService<pb::CreateReservationRequest> for CreateSvc {
    type Response = pb::Reservation;
    type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;

    fn call(&mut self, request: tonic::Request<pb::CreateReservationRequest>) -> Self::Future {
        let state = self.0.clone();
        Box::pin(async move {
            state.calls.create.fetch_add(1, Ordering::Relaxed);
            if let Some(status) = state.take_failure() {
                return Err(status);
            }
            let request = request.into_inner();
            let Some(mut reservation) = request.reservation else {
                return Err(tonic::Status::invalid_argument("Reservation body missing"));
            };
            reservation.name = format!("{}/reservations/{}", request.parent, request.reservation_id);
            state
                .reservations
                .lock()
                .insert(reservation.name.clone(), reservation.clone());
            Ok(tonic::Response::new(reservation))
        })
    }
}

struct GetSvc(Arc<MockReservationState>);

impl UnaryService<pb::GetReservationRequest> for GetSvc {
    type Response = pb::Reservation;
    type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;

    fn call(&mut self, request: tonic::Request<pb::GetReservationRequest>) -> Self::Future {
        let state = self.0.clone();
        Box::pin(async move {
            state.calls.get.fetch_add(1, Ordering::Relaxed);
            if let Some(status) = state.take_failure() {
                return Err(status);
            }
            let name = request.into_inner().name;
            state
                .reservations
                .lock()
                .get(&name)
                .cloned()
                .map(tonic::Response::new)
                .ok_or_else(|| tonic::Status::not_found(format!("Reservation {name} not found")))
        })
    }
}

struct DeleteSvc(Arc<MockReservationState>);

impl UnaryService<pb::DeleteReservationRequest> for DeleteSvc {
    type Response = ();
    type Future = BoxFuture<tonic::Response<Self::Response>, tonic::Status>;

    fn call(&mut self, request: tonic::Request<pb::DeleteReservationRequest>) -> Self::Future {
        let state = self.0.clone();
        Box::pin(async move {
            state.calls.delete.fetch_add(1, Ordering::Relaxed);
            if let Some(status) = state.take_failure() {
                return Err(status);
            }
            let name = request.into_inner().name;
            if state.reservations.lock().remove(&name).is_none() {
                return Err(tonic::Status::not_found(format!(
                    "Reservation {name} not found"
                )));
            }
            Ok(tonic::Response::new(()))
        })
    }
}

impl Service<http::Request<tonic::body::Body>> for MockReservationService {
    type Response = http::Response<tonic::body::Body>;
    type Error = core::convert::Infallible;
    type Future = BoxFuture<Self::Response, Self::Error>;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: http::Request<tonic::body::Body>) -> Self::Future {
        let authorization = req
            .headers()
            .get("authorization")
            .and_then(|value| value.to_str().ok())
            .unwrap_or("")
            .to_string();
        self.state.seen_authorization.lock().push(authorization);

        let state = self.state.clone();
        match req.uri().path() {
            "/google.cloud.bigquery.reservation.v1.ReservationService/CreateReservation" => {
                Box::pin(async move {
                    let mut grpc = Grpc::new(tonic::codec::ProstCodec::default());
                    Ok(grpc.unary(CreateSvc(state), req).await)
                })
            }
            "/google.cloud.bigquery.reservation.v1.ReservationService/GetReservation" => {
                Box::pin(async move {
                    let mut grpc = Grpc::new(tonic::codec::ProstCodec::default());
                    Ok(grpc.unary(GetSvc(state), req).await)
                })
            }
            "/google.cloud.bigquery.reservation.v1.ReservationService/DeleteReservation" => {
                Box::pin(async move {
                    let mut grpc = Grpc::new(tonic::codec::ProstCodec::default());
                    Ok(grpc.unary(DeleteSvc(state), req).await)
                })
            }
            _ => Box::pin(async move {
                state.calls.other.fetch_add(1, Ordering::Relaxed);
                let mut response = http::Response::new(tonic::body::Body::default());
                let headers = response.headers_mut();
                headers.insert("grpc-status", (tonic::Code::Unimplemented as i32).into());
                headers.insert(
                    http::header::CONTENT_TYPE,
                    http::HeaderValue::from_static("application/grpc"),
                );
                Ok(response)
            }),
        }
    }
}

/// Binds a loopback port and serves the mock in a background task.
/// Returns the bound address; the server runs until the runtime drops.
pub async fn spawn_mock_server(state: Arc<MockReservationState>) -> Result<SocketAddr, Error> {
    let listener = TcpListener::bind("127.0.0.1:0")
        .await
        .err_tip(|| "While binding mock server listener")?;
    let addr = listener
        .local_addr()
        .err_tip(|| "While reading mock server address")?;
    let service = MockReservationService::new(state);
    tokio::spawn(async move {
        let _ = tonic::transport::Server::builder()
            .add_service(service)
            .serve_with_incoming(TcpListenerStream::new(listener))
            .await;
    });
    Ok(addr)
}
