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

//! Static registry of the unary methods exposed by the reservation
//! service. Each entry pairs a stable cache key with the full gRPC path
//! and carries the request and response types at the type level, so a
//! stub fetched for a method can only be invoked with that method's
//! message pair.

use core::marker::PhantomData;

use slotcap_proto::google::cloud::bigquery::reservation::v1 as pb;

/// Fully qualified gRPC service name.
pub const SERVICE_NAME: &str = "google.cloud.bigquery.reservation.v1.ReservationService";

/// Whether a method returns a payload or only the empty sentinel
/// (`google.protobuf.Empty`, which prost maps to the unit type).
/// Deletions acknowledge without a body; everything else carries one.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ResponseKind {
    Message,
    Empty,
}

/// Type-erased description of one unary method. The `name` is the stub
/// cache key; the `path` is what goes on the wire.
#[derive(Debug)]
pub struct MethodDescriptor {
    pub name: &'static str,
    pub path: &'static str,
    pub response_kind: ResponseKind,
}

/// A method descriptor tagged with its request and response message
/// types. The marker is variance-neutral; no `Req` or `Resp` value is
/// ever stored.
#[derive(Debug)]
pub struct UnaryMethod<Req, Resp> {
    descriptor: MethodDescriptor,
    _marker: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp> UnaryMethod<Req, Resp> {
    const fn new(name: &'static str, path: &'static str, response_kind: ResponseKind) -> Self {
        Self {
            descriptor: MethodDescriptor {
                name,
                path,
                response_kind,
            },
            _marker: PhantomData,
        }
    }

    pub const fn descriptor(&'static self) -> &'static MethodDescriptor {
        &self.descriptor
    }

    pub const fn name(&self) -> &'static str {
        self.descriptor.name
    }

    pub const fn path(&self) -> &'static str {
        self.descriptor.path
    }
}

pub static CREATE_RESERVATION: UnaryMethod<pb::CreateReservationRequest, pb::Reservation> =
    UnaryMethod::new(
        "create_reservation",
        "/google.cloud.bigquery.reservation.v1.ReservationService/CreateReservation",
        ResponseKind::Message,
    );

pub static LIST_RESERVATIONS: UnaryMethod<pb::ListReservationsRequest, pb::ListReservationsResponse> =
    UnaryMethod::new(
        "list_reservations",
        "/google.cloud.bigquery.reservation.v1.ReservationService/ListReservations",
        ResponseKind::Message,
    );

pub static GET_RESERVATION: UnaryMethod<pb::GetReservationRequest, pb::Reservation> =
    UnaryMethod::new(
        "get_reservation",
        "/google.cloud.bigquery.reservation.v1.ReservationService/GetReservation",
        ResponseKind::Message,
    );

pub static DELETE_RESERVATION: UnaryMethod<pb::DeleteReservationRequest, ()> = UnaryMethod::new(
    "delete_reservation",
    "/google.cloud.bigquery.reservation.v1.ReservationService/DeleteReservation",
    ResponseKind::Empty,
);

pub static UPDATE_RESERVATION: UnaryMethod<pb::UpdateReservationRequest, pb::Reservation> =
    UnaryMethod::new(
        "update_reservation",
        "/google.cloud.bigquery.reservation.v1.ReservationService/UpdateReservation",
        ResponseKind::Message,
    );

pub static CREATE_CAPACITY_COMMITMENT: UnaryMethod<
    pb::CreateCapacityCommitmentRequest,
    pb::CapacityCommitment,
> = UnaryMethod::new(
    "create_capacity_commitment",
    "/google.cloud.bigquery.reservation.v1.ReservationService/CreateCapacityCommitment",
    ResponseKind::Message,
);

pub static LIST_CAPACITY_COMMITMENTS: UnaryMethod<
    pb::ListCapacityCommitmentsRequest,
    pb::ListCapacityCommitmentsResponse,
> = UnaryMethod::new(
    "list_capacity_commitments",
    "/google.cloud.bigquery.reservation.v1.ReservationService/ListCapacityCommitments",
    ResponseKind::Message,
);

pub static GET_CAPACITY_COMMITMENT: UnaryMethod<
    pb::GetCapacityCommitmentRequest,
    pb::CapacityCommitment,
> = UnaryMethod::new(
    "get_capacity_commitment",
    "/google.cloud.bigquery.reservation.v1.ReservationService/GetCapacityCommitment",
    ResponseKind::Message,
);

pub static DELETE_CAPACITY_COMMITMENT: UnaryMethod<pb::DeleteCapacityCommitmentRequest, ()> =
    UnaryMethod::new(
        "delete_capacity_commitment",
        "/google.cloud.bigquery.reservation.v1.ReservationService/DeleteCapacityCommitment",
        ResponseKind::Empty,
    );

pub static UPDATE_CAPACITY_COMMITMENT: UnaryMethod<
    pb::UpdateCapacityCommitmentRequest,
    pb::CapacityCommitment,
> = UnaryMethod::new(
    "update_capacity_commitment",
    "/google.cloud.bigquery.reservation.v1.ReservationService/UpdateCapacityCommitment",
    ResponseKind::Message,
);

pub static SPLIT_CAPACITY_COMMITMENT: UnaryMethod<
    pb::SplitCapacityCommitmentRequest,
    pb::SplitCapacityCommitmentResponse,
> = UnaryMethod::new(
    "split_capacity_commitment",
    "/google.cloud.bigquery.reservation.v1.ReservationService/SplitCapacityCommitment",
    ResponseKind::Message,
);

pub static MERGE_CAPACITY_COMMITMENTS: UnaryMethod<
    pb::MergeCapacityCommitmentsRequest,
    pb::CapacityCommitment,
> = UnaryMethod::new(
    "merge_capacity_commitments",
    "/google.cloud.bigquery.reservation.v1.ReservationService/MergeCapacityCommitments",
    ResponseKind::Message,
);

pub static CREATE_ASSIGNMENT: UnaryMethod<pb::CreateAssignmentRequest, pb::Assignment> =
    UnaryMethod::new(
        "create_assignment",
        "/google.cloud.bigquery.reservation.v1.ReservationService/CreateAssignment",
        ResponseKind::Message,
    );

pub static LIST_ASSIGNMENTS: UnaryMethod<pb::ListAssignmentsRequest, pb::ListAssignmentsResponse> =
    UnaryMethod::new(
        "list_assignments",
        "/google.cloud.bigquery.reservation.v1.ReservationService/ListAssignments",
        ResponseKind::Message,
    );

pub static DELETE_ASSIGNMENT: UnaryMethod<pb::DeleteAssignmentRequest, ()> = UnaryMethod::new(
    "delete_assignment",
    "/google.cloud.bigquery.reservation.v1.ReservationService/DeleteAssignment",
    ResponseKind::Empty,
);

pub static SEARCH_ASSIGNMENTS: UnaryMethod<
    pb::SearchAssignmentsRequest,
    pb::SearchAssignmentsResponse,
> = UnaryMethod::new(
    "search_assignments",
    "/google.cloud.bigquery.reservation.v1.ReservationService/SearchAssignments",
    ResponseKind::Message,
);

pub static MOVE_ASSIGNMENT: UnaryMethod<pb::MoveAssignmentRequest, pb::Assignment> =
    UnaryMethod::new(
        "move_assignment",
        "/google.cloud.bigquery.reservation.v1.ReservationService/MoveAssignment",
        ResponseKind::Message,
    );

pub static GET_BI_RESERVATION: UnaryMethod<pb::GetBiReservationRequest, pb::BiReservation> =
    UnaryMethod::new(
        "get_bi_reservation",
        "/google.cloud.bigquery.reservation.v1.ReservationService/GetBiReservation",
        ResponseKind::Message,
    );

pub static UPDATE_BI_RESERVATION: UnaryMethod<pb::UpdateBiReservationRequest, pb::BiReservation> =
    UnaryMethod::new(
        "update_bi_reservation",
        "/google.cloud.bigquery.reservation.v1.ReservationService/UpdateBiReservation",
        ResponseKind::Message,
    );

/// Erased view of every registered method, in declaration order.
pub fn all_descriptors() -> [&'static MethodDescriptor; 19] {
    [
        CREATE_RESERVATION.descriptor(),
        LIST_RESERVATIONS.descriptor(),
        GET_RESERVATION.descriptor(),
        DELETE_RESERVATION.descriptor(),
        UPDATE_RESERVATION.descriptor(),
        CREATE_CAPACITY_COMMITMENT.descriptor(),
        LIST_CAPACITY_COMMITMENTS.descriptor(),
        GET_CAPACITY_COMMITMENT.descriptor(),
        DELETE_CAPACITY_COMMITMENT.descriptor(),
        UPDATE_CAPACITY_COMMITMENT.descriptor(),
        SPLIT_CAPACITY_COMMITMENT.descriptor(),
        MERGE_CAPACITY_COMMITMENTS.descriptor(),
        CREATE_ASSIGNMENT.descriptor(),
        LIST_ASSIGNMENTS.descriptor(),
        DELETE_ASSIGNMENT.descriptor(),
        SEARCH_ASSIGNMENTS.descriptor(),
        MOVE_ASSIGNMENT.descriptor(),
        GET_BI_RESERVATION.descriptor(),
        UPDATE_BI_RESERVATION.descriptor(),
    ]
}
