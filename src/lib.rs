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

//! Stub-caching gRPC client transport for the BigQuery Reservation API.
//!
//! Instead of one hand-written accessor per RPC, the transport drives a
//! single memoizing stub factory from a static method registry: stubs are
//! created on first use, cached by method name, and bound to one shared
//! channel whose construction follows explicit precedence rules
//! (explicit channel, then mutual TLS override, then lazy connect).
//!
//! Retry, backoff, and pagination belong to callers; this layer performs
//! exactly one unary exchange per invocation and surfaces remote status
//! codes unchanged.

pub mod methods;
pub mod mocks;
pub mod stub;
pub mod transport;

pub use crate::stub::{StubHandle, UnaryStub};
pub use crate::transport::{
    ClientCertSource, ReservationTransport, ResolvedConnection, TransportOptions,
    resolve_connection,
};
