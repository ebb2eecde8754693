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
use core::marker::PhantomData;
use std::sync::Arc;

use prost::Message;
use slotcap_error::{Code, Error, make_err};
use slotcap_util::auth::TokenSource;
use tonic::client::Grpc;
use tonic::codec::ProstCodec;
use tonic::codegen::http::uri::PathAndQuery;
use tonic::metadata::AsciiMetadataValue;
use tonic::transport::Channel;

use crate::methods::{MethodDescriptor, UnaryMethod};

/// One cached callable, bound to a method and the transport's shared
/// channel. Handles are created once per method and live in the
/// transport's cache; cloning the `Arc` is how callers share them.
pub struct StubHandle {
    grpc: Grpc<Channel>,
    descriptor: &'static MethodDescriptor,
    token_source: Option<Arc<dyn TokenSource>>,
}

impl fmt::Debug for StubHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StubHandle")
            .field("descriptor", &self.descriptor)
            .field("authenticated", &self.token_source.is_some())
            .finish_non_exhaustive()
    }
}

impl StubHandle {
    pub(crate) fn new(
        channel: Channel,
        descriptor: &'static MethodDescriptor,
        token_source: Option<Arc<dyn TokenSource>>,
    ) -> Self {
        Self {
            grpc: Grpc::new(channel),
            descriptor,
            token_source,
        }
    }

    pub const fn descriptor(&self) -> &'static MethodDescriptor {
        self.descriptor
    }

    /// Performs one unary exchange on this handle's method. Remote status
    /// codes pass through unchanged; no retry or backoff happens here.
    pub async fn call_unary<Req, Resp>(&self, request: Req) -> Result<Resp, Error>
    where
        Req: Message + Default + Send + Sync + 'static,
        Resp: Message + Default + Send + Sync + 'static,
    {
        let mut request = tonic::Request::new(request);
        if let Some(source) = &self.token_source {
            let token = source.token().await?;
            let bearer: AsciiMetadataValue = format!("Bearer {token}").parse().map_err(|e| {
                make_err!(
                    Code::Unauthenticated,
                    "Token is not valid header material: {e}"
                )
            })?;
            request.metadata_mut().insert("authorization", bearer);
        }

        let mut grpc = self.grpc.clone();
        grpc.ready().await.map_err(|e| {
            make_err!(
                Code::Unavailable,
                "Connection not ready for {}: {e}",
                self.descriptor.name
            )
        })?;
        let codec: ProstCodec<Req, Resp> = ProstCodec::default();
        let response = grpc
            .unary(request, PathAndQuery::from_static(self.descriptor.path), codec)
            .await?;
        Ok(response.into_inner())
    }
}

/// Typed front for a cached [`StubHandle`]. The method's message pair is
/// carried in the type, so a caller cannot send the wrong request to a
/// cached stub.
pub struct UnaryStub<Req, Resp> {
    handle: Arc<StubHandle>,
    _marker: PhantomData<fn(Req) -> Resp>,
}

impl<Req, Resp> Clone for UnaryStub<Req, Resp> {
    fn clone(&self) -> Self {
        Self {
            handle: self.handle.clone(),
            _marker: PhantomData,
        }
    }
}

impl<Req, Resp> fmt::Debug for UnaryStub<Req, Resp> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("UnaryStub").field(&self.handle).finish()
    }
}

impl<Req, Resp> UnaryStub<Req, Resp>
where
    Req: Message + Default + Send + Sync + 'static,
    Resp: Message + Default + Send + Sync + 'static,
{
    pub(crate) fn new(handle: Arc<StubHandle>, _method: &'static UnaryMethod<Req, Resp>) -> Self {
        Self {
            handle,
            _marker: PhantomData,
        }
    }

    /// The shared handle backing this stub. Two stubs for the same method
    /// point at the same handle, observable with [`Arc::ptr_eq`].
    pub const fn handle(&self) -> &Arc<StubHandle> {
        &self.handle
    }

    pub async fn invoke(&self, request: Req) -> Result<Resp, Error> {
        self.handle.call_unary(request).await
    }
}
