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

// *** DO NOT MODIFY ***
// Message types generated with prost-build from the upstream googleapis
// proto definitions. Service codegen is intentionally disabled; the
// slotcap transport binds methods through its own descriptor registry.

#![allow(clippy::default_trait_access, clippy::doc_markdown)]

pub mod google {
    pub mod cloud {
        pub mod bigquery {
            pub mod reservation {
                pub mod v1 {
                    include!("google.cloud.bigquery.reservation.v1.pb.rs");
                }
            }
        }
    }
    pub mod rpc {
        include!("google.rpc.pb.rs");
    }
}
