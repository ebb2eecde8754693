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

use std::collections::HashSet;

use pretty_assertions::assert_eq;
use slotcap::methods::{self, ResponseKind, SERVICE_NAME};

#[test]
fn registry_has_every_service_method() {
    assert_eq!(methods::all_descriptors().len(), 19);
}

#[test]
fn registry_names_are_unique() {
    let descriptors = methods::all_descriptors();
    let names: HashSet<&str> = descriptors.iter().map(|d| d.name).collect();
    assert_eq!(names.len(), descriptors.len());
}

#[test]
fn registry_paths_are_unique_and_well_formed() {
    let descriptors = methods::all_descriptors();
    let paths: HashSet<&str> = descriptors.iter().map(|d| d.path).collect();
    assert_eq!(paths.len(), descriptors.len());

    let prefix = format!("/{SERVICE_NAME}/");
    for descriptor in descriptors {
        assert!(
            descriptor.path.starts_with(&prefix),
            "{} does not start with {prefix}",
            descriptor.path
        );
        let rpc = &descriptor.path[prefix.len()..];
        assert!(!rpc.is_empty());
        assert!(!rpc.contains('/'), "unexpected path segment in {rpc}");
    }
}

#[test]
fn deletions_return_the_empty_sentinel() {
    let empty_methods: Vec<&str> = methods::all_descriptors()
        .iter()
        .filter(|d| d.response_kind == ResponseKind::Empty)
        .map(|d| d.name)
        .collect();
    assert_eq!(
        empty_methods,
        vec![
            "delete_reservation",
            "delete_capacity_commitment",
            "delete_assignment",
        ]
    );
}

#[test]
fn descriptor_accessors_agree() {
    assert_eq!(
        methods::GET_RESERVATION.name(),
        methods::GET_RESERVATION.descriptor().name
    );
    assert_eq!(
        methods::GET_RESERVATION.path(),
        "/google.cloud.bigquery.reservation.v1.ReservationService/GetReservation"
    );
}
