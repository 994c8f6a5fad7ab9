//
// Copyright (c) 2025 covault.io (https://covault.io)
//
// This file is part of the Covault Admin Console Project
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <http://www.gnu.org/licenses/>.


use serde_json::json;
use tracing::error;

use crate::modules::error::CovaultResult;
use crate::modules::events::payload::EventParams;
use crate::modules::events::view::{EventList, OperationTypeList};
use crate::modules::remote::{decode_payload, AdminClient, RemoteCall};

pub mod payload;
pub mod view;

impl<R: RemoteCall> AdminClient<R> {
    /// Fetch one page of audit events.
    pub async fn get_events(&self, params: &EventParams) -> CovaultResult<EventList> {
        let payload = self
            .invoke("get_events", json!({ "params": params }))
            .await
            .map_err(|e| {
                error!("Failed to fetch events: {}", e);
                e
            })?;

        decode_payload(payload)
    }

    /// Fetch the catalog of operation types events can be filtered by.
    pub async fn get_operation_types(&self) -> CovaultResult<OperationTypeList> {
        let payload = self
            .invoke("get_operation_types", json!({}))
            .await
            .map_err(|e| {
                error!("Failed to fetch operation types: {}", e);
                e
            })?;

        decode_payload(payload)
    }

    /// Have the backend serialize the matching events to `path`.
    pub async fn export_events(&self, params: &EventParams, path: &str) -> CovaultResult<()> {
        self.invoke("export_events", json!({ "params": params, "path": path }))
            .await
            .map_err(|e| {
                error!("Failed to export events: {}", e);
                e
            })?;

        Ok(())
    }
}
