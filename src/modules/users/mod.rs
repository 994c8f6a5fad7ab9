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

use crate::modules::common::ListParams;
use crate::modules::error::CovaultResult;
use crate::modules::remote::{decode_payload, AdminClient, RemoteCall};
use crate::modules::users::view::UserList;

pub mod view;

impl<R: RemoteCall> AdminClient<R> {
    /// Fetch one page of users.
    pub async fn get_users(&self, params: &ListParams) -> CovaultResult<UserList> {
        let payload = self
            .invoke("get_users", json!({ "params": params }))
            .await
            .map_err(|e| {
                error!("Failed to fetch users: {}", e);
                e
            })?;

        decode_payload(payload)
    }

    /// Have the backend serialize the matching users to `path`. Nothing but
    /// success or failure crosses back.
    pub async fn export_users(&self, params: &ListParams, path: &str) -> CovaultResult<()> {
        self.invoke("export_users", json!({ "params": params, "path": path }))
            .await
            .map_err(|e| {
                error!("Failed to export users: {}", e);
                e
            })?;

        Ok(())
    }
}
