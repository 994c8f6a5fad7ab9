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


use std::time::Instant;

use serde_json::json;
use tracing::{error, info};

use crate::modules::common::ListParams;
use crate::modules::error::CovaultResult;
use crate::modules::groups::view::{GroupInfo, GroupList, GroupUserList};
use crate::modules::remote::{decode_payload, AdminClient, RemoteCall};

pub mod view;

impl<R: RemoteCall> AdminClient<R> {
    /// Fetch the header summary of a single group.
    pub async fn get_group(&self, group_id: u64) -> CovaultResult<GroupInfo> {
        let now = Instant::now();

        let payload = self
            .invoke("get_group", json!({ "groupId": group_id }))
            .await
            .map_err(|e| {
                error!("Failed to fetch group {}: {}", group_id, e);
                e
            })?;

        let group: GroupInfo = decode_payload(payload)?;

        let elapsed = now.elapsed().as_millis();
        info!("Fetched group {} in {} ms", group_id, elapsed);

        Ok(group)
    }

    /// Fetch one page of groups.
    pub async fn get_groups(&self, params: &ListParams) -> CovaultResult<GroupList> {
        let now = Instant::now();

        let payload = self
            .invoke("get_groups", json!({ "params": params }))
            .await
            .map_err(|e| {
                error!("Failed to fetch groups: {}", e);
                e
            })?;

        let groups: GroupList = decode_payload(payload)?;

        let elapsed = now.elapsed().as_millis();
        info!("Fetched {} groups in {} ms", groups.items.len(), elapsed);

        Ok(groups)
    }

    /// Fetch one page of a group's members.
    pub async fn get_group_users(
        &self,
        group_id: u64,
        params: &ListParams,
    ) -> CovaultResult<GroupUserList> {
        let now = Instant::now();

        let payload = self
            .invoke(
                "get_group_users",
                json!({ "groupId": group_id, "params": params }),
            )
            .await
            .map_err(|e| {
                error!("Failed to fetch group users: {}", e);
                e
            })?;

        let group_users: GroupUserList = decode_payload(payload)?;

        let elapsed = now.elapsed().as_millis();
        info!(
            "Fetched {} group users in {} ms",
            group_users.items.len(),
            elapsed
        );

        Ok(group_users)
    }

    /// Have the backend serialize the matching groups to `path`.
    pub async fn export_groups(&self, params: &ListParams, path: &str) -> CovaultResult<()> {
        self.invoke("export_groups", json!({ "params": params, "path": path }))
            .await
            .map_err(|e| {
                error!("Failed to export groups: {}", e);
                e
            })?;

        Ok(())
    }

    /// Have the backend serialize the matching members of one group to `path`.
    pub async fn export_group_users(
        &self,
        group_id: u64,
        params: &ListParams,
        path: &str,
    ) -> CovaultResult<()> {
        self.invoke(
            "export_group_users",
            json!({ "groupId": group_id, "params": params, "path": path }),
        )
        .await
        .map_err(|e| {
            error!("Failed to export group users: {}", e);
            e
        })?;

        Ok(())
    }

    /// Have the backend serialize every member of every group to `path`.
    pub async fn export_all_group_users(&self, path: &str) -> CovaultResult<()> {
        self.invoke("export_all_group_users", json!({ "path": path }))
            .await
            .map_err(|e| {
                error!("Failed to export all group users: {}", e);
                e
            })?;

        Ok(())
    }
}
