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


use serde::{Deserialize, Serialize};

/// The ten independent permission flags a user can hold on a node. Any
/// combination is legal; naming a combination is the classifier's job.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePermissions {
    pub manage: bool,
    pub read: bool,
    pub create: bool,
    pub change: bool,
    pub delete: bool,
    pub manage_download_share: bool,
    pub manage_upload_share: bool,
    pub read_recycle_bin: bool,
    pub restore_recycle_bin: bool,
    pub delete_recycle_bin: bool,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPermissions {
    pub user_id: i64,
    pub user_login: String,
    pub user_first_name: String,
    pub user_last_name: String,
    pub permissions: NodePermissions,
}

/// One node with the full per-user permission detail, as returned by the
/// permissions listing.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodePermissionsListEntry {
    pub node_id: i64,
    pub node_name: String,
    pub node_parent_path: String,
    pub node_cnt_children: u64,
    pub user_permissions: Option<Vec<UserPermissions>>,
    pub node_parent_id: Option<i64>,
    pub node_size: Option<u64>,
    pub node_recycle_bin_retention_period: Option<u64>,
    pub node_quota: Option<u64>,
    pub node_is_encrypted: Option<bool>,
    pub node_has_activities_log: Option<bool>,
    pub node_created_at: Option<String>,
    pub node_updated_at: Option<String>,
    pub node_created_by: Option<String>,
    pub node_created_by_id: Option<i64>,
    pub node_updated_by: Option<String>,
    pub node_updated_by_id: Option<i64>,
}

/// Lighter projection of a permissions entry for node overview tables: the
/// per-user detail collapses into a count, everything else is copied 1:1.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeInfo {
    pub node_id: i64,
    pub node_name: String,
    pub node_parent_path: String,
    pub node_cnt_children: u64,
    pub cnt_permissions: u64,
    pub node_parent_id: Option<i64>,
    pub node_size: Option<u64>,
    pub node_recycle_bin_retention_period: Option<u64>,
    pub node_quota: Option<u64>,
    pub node_is_encrypted: Option<bool>,
    pub node_has_activities_log: Option<bool>,
    pub node_created_at: Option<String>,
    pub node_updated_at: Option<String>,
    pub node_created_by: Option<String>,
    pub node_created_by_id: Option<i64>,
    pub node_updated_by: Option<String>,
    pub node_updated_by_id: Option<i64>,
}

impl From<NodePermissionsListEntry> for NodeInfo {
    fn from(value: NodePermissionsListEntry) -> Self {
        NodeInfo {
            node_id: value.node_id,
            node_name: value.node_name,
            node_parent_path: value.node_parent_path,
            node_cnt_children: value.node_cnt_children,
            cnt_permissions: value
                .user_permissions
                .as_ref()
                .map_or(0, |permissions| permissions.len() as u64),
            node_parent_id: value.node_parent_id,
            node_size: value.node_size,
            node_recycle_bin_retention_period: value.node_recycle_bin_retention_period,
            node_quota: value.node_quota,
            node_is_encrypted: value.node_is_encrypted,
            node_has_activities_log: value.node_has_activities_log,
            node_created_at: value.node_created_at,
            node_updated_at: value.node_updated_at,
            node_created_by: value.node_created_by,
            node_created_by_id: value.node_created_by_id,
            node_updated_by: value.node_updated_by,
            node_updated_by_id: value.node_updated_by_id,
        }
    }
}
