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

use crate::modules::common::Range;
use crate::modules::users::view::RoleList;

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupList {
    pub range: Range,
    pub items: Vec<Group>,
}

/// One group row. The `*_name`/`*_user_name` fields are denormalized by the
/// backend for display; they are never derived on this side.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Group {
    pub id: u64,
    pub name: String,
    pub created_at: String,
    pub created_by_id: i64,
    pub created_by_name: Option<String>,
    pub created_by_user_name: Option<String>,
    pub updated_at: Option<String>,
    pub updated_by_id: Option<i64>,
    pub updated_by_name: Option<String>,
    pub updated_by_user_name: Option<String>,
    pub cnt_users: Option<u64>,
    pub expire_at: Option<String>,
    pub group_roles: Option<RoleList>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct GroupUserList {
    pub range: Range,
    pub items: Vec<GroupUser>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupUser {
    pub id: i64,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub user_name: Option<String>,
}

/// Header summary for a single group, enough for the member-list page title.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupInfo {
    pub id: u64,
    pub name: String,
    pub cnt_users: Option<u64>,
}
