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


use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::modules::common::Range;

/// The event envelope carries its list under `events`, not `items`.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct EventList {
    pub range: Range,
    pub events: Vec<Event>,
}

#[derive(Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub time: DateTime<Utc>,
    pub user_id: i64,
    pub message: String,
    pub user_name: Option<String>,
    pub status: Option<String>,
    pub operation_id: Option<i64>,
    pub operation_name: Option<String>,
    pub auth_parent_source: Option<String>,
    pub auth_parent_target: Option<String>,
    pub object_id1: Option<i64>,
    pub object_id2: Option<i64>,
    pub object_name1: Option<String>,
    pub object_name2: Option<String>,
    pub object_type1: Option<i64>,
    pub object_type2: Option<i64>,
    pub attribute1: Option<String>,
    pub attribute2: Option<String>,
    pub attribute3: Option<String>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct OperationTypeList {
    pub operations: Vec<OperationType>,
}

#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct OperationType {
    pub id: i64,
    pub name: String,
}
