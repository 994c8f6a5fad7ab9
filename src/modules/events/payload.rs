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

/// Request descriptor for the audit-event listing. Events filter on their
/// own axes (actor, operation, time window, outcome) instead of the generic
/// `filter`/`sort` strings the other listings take.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventParams {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub user_id: Option<i64>,
    pub operation_type: Option<i64>,
    pub from_date: Option<String>,
    pub to_date: Option<String>,
    pub status: Option<u8>,
}
