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

/// Window reported by the backend alongside every paged list: the slice that
/// was actually served plus the server-known total.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub offset: u64,
    pub limit: u64,
    pub total: u64,
}

impl Range {
    /// Number of items the paired list must contain:
    /// `min(limit, total - offset)`, or 0 once the offset runs past the total.
    pub fn expected_items(&self) -> u64 {
        if self.offset >= self.total {
            return 0;
        }

        (self.total - self.offset).min(self.limit)
    }
}

/// Request descriptor shared by every list query. Absent fields mean
/// "server default"; the client never assumes what that default is.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct ListParams {
    pub offset: Option<u64>,
    pub limit: Option<u64>,
    pub filter: Option<String>,
    pub sort: Option<String>,
}
