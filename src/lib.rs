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


//! Data-access core of the Covault admin console: typed query façades over
//! an injected remote-call transport, plus the pure display-shaping helpers
//! (permission template classifier, node info projection). The embedding
//! console owns the transport, the runtime and all rendering.

pub mod modules;

pub use modules::common::{ListParams, Range};
pub use modules::error::{CovaultError, CovaultResult};
pub use modules::permissions::template::{classify, PermissionTemplate};
pub use modules::remote::{AdminClient, RemoteCall};
pub use modules::session::{Session, UserAccount};
