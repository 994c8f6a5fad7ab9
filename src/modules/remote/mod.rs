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


use std::future::Future;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::modules::error::{code::ErrorCode, CovaultResult};
use crate::raise_error;

#[cfg(test)]
pub mod mock;

/// Boundary to the backend process. One named command per call, a flat
/// JSON-serializable argument object in, a JSON payload (or the propagated
/// backend error) out. No retries, no timeouts, no cancellation live here;
/// whatever policy the transport wants is the transport's business.
pub trait RemoteCall: Send + Sync {
    fn invoke(
        &self,
        command: &str,
        args: Value,
    ) -> impl Future<Output = CovaultResult<Value>> + Send;
}

impl<T: RemoteCall> RemoteCall for &T {
    fn invoke(
        &self,
        command: &str,
        args: Value,
    ) -> impl Future<Output = CovaultResult<Value>> + Send {
        (*self).invoke(command, args)
    }
}

/// Entry point for every query and export façade. Owns nothing but the
/// injected transport; the resource modules attach their operations through
/// `impl` blocks of their own.
#[derive(Clone)]
pub struct AdminClient<R> {
    transport: R,
}

impl<R: RemoteCall> AdminClient<R> {
    pub fn new(transport: R) -> Self {
        Self { transport }
    }

    pub(crate) async fn invoke(&self, command: &str, args: Value) -> CovaultResult<Value> {
        self.transport.invoke(command, args).await
    }
}

/// Decode a remote payload into its typed shape. A payload that does not
/// match the declared type is a broken backend contract, not a user error.
pub(crate) fn decode_payload<T: DeserializeOwned>(payload: Value) -> CovaultResult<T> {
    serde_json::from_value(payload).map_err(|e| {
        raise_error!(
            format!("malformed response payload: {e}"),
            ErrorCode::MalformedResponse
        )
    })
}
