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
use serde_json::json;
use tracing::error;

use crate::modules::error::CovaultResult;
use crate::modules::remote::{decode_payload, AdminClient, RemoteCall};

/// Tenant headline numbers for the console dashboard.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerInfo {
    pub space_limit: u64,
    pub space_used: u64,
    pub user_count: u64,
    pub user_limit: u64,
    pub cnt_internal_user: Option<u64>,
    pub cnt_guest_user: Option<u64>,
    pub encryption_enabled: bool,
}

impl<R: RemoteCall> AdminClient<R> {
    pub async fn get_customer_info(&self) -> CovaultResult<CustomerInfo> {
        let payload = self
            .invoke("get_customer_info", json!({}))
            .await
            .map_err(|e| {
                error!("Failed to fetch customer info: {}", e);
                e
            })?;

        decode_payload(payload)
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use crate::modules::remote::{mock::MockTransport, AdminClient};

    #[tokio::test]
    async fn get_customer_info_takes_no_arguments() {
        let transport = MockTransport::replying(json!({
            "spaceLimit": 10_737_418_240u64,
            "spaceUsed": 2_147_483_648u64,
            "userCount": 40,
            "userLimit": 50,
            "cntInternalUser": 35,
            "cntGuestUser": 5,
            "encryptionEnabled": true
        }));
        let client = AdminClient::new(&transport);

        let customer = client.get_customer_info().await.unwrap();
        assert_eq!(customer.user_count, 40);
        assert_eq!(customer.cnt_guest_user, Some(5));
        assert!(customer.encryption_enabled);

        let (command, args) = transport.only_call();
        assert_eq!(command, "get_customer_info");
        assert_eq!(args, json!({}));
    }
}
