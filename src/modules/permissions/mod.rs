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
use crate::modules::permissions::view::NodePermissionsListEntry;
use crate::modules::remote::{decode_payload, AdminClient, RemoteCall};

pub mod template;
pub mod view;

impl<R: RemoteCall> AdminClient<R> {
    /// Fetch the node permission listing. Entries reporting creator id 0 are
    /// not real nodes and are dropped before the list reaches the caller; an
    /// entry without a creator id is kept.
    pub async fn get_permissions(
        &self,
        params: &ListParams,
    ) -> CovaultResult<Vec<NodePermissionsListEntry>> {
        let payload = self
            .invoke("get_permissions", json!({ "params": params }))
            .await
            .map_err(|e| {
                error!("Failed to fetch node permissions: {}", e);
                e
            })?;

        let entries: Vec<NodePermissionsListEntry> = decode_payload(payload)?;

        Ok(entries
            .into_iter()
            .filter(|entry| entry.node_created_by_id != Some(0))
            .collect())
    }

    /// Have the backend serialize the matching permission rows to `path`.
    pub async fn export_user_permissions(
        &self,
        params: &ListParams,
        path: &str,
    ) -> CovaultResult<()> {
        self.invoke(
            "export_user_permissions",
            json!({ "params": params, "path": path }),
        )
        .await
        .map_err(|e| {
            error!("Failed to export user permissions: {}", e);
            e
        })?;

        Ok(())
    }

    /// Have the backend serialize every user's permission rows to `path`.
    pub async fn export_all_user_permissions(&self, path: &str) -> CovaultResult<()> {
        self.invoke("export_all_user_permissions", json!({ "path": path }))
            .await
            .map_err(|e| {
                error!("Failed to export all user permissions: {}", e);
                e
            })?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};

    use crate::modules::common::ListParams;
    use crate::modules::remote::{mock::MockTransport, AdminClient};

    fn permission_entry(node_id: i64, created_by_id: Value) -> Value {
        json!({
            "nodeId": node_id,
            "nodeName": format!("node-{node_id}"),
            "nodeParentPath": "/rooms",
            "nodeCntChildren": 0,
            "userPermissions": [{
                "userId": 3,
                "userLogin": "ada",
                "userFirstName": "Ada",
                "userLastName": "Lovelace",
                "permissions": {
                    "manage": false,
                    "read": true,
                    "create": false,
                    "change": false,
                    "delete": false,
                    "manageDownloadShare": true,
                    "manageUploadShare": false,
                    "readRecycleBin": false,
                    "restoreRecycleBin": false,
                    "deleteRecycleBin": false
                }
            }],
            "nodeCreatedById": created_by_id
        })
    }

    #[tokio::test]
    async fn entries_created_by_user_zero_never_reach_the_caller() {
        let transport = MockTransport::replying(json!([
            permission_entry(1, json!(3)),
            permission_entry(2, json!(0)),
            permission_entry(3, json!(null)),
        ]));
        let client = AdminClient::new(&transport);

        let entries = client.get_permissions(&ListParams::default()).await.unwrap();

        let ids: Vec<i64> = entries.iter().map(|entry| entry.node_id).collect();
        assert_eq!(ids, vec![1, 3]);
        assert_eq!(entries[1].node_created_by_id, None);
    }

    #[tokio::test]
    async fn get_permissions_passes_params_verbatim() {
        let transport = MockTransport::replying(json!([]));
        let client = AdminClient::new(&transport);

        let params = ListParams {
            filter: Some("userId:eq:3".into()),
            limit: Some(500),
            ..Default::default()
        };
        client.get_permissions(&params).await.unwrap();

        let (command, args) = transport.only_call();
        assert_eq!(command, "get_permissions");
        assert_eq!(args, json!({ "params": params }));
    }

    #[tokio::test]
    async fn permission_exports_carry_scope_and_path() {
        let transport = MockTransport::default();
        transport.push(Ok(Value::Null));
        transport.push(Ok(Value::Null));
        let client = AdminClient::new(&transport);

        let dir = tempfile::tempdir().unwrap();
        let target = dir.path().join("permissions.csv");
        let target = target.to_str().unwrap();
        let params = ListParams {
            filter: Some("userId:eq:3".into()),
            ..Default::default()
        };

        client
            .export_user_permissions(&params, target)
            .await
            .unwrap();
        client.export_all_user_permissions(target).await.unwrap();

        let calls = transport.calls();
        assert_eq!(calls[0].0, "export_user_permissions");
        assert_eq!(calls[0].1, json!({ "params": &params, "path": target }));
        assert_eq!(calls[1].0, "export_all_user_permissions");
        assert_eq!(calls[1].1, json!({ "path": target }));
    }
}
