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

/// The signed-in operator as the backend reports them after connecting; the
/// role flags gate which console sections are reachable.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserAccount {
    pub first_name: String,
    pub last_name: String,
    pub is_room_manager: bool,
    pub is_config_manager: bool,
    pub is_auditor: bool,
    pub is_user_manager: bool,
    pub is_group_manager: bool,
    pub email: String,
    pub user_id: u64,
    pub is_cloud: bool,
}

/// Login state and the cached account, owned by whoever drives the console.
/// An explicit context object; there is no process-wide session.
#[derive(Clone, Debug, Default)]
pub struct Session {
    logged_in: bool,
    account: Option<UserAccount>,
}

impl Session {
    pub fn login(&mut self) {
        self.logged_in = true;
    }

    pub fn logout(&mut self) {
        self.logged_in = false;
    }

    pub fn is_logged_in(&self) -> bool {
        self.logged_in
    }

    pub fn set_account(&mut self, account: UserAccount) {
        self.account = Some(account);
    }

    pub fn clear_account(&mut self) {
        self.account = None;
    }

    pub fn account(&self) -> Option<&UserAccount> {
        self.account.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn account() -> UserAccount {
        UserAccount {
            first_name: "Ada".into(),
            last_name: "Lovelace".into(),
            is_user_manager: true,
            email: "ada@example.com".into(),
            user_id: 42,
            ..Default::default()
        }
    }

    #[test]
    fn a_fresh_session_is_logged_out_and_empty() {
        let session = Session::default();
        assert!(!session.is_logged_in());
        assert!(session.account().is_none());
    }

    #[test]
    fn login_and_logout_only_touch_the_flag() {
        let mut session = Session::default();
        session.set_account(account());

        session.login();
        assert!(session.is_logged_in());

        session.logout();
        assert!(!session.is_logged_in());
        // The cached account survives a logout until it is cleared explicitly.
        assert_eq!(session.account(), Some(&account()));
    }

    #[test]
    fn clearing_the_account_leaves_the_flag_alone() {
        let mut session = Session::default();
        session.login();
        session.set_account(account());

        session.clear_account();
        assert!(session.account().is_none());
        assert!(session.is_logged_in());
    }
}
