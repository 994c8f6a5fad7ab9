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


use std::fmt;

use serde::{Deserialize, Serialize};

use crate::modules::permissions::view::NodePermissions;

/// The named presets a raw permission set collapses to in the console. A set
/// that overshoots one preset without reaching the next stays `Custom`; it is
/// never rounded to the nearest name.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum PermissionTemplate {
    RoomAdministrator,
    Edit,
    Read,
    Custom,
    None,
}

impl fmt::Display for PermissionTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PermissionTemplate::RoomAdministrator => "Room Administrator",
            PermissionTemplate::Edit => "Edit",
            PermissionTemplate::Read => "Read",
            PermissionTemplate::Custom => "Custom",
            PermissionTemplate::None => "None",
        };
        write!(f, "{}", label)
    }
}

type TemplateRule = (fn(&NodePermissions) -> bool, PermissionTemplate);

// The rule sets are nested supersets, so the table must stay ordered from
// most to least permissive; the first match wins.
const TEMPLATE_RULES: [TemplateRule; 3] = [
    (
        grants_room_administrator,
        PermissionTemplate::RoomAdministrator,
    ),
    (grants_edit, PermissionTemplate::Edit),
    (grants_read, PermissionTemplate::Read),
];

/// Name the preset a user's permission set corresponds to. `None` input
/// means no permission record exists for the user/node pair. Total over all
/// 1024 flag combinations; never panics.
pub fn classify(permissions: Option<&NodePermissions>) -> PermissionTemplate {
    let Some(permissions) = permissions else {
        return PermissionTemplate::None;
    };

    TEMPLATE_RULES
        .iter()
        .find(|(matches, _)| matches(permissions))
        .map(|(_, template)| *template)
        .unwrap_or(PermissionTemplate::Custom)
}

fn grants_room_administrator(permissions: &NodePermissions) -> bool {
    permissions.manage
        && permissions.read
        && permissions.change
        && permissions.delete
        && permissions.create
        && permissions.manage_download_share
        && permissions.manage_upload_share
        && permissions.read_recycle_bin
        && permissions.restore_recycle_bin
        && permissions.delete_recycle_bin
}

// `manage` and `delete_recycle_bin` do not count toward the edit preset.
fn grants_edit(permissions: &NodePermissions) -> bool {
    permissions.read
        && permissions.change
        && permissions.delete
        && permissions.create
        && permissions.manage_download_share
        && permissions.manage_upload_share
        && permissions.read_recycle_bin
        && permissions.restore_recycle_bin
}

fn grants_read(permissions: &NodePermissions) -> bool {
    permissions.read && permissions.manage_download_share
}

#[cfg(test)]
mod tests {
    use super::*;

    fn all_flags() -> NodePermissions {
        NodePermissions {
            manage: true,
            read: true,
            create: true,
            change: true,
            delete: true,
            manage_download_share: true,
            manage_upload_share: true,
            read_recycle_bin: true,
            restore_recycle_bin: true,
            delete_recycle_bin: true,
        }
    }

    fn from_bits(bits: u16) -> NodePermissions {
        NodePermissions {
            manage: bits & 1 != 0,
            read: bits & (1 << 1) != 0,
            create: bits & (1 << 2) != 0,
            change: bits & (1 << 3) != 0,
            delete: bits & (1 << 4) != 0,
            manage_download_share: bits & (1 << 5) != 0,
            manage_upload_share: bits & (1 << 6) != 0,
            read_recycle_bin: bits & (1 << 7) != 0,
            restore_recycle_bin: bits & (1 << 8) != 0,
            delete_recycle_bin: bits & (1 << 9) != 0,
        }
    }

    #[test]
    fn a_missing_record_classifies_as_none() {
        assert_eq!(classify(None), PermissionTemplate::None);
    }

    #[test]
    fn the_full_flag_set_is_room_administrator() {
        assert_eq!(
            classify(Some(&all_flags())),
            PermissionTemplate::RoomAdministrator
        );
    }

    #[test]
    fn dropping_manage_and_recycle_bin_deletion_is_edit() {
        let permissions = NodePermissions {
            manage: false,
            delete_recycle_bin: false,
            ..all_flags()
        };
        assert_eq!(classify(Some(&permissions)), PermissionTemplate::Edit);
    }

    #[test]
    fn edit_wins_even_when_manage_is_set() {
        // Satisfies the edit preset but not room administrator; `manage`
        // alone must not promote it.
        let permissions = NodePermissions {
            delete_recycle_bin: false,
            ..all_flags()
        };
        assert_eq!(classify(Some(&permissions)), PermissionTemplate::Edit);
    }

    #[test]
    fn read_plus_download_share_is_read() {
        let permissions = NodePermissions {
            read: true,
            manage_download_share: true,
            ..Default::default()
        };
        assert_eq!(classify(Some(&permissions)), PermissionTemplate::Read);
    }

    #[test]
    fn read_alone_is_custom() {
        let permissions = NodePermissions {
            read: true,
            ..Default::default()
        };
        assert_eq!(classify(Some(&permissions)), PermissionTemplate::Custom);
    }

    #[test]
    fn no_flags_at_all_is_custom() {
        assert_eq!(
            classify(Some(&NodePermissions::default())),
            PermissionTemplate::Custom
        );
    }

    #[test]
    fn every_flag_combination_maps_to_exactly_one_template() {
        for bits in 0u16..1024 {
            let permissions = from_bits(bits);
            match classify(Some(&permissions)) {
                PermissionTemplate::RoomAdministrator => {
                    assert!(grants_room_administrator(&permissions));
                }
                PermissionTemplate::Edit => {
                    assert!(grants_edit(&permissions));
                    assert!(!grants_room_administrator(&permissions));
                }
                PermissionTemplate::Read => {
                    assert!(grants_read(&permissions));
                    assert!(!grants_edit(&permissions));
                }
                PermissionTemplate::Custom => {
                    assert!(!grants_room_administrator(&permissions));
                    assert!(!grants_edit(&permissions));
                    assert!(!grants_read(&permissions));
                }
                PermissionTemplate::None => {
                    panic!("a present permission set must never classify as None")
                }
            }
        }
    }

    #[test]
    fn display_labels_match_the_console_wording() {
        assert_eq!(
            PermissionTemplate::RoomAdministrator.to_string(),
            "Room Administrator"
        );
        assert_eq!(PermissionTemplate::Custom.to_string(), "Custom");
    }
}
