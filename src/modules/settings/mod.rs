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


use std::env;

use url::Url;

use crate::modules::error::{code::ErrorCode, CovaultResult};
use crate::raise_error;

/// Environment-driven configuration for the embedding console. Variables
/// share the `COVAULT_ADMIN_` prefix; only the OAuth client credentials are
/// required. The value is owned by the caller, nothing here is global.
#[derive(Clone, Debug)]
pub struct Settings {
    pub covault_admin_client_id: String,
    pub covault_admin_client_secret: String,
    /// Backend base URL, normalized to https before parsing.
    pub covault_admin_server_url: Option<Url>,
    pub covault_admin_log_level: String,
    pub covault_admin_ansi_logs: bool,
    pub covault_admin_json_logs: bool,
    pub covault_admin_log_to_file: bool,
    pub covault_admin_log_dir: String,
}

impl Settings {
    pub fn from_env() -> CovaultResult<Self> {
        Ok(Settings {
            covault_admin_client_id: require_env("COVAULT_ADMIN_CLIENT_ID")?,
            covault_admin_client_secret: require_env("COVAULT_ADMIN_CLIENT_SECRET")?,
            covault_admin_server_url: match env::var("COVAULT_ADMIN_SERVER_URL") {
                Ok(raw) => Some(parse_server_url(&raw)?),
                Err(_) => None,
            },
            covault_admin_log_level: env::var("COVAULT_ADMIN_LOG_LEVEL")
                .unwrap_or_else(|_| "info".to_string()),
            covault_admin_ansi_logs: env_flag("COVAULT_ADMIN_ANSI_LOGS", true),
            covault_admin_json_logs: env_flag("COVAULT_ADMIN_JSON_LOGS", false),
            covault_admin_log_to_file: env_flag("COVAULT_ADMIN_LOG_TO_FILE", false),
            covault_admin_log_dir: env::var("COVAULT_ADMIN_LOG_DIR")
                .unwrap_or_else(|_| "logs".to_string()),
        })
    }
}

/// The console only ever talks https to the backend; bare hosts and plain
/// http URLs are upgraded before parsing.
pub fn normalize_server_url(raw: &str) -> String {
    if let Some(rest) = raw.strip_prefix("http://") {
        return format!("https://{}", rest);
    }

    if raw.starts_with("https://") {
        return raw.to_string();
    }

    format!("https://{}", raw)
}

fn parse_server_url(raw: &str) -> CovaultResult<Url> {
    Url::parse(&normalize_server_url(raw)).map_err(|e| {
        raise_error!(
            format!("invalid server url '{}': {}", raw, e),
            ErrorCode::InvalidParameter
        )
    })
}

fn require_env(name: &str) -> CovaultResult<String> {
    env::var(name).map_err(|_| {
        raise_error!(
            format!("{} must be set", name),
            ErrorCode::MissingConfiguration
        )
    })
}

fn env_flag(name: &str, default: bool) -> bool {
    match env::var(name) {
        Ok(value) => matches!(value.as_str(), "1" | "true" | "TRUE" | "True"),
        Err(_) => default,
    }
}
