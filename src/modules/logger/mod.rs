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


use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use crate::modules::error::CovaultResult;
use crate::modules::settings::Settings;

const LOG_FILE_NAME: &str = "covault-admin.log";

/// Install the global tracing subscriber for the embedding console. Call it
/// once at startup. When file logging is enabled the returned guard must be
/// kept alive for the lifetime of the process, or buffered lines are lost.
pub fn initialize_logging(settings: &Settings) -> CovaultResult<Option<WorkerGuard>> {
    let filter = EnvFilter::try_new(&settings.covault_admin_log_level)
        .unwrap_or_else(|_| EnvFilter::new("info"));

    if settings.covault_admin_log_to_file {
        std::fs::create_dir_all(&settings.covault_admin_log_dir)?;
        let appender =
            tracing_appender::rolling::daily(&settings.covault_admin_log_dir, LOG_FILE_NAME);
        let (writer, guard) = tracing_appender::non_blocking(appender);

        let builder = tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(writer)
            .with_ansi(false);

        if settings.covault_admin_json_logs {
            builder.json().init();
        } else {
            builder.init();
        }

        return Ok(Some(guard));
    }

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(settings.covault_admin_ansi_logs);

    if settings.covault_admin_json_logs {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(None)
}
