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


use code::ErrorCode;
use snafu::{Location, Snafu};

pub mod code;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum CovaultError {
    #[snafu(display("{message}"))]
    Generic {
        message: String,
        #[snafu(implicit)]
        location: Location,
        code: ErrorCode,
    },
    IoError {
        source: std::io::Error,
        #[snafu(implicit)]
        location: Location,
    },
}

pub type CovaultResult<T, E = CovaultError> = std::result::Result<T, E>;

impl From<std::io::Error> for CovaultError {
    fn from(source: std::io::Error) -> Self {
        Self::IoError {
            source,
            location: Location::default(),
        }
    }
}

#[macro_export]
macro_rules! raise_error {
    ($message:expr, $code:expr) => {
        $crate::modules::error::CovaultError::Generic {
            message: $message,
            location: ::snafu::location!(),
            code: $code,
        }
    };
}
