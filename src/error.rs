// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use std::fmt;

/// Coarse classification of what went wrong, kept separate from the
/// human-readable message so callers can match on it without parsing text.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Status {
    /// A block file could not be opened or fully read; no partial `Index`
    /// is ever handed back to the caller.
    IndexLoadFailed,
    /// A block file could not be opened for writing, or a write short-returned.
    BlockWriteFailed,
    /// Well-typed but out-of-contract input, e.g. more than 65,535 songs
    /// in a single block.
    InvalidInput,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Status::IndexLoadFailed => "index load failed",
            Status::BlockWriteFailed => "block write failed",
            Status::InvalidInput => "invalid input",
        };
        write!(f, "{}", s)
    }
}

/// The engine's single error type. Carries a [`Status`] plus an optional
/// message describing the specific failure.
#[derive(Debug)]
pub struct IndexError {
    status: Status,
    msg: Option<String>,
}

impl IndexError {
    pub fn new(status: Status, msg: Option<&str>) -> Self {
        IndexError {
            status,
            msg: msg.map(String::from),
        }
    }

    pub fn load_failed<S: Into<String>>(msg: S) -> Self {
        IndexError {
            status: Status::IndexLoadFailed,
            msg: Some(msg.into()),
        }
    }

    pub fn write_failed<S: Into<String>>(msg: S) -> Self {
        IndexError {
            status: Status::BlockWriteFailed,
            msg: Some(msg.into()),
        }
    }

    pub fn invalid_input<S: Into<String>>(msg: S) -> Self {
        IndexError {
            status: Status::InvalidInput,
            msg: Some(msg.into()),
        }
    }

    #[inline]
    pub fn status(&self) -> Status {
        self.status
    }
}

impl fmt::Display for IndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.msg {
            Some(msg) => write!(f, "{}: {}", self.status, msg),
            None => write!(f, "{}", self.status),
        }
    }
}

impl std::error::Error for IndexError {}

#[cfg(test)]
mod test_error {
    use super::*;

    #[test]
    fn test_display_includes_message() {
        let e = IndexError::load_failed("missing file");
        assert_eq!(e.status(), Status::IndexLoadFailed);
        assert_eq!(format!("{}", e), "index load failed: missing file");
    }

    #[test]
    fn test_display_without_message() {
        let e = IndexError::new(Status::InvalidInput, None);
        assert_eq!(format!("{}", e), "invalid input");
    }
}
