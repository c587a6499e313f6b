//! Board to server-host associations read from the board directory file.

use std::collections::HashMap;

/// One `board -> server` association parsed from a directory line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardServerEntry {
    pub board_id: String,
    pub server_host: String,
}

impl BoardServerEntry {
    pub fn new(board_id: impl Into<String>, server_host: impl Into<String>) -> Self {
        Self {
            board_id: board_id.into(),
            server_host: server_host.into(),
        }
    }
}

/// Immutable lookup table from board id to the host serving it.
///
/// Several boards may share one server. Later entries for the same board
/// replace earlier ones, matching a line-by-line scan of the file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoardDirectory {
    servers: HashMap<String, String>,
}

impl BoardDirectory {
    /// Creates an empty directory; every lookup yields an unknown server.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the server host for `board_id`, or `""` when the board is unknown.
    pub fn server_for(&self, board_id: &str) -> &str {
        self.servers.get(board_id).map(String::as_str).unwrap_or("")
    }

    pub fn contains(&self, board_id: &str) -> bool {
        self.servers.contains_key(board_id)
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

impl FromIterator<BoardServerEntry> for BoardDirectory {
    fn from_iter<I: IntoIterator<Item = BoardServerEntry>>(iter: I) -> Self {
        let servers = iter
            .into_iter()
            .map(|entry| (entry.board_id, entry.server_host))
            .collect();
        Self { servers }
    }
}
