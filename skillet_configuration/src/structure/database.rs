use std::path::{Path, PathBuf};

use serde::Deserialize;

use super::base_paths::BasePathsConfiguration;
use crate::{traits::ResolveWithContext, utilities::replace_placeholders_in_path};


const DEFAULT_MAXIMUM_CONNECTIONS: u32 = 8;


#[derive(Deserialize, Debug)]
pub(super) struct UnresolvedDatabaseConfiguration {
    file_path: String,

    maximum_connections: Option<u32>,

    create_if_missing: bool,
}

/// SQLite-related configuration.
#[derive(Debug, Clone)]
pub struct DatabaseConfiguration {
    /// Path of the SQLite database file. May contain the
    /// `{BASE_DATA_DIRECTORY}` placeholder.
    pub file_path: PathBuf,

    /// Maximum size of the connection pool
    /// (8 unless set in the configuration file).
    pub maximum_connections: u32,

    /// Whether to create the database file if it doesn't exist yet.
    pub create_if_missing: bool,
}

impl<'r> ResolveWithContext<'r> for UnresolvedDatabaseConfiguration {
    type Resolved = DatabaseConfiguration;
    type Context = &'r BasePathsConfiguration;

    fn resolve_with_context(self, context: Self::Context) -> Self::Resolved {
        let file_path =
            replace_placeholders_in_path(Path::new(&self.file_path), context.placeholders());

        let maximum_connections = self
            .maximum_connections
            .unwrap_or(DEFAULT_MAXIMUM_CONNECTIONS);

        Self::Resolved {
            file_path,
            maximum_connections,
            create_if_missing: self.create_if_missing,
        }
    }
}
