use std::path::PathBuf;

pub const DEFAULT_DATA_DIR: &str = "data";
pub const DEFAULT_META_FILE: &str = "db_meta.json";
pub const SEQUENCES_FILE: &str = "db_sequences.json";

pub const ENV_DATA_DIR: &str = "PRIMDB_DATA_DIR";
pub const ENV_META_FILE: &str = "PRIMDB_META_FILE";

/// Where the database keeps its documents.
///
/// Layout under `data_dir`:
/// - `<meta_file>`: table name to column definitions
/// - `db_sequences.json`: last primary key handed out per table
/// - `tables/<table>.json`: the rows of each table
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub data_dir: PathBuf,
    pub meta_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            meta_file: DEFAULT_META_FILE.to_string(),
        }
    }
}

impl Config {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// Reads `PRIMDB_DATA_DIR` and `PRIMDB_META_FILE`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_vars(|key| std::env::var(key).ok())
    }

    /// Like [`Config::from_env`] but with a caller-supplied variable lookup.
    pub fn from_vars(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(dir) = lookup(ENV_DATA_DIR).filter(|v| !v.trim().is_empty()) {
            config.data_dir = PathBuf::from(dir);
        }
        if let Some(file) = lookup(ENV_META_FILE).filter(|v| !v.trim().is_empty()) {
            config.meta_file = file;
        }
        config
    }

    pub fn meta_path(&self) -> PathBuf {
        self.data_dir.join(&self.meta_file)
    }

    pub fn sequences_path(&self) -> PathBuf {
        self.data_dir.join(SEQUENCES_FILE)
    }

    pub fn tables_dir(&self) -> PathBuf {
        self.data_dir.join("tables")
    }

    pub fn table_path(&self, table: &str) -> PathBuf {
        self.tables_dir().join(format!("{table}.json"))
    }
}
