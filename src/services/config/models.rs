use serde::{Deserialize, Serialize};

/// Filename suffix of a file that is already in loadable form.
pub const DEFAULT_DIRECT_SUFFIX: &str = ".jar";
/// Filename suffix of a container whose contents must be unpacked first.
pub const DEFAULT_CONTAINER_SUFFIX: &str = ".zip";
pub const DEFAULT_STAGING_DIR: &str = "temp";
/// Environment variable holding the process's active module search path.
pub const DEFAULT_SEARCH_PATH_VAR: &str = "CLASSPATH";

/// The two recognized suffixes. Matching is case-sensitive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suffixes {
    pub direct: String,
    pub container: String,
}

impl Default for Suffixes {
    fn default() -> Self {
        Self {
            direct: DEFAULT_DIRECT_SUFFIX.into(),
            container: DEFAULT_CONTAINER_SUFFIX.into(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ResolverConfig {
    pub direct_suffix: String,
    pub container_suffix: String,
    /// Name of the staging subdirectory created under each source directory.
    pub staging_dir_name: String,
    pub search_path_var: String,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            direct_suffix: DEFAULT_DIRECT_SUFFIX.into(),
            container_suffix: DEFAULT_CONTAINER_SUFFIX.into(),
            staging_dir_name: DEFAULT_STAGING_DIR.into(),
            search_path_var: DEFAULT_SEARCH_PATH_VAR.into(),
        }
    }
}

impl ResolverConfig {
    pub fn suffixes(&self) -> Suffixes {
        Suffixes {
            direct: self.direct_suffix.clone(),
            container: self.container_suffix.clone(),
        }
    }
}
