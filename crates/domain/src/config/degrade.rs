use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DegradeConfig {
    /// Upper bound on cached answers. Once reached, new keys are not admitted
    /// while existing keys keep being refreshed. `0` disables the bound.
    #[serde(default = "default_max_entries")]
    pub max_entries: usize,
}

impl Default for DegradeConfig {
    fn default() -> Self {
        Self {
            max_entries: default_max_entries(),
        }
    }
}

fn default_max_entries() -> usize {
    100_000
}
