use serde::Serialize;

use crate::query::FilterExpr;

pub const DEFAULT_PROGRAM: &str = "redis-cli";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 6379;
pub const DEFAULT_INDEX: &str = "beamdevlive:config:type";
pub const DEFAULT_LIMIT: usize = 10;

/// One FT.SEARCH invocation through the redis-cli binary.
#[derive(Debug, Clone, Serialize)]
pub struct SearchCommand {
    pub program: String,
    pub host: String,
    pub port: u16,
    pub index: String,
    pub filter: FilterExpr,
    pub offset: usize,
    pub limit: usize,
}

impl Default for SearchCommand {
    fn default() -> Self {
        Self {
            program: DEFAULT_PROGRAM.to_string(),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            index: DEFAULT_INDEX.to_string(),
            filter: FilterExpr::active_services(),
            offset: 0,
            limit: DEFAULT_LIMIT,
        }
    }
}

impl SearchCommand {
    /// Argument vector passed to the program.
    pub fn to_args(&self) -> Vec<String> {
        vec![
            "-h".to_string(),
            self.host.clone(),
            "-p".to_string(),
            self.port.to_string(),
            "FT.SEARCH".to_string(),
            self.index.clone(),
            self.filter.render(),
            "LIMIT".to_string(),
            self.offset.to_string(),
            self.limit.to_string(),
        ]
    }
}
