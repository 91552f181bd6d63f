//! Server configuration.
//!
//! Every setting can come from a flag or an environment variable; flags win.

use catalog::HeaderMode;
use clap::Parser;
use recommender::StrategyKind;
use std::net::SocketAddr;
use std::path::PathBuf;

/// Bourbon distillery recommender - HTTP server
#[derive(Debug, Clone, Parser)]
#[command(name = "bourbon-server")]
#[command(about = "Recommends distilleries from a fixed bourbon tasting table", long_about = None)]
pub struct ServerConfig {
    /// Path to the bourbon tasting table (CSV)
    #[arg(long, env = "BOURBON_DATA_FILE", default_value = "bourbonlouisville.csv")]
    pub data_file: PathBuf,

    /// Address to listen on
    #[arg(long, env = "BOURBON_BIND_ADDR", default_value = "0.0.0.0:3000")]
    pub bind: SocketAddr,

    /// Scoring strategy: tag-overlap or flavor-similarity
    #[arg(long, env = "BOURBON_STRATEGY", default_value_t = StrategyKind::FlavorSimilarity)]
    pub strategy: StrategyKind,

    /// The table has no header row (ids start at 1 on the first data row)
    #[arg(long, env = "BOURBON_NO_HEADER")]
    pub no_header: bool,
}

impl ServerConfig {
    pub fn header_mode(&self) -> HeaderMode {
        if self.no_header {
            HeaderMode::Absent
        } else {
            HeaderMode::Present
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::try_parse_from([
            "bourbon-server",
            "--data-file",
            "data/table.csv",
            "--bind",
            "127.0.0.1:8080",
            "--strategy",
            "tag-overlap",
            "--no-header",
        ])
        .unwrap();

        assert_eq!(config.data_file, PathBuf::from("data/table.csv"));
        assert_eq!(config.bind.port(), 8080);
        assert_eq!(config.strategy, StrategyKind::TagOverlap);
        assert_eq!(config.header_mode(), HeaderMode::Absent);
    }

    #[test]
    fn test_unknown_strategy_is_rejected() {
        let result = ServerConfig::try_parse_from(["bourbon-server", "--strategy", "cosine"]);
        assert!(result.is_err());
    }
}
