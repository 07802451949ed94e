// 🔧 Configuration - CLI flags with environment fallbacks

use clap::{Parser, ValueEnum};
use std::net::SocketAddr;

const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogFormat {
    /// Human-readable lines (development)
    Text,
    /// One JSON object per line (production)
    Json,
}

/// Server configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "receipt-server", version, about = "Receipt points HTTP service")]
pub struct ServerConfig {
    /// Address to listen on
    #[arg(long, env = "RECEIPT_BIND", default_value = DEFAULT_BIND)]
    pub bind: SocketAddr,

    /// Log output format
    #[arg(long, env = "RECEIPT_LOG_FORMAT", value_enum, default_value_t = LogFormat::Text)]
    pub log_format: LogFormat,

    /// Log filter, e.g. "info" or "receipt_processor=debug"
    #[arg(long, env = "RUST_LOG", default_value = "info")]
    pub log_level: String,
}

// ============================================================================
// TESTS
// ============================================================================
