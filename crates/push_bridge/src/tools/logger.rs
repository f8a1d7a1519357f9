/*  Copyright 2022-23, Juspay India Pvt Ltd
    This program is free software: you can redistribute it and/or modify it under the terms of the GNU Affero General Public License
    as published by the Free Software Foundation, either version 3 of the License, or (at your option) any later version. This program
    is distributed in the hope that it will be useful, but WITHOUT ANY WARRANTY; without even the implied warranty of MERCHANTABILITY
    or FITNESS FOR A PARTICULAR PURPOSE. See the GNU Affero General Public License for more details. You should have received a copy of
    the GNU Affero General Public License along with this program. If not, see <https://www.gnu.org/licenses/>.
*/
#![allow(clippy::expect_used)]

use serde::Deserialize;
use strum_macros::{Display, EnumString};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_bunyan_formatter::{BunyanFormattingLayer, JsonStorageLayer};
use tracing_log::LogTracer;
use tracing_subscriber::{layer::SubscriberExt, EnvFilter, Registry};

#[derive(Debug, Deserialize, Clone, Display, EnumString)]
pub enum LogLevel {
    TRACE,
    DEBUG,
    INFO,
    WARN,
    ERROR,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggerConfig {
    pub level: LogLevel,
    pub log_to_file: bool,
}

/// Installs the global tracing subscriber. The returned guard must be held
/// for the lifetime of the process so buffered log lines get flushed.
pub fn setup_tracing(logger_cfg: LoggerConfig) -> WorkerGuard {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(logger_cfg.level.to_string()));

    let (non_blocking, guard) = if logger_cfg.log_to_file {
        tracing_appender::non_blocking(tracing_appender::rolling::daily("logs", "push_bridge.log"))
    } else {
        tracing_appender::non_blocking(std::io::stdout())
    };

    let subscriber = Registry::default()
        .with(env_filter)
        .with(JsonStorageLayer)
        .with(BunyanFormattingLayer::new(
            "push_bridge".to_string(),
            non_blocking,
        ));

    LogTracer::init().expect("Failed to set LogTracer");
    tracing::subscriber::set_global_default(subscriber).expect("Failed to set tracing subscriber");

    guard
}
