// SPDX-License-Identifier: Apache-2.0
// © James Ross Ω FLYING•ROBOTS <https://github.com/flyingrobots>
//! Shared application services for Carton tools (config storage, preferences).
//! Keeps front-ends thin; storage backends plug in through [`config::ConfigStore`].

pub mod config;
pub mod prefs;

pub use config::{ConfigError, ConfigService, ConfigStore};
pub use prefs::CliPrefs;
