// proxyctl - administration CLI for a MariaDB database proxy
// Copyright (C) 2026 proxyctl contributors
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use anyhow::{Context, Result};
use dirs::config_dir;
use serde::{Deserialize, Serialize};
use std::{
    env, fs,
    path::{Path, PathBuf},
};
use thiserror::Error;

pub const DEFAULT_USER: &str = "mariadb";
pub const DEFAULT_PASSWORD: &str = "admin";
pub const DEFAULT_HOST: &str = "localhost";
pub const DEFAULT_PORT: u16 = 8989;

/// On-disk connection settings. Every field is optional; anything left
/// unset falls through to the scope below it and finally to the defaults.
#[derive(Debug, Serialize, Deserialize, Default, Clone, PartialEq, Eq)]
pub struct Config {
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub secure: Option<bool>,
    pub verify_tls: Option<bool>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    Local,
    User,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("could not locate a writable config directory for the current user")]
    MissingConfigDir,
}

/// Settings resolved once at startup from defaults, config files, and CLI
/// flags. Read-only afterwards; every component borrows it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub user: String,
    pub password: String,
    pub host: String,
    pub port: u16,
    pub secure: bool,
    pub verify_tls: bool,
}

/// Per-invocation CLI overrides. Flags that were not given stay `None`
/// (booleans: `false`) and leave the configured value in place.
#[derive(Debug, Default)]
pub struct Overrides {
    pub user: Option<String>,
    pub password: Option<String>,
    pub host: Option<String>,
    pub port: Option<u16>,
    pub secure: bool,
    pub verify_tls: bool,
}

pub fn config_path(scope: Scope, cwd: &Path) -> Result<PathBuf> {
    match scope {
        Scope::Local => Ok(cwd.join(".proxyctl.yaml")),
        Scope::User => {
            if let Ok(custom) = env::var("PROXYCTL_CONFIG_DIR") {
                return Ok(PathBuf::from(custom).join("config.yaml"));
            }
            let base = config_dir().ok_or(ConfigError::MissingConfigDir)?;
            Ok(base.join("proxyctl").join("config.yaml"))
        }
    }
}

pub fn load(cwd: &Path) -> Result<Config> {
    let user = read_if_exists(&config_path(Scope::User, cwd)?)?.unwrap_or_default();
    let local = read_if_exists(&config_path(Scope::Local, cwd)?)?.unwrap_or_default();
    Ok(merge(user, local))
}

pub fn load_scope(scope: Scope, cwd: &Path) -> Result<Config> {
    Ok(read_if_exists(&config_path(scope, cwd)?)?.unwrap_or_default())
}

pub fn save(scope: Scope, config: &Config, cwd: &Path) -> Result<PathBuf> {
    let path = config_path(scope, cwd)?;
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).with_context(|| format!("creating {:?}", parent))?;
    }
    let serialized = serde_yaml::to_string(config).context("serializing config")?;
    fs::write(&path, serialized).with_context(|| format!("writing {:?}", path))?;
    Ok(path)
}

pub fn resolve(cwd: &Path, overrides: Overrides) -> Result<Settings> {
    let mut merged = load(cwd)?;

    if let Some(user) = overrides.user {
        merged.user = Some(user);
    }
    if let Some(password) = overrides.password {
        merged.password = Some(password);
    }
    if let Some(host) = overrides.host {
        merged.host = Some(host);
    }
    if let Some(port) = overrides.port {
        merged.port = Some(port);
    }
    if overrides.secure {
        merged.secure = Some(true);
    }
    if overrides.verify_tls {
        merged.verify_tls = Some(true);
    }

    Ok(Settings {
        user: merged.user.unwrap_or_else(|| DEFAULT_USER.to_string()),
        password: merged
            .password
            .unwrap_or_else(|| DEFAULT_PASSWORD.to_string()),
        host: merged.host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port: merged.port.unwrap_or(DEFAULT_PORT),
        secure: merged.secure.unwrap_or(false),
        verify_tls: merged.verify_tls.unwrap_or(false),
    })
}

fn read_if_exists(path: &Path) -> Result<Option<Config>> {
    if !path.exists() {
        return Ok(None);
    }

    let contents = fs::read_to_string(path).with_context(|| format!("reading {:?}", path))?;
    let config = serde_yaml::from_str(&contents).with_context(|| format!("parsing {:?}", path))?;
    Ok(Some(config))
}

fn merge(user: Config, local: Config) -> Config {
    Config {
        user: local.user.or(user.user),
        password: local.password.or(user.password),
        host: local.host.or(user.host),
        port: local.port.or(user.port),
        secure: local.secure.or(user.secure),
        verify_tls: local.verify_tls.or(user.verify_tls),
    }
}
