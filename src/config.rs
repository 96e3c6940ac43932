/*
 * SPDX-FileCopyrightText: 2026 Skill Matrix Contributors
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io::Write;
use std::path::PathBuf;
use std::{fmt, fs};
use strum::IntoEnumIterator;
use strum_macros::EnumIter;

#[derive(Clone, Debug, EnumIter, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub enum ConfigKey {
    Server,
    SelectedResource,
}

impl fmt::Display for ConfigKey {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", format!("{:?}", self).to_lowercase())
    }
}

impl std::str::FromStr for ConfigKey {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ConfigKey::iter()
            .find(|key| format!("{}", key) == s.to_lowercase())
            .ok_or(())
    }
}

fn get_config_file() -> PathBuf {
    let mut config_dir = dirs::config_dir().expect("Could not find configuration directory");
    config_dir.push("skillmatrix");
    config_dir.push("config.toml");
    config_dir
}

pub fn load_config() -> HashMap<ConfigKey, Option<String>> {
    let config_file = get_config_file();
    let stored: HashMap<ConfigKey, String> = if config_file.exists() {
        let contents = fs::read_to_string(&config_file).expect("Failed to read configuration file");
        toml::from_str(&contents).expect("Failed to parse configuration file")
    } else {
        HashMap::new()
    };

    let mut config = HashMap::new();
    for config_key in ConfigKey::iter() {
        let value = stored.get(&config_key).cloned().filter(|v| !v.is_empty());
        config.insert(config_key, value);
    }

    config
}

pub fn save_config(config: &HashMap<ConfigKey, Option<String>>) {
    let config_file = get_config_file();
    let config_dir = config_file
        .parent()
        .expect("Failed to get configuration directory");

    fs::create_dir_all(config_dir).expect("Failed to create configuration directory");

    // toml has no notion of an absent value; unset keys are simply omitted.
    let stored: HashMap<&ConfigKey, &String> = config
        .iter()
        .filter_map(|(key, value)| value.as_ref().map(|v| (key, v)))
        .collect();

    let contents = toml::to_string_pretty(&stored).expect("Failed to serialize configuration");
    let mut file = fs::File::create(config_file).expect("Failed to create configuration file");
    file.write_all(contents.as_bytes())
        .expect("Failed to write configuration file");
}

pub fn set_get_value(key: ConfigKey, value: Option<String>, quiet: bool) -> Option<String> {
    let mut config = load_config();

    if let Some(value) = value {
        config.insert(key.clone(), Some(value.clone()).filter(|v| !v.is_empty()));
        save_config(&config);

        if !quiet {
            println!("{} set to \"{}\"", key, value);
        }

        Some(value).filter(|v| !v.is_empty())
    } else {
        let found = config.get(&key).cloned().flatten();

        if !quiet {
            match &found {
                Some(value) => println!("{}", value),
                None => println!("[unset]"),
            }
        }

        found
    }
}

pub fn set_get_value_from_string(
    key: String,
    value: Option<String>,
    quiet: bool,
) -> Result<Option<String>, String> {
    match key.parse::<ConfigKey>() {
        Ok(config_key) => Ok(set_get_value(config_key, value, quiet)),
        Err(()) => {
            if !quiet {
                println!("Invalid key: {}", key);
                println!("Valid keys are:");
                for config_key in ConfigKey::iter() {
                    println!("{}", config_key);
                }
            }

            Err("Invalid key".to_string())
        }
    }
}
