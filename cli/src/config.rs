use anyhow::{Context, Result};
use log::debug;
use serde::{Deserialize, Serialize};
use std::{
    fs::File,
    io::{BufReader, BufWriter},
    path::Path,
};
use url::Url;

#[derive(Debug, Default, Clone, Deserialize, Serialize)]
pub struct AutomlConfig {
    current_context: Option<String>,
    contexts: Vec<ContextConfig>,
}

impl AutomlConfig {
    pub fn get_all_contexts(&self) -> &Vec<ContextConfig> {
        &self.contexts
    }

    pub fn get_context(&self, name: &str) -> Option<&ContextConfig> {
        self.contexts.iter().find(|context| context.name == name)
    }

    pub fn set_context(&mut self, context: ContextConfig) -> bool {
        if let Some(index) = self.context_position(&context.name) {
            self.contexts[index] = context;
            true
        } else {
            self.contexts.push(context);
            false
        }
    }

    pub fn delete_context(&mut self, name: &str) -> bool {
        if let Some(index) = self.context_position(name) {
            self.contexts.remove(index);
            if self
                .current_context
                .as_ref()
                .map_or(false, |current_context| current_context == name)
            {
                self.current_context = None
            }
            true
        } else {
            false
        }
    }

    pub fn get_current_context(&self) -> Option<&ContextConfig> {
        self.current_context
            .as_ref()
            .and_then(|current_context| self.get_context(current_context))
    }

    pub fn set_current_context(&mut self, name: &str) -> bool {
        if self.get_context(name).is_some() {
            self.current_context = Some(name.to_owned());
            true
        } else {
            false
        }
    }

    pub fn num_contexts(&self) -> usize {
        self.contexts.len()
    }

    fn context_position(&self, name: &str) -> Option<usize> {
        self.contexts
            .iter()
            .position(|context| context.name == name)
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ContextConfig {
    pub name: String,
    pub endpoint: Url,
    pub token: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default)]
    pub region: Option<String>,
    #[serde(default)]
    pub accept_invalid_certificates: bool,
    #[serde(default)]
    pub proxy: Option<Url>,
}

pub fn read_automl_config(path: impl AsRef<Path>) -> Result<AutomlConfig> {
    debug!("Reading config file at `{}`", path.as_ref().display());
    if path.as_ref().exists() {
        let file = File::open(&path)
            .with_context(|| format!("Could not open config file `{}`", path.as_ref().display()))?;
        let config_reader = BufReader::new(file);
        serde_json::from_reader(config_reader)
            .with_context(|| format!("Could not parse config file `{}`", path.as_ref().display()))
    } else {
        Ok(Default::default())
    }
}

pub fn write_automl_config(path: impl AsRef<Path>, config: &AutomlConfig) -> Result<()> {
    debug!("Writing config file at `{}`", path.as_ref().display());
    let file = File::create(&path)
        .with_context(|| format!("Could not create config file `{}`", path.as_ref().display()))?;
    let config_writer = BufWriter::new(file);
    serde_json::to_writer_pretty(config_writer, &config).with_context(|| {
        format!(
            "Could not serialise configuration to `{}`",
            path.as_ref().display()
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context(name: &str) -> ContextConfig {
        ContextConfig {
            name: name.to_owned(),
            endpoint: Url::parse("https://api.automl.dev").unwrap(),
            token: Some("secret".to_owned()),
            project: Some("my-project".to_owned()),
            region: None,
            accept_invalid_certificates: false,
            proxy: None,
        }
    }

    #[test]
    fn set_context_updates_existing_entries_in_place() {
        let mut config = AutomlConfig::default();
        assert!(!config.set_context(context("staging")));
        assert!(config.set_context(context("staging")));
        assert_eq!(config.num_contexts(), 1);
    }

    #[test]
    fn deleting_the_current_context_unsets_it() {
        let mut config = AutomlConfig::default();
        config.set_context(context("staging"));
        assert!(config.set_current_context("staging"));
        assert!(config.delete_context("staging"));
        assert!(config.get_current_context().is_none());
    }

    #[test]
    fn unknown_context_cannot_become_current() {
        let mut config = AutomlConfig::default();
        assert!(!config.set_current_context("nope"));
    }
}
