use colored::Colorize;
use log::{error, info, warn};
use std::path::Path;
use structopt::StructOpt;
use url::Url;

use crate::{
    config::{self, AutomlConfig, ContextConfig},
    utils,
};
use anyhow::Result;
use automl_client::DEFAULT_ENDPOINT;

#[derive(Debug, StructOpt)]
pub enum ConfigArgs {
    #[structopt(name = "add")]
    /// Add a new context to the automl config file
    AddContext {
        #[structopt(long = "name", short = "n")]
        /// The name of the context that will be created or updated
        name: Option<String>,

        #[structopt(long = "endpoint", short = "e")]
        /// The endpoint that will be used for this context
        endpoint: Option<Url>,

        #[structopt(long = "token", short = "t")]
        /// The API token that will be used for this context
        token: Option<String>,

        #[structopt(long = "project", short = "p")]
        /// The project that will be used for this context
        project: Option<String>,

        #[structopt(long = "region", short = "r")]
        /// The compute region that will be used for this context
        region: Option<String>,

        #[structopt(long = "accept-invalid-certificates", short = "k")]
        /// Whether to accept invalid TLS certificates
        accept_invalid_certificates: bool,

        #[structopt(long = "proxy")]
        /// URL for an HTTP proxy that will be used for all requests if specified
        proxy: Option<Option<Url>>,
    },

    #[structopt(name = "current")]
    /// Display the current context
    CurrentContext,

    #[structopt(name = "delete")]
    /// Delete the specified context from the automl config file
    DeleteContext {
        /// The name(s) of the context(s) which will be deleted
        names: Vec<String>,
    },

    #[structopt(name = "ls")]
    /// List available contexts in an automl config file
    ListContexts {
        #[structopt(long = "tokens")]
        /// Show API tokens (by default tokens are hidden).
        tokens: bool,
    },

    #[structopt(name = "use")]
    /// Set the current context in the automl config file
    UseContext {
        /// The name of the context.
        name: String,
    },
}

pub fn run(
    args: &ConfigArgs,
    mut config: AutomlConfig,
    config_path: impl AsRef<Path>,
) -> Result<AutomlConfig> {
    match args {
        ConfigArgs::ListContexts { tokens } if config.num_contexts() > 0 => {
            let mut contexts = config.get_all_contexts().clone();
            contexts.sort_unstable_by(|lhs, rhs| lhs.name.cmp(&rhs.name));
            for (index, context) in contexts.iter().enumerate() {
                let active = config
                    .get_current_context()
                    .map_or(false, |current_context| {
                        current_context.name == context.name
                    });
                if index > 0 {
                    println!();
                }
                if active {
                    println!("-> {}", context.name.bold().bright_white());
                } else {
                    println!("   {}", context.name.normal());
                }
                println!("   Endpoint: {}", context.endpoint);
                if let Some(project) = &context.project {
                    println!("   Project: {project}");
                }
                if let Some(region) = &context.region {
                    println!("   Region: {region}");
                }
                if context.accept_invalid_certificates {
                    println!("   Accepts invalid certificates");
                }
                if let Some(proxy) = &context.proxy {
                    println!("   Proxy: {proxy}");
                }
                if *tokens {
                    println!(
                        "   Token: {}",
                        context.token.clone().unwrap_or_else(String::new)
                    );
                }
            }
        }
        ConfigArgs::ListContexts { .. } => {
            info!("No available contexts.");
        }
        ConfigArgs::AddContext {
            name,
            endpoint,
            token,
            project,
            region,
            accept_invalid_certificates,
            proxy,
        } => {
            add_or_edit_context(
                name,
                token,
                endpoint,
                project,
                region,
                *accept_invalid_certificates,
                proxy,
                config.clone(),
                config_path,
            )?;
        }
        ConfigArgs::UseContext { name } => {
            if !config.set_current_context(name) {
                error!(
                    "No such context `{}` exists in `{}`.",
                    name,
                    config_path.as_ref().display()
                );
            } else {
                config::write_automl_config(config_path, &config)?;
                info!("Switched to context `{}`.", name);
            }
        }
        ConfigArgs::CurrentContext => config.get_current_context().map_or_else(
            || info!("There is no default context in use."),
            |current_context| println!("{}", current_context.name),
        ),
        ConfigArgs::DeleteContext { names } => {
            for name in names {
                if config.delete_context(name) {
                    config::write_automl_config(&config_path, &config)?;
                    info!(
                        "Deleted context `{}` from `{}`.",
                        name,
                        config_path.as_ref().display()
                    );
                } else {
                    error!(
                        "No such context `{}` exists in `{}`.",
                        name,
                        config_path.as_ref().display()
                    );
                }
            }
        }
    }
    Ok(config)
}

#[allow(clippy::too_many_arguments)]
fn add_or_edit_context(
    name: &Option<String>,
    token: &Option<String>,
    endpoint: &Option<Url>,
    project: &Option<String>,
    region: &Option<String>,
    accept_invalid_certificates: bool,
    proxy: &Option<Option<Url>>,
    mut config: AutomlConfig,
    config_path: impl AsRef<Path>,
) -> Result<()> {
    // Get context name (either argument or from stdin)
    let name = loop {
        let name = match name {
            None => utils::read_from_stdin("Context name", None)?,
            Some(name) => name.clone(),
        };
        if !name.is_empty() {
            break name;
        } else {
            error!("Context name cannot be empty.");
        }
    };

    let existing_context = config.get_context(&name).cloned();
    if existing_context.is_some() {
        info!("Context `{}` already exists, it will be modified.", name);
    } else {
        info!("A new context `{}` will be created.", name);
    }

    // Get API token (either argument or from stdin)
    let token = match token {
        None => utils::read_token_from_stdin()?,
        token => token.clone(),
    };
    if token.is_none() {
        info!(concat!(
            "No API token was associated with the context. ",
            "You will have to enter it for every request."
        ));
    } else {
        warn!(
            "Be careful, API tokens are stored in cleartext in {}.",
            config_path.as_ref().display()
        );
    }

    // Get endpoint (either argument or from stdin)
    let endpoint = match endpoint {
        None => loop {
            match Url::parse(&utils::read_from_stdin(
                "Endpoint",
                Some(
                    existing_context
                        .as_ref()
                        .map(|context| context.endpoint.as_str())
                        .unwrap_or_else(|| DEFAULT_ENDPOINT.as_str()),
                ),
            )?) {
                Ok(url) => break url,
                Err(error) => {
                    error!("Invalid endpoint URL: {}", error);
                }
            }
        },
        Some(endpoint) => endpoint.clone(),
    };

    // Update the contexts' JSON configuration file
    let context = ContextConfig {
        name: name.clone(),
        endpoint,
        token,
        project: project.clone().or_else(|| {
            existing_context
                .as_ref()
                .and_then(|context| context.project.clone())
        }),
        region: region.clone().or_else(|| {
            existing_context
                .as_ref()
                .and_then(|context| context.region.clone())
        }),
        accept_invalid_certificates,
        proxy: proxy.clone().unwrap_or_else(|| {
            existing_context
                .as_ref()
                .and_then(|context| context.proxy.clone())
        }),
    };

    let update_existing = existing_context.is_some();
    let is_new_context = !config.set_context(context);
    if is_new_context && config.num_contexts() == 1 {
        info!("Default context set to `{}`.", name);
        config.set_current_context(&name);
    }

    config::write_automl_config(config_path, &config)?;

    if update_existing {
        info!("Context `{}` was updated.", name);
    } else {
        info!("New context `{}` was created.", name);
    }

    Ok(())
}
