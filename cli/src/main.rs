#![deny(clippy::all)]

mod args;
mod commands;
mod config;
mod printer;
mod utils;

use anyhow::{anyhow, Context, Result};
use automl_client::{
    retry::{RetryConfig, RetryStrategy},
    Client, Config as ClientConfig, GlossaryId, GlossaryName, Location, LocationName, ModelId,
    ModelName, ProjectId, Token, DEFAULT_ENDPOINT,
};
use log::{error, warn};
use std::{env, fs, io, path::PathBuf, process, time::Duration};
use structopt::{clap::Shell as ClapShell, StructOpt};

use crate::{
    args::{Args, Command, Shell},
    commands::{config as config_command, create, delete, get},
    config::AutomlConfig,
    printer::Printer,
    utils::{init_env_logger, read_token_from_stdin},
};

const PROJECT_ENV_VARIABLE_NAME: &str = "AUTOML_PROJECT";
const DEFAULT_REGION: &str = "us-central1";

/// Project and region every resource-scoped command operates in. The project
/// is optional up front so that commands addressing resources by full name
/// (e.g. operation status) work without one.
pub struct Scope {
    project: Option<ProjectId>,
    location: Location,
}

impl Scope {
    pub fn parent(&self) -> Result<LocationName> {
        let project_id = self.project.clone().ok_or_else(|| {
            anyhow!(
                "Please provide a project with the `automl -p <project>` option or the {} environment variable",
                PROJECT_ENV_VARIABLE_NAME
            )
        })?;
        Ok(LocationName::new(project_id, self.location.clone()))
    }

    pub fn model(&self, model_id: ModelId) -> Result<ModelName> {
        Ok(self.parent()?.model(model_id))
    }

    pub fn glossary(&self, glossary_id: GlossaryId) -> Result<GlossaryName> {
        Ok(self.parent()?.glossary(glossary_id))
    }
}

fn run(args: Args) -> Result<()> {
    let config_path = find_configuration(&args)?;
    let cli_config = config::read_automl_config(&config_path)?;
    let printer = Printer::new(args.output);

    match &args.command {
        Command::Config { config_args } => {
            config_command::run(config_args, cli_config, config_path).map(|_| ())
        }
        Command::Completion { shell } => {
            let mut app = Args::clap();
            let clap_shell = match shell {
                Shell::Zsh => ClapShell::Zsh,
                Shell::Bash => ClapShell::Bash,
            };
            app.gen_completions_to("automl", clap_shell, &mut io::stdout());
            Ok(())
        }
        Command::Create { create_args } => {
            let (client, scope) = client_from_args(&args, &cli_config)?;
            create::run(create_args, &client, &scope, &printer)
        }
        Command::Delete { delete_args } => {
            let (client, scope) = client_from_args(&args, &cli_config)?;
            delete::run(delete_args, &client, &scope)
        }
        Command::Get { get_args } => {
            let (client, scope) = client_from_args(&args, &cli_config)?;
            get::run(get_args, &client, &scope, &printer)
        }
    }
}

fn client_from_args(args: &Args, config: &AutomlConfig) -> Result<(Client, Scope)> {
    let current_context = if let Some(context_name) = args.context.as_ref() {
        let context = config.get_context(context_name);
        if context.is_none() {
            return Err(anyhow!("Unknown context `{}`.", context_name));
        };
        context
    } else {
        config.get_current_context()
    };

    let endpoint = args
        .endpoint
        .clone()
        .or_else(|| current_context.map(|context| context.endpoint.clone()))
        .unwrap_or_else(|| DEFAULT_ENDPOINT.clone());

    let args_or_config_token = args
        .token
        .clone()
        .or_else(|| current_context.and_then(|context| context.token.clone()));

    let token = Token(if let Some(token) = args_or_config_token {
        token
    } else {
        read_token_from_stdin()?.unwrap_or_default()
    });

    let accept_invalid_certificates = args
        .accept_invalid_certificates
        .or_else(|| current_context.map(|context| context.accept_invalid_certificates))
        .unwrap_or(false);

    if accept_invalid_certificates {
        warn!(concat!(
            "TLS certificate verification is disabled. ",
            "Do NOT use this over an insecure network."
        ));
    }

    let proxy = args
        .proxy
        .clone()
        .or_else(|| current_context.and_then(|context| context.proxy.clone()));

    let project = args
        .project
        .clone()
        .or_else(|| current_context.and_then(|context| context.project.clone()))
        .or_else(|| env::var(PROJECT_ENV_VARIABLE_NAME).ok())
        .map(ProjectId);

    let location = Location(
        args.region
            .clone()
            .or_else(|| current_context.and_then(|context| context.region.clone()))
            .unwrap_or_else(|| DEFAULT_REGION.to_owned()),
    );

    let client = Client::new(ClientConfig {
        endpoint,
        token,
        accept_invalid_certificates,
        proxy,
        retry_config: Some(RetryConfig {
            strategy: RetryStrategy::Automatic,
            max_retry_count: 3,
            base_wait: Duration::from_millis(500),
            backoff_factor: 2.0,
        }),
        ..Default::default()
    })
    .context("Failed to initialise the API client.")?;

    Ok((client, Scope { project, location }))
}

fn find_configuration(args: &Args) -> Result<PathBuf> {
    let config_path = if let Some(config_path) = args.config.clone() {
        if !config_path.exists() {
            warn!(
                "Configuration file `{}` doesn't exist.",
                config_path.display()
            );
        }
        config_path
    } else {
        let mut config_path =
            dirs::config_dir().context("Could not get path to the user's config directory")?;
        config_path.push("automl");
        fs::create_dir_all(&config_path).with_context(|| {
            format!(
                "Could not create config directory {}",
                config_path.display()
            )
        })?;
        config_path.push("contexts.json");
        config_path
    };
    Ok(config_path)
}

fn main() {
    let args = Args::from_args();
    init_env_logger(args.verbose);

    if let Err(error) = run(args) {
        error!("An error occurred:");
        for cause in error.chain() {
            error!(" |- {cause}");
        }

        #[cfg(feature = "backtrace")]
        {
            error!("{}", error.backtrace());
        }

        process::exit(1);
    }
}
