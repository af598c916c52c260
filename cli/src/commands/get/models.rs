use anyhow::{Context, Result};
use automl_client::{Client, ModelId};
use structopt::StructOpt;

use crate::{printer::Printer, Scope};

#[derive(Debug, StructOpt)]
pub struct GetModelsArgs {
    #[structopt(short = "f", long = "filter")]
    /// Filter expression restricting which models are listed
    filter: Option<String>,
}

pub fn get_many(
    client: &Client,
    scope: &Scope,
    args: &GetModelsArgs,
    printer: &Printer,
) -> Result<()> {
    let GetModelsArgs { filter } = args;
    let mut models = client
        .list_models(&scope.parent()?, filter.as_deref())
        .context("Operation to list models has failed.")?;
    models.sort_unstable_by(|lhs, rhs| lhs.name.model_id.0.cmp(&rhs.name.model_id.0));

    println!("List of models:");
    printer.print_resources(&models)
}

#[derive(Debug, StructOpt)]
pub struct GetModelArgs {
    #[structopt(short = "a", long = "model-id")]
    /// Id of the model
    model_id: String,
}

pub fn get_single(
    client: &Client,
    scope: &Scope,
    args: &GetModelArgs,
    printer: &Printer,
) -> Result<()> {
    let model = client
        .get_model(&scope.model(ModelId(args.model_id.clone()))?)
        .context("Operation to get model has failed.")?;
    printer.print_resources([&model])
}
