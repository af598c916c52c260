mod evaluations;
mod glossaries;
mod models;
mod operations;

use anyhow::Result;
use automl_client::Client;
use structopt::StructOpt;

use self::{
    evaluations::{GetModelEvaluationArgs, GetModelEvaluationsArgs},
    glossaries::{GetGlossariesArgs, GetGlossaryArgs},
    models::{GetModelArgs, GetModelsArgs},
    operations::GetOperationArgs,
};
use crate::{printer::Printer, Scope};

#[derive(Debug, StructOpt)]
pub enum GetArgs {
    #[structopt(name = "models")]
    /// List the available models
    Models(GetModelsArgs),

    #[structopt(name = "model")]
    /// Get a single model
    Model(GetModelArgs),

    #[structopt(name = "model-evaluations")]
    /// List the evaluations of a model
    ModelEvaluations(GetModelEvaluationsArgs),

    #[structopt(name = "model-evaluation")]
    /// Get a single model evaluation
    ModelEvaluation(GetModelEvaluationArgs),

    #[structopt(name = "glossaries")]
    /// List the available glossaries
    Glossaries(GetGlossariesArgs),

    #[structopt(name = "glossary")]
    /// Get a single glossary
    Glossary(GetGlossaryArgs),

    #[structopt(name = "operation")]
    /// Get the latest state of a long-running operation
    Operation(GetOperationArgs),
}

pub fn run(args: &GetArgs, client: &Client, scope: &Scope, printer: &Printer) -> Result<()> {
    match args {
        GetArgs::Models(args) => models::get_many(client, scope, args, printer),
        GetArgs::Model(args) => models::get_single(client, scope, args, printer),
        GetArgs::ModelEvaluations(args) => evaluations::get_many(client, scope, args, printer),
        GetArgs::ModelEvaluation(args) => evaluations::get_single(client, scope, args, printer),
        GetArgs::Glossaries(args) => glossaries::get_many(client, scope, args, printer),
        GetArgs::Glossary(args) => glossaries::get_single(client, scope, args, printer),
        GetArgs::Operation(args) => operations::get(client, args, printer),
    }
}
