use anyhow::{Context, Result};
use automl_client::{Client, EvaluationId, ModelId};
use structopt::StructOpt;

use crate::{printer::Printer, Scope};

#[derive(Debug, StructOpt)]
pub struct GetModelEvaluationsArgs {
    #[structopt(short = "a", long = "model-id")]
    /// Id of the model whose evaluations to list
    model_id: String,

    #[structopt(short = "f", long = "filter")]
    /// Filter expression restricting which evaluations are listed
    filter: Option<String>,
}

pub fn get_many(
    client: &Client,
    scope: &Scope,
    args: &GetModelEvaluationsArgs,
    printer: &Printer,
) -> Result<()> {
    let GetModelEvaluationsArgs { model_id, filter } = args;
    let evaluations = client
        .list_model_evaluations(&scope.model(ModelId(model_id.clone()))?, filter.as_deref())
        .context("Operation to list model evaluations has failed.")?;

    println!("List of model evaluations:");
    printer.print_resources(&evaluations)
}

#[derive(Debug, StructOpt)]
pub struct GetModelEvaluationArgs {
    #[structopt(short = "a", long = "model-id")]
    /// Id of the model the evaluation belongs to
    model_id: String,

    #[structopt(short = "e", long = "evaluation-id")]
    /// Id of the model evaluation
    evaluation_id: String,
}

pub fn get_single(
    client: &Client,
    scope: &Scope,
    args: &GetModelEvaluationArgs,
    printer: &Printer,
) -> Result<()> {
    let GetModelEvaluationArgs {
        model_id,
        evaluation_id,
    } = args;
    let name = scope
        .model(ModelId(model_id.clone()))?
        .evaluation(EvaluationId(evaluation_id.clone()));
    let evaluation = client
        .get_model_evaluation(&name)
        .context("Operation to get model evaluation has failed.")?;
    printer.print_resources([&evaluation])
}
