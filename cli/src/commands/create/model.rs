use anyhow::{Context, Result};
use automl_client::{
    Client, DatasetId, DisplayName, ModelMetadata, NewModel, TranslationModelMetadata,
};
use once_cell::sync::Lazy;
use regex::Regex;
use structopt::StructOpt;

use crate::{printer::Printer, Scope};

static RX_DISPLAY_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new("^[A-Za-z0-9_]{1,32}$").expect("Display name regex is well-formed"));

/// Ensures the display name conforms to what the service accepts.
fn validate_display_name(string: String) -> std::result::Result<(), String> {
    match RX_DISPLAY_NAME.is_match(&string) {
        true => Ok(()),
        false => Err(string),
    }
}

#[derive(Debug, StructOpt)]
pub struct CreateModelArgs {
    #[structopt(short = "i", long = "dataset-id")]
    /// Id of the dataset to train the model on
    dataset_id: String,

    #[structopt(short = "m", long = "name", validator = validate_display_name)]
    /// Display name of the new model
    name: String,
}

pub fn create(
    client: &Client,
    scope: &Scope,
    args: &CreateModelArgs,
    printer: &Printer,
) -> Result<()> {
    let CreateModelArgs { dataset_id, name } = args;

    let operation = client
        .create_model(
            &scope.parent()?,
            NewModel {
                display_name: DisplayName(name.clone()),
                dataset_id: DatasetId(dataset_id.clone()),
                metadata: ModelMetadata::TranslationModelMetadata(
                    TranslationModelMetadata::default(),
                ),
            },
        )
        .context("Operation to create a model has failed.")?;

    println!("Training operation name: {}", operation.name());
    println!("Training started...");

    let finished = client
        .wait_operation(operation)
        .context("Training did not complete successfully.")?;

    printer.print_resources([&finished.response])
}
