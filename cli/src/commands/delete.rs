use anyhow::{Context, Result};
use automl_client::{Client, GlossaryId, ModelId};
use structopt::StructOpt;

use crate::Scope;

#[derive(Debug, StructOpt)]
pub enum DeleteArgs {
    #[structopt(name = "model")]
    /// Delete a model
    Model {
        #[structopt(short = "a", long = "model-id")]
        /// Id of the model to delete
        model_id: String,
    },

    #[structopt(name = "glossary")]
    /// Delete a glossary
    Glossary {
        #[structopt(short = "g", long = "glossary-id")]
        /// Id of the glossary to delete
        glossary_id: String,
    },
}

pub fn run(delete_args: &DeleteArgs, client: &Client, scope: &Scope) -> Result<()> {
    match delete_args {
        DeleteArgs::Model { model_id } => {
            let operation = client
                .delete_model(&scope.model(ModelId(model_id.clone()))?)
                .context("Operation to delete model has failed.")?;
            let finished = client
                .wait_operation(operation)
                .context("Model deletion did not complete successfully.")?;
            if finished.done {
                println!("Model deleted.");
            }
        }
        DeleteArgs::Glossary { glossary_id } => {
            let operation = client
                .delete_glossary(&scope.glossary(GlossaryId(glossary_id.clone()))?)
                .context("Operation to delete glossary has failed.")?;
            let finished = client
                .wait_operation(operation)
                .context("Glossary deletion did not complete successfully.")?;
            if finished.done {
                println!("Glossary deleted.");
            }
        }
    };
    Ok(())
}
