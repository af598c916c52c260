pub mod glossary;
pub mod model;

use anyhow::Result;
use automl_client::Client;
use structopt::StructOpt;

use self::{glossary::CreateGlossaryArgs, model::CreateModelArgs};
use crate::{printer::Printer, Scope};

#[derive(Debug, StructOpt)]
pub enum CreateArgs {
    #[structopt(name = "model")]
    /// Train a new model on an existing dataset
    Model(CreateModelArgs),

    #[structopt(name = "glossary")]
    /// Create a new translation glossary
    Glossary(CreateGlossaryArgs),
}

pub fn run(create_args: &CreateArgs, client: &Client, scope: &Scope, printer: &Printer) -> Result<()> {
    match create_args {
        CreateArgs::Model(args) => model::create(client, scope, args, printer),
        CreateArgs::Glossary(args) => glossary::create(client, scope, args, printer),
    }
}
