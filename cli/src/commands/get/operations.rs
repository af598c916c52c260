use anyhow::{Context, Result};
use automl_client::{Client, OperationName};
use structopt::StructOpt;

use crate::printer::Printer;

#[derive(Debug, StructOpt)]
pub struct GetOperationArgs {
    #[structopt(short = "o", long = "operation")]
    /// Full name of the operation, e.g.
    /// "projects/<project>/locations/<region>/operations/<operation>"
    operation: OperationName,
}

pub fn get(client: &Client, args: &GetOperationArgs, printer: &Printer) -> Result<()> {
    let status = client
        .get_operation(&args.operation)
        .context("Operation to get operation status has failed.")?;
    printer.print_resources([&status])
}
