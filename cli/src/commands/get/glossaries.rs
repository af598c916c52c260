use anyhow::{Context, Result};
use automl_client::{Client, GlossaryId};
use structopt::StructOpt;

use crate::{printer::Printer, Scope};

#[derive(Debug, StructOpt)]
pub struct GetGlossariesArgs {
    #[structopt(short = "f", long = "filter")]
    /// Filter expression restricting which glossaries are listed
    filter: Option<String>,
}

pub fn get_many(
    client: &Client,
    scope: &Scope,
    args: &GetGlossariesArgs,
    printer: &Printer,
) -> Result<()> {
    let GetGlossariesArgs { filter } = args;
    let mut glossaries = client
        .list_glossaries(&scope.parent()?, filter.as_deref())
        .context("Operation to list glossaries has failed.")?;
    glossaries.sort_unstable_by(|lhs, rhs| lhs.name.glossary_id.0.cmp(&rhs.name.glossary_id.0));

    println!("List of glossaries:");
    printer.print_resources(&glossaries)
}

#[derive(Debug, StructOpt)]
pub struct GetGlossaryArgs {
    #[structopt(short = "g", long = "glossary-id")]
    /// Id of the glossary
    glossary_id: String,
}

pub fn get_single(
    client: &Client,
    scope: &Scope,
    args: &GetGlossaryArgs,
    printer: &Printer,
) -> Result<()> {
    let glossary = client
        .get_glossary(&scope.glossary(GlossaryId(args.glossary_id.clone()))?)
        .context("Operation to get glossary has failed.")?;
    printer.print_resources([&glossary])
}
