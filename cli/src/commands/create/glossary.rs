use anyhow::{Context, Result};
use automl_client::{
    Client, GlossaryId, GlossaryInputConfig, GlossaryLanguages, LanguageCodePair, NewGlossary,
};
use structopt::StructOpt;

use crate::{printer::Printer, Scope};

#[derive(Debug, StructOpt)]
pub struct CreateGlossaryArgs {
    #[structopt(short = "g", long = "glossary-id")]
    /// Id of the new glossary
    glossary_id: String,

    #[structopt(short = "s", long = "source-language")]
    /// Source language code, e.g. "en"
    source_language: String,

    #[structopt(short = "t", long = "target-language")]
    /// Target language code, e.g. "es"
    target_language: String,

    #[structopt(short = "u", long = "input-uri")]
    /// Uri of the glossary entries to import, e.g. "gs://bucket/glossary.csv"
    input_uri: String,
}

pub fn create(
    client: &Client,
    scope: &Scope,
    args: &CreateGlossaryArgs,
    printer: &Printer,
) -> Result<()> {
    let CreateGlossaryArgs {
        glossary_id,
        source_language,
        target_language,
        input_uri,
    } = args;

    let parent = scope.parent()?;
    let operation = client
        .create_glossary(
            &parent,
            NewGlossary {
                name: parent.glossary(GlossaryId(glossary_id.clone())),
                languages: GlossaryLanguages::LanguagePair(LanguageCodePair {
                    source_language_code: source_language.clone(),
                    target_language_code: target_language.clone(),
                }),
                input_config: GlossaryInputConfig {
                    input_uri: input_uri.clone(),
                },
            },
        )
        .context("Operation to create a glossary has failed.")?;

    println!("Glossary creation operation name: {}", operation.name());

    let finished = client
        .wait_operation(operation)
        .context("Glossary creation did not complete successfully.")?;

    printer.print_resources([&finished.response])
}
