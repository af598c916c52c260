use anyhow::{anyhow, Context, Error, Result};
use automl_client::{
    EvaluationMetrics, Glossary, GlossaryLanguages, Model, ModelEvaluation, ModelMetadata,
    OperationStatus, Timestamp,
};
use serde::Serialize;
use std::{
    io::{self, Write},
    str::FromStr,
};

pub fn print_resources_as_json<Resource>(
    resources: impl IntoIterator<Item = Resource>,
    mut writer: impl Write,
) -> Result<()>
where
    Resource: Serialize,
{
    for resource in resources {
        serde_json::to_writer(&mut writer, &resource)
            .context("Could not serialise resource.")
            .and_then(|_| writeln!(writer).context("Failed to write JSON resource to writer."))?;
    }
    Ok(())
}

pub fn print_resources_as_text<Resource>(
    resources: impl IntoIterator<Item = Resource>,
    mut writer: impl Write,
) -> Result<()>
where
    Resource: DisplayDetails,
{
    for (index, resource) in resources.into_iter().enumerate() {
        if index > 0 {
            writeln!(writer).context("Failed to write resource to writer.")?;
        }
        resource
            .write_details(&mut writer)
            .context("Failed to write resource to writer.")?;
    }
    Ok(())
}

#[derive(Copy, Clone, Debug)]
pub enum OutputFormat {
    Json,
    Text,
}

impl Default for OutputFormat {
    fn default() -> Self {
        OutputFormat::Text
    }
}

impl FromStr for OutputFormat {
    type Err = Error;

    fn from_str(string: &str) -> Result<Self> {
        if string == "text" {
            Ok(OutputFormat::Text)
        } else if string == "json" {
            Ok(OutputFormat::Json)
        } else {
            Err(anyhow!("{}", string))
        }
    }
}

/// A resource that can be displayed as the key/value block the CLI prints.
///
/// Implementations own the exact line format. The integration tests assert
/// on these lines, so changing them is a breaking change.
pub trait DisplayDetails {
    fn write_details(&self, writer: &mut dyn Write) -> io::Result<()>;
}

impl<T: DisplayDetails + ?Sized> DisplayDetails for &T {
    fn write_details(&self, writer: &mut dyn Write) -> io::Result<()> {
        (**self).write_details(writer)
    }
}

fn write_timestamp(writer: &mut dyn Write, label: &str, timestamp: &Timestamp) -> io::Result<()> {
    writeln!(writer, "{label}")?;
    writeln!(writer, "\tseconds: {}", timestamp.seconds)?;
    writeln!(writer, "\tnanos: {}", timestamp.nanos)
}

impl DisplayDetails for Model {
    fn write_details(&self, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "Model name: {}", self.name)?;
        writeln!(writer, "Model id: {}", self.name.model_id.0)?;
        writeln!(writer, "Model display name: {}", self.display_name.0)?;
        writeln!(writer, "Model dataset id: {}", self.dataset_id.0)?;
        match &self.metadata {
            ModelMetadata::TranslationModelMetadata(metadata) => {
                writeln!(writer, "Translation model metadata:")?;
                if let Some(base_model) = &metadata.base_model {
                    writeln!(writer, "\tBase model: {base_model}")?;
                }
                if let Some(source_language_code) = &metadata.source_language_code {
                    writeln!(writer, "\tSource language code: {source_language_code}")?;
                }
                if let Some(target_language_code) = &metadata.target_language_code {
                    writeln!(writer, "\tTarget language code: {target_language_code}")?;
                }
            }
            ModelMetadata::TextClassificationModelMetadata(metadata) => {
                writeln!(writer, "Text classification model metadata:")?;
                if let Some(classification_type) = &metadata.classification_type {
                    writeln!(writer, "\tClassification type: {classification_type}")?;
                }
            }
            ModelMetadata::ImageClassificationModelMetadata(metadata) => {
                writeln!(writer, "Image classification model metadata:")?;
                if let Some(base_model_id) = &metadata.base_model_id {
                    writeln!(writer, "\tBase model id: {base_model_id}")?;
                }
                if let Some(train_budget) = metadata.train_budget {
                    writeln!(writer, "\tTrain budget: {train_budget}")?;
                }
                if let Some(train_cost) = metadata.train_cost {
                    writeln!(writer, "\tTrain cost: {train_cost}")?;
                }
                if let Some(stop_reason) = &metadata.stop_reason {
                    writeln!(writer, "\tStop reason: {stop_reason}")?;
                }
            }
        }
        write_timestamp(writer, "Model create time:", &self.create_time)?;
        write_timestamp(writer, "Model update time:", &self.update_time)?;
        writeln!(writer, "Model deployment state: {}", self.deployment_state)
    }
}

impl DisplayDetails for ModelEvaluation {
    fn write_details(&self, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "Model evaluation name: {}", self.name)?;
        writeln!(writer, "Model evaluation id: {}", self.name.evaluation_id.0)?;
        if let Some(annotation_spec_id) = &self.annotation_spec_id {
            writeln!(writer, "Model annotation spec id: {annotation_spec_id}")?;
        }
        if let Some(count) = self.evaluated_example_count {
            writeln!(writer, "Model evaluation example count: {count}")?;
        }
        match &self.metrics {
            EvaluationMetrics::TranslationEvaluationMetrics(metrics) => {
                writeln!(writer, "Translation evaluation metrics:")?;
                writeln!(writer, "\tBLEU score: {}", metrics.bleu_score)?;
                writeln!(writer, "\tBase BLEU score: {}", metrics.base_bleu_score)?;
            }
            EvaluationMetrics::ClassificationEvaluationMetrics(metrics) => {
                writeln!(writer, "Classification evaluation metrics:")?;
                writeln!(writer, "\tAuPRC: {}", metrics.au_prc)?;
                writeln!(writer, "\tBase AuPRC: {}", metrics.base_au_prc)?;
            }
        }
        write_timestamp(writer, "Model evaluation create time:", &self.create_time)
    }
}

impl DisplayDetails for Glossary {
    fn write_details(&self, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "Glossary name: {}", self.name)?;
        writeln!(writer, "Glossary id: {}", self.name.glossary_id.0)?;
        match &self.languages {
            GlossaryLanguages::LanguagePair(pair) => {
                writeln!(writer, "Glossary language pair:")?;
                writeln!(writer, "\tSource language code: {}", pair.source_language_code)?;
                writeln!(writer, "\tTarget language code: {}", pair.target_language_code)?;
            }
            GlossaryLanguages::LanguageCodesSet(set) => {
                writeln!(
                    writer,
                    "Glossary language codes: {}",
                    set.language_codes.join(", ")
                )?;
            }
        }
        writeln!(writer, "Glossary input uri: {}", self.input_config.input_uri)?;
        if let Some(entry_count) = self.entry_count {
            writeln!(writer, "Glossary entry count: {entry_count}")?;
        }
        if let Some(submit_time) = &self.submit_time {
            write_timestamp(writer, "Glossary submit time:", submit_time)?;
        }
        Ok(())
    }
}

impl DisplayDetails for OperationStatus {
    fn write_details(&self, writer: &mut dyn Write) -> io::Result<()> {
        writeln!(writer, "Operation name: {}", self.name)?;
        writeln!(writer, "Operation id: {}", self.name.operation_id.0)?;
        writeln!(writer, "Operation done: {}", self.done)?;
        if let Some(error) = &self.error {
            writeln!(writer, "Operation error:")?;
            writeln!(writer, "\tcode: {}", error.code)?;
            writeln!(writer, "\tmessage: {}", error.message)?;
        }
        Ok(())
    }
}

pub struct Printer {
    output: OutputFormat,
}

impl Printer {
    pub fn new(output: OutputFormat) -> Self {
        Self { output }
    }

    pub fn print_resources<T, Resource>(&self, resources: T) -> Result<()>
    where
        T: IntoIterator<Item = Resource>,
        Resource: Serialize + DisplayDetails,
    {
        match self.output {
            OutputFormat::Text => print_resources_as_text(resources, io::stdout().lock()),
            OutputFormat::Json => print_resources_as_json(resources, io::stdout().lock()),
        }
    }
}
