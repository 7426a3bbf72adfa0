use std::fs::File;
use std::io::{self, Read};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use schema::render::render_plain;
use schema::{
    Attribute, CveModel, CvePrediction, MAX_RECORDS, PredictRequest, PredictResponse, RawCveModel, ValidationError,
};
use serde_json::Value;

#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("invalid record spec `{0}`; expected attr=VALUE[,attr=VALUE...]")]
    InvalidRecordSpec(String),
    #[error("unknown attribute `{0}`; run `cvepred attributes` for the list")]
    UnknownAttribute(String),
    #[error("invalid record #{index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ValidationError,
    },
    #[error("input must be a JSON array of records or an object with a `data` array")]
    InvalidBatchShape,
    #[error("batch is empty")]
    EmptyBatch,
    #[error("batch holds {count} records; at most {max} can be predicted at once", max = MAX_RECORDS)]
    TooManyRecords { count: usize },
    #[error("http request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("prediction service returned HTTP {status}: {body}")]
    ServerError { status: u16, body: String },
    #[error("prediction count mismatch: sent {sent} records, received {received} predictions")]
    Misaligned { sent: usize, received: usize },
    #[error("invalid JSON payload: {0}")]
    InvalidJson(#[from] serde_json::Error),
    #[error("failed to read input: {0}")]
    Io(#[from] io::Error),
}

#[derive(Parser, Debug)]
#[command(name = "cvepred", about = "Batch CVE exploit prediction client")]
struct Cli {
    #[arg(long, env = "CVEPRED_BASE_URL", default_value = "http://localhost:8000")]
    base_url: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Submit one batch to the prediction service.
    Predict(PredictArgs),
    /// List every attribute and its allowed values.
    Attributes,
}

#[derive(Args, Debug)]
struct PredictArgs {
    #[arg(
        long = "record",
        value_name = "SPEC",
        help = "Record as attr=VALUE pairs over the default record, e.g. attackVector=LOCAL,scope=CHANGED"
    )]
    records: Vec<String>,

    #[arg(long, help = "JSON file with records, or - for stdin")]
    file: Option<String>,

    #[arg(long, default_value_t = false, help = "Print the raw JSON response")]
    json: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let outcome = match cli.command {
        Command::Predict(args) => run_predict(&cli.base_url, args).await,
        Command::Attributes => {
            println!("{}", render_attributes());
            Ok(())
        }
    };
    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

async fn run_predict(base_url: &str, args: PredictArgs) -> Result<(), CliError> {
    let batch = build_batch(&args)?;
    let predictions = post_predict(base_url, &batch).await?;
    if args.json {
        let rendered = serde_json::to_string_pretty(&PredictResponse { data: predictions })?;
        println!("{rendered}");
    } else {
        println!("{}", render_plain(&predictions));
    }
    Ok(())
}

/// Assemble the outbound batch: file records first, then `--record` specs.
/// With neither, the batch is one default record.
fn build_batch(args: &PredictArgs) -> Result<Vec<CveModel>, CliError> {
    let mut batch = Vec::new();
    if let Some(path) = args.file.as_deref() {
        batch.extend(parse_batch_json(&read_input(path)?)?);
    }
    for spec in &args.records {
        batch.push(parse_record_spec(spec, batch.len())?);
    }
    if batch.is_empty() {
        batch.push(CveModel::default());
    }
    if batch.len() > MAX_RECORDS {
        return Err(CliError::TooManyRecords { count: batch.len() });
    }
    Ok(batch)
}

async fn post_predict(base_url: &str, batch: &[CveModel]) -> Result<Vec<CvePrediction>, CliError> {
    if batch.is_empty() {
        return Err(CliError::EmptyBatch);
    }
    let client = reqwest::Client::new();
    let response = client
        .post(schema::predict_url(base_url))
        .json(&PredictRequest { data: batch.to_vec() })
        .send()
        .await?;

    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        return Err(CliError::ServerError { status: status.as_u16(), body });
    }

    let body: PredictResponse = serde_json::from_str(&response.text().await?)?;
    check_alignment(batch, body.data)
}

/// Predictions must pair 1:1 with the submitted records.
fn check_alignment(batch: &[CveModel], predictions: Vec<CvePrediction>) -> Result<Vec<CvePrediction>, CliError> {
    if predictions.len() != batch.len() {
        return Err(CliError::Misaligned { sent: batch.len(), received: predictions.len() });
    }
    Ok(predictions)
}

fn read_input(path: &str) -> Result<String, CliError> {
    let mut text = String::new();
    if path == "-" {
        io::stdin().read_to_string(&mut text)?;
    } else {
        File::open(path)?.read_to_string(&mut text)?;
    }
    Ok(text)
}

/// Parse `attr=VALUE` pairs on top of the default record.
///
/// `default` (or an empty spec) yields the default record unchanged. `index`
/// is the record's position in the batch, used in error messages.
fn parse_record_spec(spec: &str, index: usize) -> Result<CveModel, CliError> {
    let mut raw = RawCveModel::from(&CveModel::default());
    let trimmed = spec.trim();
    if !trimmed.is_empty() && trimmed != "default" {
        for pair in trimmed.split(',') {
            let (key, value) = pair
                .split_once('=')
                .ok_or_else(|| CliError::InvalidRecordSpec(spec.to_owned()))?;
            let key = key.trim();
            let attribute = Attribute::from_wire_name(key).ok_or_else(|| CliError::UnknownAttribute(key.to_owned()))?;
            raw.set(attribute, value.trim().to_ascii_uppercase());
        }
    }
    schema::validate(&raw).map_err(|source| CliError::InvalidRecord { index, source })
}

/// Parse a JSON batch: either `[record, ...]` or `{"data": [record, ...]}`.
fn parse_batch_json(text: &str) -> Result<Vec<CveModel>, CliError> {
    let value: Value = serde_json::from_str(text)?;
    let items = match &value {
        Value::Array(items) => items,
        Value::Object(object) => match object.get("data") {
            Some(Value::Array(items)) => items,
            _ => return Err(CliError::InvalidBatchShape),
        },
        _ => return Err(CliError::InvalidBatchShape),
    };

    items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            let object = item.as_object().ok_or(CliError::InvalidBatchShape)?;
            schema::validate(&RawCveModel::from_json_object(object))
                .map_err(|source| CliError::InvalidRecord { index, source })
        })
        .collect()
}

fn render_attributes() -> String {
    Attribute::ALL
        .iter()
        .map(|attribute| format!("{:<22} {}", attribute.wire_name(), attribute.values().join(" | ")))
        .collect::<Vec<_>>()
        .join("\n")
}
