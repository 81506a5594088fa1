use std::{fs, path::Path, path::PathBuf, process::ExitCode, time::Duration};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use client_core::{
    AdvanceOutcome, ClientConfig, ControllerError, HttpFormSubmitter, StepController,
    SubmitOutcome,
};
use form_schema::{FormSchema, ValidationResult, STEPS};
use serde::Serialize;
use shared::{domain::FieldName, draft::DraftRecord};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "intake", about = "Validate and submit travel intake drafts")]
struct Args {
    /// Also require the return date to lie after today.
    #[arg(long, global = true)]
    require_future_return: bool,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print the validation result of every step and the submit gate.
    Check {
        #[arg(long)]
        draft: PathBuf,
        /// Limit the check to these fields, e.g. `--field email --field dateRange.to`.
        #[arg(long = "field")]
        fields: Vec<FieldName>,
    },
    /// Walk the draft through every step, then submit it.
    Submit {
        #[arg(long)]
        draft: PathBuf,
        /// Defaults to `INTAKE_SERVER_URL`, then http://127.0.0.1:4000.
        #[arg(long)]
        server_url: Option<String>,
        /// Defaults to `INTAKE_TIMEOUT_SECS`, then 10.
        #[arg(long)]
        timeout_secs: Option<u64>,
    },
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct StepReport {
    id: &'static str,
    name: &'static str,
    result: ValidationResult,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct CheckReport {
    steps: Vec<StepReport>,
    #[serde(skip_serializing_if = "Option::is_none")]
    selected: Option<ValidationResult>,
    submit_enabled: bool,
}

impl CheckReport {
    fn passed(&self) -> bool {
        match &self.selected {
            Some(result) => result.is_valid(),
            None => self.submit_enabled,
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();
    let args = Args::parse();

    let schema = if args.require_future_return {
        FormSchema::standard().with_reference_date(chrono::Local::now().date_naive())
    } else {
        FormSchema::standard()
    };

    match args.command {
        Command::Check { draft, fields } => {
            let record = load_draft(&draft)?;
            let report = check_report(&schema, &record, &fields);
            println!("{}", serde_json::to_string_pretty(&report)?);
            Ok(exit_code(report.passed()))
        }
        Command::Submit {
            draft,
            server_url,
            timeout_secs,
        } => {
            let record = load_draft(&draft)?;
            let config = client_config(server_url, timeout_secs);
            submit_draft(schema, record, &config).await
        }
    }
}

fn load_draft(path: &Path) -> Result<DraftRecord> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read draft {}", path.display()))?;
    let record = serde_json::from_str(&raw)
        .with_context(|| format!("draft {} is not a valid draft record", path.display()))?;
    Ok(record)
}

fn client_config(server_url: Option<String>, timeout_secs: Option<u64>) -> ClientConfig {
    let mut config = ClientConfig::from_env();
    if let Some(url) = server_url {
        config.server_url = url;
    }
    if let Some(secs) = timeout_secs.filter(|secs| *secs > 0) {
        config.request_timeout = Duration::from_secs(secs);
    }
    config
}

fn check_report(
    schema: &FormSchema,
    record: &DraftRecord,
    fields: &[FieldName],
) -> CheckReport {
    let steps = STEPS
        .iter()
        .map(|step| StepReport {
            id: step.id,
            name: step.name,
            result: schema.validate_fields(record, step.fields),
        })
        .collect();
    CheckReport {
        steps,
        selected: (!fields.is_empty()).then(|| schema.validate_fields(record, fields)),
        submit_enabled: schema.validate_all(record).is_valid(),
    }
}

async fn submit_draft(
    schema: FormSchema,
    record: DraftRecord,
    config: &ClientConfig,
) -> Result<ExitCode> {
    let mut controller = StepController::with_draft(schema, record);
    info!(session = %controller.session_id(), "walking draft through form steps");

    loop {
        match controller.advance()? {
            AdvanceOutcome::Advanced(change) => {
                println!("{} -> {}", STEPS[change.from].name, STEPS[change.to].name);
            }
            AdvanceOutcome::AtLastStep => break,
            AdvanceOutcome::Blocked(errors) => {
                let step = controller
                    .current_step()
                    .map(|step| step.name)
                    .unwrap_or("complete");
                let failing: Vec<&str> = errors.fields().map(|field| field.as_str()).collect();
                warn!(step, fields = ?failing, "draft blocked at step");
                println!("Blocked at {step} ({}):", failing.join(", "));
                println!("{}", serde_json::to_string_pretty(&errors)?);
                return Ok(ExitCode::FAILURE);
            }
        }
    }

    let submitter = HttpFormSubmitter::new(config)?;
    info!(endpoint = %submitter.endpoint(), "submitting draft");
    match controller.submit(&submitter).await {
        Ok(SubmitOutcome::Accepted(ack)) => {
            println!("{}", ack.message);
            Ok(ExitCode::SUCCESS)
        }
        Ok(SubmitOutcome::Failed(notice)) => {
            println!("{}", serde_json::to_string_pretty(&notice)?);
            Ok(ExitCode::FAILURE)
        }
        Err(ControllerError::Invalid(errors)) => {
            println!("Form is not ready to submit:");
            println!("{}", serde_json::to_string_pretty(&errors)?);
            Ok(ExitCode::FAILURE)
        }
        Err(err) => Err(err.into()),
    }
}

fn exit_code(ok: bool) -> ExitCode {
    if ok {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

#[cfg(test)]
#[path = "tests/main_tests.rs"]
mod tests;
