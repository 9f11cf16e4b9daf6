//! `user-form` command: create or edit a directory user from the terminal.
//!
//! Flags fill the draft, the form validates and submits it, and the saved
//! record is printed as JSON. Field errors and the banner go to stderr with a
//! failing exit status.

use std::ffi::OsString;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use directory_contract::{Field, UserRecord};
use ortho_config::OrthoConfig;
use thiserror::Error;
use tokio::runtime::Builder;
use tracing::warn;
use tracing_subscriber::{EnvFilter, fmt};
use user_form::{
    ApiFailure, ConfigError, FormConfig, FormSettings, HttpUsersApi, Mode, SubmitOutcome,
    UserForm, UsersApi,
};

/// `user-form` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "user-form",
    about = "Create or edit a user in the directory",
    version
)]
struct CliArgs {
    /// Edit the user with this identifier instead of creating one.
    #[arg(long, value_name = "id", conflicts_with = "list")]
    id: Option<String>,
    /// Given name.
    #[arg(long = "first-name", value_name = "name")]
    first_name: Option<String>,
    /// Family name.
    #[arg(long = "last-name", value_name = "name")]
    last_name: Option<String>,
    /// Contact address.
    #[arg(long, value_name = "address")]
    email: Option<String>,
    /// Organisational unit.
    #[arg(long, value_name = "name")]
    department: Option<String>,
    /// Print every user and exit.
    #[arg(long)]
    list: bool,
    /// User API base URL. Falls back to `USER_FORM_API_BASE_URL`.
    #[arg(long = "api-base-url", value_name = "url")]
    api_base_url: Option<String>,
}

impl CliArgs {
    fn changes(&self) -> impl Iterator<Item = (Field, &str)> {
        [
            (Field::FirstName, self.first_name.as_deref()),
            (Field::LastName, self.last_name.as_deref()),
            (Field::Email, self.email.as_deref()),
            (Field::Department, self.department.as_deref()),
        ]
        .into_iter()
        .filter_map(|(field, value)| value.map(|text| (field, text)))
    }
}

#[derive(Debug, Error)]
enum CliError {
    #[error("failed to start runtime: {0}")]
    Runtime(#[source] io::Error),
    #[error("invalid settings: {0}")]
    Settings(String),
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
    #[error(transparent)]
    Api(#[from] ApiFailure),
    #[error("failed to encode record: {0}")]
    Encode(#[from] serde_json::Error),
}

fn main() -> ExitCode {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let args = CliArgs::parse();
    let outcome = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(CliError::Runtime)
        .and_then(|runtime| runtime.block_on(run(args)));
    match outcome {
        Ok(code) => code,
        Err(err) => {
            write_line(&mut io::stderr().lock(), &err.to_string());
            ExitCode::FAILURE
        }
    }
}

async fn run(args: CliArgs) -> Result<ExitCode, CliError> {
    let api = Arc::new(HttpUsersApi::new(resolve_config(&args)?)?);

    if args.list {
        let users = api.list_users().await?;
        let mut out = io::stdout().lock();
        for user in &users {
            write_line(&mut out, &summary(user));
        }
        return Ok(ExitCode::SUCCESS);
    }

    let mode = Mode::from_id(args.id.clone());
    let mut form = UserForm::mount(api, mode).await;
    if let Some(banner) = form.banner() {
        write_line(&mut io::stderr().lock(), banner);
        return Ok(ExitCode::FAILURE);
    }
    for (field, value) in args.changes() {
        form.handle_change(field, value);
    }

    match form.submit().await {
        SubmitOutcome::NavigateToList(record) => {
            let json = serde_json::to_string_pretty(&record)?;
            write_line(&mut io::stdout().lock(), &json);
            Ok(ExitCode::SUCCESS)
        }
        SubmitOutcome::Stay => {
            let mut err = io::stderr().lock();
            write_line(&mut err, form.mode().title());
            if let Some(banner) = form.banner() {
                write_line(&mut err, banner);
            }
            for (field, message) in form.errors() {
                write_line(&mut err, &format!("  {}: {message}", field.label()));
            }
            Ok(ExitCode::FAILURE)
        }
    }
}

fn resolve_config(args: &CliArgs) -> Result<FormConfig, CliError> {
    if let Some(url) = args.api_base_url.as_deref() {
        return Ok(FormConfig::parse(url)?);
    }
    // Flags are parsed by clap above; settings only read env and files.
    let settings = FormSettings::load_from_iter([OsString::from("user-form")])
        .map_err(|err| CliError::Settings(err.to_string()))?;
    Ok(settings.form_config()?)
}

fn summary(user: &UserRecord) -> String {
    let fields = &user.fields;
    format!(
        "{}\t{} {}\t{}\t{}",
        user.id, fields.first_name, fields.last_name, fields.email, fields.department
    )
}

fn write_line(out: &mut impl Write, line: &str) {
    if let Err(err) = writeln!(out, "{line}") {
        drop(err);
    }
}
