//! cadastro - check and submit registration forms from the command line
//!
//! Forms are JSON documents keyed by field (`full_name`, `birth_date`, `cpf`,
//! ...). Masked fields may be given with or without their separators.

use anyhow::{Context, Result};
use cadastro::form::{Field, FormStatus, RegistrationForm};
use cadastro::{local_today, CadastroConfig, LogSink, Mask, Rules};
use chrono::NaiveDate;
use std::fs;
use std::io::{self, Read, Write};
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const USAGE: &str = "\
usage:
  cadastro mask <date|cpf|cep|landline|cellphone> <text>
  cadastro check <form.json | -> [field ...]
  cadastro submit <form.json | ->";

/// Exit status for a submittable form or a successful command
const EXIT_OK: u8 = 0;
/// Exit status for a form that still has field errors
const EXIT_INVALID: u8 = 2;
/// Exit status for bad command-line usage
const EXIT_USAGE: u8 = 64;

fn main() -> Result<ExitCode> {
    let (config, config_error) = match CadastroConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (CadastroConfig::default(), Some(err)),
    };

    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();

    if let Some(err) = config_error {
        tracing::warn!("Failed to load config, using defaults: {err:#}");
    }

    let args: Vec<String> = std::env::args().skip(1).collect();
    let args: Vec<&str> = args.iter().map(String::as_str).collect();
    let code = run(
        &args,
        &config.rules(),
        local_today(),
        &mut io::stdin().lock(),
        &mut io::stdout().lock(),
    )?;
    Ok(ExitCode::from(code))
}

/// Dispatch one command line, returning the process exit status
fn run(
    args: &[&str],
    rules: &Rules,
    today: NaiveDate,
    stdin: &mut impl Read,
    out: &mut impl Write,
) -> Result<u8> {
    match args {
        ["mask", kind, text] => {
            let mask: Mask = kind.parse()?;
            writeln!(out, "{}", mask.apply(text))?;
            Ok(EXIT_OK)
        }
        ["check", source, only @ ..] => {
            let only = only
                .iter()
                .map(|key| key.parse::<Field>())
                .collect::<cadastro::Result<Vec<_>>>()?;
            let form = read_form(source, stdin)?;
            let status = form.status(today, rules);
            print_status(out, &form, &status, &only)?;
            Ok(exit_for(&status))
        }
        ["submit", source] => {
            let form = read_form(source, stdin)?;
            let mut sink = LogSink::new();
            match cadastro::submit(&form, &mut sink, today, rules) {
                Ok(payload) => {
                    writeln!(out, "{}", serde_json::to_string_pretty(&payload.redacted())?)?;
                    Ok(EXIT_OK)
                }
                Err(cadastro::Error::NotSubmittable { .. }) => {
                    let status = form.status(today, rules);
                    print_status(out, &form, &status, &[])?;
                    Ok(exit_for(&status))
                }
                Err(err) => Err(err.into()),
            }
        }
        _ => {
            eprintln!("{USAGE}");
            Ok(EXIT_USAGE)
        }
    }
}

/// Read a form document from a file, or from `stdin` when `source` is `-`
fn read_form(source: &str, stdin: &mut impl Read) -> Result<RegistrationForm> {
    let json = if source == "-" {
        let mut buf = String::new();
        stdin
            .read_to_string(&mut buf)
            .context("Failed to read form from stdin")?;
        buf
    } else {
        fs::read_to_string(source).with_context(|| format!("Failed to read form {source}"))?
    };
    RegistrationForm::from_json(&json).with_context(|| format!("Failed to parse form {source}"))
}

/// One line per field, or only the `only` fields when given
fn print_status(
    out: &mut impl Write,
    form: &RegistrationForm,
    status: &FormStatus,
    only: &[Field],
) -> io::Result<()> {
    if let Some(age) = status.age {
        writeln!(out, "Idade calculada: {age} anos")?;
    }
    for field in Field::ALL {
        if !only.is_empty() && !only.contains(&field) {
            continue;
        }
        let value = if field.is_secret() && !form.get(field).is_empty() {
            "********"
        } else {
            form.get(field)
        };
        match status.errors.get(field) {
            Some(err) => writeln!(out, "✗ {}: {value:?} - {err}", field.label())?,
            None => writeln!(out, "✓ {}: {value:?}", field.label())?,
        }
    }
    if status.valid {
        writeln!(out, "Formulário pronto para envio.")
    } else {
        writeln!(out, "{} campo(s) com erro.", status.errors.count())
    }
}

fn exit_for(status: &FormStatus) -> u8 {
    if status.valid {
        EXIT_OK
    } else {
        EXIT_INVALID
    }
}
