//! anchor-layout - replay container resizes against a form description
//!
//! Usage: anchor-layout <form.toml> <W>x<H>... [--json]
//!
//! Each size is applied in turn as the form's new inner size and the
//! resulting bounds of every control are printed.

use std::path::PathBuf;
use std::process::ExitCode;

use serde::Serialize;
use thiserror::Error;

use anchor_layout::shared::FormConfig;
use anchor_layout::{log, Bounds, ConfigError, Container, ControlKind, DomainError, Size};

#[derive(Error, Debug)]
enum AppError {
    #[error("{0}")]
    Usage(String),

    #[error("config: {0}")]
    Config(#[from] ConfigError),

    #[error("{0}")]
    Domain(#[from] DomainError),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
}

const USAGE: &str = "usage: anchor-layout [<form.toml>] <W>x<H>... [--json]";

struct Args {
    form_path: PathBuf,
    sizes: Vec<Size>,
    json: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args, AppError> {
    let mut form_path = None;
    let mut sizes = Vec::new();
    let mut json = false;

    for arg in args {
        if arg == "--json" {
            json = true;
        } else if arg == "-h" || arg == "--help" {
            return Err(AppError::Usage(USAGE.to_string()));
        } else if form_path.is_none() && sizes.is_empty() && arg.ends_with(".toml") {
            form_path = Some(PathBuf::from(arg));
        } else {
            sizes.push(arg.parse::<Size>()?);
        }
    }

    let form_path = match form_path.or_else(FormConfig::find_config_path) {
        Some(p) => p,
        None => {
            return Err(AppError::Usage(format!(
                "no form description given or found\n{}",
                USAGE
            )))
        }
    };

    if sizes.is_empty() {
        return Err(AppError::Usage(USAGE.to_string()));
    }

    Ok(Args {
        form_path,
        sizes,
        json,
    })
}

#[derive(Serialize)]
struct ControlReport {
    path: String,
    kind: ControlKind,
    bounds: Bounds,
}

#[derive(Serialize)]
struct StepReport {
    inner_size: Size,
    controls: Vec<ControlReport>,
}

fn snapshot(form: &Container) -> StepReport {
    let mut controls = Vec::new();
    form.walk(&mut |path, control| {
        controls.push(ControlReport {
            path: path.to_string(),
            kind: control.kind(),
            bounds: control.bounds(),
        })
    });
    StepReport {
        inner_size: form.inner_size(),
        controls,
    }
}

fn run() -> Result<(), AppError> {
    let args = parse_args(std::env::args().skip(1))?;

    let config = FormConfig::load_from_path(&args.form_path)?;
    if config.logging.enabled {
        log::init_with(&config.logging.path());
    }
    log!("Loaded form '{}' from {:?}", config.form.name, args.form_path);

    let mut form = config.build()?;
    let mut steps = vec![snapshot(&form)];

    for size in &args.sizes {
        log!("Applying inner size {}", size);
        form.resize_inner(*size);
        steps.push(snapshot(&form));
    }

    if args.json {
        println!("{}", serde_json::to_string_pretty(&steps)?);
    } else {
        for step in &steps {
            println!("== {}", step.inner_size);
            for c in &step.controls {
                println!("  {:<24} {:<12} {}", c.path, format!("{:?}", c.kind), c.bounds);
            }
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    match run() {
        Ok(()) => {
            log!("anchor-layout exited normally.");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log!("FATAL: {}", e);
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
