#[cfg(test)]
#[path = "main_test.rs"]
mod main_test;

use std::fs;
use std::io::{self, Read};

use clap::{Args, Parser, Subcommand};
use composer::config::{ConfigError, EngineConfig};
use composer::document::{self, Document, validate_document};
use composer::error::DocumentError;
use composer::engine::{BackgroundScope, BackgroundSource, CompositionEngine};
use composer::error::EngineError;
use composer::template::TemplateCatalog;
use serde_json::Value;
use tracing::Level;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("cannot read {path}: {source}")]
    Read { path: String, source: io::Error },
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Document(#[from] DocumentError),
    #[error("{0}")]
    Engine(#[from] EngineError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
    #[error("unknown template `{0}`; run `photobook templates` to list them")]
    UnknownTemplate(String),
    #[error("document has {0} validation error(s)")]
    InvalidDocument(usize),
}

#[derive(Parser, Debug)]
#[command(name = "photobook", about = "Create, check and edit photobook documents")]
struct Cli {
    #[arg(long, env = "PHOTOBOOK_LOG", default_value = "warn")]
    log_level: Level,

    #[command(flatten)]
    page: PageArgs,

    #[command(subcommand)]
    command: Command,
}

/// Defaults for pages the tool creates. Unset flags fall back to `EngineConfig::from_env`.
#[derive(Args, Debug)]
struct PageArgs {
    #[arg(long, global = true, env = "PHOTOBOOK_PAGE_WIDTH")]
    page_width: Option<f64>,

    #[arg(long, global = true, env = "PHOTOBOOK_PAGE_HEIGHT")]
    page_height: Option<f64>,

    #[arg(long, global = true, env = "PHOTOBOOK_BACKGROUND")]
    page_background: Option<String>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a fresh document.
    New {
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u16).range(1..))]
        pages: u16,
        /// Lay out every page with this template.
        #[arg(long)]
        template: Option<String>,
    },
    /// Check a document and print `ok` or every validation error.
    Validate {
        #[arg(default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
    /// Re-emit a document in canonical form.
    Normalize {
        #[arg(default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
    },
    /// List the built-in templates.
    Templates {
        #[arg(long)]
        category: Option<String>,
    },
    /// Replace a page's elements with a template.
    ApplyTemplate {
        #[arg(default_value = "-", help = "Input file path, or - for stdin")]
        input: String,
        #[arg(long, default_value_t = 0)]
        page: usize,
        #[arg(long)]
        template: String,
    },
    /// Set a page background.
    Background(BackgroundArgs),
}

#[derive(Args, Debug)]
struct BackgroundArgs {
    #[arg(default_value = "-", help = "Input file path, or - for stdin")]
    input: String,

    #[arg(long, conflicts_with = "image", required_unless_present = "image")]
    color: Option<String>,

    #[arg(long)]
    image: Option<String>,

    /// Image strength, 0 to 1.
    #[arg(long, requires = "image")]
    intensity: Option<f64>,

    /// Apply to every page instead of one.
    #[arg(long, conflicts_with = "page")]
    all: bool,

    #[arg(long, default_value_t = 0)]
    page: usize,
}

fn main() -> Result<(), CliError> {
    let cli = Cli::parse();
    tracing_subscriber::fmt()
        .with_max_level(cli.log_level)
        .with_writer(io::stderr)
        .init();

    let config = engine_config(&cli.page)?;
    match cli.command {
        Command::New { pages, template } => run_new(config, pages, template.as_deref()),
        Command::Validate { input } => run_validate(&input),
        Command::Normalize { input } => {
            let doc = document::deserialize(&read_input(&input)?)?;
            println!("{}", document::serialize(&doc)?);
            Ok(())
        }
        Command::Templates { category } => run_templates(&config, category.as_deref()),
        Command::ApplyTemplate { input, page, template } => run_apply_template(config, &input, page, &template),
        Command::Background(args) => run_background(config, args),
    }
}

fn engine_config(page: &PageArgs) -> Result<EngineConfig, CliError> {
    let mut config = EngineConfig::from_env()?;
    if let Some(width) = page.page_width {
        config.page_width = width;
    }
    if let Some(height) = page.page_height {
        config.page_height = height;
    }
    if let Some(background) = &page.page_background {
        config.background_color.clone_from(background);
    }
    tracing::debug!(?config, "engine config");
    Ok(config)
}

fn run_new(config: EngineConfig, pages: u16, template: Option<&str>) -> Result<(), CliError> {
    let mut engine = CompositionEngine::new(config);
    for _ in 1..pages {
        engine.add_page();
    }
    if let Some(id) = template {
        for index in 0..engine.pages().len() {
            apply_builtin(&mut engine, index, id)?;
        }
    }
    println!("{}", engine.serialize()?);
    Ok(())
}

fn run_validate(input: &str) -> Result<(), CliError> {
    let doc: Document = serde_json::from_str(&read_input(input)?).map_err(DocumentError::from)?;
    let validation = validate_document(&doc);
    if validation.is_valid() {
        println!("ok");
        return Ok(());
    }
    let count = validation.errors.len();
    print_json(&serde_json::to_value(&validation)?)?;
    Err(CliError::InvalidDocument(count))
}

fn run_templates(config: &EngineConfig, category: Option<&str>) -> Result<(), CliError> {
    let catalog = TemplateCatalog::builtin(config.page_width, config.page_height);
    let templates = match category {
        Some(category) => catalog.by_category(category),
        None => catalog.list().iter().collect(),
    };
    let listing: Vec<Value> = templates
        .into_iter()
        .map(|t| {
            serde_json::json!({
                "id": t.id,
                "name": t.name,
                "category": t.category,
                "description": t.description,
                "elements": t.elements.len(),
            })
        })
        .collect();
    print_json(&Value::Array(listing))
}

fn run_apply_template(config: EngineConfig, input: &str, page: usize, template: &str) -> Result<(), CliError> {
    let mut engine = load_engine(config, input)?;
    apply_builtin(&mut engine, page, template)?;
    println!("{}", engine.serialize()?);
    Ok(())
}

fn run_background(config: EngineConfig, args: BackgroundArgs) -> Result<(), CliError> {
    let mut engine = load_engine(config, &args.input)?;
    let source = match (args.image, args.color) {
        (Some(src), _) => BackgroundSource::Image(src),
        (None, Some(color)) => BackgroundSource::Color(color),
        (None, None) => BackgroundSource::Color(engine.config().background_color.clone()),
    };
    let scope = if args.all {
        BackgroundScope::AllPages
    } else {
        if !engine.select_page(args.page) {
            return Err(EngineError::PageNotFound(args.page).into());
        }
        BackgroundScope::CurrentPage
    };
    let changed = engine.change_background(scope, source, args.intensity)?;
    tracing::info!(pages = changed, "background updated");
    println!("{}", engine.serialize()?);
    Ok(())
}

/// Apply a built-in template sized for the target page.
fn apply_builtin(engine: &mut CompositionEngine, page: usize, id: &str) -> Result<(), CliError> {
    let target = engine.page(page).ok_or(EngineError::PageNotFound(page))?;
    let catalog = TemplateCatalog::builtin(target.width, target.height);
    let template = catalog.get(id).ok_or_else(|| CliError::UnknownTemplate(id.to_owned()))?;
    engine.apply_template(page, template)?;
    Ok(())
}

fn load_engine(config: EngineConfig, input: &str) -> Result<CompositionEngine, CliError> {
    let mut engine = CompositionEngine::new(config);
    engine.load(&read_input(input)?)?;
    Ok(engine)
}

fn read_input(input: &str) -> Result<String, CliError> {
    let read = if input == "-" {
        let mut text = String::new();
        io::stdin().read_to_string(&mut text).map(|_| text)
    } else {
        fs::read_to_string(input)
    };
    read.map_err(|source| CliError::Read { path: input.to_owned(), source })
}

fn print_json(value: &Value) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}
