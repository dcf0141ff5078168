use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use comfy_table::Table;
use serde_json::Value;
use tracing::{info, warn};

use rdbspec_model::ColumnType;
use rdbspec_store::{ActionStatus, Document, DocumentId};

use crate::cli::{ApplyArgs, NewArgs, ShowArgs};
use crate::summary::{ApplySummary, apply_table_style, print_document};

pub fn run_new(args: &NewArgs) -> Result<Document> {
    let document = Document::new(DocumentId::generate(), args.name.clone());
    write_document(&args.output, &document)?;
    info!(id = %document.header.id, path = %args.output.display(), "created document");
    println!("created {} ({})", args.output.display(), document.header.id);
    Ok(document)
}

pub fn run_apply(args: &ApplyArgs) -> Result<ApplySummary> {
    let mut document = read_document(&args.document)?;

    let text = fs::read_to_string(&args.actions)
        .with_context(|| format!("read actions file {}", args.actions.display()))?;
    let payload: Value = serde_json::from_str(&text)
        .with_context(|| format!("parse actions file {}", args.actions.display()))?;
    let actions = match payload {
        Value::Array(items) => items,
        object @ Value::Object(_) => vec![object],
        _ => bail!(
            "expected a JSON action object or array in {}",
            args.actions.display()
        ),
    };

    let mut summary = ApplySummary::default();
    for action in actions {
        // a validation failure stops the batch; the document file is only
        // rewritten after every action went through
        let receipt = document.apply(action).context("apply action")?;
        match receipt.status {
            ActionStatus::Applied => summary.applied += 1,
            ActionStatus::Skipped => {
                warn!("skipped action from another family");
                summary.skipped += 1;
            }
        }
    }
    summary.revision = document.header.revision;

    if !args.dry_run {
        write_document(&args.document, &document)?;
    }
    Ok(summary)
}

pub fn run_show(args: &ShowArgs) -> Result<()> {
    let document = read_document(&args.document)?;
    if args.json {
        let state =
            serde_json::to_string_pretty(&document.state).context("serialize state")?;
        println!("{state}");
    } else {
        print_document(&document);
    }
    Ok(())
}

pub fn run_column_types() {
    let mut table = Table::new();
    table.set_header(vec!["Type"]);
    apply_table_style(&mut table);
    for column_type in ColumnType::ALL {
        table.add_row(vec![column_type.as_str()]);
    }
    println!("{table}");
}

pub fn read_document(path: &Path) -> Result<Document> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("read document {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("parse document {}", path.display()))
}

pub fn write_document(path: &Path, document: &Document) -> Result<()> {
    let text = serde_json::to_string_pretty(document).context("serialize document")?;
    fs::write(path, text).with_context(|| format!("write document {}", path.display()))
}
