use std::io::{self, Write};
use std::path::Path;
use std::sync::Arc;

use chrono::Local;
use tracing::warn;

use crate::app::{AppContext, Result};
use crate::display::PrintDisplay;
use crate::domain::SourceList;
use crate::ingest::Ingestion;
use crate::rotation::RotationScheduler;

/// Headless rotation: every story and status line goes to stdout until Ctrl-C.
pub async fn watch(ctx: &AppContext) -> Result<()> {
    let display = Arc::new(PrintDisplay::stdout());
    let (handle, scheduler) =
        RotationScheduler::spawn(ctx.pipeline.clone(), display, ctx.intervals());

    tokio::signal::ctrl_c().await?;

    handle.shutdown().await;
    if let Err(e) = scheduler.await {
        warn!("Rotation task ended abnormally: {}", e);
    }

    Ok(())
}

/// One ingestion cycle, printed newest first.
pub async fn fetch(ctx: &AppContext, json: bool) -> Result<()> {
    let ingestion = ctx.pipeline.run().await;

    if let Some(error) = &ingestion.source_error {
        eprintln!("{}", error);
    }

    let mut stdout = io::stdout().lock();
    if json {
        write_json(&mut stdout, &ingestion)
    } else {
        write_stories(&mut stdout, &ingestion)
    }
}

/// Print the source list, or fail with the reason it could not be read.
pub fn sources(path: &Path) -> Result<()> {
    let list = SourceList::load(path)?;
    write_sources(&mut io::stdout().lock(), path, &list)
}

fn write_stories(out: &mut impl Write, ingestion: &Ingestion) -> Result<()> {
    if ingestion.stories.is_empty() {
        writeln!(out, "No stories found.")?;
        return Ok(());
    }

    for story in ingestion.stories.iter() {
        writeln!(
            out,
            "{} {} ({})",
            story.published_at.with_timezone(&Local).format("%Y-%m-%d %H:%M"),
            story.title,
            story.source_label
        )?;
    }

    writeln!(
        out,
        "Fetched {} stories from {}/{} sources",
        ingestion.stories.len(),
        ingestion.contributing,
        ingestion.sources
    )?;
    Ok(())
}

fn write_json(out: &mut impl Write, ingestion: &Ingestion) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, ingestion.stories.as_slice())?;
    writeln!(out)?;
    Ok(())
}

fn write_sources(out: &mut impl Write, path: &Path, list: &SourceList) -> Result<()> {
    if list.is_empty() {
        writeln!(out, "No sources in {}", path.display())?;
        return Ok(());
    }

    writeln!(out, "{} sources in {}:", list.len(), path.display())?;
    for address in list.addresses() {
        writeln!(out, "  {}", address)?;
    }
    Ok(())
}
