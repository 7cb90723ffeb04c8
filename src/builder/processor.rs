use log::{debug, error};
use rayon::prelude::*;

use crate::builder::types::{BuildReport, Document};
use crate::toc::{extract_headings, TocRenderer};
use crate::utils::error::BoxResult;
use crate::utils::fs;

/// Process documents in parallel, each with its own extraction pass
pub fn process_documents(documents: &[Document], renderer: &TocRenderer) -> BuildReport {
    let outcomes: Vec<Result<bool, String>> = documents
        .par_iter()
        .map(|doc| {
            process_document(doc, renderer).map_err(|e| {
                let message = format!("Error processing {}: {}", doc.path.display(), e);
                error!("{}", message);
                message
            })
        })
        .collect();

    let mut report = BuildReport::default();
    for outcome in outcomes {
        match outcome {
            Ok(with_toc) => {
                report.processed += 1;
                if with_toc {
                    report.with_toc += 1;
                }
            }
            Err(_) => report.failed += 1,
        }
    }

    report
}

/// Filter one document into its output path; returns whether a TOC was added
pub fn process_document(doc: &Document, renderer: &TocRenderer) -> BoxResult<bool> {
    let content = fs::read_file(&doc.path)?;
    let extraction = extract_headings(&content);

    let (output, with_toc) = match renderer.render(&extraction.headings) {
        Some(toc) => (toc + &extraction.content, true),
        None => (extraction.content, false),
    };

    debug!(
        "{}: {} headings",
        doc.relative_path.display(),
        extraction.headings.len()
    );

    fs::write_file(&doc.output_path, &output)?;
    Ok(with_toc)
}
