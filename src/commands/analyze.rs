//! src/commands/analyze.rs
//! One-shot analysis: print the report, optionally as JSON and to a file.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::info;

use crate::config::Settings;
use crate::core::analysis::{Analyzer, Report};
use crate::core::disclosure::Disclosure;
use crate::io::atomic::atomic_write;
use crate::render;

pub struct AnalyzeOpts {
    pub number: String,
    pub exact: bool,
    pub json: bool,
    pub out: Option<PathBuf>,
    pub threshold: Option<f64>,
}

pub fn main_with_opts(settings: Settings, opts: AnalyzeOpts) -> Result<()> {
    let mut settings = settings;
    if let Some(t) = opts.threshold {
        if !t.is_finite() || t <= 0.0 {
            anyhow::bail!("--threshold must be a positive finite number, got {t}");
        }
        settings.threshold = t;
    }

    let report = Analyzer::new(settings).analyze(&opts.number)?;

    if opts.json {
        println!("{}", report_json(&report)?);
    } else {
        let disclosure = if opts.exact { Disclosure::Shown } else { Disclosure::Hidden };
        print!("{}", render::to_colored(&render::lines(&report, disclosure)));
    }

    if let Some(out) = opts.out {
        atomic_write(&out, report_json(&report)?.as_bytes())
            .with_context(|| format!("writing report to {}", out.display()))?;
        info!(path = %out.display(), "report written");
    }
    Ok(())
}

pub fn report_json(report: &Report) -> Result<String> {
    serde_json::to_string_pretty(report).context("serializing report")
}
