// src/app.rs
use std::{fs, path::PathBuf, sync::Arc};

use anyhow::Result;
use codestat_core::{
    Aggregator, Backpressure, CountOptions, LanguageRegistry, PoolConfig, Report, StatsProcessor, SubmitError,
    WorkerPool,
};
use codestat_domain::LanguageDescriptor;
use codestat_infra::{FsContentSource, WalkOptions};
use codestat_ports::{ContentSource, RecordSink};
use codestat_shared_kernel::{ConfigurationError, ErrorContext, InfrastructureError};
use serde::Serialize;

use crate::args::{Args, BackpressureArg, OutputFormat};

/// 実行時設定 (CLI 引数を検証済みの形に変換したもの)
#[derive(Debug, Clone, Serialize)]
pub struct AppConfig {
    pub walk: WalkOptions,
    pub pool: PoolConfig,
    pub format: OutputFormat,
    pub no_complexity: bool,
    pub skip_binary: bool,
    pub per_file: bool,
    pub languages: Option<PathBuf>,
    #[serde(skip)]
    pub verbose: u8,
}

impl From<Args> for AppConfig {
    fn from(args: Args) -> Self {
        let roots = if args.paths.is_empty() { vec![PathBuf::from(".")] } else { args.paths };

        let mut pool = args.workers.map_or_else(PoolConfig::default, PoolConfig::with_workers);
        if let Some(capacity) = args.queue_capacity {
            pool = pool.queue_capacity(capacity);
        }
        pool = pool.backpressure(match args.backpressure {
            BackpressureArg::Block => Backpressure::Block,
            BackpressureArg::Reject => Backpressure::Reject,
        });

        Self {
            walk: WalkOptions {
                roots,
                hidden: args.hidden,
                git_ignore: !args.no_ignore,
                max_depth: args.max_depth,
                follow_links: args.follow_links,
                max_file_size: args.max_file_size,
            },
            pool,
            format: args.format,
            no_complexity: args.no_complexity,
            skip_binary: !args.count_binary,
            per_file: args.per_file,
            languages: args.languages,
            verbose: args.verbose,
        }
    }
}

/// Built-in languages, extended (or overridden by name) from the JSON file.
///
/// # Errors
/// Unreadable or malformed language file, or duplicate names inside it.
pub fn load_registry(languages: Option<&PathBuf>) -> codestat_shared_kernel::Result<LanguageRegistry> {
    let mut registry = LanguageRegistry::builtin();
    let Some(path) = languages else {
        return Ok(registry);
    };

    let text = fs::read_to_string(path)
        .map_err(|source| InfrastructureError::FileRead { path: path.clone(), source })
        .with_context(|| format!("reading language file {}", path.display()))?;
    let descriptors: Vec<LanguageDescriptor> = serde_json::from_str(&text)
        .map_err(|e| ConfigurationError::InvalidLanguageTable { details: e.to_string() })
        .with_context(|| format!("parsing language file {}", path.display()))?;
    // ファイル内の重複はここで弾く
    LanguageRegistry::from_descriptors(descriptors.iter().cloned())
        .with_context(|| format!("validating language file {}", path.display()))?;

    log::debug!("loaded {} language definitions from {}", descriptors.len(), path.display());
    registry.extend(descriptors);
    Ok(registry)
}

/// Walks, counts and aggregates according to `config`.
///
/// # Errors
/// Configuration problems, a missing root, or a pool that cannot start.
pub fn run(config: &AppConfig) -> Result<Report> {
    let registry = Arc::new(load_registry(config.languages.as_ref())?);
    let processor = Arc::new(StatsProcessor::new(
        Arc::clone(&registry),
        CountOptions { complexity: !config.no_complexity, skip_binary: config.skip_binary },
    ));
    let aggregator = Arc::new(if config.per_file { Aggregator::retaining_files() } else { Aggregator::new() });

    let pool = WorkerPool::start(config.pool, processor, Arc::clone(&aggregator) as Arc<dyn RecordSink>)
        .context("failed to start worker pool")?;

    let source = FsContentSource::new(config.walk.clone(), registry);
    let mut rejected = 0_u64;
    let discovered = source
        .visit(&mut |record| {
            match pool.submit(record) {
                Ok(()) => {}
                Err(SubmitError::QueueFull(record)) => {
                    rejected += 1;
                    aggregator.fault(&record.path, "rejected: job queue full");
                }
                Err(err @ SubmitError::ShutDown(_)) => {
                    log::warn!("{err}");
                }
            }
            Ok(())
        })
        .context("failed to walk input paths")?;

    let progress = pool.shutdown();
    log::info!(
        "discovered={discovered} submitted={} processed={} faulted={} rejected={rejected}",
        progress.submitted,
        progress.processed,
        progress.faulted
    );

    Ok(Arc::try_unwrap(aggregator).map_or_else(|shared| shared.snapshot(), Aggregator::into_report))
}
