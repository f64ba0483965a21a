//! Regrouping of convergence trials by the food web they ended with.
//!
//! ```text
//! <out>/compaction-report.json
//! <out>/<n>-species/<food_web_id>/node-configs.txt
//! <out>/<n>-species/<food_web_id>/foodweb.<food_web_id>.json
//! <out>/<n>-species/<food_web_id>/biomass-data/ATN.h5, ATN_1.h5, ...
//! <out>/<n>-species/<food_web_id>/biomass-plots/ATN.png, ...
//! ```

use std::collections::BTreeMap;
use std::ffi::OsString;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use atn_core::errors::{AtnError, ErrorInfo};
use atn_nodecfg::{decode, food_web_key};
use atn_store::{
    append_ledger_line, read_ledger, trial_file_name, trial_plot_name, write_json, DataRoot,
    SequenceRecord, BIOMASS_DATA_DIR, NODE_CONFIGS_FILE,
};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::foodweb::{FoodWebGraph, SubWeb};
use crate::render::Renderer;

pub const REPORT_FILE: &str = "compaction-report.json";
pub const PLOTS_DIR: &str = "biomass-plots";

/// Totals of one compaction run.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct CompactionReport {
    pub trials_by_food_web: BTreeMap<String, u64>,
    /// Keyed by species count.
    pub trials_by_size: BTreeMap<usize, u64>,
    pub distinct_food_webs: usize,
    pub total_trials: u64,
    /// Sequences without a completed record, in input order.
    pub skipped_sequences: Vec<u64>,
    /// Trials referenced through a `.ref.json` record instead of a link.
    pub reference_records: u64,
}

/// Pointer written in place of a trajectory when linking is impossible.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrajectoryRef {
    pub source: PathBuf,
    /// Trial index within the source batch.
    pub index: usize,
}

/// How a group slot refers to its source trajectory.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotLink {
    HardLink,
    Record,
}

/// Path of the reference record standing in for `slot`.
pub fn reference_path(slot: &Path) -> PathBuf {
    let mut name = slot.file_name().map(OsString::from).unwrap_or_default();
    name.push(".ref.json");
    slot.with_file_name(name)
}

/// Points `slot` at `source` without copying: a hard link where the
/// filesystem allows it, a reference record otherwise. A missing source is
/// an error.
pub fn link_trajectory(source: &Path, slot: &Path, index: usize) -> Result<SlotLink, AtnError> {
    match fs::hard_link(source, slot) {
        Ok(()) => Ok(SlotLink::HardLink),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            Err(AtnError::from_io("trajectory-link", source, err))
        }
        Err(err) => {
            warn!(source = %source.display(), slot = %slot.display(), error = %err, "hard link failed, writing reference");
            let record = TrajectoryRef {
                source: source.to_path_buf(),
                index,
            };
            write_json(&reference_path(slot), &record)?;
            Ok(SlotLink::Record)
        }
    }
}

fn clear_files(dir: &Path) -> Result<(), AtnError> {
    for entry in WalkDir::new(dir).min_depth(1).max_depth(1) {
        let entry = entry.map_err(|err| {
            AtnError::Io(
                ErrorInfo::new("group-scan", err.to_string())
                    .with_context("path", dir.display().to_string()),
            )
        })?;
        if !entry.file_type().is_dir() {
            fs::remove_file(entry.path())
                .map_err(|err| AtnError::from_io("group-clear", entry.path(), err))?;
        }
    }
    Ok(())
}

/// Regroups the convergence batches of completed sequences.
pub struct Compactor<'a, R> {
    root: &'a DataRoot,
    graph: Option<&'a FoodWebGraph>,
    renderer: R,
}

impl<'a, R: Renderer> Compactor<'a, R> {
    pub fn new(root: &'a DataRoot, renderer: R) -> Self {
        Self {
            root,
            graph: None,
            renderer,
        }
    }

    /// Exports induced sub-webs of `graph` instead of bare node lists.
    pub fn with_graph(mut self, graph: &'a FoodWebGraph) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    /// Compacts `sequences` into `out`, which must not exist yet.
    pub fn compact(&mut self, sequences: &[u64], out: &Path) -> Result<CompactionReport, AtnError> {
        if let Some(parent) = out.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .map_err(|err| AtnError::from_io("compact-output-parent", parent, err))?;
        }
        fs::create_dir(out).map_err(|err| match AtnError::from_io("compact-output", out, err) {
            AtnError::AlreadyExists(info) => {
                AtnError::AlreadyExists(info.with_hint("choose an output directory that does not exist"))
            }
            other => other,
        })?;

        let mut report = CompactionReport::default();
        for &sequence in sequences {
            let sequence_dir = self.root.sequence_dir(sequence);
            info!(sequence, dir = %sequence_dir.display(), "processing sequence");
            let Some(record) = SequenceRecord::read_from(&sequence_dir)? else {
                warn!(sequence, "sequence has no completed record, skipping");
                report.skipped_sequences.push(sequence);
                continue;
            };
            self.compact_sequence(sequence, &record, out, &mut report)?;
        }

        report.distinct_food_webs = report.trials_by_food_web.len();
        write_json(&out.join(REPORT_FILE), &report)?;
        info!(
            distinct_food_webs = report.distinct_food_webs,
            total_trials = report.total_trials,
            skipped = report.skipped_sequences.len(),
            "compaction finished"
        );
        Ok(report)
    }

    fn compact_sequence(
        &mut self,
        sequence: u64,
        record: &SequenceRecord,
        out: &Path,
        report: &mut CompactionReport,
    ) -> Result<(), AtnError> {
        let batch_dir = self.root.batch_dir(record.cvg_set, record.cvg_batch);
        let lines = read_ledger(&batch_dir.join(NODE_CONFIGS_FILE))?;

        for (trial, line) in lines.iter().enumerate() {
            let config = decode(line).map_err(|err| match AtnError::from(err) {
                AtnError::Parse(info) => AtnError::Parse(
                    info.with_context("sequence", sequence.to_string())
                        .with_context("trial", trial.to_string()),
                ),
                other => other,
            })?;
            let ids = config.sorted_ids();
            let key = food_web_key(&ids);

            let count = report.trials_by_food_web.entry(key.clone()).or_insert(0);
            let index = *count as usize;
            *count += 1;
            *report.trials_by_size.entry(ids.len()).or_insert(0) += 1;
            report.total_trials += 1;

            let group_dir = out.join(format!("{}-species", ids.len())).join(&key);
            if index == 0 {
                self.init_group(&group_dir, &ids, &key)?;
            }

            append_ledger_line(&group_dir.join(NODE_CONFIGS_FILE), line)?;
            let source = batch_dir.join(BIOMASS_DATA_DIR).join(trial_file_name(trial));
            let slot = group_dir.join(BIOMASS_DATA_DIR).join(trial_file_name(index));
            if link_trajectory(&source, &slot, trial)? == SlotLink::Record {
                report.reference_records += 1;
            }
            self.renderer.render_trajectory(
                &slot,
                &format!("{key} #{index}"),
                &group_dir.join(PLOTS_DIR).join(trial_plot_name(index)),
            )?;
            debug!(sequence, trial, food_web = %key, index, "trial compacted");
        }
        Ok(())
    }

    fn init_group(&mut self, group_dir: &Path, ids: &[u32], key: &str) -> Result<(), AtnError> {
        for sub in [BIOMASS_DATA_DIR, PLOTS_DIR] {
            let dir = group_dir.join(sub);
            fs::create_dir_all(&dir).map_err(|err| AtnError::from_io("group-create", &dir, err))?;
            clear_files(&dir)?;
        }
        let ledger = group_dir.join(NODE_CONFIGS_FILE);
        fs::write(&ledger, "").map_err(|err| AtnError::from_io("group-ledger", &ledger, err))?;

        let web = match self.graph {
            Some(graph) => graph.induced(ids),
            None => SubWeb::nodes_only(ids),
        };
        write_json(&group_dir.join(format!("foodweb.{key}.json")), &web)?;
        self.renderer
            .render_food_web(&web, &group_dir.join(format!("foodweb.{key}.png")))?;
        info!(food_web = %key, species = ids.len(), "new food web group");
        Ok(())
    }
}
