use std::fs;
use std::path::{Path, PathBuf};

use atn_compact::{
    link_trajectory, reference_path, CompactionReport, Compactor, FoodWebGraph, LogRenderer,
    Renderer, SlotLink, SubWeb, TrajectoryRef,
};
use atn_core::AtnError;
use atn_nodecfg::{encode, Node, NodeConfig};
use atn_store::{read_ledger, DataRoot, SequenceRecord};
use tempfile::tempdir;

#[derive(Default)]
struct RecordingRenderer {
    webs: Vec<PathBuf>,
    trajectories: Vec<(String, PathBuf)>,
}

impl Renderer for RecordingRenderer {
    fn render_food_web(&mut self, _web: &SubWeb, output: &Path) -> Result<(), AtnError> {
        self.webs.push(output.to_path_buf());
        Ok(())
    }

    fn render_trajectory(&mut self, _data: &Path, title: &str, output: &Path) -> Result<(), AtnError> {
        self.trajectories.push((title.to_string(), output.to_path_buf()));
        Ok(())
    }
}

fn config(ids: &[u32], biomass: f64) -> NodeConfig {
    NodeConfig::new(
        ids.iter()
            .map(|id| Node::new(*id, biomass, 1.0).with_param("X", 0.2))
            .collect(),
    )
    .expect("config")
}

/// Writes a completed sequence whose convergence batch holds one trial per
/// config, each with its own trajectory bytes.
fn write_sequence(root: &DataRoot, sequence: u64, cvg_set: u64, configs: &[NodeConfig]) {
    let batch_dir = root.batch_dir(cvg_set, 0);
    let data_dir = batch_dir.join("biomass-data");
    fs::create_dir_all(&data_dir).expect("batch dir");
    let mut ledger = String::new();
    for (trial, config) in configs.iter().enumerate() {
        ledger.push_str(&encode(config));
        ledger.push('\n');
        let name = if trial == 0 {
            "ATN.h5".to_string()
        } else {
            format!("ATN_{trial}.h5")
        };
        fs::write(data_dir.join(name), format!("seq {sequence} trial {trial}")).expect("trajectory");
    }
    fs::write(batch_dir.join("node-configs.txt"), ledger).expect("ledger");

    let sequence_dir = root.sequence_dir(sequence);
    fs::create_dir_all(&sequence_dir).expect("sequence dir");
    SequenceRecord {
        food_web: "5-14-31-40".into(),
        initial_set: cvg_set,
        initial_batch: 0,
        sustaining_set: cvg_set,
        sustaining_batch: 0,
        cvg_set,
        cvg_batch: 0,
    }
    .write_to(&sequence_dir)
    .expect("record");
}

#[test]
fn identical_survivors_share_one_group() {
    let dir = tempdir().expect("tempdir");
    let root = DataRoot::new(dir.path().join("data"));
    write_sequence(&root, 0, 2, &[config(&[31, 5, 14], 1000.0)]);
    write_sequence(&root, 1, 5, &[config(&[5, 14, 31], 2000.0), config(&[5, 14], 50.0)]);
    fs::create_dir_all(root.sequence_dir(2)).expect("incomplete sequence");

    let out = dir.path().join("compact");
    let mut compactor = Compactor::new(&root, RecordingRenderer::default());
    let report = compactor.compact(&[0, 1, 2, 7], &out).expect("compact");

    assert_eq!(report.trials_by_food_web["5-14-31"], 2);
    assert_eq!(report.trials_by_food_web["5-14"], 1);
    assert_eq!(report.trials_by_size[&3], 2);
    assert_eq!(report.trials_by_size[&2], 1);
    assert_eq!(report.distinct_food_webs, 2);
    assert_eq!(report.total_trials, 3);
    assert_eq!(report.skipped_sequences, vec![2, 7]);
    assert_eq!(report.reference_records, 0);

    let group = out.join("3-species").join("5-14-31");
    let ledger = read_ledger(&group.join("node-configs.txt")).expect("group ledger");
    assert_eq!(
        ledger,
        vec![encode(&config(&[31, 5, 14], 1000.0)), encode(&config(&[5, 14, 31], 2000.0))]
    );

    let first = fs::read(group.join("biomass-data/ATN.h5")).expect("slot 0");
    let second = fs::read(group.join("biomass-data/ATN_1.h5")).expect("slot 1");
    assert_eq!(first, fs::read(root.batch_dir(2, 0).join("biomass-data/ATN.h5")).expect("src"));
    assert_eq!(second, b"seq 1 trial 0");

    #[cfg(unix)]
    {
        use std::os::unix::fs::MetadataExt;
        let meta = fs::metadata(group.join("biomass-data/ATN_1.h5")).expect("metadata");
        assert_eq!(meta.nlink(), 2, "slot must share storage with its source");
    }

    // The second trial of sequence 1 is index 0 of its own group.
    let pair = out.join("2-species").join("5-14");
    assert_eq!(fs::read(pair.join("biomass-data/ATN.h5")).expect("pair slot"), b"seq 1 trial 1");

    let web: SubWeb = serde_json::from_slice(
        &fs::read(group.join("foodweb.5-14-31.json")).expect("export"),
    )
    .expect("json");
    assert_eq!(web.nodes.len(), 3);
    assert!(web.links.is_empty());

    let renderer = compactor.renderer();
    assert_eq!(renderer.webs.len(), 2);
    assert_eq!(renderer.trajectories[1].0, "5-14-31 #1");
    assert_eq!(renderer.trajectories[1].1, group.join("biomass-plots/ATN_1.png"));

    let stored: CompactionReport =
        serde_json::from_slice(&fs::read(out.join("compaction-report.json")).expect("report"))
            .expect("json");
    assert_eq!(stored, report);
}

#[test]
fn existing_output_is_refused() {
    let dir = tempdir().expect("tempdir");
    let root = DataRoot::new(dir.path().join("data"));
    let out = dir.path().join("compact");
    fs::create_dir(&out).expect("mkdir");
    fs::write(out.join("keep.txt"), b"keep").expect("write");

    let err = Compactor::new(&root, LogRenderer)
        .compact(&[0], &out)
        .expect_err("output exists");
    assert!(matches!(err, AtnError::AlreadyExists(_)));
    assert_eq!(fs::read(out.join("keep.txt")).expect("untouched"), b"keep");
}

#[test]
fn graph_export_writes_induced_subweb() {
    let dir = tempdir().expect("tempdir");
    let root = DataRoot::new(dir.path().join("data"));
    write_sequence(&root, 0, 0, &[config(&[5, 14, 31], 1000.0)]);

    let graph = FoodWebGraph::from_readers(
        "species_id,name\n5,Grass\n14,Gazelle\n31,Lion\n".as_bytes(),
        "species_id,prey_id\n14,5\n31,14\n".as_bytes(),
    )
    .expect("graph");
    let out = dir.path().join("compact");
    let report = Compactor::new(&root, LogRenderer)
        .with_graph(&graph)
        .compact(&[0], &out)
        .expect("compact");
    assert_eq!(report.reference_records, 0);

    let group = out.join("3-species/5-14-31");
    assert!(group.join("biomass-data/ATN.h5").is_file());
    let web: SubWeb =
        serde_json::from_slice(&fs::read(group.join("foodweb.5-14-31.json")).expect("export"))
            .expect("json");
    assert_eq!(web.links.len(), 2);
    assert_eq!(web.nodes[0].name, "Grass");
}

#[test]
fn missing_trajectory_is_not_found() {
    let dir = tempdir().expect("tempdir");
    let root = DataRoot::new(dir.path().join("data"));
    write_sequence(
        &root,
        0,
        0,
        &[config(&[5, 14, 31], 1000.0), config(&[5, 14, 31], 900.0)],
    );
    let missing = root.batch_dir(0, 0).join("biomass-data/ATN_1.h5");
    fs::remove_file(&missing).expect("remove");

    let err = Compactor::new(&root, LogRenderer)
        .compact(&[0], &dir.path().join("compact"))
        .expect_err("ledger line without trajectory");
    assert!(err.is_not_found(), "{err:?}");
    assert_eq!(err.info().code, "trajectory-link");
    assert_eq!(err.info().context["path"], missing.display().to_string());
}

#[test]
fn occupied_slot_falls_back_to_reference_record() {
    let dir = tempdir().expect("tempdir");
    let source = dir.path().join("ATN.h5");
    let slot = dir.path().join("slot.h5");
    fs::write(&source, b"trajectory").expect("source");
    fs::write(&slot, b"stale").expect("slot");

    let link = link_trajectory(&source, &slot, 4).expect("fallback");
    assert_eq!(link, SlotLink::Record);
    let reference: TrajectoryRef =
        serde_json::from_slice(&fs::read(reference_path(&slot)).expect("reference record"))
            .expect("json");
    assert_eq!(reference.index, 4);
    assert_eq!(reference.source, source);
}
