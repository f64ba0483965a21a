use std::fs;

use atn_core::AtnError;
use atn_store::{
    ArtifactKind, ArtifactRepository, DataRoot, Descriptor, DirScanRepository, Scope,
    SequenceRecord,
};
use serde_json::json;
use tempfile::tempdir;

fn descriptor() -> Descriptor {
    Descriptor::new("test", json!({"set": 1})).expect("descriptor")
}

#[test]
fn empty_root_allocates_zero_then_one() {
    let dir = tempdir().expect("tempdir");
    let root = DataRoot::new(dir.path());
    let repo = DirScanRepository;

    assert_eq!(repo.allocate_next(&root.sets()).expect("allocate"), 0);
    assert!(!root.sets().root.exists(), "allocation must not create anything");

    let handle = repo.create(&root.sets(), 0, &descriptor()).expect("create");
    assert_eq!(handle.path, root.set_dir(0));
    assert!(handle.path.join("descriptor.json").is_file());
    assert_eq!(repo.allocate_next(&root.sets()).expect("allocate"), 1);
}

#[test]
fn descriptor_is_renamed_into_place() {
    let dir = tempdir().expect("tempdir");
    let root = DataRoot::new(dir.path());
    let handle = DirScanRepository
        .create(&root.sets(), 0, &descriptor())
        .expect("create");

    let names: Vec<String> = fs::read_dir(&handle.path)
        .expect("artifact dir")
        .map(|entry| entry.expect("entry").file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["descriptor.json".to_string()]);
    let stored = Descriptor::read_from(&handle.path).expect("read descriptor");
    assert_eq!(stored.generator, "test");
}

#[test]
fn allocation_skips_gaps_and_foreign_entries() {
    let dir = tempdir().expect("tempdir");
    let scope = Scope::new(dir.path(), ArtifactKind::Batch);
    for name in ["batch-0", "batch-3", "batch-x", "set-9", "batch-"] {
        fs::create_dir(dir.path().join(name)).expect("mkdir");
    }
    fs::write(dir.path().join("batch-20"), b"a file, not a batch").expect("file");

    let repo = DirScanRepository;
    assert_eq!(repo.existing_ids(&scope).expect("ids"), vec![0, 3]);
    assert_eq!(repo.allocate_next(&scope).expect("allocate"), 4);

    let handle = repo.create_next(&scope, &descriptor()).expect("create next");
    assert_eq!(handle.id, 4);
    assert_eq!(repo.allocate_next(&scope).expect("allocate"), 5);
}

#[test]
fn create_refuses_existing_artifacts() {
    let dir = tempdir().expect("tempdir");
    let root = DataRoot::new(dir.path());
    let repo = DirScanRepository;
    repo.create(&root.sequences(), 2, &descriptor()).expect("create");

    let err = repo
        .create(&root.sequences(), 2, &descriptor())
        .expect_err("duplicate");
    assert!(matches!(err, AtnError::AlreadyExists(_)));
}

#[test]
fn locate_distinguishes_missing_from_present() {
    let dir = tempdir().expect("tempdir");
    let root = DataRoot::new(dir.path());
    let repo = DirScanRepository;

    let err = repo.locate(&root.sets(), 7).expect_err("missing");
    assert!(err.is_not_found());

    repo.create(&root.sets(), 7, &descriptor()).expect("create");
    let handle = repo.locate(&root.sets(), 7).expect("locate");
    assert_eq!(handle.kind, ArtifactKind::Set);
    assert_eq!(handle.id, 7);

    let batch_err = repo.locate(&root.batches(7), 0).expect_err("no batch");
    assert!(batch_err.is_not_found());

    let stored = Descriptor::read_from(&handle.path).expect("read descriptor");
    assert_eq!(stored, descriptor_with_time(&stored));
}

fn descriptor_with_time(stored: &Descriptor) -> Descriptor {
    let mut expected = descriptor();
    expected.created_at = stored.created_at.clone();
    expected
}

#[test]
fn sequence_record_round_trips_and_reports_absence() {
    let dir = tempdir().expect("tempdir");
    let root = DataRoot::new(dir.path());
    let repo = DirScanRepository;
    let handle = repo
        .create_next(&root.sequences(), &descriptor())
        .expect("sequence");

    assert_eq!(SequenceRecord::read_from(&handle.path).expect("read"), None);

    let record = SequenceRecord {
        food_web: "5-14-31".to_string(),
        initial_set: 0,
        initial_batch: 0,
        sustaining_set: 1,
        sustaining_batch: 0,
        cvg_set: 2,
        cvg_batch: 0,
    };
    record.write_to(&handle.path).expect("write");
    assert_eq!(
        SequenceRecord::read_from(&handle.path).expect("read"),
        Some(record)
    );

    fs::write(handle.path.join("sequence-info.json"), b"{ not json").expect("corrupt");
    let err = SequenceRecord::read_from(&handle.path).expect_err("corrupt");
    assert!(matches!(err, AtnError::Serde(_)));
}
