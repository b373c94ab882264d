use super::*;
use primdb_core::storage::sequence::Sequences;

#[test]
fn record_keeps_the_maximum() {
    let mut seq = Sequences::default();
    assert_eq!(seq.last("t"), 0);
    seq.record("t", 3);
    seq.record("t", 2);
    assert_eq!(seq.last("t"), 3);
    seq.forget("t");
    assert_eq!(seq.last("t"), 0);
}

#[test]
fn save_and_load() {
    let mut store = MemStore::new();
    let mut seq = Sequences::default();
    seq.record("a", 5);
    seq.record("b", 1);
    seq.save(&mut store).unwrap();
    assert_eq!(Sequences::load(&store), seq);

    store.put(BlobKey::Sequences, "not json");
    assert_eq!(Sequences::load(&store), Sequences::default());
}
