use fst::MapBuilder;

/// Build an FST map from entries sorted by key bytes.
///
/// Duplicate keys must already be merged; `fst::MapBuilder` requires strictly
/// increasing keys in lexicographic (byte) order.
pub fn build_fst_map(entries: &[(String, u64)]) -> Vec<u8> {
    let mut builder = MapBuilder::memory();
    for (word, frequency) in entries {
        // Input is pre-sorted and de-duplicated, so insertion cannot fail.
        builder
            .insert(word, *frequency)
            .expect("entries must be sorted");
    }
    builder.into_inner().expect("FST build should succeed")
}
