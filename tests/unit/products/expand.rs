use super::*;

fn beauty(pattern: &str) -> Vec<RenderProduct> {
    vec![RenderProduct::new("beauty", pattern)]
}

#[test]
fn expands_beauty_sequence() {
    let out = expand_expected_files(
        &beauty("shot_010/render_####"),
        FrameIndex(1001),
        FrameIndex(1003),
        1,
        "exr",
    );
    assert_eq!(
        out.get("beauty").unwrap(),
        [
            "shot_010/render_1001.exr",
            "shot_010/render_1002.exr",
            "shot_010/render_1003.exr",
        ]
    );
}

#[test]
fn step_does_not_need_to_divide_span() {
    let out = expand_expected_files(&beauty("f_#"), FrameIndex(1), FrameIndex(10), 3, "png");
    assert_eq!(
        out.get("beauty").unwrap(),
        ["f_0001.png", "f_0004.png", "f_0007.png", "f_0010.png"]
    );
}

#[test]
fn each_product_gets_its_own_list() {
    let products = vec![
        RenderProduct::new("beauty", "out/beauty_####"),
        RenderProduct::new("Z", "out\\aov\\Z_####"),
    ];
    let out = expand_expected_files(&products, FrameIndex(1), FrameIndex(2), 1, "exr");
    assert_eq!(out.len(), 2);
    assert_eq!(
        out.get("beauty").unwrap(),
        ["out/beauty_0001.exr", "out/beauty_0002.exr"]
    );
    assert_eq!(
        out.get("Z").unwrap(),
        ["out/aov/Z_0001.exr", "out/aov/Z_0002.exr"]
    );
    assert_eq!(out.file_count(), 4);
}

#[test]
fn inverted_range_yields_empty_lists() {
    let out = expand_expected_files(&beauty("r_####"), FrameIndex(10), FrameIndex(1), 1, "exr");
    assert_eq!(out.get("beauty").unwrap(), Vec::<String>::new().as_slice());
}

#[test]
fn pattern_without_placeholder_repeats_path() {
    let out = expand_expected_files(&beauty("still"), FrameIndex(1), FrameIndex(3), 1, "exr");
    assert_eq!(
        out.get("beauty").unwrap(),
        ["still.exr", "still.exr", "still.exr"]
    );
}

#[test]
fn empty_products_yield_empty_mapping() {
    let out = expand_expected_files(&[], FrameIndex(1), FrameIndex(3), 1, "exr");
    assert!(out.is_empty());
}

#[test]
fn product_deserializes_from_pair_and_object() {
    let pair: RenderProduct = serde_json::from_str(r#"["beauty", "out/b_####"]"#).unwrap();
    let obj: RenderProduct =
        serde_json::from_str(r#"{"name": "beauty", "pattern": "out/b_####"}"#).unwrap();
    assert_eq!(pair, obj);
    assert_eq!(
        serde_json::to_value(&pair).unwrap(),
        serde_json::json!({"name": "beauty", "pattern": "out/b_####"})
    );
}

fn files(name: &str, list: &[&str]) -> ExpectedFiles {
    let mut out = ExpectedFiles::new();
    out.insert(name, list.iter().map(|s| s.to_string()).collect());
    out
}

#[test]
fn merge_auxiliary_wins_on_collision() {
    let mut primary = files("beauty", &["p.exr"]);
    primary.insert("alpha", vec!["a.exr".to_string()]);
    let auxiliary = files("beauty", &["aux.exr"]);

    let merged = merge_expected_files(primary, auxiliary, MergePolicy::AuxiliaryWins).unwrap();
    assert_eq!(merged.get("beauty").unwrap(), ["aux.exr"]);
    assert_eq!(merged.get("alpha").unwrap(), ["a.exr"]);
    assert_eq!(merged.names().collect::<Vec<_>>(), vec!["alpha", "beauty"]);
}

#[test]
fn merge_reject_duplicates_fails_on_collision() {
    let err = merge_expected_files(
        files("beauty", &["p.exr"]),
        files("beauty", &["aux.exr"]),
        MergePolicy::RejectDuplicates,
    )
    .unwrap_err();
    assert!(matches!(err, CollectError::DuplicateProduct { ref name } if name == "beauty"));
}

#[test]
fn merge_reject_duplicates_allows_disjoint_names() {
    let merged = merge_expected_files(
        files("beauty", &["p.exr"]),
        files("Z", &["z.exr"]),
        MergePolicy::RejectDuplicates,
    )
    .unwrap();
    assert_eq!(merged.len(), 2);
}
