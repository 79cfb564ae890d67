use exam_index_core::index::document::render_index_document;
use exam_index_core::IndexReport;
use std::path::PathBuf;

fn sample_report() -> IndexReport {
    IndexReport {
        output_path: PathBuf::from("exam-questions/index.json"),
        entries: vec!["q1.json".to_string(), "q2.json".to_string()],
    }
}

#[test]
fn document_is_two_space_indented_with_trailing_newline() {
    let names = vec!["a.json".to_string(), "b \"x\".json".to_string()];
    let bytes = render_index_document(&names).unwrap();
    assert_eq!(
        String::from_utf8(bytes).unwrap(),
        "[\n  \"a.json\",\n  \"b \\\"x\\\".json\"\n]\n"
    );
}

#[test]
fn summary_lines_report_count_then_entries() {
    let lines = sample_report().summary_lines();
    assert_eq!(
        lines,
        vec![
            "Generated exam-questions/index.json with 2 files:",
            "  - q1.json",
            "  - q2.json",
        ]
    );
}

#[test]
fn json_report_count_matches_entries() {
    let v: serde_json::Value =
        serde_json::from_str(&sample_report().to_json_pretty().unwrap()).unwrap();
    assert_eq!(v["output_path"], "exam-questions/index.json");
    assert_eq!(v["count"], 2);
    assert_eq!(v["entries"].as_array().unwrap().len(), 2);
}
