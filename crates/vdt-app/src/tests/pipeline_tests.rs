use std::fs;
use std::path::Path;

use vdt_config::Config;
use vdt_lang_vietnamese::VietnameseProcessor;
use vdt_types::{CucDetail, CucMeaning, CucScore, ElementGroups, SyllableEntry, Table};
use vdt_workbook::{Cell, Grid, MemoryWorkbook, WorkbookError};

use crate::controller::Pipeline;
use crate::io::{
    DETAILS_FILE, ELEMENTS_FILE, JsonStyle, MEANINGS_FILE, OutputError, SCORES_FILE,
    SYLLABLES_FILE, read_table, write_table,
};
use crate::status::RunSummary;

fn config_for(out: &Path) -> Config {
    let mut config = Config::default();
    config.paths.output_dir = out.to_path_buf();
    config
}

fn workbook() -> MemoryWorkbook {
    let mut syllables = Grid::new("Tên thường Dùng");
    syllables
        .row(6, 2, vec![1.0.into(), "Nguyên".into(), 6.0.into(), "Mộc".into()])
        .row(7, 2, vec![2.0.into(), "Nguyễn".into(), 7.0.into(), "Mộc".into()])
        .row(8, 2, vec![3.0.into(), "Thu".into(), 3.0.into(), "Kim".into()])
        .row(9, 2, vec![Cell::Empty, Cell::Empty, Cell::Empty, Cell::Empty])
        .row(10, 2, vec![4.0.into(), "Đức".into(), 8.0.into(), "Hỏa".into()]);

    let mut meanings = Grid::new("Ý Nghĩa Tứ Cục");
    meanings
        .row(
            7,
            2,
            vec![
                1.0.into(),
                "Thái Cực".into(),
                "Cát".into(),
                "".into(),
                "Càn".into(),
                "Đại cát".into(),
            ],
        )
        .row(
            8,
            2,
            vec![
                2.0.into(),
                "Lưỡng Nghi".into(),
                "Hung".into(),
                "".into(),
                "".into(),
                "Hung ác, tan tác".into(),
            ],
        )
        .row(9, 2, vec![3.0.into(), "Tam Tài".into(), "Trong hung có cát".into()])
        .row(10, 2, vec![4.0.into(), "Tứ Tượng".into(), "Hung".into()]);

    let mut scores = Grid::new("Sheet2");
    scores.set(20, 14, 1.0).set(20, 15, "Thái Cực").set(20, 17, 3.0);

    let mut dt = Grid::new("DT");
    dt.set(6, 22, "MỘC").set(6, 23, "Lâm, Tùng");
    dt.set(10, 22, "THỦY").set(10, 23, "Giang, Hà");

    let mut details = Grid::new("81 Cục Việt Danh");
    details
        .row(3, 2, vec!["STT".into()])
        .row(4, 2, vec![1.0.into(), "Thái Cực".into(), "Khởi nguyên".into()]);

    let mut book = MemoryWorkbook::new();
    book.add(syllables).add(meanings).add(scores).add(dt).add(details);
    book
}

#[test]
fn test_extract_writes_five_tables() {
    let dir = tempfile::tempdir().unwrap();
    let out = dir.path().join("data");
    let config = config_for(&out);
    let processor = VietnameseProcessor::new();
    let mut summary = RunSummary::new();

    Pipeline::new(&config, &processor)
        .extract(&mut workbook(), &mut summary)
        .unwrap();

    for file in [SYLLABLES_FILE, MEANINGS_FILE, SCORES_FILE, ELEMENTS_FILE, DETAILS_FILE] {
        assert!(out.join(file).exists(), "{file} missing");
    }
    assert_eq!(summary.tables.len(), 5);

    let syllables: Table<SyllableEntry> = read_table(&out.join(SYLLABLES_FILE)).unwrap();
    assert_eq!(
        syllables.keys().collect::<Vec<_>>(),
        vec!["NGUYÊN", "NGUYEN", "NGUYỄN", "THU", "ĐỨC", "DUC"]
    );
    // first writer keeps the folded slot
    assert_eq!(syllables.get("NGUYEN").map(|e| e.strokes), Some(6));
    assert_eq!(syllables.get("NGUYỄN").map(|e| e.strokes), Some(7));

    let raw_scores: Table<CucScore> = read_table(&out.join(SCORES_FILE)).unwrap();
    assert_eq!(raw_scores.get("1").map(|s| s.score), Some(3));

    let groups: ElementGroups = read_table(&out.join(ELEMENTS_FILE)).unwrap();
    assert_eq!(groups.keys().collect::<Vec<_>>(), vec!["MỘC", "THỦY"]);

    let details: Table<CucDetail> = read_table(&out.join(DETAILS_FILE)).unwrap();
    assert_eq!(details.get("1").map(|d| d.alias.as_str()), Some("Khởi nguyên"));
}

#[test]
fn test_derive_scores_replaces_raw_scores() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let processor = VietnameseProcessor::new();
    let pipeline = Pipeline::new(&config, &processor);
    let mut summary = RunSummary::new();

    pipeline.extract(&mut workbook(), &mut summary).unwrap();
    pipeline.derive_scores(&mut summary).unwrap();

    let scores: Table<CucScore> = read_table(&dir.path().join(SCORES_FILE)).unwrap();
    let rows: Vec<_> = scores.iter().map(|(k, s)| (k, s.score)).collect();
    assert_eq!(rows, vec![("1", 10), ("2", 1), ("3", 6), ("4", 2)]);
    assert_eq!(scores.get("3").map(|s| s.name.as_str()), Some("Tam Tài"));

    // still five distinct tables
    assert_eq!(summary.tables.len(), 5);
}

#[test]
fn test_derive_scores_needs_meanings() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let processor = VietnameseProcessor::new();

    let err = Pipeline::new(&config, &processor)
        .derive_scores(&mut RunSummary::new())
        .unwrap_err();
    assert!(err.to_string().contains(MEANINGS_FILE));
    assert!(err.to_string().contains("run `extract` first"));
}

#[test]
fn test_derive_scores_from_sparse_meanings() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join(MEANINGS_FILE),
        r#"{"1": {"number": 1, "name": "Thái Cực", "luck": "cát"}}"#,
    )
    .unwrap();
    let config = config_for(dir.path());
    let processor = VietnameseProcessor::new();

    Pipeline::new(&config, &processor)
        .derive_scores(&mut RunSummary::new())
        .unwrap();

    let scores: Table<CucScore> = read_table(&dir.path().join(SCORES_FILE)).unwrap();
    let score = scores.get("1").unwrap();
    assert_eq!(score.name, "Thái Cực");
    assert_eq!(score.score, 10);
}

#[test]
fn test_unparsable_meanings_reports_parse_error() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(MEANINGS_FILE), r#"{"1": {"number": "one"}}"#).unwrap();
    let config = config_for(dir.path());
    let processor = VietnameseProcessor::new();

    let err = Pipeline::new(&config, &processor)
        .derive_scores(&mut RunSummary::new())
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<OutputError>(),
        Some(OutputError::Decode { .. })
    ));

    let chain = format!("{err:#}");
    assert!(!chain.contains("run `extract` first"));
    // the serde message shows up once, from the source chain
    assert_eq!(chain.matches("invalid type").count(), 1);
}

#[test]
fn test_missing_sheet_aborts() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_for(dir.path());
    let processor = VietnameseProcessor::new();
    let mut book = MemoryWorkbook::new();
    book.add(Grid::new("Tên thường Dùng"));

    let err = Pipeline::new(&config, &processor)
        .extract(&mut book, &mut RunSummary::new())
        .unwrap_err();
    assert!(matches!(
        err.downcast_ref::<WorkbookError>(),
        Some(WorkbookError::MissingSheet(name)) if name == "Ý Nghĩa Tứ Cục"
    ));
    // the table extracted before the failure is already written
    assert!(dir.path().join(SYLLABLES_FILE).exists());
}

#[test]
fn test_written_json_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let mut meanings = Table::new();
    meanings.insert(
        "1",
        CucMeaning {
            number: 1,
            name: "Thái Cực".to_string(),
            luck: "Cát".to_string(),
            alias: String::new(),
            palace: "Càn".to_string(),
            meaning: "Đại cát".to_string(),
        },
    );

    for style in [JsonStyle::Pretty, JsonStyle::Compact] {
        let path = write_table(dir.path(), MEANINGS_FILE, &meanings, style).unwrap();
        let parsed: Table<CucMeaning> = read_table(&path).unwrap();
        assert_eq!(parsed, meanings);
    }
}

#[test]
fn test_pretty_output_keeps_vietnamese_text() {
    let dir = tempfile::tempdir().unwrap();
    let mut groups = ElementGroups::new();
    groups.insert("MỘC", "Lâm".to_string());

    let path = write_table(dir.path(), ELEMENTS_FILE, &groups, JsonStyle::Pretty).unwrap();
    let text = fs::read_to_string(path).unwrap();
    assert_eq!(text, "{\n  \"MỘC\": \"Lâm\"\n}");
}
