// tests/extract_e2e.rs
//
// Directory in, table out, table back in. No network, no fixtures on disk.
//
use std::fs;
use std::path::Path;

use franchise_scrape::config::{AnalyzeOptions, ExtractOptions, TableFormat};
use franchise_scrape::progress::NullProgress;
use franchise_scrape::runner::{run_analyze, run_extract};
use franchise_scrape::store::read_table;

fn disclosure(year_rows: &[[&str; 7]], total_row: Option<[&str; 3]>) -> String {
    let mut doc = String::from("<html><body><h1>Ⅰ. 일반 현황</h1><p>2019 1 1 1 1 1 1</p>");
    doc.push_str("<h1>Ⅱ. 가맹사업 현황</h1><table>");
    for r in year_rows {
        doc.push_str("<tr>");
        for c in r {
            doc.push_str(&format!("<td>{c}</td>"));
        }
        doc.push_str("</tr>\n");
    }
    doc.push_str("</table><table>");
    if let Some(t) = total_row {
        doc.push_str(&format!(
            "<tr><td>전체</td><td>{}</td><td>{}</td><td>{}</td></tr>",
            t[0], t[1], t[2]
        ));
    }
    doc.push_str("</table><h1>Ⅲ. 부담금</h1><p>2024 9 9 9 9 9 9</p></body></html>");
    doc
}

fn populate(dir: &Path) {
    fs::write(
        dir.join("정보공개서_(주)본아이에프_본죽_2024.html"),
        disclosure(
            &[
                ["2022", "1,400", "150", "40", "10", "5", "1,500"],
                ["2023", "1,500", "180", "35", "12", "8", "1,633"],
            ],
            Some(["1,633", "412,350", "13,500"]),
        ),
    )
    .unwrap();
    fs::write(
        dir.join("고래국밥1980_고래드림_2024.html"),
        disclosure(&[["2023", "30", "12", "-", "1", "0", "41"]], Some(["41", "650,000", "-"])),
    )
    .unwrap();
    // Nothing recognizable: must not reach the table.
    fs::write(dir.join("빈문서_법인_2024.html"), "<html><p>준비중</p></html>").unwrap();
    // Year-shaped count in a small system: kept by extraction, dropped by analysis.
    fs::write(
        dir.join("소형_법인_2024.html"),
        disclosure(&[["2023", "10", "2023", "0", "0", "0", "12"]], None),
    )
    .unwrap();
    // Not a document.
    fs::write(dir.join("notes.txt"), "2023 1 2 3 4 5 6").unwrap();
}

fn extract_to(input: &Path, out: &Path) -> usize {
    let mut opts = ExtractOptions::default();
    opts.set_out_path(out);
    let summary = run_extract(input, &opts, Some(&mut NullProgress)).unwrap();
    assert_eq!(summary.documents, 4);
    summary.kept
}

#[test]
fn extracts_expected_rows() {
    let docs = tempfile::tempdir().unwrap();
    populate(docs.path());
    let out = docs.path().join("result").join("franchise.csv");

    assert_eq!(extract_to(docs.path(), &out), 3);

    let text = fs::read_to_string(&out).unwrap();
    // Rows follow file-name order.
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(
        lines,
        vec![
            "brand,year,total_stores,new_open,terminate,cancel,transfer,avg_sales,area_sales",
            "고래국밥1980,2023,41,12,0,1,0,650000,0",
            "소형,2023,12,2023,0,0,0,0,0",
            "본죽,2023,1633,180,35,12,8,412350,13500",
        ]
    );
}

#[test]
fn rerun_is_byte_identical() {
    let docs = tempfile::tempdir().unwrap();
    populate(docs.path());
    let first = docs.path().join("first.csv");
    let second = docs.path().join("second.csv");

    extract_to(docs.path(), &first);
    extract_to(docs.path(), &second);

    assert_eq!(fs::read(&first).unwrap(), fs::read(&second).unwrap());
}

#[test]
fn analysis_drops_year_shaped_counts() {
    let docs = tempfile::tempdir().unwrap();
    populate(docs.path());
    let out = docs.path().join("franchise.tsv");

    let mut opts = ExtractOptions::default();
    opts.format = TableFormat::Tsv;
    opts.set_out_path(&out);
    run_extract(docs.path(), &opts, None).unwrap();
    assert_eq!(read_table(&out, TableFormat::Tsv).unwrap().len(), 3);

    let analyze = AnalyzeOptions {
        format: TableFormat::Tsv,
        ..AnalyzeOptions::default()
    };
    let analysis = run_analyze(&out, &analyze).unwrap();
    let brands: Vec<&str> = analysis.entries.iter().map(|e| e.brand.as_str()).collect();
    assert_eq!(brands, vec!["고래국밥1980", "본죽"]);
    assert_eq!(analysis.dropped.year_in_count, 1);

    let top = analysis.rankings(10);
    assert_eq!(top.by_net_growth[0].brand, "본죽");
    assert_eq!(top.by_net_growth[0].net_growth, 133);
}

#[test]
fn empty_directory_still_writes_a_header() {
    let docs = tempfile::tempdir().unwrap();
    let out = docs.path().join("empty.csv");
    let mut opts = ExtractOptions::default();
    opts.set_out_path(&out);

    let summary = run_extract(docs.path(), &opts, None).unwrap();
    assert_eq!(summary.documents, 0);
    assert_eq!(summary.kept, 0);
    assert_eq!(fs::read_to_string(&out).unwrap().lines().count(), 1);
}

#[test]
fn oversized_count_survives_the_round_trip() {
    let docs = tempfile::tempdir().unwrap();
    fs::write(
        docs.path().join("big_법인_2024.html"),
        disclosure(
            &[["2023", "1", "5", "0", "0", "0", "10,000,000,000,000,000,000"]],
            None,
        ),
    )
    .unwrap();
    let out = docs.path().join("big.csv");
    let mut opts = ExtractOptions::default();
    opts.set_out_path(&out);
    run_extract(docs.path(), &opts, None).unwrap();

    let text = fs::read_to_string(&out).unwrap();
    assert_eq!(text.lines().nth(1), Some("big,2023,9223372036854775807,5,0,0,0,0,0"));

    let analysis = run_analyze(&out, &AnalyzeOptions::default()).unwrap();
    assert_eq!(analysis.dropped.malformed, 0);
    assert_eq!(analysis.entries.len(), 1);
    assert_eq!(analysis.entries[0].total_stores, i64::MAX);
    assert_eq!(analysis.entries[0].net_growth, 5);
}
