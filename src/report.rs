// src/report.rs
use std::fmt::Write;

use crate::analyze::Rankings;
use crate::core::numeric::group_thousands;

/// The four ranked sections, in fixed order, as printed by `analyze`.
/// Sales are in thousand won.
pub fn render(r: &Rankings<'_>) -> String {
    let n = r.top_n;
    let mut out = String::new();

    let _ = writeln!(out, "=== 신규 개점 Top {n} ===");
    for e in &r.by_new_open {
        let _ = writeln!(out, "{}: {}개 (전체 {})", e.brand, e.new_open, e.total_stores);
    }

    let _ = writeln!(out, "\n=== 순증가(성장) Top {n} ===");
    for e in &r.by_net_growth {
        let _ = writeln!(
            out,
            "{}: {:+} (신규 {}, 폐점 {})",
            e.brand, e.net_growth, e.new_open, e.closures()
        );
    }

    let _ = writeln!(out, "\n=== 평균 매출 Top {n} (단위:천원) ===");
    for e in &r.by_avg_sales {
        let sales = group_thousands(e.avg_sales);
        let _ = writeln!(out, "{}: {} (가맹점 {})", e.brand, sales, e.total_stores);
    }

    let _ = writeln!(out, "\n=== 폐점(종료+해지) Top {n} ===");
    for e in &r.by_closures {
        let _ = writeln!(out, "{}: {} (전체 {})", e.brand, e.closures(), e.total_stores);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analyze::analyze;
    use crate::config::FilterThresholds;
    use crate::store::TableRow;

    fn row(brand: &str, total: &str, new: &str, term: &str, avg: &str) -> TableRow {
        TableRow {
            brand: brand.into(),
            year: "2023".into(),
            total_stores: total.into(),
            new_open: new.into(),
            terminate: term.into(),
            cancel: "0".into(),
            transfer: "0".into(),
            avg_sales: avg.into(),
            area_sales: "0".into(),
        }
    }

    #[test]
    fn renders_all_sections_in_order() {
        let rows = vec![
            row("본죽", "1500", "120", "30", "412350"),
            row("고래국밥", "40", "2", "9", "1234567"),
        ];
        let a = analyze(&rows, &FilterThresholds::default());
        let text = render(&a.rankings(10));

        let expected = "\
=== 신규 개점 Top 10 ===
본죽: 120개 (전체 1500)
고래국밥: 2개 (전체 40)

=== 순증가(성장) Top 10 ===
본죽: +90 (신규 120, 폐점 30)
고래국밥: -7 (신규 2, 폐점 9)

=== 평균 매출 Top 10 (단위:천원) ===
고래국밥: 1,234,567 (가맹점 40)
본죽: 412,350 (가맹점 1500)

=== 폐점(종료+해지) Top 10 ===
본죽: 30 (전체 1500)
고래국밥: 9 (전체 40)
";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_table_still_prints_headings() {
        let a = analyze(&[], &FilterThresholds::default());
        let text = render(&a.rankings(5));
        assert_eq!(text.matches("Top 5").count(), 4);
    }
}
