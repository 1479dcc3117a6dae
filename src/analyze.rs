// src/analyze.rs
//
// Second pass over the persisted table: drop rows that extraction obviously got
// wrong, derive growth/failure figures, rank.
//
// The filter only keeps or discards. It never repairs a value.

use std::cmp::Reverse;

use tracing::debug;

use crate::config::FilterThresholds;
use crate::store::TableRow;

/// A row that survived filtering, with its derived metrics.
#[derive(Clone, Debug, PartialEq)]
pub struct Entry {
    pub brand: String,
    pub year: String,
    pub total_stores: i64,
    pub new_open: i64,
    pub terminate: i64,
    pub cancel: i64,
    pub transfer: i64,
    pub avg_sales: i64,
    pub area_sales: i64,
    pub net_growth: i64,
    pub growth_rate: f64,
    pub failure_rate: f64,
}

impl Entry {
    /// Terminated plus cancelled contracts.
    #[inline]
    pub fn closures(&self) -> i64 {
        self.terminate.saturating_add(self.cancel)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rejection {
    /// A count column isn't an integer.
    Malformed,
    TooManyOpenings,
    TooManyClosures,
    /// A count equal to a recent calendar year in a small system: the year
    /// cell most likely slid into a count column during extraction.
    YearInCount,
    ImplausibleSales,
}

/// How many rows were dropped, per reason.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DropCounts {
    pub malformed: usize,
    pub too_many_openings: usize,
    pub too_many_closures: usize,
    pub year_in_count: usize,
    pub implausible_sales: usize,
}

impl DropCounts {
    fn record(&mut self, why: Rejection) {
        match why {
            Rejection::Malformed => self.malformed += 1,
            Rejection::TooManyOpenings => self.too_many_openings += 1,
            Rejection::TooManyClosures => self.too_many_closures += 1,
            Rejection::YearInCount => self.year_in_count += 1,
            Rejection::ImplausibleSales => self.implausible_sales += 1,
        }
    }

    pub fn total(&self) -> usize {
        self.malformed
            + self.too_many_openings
            + self.too_many_closures
            + self.year_in_count
            + self.implausible_sales
    }
}

fn int(cell: &str) -> Option<i64> {
    cell.trim().parse().ok()
}

/// Coerce, check, derive. Checks run in a fixed order and the first failing
/// one decides the rejection.
pub fn screen(row: &TableRow, t: &FilterThresholds) -> Result<Entry, Rejection> {
    let coerce = || -> Option<[i64; 7]> {
        Some([
            int(&row.total_stores)?,
            int(&row.new_open)?,
            int(&row.terminate)?,
            int(&row.cancel)?,
            int(&row.transfer)?,
            int(&row.avg_sales)?,
            int(&row.area_sales)?,
        ])
    };
    let [total_stores, new_open, terminate, cancel, transfer, avg_sales, area_sales] =
        coerce().ok_or(Rejection::Malformed)?;

    let closures = terminate.saturating_add(cancel);

    if new_open > t.max_new_open {
        return Err(Rejection::TooManyOpenings);
    }
    if closures > t.max_closures {
        return Err(Rejection::TooManyClosures);
    }
    let year_like = [new_open, terminate, cancel].into_iter().any(|n| t.looks_like_year(n));
    if year_like && total_stores < t.small_system_stores {
        return Err(Rejection::YearInCount);
    }
    if avg_sales > t.max_avg_sales {
        return Err(Rejection::ImplausibleSales);
    }

    let net_growth = new_open.saturating_sub(closures);
    let (growth_rate, failure_rate) = if total_stores > 0 {
        (net_growth as f64 / total_stores as f64, closures as f64 / total_stores as f64)
    } else {
        (0.0, 0.0)
    };

    Ok(Entry {
        brand: row.brand.clone(),
        year: row.year.clone(),
        total_stores,
        new_open,
        terminate,
        cancel,
        transfer,
        avg_sales,
        area_sales,
        net_growth,
        growth_rate,
        failure_rate,
    })
}

/// Surviving rows in table order, plus what was dropped.
#[derive(Clone, Debug, Default)]
pub struct Analysis {
    pub entries: Vec<Entry>,
    pub dropped: DropCounts,
}

pub fn analyze(rows: &[TableRow], t: &FilterThresholds) -> Analysis {
    let mut out = Analysis::default();
    for row in rows {
        match screen(row, t) {
            Ok(entry) => out.entries.push(entry),
            Err(why) => {
                debug!(brand = %row.brand, reason = ?why, "row dropped");
                out.dropped.record(why);
            }
        }
    }
    debug!(
        kept = out.entries.len(),
        malformed = out.dropped.malformed,
        openings = out.dropped.too_many_openings,
        closures = out.dropped.too_many_closures,
        year_in_count = out.dropped.year_in_count,
        sales = out.dropped.implausible_sales,
        "filtering done"
    );
    out
}

/// The four Top-N views, each sorted descending on its own key. Equal keys keep
/// table order.
#[derive(Debug)]
pub struct Rankings<'a> {
    pub by_new_open: Vec<&'a Entry>,
    pub by_net_growth: Vec<&'a Entry>,
    pub by_avg_sales: Vec<&'a Entry>,
    pub by_closures: Vec<&'a Entry>,
    pub top_n: usize,
}

fn top<'a>(entries: &'a [Entry], n: usize, key: impl Fn(&Entry) -> i64) -> Vec<&'a Entry> {
    let mut v: Vec<&Entry> = entries.iter().collect();
    v.sort_by_key(|e| Reverse(key(*e)));
    v.truncate(n);
    v
}

impl Analysis {
    pub fn rankings(&self, top_n: usize) -> Rankings<'_> {
        Rankings {
            by_new_open: top(&self.entries, top_n, |e| e.new_open),
            by_net_growth: top(&self.entries, top_n, |e| e.net_growth),
            by_avg_sales: top(&self.entries, top_n, |e| e.avg_sales),
            by_closures: top(&self.entries, top_n, Entry::closures),
            top_n,
        }
    }
}
