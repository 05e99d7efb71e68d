//! Positional extraction from the published lake tables.
//!
//! The pages carry no ids or classes worth relying on, so everything here is
//! addressed by table, row and column index. Nothing outside this module knows
//! those positions.
//!
//! Overview page: the first `<table>` has a header row whose 3rd and 4th cells
//! are the two most recent dates, and one body row per lake:
//! `name | capacity level | level on date 1 | level on date 2`.
//!
//! Detail page: the first `<table>` wraps three nested tables holding, in
//! order, the dates, the daily minimums and the daily maximums.

use std::sync::LazyLock;

use chrono::NaiveDate;
use lake_logging::lake_debug;
use scraper::{ElementRef, Html, Selector};

use crate::parse::{clean_lake_name, parse_date, try_parse_level};
use crate::{Lake, LevelError, Measurement};

static TABLE: LazyLock<Selector> = LazyLock::new(|| selector("table"));
static HEADER_CELLS: LazyLock<Selector> = LazyLock::new(|| selector("thead tr th"));
static BODY_ROWS: LazyLock<Selector> = LazyLock::new(|| selector("tbody tr"));
static CELLS: LazyLock<Selector> = LazyLock::new(|| selector("td"));

const FIRST_DATE_COLUMN: usize = 2;
const SECOND_DATE_COLUMN: usize = 3;
const SUMMARY_COLUMNS: usize = 4;

fn selector(css: &str) -> Selector {
    Selector::parse(css).expect("static selector is valid")
}

/// The overview table: its two header dates and one lake per body row.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub dates: [NaiveDate; 2],
    pub lakes: Vec<Lake>,
}

pub fn parse_summary(html: &str) -> Result<Summary, LevelError> {
    let document = Html::parse_document(html);
    let table = document
        .select(&TABLE)
        .next()
        .ok_or_else(|| LevelError::structure("overview page has no table"))?;

    let headers: Vec<String> = table.select(&HEADER_CELLS).map(cell_text).collect();
    let header_date = |column: usize| -> Result<NaiveDate, LevelError> {
        let text = headers.get(column).ok_or_else(|| {
            LevelError::structure(format!(
                "overview header has {} cells, expected a date in column {}",
                headers.len(),
                column + 1
            ))
        })?;
        Ok(parse_date(text)?)
    };
    let dates = [
        header_date(FIRST_DATE_COLUMN)?,
        header_date(SECOND_DATE_COLUMN)?,
    ];

    let mut lakes = Vec::new();
    for (index, row) in table.select(&BODY_ROWS).enumerate() {
        let cells: Vec<String> = row.select(&CELLS).map(cell_text).collect();
        if cells.len() < SUMMARY_COLUMNS {
            return Err(LevelError::structure(format!(
                "overview row {} has {} cells, expected {SUMMARY_COLUMNS}",
                index + 1,
                cells.len()
            )));
        }

        let mut lake = Lake::new(clean_lake_name(&cells[0]), level(&cells[1]));
        lake.record(Measurement::single(dates[0], level(&cells[FIRST_DATE_COLUMN])));
        lake.record(Measurement::single(dates[1], level(&cells[SECOND_DATE_COLUMN])));
        lakes.push(lake);
    }

    Ok(Summary { dates, lakes })
}

/// The full min/max series of a detail page, in page order.
pub fn parse_detail(html: &str) -> Result<Vec<Measurement>, LevelError> {
    let document = Html::parse_document(html);
    let outer = document
        .select(&TABLE)
        .next()
        .ok_or_else(|| LevelError::structure("detail page has no table"))?;

    let columns: Vec<Vec<String>> = outer
        .select(&TABLE)
        .take(3)
        .map(|table| table.select(&CELLS).map(cell_text).collect())
        .collect();
    let [dates, mins, maxs] = <[Vec<String>; 3]>::try_from(columns).map_err(|found| {
        LevelError::structure(format!(
            "detail page has {} nested tables, expected 3",
            found.len()
        ))
    })?;

    if dates.len() != mins.len() || dates.len() != maxs.len() {
        return Err(LevelError::structure(format!(
            "array size mismatch: {} dates, {} minimums, {} maximums",
            dates.len(),
            mins.len(),
            maxs.len()
        )));
    }

    dates
        .iter()
        .zip(mins.iter().zip(maxs.iter()))
        .map(|(date, (min, max))| -> Result<Measurement, LevelError> {
            Ok(Measurement::new(parse_date(date)?, level(min), level(max)))
        })
        .collect()
}

fn cell_text(cell: ElementRef<'_>) -> String {
    cell.text().collect::<String>().trim().to_string()
}

fn level(text: &str) -> f64 {
    let value = try_parse_level(text);
    if value.is_none() {
        lake_debug!("unreadable level {:?}, recording 0", text);
    }
    value.unwrap_or(0.0)
}
