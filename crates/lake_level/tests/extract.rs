use chrono::NaiveDate;
use lake_level::{parse_detail, parse_summary, LevelError, Measurement};
use pretty_assertions::assert_eq;

fn day(d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(2023, 6, d).unwrap()
}

const OVERVIEW: &str = r#"
<html><body>
<h1>Niveau des lacs</h1>
<table class="table">
  <thead>
    <tr><th>Lac</th><th>Niveau maximal</th><th>1.6.2023</th><th>2.6.2023</th></tr>
  </thead>
  <tbody>
    <tr><td>La Gruyère*</td><td>750.0 msm</td><td>700.5 msm</td><td>701.0 msm</td></tr>
    <tr><td>Schiffenen*</td><td>532.0 msm</td><td>531.2 msm</td><td>531.4 msm</td></tr>
    <tr><td>Montsalvens</td><td>801.0 msm</td><td>en révision</td><td>797.4 msm</td></tr>
  </tbody>
</table>
<table><tr><td>* historique disponible</td></tr></table>
</body></html>
"#;

fn detail_page(dates: &[&str], mins: &[&str], maxs: &[&str]) -> String {
    let column = |cells: &[&str]| {
        let rows: String = cells
            .iter()
            .map(|cell| format!("<tr><td>{cell}</td></tr>"))
            .collect();
        format!("<table>{rows}</table>")
    };
    format!(
        "<html><body><table><tr><td>{}</td><td>{}</td><td>{}</td></tr></table></body></html>",
        column(dates),
        column(mins),
        column(maxs)
    )
}

#[test]
fn summary_yields_one_lake_per_row_with_two_measurements() {
    let summary = parse_summary(OVERVIEW).unwrap();
    assert_eq!(summary.dates, [day(1), day(2)]);
    assert_eq!(summary.lakes.len(), 3);
    for lake in &summary.lakes {
        assert_eq!(lake.measures.len(), 2, "{}", lake.name);
    }
}

#[test]
fn summary_row_becomes_single_point_measurements() {
    let summary = parse_summary(OVERVIEW).unwrap();
    let gruyere = &summary.lakes[0];
    assert_eq!(gruyere.name, "La Gruyère");
    assert_eq!(gruyere.capacity_level, 750.0);
    assert_eq!(gruyere.measures[&day(1)], Measurement::new(day(1), 700.5, 700.5));
    assert_eq!(gruyere.measures[&day(2)], Measurement::new(day(2), 701.0, 701.0));
    let keys: Vec<String> = gruyere.measures.values().map(Measurement::key).collect();
    assert_eq!(keys, ["2023-06-01", "2023-06-02"]);
}

#[test]
fn unreadable_summary_level_is_zero() {
    let summary = parse_summary(OVERVIEW).unwrap();
    let montsalvens = &summary.lakes[2];
    assert_eq!(montsalvens.measures[&day(1)].min, 0.0);
    assert_eq!(montsalvens.measures[&day(2)].max, 797.4);
}

#[test]
fn summary_without_table_is_a_structure_error() {
    let err = parse_summary("<html><body><p>maintenance</p></body></html>").unwrap_err();
    assert_eq!(err, LevelError::Structure("overview page has no table".into()));
}

#[test]
fn summary_with_bad_header_date_fails() {
    let html = OVERVIEW.replace("2.6.2023", "hier");
    match parse_summary(&html) {
        Err(LevelError::Date(err)) => assert_eq!(err.text, "hier"),
        other => panic!("expected date error, got {other:?}"),
    }
}

#[test]
fn summary_with_short_row_is_a_structure_error() {
    let html = OVERVIEW.replace("<td>797.4 msm</td>", "");
    assert!(matches!(parse_summary(&html), Err(LevelError::Structure(_))));
}

#[test]
fn detail_pairs_columns_by_position() {
    let html = detail_page(
        &["1.6.2023", "2.6.2023"],
        &["700.1 msm", "700.2 msm"],
        &["701.1 msm", "701.2 msm"],
    );
    let series = parse_detail(&html).unwrap();
    assert_eq!(
        series,
        vec![
            Measurement::new(day(1), 700.1, 701.1),
            Measurement::new(day(2), 700.2, 701.2),
        ]
    );
}

#[test]
fn detail_length_mismatch_is_a_structure_error() {
    let html = detail_page(&["1.6.2023", "2.6.2023"], &["700.1 msm"], &["701.1 msm", "701.2 msm"]);
    let err = parse_detail(&html).unwrap_err();
    assert_eq!(
        err,
        LevelError::Structure("array size mismatch: 2 dates, 1 minimums, 2 maximums".into())
    );
}

#[test]
fn detail_bad_date_aborts() {
    let html = detail_page(&["1.6.2023", "2/6/2023"], &["1.0 msm", "2.0 msm"], &["1.5 msm", "2.5 msm"]);
    assert!(matches!(parse_detail(&html), Err(LevelError::Date(_))));
}

#[test]
fn detail_bad_level_degrades_to_zero() {
    let html = detail_page(&["3.6.2023"], &["n/d"], &["701.3 msm"]);
    let series = parse_detail(&html).unwrap();
    assert_eq!(series, vec![Measurement::new(day(3), 0.0, 701.3)]);
}

#[test]
fn detail_series_overwrites_summary_days() {
    let mut lake = parse_summary(OVERVIEW).unwrap().lakes.remove(0);
    let html = detail_page(
        &["31.5.2023", "1.6.2023", "2.6.2023"],
        &["699.9 msm", "700.1 msm", "700.2 msm"],
        &["700.9 msm", "701.1 msm", "701.2 msm"],
    );
    lake.merge(parse_detail(&html).unwrap());

    assert_eq!(lake.measures.len(), 3);
    assert_eq!(lake.measures[&day(1)], Measurement::new(day(1), 700.1, 701.1));
    assert_eq!(lake.measures[&day(2)], Measurement::new(day(2), 700.2, 701.2));
    assert!(lake.measures.values().all(|m| m.min <= m.max));
}

#[test]
fn summary_with_two_digit_year_fails() {
    let html = OVERVIEW.replace("1.6.2023", "1.6.23");
    match parse_summary(&html) {
        Err(LevelError::Date(err)) => assert_eq!(err.text, "1.6.23"),
        other => panic!("expected date error, got {other:?}"),
    }
}

#[test]
fn detail_signed_year_aborts() {
    let html = detail_page(&["1.6.+2023"], &["700.1 msm"], &["701.1 msm"]);
    assert!(matches!(parse_detail(&html), Err(LevelError::Date(_))));
}
