//! Rule-table evaluation against a normalized table

use settle_core::{utils::nan_median, Error, NormalizedTable, Result};
use tracing::debug;

use crate::rules::{rules_for, Rule, Select};
use crate::types::{Extraction, MetricFamily, Provenance, UnitRescale};

/// RAM medians above this imply bytes
const RAM_BYTES_MEDIAN: f64 = 1e9;

/// RAM medians above this (and below the bytes bound) imply KiB
const RAM_KIB_MEDIAN: f64 = 1e6;

/// Disk I/O medians above this imply bytes/s
const DISK_IO_BYTES_MEDIAN: f64 = 1e6;

/// Extract the one series representing `family` from a normalized table
///
/// Evaluates the family's rule table in priority order, first match wins.
/// Fails with [`Error::NoUsableColumn`] when no rule (including the
/// positional fallbacks) applies.
pub fn extract(table: &NormalizedTable, family: MetricFamily) -> Result<Extraction> {
    for rule in rules_for(family) {
        if let Some((values, provenance)) = apply_rule(table, rule) {
            if let Provenance::Positional { column, index } = &provenance {
                debug!(
                    family = family.name(),
                    column = %column,
                    index = *index,
                    "no keyword matched, positional fallback used"
                );
            }
            let (values, rescale) = rescale_units(family, values);
            return Ok(Extraction {
                family,
                values,
                provenance,
                rescale,
            });
        }
    }

    Err(Error::NoUsableColumn {
        family: family.name().to_string(),
        columns: table
            .column_names()
            .into_iter()
            .map(str::to_string)
            .collect(),
    })
}

fn apply_rule(table: &NormalizedTable, rule: &Rule) -> Option<(Vec<f64>, Provenance)> {
    let columns = table.columns();
    match rule.select {
        Select::Keyword(keywords) => {
            let (idx, keyword) = find_keyword(table, keywords)?;
            let (name, values) = &columns[idx];
            let transformed = values.iter().map(|&v| rule.transform.apply(v)).collect();
            Some((
                transformed,
                Provenance::Keyword {
                    column: name.clone(),
                    keyword,
                },
            ))
        }
        Select::KeywordSum(keywords) => {
            let matched: Vec<usize> = (0..columns.len())
                .filter(|&i| {
                    let lower = columns[i].0.to_lowercase();
                    keywords.iter().any(|kw| lower.contains(kw))
                })
                .collect();
            if matched.is_empty() {
                return None;
            }
            let values = (0..table.n_rows())
                .map(|row| {
                    let mut sum = 0.0;
                    let mut any = false;
                    for &i in &matched {
                        let v = columns[i].1[row];
                        if v.is_finite() {
                            sum += v;
                            any = true;
                        }
                    }
                    if any {
                        rule.transform.apply(sum)
                    } else {
                        f64::NAN
                    }
                })
                .collect();
            Some((
                values,
                Provenance::Derived {
                    columns: matched.iter().map(|&i| columns[i].0.clone()).collect(),
                    rule: "state sum",
                },
            ))
        }
        Select::KeywordPair(first, second) => {
            let (a, _) = find_keyword(table, &[first])?;
            let (b, _) = find_keyword(table, &[second])?;
            if a == b {
                return None;
            }
            let values = columns[a]
                .1
                .iter()
                .zip(&columns[b].1)
                .map(|(&x, &y)| rule.transform.apply(x.abs() + y.abs()))
                .collect();
            Some((
                values,
                Provenance::Derived {
                    columns: vec![columns[a].0.clone(), columns[b].0.clone()],
                    rule: "|read| + |write|",
                },
            ))
        }
        Select::Position(index) => {
            let (name, values) = columns.get(index)?;
            let transformed = values.iter().map(|&v| rule.transform.apply(v)).collect();
            Some((
                transformed,
                Provenance::Positional {
                    column: name.clone(),
                    index,
                },
            ))
        }
    }
}

/// First column containing any keyword, keywords in priority order
fn find_keyword(
    table: &NormalizedTable,
    keywords: &[&'static str],
) -> Option<(usize, &'static str)> {
    for keyword in keywords {
        for (idx, (name, _)) in table.columns().iter().enumerate() {
            if name.to_lowercase().contains(keyword) {
                return Some((idx, keyword));
            }
        }
    }
    None
}

/// Magnitude heuristic converting RAM to MiB and disk I/O to KB/s
///
/// Best effort, not a guaranteed-correct unit detector.
fn rescale_units(family: MetricFamily, values: Vec<f64>) -> (Vec<f64>, Option<UnitRescale>) {
    let median = nan_median(&values);
    let rescale = match family {
        MetricFamily::Ram if median > RAM_BYTES_MEDIAN => Some(UnitRescale::BytesToMib),
        MetricFamily::Ram if median > RAM_KIB_MEDIAN => Some(UnitRescale::KibToMib),
        MetricFamily::DiskIo if median > DISK_IO_BYTES_MEDIAN => Some(UnitRescale::BytesToKb),
        _ => None,
    };
    match rescale {
        Some(conversion) => {
            debug!(
                family = family.name(),
                median,
                ?conversion,
                "unit rescale applied"
            );
            let divisor = conversion.divisor();
            (
                values.into_iter().map(|v| v / divisor).collect(),
                Some(conversion),
            )
        }
        None => (values, None),
    }
}
