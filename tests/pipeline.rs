//! End-to-end pipeline tests over synthetic netdata-shaped exports
//!
//! Each test plays one run of the benchmarking harness: CSV text for a few
//! metric families, epoch markers as a run log would provide them, and the
//! full normalize -> extract -> clip -> stats/convergence chain.

use approx::assert_relative_eq;
use settle_stats::{
    clip_default, extract, normalize_table, plateau_time, stable_time, window_stats,
    ClipOutcome, ConvergenceConfig, EventWindow, MetricFamily, NormalizeOptions, RawTable,
    TimeSeries,
};

const START: i64 = 1_700_000_000;
const SAMPLES: usize = 60;

/// CPU export: millisecond timestamps, an idle column, and state columns
fn cpu_csv() -> String {
    let mut csv = String::from("time,user,system,idle\n");
    for i in 0..SAMPLES {
        let busy: f64 = if i < 10 { 60.0 } else { 5.0 };
        csv.push_str(&format!(
            "{},{},{},{}\n",
            (START + i as i64) * 1000,
            busy * 0.7,
            busy * 0.3,
            100.0 - busy,
        ));
    }
    csv
}

/// RAM export: epoch-second timestamps, `used` in KiB
fn ram_csv() -> String {
    let mut csv = String::from("# exported by netdata\ntime,\"used\",free\n");
    for i in 0..SAMPLES {
        let used_mib: f64 = if i < 20 { 4000.0 } else { 1100.0 };
        csv.push_str(&format!(
            "{},{},{}\n",
            START + i as i64,
            used_mib * 1024.0,
            8192.0 * 1024.0 - used_mib * 1024.0,
        ));
    }
    csv
}

/// Network export: signed deltas for received traffic
fn net_csv() -> String {
    let mut csv = String::from("time,received,sent\n");
    for i in 0..SAMPLES {
        csv.push_str(&format!("{},{},{}\n", START + i as i64, -120.0, 30.0));
    }
    csv
}

fn pipeline_series(csv: &str, family: MetricFamily) -> TimeSeries {
    let opts = NormalizeOptions::with_reference_epoch(START);
    let table = RawTable::from_csv_str(csv).unwrap();
    let normalized = normalize_table(&table, &opts).unwrap();
    let extraction = extract(&normalized, family).unwrap();
    extraction.to_series(&normalized).unwrap()
}

#[test]
fn full_run_stats_and_convergence() {
    let window = EventWindow::new(START, START + SAMPLES as i64 - 1).unwrap();
    let config = ConvergenceConfig::default();

    let cpu = pipeline_series(&cpu_csv(), MetricFamily::Cpu);
    let ram = pipeline_series(&ram_csv(), MetricFamily::Ram);

    let (cpu, cpu_outcome) = clip_default(&cpu, &window);
    let (ram, ram_outcome) = clip_default(&ram, &window);
    assert!(cpu_outcome.was_clipped());
    assert!(ram_outcome.was_clipped());

    let cpu = cpu.relative_to(START as f64);
    let ram = ram.relative_to(START as f64);

    // Millisecond timestamps normalized onto the same axis as second ones
    assert_relative_eq!(cpu.times()[0], 0.0);
    assert_relative_eq!(cpu.times()[59], 59.0);

    let cpu_stats = window_stats(&cpu);
    assert_relative_eq!(cpu_stats.peak, 60.0);
    assert!(cpu_stats.mean > 5.0 && cpu_stats.mean < 60.0);
    // 10 s at 60% then 49 trapezoid intervals mostly at 5%
    assert!(cpu_stats.auc > 0.0);

    // KiB-scale RAM arrives in MiB after the magnitude heuristic
    let ram_stats = window_stats(&ram);
    assert_relative_eq!(ram_stats.peak, 4000.0);

    // Memory release latency: RAM settles at i=20
    let release = plateau_time(&ram, &config);
    assert_relative_eq!(release, 20.0);

    // Idle recovery: CPU settles at 10, RAM at 20; jointly 20
    let recovery = stable_time(&cpu, &[&ram], &config);
    assert_relative_eq!(recovery, 20.0);
}

#[test]
fn network_extraction_reports_abs_and_stats() {
    let window = EventWindow::new(START, START + SAMPLES as i64 - 1).unwrap();

    let rx = pipeline_series(&net_csv(), MetricFamily::NetRx);
    let tx = pipeline_series(&net_csv(), MetricFamily::NetTx);

    let (rx, _) = clip_default(&rx, &window);
    let rx_stats = window_stats(&rx.relative_to(START as f64));
    assert_relative_eq!(rx_stats.mean, 120.0);
    assert_relative_eq!(rx_stats.peak, 120.0);
    assert_relative_eq!(rx_stats.auc, 120.0 * 59.0);

    let tx_stats = window_stats(&tx.relative_to(START as f64));
    assert_relative_eq!(tx_stats.mean, 30.0);
}

#[test]
fn datetime_export_localizes_in_assumed_timezone() {
    // 1_600_000_000 is 2020-09-13 12:26:40 UTC, 21:26:40 in Seoul
    let mut csv = String::from("time,used\n");
    for i in 0..15 {
        csv.push_str(&format!("2020-09-13 21:26:{},{}\n", 40 + i, 100 + i));
    }

    let table = RawTable::from_csv_str(&csv).unwrap();
    let opts = NormalizeOptions::with_reference_epoch(1_600_000_000);
    let normalized = normalize_table(&table, &opts).unwrap();

    assert_relative_eq!(normalized.times()[0], 1.6e9);
    assert_relative_eq!(normalized.times()[14], 1.6e9 + 14.0);
}

#[test]
fn clock_shifted_export_still_lands_in_window() {
    // Export recorded by a clock 9 hours ahead of the run log
    let mut csv = String::from("time,used\n");
    for i in 0..SAMPLES {
        csv.push_str(&format!("{},{}\n", START + 32_400 + i as i64, 500));
    }

    let series = pipeline_series(&csv, MetricFamily::Ram);
    let window = EventWindow::new(START, START + SAMPLES as i64 - 1).unwrap();
    let (clipped, outcome) = clip_default(&series, &window);

    assert!(outcome.was_clipped());
    assert_eq!(clipped.len(), SAMPLES);
    assert_relative_eq!(clipped.times()[0], START as f64);
}

#[test]
fn missed_window_falls_back_but_still_reports() {
    let series = pipeline_series(&ram_csv(), MetricFamily::Ram);
    // Markers point at a stretch the export never captured
    let window = EventWindow::new(START + 10_000, START + 10_300).unwrap();

    let (kept, outcome) = clip_default(&series, &window);
    assert_eq!(outcome, ClipOutcome::FellBack { retained: 0 });
    assert_eq!(kept.len(), SAMPLES);

    // Degraded, not absent: the unclipped series still yields stats
    let stats = window_stats(&kept.relative_to(START as f64));
    assert_relative_eq!(stats.peak, 4000.0);
}

#[test]
fn broken_export_fails_loudly() {
    // A time column that is neither numeric nor datetime is a broken
    // export, not something to approximate
    let csv = "time,used\nfoo,1\nbar,2\nbaz,3\n";
    let table = RawTable::from_csv_str(csv).unwrap();
    let err = normalize_table(&table, &NormalizeOptions::default()).unwrap_err();
    assert!(err.to_string().contains("time"));
}
