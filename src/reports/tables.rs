use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use goodness::energy::CollisionStats;
use goodness::experiment::ExperimentReport;

fn stats_cells(stats: &CollisionStats) -> [Cell; 3] {
    [
        Cell::new(stats.occupied_buckets),
        Cell::new(stats.max_occupancy),
        Cell::new(format!("{:.4}", stats.mean_excess())),
    ]
}

pub fn comparison(label: &str, report: &ExperimentReport) {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new(format!("{} (table {})", label, report.config.table_size))
            .add_attribute(Attribute::Bold),
        Cell::new("Shifts"),
        Cell::new("Collisions").fg(Color::Cyan),
        Cell::new("Buckets"),
        Cell::new("Max"),
        Cell::new("Mean"),
    ]);

    for i in 2..=5 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    let tuned_wins = report.tuned.best_energy < report.baseline_energy;

    let mut tuned_row = vec![
        Cell::new("Tuned").add_attribute(Attribute::Bold),
        Cell::new(report.tuned.best),
        if tuned_wins {
            Cell::new(report.tuned.best_energy).fg(Color::Green)
        } else {
            Cell::new(report.tuned.best_energy)
        },
    ];
    tuned_row.extend(stats_cells(&report.tuned_stats));
    table.add_row(tuned_row);

    let mut baseline_row = vec![
        Cell::new("Baseline").add_attribute(Attribute::Bold),
        Cell::new(report.baseline),
        Cell::new(report.baseline_energy),
    ];
    baseline_row.extend(stats_cells(&report.baseline_stats));
    table.add_row(baseline_row);

    println!("\n{}", table);
    println!(
        "Best: {} E = {} | baseline E = {} | {} iterations, {} accepted, {} improving ({})",
        report.tuned.best,
        report.tuned.best_energy,
        report.baseline_energy,
        report.tuned.iterations,
        report.tuned.accepted,
        report.tuned.improving,
        report.tuned.reason
    );
}

pub fn summary(results: &[(String, ExperimentReport)]) {
    if results.len() < 2 {
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.add_row(vec![
        Cell::new("Mode").add_attribute(Attribute::Bold),
        Cell::new("Table"),
        Cell::new("Hash"),
        Cell::new("Tuned"),
        Cell::new("Baseline"),
        Cell::new("Delta"),
        Cell::new("% Diff"),
    ]);

    for i in 1..=6 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, r) in results {
        let delta = r.improvement();
        let pct = if r.baseline_energy > 0.0 {
            (delta / r.baseline_energy) * 100.0
        } else {
            0.0
        };
        let delta_cell = if delta > 0.0 {
            Cell::new(format!("-{:.0}", delta)).fg(Color::Green)
        } else {
            Cell::new("0")
        };

        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(r.config.table_size),
            Cell::new(r.origin),
            Cell::new(r.tuned.best_energy),
            Cell::new(r.baseline_energy),
            delta_cell,
            Cell::new(format!("{:.1}%", pct)),
        ]);
    }
    println!("\n{}", table);
}
