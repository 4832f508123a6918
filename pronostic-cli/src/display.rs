use comfy_table::{presets::UTF8_FULL, Cell, Color, ContentArrangement, Table};

use crate::import::ImportResult;
use crate::split::OverlapSplit;
use pronostic_db::models::{Code, Draw};
use pronostic_engine::backtest::BacktestReport;
use pronostic_engine::frequency::HotColdSplit;
use pronostic_engine::interval::{IntervalTable, NEVER_SEEN};

pub fn display_draws(draws: &[Draw]) {
    if draws.is_empty() {
        println!("Aucun tirage à afficher.");
        return;
    }

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Date", "Numéro", "Racine"]);

    for draw in draws {
        let date = if draw.date.is_empty() {
            "—".to_string()
        } else {
            draw.date.clone()
        };
        table.add_row(vec![
            date,
            draw.code.to_string(),
            draw.code.root().to_string(),
        ]);
    }

    println!("{table}");
}

pub fn display_import_summary(result: &ImportResult) {
    println!("Import terminé :");
    println!("  Lignes lues        : {}", result.total_rows);
    println!("  Cellules balayées  : {}", result.total_cells);
    println!("  Tirages importés   : {}", result.imported);
    println!("  Cellules ignorées  : {}", result.skipped);
    if result.errors > 0 {
        println!("  Erreurs            : {}", result.errors);
    }
}

pub fn display_frequencies(entries: &[(Code, u32)], window: usize) {
    println!("\n📊 Fréquences sur les {} derniers tirages\n", window);

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Numéro", "Fréquence"]);

    for (code, freq) in entries {
        table.add_row(vec![code.to_string(), freq.to_string()]);
    }
    println!("{table}");
}

pub fn display_intervals(intervals: &IntervalTable, priority: &[u8]) {
    println!("\n⏰ Intervalles par racine (jours depuis la dernière sortie)\n");

    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Racine", "Intervalle", "Statut"]);

    for root in 1..=9u8 {
        let interval = intervals.interval(root);
        let interval_str = if interval == NEVER_SEEN {
            "jamais vue".to_string()
        } else {
            interval.to_string()
        };
        let (status, color) = if priority.contains(&root) {
            ("★ en retard", Color::Yellow)
        } else {
            ("-", Color::White)
        };
        table.add_row(vec![
            Cell::new(root.to_string()),
            Cell::new(interval_str),
            Cell::new(status).fg(color),
        ]);
    }
    println!("{table}");
}

pub fn display_hot_cold(split: &HotColdSplit) {
    println!("\n🔥 Numéros chauds ({}) :", split.hot.len());
    print_code_lines(&split.hot);
    println!("\n❄️ Numéros froids ({}) :", split.cold.len());
    print_code_lines(&split.cold);
}

pub fn display_candidates(candidates: &[Code]) {
    println!("\n🎯 Pronostic : {} numéros (du mieux classé au moins bien)\n", candidates.len());
    print_code_lines(candidates);
}

pub fn display_webs(webs: &[Vec<Code>]) {
    println!("\n🌐 Répartition par web :");
    for (i, web) in webs.iter().enumerate() {
        println!("\nWEB {} ({} numéros) :", i + 1, web.len());
        println!("{}", join_codes(web));
    }
}

pub fn display_overlap_split(split: &OverlapSplit) {
    println!("\n🌐 WEB 1 ({} numéros) :", split.web1.len());
    println!("{}", join_codes(&split.web1));
    println!("\n🌐 WEB 2 ({} numéros) :", split.web2.len());
    println!("{}", join_codes(&split.web2));
    println!("\n🔁 Recouvrement ({} numéros) :", split.overlap.len());
    println!("{}", join_codes(&split.overlap));
}

pub fn display_backtest(report: &BacktestReport) {
    println!("\n🧪 Backtest (walk-forward incrémental)\n");
    println!("  Chauffe            : {} tirages", report.warmup);
    println!("  Points de test     : {}", report.tests);
    println!("  Tirages retrouvés  : {}", report.hits);
    println!("  Taux de réussite   : {:.1} %", report.hit_rate * 100.0);
}

/// Sortie au format des scripts d'origine : numéros joints par '*'.
fn join_codes(codes: &[Code]) -> String {
    codes
        .iter()
        .map(|c| c.to_string())
        .collect::<Vec<_>>()
        .join("*")
}

fn print_code_lines(codes: &[Code]) {
    for chunk in codes.chunks(10) {
        println!("{}", join_codes(chunk));
    }
}
