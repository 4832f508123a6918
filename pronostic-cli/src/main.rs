mod display;
mod import;
mod split;

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};

use crate::display::{
    display_backtest, display_candidates, display_draws, display_frequencies, display_hot_cold,
    display_import_summary, display_intervals, display_overlap_split, display_webs,
};
use crate::split::{split_chunks, split_overlap};
use pronostic_db::db::{
    count_draws, db_path, fetch_last_codes, fetch_last_draws, insert_draw, migrate, open_db,
};
use pronostic_db::models::Code;
use pronostic_engine::backtest::{run_backtest, save_report};
use pronostic_engine::config::EngineConfig;
use pronostic_engine::engine::Engine;
use pronostic_engine::frequency::{frequency_table, hot_cold_split};
use pronostic_engine::sampler::fill_from_complement;

#[derive(Parser)]
#[command(name = "pronostic", about = "Analyseur de tirages 2D et générateur de pronostics")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Importer les tirages depuis un export CSV (du plus ancien au plus récent)
    Import {
        /// Chemin vers le fichier CSV
        #[arg(short, long)]
        file: PathBuf,
    },

    /// Afficher le chemin de la base de données
    DbPath,

    /// Lister les derniers tirages
    List {
        /// Nombre de tirages à afficher
        #[arg(short, long, default_value = "10")]
        last: u32,
    },

    /// Afficher les statistiques (fréquences, intervalles, chauds/froids)
    Stats {
        /// Fenêtre d'analyse (nombre de tirages)
        #[arg(short, long, default_value = "100")]
        window: u32,

        /// Part des numéros classés chauds (0.7 ou 0.8 selon les habitudes)
        #[arg(long, default_value = "0.7")]
        hot_ratio: f64,
    },

    /// Générer le jeu de numéros pronostiqués
    Predict {
        /// Nombre de numéros à produire
        #[arg(short, long, default_value = "50")]
        count: usize,

        /// Seed pour le remplissage aléatoire éventuel
        #[arg(long)]
        seed: Option<u64>,

        /// Découper la sortie en paquets de N numéros
        #[arg(long)]
        per_web: Option<usize>,

        /// Découper en 2 webs avec recouvrement (pourcentage)
        #[arg(long)]
        overlap: Option<u32>,
    },

    /// Rejouer l'historique et mesurer le taux de réussite
    Backtest {
        /// Nombre de tirages de chauffe avant le premier point de test
        #[arg(short, long, default_value = "60")]
        warmup: usize,

        /// Écrire le rapport JSON dans ce fichier
        #[arg(short, long)]
        report: Option<PathBuf>,
    },

    /// Ajouter un tirage manuellement
    Add,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let path = db_path();
    let conn = open_db(&path)?;
    migrate(&conn)?;

    match cli.command {
        Command::Import { file } => cmd_import(&conn, &file),
        Command::DbPath => {
            println!("{}", path.display());
            Ok(())
        }
        Command::List { last } => cmd_list(&conn, last),
        Command::Stats { window, hot_ratio } => cmd_stats(&conn, window, hot_ratio),
        Command::Predict {
            count,
            seed,
            per_web,
            overlap,
        } => cmd_predict(&conn, count, seed, per_web, overlap),
        Command::Backtest { warmup, report } => cmd_backtest(&conn, warmup, report),
        Command::Add => cmd_add(&conn),
    }
}

fn cmd_import(conn: &pronostic_db::rusqlite::Connection, file: &PathBuf) -> Result<()> {
    let result = import::import_csv(conn, file)?;
    display_import_summary(&result);
    Ok(())
}

fn cmd_list(conn: &pronostic_db::rusqlite::Connection, last: u32) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        println!("Base vide. Lancez d'abord : pronostic import");
        return Ok(());
    }
    let draws = fetch_last_draws(conn, last)?;
    display_draws(&draws);
    Ok(())
}

fn cmd_stats(conn: &pronostic_db::rusqlite::Connection, window: u32, hot_ratio: f64) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        println!("Base vide. Lancez d'abord : pronostic import");
        return Ok(());
    }

    let effective_window = window.min(n) as usize;
    let history = fetch_last_codes(conn, n)?;

    let freq = frequency_table(&history, Some(effective_window));
    let mut entries: Vec<(Code, u32)> = Code::all()
        .filter(|c| freq[c.value() as usize] > 0)
        .map(|c| (c, freq[c.value() as usize]))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    entries.truncate(20);
    display_frequencies(&entries, effective_window);

    let config = EngineConfig::default();
    let engine = Engine::analyze(&history, config.clone());
    let priority = engine.intervals().priority_roots(config.priority_root_count);
    display_intervals(engine.intervals(), &priority);

    let split = hot_cold_split(&history[..effective_window.min(history.len())], hot_ratio);
    display_hot_cold(&split);
    Ok(())
}

fn cmd_predict(
    conn: &pronostic_db::rusqlite::Connection,
    count: usize,
    seed: Option<u64>,
    per_web: Option<usize>,
    overlap: Option<u32>,
) -> Result<()> {
    let n = count_draws(conn)?;
    let history = fetch_last_codes(conn, n)?;

    let config = EngineConfig {
        max_output: count,
        ..EngineConfig::default()
    };

    let engine = Engine::analyze(&history, config);
    let mut candidates = engine.predict();
    if candidates.len() < count {
        // Le classement n'a pas fourni assez de numéros : on complète
        // sans remise depuis le complément.
        candidates = fill_from_complement(&candidates, count, seed);
    }

    display_candidates(&candidates);

    if let Some(pct) = overlap {
        display_overlap_split(&split_overlap(&candidates, pct));
    } else if let Some(per_web) = per_web {
        display_webs(&split_chunks(&candidates, per_web));
    }

    Ok(())
}

fn cmd_backtest(
    conn: &pronostic_db::rusqlite::Connection,
    warmup: usize,
    report_path: Option<PathBuf>,
) -> Result<()> {
    let n = count_draws(conn)?;
    if n == 0 {
        println!("Base vide. Lancez d'abord : pronostic import");
        return Ok(());
    }

    let history = fetch_last_codes(conn, n)?;
    let report = run_backtest(&history, &EngineConfig::default(), warmup);
    display_backtest(&report);

    if let Some(path) = report_path {
        save_report(&report, &path)?;
        println!("\n💾 Rapport écrit dans {}", path.display());
    }
    Ok(())
}

fn cmd_add(conn: &pronostic_db::rusqlite::Connection) -> Result<()> {
    println!("Ajout d'un tirage manuellement\n");

    let date = prompt("Date (AAAA-MM-JJ, vide si inconnue) : ")?;
    let code: Code = loop {
        let input = prompt("Numéro 2D (00-99) : ")?;
        match input.parse() {
            Ok(code) => break code,
            Err(_) => println!("Numéro invalide (00-99). Réessayez."),
        }
    };

    println!("\nTirage à insérer : {} ({}) — racine {}", code, date, code.root());
    let confirm = prompt("Confirmer l'insertion ? (o/n) : ")?;
    if confirm.trim().to_lowercase() == "o" {
        insert_draw(conn, &date, code)?;
        println!("Tirage inséré avec succès.");
    } else {
        println!("Insertion annulée.");
    }

    Ok(())
}

fn prompt(msg: &str) -> Result<String> {
    print!("{}", msg);
    io::stdout().flush()?;
    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .context("Erreur de lecture")?;
    Ok(input.trim().to_string())
}
