use std::cmp::Ordering;
use std::collections::BTreeSet;

use pronostic_db::models::Code;

use crate::config::EngineConfig;
use crate::expand::expand_neighbors;
use crate::frequency::weighted_hot_codes;
use crate::interval::IntervalTable;
use crate::matrix::PositionMatrix;

/// Moteur de classement : historique, table d'intervalles et matrice de
/// positions construits par une seule passe, sans état global. L'état se
/// met à jour incrémentalement tirage par tirage (`push`), ce qui rend le
/// backtest linéaire en longueur d'historique.
#[derive(Debug, Clone)]
pub struct Engine {
    config: EngineConfig,
    /// Stockage interne : le plus ancien en premier (ajout en O(1)).
    history: Vec<Code>,
    intervals: IntervalTable,
    matrix: PositionMatrix,
}

impl Engine {
    pub fn new(config: EngineConfig) -> Self {
        Self {
            config,
            history: Vec::new(),
            intervals: IntervalTable::new(),
            matrix: PositionMatrix::new(),
        }
    }

    /// Construit le moteur d'une traite. `draws[0]` = le tirage le plus
    /// récent (la convention de toute l'API publique).
    pub fn analyze(draws: &[Code], config: EngineConfig) -> Self {
        let mut engine = Self::new(config);
        for &code in draws.iter().rev() {
            engine.push(code);
        }
        engine
    }

    /// Ajoute le tirage le plus récent et met à jour tout l'état dérivé.
    pub fn push(&mut self, code: Code) {
        self.history.push(code);
        self.intervals.observe(code.root());
        self.matrix.record(code);
    }

    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn intervals(&self) -> &IntervalTable {
        &self.intervals
    }

    pub fn matrix(&self) -> &PositionMatrix {
        &self.matrix
    }

    /// Les n derniers tirages, le plus récent en premier.
    pub fn recent(&self, n: usize) -> Vec<Code> {
        self.history.iter().rev().take(n).copied().collect()
    }

    /// Produit le jeu de candidats classé. Déterministe : deux appels sur
    /// le même état rendent exactement la même liste.
    ///
    /// Historique vide ou insuffisant : repli déterministe sur 00..N-1
    /// (comportement documenté, pas une erreur).
    pub fn predict(&self) -> Vec<Code> {
        let cfg = &self.config;

        if self.history.len() < cfg.min_history {
            return Code::all().take(cfg.max_output).collect();
        }

        let newest = self.recent(self.history.len());

        // 1. Racines prioritaires : toutes les dizaines de leurs numéros.
        let roots = self.intervals.priority_roots(cfg.priority_root_count);
        let mut base: BTreeSet<Code> = BTreeSet::new();
        for &root in &roots {
            base.extend(Code::with_root(root));
        }

        // 2. Zones chaudes de la matrice, surpondérées sur la fenêtre récente.
        let zone_recent = &newest[..cfg.zone_recent_window.min(newest.len())];
        let zones = self
            .matrix
            .hot_zones(zone_recent, cfg.hot_zone_count, cfg.zone_recent_weight);
        let zone_set: BTreeSet<(u8, u8)> = zones.into_iter().collect();
        base.extend(Code::all().filter(|c| zone_set.contains(&(c.tens(), c.units()))));

        // 3. Numéros chauds pondérés par récence.
        let hot = weighted_hot_codes(
            &newest,
            cfg.freq_window,
            cfg.very_recent_window,
            cfg.freq_recent_bonus,
            cfg.hot_code_count,
        );
        let hot_set: BTreeSet<Code> = hot.into_iter().collect();
        base.extend(hot_set.iter().copied());

        // 4. Expansion miroirs + voisins sur l'union.
        let expanded = expand_neighbors(&base, cfg.mirror_cap, cfg.sibling_cap);

        // 5. Score final, poids produit : 2 / 1 / 1.5 / 1.
        let recent_set: BTreeSet<Code> = newest.iter().take(cfg.recent_window).copied().collect();
        let mut scored: Vec<(Code, f64)> = expanded
            .into_iter()
            .map(|code| {
                let mut score = 0.0;
                if roots.contains(&code.root()) {
                    score += cfg.root_weight;
                }
                if zone_set.contains(&(code.tens(), code.units())) {
                    score += cfg.zone_weight;
                }
                if hot_set.contains(&code) {
                    score += cfg.freq_weight;
                }
                if recent_set.contains(&code) {
                    score += cfg.recent_weight;
                }
                (code, score)
            })
            .collect();

        scored.sort_by(|a, b| {
            b.1.partial_cmp(&a.1)
                .unwrap_or(Ordering::Equal)
                .then(a.0.cmp(&b.0))
        });
        scored.truncate(cfg.max_output);
        scored.into_iter().map(|(code, _)| code).collect()
    }
}
