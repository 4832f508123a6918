use pronostic_db::models::Code;

/// Compte les occurrences de chaque numéro sur une fenêtre glissante.
/// `history[0]` = le tirage le plus récent. Sans fenêtre, toute la séquence.
pub fn frequency_table(history: &[Code], window: Option<usize>) -> [u32; 100] {
    let mut table = [0u32; 100];
    let end = window.unwrap_or(history.len()).min(history.len());
    for code in &history[..end] {
        table[code.value() as usize] += 1;
    }
    table
}

/// Numéros chauds pondérés : fréquence sur `window` tirages, plus un bonus
/// additif par occurrence dans les `very_recent` derniers. Tri par
/// (fréquence décroissante, numéro croissant), tronqué à `count`.
pub fn weighted_hot_codes(
    history: &[Code],
    window: usize,
    very_recent: usize,
    bonus: u32,
    count: usize,
) -> Vec<Code> {
    if history.is_empty() {
        return Vec::new();
    }

    let mut freq = frequency_table(history, Some(window));

    let recent_end = very_recent.min(history.len());
    for code in &history[..recent_end] {
        freq[code.value() as usize] += bonus;
    }

    let mut entries: Vec<(Code, u32)> = Code::all()
        .filter(|c| freq[c.value() as usize] > 0)
        .map(|c| (c, freq[c.value() as usize]))
        .collect();
    entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
    entries.truncate(count);
    entries.into_iter().map(|(c, _)| c).collect()
}

#[derive(Debug, Clone)]
pub struct HotColdSplit {
    pub hot: Vec<Code>,
    pub cold: Vec<Code>,
}

/// Découpe les numéros observés en chauds/froids par rang de fréquence.
/// `hot_ratio` = part des numéros distincts classés chauds (0.7 ou 0.8
/// selon les réglages historiques).
pub fn hot_cold_split(history: &[Code], hot_ratio: f64) -> HotColdSplit {
    let freq = frequency_table(history, None);

    let mut seen: Vec<(Code, u32)> = Code::all()
        .filter(|c| freq[c.value() as usize] > 0)
        .map(|c| (c, freq[c.value() as usize]))
        .collect();
    seen.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));

    let cutoff = ((seen.len() as f64) * hot_ratio).ceil() as usize;
    let cold = seen.split_off(cutoff.min(seen.len()));

    HotColdSplit {
        hot: seen.into_iter().map(|(c, _)| c).collect(),
        cold: cold.into_iter().map(|(c, _)| c).collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(values: &[u8]) -> Vec<Code> {
        values.iter().map(|&v| Code::new(v).unwrap()).collect()
    }

    #[test]
    fn test_frequency_full_window() {
        let history = codes(&[12, 34, 12, 56, 12, 78]);
        let table = frequency_table(&history, None);
        assert_eq!(table[12], 3);
        assert_eq!(table[34], 1);
        assert_eq!(table[0], 0);
    }

    #[test]
    fn test_frequency_trailing_window() {
        let history = codes(&[12, 34, 12, 56, 12, 78]);
        let table = frequency_table(&history, Some(2));
        assert_eq!(table[12], 1);
        assert_eq!(table[34], 1);
        assert_eq!(table[78], 0);
    }

    #[test]
    fn test_weighted_hot_codes_scenario() {
        // Scénario de bout en bout : "12" sort premier (3 occurrences),
        // puis "34" et "56" par le départage en numéro croissant.
        let history = codes(&[12, 34, 12, 56, 12, 78]);
        let hot = weighted_hot_codes(&history, 100, 20, 2, 3);
        let as_str: Vec<String> = hot.iter().map(|c| c.to_string()).collect();
        assert_eq!(as_str, vec!["12", "34", "56"]);
    }

    #[test]
    fn test_weighted_hot_codes_bonus_changes_rank() {
        // "07" apparaît 2x mais hors fenêtre très récente ; "51" 1x dedans.
        // Avec un bonus de 2, "51" (1+2=3) dépasse "07" (2).
        let history = codes(&[51, 7, 7]);
        let hot = weighted_hot_codes(&history, 100, 1, 2, 2);
        assert_eq!(hot[0].to_string(), "51");
        assert_eq!(hot[1].to_string(), "07");
    }

    #[test]
    fn test_weighted_hot_codes_empty() {
        assert!(weighted_hot_codes(&[], 100, 20, 2, 30).is_empty());
    }

    #[test]
    fn test_hot_cold_split_ratio() {
        // 10 numéros distincts, ratio 0.7 → 7 chauds, 3 froids.
        let history = codes(&[0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 0, 1, 2]);
        let split = hot_cold_split(&history, 0.7);
        assert_eq!(split.hot.len(), 7);
        assert_eq!(split.cold.len(), 3);
    }

    #[test]
    fn test_hot_cold_split_hot_are_most_frequent() {
        let history = codes(&[42, 42, 42, 13, 13, 7]);
        let split = hot_cold_split(&history, 0.5);
        assert_eq!(split.hot.len(), 2);
        assert_eq!(split.hot[0].to_string(), "42");
        assert_eq!(split.cold, codes(&[7]));
    }

    #[test]
    fn test_hot_cold_split_disjoint() {
        let history = codes(&[1, 2, 3, 4, 5, 1, 2]);
        let split = hot_cold_split(&history, 0.7);
        for c in &split.cold {
            assert!(!split.hot.contains(c), "{} présent des deux côtés", c);
        }
    }
}
