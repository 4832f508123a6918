use std::collections::BTreeSet;

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

use pronostic_db::models::Code;

/// Complète un jeu de candidats jusqu'à `target` numéros en tirant sans
/// remise dans le complément explicite (les numéros absents du jeu).
/// Termine toujours : pas de boucle réessai-jusqu'à-unique. Avec un seed,
/// le résultat est reproductible.
pub fn fill_from_complement(selected: &[Code], target: usize, seed: Option<u64>) -> Vec<Code> {
    let mut result: Vec<Code> = Vec::with_capacity(target);
    let mut have: BTreeSet<Code> = BTreeSet::new();
    for &code in selected {
        if have.insert(code) {
            result.push(code);
        }
        if result.len() == target {
            return result;
        }
    }

    let mut complement: Vec<Code> = Code::all().filter(|c| !have.contains(c)).collect();

    let mut rng: StdRng = match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_rng(&mut rand::rng()),
    };
    complement.shuffle(&mut rng);

    let needed = (target - result.len()).min(complement.len());
    result.extend(complement.into_iter().take(needed));
    result
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codes(values: &[u8]) -> Vec<Code> {
        values.iter().map(|&v| Code::new(v).unwrap()).collect()
    }

    #[test]
    fn test_fill_reaches_target_without_duplicates() {
        let selected = codes(&[1, 2, 3]);
        let filled = fill_from_complement(&selected, 20, Some(42));
        assert_eq!(filled.len(), 20);

        let unique: BTreeSet<Code> = filled.iter().copied().collect();
        assert_eq!(unique.len(), 20, "Doublons après remplissage");
    }

    #[test]
    fn test_fill_preserves_selection_order() {
        let selected = codes(&[42, 7, 13]);
        let filled = fill_from_complement(&selected, 10, Some(1));
        assert_eq!(&filled[..3], &codes(&[42, 7, 13])[..]);
    }

    #[test]
    fn test_fill_truncates_oversized_selection() {
        let selected = codes(&[1, 2, 3, 4, 5]);
        let filled = fill_from_complement(&selected, 3, Some(1));
        assert_eq!(filled, codes(&[1, 2, 3]));
    }

    #[test]
    fn test_fill_seed_reproducible() {
        let selected = codes(&[50]);
        let a = fill_from_complement(&selected, 30, Some(99));
        let b = fill_from_complement(&selected, 30, Some(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fill_capped_by_domain() {
        // 100 numéros possibles au total : impossible d'en rendre 150.
        let filled = fill_from_complement(&[], 150, Some(5));
        assert_eq!(filled.len(), 100);
    }

    #[test]
    fn test_fill_dedupes_selection() {
        let selected = codes(&[9, 9, 9]);
        let filled = fill_from_complement(&selected, 5, Some(3));
        assert_eq!(filled.len(), 5);
        assert_eq!(filled[0], Code::new(9).unwrap());
        let unique: BTreeSet<Code> = filled.iter().copied().collect();
        assert_eq!(unique.len(), 5);
    }
}
