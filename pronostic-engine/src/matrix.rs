use pronostic_db::models::Code;

/// Grille 10×10 des occurrences par (dizaine, unité), accumulée sur tout
/// l'historique. Taille fixe : pas de croissance cachée.
#[derive(Debug, Clone, Default)]
pub struct PositionMatrix {
    cells: [[u32; 10]; 10],
}

impl PositionMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, code: Code) {
        self.cells[code.tens() as usize][code.units() as usize] += 1;
    }

    pub fn count(&self, tens: u8, units: u8) -> u32 {
        self.cells[tens as usize][units as usize]
    }

    pub fn total(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }

    /// Les `count` cellules les plus chaudes, avec un surpoids de
    /// `recent_weight` par occurrence dans `recent` (les derniers tirages,
    /// le plus récent en premier). Départage par (dizaine, unité)
    /// croissantes pour un ordre stable.
    pub fn hot_zones(&self, recent: &[Code], count: usize, recent_weight: u32) -> Vec<(u8, u8)> {
        let mut combined = self.cells;
        for code in recent {
            combined[code.tens() as usize][code.units() as usize] += recent_weight;
        }

        let mut zones: Vec<((u8, u8), u32)> = Vec::with_capacity(100);
        for tens in 0..10u8 {
            for units in 0..10u8 {
                zones.push(((tens, units), combined[tens as usize][units as usize]));
            }
        }
        zones.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(&b.0)));
        zones.truncate(count);
        zones.into_iter().map(|(cell, _)| cell).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn code(v: u8) -> Code {
        Code::new(v).unwrap()
    }

    #[test]
    fn test_record_and_count() {
        let mut matrix = PositionMatrix::new();
        matrix.record(code(42));
        matrix.record(code(42));
        matrix.record(code(7));
        assert_eq!(matrix.count(4, 2), 2);
        assert_eq!(matrix.count(0, 7), 1);
        assert_eq!(matrix.count(9, 9), 0);
        assert_eq!(matrix.total(), 3);
    }

    #[test]
    fn test_hot_zones_rank() {
        let mut matrix = PositionMatrix::new();
        for _ in 0..5 {
            matrix.record(code(13));
        }
        for _ in 0..3 {
            matrix.record(code(88));
        }
        let zones = matrix.hot_zones(&[], 2, 0);
        assert_eq!(zones[0], (1, 3));
        assert_eq!(zones[1], (8, 8));
    }

    #[test]
    fn test_hot_zones_recent_boost() {
        let mut matrix = PositionMatrix::new();
        for _ in 0..3 {
            matrix.record(code(13));
        }
        matrix.record(code(88));
        // 88 vu 1 fois mais récent : 1 + 3 = 4 > 3.
        let zones = matrix.hot_zones(&[code(88)], 1, 3);
        assert_eq!(zones[0], (8, 8));
    }

    #[test]
    fn test_hot_zones_deterministic_tie_break() {
        let matrix = PositionMatrix::new();
        let zones = matrix.hot_zones(&[], 3, 0);
        // Toutes les cellules à zéro : ordre (dizaine, unité) croissant.
        assert_eq!(zones, vec![(0, 0), (0, 1), (0, 2)]);
    }
}
