/// Valeur sentinelle pour une racine jamais observée.
pub const NEVER_SEEN: u32 = 999;

/// Suivi des intervalles d'apparition par racine (1-9).
///
/// Pour chaque tirage traité (jour i), l'intervalle d'une racine vaut
/// `i - dernière_apparition`, ou 999 si elle n'est jamais sortie. Les
/// racines au plus grand intervalle sont dites "en retard". C'est un
/// biais volontaire de type "la racine est due", demandé tel quel : il
/// n'y a aucune prétention probabiliste derrière.
#[derive(Debug, Clone, Default)]
pub struct IntervalTable {
    last_appearance: [Option<u32>; 9],
    day: u32,
}

impl IntervalTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Enregistre le tirage suivant (jour courant + 1) pour une racine.
    pub fn observe(&mut self, root: u8) {
        debug_assert!((1..=9).contains(&root));
        self.day += 1;
        self.last_appearance[(root - 1) as usize] = Some(self.day);
    }

    /// Nombre de jours traités.
    pub fn day(&self) -> u32 {
        self.day
    }

    /// Intervalle courant d'une racine (0 si elle vient de sortir).
    pub fn interval(&self, root: u8) -> u32 {
        debug_assert!((1..=9).contains(&root));
        match self.last_appearance[(root - 1) as usize] {
            Some(last) => self.day - last,
            None => NEVER_SEEN,
        }
    }

    /// Les intervalles des 9 racines, index 0 = racine 1.
    pub fn intervals(&self) -> [u32; 9] {
        let mut out = [0u32; 9];
        for (i, slot) in out.iter_mut().enumerate() {
            *slot = self.interval((i + 1) as u8);
        }
        out
    }

    /// Les k racines au plus grand intervalle, départage par racine
    /// croissante pour un ordre stable.
    pub fn priority_roots(&self, k: usize) -> Vec<u8> {
        let mut roots: Vec<u8> = (1..=9).collect();
        roots.sort_by(|a, b| self.interval(*b).cmp(&self.interval(*a)).then(a.cmp(b)));
        roots.truncate(k);
        roots
    }
}
