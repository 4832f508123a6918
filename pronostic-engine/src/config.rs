/// Paramètres du moteur de classement.
///
/// Les poids (2 / 1 / 1.5 / 1) et les fenêtres sont des réglages produit
/// ajustés à la main, pas des constantes physiques : tout est configurable,
/// seuls les poids relatifs sont garantis par les tests de comportement.
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Taille maximale du jeu de candidats en sortie.
    pub max_output: usize,
    /// En dessous de ce nombre de tirages, repli déterministe (00..N-1).
    pub min_history: usize,

    /// Nombre de racines "en retard" retenues (étape 1).
    pub priority_root_count: usize,

    /// Nombre de cellules retenues dans la matrice de positions (étape 2).
    pub hot_zone_count: usize,
    /// Fenêtre récente qui reçoit un surpoids dans la matrice.
    pub zone_recent_window: usize,
    /// Surpoids par occurrence dans la fenêtre récente.
    pub zone_recent_weight: u32,

    /// Nombre de numéros chauds retenus (étape 3).
    pub hot_code_count: usize,
    /// Fenêtre de comptage des fréquences.
    pub freq_window: usize,
    /// Fenêtre très récente recevant un bonus additif.
    pub very_recent_window: usize,
    /// Bonus par occurrence dans la fenêtre très récente.
    pub freq_recent_bonus: u32,

    /// Fenêtre "derniers tirages" pour le bonus de score final.
    pub recent_window: usize,

    /// Plafond de miroirs ajoutés par expansion.
    pub mirror_cap: usize,
    /// Plafond de voisins ±1 ajoutés par expansion.
    pub sibling_cap: usize,

    /// Poids de score : racine prioritaire.
    pub root_weight: f64,
    /// Poids de score : zone chaude.
    pub zone_weight: f64,
    /// Poids de score : numéro chaud.
    pub freq_weight: f64,
    /// Poids de score : présent dans les derniers tirages.
    pub recent_weight: f64,

    /// Part des numéros classés "chauds" dans le découpage chaud/froid.
    pub hot_ratio: f64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_output: 50,
            min_history: 50,
            priority_root_count: 4,
            hot_zone_count: 25,
            zone_recent_window: 50,
            zone_recent_weight: 3,
            hot_code_count: 30,
            freq_window: 100,
            very_recent_window: 20,
            freq_recent_bonus: 2,
            recent_window: 10,
            mirror_cap: 5,
            sibling_cap: 5,
            root_weight: 2.0,
            zone_weight: 1.0,
            freq_weight: 1.5,
            recent_weight: 1.0,
            hot_ratio: 0.7,
        }
    }
}
