use std::collections::BTreeSet;

use pronostic_db::models::Code;

/// Étend un jeu de numéros avec leurs miroirs (AB → BA) puis leurs voisins
/// ±1 par chiffre (modulo 10). Chaque famille est plafonnée au nombre de
/// nouveaux numéros donné. Le jeu de base est parcouru en ordre croissant,
/// le résultat est donc entièrement déterministe.
pub fn expand_neighbors(
    base: &BTreeSet<Code>,
    mirror_cap: usize,
    sibling_cap: usize,
) -> BTreeSet<Code> {
    let mut expanded = base.clone();

    let mut added = 0;
    for code in base {
        if added >= mirror_cap {
            break;
        }
        if let Some(mirror) = code.mirror() {
            if expanded.insert(mirror) {
                added += 1;
            }
        }
    }

    let mut added = 0;
    'outer: for code in base {
        for sibling in code.siblings() {
            if added >= sibling_cap {
                break 'outer;
            }
            if expanded.insert(sibling) {
                added += 1;
            }
        }
    }

    expanded
}
