use pronostic_db::models::Code;

/// Découpage simple en paquets de `per_web` numéros, dans l'ordre reçu.
pub fn split_chunks(codes: &[Code], per_web: usize) -> Vec<Vec<Code>> {
    if per_web == 0 {
        return vec![codes.to_vec()];
    }
    codes.chunks(per_web).map(|c| c.to_vec()).collect()
}

#[derive(Debug, Clone)]
pub struct OverlapSplit {
    pub web1: Vec<Code>,
    pub web2: Vec<Code>,
    pub overlap: Vec<Code>,
}

/// Découpage en deux listes avec recouvrement : les deux sites reçoivent
/// la tranche centrale en commun. `overlap_percent` borne la taille du
/// recouvrement (minimum 10 numéros, plafonné au total).
pub fn split_overlap(codes: &[Code], overlap_percent: u32) -> OverlapSplit {
    if codes.is_empty() {
        return OverlapSplit {
            web1: Vec::new(),
            web2: Vec::new(),
            overlap: Vec::new(),
        };
    }

    let total = codes.len();
    let overlap_count = ((total * overlap_percent as usize) / 100).max(10).min(total);
    let split_point = (total - overlap_count) / 2;

    OverlapSplit {
        web1: codes[..(split_point + overlap_count).min(total)].to_vec(),
        web2: codes[split_point..].to_vec(),
        overlap: codes[split_point..(split_point + overlap_count).min(total)].to_vec(),
    }
}
