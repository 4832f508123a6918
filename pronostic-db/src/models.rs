use std::fmt;
use std::str::FromStr;

use anyhow::{bail, Result};

/// Numéro 2D : un entier dans 00-99, affiché avec le zéro de tête.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(u8);

impl Code {
    pub fn new(value: u8) -> Result<Self> {
        if value > 99 {
            bail!("Numéro {} hors limites (00-99)", value);
        }
        Ok(Self(value))
    }

    pub fn from_digits(tens: u8, units: u8) -> Result<Self> {
        if tens > 9 || units > 9 {
            bail!("Chiffre hors limites : dizaine={}, unité={}", tens, units);
        }
        Ok(Self(tens * 10 + units))
    }

    pub fn value(&self) -> u8 {
        self.0
    }

    pub fn tens(&self) -> u8 {
        self.0 / 10
    }

    pub fn units(&self) -> u8 {
        self.0 % 10
    }

    /// Racine cyclique (1-9) : 9 si n == 0 ou n % 9 == 0, sinon n % 9.
    pub fn root(&self) -> u8 {
        if self.0 == 0 || self.0 % 9 == 0 {
            9
        } else {
            self.0 % 9
        }
    }

    /// Miroir (AB → BA). `None` pour les doubles (11, 22, ...).
    pub fn mirror(&self) -> Option<Code> {
        if self.tens() == self.units() {
            None
        } else {
            Some(Self(self.units() * 10 + self.tens()))
        }
    }

    /// Les 4 voisins ±1 sur chaque chiffre, arithmétique modulo 10.
    /// Le wrap (0 ↔ 9) est voulu : voir les tests aux bornes.
    pub fn siblings(&self) -> [Code; 4] {
        let t = self.tens();
        let u = self.units();
        [
            Self(((t + 9) % 10) * 10 + u),
            Self(((t + 1) % 10) * 10 + u),
            Self(t * 10 + (u + 9) % 10),
            Self(t * 10 + (u + 1) % 10),
        ]
    }

    /// Tous les numéros 00-99 en ordre croissant.
    pub fn all() -> impl Iterator<Item = Code> {
        (0u8..=99).map(Code)
    }

    /// Tous les numéros partageant une racine donnée, en ordre croissant.
    pub fn with_root(root: u8) -> Vec<Code> {
        Self::all().filter(|c| c.root() == root).collect()
    }
}

impl fmt::Display for Code {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}", self.0)
    }
}

impl FromStr for Code {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        if s.is_empty() || s.len() > 2 || !s.bytes().all(|b| b.is_ascii_digit()) {
            bail!("Numéro invalide : '{}'", s);
        }
        Code::new(s.parse::<u8>()?)
    }
}

/// Un tirage historique tel que stocké en base.
#[derive(Debug, Clone)]
pub struct Draw {
    pub id: i64,
    pub date: String,
    pub code: Code,
}
