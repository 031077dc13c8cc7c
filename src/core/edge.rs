//! Repräsentiert eine gewichtete Verbindung zwischen zwei Vertices.

use super::GraphError;
use serde::{Deserialize, Serialize};

/// Standard-Gewicht neu gezogener Kanten.
pub const DEFAULT_EDGE_WEIGHT: f64 = 1.0;

/// Globaler Graph-Modus
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GraphMode {
    /// Ungerichtet: (a,b) und (b,a) gelten als dieselbe Kante
    #[default]
    Undirected,
    /// Gerichtet: nur die exakte Orientierung zählt
    Directed,
}

impl GraphMode {
    /// Gibt `true` zurück für den gerichteten Modus.
    pub fn is_directed(self) -> bool {
        matches!(self, Self::Directed)
    }

    /// Anzeigename für UI und Logs
    pub fn label(self) -> &'static str {
        match self {
            Self::Undirected => "Undirected",
            Self::Directed => "Directed",
        }
    }
}

/// Eine Kante zwischen zwei Vertex-IDs
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    /// Start-Vertex-ID
    pub from: usize,
    /// End-Vertex-ID
    pub to: usize,
    /// Gewicht (immer endlich und > 0)
    pub weight: f64,
}

impl Edge {
    /// Erstellt eine neue Kante
    pub fn new(from: usize, to: usize, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Exaktes Match auf die gespeicherte Orientierung.
    pub fn matches(&self, from: usize, to: usize) -> bool {
        self.from == from && self.to == to
    }

    /// Prüft ob die Kante das Paar im Sinne des Modus verbindet.
    pub fn connects(&self, from: usize, to: usize, mode: GraphMode) -> bool {
        match mode {
            GraphMode::Directed => self.matches(from, to),
            GraphMode::Undirected => self.matches(from, to) || self.matches(to, from),
        }
    }

    /// Prüft ob die Kante den Vertex als Endpunkt hat.
    pub fn touches(&self, vertex_id: usize) -> bool {
        self.from == vertex_id || self.to == vertex_id
    }
}

/// Prüft ob `weight` ein gültiges Kantengewicht ist (endlich und > 0).
pub fn is_valid_weight(weight: f64) -> bool {
    weight.is_finite() && weight > 0.0
}

/// Parst eine Benutzereingabe als Kantengewicht.
///
/// Akzeptiert nur vollständig numerischen Text (Leerraum am Rand erlaubt).
pub fn parse_weight(input: &str) -> Result<f64, GraphError> {
    match input.trim().parse::<f64>() {
        Ok(weight) if is_valid_weight(weight) => Ok(weight),
        _ => Err(GraphError::InvalidWeight {
            input: input.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undirected_connects_both_orientations() {
        let edge = Edge::new(0, 1, 1.0);
        assert!(edge.connects(1, 0, GraphMode::Undirected));
        assert!(!edge.connects(1, 0, GraphMode::Directed));
        assert!(edge.connects(0, 1, GraphMode::Directed));
    }

    #[test]
    fn weight_validation_rejects_zero_negative_and_non_finite() {
        assert!(is_valid_weight(0.5));
        assert!(!is_valid_weight(0.0));
        assert!(!is_valid_weight(-3.0));
        assert!(!is_valid_weight(f64::NAN));
        assert!(!is_valid_weight(f64::INFINITY));
    }

    #[test]
    fn parse_weight_accepts_trimmed_numbers_only() {
        assert_eq!(parse_weight(" 2.5 "), Ok(2.5));
        assert_eq!(parse_weight("5"), Ok(5.0));
        for input in ["", "abc", "3kg", "0", "-1", "inf", "NaN"] {
            assert_eq!(
                parse_weight(input),
                Err(GraphError::InvalidWeight {
                    input: input.to_string()
                }),
                "Eingabe {input:?} muss abgelehnt werden"
            );
        }
    }
}
