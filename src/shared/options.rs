//! Zentrale Konfiguration für den Graph-Editor.
//!
//! `EditorOptions` enthält alle zur Laufzeit änderbaren Werte.
//! Die `const`-Werte bleiben als Fallback/Default erhalten.

use crate::core::{AdjacencyFormat, GraphMode, DEFAULT_EDGE_WEIGHT};
use serde::{Deserialize, Serialize};

// ── Vertices ────────────────────────────────────────────────────────

/// Vertex-Radius in Pixeln (Darstellung, Hit-Test und Clamp-Rand).
pub const VERTEX_RADIUS: f32 = 20.0;
/// Füllfarbe normaler Vertices (RGBA: Weiß).
pub const VERTEX_COLOR: [f32; 4] = [1.0, 1.0, 1.0, 1.0];
/// Füllfarbe des Vertex, der auf den zweiten Endpunkt wartet (RGBA: Hellrot).
pub const VERTEX_PENDING_COLOR: [f32; 4] = [1.0, 0.6, 0.6, 1.0];
/// Umrissfarbe der Vertices (RGBA: Dunkelgrau).
pub const VERTEX_OUTLINE_COLOR: [f32; 4] = [0.2, 0.2, 0.2, 1.0];
/// Schriftgröße der Vertex-IDs.
pub const VERTEX_FONT_SIZE: f32 = 16.0;

// ── Edges ───────────────────────────────────────────────────────────

/// Toleranz in Pixeln für Klicks auf eine Kante.
pub const EDGE_HIT_THRESHOLD: f32 = 5.0;
/// Linienfarbe der Kanten (RGBA: Grau).
pub const EDGE_COLOR: [f32; 4] = [0.4, 0.4, 0.4, 1.0];
/// Pfeil-Länge im gerichteten Modus.
pub const ARROW_LENGTH: f32 = 15.0;
/// Schriftgröße der Gewichts-Labels.
pub const WEIGHT_FONT_SIZE: f32 = 14.0;

// ── Fläche ──────────────────────────────────────────────────────────

/// Standard-Größe der Zeichenfläche, bis der Viewport gemeldet wird.
pub const SURFACE_SIZE: [f32; 2] = [800.0, 600.0];

// ── Laufzeit-Optionen (serialisierbar) ─────────────────────────────

/// Alle zur Laufzeit änderbaren Editor-Optionen.
/// Wird als `graph_adjacency_editor.toml` neben der Binary gespeichert.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EditorOptions {
    // ── Vertices ────────────────────────────────────────────────
    /// Vertex-Radius in Pixeln
    pub vertex_radius: f32,
    /// Füllfarbe normaler Vertices
    pub vertex_color: [f32; 4],
    /// Füllfarbe des ausstehenden Kanten-Startpunkts
    pub vertex_pending_color: [f32; 4],
    /// Umrissfarbe der Vertices
    pub vertex_outline_color: [f32; 4],
    /// Schriftgröße der Vertex-IDs
    pub vertex_font_size: f32,

    // ── Edges ───────────────────────────────────────────────────
    /// Klick-Toleranz für Kanten in Pixeln
    pub edge_hit_threshold: f32,
    /// Gewicht neu gezogener Kanten
    pub default_edge_weight: f64,
    /// Linienfarbe der Kanten
    pub edge_color: [f32; 4],
    /// Pfeil-Länge im gerichteten Modus
    pub arrow_length: f32,
    /// Schriftgröße der Gewichts-Labels
    pub weight_font_size: f32,

    // ── Start-Zustand ───────────────────────────────────────────
    /// Graph-Modus beim Start
    pub default_mode: GraphMode,
    /// Export-Format beim Start
    pub default_format: AdjacencyFormat,
    /// Kantengewichte beim Start anzeigen
    pub show_weights: bool,
    /// Flächengröße bis zum ersten Viewport-Resize
    pub surface_size: [f32; 2],
}

impl Default for EditorOptions {
    fn default() -> Self {
        Self {
            vertex_radius: VERTEX_RADIUS,
            vertex_color: VERTEX_COLOR,
            vertex_pending_color: VERTEX_PENDING_COLOR,
            vertex_outline_color: VERTEX_OUTLINE_COLOR,
            vertex_font_size: VERTEX_FONT_SIZE,

            edge_hit_threshold: EDGE_HIT_THRESHOLD,
            default_edge_weight: DEFAULT_EDGE_WEIGHT,
            edge_color: EDGE_COLOR,
            arrow_length: ARROW_LENGTH,
            weight_font_size: WEIGHT_FONT_SIZE,

            default_mode: GraphMode::default(),
            default_format: AdjacencyFormat::default(),
            show_weights: true,
            surface_size: SURFACE_SIZE,
        }
    }
}

impl EditorOptions {
    /// Lädt Optionen aus einer TOML-Datei. Bei Fehler: Standardwerte.
    pub fn load_from_file(path: &std::path::Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_toml_str(&content) {
                Ok(opts) => {
                    log::info!("Optionen geladen aus: {}", path.display());
                    opts
                }
                Err(e) => {
                    log::warn!("Optionen-Datei fehlerhaft, verwende Standardwerte: {:#}", e);
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Keine Optionen-Datei gefunden, verwende Standardwerte");
                Self::default()
            }
        }
    }

    /// Parst Optionen aus TOML-Text und korrigiert unbrauchbare Werte.
    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let mut opts: Self = toml::from_str(content)?;
        opts.sanitize();
        Ok(opts)
    }

    /// Speichert Optionen als TOML-Datei.
    pub fn save_to_file(&self, path: &std::path::Path) -> anyhow::Result<()> {
        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        log::info!("Optionen gespeichert nach: {}", path.display());
        Ok(())
    }

    /// Ermittelt den Pfad zur Optionen-Datei neben der Binary.
    pub fn config_path() -> std::path::PathBuf {
        std::env::current_exe()
            .unwrap_or_else(|_| std::path::PathBuf::from("graph_adjacency_editor"))
            .parent()
            .unwrap_or_else(|| std::path::Path::new("."))
            .join("graph_adjacency_editor.toml")
    }

    /// Ersetzt negative Radien/Toleranzen und ungültige Standardgewichte durch Defaults.
    fn sanitize(&mut self) {
        if !(self.vertex_radius.is_finite() && self.vertex_radius > 0.0) {
            log::warn!(
                "vertex_radius {} ungültig, verwende {}",
                self.vertex_radius,
                VERTEX_RADIUS
            );
            self.vertex_radius = VERTEX_RADIUS;
        }
        if !(self.edge_hit_threshold.is_finite() && self.edge_hit_threshold >= 0.0) {
            log::warn!(
                "edge_hit_threshold {} ungültig, verwende {}",
                self.edge_hit_threshold,
                EDGE_HIT_THRESHOLD
            );
            self.edge_hit_threshold = EDGE_HIT_THRESHOLD;
        }
        if !crate::core::is_valid_weight(self.default_edge_weight) {
            log::warn!(
                "default_edge_weight {} ungültig, verwende {}",
                self.default_edge_weight,
                DEFAULT_EDGE_WEIGHT
            );
            self.default_edge_weight = DEFAULT_EDGE_WEIGHT;
        }
    }
}
