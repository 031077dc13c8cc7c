//! Zustand der Interaktions-State-Machine als geteilter Vertrag.
//!
//! Wird von `app` geführt und von `ui` nur gelesen (Hervorhebung, Kontextmenü).

use glam::Vec2;

/// Ziel eines geöffneten Kontextmenüs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContextTarget {
    /// Vertex mit dieser ID
    Vertex(usize),
    /// Erste gespeicherte Kante mit exakt dieser Orientierung
    Edge { from: usize, to: usize },
}

impl ContextTarget {
    /// Gibt `true` zurück für Kanten-Ziele (nur dort gibt es „Gewicht setzen“).
    pub fn is_edge(&self) -> bool {
        matches!(self, Self::Edge { .. })
    }
}

/// Transienter Interaktionszustand (nicht Teil des Graph-Modells)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum InteractionState {
    /// Nichts ausgewählt
    #[default]
    Idle,
    /// Vertex gewählt, wartet auf den zweiten Endpunkt
    EdgePending { source: usize },
    /// Vertex wird verschoben
    Dragging { vertex: usize },
    /// Kontextmenü offen
    ContextMenuOpen {
        target: ContextTarget,
        /// Position des Rechtsklicks (Menü-Anker)
        anchor: Vec2,
        /// Ausstehender Kanten-Startpunkt vor dem Öffnen (wird beim Schließen wiederhergestellt)
        resume_pending: Option<usize>,
    },
}

impl InteractionState {
    /// Vertex, der auf einen zweiten Endpunkt wartet
    pub fn pending_vertex(&self) -> Option<usize> {
        match *self {
            Self::EdgePending { source } => Some(source),
            _ => None,
        }
    }

    /// Vertex, der gerade verschoben wird
    pub fn dragged_vertex(&self) -> Option<usize> {
        match *self {
            Self::Dragging { vertex } => Some(vertex),
            _ => None,
        }
    }

    /// Ziel des offenen Kontextmenüs
    pub fn context_target(&self) -> Option<ContextTarget> {
        match *self {
            Self::ContextMenuOpen { target, .. } => Some(target),
            _ => None,
        }
    }

    /// Gibt `true` zurück während eines Drags.
    pub fn is_dragging(&self) -> bool {
        matches!(self, Self::Dragging { .. })
    }

    /// Zustand nach dem Schließen des Kontextmenüs (sonst unverändert).
    pub fn after_menu_dismissed(self) -> Self {
        match self {
            Self::ContextMenuOpen {
                resume_pending: Some(source),
                ..
            } => Self::EdgePending { source },
            Self::ContextMenuOpen { .. } => Self::Idle,
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dismiss_restores_pending_vertex() {
        let state = InteractionState::ContextMenuOpen {
            target: ContextTarget::Vertex(3),
            anchor: Vec2::ZERO,
            resume_pending: Some(1),
        };
        assert_eq!(
            state.after_menu_dismissed(),
            InteractionState::EdgePending { source: 1 }
        );
    }

    #[test]
    fn dismiss_without_pending_returns_idle() {
        let state = InteractionState::ContextMenuOpen {
            target: ContextTarget::Edge { from: 0, to: 1 },
            anchor: Vec2::ZERO,
            resume_pending: None,
        };
        assert_eq!(state.after_menu_dismissed(), InteractionState::Idle);
        assert_eq!(
            InteractionState::Dragging { vertex: 2 }.after_menu_dismissed(),
            InteractionState::Dragging { vertex: 2 }
        );
    }
}
