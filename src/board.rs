// src/board.rs

use crate::config::GameConfig;
use crate::model::{PendingConnection, Side, WireColor, WireEndpoint};
use thiserror::Error;

/// Motivo por el que un emparejamiento no llega al quiz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum Rejection {
    #[error("no existe el conector izquierdo {0}")]
    UnknownLeft(usize),
    #[error("no existe el conector derecho {0}")]
    UnknownRight(usize),
    #[error("el conector derecho {0} ya está ocupado")]
    TargetOccupied(usize),
    #[error("los colores no coinciden ({left} → {right})")]
    ColorMismatch { left: WireColor, right: WireColor },
}

/// Estado de las conexiones: columna izquierda (origen) y derecha (destino).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WireBoard {
    left_colors: Vec<WireColor>,
    right_colors: Vec<WireColor>,
    pub(crate) left: Vec<WireEndpoint>,
    pub(crate) right: Vec<WireEndpoint>,
}

impl WireBoard {
    pub fn new(left_colors: Vec<WireColor>, right_colors: Vec<WireColor>) -> Self {
        let mut board = Self {
            left_colors,
            right_colors,
            left: Vec::new(),
            right: Vec::new(),
        };
        board.reset();
        board
    }

    pub fn from_config(config: &GameConfig) -> Self {
        Self::new(config.left_colors.clone(), config.right_colors.clone())
    }

    /// Reconstruye ambas columnas; los ids de la derecha siguen a los de la izquierda
    pub fn reset(&mut self) {
        self.left = self
            .left_colors
            .iter()
            .enumerate()
            .map(|(i, &color)| WireEndpoint::new(i, color))
            .collect();
        let offset = self.left_colors.len();
        self.right = self
            .right_colors
            .iter()
            .enumerate()
            .map(|(i, &color)| WireEndpoint::new(i + offset, color))
            .collect();
    }

    pub fn left(&self) -> &[WireEndpoint] {
        &self.left
    }

    pub fn right(&self) -> &[WireEndpoint] {
        &self.right
    }

    pub fn left_wire(&self, id: usize) -> Option<&WireEndpoint> {
        self.left.iter().find(|w| w.id == id)
    }

    pub fn right_wire(&self, id: usize) -> Option<&WireEndpoint> {
        self.right.iter().find(|w| w.id == id)
    }

    pub fn endpoint(&self, side: Side, id: usize) -> Option<&WireEndpoint> {
        match side {
            Side::Left => self.left_wire(id),
            Side::Right => self.right_wire(id),
        }
    }

    /// Valida un arrastre izquierda → derecha. No modifica el tablero.
    pub fn propose_connection(
        &self,
        left_id: usize,
        right_id: usize,
    ) -> Result<PendingConnection, Rejection> {
        let left = self
            .left_wire(left_id)
            .ok_or(Rejection::UnknownLeft(left_id))?;
        let right = self
            .right_wire(right_id)
            .ok_or(Rejection::UnknownRight(right_id))?;

        if right.is_connected {
            return Err(Rejection::TargetOccupied(right_id));
        }
        if left.color != right.color {
            return Err(Rejection::ColorMismatch {
                left: left.color,
                right: right.color,
            });
        }

        Ok(PendingConnection {
            left_id,
            right_id,
            color: left.color,
        })
    }

    /// Aplica o descarta la conexión pendiente según la respuesta del quiz.
    /// Devuelve `true` si el tablero cambió.
    pub fn resolve_connection(&mut self, pending: PendingConnection, correct: bool) -> bool {
        if !correct {
            return false;
        }
        let PendingConnection {
            left_id, right_id, ..
        } = pending;
        // Los ids pueden venir de un tablero ya reiniciado
        if self.left_wire(left_id).is_none() || self.right_wire(right_id).is_none() {
            log::warn!("conexión pendiente {left_id}→{right_id} ya no existe en el tablero");
            return false;
        }

        // Ambas columnas en un solo paso: nunca queda un lado a medias
        for wire in &mut self.left {
            if wire.id == left_id {
                wire.is_connected = true;
                wire.connected_to = Some(right_id);
            } else if wire.connected_to == Some(right_id) {
                wire.disconnect();
            }
        }
        for wire in &mut self.right {
            if wire.id == right_id {
                wire.is_connected = true;
                wire.connected_to = Some(left_id);
            } else if wire.connected_to == Some(left_id) {
                wire.disconnect();
            }
        }
        true
    }

    /// Conectado y con la pareja también marcada como conectada
    pub fn is_fully_connected(&self, side: Side, id: usize) -> bool {
        let Some(wire) = self.endpoint(side, id) else {
            return false;
        };
        let Some(other_id) = wire.connected_to.filter(|_| wire.is_connected) else {
            return false;
        };
        let other_side = match side {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        };
        self.endpoint(other_side, other_id)
            .map(|other| other.is_connected)
            .unwrap_or(false)
    }

    pub fn all_connected(&self) -> bool {
        self.left.iter().all(|w| w.connected_to.is_some())
    }

    /// Se recalcula cada vez (en el submit), no se mantiene incrementalmente
    pub fn check_completion(&self) -> bool {
        self.left.iter().all(|wire| {
            wire.connected_to
                .and_then(|id| self.right_wire(id))
                .map(|other| other.color == wire.color)
                .unwrap_or(false)
        })
    }

    pub fn connected_count(&self) -> usize {
        self.left.iter().filter(|w| w.is_connected).count()
    }
}

impl Default for WireBoard {
    fn default() -> Self {
        Self::from_config(&GameConfig::default())
    }
}
