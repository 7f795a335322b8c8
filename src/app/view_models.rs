use super::*;
use crate::model::Side;

impl WireGameApp {
    pub fn endpoint_infos(&self, side: Side) -> Vec<EndpointInfo> {
        let wires = match side {
            Side::Left => self.board.left(),
            Side::Right => self.board.right(),
        };
        wires
            .iter()
            .map(|w| EndpointInfo {
                id: w.id,
                side,
                color: w.color,
                connected: w.is_connected,
                fully_connected: self.board.is_fully_connected(side, w.id),
                partner: w.connected_to,
            })
            .collect()
    }

    pub fn top_bar_info(&self) -> TopBarInfo {
        TopBarInfo {
            time_left: self.timer.remaining(),
            dark_mode: self.settings.dark_mode,
        }
    }
}
