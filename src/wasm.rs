use wasm_bindgen::prelude::*;

use crate::session::{ClickOutcome, Session, SessionOptions};
use crate::snapshot::{FrameSnapshot, SessionRecord};
use crate::square::Square;

/// Browser-facing handle over one game session.
#[wasm_bindgen]
pub struct BoardSession {
    session: Session,
}

#[wasm_bindgen]
impl BoardSession {
    /// Start a session at the standard position.
    #[wasm_bindgen(constructor)]
    pub fn new() -> BoardSession {
        console_error_panic_hook::set_once();
        BoardSession {
            session: Session::new(),
        }
    }

    /// Log each completed move's encoding to the console.
    pub fn set_echo(&mut self, echo: bool) {
        self.session.set_options(SessionOptions { echo_fen: echo });
    }

    /// Feed a click on square `index` (0–63).
    /// Returns the new encoding when the click completed a move.
    pub fn click(&mut self, index: u8) -> Option<String> {
        let square = Square::try_from(index).ok()?;
        match self.session.click(square) {
            ClickOutcome::Moved { fen, .. } => Some(fen),
            ClickOutcome::Selected(_) | ClickOutcome::PickedUp { .. } => None,
        }
    }

    pub fn cancel(&mut self) {
        self.session.cancel();
    }

    pub fn load_fen(&mut self, fen: &str) {
        self.session.load_fen(fen);
    }

    pub fn reset(&mut self) {
        self.session.reset();
    }

    pub fn fen(&self) -> String {
        self.session.fen()
    }

    /// Highlighted square index, if any.
    pub fn selected(&self) -> Option<u8> {
        self.session.selected().map(Square::index)
    }

    pub fn white_to_move(&self) -> bool {
        self.session.board().white_to_move()
    }

    /// Row-major (linear index order) cell codes for drawing one frame.
    pub fn frame(&self) -> Vec<u8> {
        let frame = FrameSnapshot::capture(&self.session);
        Square::all().map(|sq| frame.code_at(sq)).collect()
    }

    /// Serialized session for local storage.
    pub fn save(&self) -> Result<Vec<u8>, JsValue> {
        SessionRecord::capture(&self.session)
            .to_bytes()
            .map_err(|e| JsValue::from_str(&e))
    }

    pub fn restore(&mut self, bytes: &[u8]) -> Result<(), JsValue> {
        let record = SessionRecord::from_bytes(bytes).map_err(|e| JsValue::from_str(&e))?;
        self.session = record.restore_with(self.session.options());
        Ok(())
    }
}

impl Default for BoardSession {
    fn default() -> Self {
        BoardSession::new()
    }
}
