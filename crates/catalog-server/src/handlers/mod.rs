pub mod product_handlers;
pub mod reference_handlers;

use serde::Serialize;

/// `{ "message": ..., <payload fields> }`.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub message: &'static str,
    #[serde(flatten)]
    pub payload: T,
}

impl<T: Serialize> Envelope<T> {
    pub fn new(message: &'static str, payload: T) -> Self {
        Self { message, payload }
    }
}
