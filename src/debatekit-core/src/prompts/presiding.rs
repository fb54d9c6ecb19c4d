//! Presiding Officer assist: floor actions to JSON.

use crate::message::Message;

const PO_SYSTEM: &str = "You are a Presiding Officer assistant. From PO-style text, output a JSON of actions: recognitions (who), open/close question blocks, time notices, motions, seating/order.";

/// Ask the model to turn PO notes into a JSON object. The reply is not parsed here.
pub fn build_po_prompt(text: &str) -> Vec<Message> {
    vec![
        Message::system(PO_SYSTEM),
        Message::user(format!("PO Text:\n{text}\nReturn JSON only.")),
    ]
}
