use super::types::ContactId;

/// Sự kiện từ worker gửi lên UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponderEvent {
    ReplyReady { contact_id: ContactId, text: String },
}
