use chrono::{DateTime, Local};

/// Định danh tin nhắn, tăng dần theo thứ tự tạo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MessageId(pub u64);

/// Định danh một liên hệ trong danh sách.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ContactId(pub String);

impl ContactId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Ai là người gửi tin nhắn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sender {
    User,
    Contact,
}

/// Domain model đại diện một tin nhắn chat. Không thay đổi sau khi tạo.
#[derive(Debug, Clone)]
pub struct ChatMessage {
    pub id: MessageId,
    pub sender: Sender,
    pub text: String,
    pub timestamp: DateTime<Local>,
}

impl ChatMessage {
    pub fn is_from_user(&self) -> bool {
        self.sender == Sender::User
    }
}

/// Một người trong danh sách liên hệ, khởi tạo từ dữ liệu mẫu.
#[derive(Debug, Clone)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub last_message: Option<String>,
    pub last_seen: Option<DateTime<Local>>,
    pub online: bool,
}

/// Định dạng giờ:phút dùng trong khung chat và sidebar.
pub fn format_time(timestamp: &DateTime<Local>) -> String {
    timestamp.format("%H:%M").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn format_time_keeps_hour_and_minute() {
        let timestamp = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 42).unwrap();
        assert_eq!(format_time(&timestamp), "07:05");
    }

    #[test]
    fn message_ids_order_by_value() {
        assert!(MessageId(3) < MessageId(10));
    }
}
