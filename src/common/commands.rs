use super::types::ContactId;

/// Lệnh UI gửi xuống worker trả lời tự động.
#[derive(Debug, Clone)]
pub enum ResponderCommand {
    /// Lên lịch một câu trả lời cho tin nhắn vừa gửi
    /// - contact_id: cuộc hội thoại sẽ nhận câu trả lời
    /// - text: nội dung người dùng vừa gửi
    ScheduleReply { contact_id: ContactId, text: String },
}
