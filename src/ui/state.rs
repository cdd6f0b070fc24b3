use std::collections::HashMap;

use chrono::{DateTime, Duration, Local};

use crate::common::{ChatMessage, Contact, ContactId, MessageId, Sender};

/// Tin nhắn người dùng vừa gửi, chờ worker sinh câu trả lời.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingReply {
    pub contact_id: ContactId,
    pub text: String,
}

/// Trạng thái cục bộ của UI.
pub struct AppState {
    pub contacts: Vec<Contact>,
    selected: Option<ContactId>,
    /// Mỗi liên hệ có một cuộc hội thoại riêng, chỉ được nối thêm
    conversations: HashMap<ContactId, Vec<ChatMessage>>,
    next_message_id: u64,
    dark_mode: bool,
    pub input_text: String,
    pub search_query: String,
    pub user_name: String,
}

impl AppState {
    pub fn new(user_name: String, dark_mode: bool) -> Self {
        Self {
            contacts: Vec::new(),
            selected: None,
            conversations: HashMap::new(),
            next_message_id: 1,
            dark_mode,
            input_text: String::new(),
            search_query: String::new(),
            user_name,
        }
    }

    /// Trạng thái lúc khởi động: năm liên hệ mẫu, chọn sẵn liên hệ đầu tiên
    /// cùng một đoạn hội thoại mẫu.
    pub fn with_sample_data(user_name: String, dark_mode: bool, now: DateTime<Local>) -> Self {
        let mut state = Self::new(user_name, dark_mode);

        let hours_ago = |hours: i64| Some(now - Duration::hours(hours));
        let sample_contacts = [
            ("1", "John Doe", "Hey, how are you?", hours_ago(0), true),
            ("2", "Jane Smith", "Can we meet tomorrow?", hours_ago(1), false),
            ("3", "Mike Johnson", "Thanks for your help!", hours_ago(2), true),
            (
                "4",
                "Sarah Williams",
                "I'll send you the files soon",
                hours_ago(24),
                false,
            ),
            ("5", "David Brown", "Let's discuss the project", hours_ago(48), true),
        ];
        state.contacts = sample_contacts
            .into_iter()
            .map(|(id, name, preview, last_seen, online)| Contact {
                id: ContactId::new(id),
                name: name.to_string(),
                last_message: Some(preview.to_string()),
                last_seen,
                online,
            })
            .collect();

        let first = state.contacts[0].id.clone();
        state.selected = Some(first.clone());

        let sample_messages = [
            (Sender::Contact, "Hey there!", 3600),
            (Sender::User, "Hi! How are you?", 3500),
            (Sender::Contact, "I'm doing great, thanks for asking!", 3400),
            (Sender::Contact, "What about you?", 3300),
            (Sender::User, "Pretty good! Just working on some projects.", 3200),
            (
                Sender::Contact,
                "That sounds interesting. What kind of projects?",
                3100,
            ),
            (
                Sender::User,
                "Mostly web development stuff. Building a chat app actually!",
                3000,
            ),
            (Sender::Contact, "That's cool! Like this one?", 2900),
            (Sender::User, "Exactly! 😊", 2800),
        ];
        for (sender, text, seconds_ago) in sample_messages {
            state.append(
                &first,
                sender,
                text.to_string(),
                now - Duration::seconds(seconds_ago),
            );
        }

        state
    }

    pub fn selected_contact(&self) -> Option<&Contact> {
        let selected = self.selected.as_ref()?;
        self.contacts.iter().find(|contact| &contact.id == selected)
    }

    pub fn is_selected(&self, contact_id: &ContactId) -> bool {
        self.selected.as_ref() == Some(contact_id)
    }

    pub fn select_contact(&mut self, contact_id: &ContactId) {
        if self.contact(contact_id).is_none() {
            log::warn!("Ignoring selection of unknown contact {}", contact_id.as_str());
            return;
        }
        self.selected = Some(contact_id.clone());
    }

    /// Tin nhắn của liên hệ đang được chọn, theo thứ tự tạo.
    pub fn active_conversation(&self) -> &[ChatMessage] {
        self.selected
            .as_ref()
            .map(|contact_id| self.conversation(contact_id))
            .unwrap_or_default()
    }

    pub fn conversation(&self, contact_id: &ContactId) -> &[ChatMessage] {
        self.conversations
            .get(contact_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    pub fn can_submit(&self) -> bool {
        self.selected.is_some() && !self.input_text.trim().is_empty()
    }

    /// Gửi nội dung đang nhập. Nội dung rỗng (sau khi trim) bị bỏ qua và
    /// ô nhập giữ nguyên.
    pub fn submit_input(&mut self, now: DateTime<Local>) -> Option<PendingReply> {
        if !self.can_submit() {
            return None;
        }
        let contact_id = self.selected.clone()?;

        let text = std::mem::take(&mut self.input_text);
        self.append(&contact_id, Sender::User, text.clone(), now);
        log::debug!("User message queued for contact {}", contact_id.as_str());

        Some(PendingReply { contact_id, text })
    }

    /// Nối câu trả lời của liên hệ. Bỏ qua nếu liên hệ không còn tồn tại.
    pub fn append_reply(&mut self, contact_id: &ContactId, text: String, now: DateTime<Local>) {
        if self.contact(contact_id).is_none() {
            log::warn!("Dropping reply for unknown contact {}", contact_id.as_str());
            return;
        }
        self.append(contact_id, Sender::Contact, text, now);
    }

    pub fn dark_mode(&self) -> bool {
        self.dark_mode
    }

    pub fn toggle_dark_mode(&mut self) {
        self.dark_mode = !self.dark_mode;
    }

    /// Liên hệ có tên chứa chuỗi tìm kiếm (không phân biệt hoa thường).
    pub fn filtered_contacts(&self) -> impl Iterator<Item = &Contact> {
        let query = self.search_query.trim().to_lowercase();
        self.contacts.iter().filter(move |contact| {
            query.is_empty() || contact.name.to_lowercase().contains(&query)
        })
    }

    fn contact(&self, contact_id: &ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|contact| &contact.id == contact_id)
    }

    fn append(
        &mut self,
        contact_id: &ContactId,
        sender: Sender,
        text: String,
        timestamp: DateTime<Local>,
    ) {
        let id = MessageId(self.next_message_id);
        self.next_message_id += 1;

        self.conversations
            .entry(contact_id.clone())
            .or_default()
            .push(ChatMessage {
                id,
                sender,
                text,
                timestamp,
            });
    }
}
