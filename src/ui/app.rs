use chrono::{DateTime, Local};
use eframe::egui;
use tokio::sync::mpsc;
use tokio::sync::mpsc::error::TrySendError;
use tokio_util::sync::CancellationToken;

use crate::common::{ResponderCommand, ResponderEvent};
use crate::error::{ChatError, Result};

use super::components::{
    chat_area, header, input_bar,
    sidebar::{self, SidebarActions},
};
use super::state::AppState;

/// Hai đầu kênh giữa UI và worker trả lời tự động.
pub struct ResponderLink {
    command_sender: mpsc::Sender<ResponderCommand>,
    event_receiver: mpsc::Receiver<ResponderEvent>,
}

impl ResponderLink {
    pub fn new(
        command_sender: mpsc::Sender<ResponderCommand>,
        event_receiver: mpsc::Receiver<ResponderEvent>,
    ) -> Self {
        Self {
            command_sender,
            event_receiver,
        }
    }

    /// Gửi nội dung đang nhập và lên lịch câu trả lời. Trả về `Ok(false)`
    /// khi không có gì để gửi. Chỗ trong kênh được giữ trước khi nối tin
    /// nhắn, nên lỗi kênh không để lại tin nhắn nào trong hội thoại.
    pub fn submit(&self, state: &mut AppState, now: DateTime<Local>) -> Result<bool> {
        if !state.can_submit() {
            return Ok(false);
        }

        let permit = self.command_sender.try_reserve().map_err(|err| match err {
            TrySendError::Full(()) => ChatError::ResponderBusy,
            TrySendError::Closed(()) => ChatError::ResponderUnavailable,
        })?;

        let Some(pending) = state.submit_input(now) else {
            return Ok(false);
        };
        permit.send(ResponderCommand::ScheduleReply {
            contact_id: pending.contact_id,
            text: pending.text,
        });
        Ok(true)
    }

    /// Nối mọi câu trả lời đã sẵn sàng, đóng dấu thời gian `now`.
    pub fn drain_replies(&mut self, state: &mut AppState, now: DateTime<Local>) -> usize {
        let mut appended = 0;
        while let Ok(event) = self.event_receiver.try_recv() {
            match event {
                ResponderEvent::ReplyReady { contact_id, text } => {
                    state.append_reply(&contact_id, text, now);
                    appended += 1;
                }
            }
        }
        appended
    }
}

pub struct ChatApp {
    state: AppState,
    title: String,
    link: ResponderLink,
    /// Huỷ worker khi cửa sổ bị đóng để không còn câu trả lời "muộn"
    shutdown: CancellationToken,
}

impl ChatApp {
    pub fn new(
        _cc: &eframe::CreationContext<'_>,
        state: AppState,
        title: String,
        link: ResponderLink,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            state,
            title,
            link,
            shutdown,
        }
    }

    fn submit(&mut self) {
        if let Err(err) = self.link.submit(&mut self.state, Local::now()) {
            log::warn!("Failed to schedule reply: {err}");
        }
    }
}

impl eframe::App for ChatApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.link.drain_replies(&mut self.state, Local::now());

        ctx.set_visuals(if self.state.dark_mode() {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if header::render(ui, &self.title, self.state.dark_mode()) {
                self.state.toggle_dark_mode();
            }
        });

        egui::SidePanel::left("contact_sidebar")
            .resizable(true)
            .default_width(260.0)
            .show(ctx, |ui| {
                let actions: SidebarActions = sidebar::render(ui, &mut self.state);
                if let Some(contact_id) = actions.selected_contact {
                    self.state.select_contact(&contact_id);
                }
            });

        let mut submitted = false;
        egui::CentralPanel::default().show(ctx, |ui| {
            let Some(contact) = self.state.selected_contact() else {
                chat_area::render_empty(ui);
                return;
            };
            chat_area::render_header(ui, contact);
            ui.separator();

            let input_height = 40.0;
            ui.allocate_ui(
                egui::vec2(ui.available_width(), ui.available_height() - input_height),
                |ui| chat_area::render(ui, self.state.active_conversation()),
            );

            ui.separator();
            submitted = input_bar::render(ui, &mut self.state.input_text);
        });
        if submitted {
            self.submit();
        }

        // Worker trả lời qua channel, cần vẽ lại để nhận sự kiện
        ctx.request_repaint_after(std::time::Duration::from_millis(100));
    }
}

impl Drop for ChatApp {
    fn drop(&mut self) {
        self.shutdown.cancel();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    use crate::common::{ContactId, Sender};
    use crate::responder::generator::FALLBACK_REPLIES;
    use crate::responder::{AutoResponder, ResponseGenerator};

    fn sample_state() -> AppState {
        AppState::with_sample_data("Tester".to_string(), false, Local::now())
    }

    fn spawn_responder(delay_ms: u64) -> (ResponderLink, CancellationToken) {
        let (command_tx, command_rx) = mpsc::channel(16);
        let (event_tx, event_rx) = mpsc::channel(16);
        let cancel = CancellationToken::new();
        let responder = AutoResponder::new(
            command_rx,
            event_tx,
            ResponseGenerator::seeded(11),
            Duration::from_millis(delay_ms),
            cancel.clone(),
        );
        tokio::spawn(responder.run());

        (ResponderLink::new(command_tx, event_rx), cancel)
    }

    #[tokio::test(start_paused = true)]
    async fn each_submit_gets_one_reply_in_order() {
        let (mut link, _cancel) = spawn_responder(1000);
        let mut state = sample_state();
        let start = state.active_conversation().len();
        let sent_at = Local::now();

        state.input_text = "  \t".to_string();
        assert!(!link.submit(&mut state, sent_at).unwrap());
        assert_eq!(state.active_conversation().len(), start);

        state.input_text = "Hi, can you help me?".to_string();
        assert!(link.submit(&mut state, sent_at).unwrap());
        assert_eq!(state.active_conversation().len(), start + 1);

        tokio::time::sleep(Duration::from_millis(100)).await;
        state.input_text = "random gibberish xyz".to_string();
        assert!(link.submit(&mut state, sent_at).unwrap());
        assert_eq!(link.drain_replies(&mut state, sent_at), 0);

        let first_reply_at = sent_at + chrono::Duration::seconds(1);
        tokio::time::sleep(Duration::from_millis(950)).await;
        assert_eq!(link.drain_replies(&mut state, first_reply_at), 1);

        let second_reply_at = sent_at + chrono::Duration::seconds(2);
        tokio::time::sleep(Duration::from_millis(100)).await;
        assert_eq!(link.drain_replies(&mut state, second_reply_at), 1);

        let added = &state.active_conversation()[start..];
        let senders: Vec<Sender> = added.iter().map(|message| message.sender).collect();
        assert_eq!(
            senders,
            vec![Sender::User, Sender::User, Sender::Contact, Sender::Contact]
        );
        assert_eq!(added[2].text, "Hi there! How can I help you today?");
        assert!(FALLBACK_REPLIES.iter().any(|reply| *reply == added[3].text));
        assert_eq!(added[2].timestamp, first_reply_at);
        assert_eq!(added[3].timestamp, second_reply_at);
    }

    #[tokio::test(start_paused = true)]
    async fn replies_land_in_the_conversation_they_belong_to() {
        let (mut link, _cancel) = spawn_responder(1000);
        let mut state = sample_state();

        state.input_text = "thanks".to_string();
        link.submit(&mut state, Local::now()).unwrap();
        state.select_contact(&ContactId::new("2"));

        tokio::time::sleep(Duration::from_millis(1001)).await;
        assert_eq!(link.drain_replies(&mut state, Local::now()), 1);

        assert!(state.active_conversation().is_empty());
        let first_thread = state.conversation(&ContactId::new("1"));
        assert_eq!(
            first_thread.last().map(|message| message.text.as_str()),
            Some("You're welcome! Let me know if you need anything else.")
        );
    }

    #[test]
    fn full_queue_keeps_the_message_unsent() {
        let (command_tx, _command_rx) = mpsc::channel(1);
        let (_event_tx, event_rx) = mpsc::channel(1);
        command_tx
            .try_send(ResponderCommand::ScheduleReply {
                contact_id: ContactId::new("1"),
                text: "queued".to_string(),
            })
            .unwrap();
        let link = ResponderLink::new(command_tx, event_rx);
        let mut state = sample_state();
        let start = state.active_conversation().len();

        state.input_text = "hello".to_string();
        let err = link.submit(&mut state, Local::now()).unwrap_err();

        assert!(matches!(err, ChatError::ResponderBusy));
        assert_eq!(state.active_conversation().len(), start);
        assert_eq!(state.input_text, "hello");
    }

    #[test]
    fn stopped_responder_keeps_the_message_unsent() {
        let (command_tx, command_rx) = mpsc::channel(4);
        let (_event_tx, event_rx) = mpsc::channel(4);
        drop(command_rx);
        let link = ResponderLink::new(command_tx, event_rx);
        let mut state = sample_state();
        let start = state.active_conversation().len();

        state.input_text = "hello".to_string();
        let err = link.submit(&mut state, Local::now()).unwrap_err();

        assert!(matches!(err, ChatError::ResponderUnavailable));
        assert_eq!(state.active_conversation().len(), start);
        assert_eq!(state.input_text, "hello");
    }
}
