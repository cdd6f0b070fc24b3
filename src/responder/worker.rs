use std::collections::VecDeque;
use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;

use crate::common::{ContactId, ResponderCommand, ResponderEvent};
use crate::error::{ChatError, Result};

use super::generator::ResponseGenerator;

struct ScheduledReply {
    due: Instant,
    contact_id: ContactId,
    text: String,
}

/// Worker mô phỏng liên hệ trả lời: mỗi tin nhắn của người dùng nhận đúng
/// một câu trả lời sau `delay`, theo đúng thứ tự gửi.
pub struct AutoResponder {
    command_receiver: mpsc::Receiver<ResponderCommand>,
    event_sender: mpsc::Sender<ResponderEvent>,
    generator: ResponseGenerator,
    delay: Duration,
    cancel: CancellationToken,
}

impl AutoResponder {
    pub fn new(
        command_receiver: mpsc::Receiver<ResponderCommand>,
        event_sender: mpsc::Sender<ResponderEvent>,
        generator: ResponseGenerator,
        delay: Duration,
        cancel: CancellationToken,
    ) -> Self {
        Self {
            command_receiver,
            event_sender,
            generator,
            delay,
            cancel,
        }
    }

    /// Chạy đến khi bị huỷ, khi UI không còn nhận sự kiện, hoặc khi kênh lệnh
    /// đóng và mọi câu trả lời đã lên lịch đều được gửi.
    pub async fn run(mut self) -> Result<()> {
        let mut pending: VecDeque<ScheduledReply> = VecDeque::new();
        let mut accepting = true;

        loop {
            let next_due = pending.front().map(|reply| reply.due);

            tokio::select! {
                biased;
                _ = self.cancel.cancelled() => {
                    if !pending.is_empty() {
                        log::debug!("Discarding {} pending replies on shutdown", pending.len());
                    }
                    return Ok(());
                }
                _ = sleep_until(next_due.unwrap_or_else(Instant::now)), if next_due.is_some() => {
                    if let Some(reply) = pending.pop_front() {
                        self.deliver(reply).await?;
                    }
                }
                command = self.command_receiver.recv(), if accepting => match command {
                    Some(ResponderCommand::ScheduleReply { contact_id, text }) => {
                        log::debug!("Scheduling reply for contact {}", contact_id.as_str());
                        pending.push_back(ScheduledReply {
                            due: Instant::now() + self.delay,
                            contact_id,
                            text,
                        });
                    }
                    None => accepting = false,
                },
            }

            if !accepting && pending.is_empty() {
                log::info!("Auto-responder stopped: command channel closed");
                return Ok(());
            }
        }
    }

    async fn deliver(&mut self, reply: ScheduledReply) -> Result<()> {
        let text = self.generator.respond(&reply.text).to_string();
        let event = ResponderEvent::ReplyReady {
            contact_id: reply.contact_id,
            text,
        };

        self.event_sender
            .send(event)
            .await
            .map_err(|_| ChatError::ResponderUnavailable)
    }
}
