use crate::common::{ChatMessage, Contact, format_time};

pub fn render_header(ui: &mut egui::Ui, contact: &Contact) {
    ui.horizontal(|ui| {
        if contact.online {
            ui.colored_label(egui::Color32::GREEN, "●");
        } else {
            ui.colored_label(egui::Color32::GRAY, "○");
        }
        ui.vertical(|ui| {
            ui.heading(&contact.name);
            ui.label(egui::RichText::new(presence_line(contact)).weak().small());
        });
    });
}

pub fn render(ui: &mut egui::Ui, messages: &[ChatMessage]) {
    egui::ScrollArea::vertical()
        .auto_shrink([false, false])
        .stick_to_bottom(true)
        .show(ui, |ui| {
            for message in messages {
                let layout = if message.is_from_user() {
                    egui::Layout::right_to_left(egui::Align::TOP)
                } else {
                    egui::Layout::left_to_right(egui::Align::TOP)
                };
                ui.push_id(message.id.0, |ui| {
                    ui.with_layout(layout, |ui| bubble(ui, message));
                });
                ui.add_space(6.0);
            }
        });
}

pub fn render_empty(ui: &mut egui::Ui) {
    ui.centered_and_justified(|ui| {
        ui.label(
            egui::RichText::new("No conversation selected\nChoose a contact to start chatting")
                .weak(),
        );
    });
}

fn bubble(ui: &mut egui::Ui, message: &ChatMessage) {
    let fill = if message.is_from_user() {
        egui::Color32::from_rgb(79, 70, 229)
    } else {
        ui.visuals().faint_bg_color
    };
    let text_color = if message.is_from_user() {
        egui::Color32::WHITE
    } else {
        ui.visuals().text_color()
    };

    egui::Frame::new()
        .fill(fill)
        .corner_radius(egui::CornerRadius::same(8))
        .inner_margin(egui::Margin::symmetric(12, 6))
        .show(ui, |ui| {
            ui.set_max_width(320.0);
            ui.vertical(|ui| {
                ui.label(egui::RichText::new(&message.text).color(text_color));
                ui.label(
                    egui::RichText::new(format_time(&message.timestamp))
                        .small()
                        .color(text_color.gamma_multiply(0.7)),
                );
            });
        });
}

fn presence_line(contact: &Contact) -> String {
    if contact.online {
        return "Online".to_string();
    }
    match &contact.last_seen {
        Some(last_seen) => format!("Last seen {}", format_time(last_seen)),
        None => "Last seen recently".to_string(),
    }
}
