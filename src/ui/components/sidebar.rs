use crate::common::{ContactId, format_time};
use crate::ui::state::AppState;

#[derive(Default)]
pub struct SidebarActions {
    pub selected_contact: Option<ContactId>,
}

pub fn render(ui: &mut egui::Ui, state: &mut AppState) -> SidebarActions {
    let mut actions = SidebarActions::default();

    ui.add(
        egui::TextEdit::singleline(&mut state.search_query)
            .hint_text("Search contacts...")
            .desired_width(f32::INFINITY),
    );
    ui.separator();

    ui.label(egui::RichText::new("RECENT CHATS").small().weak());

    egui::ScrollArea::vertical()
        .auto_shrink([false, true])
        .max_height(ui.available_height() - 60.0)
        .show(ui, |ui| {
            for contact in state.filtered_contacts() {
                let selected = state.is_selected(&contact.id);
                let clicked = ui
                    .horizontal(|ui| {
                        // Trạng thái online: chấm xanh
                        let (dot, color) = if contact.online {
                            ("●", egui::Color32::GREEN)
                        } else {
                            ("○", egui::Color32::GRAY)
                        };
                        ui.colored_label(color, dot);

                        let name = egui::RichText::new(&contact.name).strong();
                        let clicked = ui.selectable_label(selected, name).clicked();

                        if let Some(last_seen) = &contact.last_seen {
                            ui.label(egui::RichText::new(format_time(last_seen)).weak().small());
                        }
                        clicked
                    })
                    .inner;

                if let Some(preview) = &contact.last_message {
                    ui.label(egui::RichText::new(preview).weak().small());
                }
                ui.separator();

                if clicked {
                    actions.selected_contact = Some(contact.id.clone());
                }
            }
        });

    ui.separator();
    ui.horizontal(|ui| {
        ui.colored_label(egui::Color32::GREEN, "●");
        ui.vertical(|ui| {
            ui.label(egui::RichText::new(&state.user_name).strong());
            ui.label(egui::RichText::new("Online").weak().small());
        });
    });

    actions
}
