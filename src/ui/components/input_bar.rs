/// Trả về `true` khi người dùng bấm Send hoặc nhấn Enter.
pub fn render(ui: &mut egui::Ui, input_text: &mut String) -> bool {
    let mut send = false;
    ui.horizontal(|ui| {
        let send_width = 60.0;
        let response = ui.add(
            egui::TextEdit::singleline(input_text)
                .hint_text("Type a message...")
                .desired_width(ui.available_width() - send_width),
        );
        if ui.button("Send").clicked() {
            send = true;
        }

        if response.lost_focus() && ui.input(|i| i.key_pressed(egui::Key::Enter)) {
            send = true;
            response.request_focus();
        }
    });

    send
}
