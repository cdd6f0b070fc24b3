/// Thanh tiêu đề. Trả về `true` khi người dùng bấm nút đổi giao diện sáng/tối.
pub fn render(ui: &mut egui::Ui, title: &str, dark_mode: bool) -> bool {
    let mut toggled = false;
    ui.horizontal(|ui| {
        ui.heading(title);
        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let label = if dark_mode { "☀ Light" } else { "🌙 Dark" };
            if ui.button(label).clicked() {
                toggled = true;
            }
        });
    });
    toggled
}
