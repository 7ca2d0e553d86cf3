use egui::{Button, Checkbox, Color32, RichText, ScrollArea, TextEdit, Ui};
use header_filter_core::{CheckState, FilterMenu, ItemIcon, Status};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub(super) enum PopupAction {
    Apply,
    Clear,
    Cancel,
}

/// Search box, checklist and buttons of one open filter menu.
pub(super) fn show(menu: &mut FilterMenu, is_active: bool, ui: &mut Ui) -> Option<PopupAction> {
    ui.set_min_width(200.0);

    let mut search = menu.search().to_string();
    if ui
        .add(TextEdit::singleline(&mut search).hint_text("Filter"))
        .changed()
    {
        menu.set_search(&search);
    }

    ScrollArea::vertical().max_height(280.0).show(ui, |ui| {
        let mut toggled = None;
        for (idx, item) in menu.visible_items() {
            ui.horizontal(|ui| {
                let mut checked = item.check_state.is_checked();
                let checkbox = Checkbox::new(&mut checked, "")
                    .indeterminate(item.check_state == CheckState::PartiallyChecked);
                if ui.add(checkbox).changed() {
                    toggled = Some(idx);
                }
                match &item.icon {
                    Some(ItemIcon::Status(status)) => {
                        ui.label(RichText::new("●").color(status_color(*status)));
                    }
                    Some(ItemIcon::Reference(icon)) => {
                        ui.label(icon.as_str());
                    }
                    None => {}
                }
                ui.label(item.label.as_str());
            });
        }
        if let Some(idx) = toggled {
            menu.toggle(idx);
        }
    });

    ui.separator();
    let mut action = None;
    ui.horizontal(|ui| {
        if ui.add_enabled(menu.can_apply(), Button::new("OK")).clicked() {
            action = Some(PopupAction::Apply);
        }
        if ui.button("Cancel").clicked() {
            action = Some(PopupAction::Cancel);
        }
        if is_active && ui.button("Clear filter").clicked() {
            action = Some(PopupAction::Clear);
        }
    });
    action
}

fn status_color(status: Status) -> Color32 {
    match status {
        Status::Owned | Status::Duplicate | Status::Replacement => Color32::from_rgb(46, 125, 50),
        Status::Ordered | Status::Bidding => Color32::from_rgb(249, 168, 37),
        Status::Sale | Status::Sold => Color32::from_rgb(21, 101, 192),
        Status::Wish => Color32::from_rgb(173, 20, 87),
        Status::Missing => Color32::from_rgb(198, 40, 40),
        Status::Demo | Status::Pass => Color32::GRAY,
    }
}
