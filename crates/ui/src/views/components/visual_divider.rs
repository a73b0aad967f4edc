use dioxus::prelude::*;
use lesson_core::visualizer::{VisualizerMode, VisualizerSnapshot};

use crate::views::LessonHandle;
use crate::vm::{CellIcon, copy, map_divider};

/// Grid of `number` items arranged in the snapshot's column count.
#[component]
pub fn VisualDivider(snapshot: VisualizerSnapshot) -> Element {
    let handle = use_context::<LessonHandle>();
    let vm = map_divider(&snapshot, handle.max_selectable_columns());
    let grid_style = format!("grid-template-columns: repeat({}, 1fr);", vm.columns);
    let autoplay = snapshot.mode == VisualizerMode::Autoplay;
    let mode_label = if autoplay {
        copy::MANUAL_BUTTON
    } else {
        copy::AUTOPLAY_BUTTON
    };

    let cells = vm.cells.iter().enumerate().map(|(idx, icon)| {
        let glyph = match icon {
            CellIcon::Star => "⭐",
            CellIcon::Heart => "❤️",
        };
        rsx! {
            span { key: "{idx}", class: "divider-cell", "{glyph}" }
        }
    });

    let buttons = vm.buttons.iter().map(|button| {
        let columns = button.columns;
        let class = if button.selected {
            "btn divider-choice selected"
        } else {
            "btn divider-choice"
        };
        rsx! {
            button {
                key: "{columns}",
                class: "{class}",
                r#type: "button",
                onclick: move |_| handle.set_columns(columns),
                "{button.label}"
            }
        }
    });

    rsx! {
        section { class: "divider",
            div { class: "{vm.grid_class}", style: "{grid_style}", {cells} }
            p { class: "divider-caption", "{vm.caption}" }
            if !vm.buttons.is_empty() {
                div { class: "divider-choices", {buttons} }
            }
            if let Some(note) = vm.extra_factor_note.as_ref() {
                p { class: "divider-note", "{note}" }
            }
            button {
                class: "btn btn-secondary divider-mode",
                r#type: "button",
                onclick: move |_| handle.set_autoplay(!autoplay),
                "{mode_label}"
            }
        }
    }
}
