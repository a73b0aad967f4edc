use lesson_core::visualizer::{VisualizerMode, VisualizerSnapshot};

use super::copy;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CellIcon {
    Star,
    Heart,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ColumnButtonVm {
    pub columns: u32,
    pub label: String,
    pub selected: bool,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DividerVm {
    pub columns: u32,
    pub cells: Vec<CellIcon>,
    pub grid_class: &'static str,
    pub caption: String,
    /// Empty in autoplay mode.
    pub buttons: Vec<ColumnButtonVm>,
    pub extra_factor_note: Option<String>,
}

#[must_use]
pub fn map_divider(snapshot: &VisualizerSnapshot, max_selectable: u32) -> DividerVm {
    let cells = (0..snapshot.number)
        .map(|i| if i % 2 == 0 { CellIcon::Star } else { CellIcon::Heart })
        .collect();
    let grid_class = if snapshot.layout.is_exact {
        "divider-grid exact"
    } else {
        "divider-grid uneven"
    };

    let (caption, buttons) = match snapshot.mode {
        VisualizerMode::Autoplay => {
            let caption = snapshot
                .explanation
                .map(|category| copy::explanation_text(snapshot.columns, category))
                .unwrap_or_default();
            (caption, Vec::new())
        }
        VisualizerMode::Manual => {
            let exact_mark = if snapshot.layout.is_exact { " ✅" } else { " ❌" };
            let buttons = (1..=snapshot.number.min(max_selectable))
                .map(|columns| {
                    let selected = columns == snapshot.columns;
                    let mut label = copy::column_button_label(columns);
                    if selected {
                        label.push_str(exact_mark);
                    }
                    ColumnButtonVm {
                        columns,
                        label,
                        selected,
                    }
                })
                .collect();
            (copy::DIVIDER_MANUAL_PROMPT.to_string(), buttons)
        }
    };

    DividerVm {
        columns: snapshot.columns,
        cells,
        grid_class,
        caption,
        buttons,
        extra_factor_note: snapshot
            .shows_extra_factor
            .then(|| copy::extra_factor_note(snapshot.columns)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lesson_core::visualizer::DivisorVisualizer;

    #[test]
    fn autoplay_caption_is_blank_until_first_step() {
        let mut vis = DivisorVisualizer::new(4, VisualizerMode::Autoplay).unwrap();
        let vm = map_divider(&vis.snapshot(), 6);
        assert_eq!(vm.caption, "");
        assert!(vm.buttons.is_empty());
        assert_eq!(vm.cells.len(), 4);

        vis.step();
        vis.step();
        let vm = map_divider(&vis.snapshot(), 6);
        assert!(vm.caption.contains("2 列"));
        assert_eq!(vm.grid_class, "divider-grid exact");
    }

    #[test]
    fn manual_buttons_mark_the_selected_choice() {
        let mut vis = DivisorVisualizer::new(9, VisualizerMode::Manual).unwrap();
        vis.set_columns(2).unwrap();
        let vm = map_divider(&vis.snapshot(), 6);

        assert_eq!(vm.buttons.len(), 6);
        let selected: Vec<_> = vm.buttons.iter().filter(|b| b.selected).collect();
        assert_eq!(selected.len(), 1);
        assert_eq!(selected[0].label, "分 2 组 ❌");
        assert_eq!(vm.extra_factor_note, None);
        assert_eq!(vm.grid_class, "divider-grid uneven");
    }

    #[test]
    fn manual_exact_fit_adds_note() {
        let mut vis = DivisorVisualizer::new(6, VisualizerMode::Manual).unwrap();
        vis.set_columns(3).unwrap();
        let vm = map_divider(&vis.snapshot(), 6);
        assert!(vm.extra_factor_note.unwrap().contains('3'));
    }

    #[test]
    fn cells_alternate_icons() {
        let vis = DivisorVisualizer::new(3, VisualizerMode::Manual).unwrap();
        let vm = map_divider(&vis.snapshot(), 6);
        assert_eq!(vm.cells, vec![CellIcon::Star, CellIcon::Heart, CellIcon::Star]);
        assert_eq!(vm.buttons.len(), 3);
    }
}
