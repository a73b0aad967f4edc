use std::cell::RefCell;
use std::rc::Rc;
use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use lesson_core::model::LessonContent;
use lesson_core::time::fixed_clock;
use services::{Clock, LessonController, LessonSettings};

use crate::context::{UiApp, build_app_context};
use crate::views::{LessonHandle, LessonStage, use_lesson_handle};

struct TestApp {
    content: Arc<LessonContent>,
}

impl UiApp for TestApp {
    fn content(&self) -> Arc<LessonContent> {
        Arc::clone(&self.content)
    }

    fn settings(&self) -> LessonSettings {
        LessonSettings::default()
    }

    fn clock(&self) -> Clock {
        fixed_clock()
    }
}

#[derive(Clone, Default)]
struct HandleSlot(Rc<RefCell<Option<LessonHandle>>>);

#[derive(Props, Clone)]
struct HarnessProps {
    app: Arc<TestApp>,
    slot: HandleSlot,
}

impl PartialEq for HarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn HarnessRoot(props: HarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    use_context_provider(|| build_app_context(&app));
    let handle = use_lesson_handle();
    props.slot.0.borrow_mut().replace(handle);
    rsx! { LessonStage {} }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    slot: HandleSlot,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }

    /// Run `f` against the live controller, then re-render.
    pub fn with_lesson(&mut self, f: impl FnOnce(&mut LessonController)) {
        let handle = self
            .slot
            .0
            .borrow()
            .as_ref()
            .copied()
            .expect("harness rebuilt before use");
        self.dom.in_runtime(|| handle.with_lesson(f));
        drive_dom(&mut self.dom);
    }

    pub fn advance_to(&mut self, steps: usize) {
        self.with_lesson(|lesson| {
            for _ in 0..steps {
                lesson.advance().expect("advance");
            }
        });
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn setup_view_harness(content: LessonContent) -> ViewHarness {
    let slot = HandleSlot::default();
    let dom = VirtualDom::new_with_props(
        HarnessRoot,
        HarnessProps {
            app: Arc::new(TestApp {
                content: Arc::new(content),
            }),
            slot: slot.clone(),
        },
    );
    let mut harness = ViewHarness { dom, slot };
    harness.rebuild();
    harness
}
