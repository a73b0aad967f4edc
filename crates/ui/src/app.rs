use dioxus::prelude::*;

use crate::views::LessonView;
use crate::vm::copy::{APP_TITLE, LESSON_UNAVAILABLE};

#[component]
pub fn App() -> Element {
    rsx! {
        document::Stylesheet { href: asset!("/assets/style.css") }

        document::Title { "{APP_TITLE}" }

        div { class: "app-root",
            ErrorBoundary {
                handle_error: |errors: ErrorContext| rsx! {
                    div { class: "fatal",
                        h1 { "{LESSON_UNAVAILABLE}" }
                        pre { "{errors:?}" }
                    }
                },
                LessonView {}
            }
        }
    }
}
