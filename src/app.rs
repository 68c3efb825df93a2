//! Study Tracker Frontend App
//!
//! Root component: provides the app context and switches between the
//! study task form and the assay type field form.

use leptos::prelude::*;

use crate::components::{AssayTypeForm, NoticeBar, StudyTasksForm};
use crate::config::AppConfig;
use crate::context::AppContext;

/// Which editor is shown
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum EditorTab {
    StudyTasks,
    AssayTypeFields,
}

impl EditorTab {
    const ALL: [EditorTab; 2] = [EditorTab::StudyTasks, EditorTab::AssayTypeFields];

    fn label(&self) -> &'static str {
        match self {
            EditorTab::StudyTasks => "Study tasks",
            EditorTab::AssayTypeFields => "Assay type fields",
        }
    }
}

#[component]
pub fn App(mut config: AppConfig) -> impl IntoView {
    let study = config.study.take();
    let assay_type = config.assay_type.take();

    // Provide context to all children
    provide_context(AppContext::new(config));

    let (tab, set_tab) = signal(EditorTab::StudyTasks);

    view! {
        <div class="app-layout">
            <NoticeBar />

            <main class="main-content">
                <h1>"Study Tracker"</h1>

                <div class="editor-tab-bar">
                    {EditorTab::ALL.iter().map(|t| {
                        let t = *t;
                        view! {
                            <button
                                class=move || if tab.get() == t { "editor-tab active" } else { "editor-tab" }
                                on:click=move |_| set_tab.set(t)
                            >
                                {t.label()}
                            </button>
                        }
                    }).collect_view()}
                </div>

                // Switching tabs unmounts the other form, discarding its draft
                {move || match tab.get() {
                    EditorTab::StudyTasks => view! { <StudyTasksForm initial=study.clone() /> }.into_any(),
                    EditorTab::AssayTypeFields => view! { <AssayTypeForm initial=assay_type.clone() /> }.into_any(),
                }}
            </main>
        </div>
    }
}
