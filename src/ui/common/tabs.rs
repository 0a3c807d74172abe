use leptos::prelude::*;

/// Tab item definition
#[derive(Clone, PartialEq)]
pub struct TabItem {
    pub id: &'static str,
    pub label: &'static str,
    pub icon: Option<&'static str>,
}

impl TabItem {
    pub fn new(id: &'static str, label: &'static str) -> Self {
        Self {
            id,
            label,
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: &'static str) -> Self {
        self.icon = Some(icon);
        self
    }
}

/// Tab strip; the caller renders the active panel
#[component]
pub fn Tabs(
    tabs: Vec<TabItem>,
    /// Currently active tab id
    active_tab: RwSignal<&'static str>,
) -> impl IntoView {
    view! {
        <div class="tabs-container">
            <div class="tabs-list" role="tablist">
                {tabs.into_iter().map(|tab| {
                    let is_active = move || active_tab.get() == tab.id;
                    view! {
                        <button
                            class="tab-item"
                            class:tab-active=is_active
                            on:click=move |_| active_tab.set(tab.id)
                            role="tab"
                            aria-selected=move || is_active().to_string()
                        >
                            {tab.icon.map(|icon| view! {
                                <crate::ui::Icon name=icon class="tab-icon"/>
                            })}
                            <span class="tab-label">{tab.label}</span>
                        </button>
                    }
                }).collect_view()}
            </div>
        </div>
    }
}
