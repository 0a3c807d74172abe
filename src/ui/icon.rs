use leptos::prelude::*;

#[component]
pub fn Icon(
    /// Icon file name under /icons, without the .svg extension
    name: &'static str,
    /// CSS classes
    #[prop(default = "w-5 h-5")]
    class: &'static str,
) -> impl IntoView {
    let icon_path = format!("/icons/{}.svg", name);

    view! {
        <img
            src=icon_path
            class=class
            alt=name
            draggable=false
        />
    }
}

/// Icon names shipped in public/icons
pub mod icons {
    pub const PAW: &str = "paw";
    pub const CALENDAR: &str = "calendar";
    pub const CLIPBOARD: &str = "clipboard";
    pub const USERS: &str = "users";
    pub const BELL: &str = "bell";
    pub const MAIL: &str = "mail";
    pub const LOGOUT: &str = "logout";
    pub const PLUS: &str = "plus";
    pub const EDIT: &str = "edit";
    pub const TRASH: &str = "trash";
    pub const CHECK: &str = "check";
    pub const ALERT_CIRCLE: &str = "alert-circle";
    pub const LOADER: &str = "loader";
    pub const CHART: &str = "chart";
    pub const PHONE: &str = "phone";
    pub const MAP_PIN: &str = "map-pin";
    pub const DOCUMENT_TEXT: &str = "document-text";
}
