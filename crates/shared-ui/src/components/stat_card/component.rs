use dioxus::prelude::*;

/// Accent color for a stat tile's icon.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum StatTone {
    #[default]
    Info,
    Warning,
    Success,
}

impl StatTone {
    fn class(&self) -> &'static str {
        match self {
            StatTone::Info => "info",
            StatTone::Warning => "warning",
            StatTone::Success => "success",
        }
    }
}

/// Dashboard stat tile: an icon beside a label and a large value.
///
/// Children render as the icon slot.
#[component]
pub fn StatCard(
    title: String,
    value: String,
    #[props(default)] tone: StatTone,
    children: Element,
) -> Element {
    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./style.css") }
        div { class: "stat-card",
            div {
                class: "stat-card-icon",
                "data-tone": tone.class(),
                {children}
            }
            div { class: "stat-card-body",
                p { class: "stat-card-title", "{title}" }
                p { class: "stat-card-value", "{value}" }
            }
        }
    }
}
