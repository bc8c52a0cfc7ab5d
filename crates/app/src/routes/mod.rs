pub mod about;
pub mod dashboard;
pub mod features;
pub mod home;
pub mod lawyers;
pub mod login;
pub mod not_found;
pub mod register;

use dioxus::prelude::*;
use dioxus_free_icons::icons::ld_icons::{
    LdBriefcase, LdCalendar, LdLayoutDashboard, LdScale, LdSearch, LdUserCheck,
};
use dioxus_free_icons::Icon;
use shared_types::UserRole;
use shared_ui::{
    Sidebar, SidebarContent, SidebarFooter, SidebarHeader, SidebarMenu, SidebarMenuButton,
    SidebarMenuItem, Switch, SwitchThumb,
};

use crate::auth::{use_api, use_auth, use_user_role};

use about::About;
use dashboard::Dashboard;
use features::Features;
use home::Home;
use login::Login;
use not_found::NotFound;
use register::Register;

/// Application routes.
#[derive(Clone, Routable, Debug, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/features")]
    Features {},
    #[route("/about")]
    About {},
    #[route("/lawyers")]
    LawyerDirectory {},
    #[route("/login")]
    Login {},
    #[route("/register")]
    Register {},
    #[layout(AuthGuard)]
    #[layout(DashboardLayout)]
    #[route("/dashboard")]
    Dashboard {},
    #[route("/dashboard/lawyers")]
    DashboardLawyers {},
    #[route("/dashboard/consultations")]
    Consultations {},
    #[route("/dashboard/cases")]
    Cases {},
    #[route("/dashboard/profile")]
    Profile {},
    #[end_layout]
    #[end_layout]
    #[route("/:..route")]
    NotFound { route: Vec<String> },
}

#[component]
fn LawyerDirectory() -> Element {
    lawyers::LawyerDirectoryPage()
}

#[component]
fn DashboardLawyers() -> Element {
    dashboard::lawyers::DashboardLawyersPage()
}

#[component]
fn Consultations() -> Element {
    dashboard::consultations::ConsultationsPage()
}

#[component]
fn Cases() -> Element {
    dashboard::cases::CasesPage()
}

#[component]
fn Profile() -> Element {
    dashboard::profile::ProfilePage()
}

/// Auth guard layout — redirects to /login when no user is signed in.
///
/// Only the tokens persist across reloads; the in-memory profile does not,
/// so a fresh page load always passes through the login screen.
#[component]
fn AuthGuard() -> Element {
    let auth = use_auth();

    if !auth.is_authenticated() {
        navigator().push(Route::Login {});
        return rsx! {
            div { class: "auth-guard-loading",
                p { "Redirecting to login..." }
            }
        };
    }

    rsx! { Outlet::<Route> {} }
}

/// Dashboard shell with sidebar navigation and a top bar.
#[component]
fn DashboardLayout() -> Element {
    let route: Route = use_route();
    let mut auth = use_auth();
    let api = use_api();
    let role = use_user_role();

    let mut theme_state = use_context_provider(|| shared_ui::theme::ThemeState {
        is_dark: Signal::new(false),
    });

    let page_title = match &route {
        Route::Dashboard {} => "Dashboard",
        Route::DashboardLawyers {} => "Find a Lawyer",
        Route::Consultations {} => "Consultations",
        Route::Cases {} => "My Cases",
        Route::Profile {} => "Profile",
        _ => "",
    };

    let display_name = auth
        .current_user
        .read()
        .as_ref()
        .map(|u| u.name.clone())
        .unwrap_or_else(|| "Guest".to_string());
    let initials: String = display_name
        .split_whitespace()
        .filter_map(|w| w.chars().next())
        .take(2)
        .collect::<String>()
        .to_uppercase();

    let handle_sign_out = move |_| {
        let api = api.clone();
        spawn(async move {
            if let Err(err) = api.logout().await {
                tracing::warn!(error = %err, "logout request failed");
            }
        });
        auth.clear_auth();
        navigator().push(Route::Home {});
    };

    rsx! {
        document::Link { rel: "stylesheet", href: asset!("./layout.css") }

        div { class: "dashboard-shell",
            Sidebar {
                SidebarHeader {
                    Icon::<LdScale> { icon: LdScale, width: 20, height: 20 }
                    "LegalEase"
                }

                SidebarContent {
                    SidebarMenu {
                        SidebarMenuItem {
                            Link { to: Route::Dashboard {},
                                SidebarMenuButton { active: matches!(route, Route::Dashboard {}),
                                    Icon::<LdLayoutDashboard> { icon: LdLayoutDashboard, width: 18, height: 18 }
                                    "Dashboard"
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::DashboardLawyers {},
                                SidebarMenuButton { active: matches!(route, Route::DashboardLawyers {}),
                                    Icon::<LdSearch> { icon: LdSearch, width: 18, height: 18 }
                                    "Find a Lawyer"
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Consultations {},
                                SidebarMenuButton { active: matches!(route, Route::Consultations {}),
                                    Icon::<LdCalendar> { icon: LdCalendar, width: 18, height: 18 }
                                    "Consultations"
                                }
                            }
                        }
                        if role == UserRole::Lawyer {
                            SidebarMenuItem {
                                Link { to: Route::Cases {},
                                    SidebarMenuButton { active: matches!(route, Route::Cases {}),
                                        Icon::<LdBriefcase> { icon: LdBriefcase, width: 18, height: 18 }
                                        "My Cases"
                                    }
                                }
                            }
                        }
                        SidebarMenuItem {
                            Link { to: Route::Profile {},
                                SidebarMenuButton { active: matches!(route, Route::Profile {}),
                                    Icon::<LdUserCheck> { icon: LdUserCheck, width: 18, height: 18 }
                                    "Profile"
                                }
                            }
                        }
                    }
                }

                SidebarFooter {
                    div { class: "sidebar-footer-row",
                        span { class: "sidebar-footer-label", "Dark Mode" }
                        Switch {
                            checked: (theme_state.is_dark)(),
                            on_checked_change: move |checked: bool| {
                                theme_state.is_dark.set(checked);
                                theme_state.apply();
                            },
                            SwitchThumb {}
                        }
                    }
                    button {
                        class: "sidebar-signout",
                        onclick: handle_sign_out,
                        "Sign Out"
                    }
                }
            }

            div { class: "dashboard-main",
                header { class: "dashboard-topbar",
                    span { class: "dashboard-topbar-title", "{page_title}" }
                    div { class: "dashboard-topbar-user",
                        span { class: "dashboard-topbar-name", "{display_name}" }
                        span { class: "dashboard-topbar-avatar", "{initials}" }
                    }
                }

                div { class: "page-content",
                    Outlet::<Route> {}
                }
            }
        }
    }
}
