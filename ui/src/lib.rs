use payloads::{APIClient, EventId};
use yew::prelude::*;
use yew_router::prelude::*;

pub mod components;
pub mod contexts;
pub mod hooks;
mod logs;
pub mod pages;
mod state;
mod theme;
pub mod utils;

pub use state::{AuthState, State};
pub use theme::ThemeToggle;

use components::ToastContainer;
use components::layout::MainLayout;
use contexts::toast::ToastProvider;
use pages::{
    AdminDashboardPage, AdminEventsPage, CreateEventPage, DashboardPage,
    EditEventPage, EventDetailPage, EventRegistrationsPage, HomePage,
    LoginPage, NotFoundPage, OrganizerDashboardPage, ProfilePage,
    StudentDashboardPage,
};

// Global API client - configurable via environment or same-origin fallback
pub fn get_api_client() -> APIClient {
    // Try environment variable first (set at build time)
    let address = option_env!("BACKEND_URL")
        .map(|url| url.to_string())
        .unwrap_or_else(|| {
            // Fallback to same origin (current setup)
            let window = web_sys::window().unwrap();
            let location = window.location();
            location.origin().unwrap()
        });

    APIClient {
        address,
        inner_client: reqwest::Client::new(),
    }
}

#[derive(Debug, Clone, Copy, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/profile")]
    Profile,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/admin")]
    AdminDashboard,
    #[at("/dashboard/admin/events")]
    AdminEvents,
    #[at("/dashboard/organizer")]
    OrganizerDashboard,
    #[at("/dashboard/student")]
    StudentDashboard,
    #[at("/events/new")]
    CreateEvent,
    #[at("/events/:id")]
    EventDetail { id: EventId },
    #[at("/events/:id/edit")]
    EditEvent { id: EventId },
    #[at("/events/:id/registrations")]
    EventRegistrations { id: EventId },
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component]
pub fn App() -> Html {
    use_effect_with((), |_| {
        logs::init_logging();
    });

    html! {
        <ToastProvider>
            <BrowserRouter>
                <AppShell />
            </BrowserRouter>
        </ToastProvider>
    }
}

#[function_component]
fn AppShell() -> Html {
    hooks::use_authentication();
    hooks::use_system_theme();

    html! {
        <MainLayout>
            <Switch<Route> render={switch} />
            <ToastContainer />
        </MainLayout>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <HomePage /> },
        Route::Login => html! { <LoginPage /> },
        Route::Profile => html! { <ProfilePage /> },
        Route::Dashboard => html! { <DashboardPage /> },
        Route::AdminDashboard => html! { <AdminDashboardPage /> },
        Route::AdminEvents => html! { <AdminEventsPage /> },
        Route::OrganizerDashboard => html! { <OrganizerDashboardPage /> },
        Route::StudentDashboard => html! { <StudentDashboardPage /> },
        Route::CreateEvent => html! { <CreateEventPage /> },
        Route::EventDetail { id } => html! { <EventDetailPage {id} /> },
        Route::EditEvent { id } => html! { <EditEventPage {id} /> },
        Route::EventRegistrations { id } => {
            html! { <EventRegistrationsPage {id} /> }
        }
        Route::NotFound => html! { <NotFoundPage /> },
    }
}
