pub mod confirmation_modal;
pub mod event_card;
pub mod event_form;
pub mod event_status_badge;
pub mod hero_banner;
pub mod layout;
pub mod login_form;
pub mod page_background;
pub mod registration_list;
pub mod require_auth;
pub mod role_badge;
pub mod stat_card;
pub mod toast;

pub use confirmation_modal::ConfirmationModal;
pub use event_card::EventCard;
pub use event_form::EventForm;
pub use event_status_badge::EventStatusBadge;
pub use hero_banner::HeroBanner;
pub use login_form::LoginForm;
pub use page_background::PageBackground;
pub use registration_list::RegistrationList;
pub use require_auth::RequireAuth;
pub use role_badge::RoleBadge;
pub use stat_card::StatCard;
pub use toast::ToastContainer;
