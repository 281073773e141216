//! UI Components
//!
//! Reusable Leptos components and pages.

mod board_page;
mod create_task_modal;
mod dashboard_page;
mod delete_confirm_button;
mod login_page;
mod navbar;
mod settings_page;
mod task_card;
mod task_page;
mod toast;

pub use board_page::BoardPage;
pub use create_task_modal::CreateTaskModal;
pub use dashboard_page::DashboardPage;
pub use delete_confirm_button::DeleteConfirmButton;
pub use login_page::LoginPage;
pub use navbar::Navbar;
pub use settings_page::SettingsPage;
pub use task_card::BoardCard;
pub use task_page::TaskPage;
pub use toast::{provide_toasts, use_toasts, Toaster};
