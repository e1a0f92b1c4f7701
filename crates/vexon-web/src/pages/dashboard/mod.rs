//! Dashboard Pages
//!
//! Rendered inside `DashboardLayout`, behind `ProtectedRoute`.

mod billing;
mod checkout;
mod neural_lab;
mod overview;
mod settings;
mod spectral_pro;

pub use billing::BillingPage;
pub use checkout::CheckoutPage;
pub use neural_lab::NeuralLabPage;
pub use overview::OverviewPage;
pub use settings::SettingsPage;
pub use spectral_pro::SpectralProPage;
