//! Page Components

mod about;
mod auth_callback;
mod contact;
mod features;
mod forgot_password;
mod home;
mod legal;
mod login;
mod not_found;
mod product;
mod signup;
mod technology;
pub mod dashboard;

pub use about::AboutPage;
pub use auth_callback::AuthCallbackPage;
pub use contact::ContactPage;
pub use features::FeaturesPage;
pub use forgot_password::ForgotPasswordPage;
pub use home::HomePage;
pub use legal::{PrivacyPage, TermsPage};
pub use login::LoginPage;
pub use not_found::NotFoundPage;
pub use product::ProductPage;
pub use signup::SignupPage;
pub use technology::TechnologyPage;
