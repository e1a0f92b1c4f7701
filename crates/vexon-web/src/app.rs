//! Main App Component

use leptos::prelude::*;
use leptos_router::{components::*, path};

use crate::api::{self, AuthState};
use crate::components::{ChatWidget, CookieConsent, DashboardLayout, ProtectedRoute, SiteFooter};
use crate::pages::dashboard::{
    BillingPage, CheckoutPage, NeuralLabPage, OverviewPage, SettingsPage, SpectralProPage,
};
use crate::pages::{
    AboutPage, AuthCallbackPage, ContactPage, FeaturesPage, ForgotPasswordPage, HomePage,
    LoginPage, NotFoundPage, PrivacyPage, ProductPage, SignupPage, TechnologyPage, TermsPage,
};

/// Root application component
#[component]
pub fn App() -> impl IntoView {
    let client = api::build_client();
    provide_context(AuthState::new(&client));
    provide_context(client);

    view! {
        <Router>
            <main class="app">
                <Routes fallback=|| view! { <NotFoundPage /> }>
                    <Route path=path!("/") view=HomePage />
                    <Route path=path!("/product") view=ProductPage />
                    <Route path=path!("/features") view=FeaturesPage />
                    <Route path=path!("/about") view=AboutPage />
                    <Route path=path!("/technology") view=TechnologyPage />
                    <Route path=path!("/privacy") view=PrivacyPage />
                    <Route path=path!("/terms") view=TermsPage />
                    <Route path=path!("/contact") view=ContactPage />
                    <Route path=path!("/login") view=LoginPage />
                    <Route path=path!("/signup") view=SignupPage />
                    <Route path=path!("/forgot-password") view=ForgotPasswordPage />
                    <Route path=path!("/auth/callback") view=AuthCallbackPage />
                    <ParentRoute
                        path=path!("/dashboard")
                        view=|| view! {
                            <ProtectedRoute>
                                <DashboardLayout />
                            </ProtectedRoute>
                        }
                    >
                        <Route path=path!("") view=OverviewPage />
                        <Route path=path!("neural-lab") view=NeuralLabPage />
                        <Route path=path!("spectral-pro") view=SpectralProPage />
                        <Route path=path!("billing") view=BillingPage />
                        <Route path=path!("settings") view=SettingsPage />
                        <Route path=path!("checkout/:slug") view=CheckoutPage />
                    </ParentRoute>
                </Routes>
            </main>
            <SiteFooter />
            <ChatWidget />
            <CookieConsent />
        </Router>
    }
}
