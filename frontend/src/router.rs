use leptos::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::*;

use crate::{
    components::{
        guard::{RequireAuth, RequireGuest},
        layout::Layout,
        snack_bar::SnackBar,
    },
    pages::{
        login::LoginPage,
        me::MePage,
        not_found::NotFoundPage,
        register::RegisterPage,
        sessions::{SessionDetailPage, SessionFormPage, SessionsPage},
    },
    state::{auth::AuthProvider, notice::provide_notice, session::SessionService},
    utils::navigation::provide_navigator,
};

pub const ROUTE_PATHS: &[&str] = &[
    "/",
    "/login",
    "/register",
    "/sessions",
    "/sessions/detail/:id",
    "/sessions/create",
    "/sessions/update/:id",
    "/me",
    "/404",
];

pub const PROTECTED_ROUTE_PATHS: &[&str] = &[
    "/sessions",
    "/sessions/detail/:id",
    "/sessions/create",
    "/sessions/update/:id",
    "/me",
];

pub const GUEST_ROUTE_PATHS: &[&str] = &["/", "/login", "/register"];

pub fn mount_app() {
    mount_to_body(app_root);
}

/// Builds the one session holder of the application and everything that hangs off it.
pub fn app_root() -> impl IntoView {
    provide_meta_context();
    provide_notice();
    let session = SessionService::new();
    view! {
        <Title text="Yoga app"/>
        <AuthProvider session=session>
            <Router>
                <AppShell/>
            </Router>
        </AuthProvider>
    }
}

#[component]
fn AppShell() -> impl IntoView {
    provide_navigator();
    view! {
        <Layout>
            <Routes>
                <Route path="/" view=GuestLogin/>
                <Route path="/login" view=GuestLogin/>
                <Route path="/register" view=GuestRegister/>
                <Route path="/sessions" view=ProtectedSessions/>
                <Route path="/sessions/detail/:id" view=ProtectedSessionDetail/>
                <Route path="/sessions/create" view=ProtectedSessionForm/>
                <Route path="/sessions/update/:id" view=ProtectedSessionForm/>
                <Route path="/me" view=ProtectedMe/>
                <Route path="/404" view=NotFoundPage/>
                <Route path="/*any" view=NotFoundPage/>
            </Routes>
        </Layout>
        <SnackBar/>
    }
}

#[component]
fn GuestLogin() -> impl IntoView {
    view! { <RequireGuest><LoginPage/></RequireGuest> }
}

#[component]
fn GuestRegister() -> impl IntoView {
    view! { <RequireGuest><RegisterPage/></RequireGuest> }
}

#[component]
fn ProtectedSessions() -> impl IntoView {
    view! { <RequireAuth><SessionsPage/></RequireAuth> }
}

#[component]
fn ProtectedSessionDetail() -> impl IntoView {
    view! { <RequireAuth><SessionDetailPage/></RequireAuth> }
}

#[component]
fn ProtectedSessionForm() -> impl IntoView {
    view! { <RequireAuth><SessionFormPage/></RequireAuth> }
}

#[component]
fn ProtectedMe() -> impl IntoView {
    view! { <RequireAuth><MePage/></RequireAuth> }
}
