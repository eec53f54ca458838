use crate::pages::register::{components::form::RegisterForm, view_model::use_register_view_model};
use leptos::*;

#[component]
pub fn RegisterPanel() -> impl IntoView {
    let vm = use_register_view_model();
    let on_submit = Callback::new(move |_: ()| vm.submit());

    view! {
        <RegisterForm
            form=vm.form
            error=vm.error.into()
            pending=vm.register_action.pending().into()
            on_submit=on_submit
        />
    }
}
