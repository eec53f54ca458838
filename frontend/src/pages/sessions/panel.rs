use super::{
    components::{detail::SessionDetailCard, form::SessionForm, list::SessionCards},
    utils::FormMode,
    view_model::{
        use_session_detail_view_model, use_session_form_view_model, use_sessions_list_view_model,
    },
};
use crate::components::{error::ErrorNotice, layout::LoadingSpinner};
use leptos::*;

#[component]
pub fn SessionsListPanel() -> impl IntoView {
    let vm = use_sessions_list_view_model();

    view! {
        <Suspense fallback=|| view! { <LoadingSpinner /> }>
            {move || {
                vm.sessions
                    .get()
                    .map(|result| match result {
                        Ok(sessions) => {
                            view! { <SessionCards sessions=sessions is_admin=vm.is_admin.get() /> }
                                .into_view()
                        }
                        Err(err) => {
                            view! { <ErrorNotice error=Signal::derive(move || Some(err.clone())) /> }
                                .into_view()
                        }
                    })
            }}
        </Suspense>
    }
}

#[component]
pub fn SessionDetailPanel(#[prop(into)] session_id: Signal<String>) -> impl IntoView {
    let vm = use_session_detail_view_model(session_id);
    let pending = Signal::derive(move || {
        vm.participation_action.pending().get() || vm.delete_action.pending().get()
    });
    let on_delete = Callback::new(move |_: ()| vm.delete_action.dispatch(()));
    let on_participation = Callback::new(move |participate: bool| {
        vm.participation_action.dispatch(participate)
    });

    view! {
        <Suspense fallback=|| view! { <LoadingSpinner /> }>
            {move || {
                vm.loader.with(|_| ());
                vm.detail
                    .get()
                    .map(|detail| {
                        view! {
                            <SessionDetailCard
                                detail=detail
                                is_admin=vm.is_admin.get()
                                user_id=vm.user_id.get()
                                pending=pending
                                on_delete=on_delete
                                on_participation=on_participation
                            />
                        }
                    })
            }}
        </Suspense>
        <ErrorNotice error=vm.error />
    }
}

#[component]
pub fn SessionFormPanel(mode: FormMode) -> impl IntoView {
    let vm = use_session_form_view_model(mode);
    if !vm.allowed {
        return ().into_view();
    }

    let teachers = vm.teachers;
    let teacher_list = Signal::derive(move || {
        teachers
            .get()
            .and_then(Result::ok)
            .unwrap_or_default()
    });
    let submit_vm = vm.clone();
    let on_submit = Callback::new(move |_: ()| submit_vm.submit());

    view! {
        <SessionForm
            title=vm.mode.title()
            form=vm.form
            teachers=teacher_list
            error=vm.error.into()
            pending=vm.submit_action.pending().into()
            on_submit=on_submit
        />
    }
    .into_view()
}
