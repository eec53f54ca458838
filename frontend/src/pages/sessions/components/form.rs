use crate::{
    api::{ApiError, Teacher},
    components::error::ErrorNotice,
    pages::sessions::utils::{teacher_display_name, SessionFormState, DESCRIPTION_MAX_LEN},
};
use leptos::{ev::SubmitEvent, *};
use web_sys::{HtmlInputElement, HtmlSelectElement, HtmlTextAreaElement};

#[component]
pub fn SessionForm(
    title: &'static str,
    form: SessionFormState,
    #[prop(into)] teachers: Signal<Vec<Teacher>>,
    error: Signal<Option<ApiError>>,
    pending: Signal<bool>,
    on_submit: Callback<()>,
) -> impl IntoView {
    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };
    let disabled = move || pending.get() || !form.is_valid();

    view! {
        <div class="create rounded-lg shadow bg-surface-elevated p-6">
            <div class="flex items-center gap-4 mb-4">
                <a href="/sessions" class="back" aria-label="Back">"Back"</a>
                <h1 class="text-2xl font-semibold">{title}</h1>
            </div>
            <form class="space-y-4" on:submit=handle_submit>
                <div>
                    <label for="name" class="block text-sm font-medium">"Name"</label>
                    <input
                        id="name"
                        name="name"
                        type="text"
                        required
                        class="w-full border border-form-control-border rounded px-3 py-2"
                        prop:value=form.name
                        on:input=move |ev| {
                            let target = event_target::<HtmlInputElement>(&ev);
                            form.name.set(target.value());
                        }
                    />
                </div>
                <div>
                    <label for="date" class="block text-sm font-medium">"Date"</label>
                    <input
                        id="date"
                        name="date"
                        type="date"
                        required
                        class="w-full border border-form-control-border rounded px-3 py-2"
                        prop:value=form.date
                        on:input=move |ev| {
                            let target = event_target::<HtmlInputElement>(&ev);
                            form.date.set(target.value());
                        }
                    />
                </div>
                <div>
                    <label for="teacher_id" class="block text-sm font-medium">"Teacher"</label>
                    <select
                        id="teacher_id"
                        name="teacher_id"
                        required
                        class="w-full border border-form-control-border rounded px-3 py-2"
                        prop:value=form.teacher_id
                        on:change=move |ev| {
                            let target = event_target::<HtmlSelectElement>(&ev);
                            form.teacher_id.set(target.value());
                        }
                    >
                        <option value="">"Select a teacher"</option>
                        <For
                            each=move || teachers.get()
                            key=|teacher| teacher.id
                            children=move |teacher| {
                                let value = teacher.id.to_string();
                                let selected = {
                                    let value = value.clone();
                                    move || form.teacher_id.get() == value
                                };
                                view! {
                                    <option value=value selected=selected>
                                        {teacher_display_name(&teacher)}
                                    </option>
                                }
                            }
                        />
                    </select>
                </div>
                <div>
                    <label for="description" class="block text-sm font-medium">"Description"</label>
                    <textarea
                        id="description"
                        name="description"
                        required
                        maxlength=DESCRIPTION_MAX_LEN
                        rows="4"
                        class="w-full border border-form-control-border rounded px-3 py-2"
                        prop:value=form.description
                        on:input=move |ev| {
                            let target = event_target::<HtmlTextAreaElement>(&ev);
                            form.description.set(target.value());
                        }
                    >
                        {form.description.get_untracked()}
                    </textarea>
                </div>
                <button
                    type="submit"
                    disabled=disabled
                    class="py-2 px-4 rounded text-white bg-action-primary-bg"
                >
                    "Save"
                </button>
                <ErrorNotice error=error />
            </form>
        </div>
    }
}
