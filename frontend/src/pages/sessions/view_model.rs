use super::{
    repository::SessionsRepository,
    utils::{FormMode, SessionFormState},
};
use crate::{
    api::{ApiError, Session, SessionPayload, Teacher},
    state::{
        auth::{use_api, use_auth, use_session},
        notice::use_notice,
    },
    utils::navigation::use_navigator,
};
use leptos::*;
use serde::{Deserialize, Serialize};
use std::rc::Rc;

pub const SESSIONS_PATH: &str = "/sessions";
pub const SESSION_DELETED: &str = "Session deleted !";

/// A session together with the teacher it references.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionDetail {
    pub session: Session,
    pub teacher: Teacher,
}

pub async fn load_detail(repo: &SessionsRepository, id: &str) -> Result<SessionDetail, ApiError> {
    let session = repo.fetch_session(id).await?;
    let teacher = repo.fetch_teacher(session.teacher_id).await?;
    Ok(SessionDetail { session, teacher })
}

/// Joins or leaves `session_id`, then reloads the session and its teacher.
pub async fn toggle_participation(
    repo: &SessionsRepository,
    session_id: &str,
    user_id: i64,
    participate: bool,
) -> Result<SessionDetail, ApiError> {
    if participate {
        repo.participate(session_id, user_id).await?;
    } else {
        repo.un_participate(session_id, user_id).await?;
    }
    load_detail(repo, session_id).await
}

pub async fn submit_session(
    repo: &SessionsRepository,
    mode: &FormMode,
    payload: &SessionPayload,
) -> Result<Session, ApiError> {
    match mode {
        FormMode::Create => repo.create(payload).await,
        FormMode::Update(id) => repo.update(id, payload).await,
    }
}

fn use_repository() -> SessionsRepository {
    SessionsRepository::new_with_client(Rc::new(use_api()))
}

fn use_is_admin() -> Memo<bool> {
    let (auth, _) = use_auth();
    create_memo(move |_| auth.get().is_admin())
}

#[derive(Clone, Copy)]
pub struct SessionsListViewModel {
    pub is_admin: Memo<bool>,
    pub sessions: Resource<(), Result<Vec<Session>, ApiError>>,
}

pub fn use_sessions_list_view_model() -> SessionsListViewModel {
    let repo = use_repository();
    let sessions = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.fetch_sessions().await }
        },
    );

    SessionsListViewModel {
        is_admin: use_is_admin(),
        sessions,
    }
}

#[derive(Clone, Copy)]
pub struct SessionDetailViewModel {
    pub is_admin: Memo<bool>,
    pub user_id: Memo<Option<i64>>,
    pub detail: RwSignal<Option<SessionDetail>>,
    pub error: RwSignal<Option<ApiError>>,
    pub loader: Resource<String, Result<SessionDetail, ApiError>>,
    pub participation_action: Action<bool, Result<SessionDetail, ApiError>>,
    pub delete_action: Action<(), Result<(), ApiError>>,
}

pub fn use_session_detail_view_model(session_id: Signal<String>) -> SessionDetailViewModel {
    let repo = use_repository();
    let holder = use_session();
    let notice = use_notice();
    let navigator = use_navigator();
    let (auth, _) = use_auth();

    let user_id = create_memo(move |_| auth.get().information.map(|info| info.id));
    let detail = create_rw_signal(None::<SessionDetail>);
    let error = create_rw_signal(None::<ApiError>);

    let repo_for_loader = repo.clone();
    let loader = create_resource(
        move || session_id.get(),
        move |id| {
            let repo = repo_for_loader.clone();
            async move { load_detail(&repo, &id).await }
        },
    );

    let repo_for_participation = repo.clone();
    let participation_action = create_action(move |participate: &bool| {
        let repo = repo_for_participation.clone();
        let participate = *participate;
        let id = session_id.get_untracked();
        let current_user = holder.user_id();
        async move {
            let user_id =
                current_user.ok_or_else(|| ApiError::validation("No user is logged in"))?;
            toggle_participation(&repo, &id, user_id, participate).await
        }
    });

    let delete_action = create_action(move |_: &()| {
        let repo = repo.clone();
        let id = session_id.get_untracked();
        async move { repo.delete(&id).await }
    });

    create_effect(move |_| match loader.get() {
        Some(Ok(loaded)) => detail.set(Some(loaded)),
        Some(Err(err)) => error.set(Some(err)),
        None => {}
    });

    create_effect(move |_| {
        if let Some(result) = participation_action.value().get() {
            match result {
                Ok(reloaded) => {
                    error.set(None);
                    detail.set(Some(reloaded));
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            match result {
                Ok(()) => {
                    notice.show(SESSION_DELETED);
                    navigator.go(SESSIONS_PATH);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    SessionDetailViewModel {
        is_admin: use_is_admin(),
        user_id,
        detail,
        error,
        loader,
        participation_action,
        delete_action,
    }
}

#[derive(Clone)]
pub struct SessionFormViewModel {
    pub mode: FormMode,
    pub allowed: bool,
    pub form: SessionFormState,
    pub error: RwSignal<Option<ApiError>>,
    pub teachers: Resource<(), Result<Vec<Teacher>, ApiError>>,
    pub submit_action: Action<SessionPayload, Result<Session, ApiError>>,
}

impl SessionFormViewModel {
    pub fn submit(&self) {
        if self.submit_action.pending().get_untracked() {
            return;
        }
        match self.form.to_payload() {
            Ok(payload) => {
                self.error.set(None);
                self.submit_action.dispatch(payload);
            }
            Err(err) => self.error.set(Some(err)),
        }
    }
}

pub fn use_session_form_view_model(mode: FormMode) -> SessionFormViewModel {
    let repo = use_repository();
    let notice = use_notice();
    let navigator = use_navigator();
    let allowed = use_session().is_admin();

    let form = SessionFormState::default();
    let error = create_rw_signal(None::<ApiError>);

    if !allowed {
        log::warn!("session form opened without admin rights");
        create_effect(move |_| navigator.go(SESSIONS_PATH));
    }

    let repo_for_teachers = repo.clone();
    let teachers = create_resource(
        || (),
        move |_| {
            let repo = repo_for_teachers.clone();
            async move { repo.fetch_teachers().await }
        },
    );

    if let FormMode::Update(id) = &mode {
        let repo = repo.clone();
        let id = id.clone();
        let existing = create_resource(
            move || id.clone(),
            move |id| {
                let repo = repo.clone();
                async move { repo.fetch_session(&id).await }
            },
        );
        create_effect(move |_| match existing.get() {
            Some(Ok(session)) => form.fill_from(&session),
            Some(Err(err)) => error.set(Some(err)),
            None => {}
        });
    }

    let submit_mode = mode.clone();
    let submit_action = create_action(move |payload: &SessionPayload| {
        let repo = repo.clone();
        let mode = submit_mode.clone();
        let payload = payload.clone();
        async move { submit_session(&repo, &mode, &payload).await }
    });

    let success_message = mode.success_message();
    create_effect(move |_| {
        if let Some(result) = submit_action.value().get() {
            match result {
                Ok(_) => {
                    notice.show(success_message);
                    navigator.go(SESSIONS_PATH);
                }
                Err(err) => error.set(Some(err)),
            }
        }
    });

    SessionFormViewModel {
        mode,
        allowed,
        form,
        error,
        teachers,
        submit_action,
    }
}
