use super::repository::MeRepository;
use crate::{
    api::{ApiError, User},
    state::{
        auth::{use_api, use_session},
        notice::{use_notice, NoticeContext},
        session::SessionService,
    },
    utils::navigation::{use_navigator, Navigator},
};
use leptos::*;
use std::rc::Rc;

pub const ACCOUNT_DELETED: &str = "Your account has been deleted !";

/// Deletes the logged-in user's account, then closes the session.
pub async fn delete_account(repo: &MeRepository, session: &SessionService) -> Result<(), ApiError> {
    let user_id = session
        .user_id()
        .ok_or_else(|| ApiError::validation("No user is logged in"))?;
    repo.delete_user(user_id).await?;
    session.log_out();
    Ok(())
}

/// Reacts to the outcome of the delete action.
pub fn finish_account_deletion(
    result: Result<(), ApiError>,
    error: RwSignal<Option<ApiError>>,
    notice: NoticeContext,
    navigator: Navigator,
) {
    match result {
        Ok(()) => {
            error.set(None);
            notice.show(ACCOUNT_DELETED);
            navigator.go("/");
        }
        Err(err) => error.set(Some(err)),
    }
}

#[derive(Clone, Copy)]
pub struct MeViewModel {
    pub user: Resource<Option<i64>, Result<User, ApiError>>,
    pub error: RwSignal<Option<ApiError>>,
    pub delete_action: Action<(), Result<(), ApiError>>,
}

pub fn use_me_view_model() -> MeViewModel {
    let repo = MeRepository::new_with_client(Rc::new(use_api()));
    let session = use_session();
    let notice = use_notice();
    let navigator = use_navigator();
    let error = create_rw_signal(None::<ApiError>);

    let user_id = session.user_id();
    let repo_for_user = repo.clone();
    let user = create_resource(
        move || user_id,
        move |id| {
            let repo = repo_for_user.clone();
            async move {
                match id {
                    Some(id) => repo.fetch_user(id).await,
                    None => Err(ApiError::validation("No user is logged in")),
                }
            }
        },
    );

    let delete_action = create_action(move |_: &()| {
        let repo = repo.clone();
        let session = session.clone();
        async move { delete_account(&repo, &session).await }
    });

    create_effect(move |_| {
        if let Some(result) = delete_action.value().get() {
            finish_account_deletion(result, error, notice, navigator);
        }
    });

    MeViewModel {
        user,
        error,
        delete_action,
    }
}
