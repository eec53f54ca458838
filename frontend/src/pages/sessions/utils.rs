use crate::api::{ApiError, Session, SessionPayload, Teacher};
use crate::utils::time::{format_instant, parse_input_date, to_input_date};
use leptos::*;

pub const DESCRIPTION_MAX_LEN: usize = 2000;

/// Which request the session form ends in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormMode {
    Create,
    Update(String),
}

impl FormMode {
    pub fn from_param(id: Option<String>) -> Self {
        match id.filter(|id| !id.is_empty()) {
            Some(id) => Self::Update(id),
            None => Self::Create,
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::Create => "Create session",
            Self::Update(_) => "Update session",
        }
    }

    pub fn success_message(&self) -> &'static str {
        match self {
            Self::Create => "Session created !",
            Self::Update(_) => "Session updated !",
        }
    }
}

pub fn session_subtitle(session: &Session) -> String {
    format!("Session on {}", format_instant(&session.date))
}

pub fn teacher_display_name(teacher: &Teacher) -> String {
    format!("{} {}", teacher.first_name, teacher.last_name.to_uppercase())
}

pub fn attendees_label(session: &Session) -> String {
    format!("{} attendees", session.users.len())
}

pub fn participation_label(is_participant: bool) -> &'static str {
    if is_participant {
        "Do not participate"
    } else {
        "Participate"
    }
}

#[derive(Clone, Copy)]
pub struct SessionFormState {
    pub name: RwSignal<String>,
    pub date: RwSignal<String>,
    pub teacher_id: RwSignal<String>,
    pub description: RwSignal<String>,
}

impl Default for SessionFormState {
    fn default() -> Self {
        Self {
            name: create_rw_signal(String::new()),
            date: create_rw_signal(String::new()),
            teacher_id: create_rw_signal(String::new()),
            description: create_rw_signal(String::new()),
        }
    }
}

impl SessionFormState {
    pub fn fill_from(&self, session: &Session) {
        self.name.set(session.name.clone());
        self.date.set(to_input_date(session.date.date_naive()));
        self.teacher_id.set(session.teacher_id.to_string());
        self.description.set(session.description.clone());
    }

    pub fn is_valid(&self) -> bool {
        build_payload(
            &self.name.get(),
            &self.date.get(),
            &self.teacher_id.get(),
            &self.description.get(),
        )
        .is_ok()
    }

    pub fn to_payload(&self) -> Result<SessionPayload, ApiError> {
        build_payload(
            &self.name.get_untracked(),
            &self.date.get_untracked(),
            &self.teacher_id.get_untracked(),
            &self.description.get_untracked(),
        )
    }
}

pub fn build_payload(
    name: &str,
    date: &str,
    teacher_id: &str,
    description: &str,
) -> Result<SessionPayload, ApiError> {
    if name.trim().is_empty() {
        return Err(ApiError::validation("Name is required"));
    }
    let date = parse_input_date(date).ok_or_else(|| ApiError::validation("Date is required"))?;
    let teacher_id = teacher_id
        .trim()
        .parse::<i64>()
        .map_err(|_| ApiError::validation("Teacher is required"))?;
    if description.trim().is_empty() {
        return Err(ApiError::validation("Description is required"));
    }
    if description.chars().count() > DESCRIPTION_MAX_LEN {
        return Err(ApiError::validation(format!(
            "Description must be at most {} characters",
            DESCRIPTION_MAX_LEN
        )));
    }
    Ok(SessionPayload {
        name: name.to_string(),
        date,
        teacher_id,
        description: description.to_string(),
    })
}
