use leptos::prelude::*;

use crate::shared::components::login_form::{FieldView, LoginForm};
use crate::shared::submit::{FieldSpec, SubmissionConfig};

/// Faculty credentials go to `/faculty_login`; success lands on the dashboard.
pub const FACULTY_LOGIN: SubmissionConfig = SubmissionConfig {
    fields: &[
        FieldSpec {
            input_id: "username",
            json_key: "username",
        },
        FieldSpec {
            input_id: "password",
            json_key: "password",
        },
    ],
    endpoint: "/faculty_login",
    success_redirect: "/faculty_dashboard",
};

const FACULTY_FIELD_VIEWS: &[FieldView] = &[
    FieldView {
        label: "Username",
        input_type: "text",
        placeholder: "Enter your username",
    },
    FieldView {
        label: "Password",
        input_type: "password",
        placeholder: "Enter your password",
    },
];

#[component]
pub fn FacultyLoginPage() -> impl IntoView {
    view! {
        <LoginForm title="Faculty Login" config=FACULTY_LOGIN field_views=FACULTY_FIELD_VIEWS />
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::submit::build_payload;

    #[test]
    fn faculty_submission_body() {
        let values = vec!["jdoe".to_string(), "secret".to_string()];
        let payload = build_payload(&FACULTY_LOGIN, &values).unwrap();

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"username":"jdoe","password":"secret"}"#
        );
        assert_eq!(FACULTY_LOGIN.endpoint, "/faculty_login");
        assert_eq!(FACULTY_LOGIN.success_redirect, "/faculty_dashboard");
    }

    #[test]
    fn faculty_json_keys_are_unique() {
        let mut keys: Vec<_> = FACULTY_LOGIN.fields.iter().map(|f| f.json_key).collect();
        keys.sort();
        keys.dedup();
        assert_eq!(keys.len(), FACULTY_LOGIN.fields.len());
        assert_eq!(FACULTY_LOGIN.fields.len(), FACULTY_FIELD_VIEWS.len());
    }
}
