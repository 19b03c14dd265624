use leptos::prelude::*;

use crate::shared::components::login_form::{FieldView, LoginForm};
use crate::shared::submit::{FieldSpec, SubmissionConfig};

/// Admin credentials go to `/admin_login`; success lands on the dashboard.
pub const ADMIN_LOGIN: SubmissionConfig = SubmissionConfig {
    fields: &[
        FieldSpec {
            input_id: "user_id",
            json_key: "user_id",
        },
        FieldSpec {
            input_id: "password",
            json_key: "password",
        },
    ],
    endpoint: "/admin_login",
    success_redirect: "/admin_dashboard",
};

const ADMIN_FIELD_VIEWS: &[FieldView] = &[
    FieldView {
        label: "User ID",
        input_type: "text",
        placeholder: "Enter your user ID",
    },
    FieldView {
        label: "Password",
        input_type: "password",
        placeholder: "Enter your password",
    },
];

#[component]
pub fn AdminLoginPage() -> impl IntoView {
    view! {
        <LoginForm title="Admin Login" config=ADMIN_LOGIN field_views=ADMIN_FIELD_VIEWS />
    }
}
