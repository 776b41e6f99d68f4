//! HTTP handlers, one per route.
//!
//! Validation failures travel back to the originating form as a comma-joined,
//! URL-encoded `errors` query parameter; not-found lookups become a one-shot
//! error notice and a redirect to the listing. Store faults are the only
//! thing that surfaces as an HTTP error status.

use crate::error::StoreError;
use crate::models::ContactSubmission;
use crate::pages;
use crate::server::AppState;
use crate::validation::ValidationOutcome;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use std::sync::Arc;
use tracing::{error, info};

const MSG_REQUEST_INVALID: &str = "Request Invalid";
const MSG_ADDED: &str = "Contact added successfully!";
const MSG_DELETED: &str = "Contact successfully deleted";
const MSG_UPDATED: &str = "Contact has been updated";

/// A store fault escaping a handler. The generic fault boundary: logged and
/// answered with a bare 500, never classified further.
pub struct ServerError(StoreError);

impl From<StoreError> for ServerError {
    fn from(err: StoreError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        error!(error = %self.0, "contact store failure");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal server error").into_response()
    }
}

#[derive(Debug, Deserialize)]
pub struct NameQuery {
    #[serde(default)]
    name: String,
}

#[derive(Debug, Deserialize)]
pub struct AddFormQuery {
    errors: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditFormQuery {
    #[serde(default)]
    name: String,
    errors: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct EditSubmitQuery {
    #[serde(default, rename = "nameToUpdate")]
    name_to_update: String,
}

/// Errors arrive joined by commas; none of the fixed messages contains one.
fn split_errors(errors: Option<String>) -> Vec<String> {
    errors
        .map(|raw| {
            raw.split(',')
                .filter(|part| !part.is_empty())
                .map(str::to_string)
                .collect()
        })
        .unwrap_or_default()
}

fn join_errors(messages: &[String]) -> String {
    urlencoding::encode(&messages.join(",")).into_owned()
}

pub async fn home() -> Html<String> {
    Html(pages::home_page())
}

pub async fn about() -> Html<String> {
    Html(pages::about_page())
}

pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
) -> Result<Html<String>, ServerError> {
    let contacts = state.store.list_all().await?;
    let msg_success = state.flash.take_success();
    let msg_error = state.flash.take_error();
    Ok(Html(pages::contacts_page(
        &contacts,
        msg_success.as_deref(),
        msg_error.as_deref(),
    )))
}

pub async fn detail_contact(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NameQuery>,
) -> Result<Html<String>, ServerError> {
    let contact = state.store.find_by_name(&query.name).await?;
    Ok(Html(pages::detail_page(contact.as_ref(), &query.name)))
}

pub async fn show_add_form(Query(query): Query<AddFormQuery>) -> Html<String> {
    let errors = split_errors(query.errors);
    Html(pages::add_contact_page(&errors))
}

pub async fn submit_add(
    State(state): State<Arc<AppState>>,
    Form(submission): Form<ContactSubmission>,
) -> Result<Response, ServerError> {
    match state.workflow.validate_add(&submission).await? {
        ValidationOutcome::Invalid(messages) => {
            let target = format!("/add-contact?errors={}", join_errors(&messages));
            Ok(Redirect::to(&target).into_response())
        }
        ValidationOutcome::Valid(contact) => {
            info!(name = %contact.name, "adding contact");
            state.store.add(contact).await?;
            state.flash.set_success(MSG_ADDED);
            Ok(Redirect::to("/contacts").into_response())
        }
    }
}

pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    Query(query): Query<NameQuery>,
) -> Result<Redirect, ServerError> {
    if state.store.find_by_name(&query.name).await?.is_none() {
        state.flash.set_error(MSG_REQUEST_INVALID);
        return Ok(Redirect::to("/contacts"));
    }

    info!(name = %query.name, "deleting contact");
    state.store.delete(&query.name).await?;
    state.flash.set_success(MSG_DELETED);
    Ok(Redirect::to("/contacts"))
}

pub async fn show_edit_form(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EditFormQuery>,
) -> Result<Response, ServerError> {
    let Some(contact) = state.store.find_by_name(&query.name).await? else {
        state.flash.set_error(MSG_REQUEST_INVALID);
        return Ok(Redirect::to("/contacts").into_response());
    };

    let errors = split_errors(query.errors);
    Ok(Html(pages::edit_contact_page(&contact, &errors)).into_response())
}

pub async fn submit_edit(
    State(state): State<Arc<AppState>>,
    Query(query): Query<EditSubmitQuery>,
    Form(submission): Form<ContactSubmission>,
) -> Result<Response, ServerError> {
    let prior_name = query.name_to_update;

    if state.store.find_by_name(&prior_name).await?.is_none() {
        state.flash.set_error(MSG_REQUEST_INVALID);
        return Ok(Redirect::to("/contacts").into_response());
    }

    match state.workflow.validate_edit(&submission, &prior_name).await? {
        ValidationOutcome::Invalid(messages) => {
            let target = format!(
                "/edit-contact?name={}&errors={}",
                urlencoding::encode(&prior_name),
                join_errors(&messages)
            );
            Ok(Redirect::to(&target).into_response())
        }
        ValidationOutcome::Valid(contact) => {
            info!(previous = %prior_name, name = %contact.name, "updating contact");
            state.store.update(contact, &prior_name).await?;
            state.flash.set_success(MSG_UPDATED);
            Ok(Redirect::to("/contacts").into_response())
        }
    }
}
