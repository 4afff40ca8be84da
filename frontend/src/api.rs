//! Admin backend client.
//!
//! Every call returns [`ApiResult`]; pages decide what to show on failure.
//! With the `mock` feature the calls answer from in-memory fixtures.

#[cfg(not(feature = "mock"))]
use gloo_net::http::{Request, RequestBuilder, Response};
#[cfg(not(feature = "mock"))]
use serde::{de::DeserializeOwned, Serialize};
#[cfg(not(feature = "mock"))]
use wasm_bindgen::JsValue;
use web_sys::File;
#[cfg(not(feature = "mock"))]
use web_sys::FormData;
#[cfg(not(feature = "mock"))]
use zetho_admin_shared::{
    endpoints::{Endpoint, Method, ReportedKind},
    error::{check_status, ApiError},
    models::{ListEnvelope, IMAGE_FORM_FIELD},
};
use zetho_admin_shared::{
    endpoints::NestedKind,
    error::ApiResult,
    models::{
        DashboardStats, JobReport, LoginRequest, LoginResponse, MainGroup, MainGroupInput,
        NewsInput, NewsItem, Notification, NotificationInput, PostReport, ReportedGroup,
        ReportedNews, Ticket, TicketReply, TicketUpdate, UserReport,
    },
    RecordId, ReportAction,
};

#[cfg(not(feature = "mock"))]
use crate::config::API_BASE;
#[cfg(feature = "mock")]
use crate::models;

#[cfg(not(feature = "mock"))]
fn request(endpoint: &Endpoint) -> RequestBuilder {
    let url = endpoint.url(API_BASE);
    match endpoint.method() {
        Method::Get => Request::get(&url),
        Method::Post => Request::post(&url),
        Method::Put => Request::put(&url),
        Method::Delete => Request::delete(&url),
    }
}

#[cfg(not(feature = "mock"))]
fn network_error(err: gloo_net::Error) -> ApiError {
    ApiError::Network(format!("{err:?}"))
}

#[cfg(not(feature = "mock"))]
fn js_error(err: JsValue) -> ApiError {
    ApiError::Request(format!("{err:?}"))
}

#[cfg(not(feature = "mock"))]
async fn read_body(response: Response) -> ApiResult<String> {
    check_status(response.status())?;
    response
        .text()
        .await
        .map_err(|e| ApiError::Decode(format!("{e:?}")))
}

#[cfg(not(feature = "mock"))]
async fn get_json<T: DeserializeOwned>(endpoint: Endpoint) -> ApiResult<T> {
    let response = request(&endpoint).send().await.map_err(network_error)?;
    let body = read_body(response).await?;
    Ok(serde_json::from_str(&body)?)
}

#[cfg(not(feature = "mock"))]
async fn send_json<B: Serialize>(endpoint: Endpoint, body: &B) -> ApiResult<()> {
    let response = request(&endpoint)
        .header("Content-Type", "application/json")
        .json(body)
        .map_err(|e| ApiError::Request(format!("Serialize error: {e:?}")))?
        .send()
        .await
        .map_err(network_error)?;
    read_body(response).await.map(|_| ())
}

#[cfg(not(feature = "mock"))]
async fn send_empty(endpoint: Endpoint) -> ApiResult<()> {
    let response = request(&endpoint)
        .header("Content-Type", "application/json")
        .send()
        .await
        .map_err(network_error)?;
    read_body(response).await.map(|_| ())
}

#[cfg(not(feature = "mock"))]
fn multipart(fields: Vec<(&'static str, String)>, image: Option<&File>) -> ApiResult<FormData> {
    let form = FormData::new().map_err(js_error)?;
    for (name, value) in fields {
        form.append_with_str(name, &value).map_err(js_error)?;
    }
    if let Some(file) = image {
        form.append_with_blob_and_filename(IMAGE_FORM_FIELD, file, &file.name())
            .map_err(js_error)?;
    }
    Ok(form)
}

#[cfg(not(feature = "mock"))]
async fn send_form(endpoint: Endpoint, form: FormData) -> ApiResult<()> {
    let response = request(&endpoint)
        .body(form)
        .map_err(|e| ApiError::Request(format!("{e:?}")))?
        .send()
        .await
        .map_err(network_error)?;
    read_body(response).await.map(|_| ())
}

/// `POST /admin/login`.
///
/// A rejected login usually comes back as a non-2xx status with a JSON body,
/// so the body is decoded before the status is checked.
pub async fn login(credentials: &LoginRequest) -> ApiResult<LoginResponse> {
    #[cfg(feature = "mock")]
    {
        if credentials.username.trim().is_empty() || credentials.password.is_empty() {
            return Ok(LoginResponse {
                success: false,
                token: None,
                message: Some(zetho_admin_shared::session::INVALID_CREDENTIALS.to_string()),
            });
        }
        return Ok(LoginResponse {
            success: true,
            token: Some(format!("mock-token-{}", credentials.username.trim())),
            message: None,
        });
    }

    #[cfg(not(feature = "mock"))]
    {
        let response = request(&Endpoint::Login)
            .header("Content-Type", "application/json")
            .json(credentials)
            .map_err(|e| ApiError::Request(format!("Serialize error: {e:?}")))?
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ApiError::Decode(format!("{e:?}")))?;

        match serde_json::from_str::<LoginResponse>(&body) {
            Ok(parsed) => Ok(parsed),
            Err(_) if status == 401 || status == 403 => {
                Err(ApiError::Rejected(format!("login refused with status {status}")))
            },
            Err(err) => check_status(status).and(Err(err.into())),
        }
    }
}

/// `GET /admin/dashboard`.
pub async fn fetch_dashboard() -> ApiResult<DashboardStats> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_dashboard());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json(Endpoint::Dashboard).await
    }
}

/// `GET /admin/help-support`. Accepts a bare array or `{ data: [...] }`.
pub async fn fetch_tickets() -> ApiResult<Vec<Ticket>> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_tickets());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json::<ListEnvelope<Ticket>>(Endpoint::HelpSupport)
            .await
            .map(ListEnvelope::into_vec)
    }
}

/// `PUT /admin/tickets/{id}` with the new status and reply.
pub async fn update_ticket(id: &RecordId, update: &TicketUpdate) -> ApiResult<()> {
    #[cfg(feature = "mock")]
    {
        let _ = (id, update);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        send_json(Endpoint::UpdateTicket(id.clone()), update).await
    }
}

/// `POST /admin/tickets/{id}/reply`, leaving the status alone.
pub async fn reply_ticket(id: &RecordId, reply: &TicketReply) -> ApiResult<()> {
    #[cfg(feature = "mock")]
    {
        let _ = (id, reply);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        send_json(Endpoint::ReplyTicket(id.clone()), reply).await
    }
}

/// `GET /admin/reported/posts`, flat.
pub async fn fetch_reported_posts() -> ApiResult<Vec<PostReport>> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_post_reports());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json(Endpoint::Reported(ReportedKind::Posts)).await
    }
}

/// `GET /admin/reported/news`.
pub async fn fetch_reported_news() -> ApiResult<Vec<ReportedNews>> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_reported_news());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json(Endpoint::Reported(ReportedKind::News)).await
    }
}

/// `GET /admin/reported/groups`.
pub async fn fetch_reported_groups() -> ApiResult<Vec<ReportedGroup>> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_reported_groups());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json(Endpoint::Reported(ReportedKind::Groups)).await
    }
}

/// `GET /admin/reported/jobs`.
pub async fn fetch_reported_jobs() -> ApiResult<Vec<JobReport>> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_reported_jobs());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json(Endpoint::Reported(ReportedKind::Jobs)).await
    }
}

/// `GET /admin/reported/users`.
pub async fn fetch_reported_users() -> ApiResult<Vec<UserReport>> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_reported_users());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json(Endpoint::Reported(ReportedKind::Users)).await
    }
}

/// Resolves or dismisses a report nested under a news item or group.
pub async fn moderate_nested_report(
    kind: NestedKind,
    parent: &RecordId,
    report: &RecordId,
    action: ReportAction,
) -> ApiResult<()> {
    #[cfg(feature = "mock")]
    {
        let _ = (kind, parent, report, action);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        send_empty(Endpoint::NestedReportAction {
            kind,
            parent: parent.clone(),
            report: report.clone(),
            action,
        })
        .await
    }
}

/// Resolves or dismisses a flat post report.
pub async fn moderate_post_report(report: &RecordId, action: ReportAction) -> ApiResult<()> {
    #[cfg(feature = "mock")]
    {
        let _ = (report, action);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        send_empty(Endpoint::FlatReportAction {
            report: report.clone(),
            action,
        })
        .await
    }
}

/// `GET /admin/main-groups`. Accepts a bare array or `{ data: [...] }`.
pub async fn fetch_main_groups() -> ApiResult<Vec<MainGroup>> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_main_groups());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json::<ListEnvelope<MainGroup>>(Endpoint::ListMainGroups)
            .await
            .map(ListEnvelope::into_vec)
    }
}

pub async fn create_main_group(input: &MainGroupInput) -> ApiResult<()> {
    #[cfg(feature = "mock")]
    {
        let _ = input;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        send_json(Endpoint::CreateMainGroup, input).await
    }
}

pub async fn update_main_group(id: &RecordId, input: &MainGroupInput) -> ApiResult<()> {
    #[cfg(feature = "mock")]
    {
        let _ = (id, input);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        send_json(Endpoint::UpdateMainGroup(id.clone()), input).await
    }
}

pub async fn delete_main_group(id: &RecordId) -> ApiResult<()> {
    #[cfg(feature = "mock")]
    {
        let _ = id;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        send_empty(Endpoint::DeleteMainGroup(id.clone())).await
    }
}

/// `GET /news`.
pub async fn fetch_news() -> ApiResult<Vec<NewsItem>> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_news());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json::<ListEnvelope<NewsItem>>(Endpoint::ListNews)
            .await
            .map(ListEnvelope::into_vec)
    }
}

/// `POST /news` as multipart, with the optional image.
pub async fn create_news(input: &NewsInput, image: Option<File>) -> ApiResult<()> {
    #[cfg(feature = "mock")]
    {
        let _ = (input, image);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let form = multipart(input.form_fields(), image.as_ref())?;
        send_form(Endpoint::CreateNews, form).await
    }
}

/// `PUT /news/{id}` as multipart. Without an image the stored one is kept.
pub async fn update_news(id: &RecordId, input: &NewsInput, image: Option<File>) -> ApiResult<()> {
    #[cfg(feature = "mock")]
    {
        let _ = (id, input, image);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let form = multipart(input.form_fields(), image.as_ref())?;
        send_form(Endpoint::UpdateNews(id.clone()), form).await
    }
}

pub async fn delete_news(id: &RecordId) -> ApiResult<()> {
    #[cfg(feature = "mock")]
    {
        let _ = id;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        send_empty(Endpoint::DeleteNews(id.clone())).await
    }
}

/// `GET /notifications`, wrapped as `{ data: [...] }`.
pub async fn fetch_notifications() -> ApiResult<Vec<Notification>> {
    #[cfg(feature = "mock")]
    {
        return Ok(models::mock_notifications());
    }

    #[cfg(not(feature = "mock"))]
    {
        get_json::<ListEnvelope<Notification>>(Endpoint::ListNotifications)
            .await
            .map(ListEnvelope::into_vec)
    }
}

pub async fn create_notification(input: &NotificationInput, image: Option<File>) -> ApiResult<()> {
    #[cfg(feature = "mock")]
    {
        let _ = (input, image);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let form = multipart(input.form_fields(), image.as_ref())?;
        send_form(Endpoint::CreateNotification, form).await
    }
}

pub async fn update_notification(
    id: &RecordId,
    input: &NotificationInput,
    image: Option<File>,
) -> ApiResult<()> {
    #[cfg(feature = "mock")]
    {
        let _ = (id, input, image);
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        let form = multipart(input.form_fields(), image.as_ref())?;
        send_form(Endpoint::UpdateNotification(id.clone()), form).await
    }
}

pub async fn delete_notification(id: &RecordId) -> ApiResult<()> {
    #[cfg(feature = "mock")]
    {
        let _ = id;
        return Ok(());
    }

    #[cfg(not(feature = "mock"))]
    {
        send_empty(Endpoint::DeleteNotification(id.clone())).await
    }
}
