//! Portfolio HTTP handlers.
//!
//! ```text
//! GET    /portfolio
//! GET    /portfolio/{id}
//! GET    /portfolio/{id}/image
//! GET    /portfolio/{id}/resume
//! GET    /portfolio/by-username/{key}
//! POST   /portfolio
//! PUT    /portfolio/{id}
//! DELETE /portfolio/{id}
//! ```
//!
//! Create and update consume `multipart/form-data` bound to an explicit
//! form struct; every field is validated by the domain service before any
//! store interaction. Raw attachment bytes are only ever served by the
//! dedicated binary endpoints, never embedded in JSON.

use actix_multipart::form::{MultipartForm, bytes::Bytes as UploadField, text::Text};
use actix_web::{HttpResponse, delete, get, http::header, post, put, web};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::domain::ports::{AttachmentUpload, CreatePortfolio, UpdatePortfolio};
use crate::domain::{Attachment, Portfolio, PortfolioId};
use crate::inbound::http::ApiResult;
use crate::inbound::http::schemas::ErrorSchema;
use crate::inbound::http::state::HttpState;

/// Fixed download name suggested for résumé responses.
const RESUME_DOWNLOAD_NAME: &str = "resume.pdf";

/// Multipart form shared by create and update.
///
/// All fields are optional at the binding layer; requiredness is a domain
/// rule (create demands both files, update treats them as "keep existing").
#[derive(Debug, MultipartForm)]
pub struct PortfolioForm {
    pub name: Option<Text<String>>,
    pub title: Option<Text<String>>,
    pub description: Option<Text<String>>,
    pub image: Option<UploadField>,
    pub resume: Option<UploadField>,
}

/// Portfolio resource as serialized in list and get responses.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PortfolioResponse {
    #[schema(example = "3fa85f64-5717-4562-b3fc-2c963f66afa6")]
    pub id: String,
    #[schema(example = "Jane Doe")]
    pub name: String,
    pub title: String,
    pub description: String,
    #[schema(example = "image/png")]
    pub image_content_type: String,
    #[schema(example = "application/pdf")]
    pub resume_content_type: String,
    #[schema(example = "jane-doe")]
    pub username_key: String,
}

impl From<Portfolio> for PortfolioResponse {
    fn from(value: Portfolio) -> Self {
        Self {
            id: value.id.to_string(),
            name: value.name,
            title: value.title,
            description: value.description,
            image_content_type: value.image.content_type().to_owned(),
            resume_content_type: value.resume.content_type().to_owned(),
            username_key: value.username_key,
        }
    }
}

fn into_upload(field: UploadField) -> AttachmentUpload {
    AttachmentUpload {
        data: field.data.to_vec(),
        content_type: field.content_type.map(|mime| mime.to_string()),
    }
}

fn text_or_default(field: Option<Text<String>>) -> String {
    field.map(|text| text.0).unwrap_or_default()
}

fn into_create_request(form: PortfolioForm) -> CreatePortfolio {
    CreatePortfolio {
        name: text_or_default(form.name),
        title: text_or_default(form.title),
        description: text_or_default(form.description),
        image: form.image.map(into_upload),
        resume: form.resume.map(into_upload),
    }
}

fn into_update_request(form: PortfolioForm) -> UpdatePortfolio {
    UpdatePortfolio {
        name: text_or_default(form.name),
        title: text_or_default(form.title),
        description: text_or_default(form.description),
        image: form.image.map(into_upload),
        resume: form.resume.map(into_upload),
    }
}

fn binary_response(attachment: Attachment) -> HttpResponse {
    let (bytes, content_type) = attachment.into_parts();
    HttpResponse::Ok().content_type(content_type).body(bytes)
}

/// List every stored portfolio.
#[utoipa::path(
    get,
    path = "/portfolio",
    responses(
        (status = 200, description = "All portfolios", body = [PortfolioResponse]),
        (status = 500, description = "Internal server error", body = ErrorSchema)
    ),
    tags = ["portfolio"],
    operation_id = "listPortfolios"
)]
#[get("/portfolio")]
pub async fn list_portfolios(
    state: web::Data<HttpState>,
) -> ApiResult<web::Json<Vec<PortfolioResponse>>> {
    let records = state.portfolio_query.list().await?;
    Ok(web::Json(
        records.into_iter().map(PortfolioResponse::from).collect(),
    ))
}

/// Fetch one portfolio by identifier.
#[utoipa::path(
    get,
    path = "/portfolio/{id}",
    params(("id" = String, Path, description = "Portfolio identifier")),
    responses(
        (status = 200, description = "Portfolio", body = PortfolioResponse),
        (status = 404, description = "No portfolio matches the identifier", body = ErrorSchema)
    ),
    tags = ["portfolio"],
    operation_id = "getPortfolio"
)]
#[get("/portfolio/{id}")]
pub async fn get_portfolio(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PortfolioResponse>> {
    let id = PortfolioId::new(path.into_inner());
    let record = state.portfolio_query.get(&id).await?;
    Ok(web::Json(PortfolioResponse::from(record)))
}

/// Serve the profile image bytes with their stored content type.
#[utoipa::path(
    get,
    path = "/portfolio/{id}/image",
    params(("id" = String, Path, description = "Portfolio identifier")),
    responses(
        (status = 200, description = "Image bytes with stored content type"),
        (status = 404, description = "Portfolio absent or image never set", body = ErrorSchema)
    ),
    tags = ["portfolio"],
    operation_id = "getPortfolioImage"
)]
#[get("/portfolio/{id}/image")]
pub async fn get_portfolio_image(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = PortfolioId::new(path.into_inner());
    let attachment = state.portfolio_query.image(&id).await?;
    Ok(binary_response(attachment))
}

/// Serve the résumé bytes with a fixed suggested download name.
#[utoipa::path(
    get,
    path = "/portfolio/{id}/resume",
    params(("id" = String, Path, description = "Portfolio identifier")),
    responses(
        (status = 200, description = "Résumé bytes, suggested filename resume.pdf"),
        (status = 404, description = "Portfolio absent or résumé never set", body = ErrorSchema)
    ),
    tags = ["portfolio"],
    operation_id = "getPortfolioResume"
)]
#[get("/portfolio/{id}/resume")]
pub async fn get_portfolio_resume(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = PortfolioId::new(path.into_inner());
    let attachment = state.portfolio_query.resume(&id).await?;
    let (bytes, content_type) = attachment.into_parts();
    Ok(HttpResponse::Ok()
        .content_type(content_type)
        .insert_header((
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{RESUME_DOWNLOAD_NAME}\""),
        ))
        .body(bytes))
}

/// Look a portfolio up by its normalized username key.
#[utoipa::path(
    get,
    path = "/portfolio/by-username/{key}",
    params(("key" = String, Path, description = "Normalized username key, e.g. jane-doe")),
    responses(
        (status = 200, description = "Portfolio", body = PortfolioResponse),
        (status = 404, description = "No portfolio matches the key", body = ErrorSchema)
    ),
    tags = ["portfolio"],
    operation_id = "getPortfolioByUsername"
)]
#[get("/portfolio/by-username/{key}")]
pub async fn get_portfolio_by_username(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<web::Json<PortfolioResponse>> {
    let record = state.portfolio_query.get_by_username(&path).await?;
    Ok(web::Json(PortfolioResponse::from(record)))
}

/// Create a portfolio from a multipart form.
#[utoipa::path(
    post,
    path = "/portfolio",
    responses(
        (
            status = 201,
            description = "Created portfolio; Location names the GET-by-id resource",
            body = PortfolioResponse
        ),
        (status = 400, description = "Validation failure", body = ErrorSchema)
    ),
    tags = ["portfolio"],
    operation_id = "createPortfolio"
)]
#[post("/portfolio")]
pub async fn create_portfolio(
    state: web::Data<HttpState>,
    form: MultipartForm<PortfolioForm>,
) -> ApiResult<HttpResponse> {
    let request = into_create_request(form.into_inner());
    let created = state.portfolio_command.create(request).await?;
    let location = format!("/portfolio/{}", created.id);
    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, location))
        .json(PortfolioResponse::from(created)))
}

/// Replace a portfolio, carrying forward any omitted attachment pair.
#[utoipa::path(
    put,
    path = "/portfolio/{id}",
    params(("id" = String, Path, description = "Portfolio identifier")),
    responses(
        (status = 204, description = "Portfolio replaced"),
        (status = 400, description = "Validation failure", body = ErrorSchema),
        (status = 404, description = "No portfolio matches the identifier", body = ErrorSchema)
    ),
    tags = ["portfolio"],
    operation_id = "updatePortfolio"
)]
#[put("/portfolio/{id}")]
pub async fn update_portfolio(
    state: web::Data<HttpState>,
    path: web::Path<String>,
    form: MultipartForm<PortfolioForm>,
) -> ApiResult<HttpResponse> {
    let id = PortfolioId::new(path.into_inner());
    let request = into_update_request(form.into_inner());
    state.portfolio_command.update(&id, request).await?;
    Ok(HttpResponse::NoContent().finish())
}

/// Delete a portfolio.
#[utoipa::path(
    delete,
    path = "/portfolio/{id}",
    params(("id" = String, Path, description = "Portfolio identifier")),
    responses(
        (status = 204, description = "Portfolio deleted"),
        (status = 404, description = "No portfolio matches the identifier", body = ErrorSchema)
    ),
    tags = ["portfolio"],
    operation_id = "deletePortfolio"
)]
#[delete("/portfolio/{id}")]
pub async fn delete_portfolio(
    state: web::Data<HttpState>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = PortfolioId::new(path.into_inner());
    state.portfolio_command.delete(&id).await?;
    Ok(HttpResponse::NoContent().finish())
}
