//! Portfolio domain service.
//!
//! Implements the driving ports over a [`PortfolioRepository`]: validates
//! input field by field before any store interaction, normalizes the
//! username key, enforces the attachment pair rules, and maps store
//! failures into domain errors.

use std::sync::Arc;

use async_trait::async_trait;
use serde_json::json;

use crate::domain::ports::{
    AttachmentUpload, CreatePortfolio, PortfolioCommand, PortfolioQuery, PortfolioRepository,
    PortfolioStoreError, UpdatePortfolio,
};
use crate::domain::{
    Attachment, Error, NewPortfolio, Portfolio, PortfolioId, lookup_name, username_key,
};

/// Résumé uploads must declare exactly this MIME type.
pub const RESUME_CONTENT_TYPE: &str = "application/pdf";

/// Image uploads must declare a MIME type under this top-level family.
pub const IMAGE_CONTENT_TYPE_PREFIX: &str = "image/";

/// Service implementing [`PortfolioQuery`] and [`PortfolioCommand`].
///
/// Stateless between requests: all durable state lives behind the
/// repository, so the service can be shared freely across workers.
#[derive(Clone)]
pub struct PortfolioService<R> {
    repo: Arc<R>,
}

impl<R> PortfolioService<R> {
    /// Create a new service over the given repository.
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }
}

fn map_store_error(error: PortfolioStoreError) -> Error {
    match error {
        PortfolioStoreError::Connection { message } => {
            Error::service_unavailable(format!("portfolio store unavailable: {message}"))
        }
        PortfolioStoreError::Query { message } => {
            Error::internal(format!("portfolio store error: {message}"))
        }
    }
}

fn validate_name(name: &str) -> Result<(), Error> {
    if name.trim().is_empty() {
        return Err(Error::invalid_request("Name is required.").with_details(json!({
            "field": "name",
            "code": "missing_field",
        })));
    }
    Ok(())
}

fn validate_image_upload(upload: &AttachmentUpload) -> Result<(), Error> {
    let declared = upload.content_type.as_deref().unwrap_or_default();
    if !declared.starts_with(IMAGE_CONTENT_TYPE_PREFIX) {
        return Err(
            Error::invalid_request("Invalid image file type.").with_details(json!({
                "field": "image",
                "value": declared,
                "code": "invalid_content_type",
            })),
        );
    }
    Ok(())
}

fn validate_resume_upload(upload: &AttachmentUpload) -> Result<(), Error> {
    let declared = upload.content_type.as_deref().unwrap_or_default();
    if declared != RESUME_CONTENT_TYPE {
        return Err(
            Error::invalid_request("Resume must be a PDF file.").with_details(json!({
                "field": "resume",
                "value": declared,
                "code": "invalid_content_type",
            })),
        );
    }
    Ok(())
}

/// Turn a validated upload into a stored pair.
fn buffer_upload(upload: AttachmentUpload) -> Attachment {
    let AttachmentUpload { data, content_type } = upload;
    Attachment::from_upload(data, content_type.unwrap_or_default())
}

fn portfolio_not_found(id: &PortfolioId) -> Error {
    Error::not_found(format!("no portfolio matches id {id}"))
}

#[async_trait]
impl<R> PortfolioQuery for PortfolioService<R>
where
    R: PortfolioRepository,
{
    async fn list(&self) -> Result<Vec<Portfolio>, Error> {
        self.repo.list().await.map_err(map_store_error)
    }

    async fn get(&self, id: &PortfolioId) -> Result<Portfolio, Error> {
        self.repo
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| portfolio_not_found(id))
    }

    async fn get_by_username(&self, key: &str) -> Result<Portfolio, Error> {
        let name = lookup_name(key);
        self.repo
            .find_by_name(&name)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| Error::not_found(format!("no portfolio matches username {key}")))
    }

    async fn image(&self, id: &PortfolioId) -> Result<Attachment, Error> {
        let record = self.get(id).await?;
        if record.image.is_empty() {
            return Err(portfolio_not_found(id));
        }
        Ok(record.image)
    }

    async fn resume(&self, id: &PortfolioId) -> Result<Attachment, Error> {
        let record = self.get(id).await?;
        if record.resume.is_empty() {
            return Err(portfolio_not_found(id));
        }
        Ok(record.resume)
    }
}

#[async_trait]
impl<R> PortfolioCommand for PortfolioService<R>
where
    R: PortfolioRepository,
{
    async fn create(&self, request: CreatePortfolio) -> Result<Portfolio, Error> {
        validate_name(&request.name)?;

        let (Some(image), Some(resume)) = (request.image, request.resume) else {
            return Err(
                Error::invalid_request("Image and resume files are required.").with_details(
                    json!({
                        "fields": ["image", "resume"],
                        "code": "missing_field",
                    }),
                ),
            );
        };
        validate_image_upload(&image)?;
        validate_resume_upload(&resume)?;

        let record = NewPortfolio {
            username_key: username_key(&request.name),
            name: request.name,
            title: request.title,
            description: request.description,
            image: buffer_upload(image),
            resume: buffer_upload(resume),
        };

        self.repo.insert(record).await.map_err(map_store_error)
    }

    async fn update(&self, id: &PortfolioId, request: UpdatePortfolio) -> Result<(), Error> {
        validate_name(&request.name)?;

        let existing = self
            .repo
            .find_by_id(id)
            .await
            .map_err(map_store_error)?
            .ok_or_else(|| portfolio_not_found(id))?;

        // Each pair is replaced wholesale or carried forward untouched;
        // halves are never mixed.
        let image = match request.image {
            Some(upload) => {
                validate_image_upload(&upload)?;
                buffer_upload(upload)
            }
            None => existing.image,
        };
        let resume = match request.resume {
            Some(upload) => {
                validate_resume_upload(&upload)?;
                buffer_upload(upload)
            }
            None => existing.resume,
        };

        let record = Portfolio {
            id: id.clone(),
            username_key: username_key(&request.name),
            name: request.name,
            title: request.title,
            description: request.description,
            image,
            resume,
        };

        // Read-modify-write races with concurrent writers; last write wins.
        self.repo.replace(&record).await.map_err(map_store_error)
    }

    async fn delete(&self, id: &PortfolioId) -> Result<(), Error> {
        let removed = self.repo.delete(id).await.map_err(map_store_error)?;
        if !removed {
            return Err(portfolio_not_found(id));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "portfolio_service_tests.rs"]
mod tests;
