//! End-to-end tests for the portfolio HTTP endpoints over the in-memory
//! store.

use std::sync::Arc;

use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::http::{StatusCode, header};
use actix_web::{App, Error, test, web};
use serde_json::Value;

use portfolio_api::inbound::http::portfolios::{
    create_portfolio, delete_portfolio, get_portfolio, get_portfolio_by_username,
    get_portfolio_image, get_portfolio_resume, list_portfolios, update_portfolio,
};
use portfolio_api::inbound::http::state::HttpState;
use portfolio_api::outbound::persistence::InMemoryPortfolioRepository;

const BOUNDARY: &str = "portfolio-test-boundary";

const PNG_BYTES: &[u8] = &[0x89, b'P', b'N', b'G', 0x0d, 0x0a, 0x1a, 0x0a];
const PDF_BYTES: &[u8] = b"%PDF-1.4 minimal";

fn test_app() -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse,
        Error = Error,
        InitError = (),
    >,
> {
    let state = HttpState::from_repository(Arc::new(InMemoryPortfolioRepository::new()));
    App::new()
        .app_data(web::Data::new(state))
        .service(list_portfolios)
        .service(get_portfolio_by_username)
        .service(get_portfolio_image)
        .service(get_portfolio_resume)
        .service(get_portfolio)
        .service(create_portfolio)
        .service(update_portfolio)
        .service(delete_portfolio)
}

/// Hand-assembled `multipart/form-data` body.
struct MultipartBody {
    bytes: Vec<u8>,
}

impl MultipartBody {
    fn new() -> Self {
        Self { bytes: Vec::new() }
    }

    fn text(mut self, name: &str, value: &str) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"\r\n\r\n{value}\r\n"
            )
            .as_bytes(),
        );
        self
    }

    fn file(mut self, name: &str, filename: &str, content_type: &str, data: &[u8]) -> Self {
        self.bytes.extend_from_slice(
            format!(
                "--{BOUNDARY}\r\nContent-Disposition: form-data; name=\"{name}\"; \
                 filename=\"{filename}\"\r\nContent-Type: {content_type}\r\n\r\n"
            )
            .as_bytes(),
        );
        self.bytes.extend_from_slice(data);
        self.bytes.extend_from_slice(b"\r\n");
        self
    }

    fn finish(mut self) -> Vec<u8> {
        self.bytes
            .extend_from_slice(format!("--{BOUNDARY}--\r\n").as_bytes());
        self.bytes
    }
}

fn multipart_request(req: test::TestRequest, body: Vec<u8>) -> test::TestRequest {
    req.insert_header((
        header::CONTENT_TYPE,
        format!("multipart/form-data; boundary={BOUNDARY}"),
    ))
    .set_payload(body)
}

fn full_form(name: &str) -> Vec<u8> {
    MultipartBody::new()
        .text("name", name)
        .text("title", "Engineer")
        .text("description", "Builds things.")
        .file("image", "avatar.png", "image/png", PNG_BYTES)
        .file("resume", "cv.pdf", "application/pdf", PDF_BYTES)
        .finish()
}

async fn create(
    app: &impl actix_web::dev::Service<
        actix_http::Request,
        Response = ServiceResponse,
        Error = Error,
    >,
    name: &str,
) -> Value {
    let req = multipart_request(test::TestRequest::post().uri("/portfolio"), full_form(name))
        .to_request();
    let res = test::call_service(app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    test::read_body_json(res).await
}

#[actix_web::test]
async fn create_returns_created_with_location_and_username_key() {
    let app = test::init_service(test_app()).await;

    let req = multipart_request(
        test::TestRequest::post().uri("/portfolio"),
        full_form("Jane Doe"),
    )
    .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::CREATED);
    let location = res
        .headers()
        .get(header::LOCATION)
        .expect("location header")
        .to_str()
        .expect("ascii header")
        .to_owned();

    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["name"], "Jane Doe");
    assert_eq!(body["usernameKey"], "jane-doe");
    assert_eq!(body["imageContentType"], "image/png");
    assert_eq!(body["resumeContentType"], "application/pdf");
    assert_eq!(
        location,
        format!("/portfolio/{}", body["id"].as_str().expect("string id"))
    );
}

#[actix_web::test]
async fn created_portfolio_is_listed_and_fetchable() {
    let app = test::init_service(test_app()).await;
    let created = create(&app, "Jane Doe").await;
    let id = created["id"].as_str().expect("string id");

    let listed: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get().uri("/portfolio").to_request(),
    )
    .await;
    assert_eq!(listed.as_array().map(Vec::len), Some(1));

    let fetched: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/portfolio/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(fetched["id"], created["id"]);
    assert_eq!(fetched["name"], "Jane Doe");
}

#[actix_web::test]
async fn lookup_by_username_key_round_trips() {
    let app = test::init_service(test_app()).await;
    create(&app, "Jane Doe").await;

    let found: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri("/portfolio/by-username/jane-doe")
            .to_request(),
    )
    .await;
    assert_eq!(found["name"], "Jane Doe");

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/portfolio/by-username/john-smith")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn create_without_name_is_rejected() {
    let app = test::init_service(test_app()).await;

    let body = MultipartBody::new()
        .text("name", "   ")
        .file("image", "avatar.png", "image/png", PNG_BYTES)
        .file("resume", "cv.pdf", "application/pdf", PDF_BYTES)
        .finish();
    let req = multipart_request(test::TestRequest::post().uri("/portfolio"), body).to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "invalid_request");
    assert_eq!(body["message"], "Name is required.");
}

#[actix_web::test]
async fn create_without_files_is_rejected() {
    let app = test::init_service(test_app()).await;

    let body = MultipartBody::new().text("name", "Jane Doe").finish();
    let req = multipart_request(test::TestRequest::post().uri("/portfolio"), body).to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Image and resume files are required.");
}

#[actix_web::test]
async fn create_with_wrong_content_types_is_rejected() {
    let app = test::init_service(test_app()).await;

    let bad_image = MultipartBody::new()
        .text("name", "Jane Doe")
        .file("image", "avatar.txt", "text/plain", b"not an image")
        .file("resume", "cv.pdf", "application/pdf", PDF_BYTES)
        .finish();
    let req =
        multipart_request(test::TestRequest::post().uri("/portfolio"), bad_image).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Invalid image file type.");

    let bad_resume = MultipartBody::new()
        .text("name", "Jane Doe")
        .file("image", "avatar.png", "image/png", PNG_BYTES)
        .file("resume", "cv.png", "image/png", PNG_BYTES)
        .finish();
    let req =
        multipart_request(test::TestRequest::post().uri("/portfolio"), bad_resume).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["message"], "Resume must be a PDF file.");
}

#[actix_web::test]
async fn attachment_bytes_round_trip() {
    let app = test::init_service(test_app()).await;
    let created = create(&app, "Jane Doe").await;
    let id = created["id"].as_str().expect("string id");

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/portfolio/{id}/image"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get(header::CONTENT_TYPE).expect("content type"),
        "image/png"
    );
    assert_eq!(test::read_body(res).await.as_ref(), PNG_BYTES);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/portfolio/{id}/resume"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(
        res.headers().get(header::CONTENT_TYPE).expect("content type"),
        "application/pdf"
    );
    assert_eq!(
        res.headers()
            .get(header::CONTENT_DISPOSITION)
            .expect("content disposition"),
        "attachment; filename=\"resume.pdf\""
    );
    assert_eq!(test::read_body(res).await.as_ref(), PDF_BYTES);
}

#[actix_web::test]
async fn update_without_files_preserves_attachments() {
    let app = test::init_service(test_app()).await;
    let created = create(&app, "Jane Doe").await;
    let id = created["id"].as_str().expect("string id");

    let body = MultipartBody::new()
        .text("name", "Jane Smith")
        .text("title", "Principal Engineer")
        .text("description", "Still builds things.")
        .finish();
    let req = multipart_request(
        test::TestRequest::put().uri(&format!("/portfolio/{id}")),
        body,
    )
    .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let fetched: Value = test::call_and_read_body_json(
        &app,
        test::TestRequest::get()
            .uri(&format!("/portfolio/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(fetched["name"], "Jane Smith");
    assert_eq!(fetched["usernameKey"], "jane-smith");
    assert_eq!(fetched["imageContentType"], "image/png");

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/portfolio/{id}/image"))
            .to_request(),
    )
    .await;
    assert_eq!(test::read_body(res).await.as_ref(), PNG_BYTES);
}

#[actix_web::test]
async fn update_replaces_supplied_attachment_pair() {
    let app = test::init_service(test_app()).await;
    let created = create(&app, "Jane Doe").await;
    let id = created["id"].as_str().expect("string id");

    let new_image = b"fresh image bytes";
    let body = MultipartBody::new()
        .text("name", "Jane Doe")
        .file("image", "avatar.jpg", "image/jpeg", new_image)
        .finish();
    let req = multipart_request(
        test::TestRequest::put().uri(&format!("/portfolio/{id}")),
        body,
    )
    .to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/portfolio/{id}/image"))
            .to_request(),
    )
    .await;
    assert_eq!(
        res.headers().get(header::CONTENT_TYPE).expect("content type"),
        "image/jpeg"
    );
    assert_eq!(test::read_body(res).await.as_ref(), new_image);

    // The untouched resume pair is carried forward.
    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/portfolio/{id}/resume"))
            .to_request(),
    )
    .await;
    assert_eq!(test::read_body(res).await.as_ref(), PDF_BYTES);
}

#[actix_web::test]
async fn update_unknown_id_is_not_found() {
    let app = test::init_service(test_app()).await;

    let req = multipart_request(
        test::TestRequest::put().uri("/portfolio/3fa85f64-5717-4562-b3fc-2c963f66afa6"),
        full_form("Jane Doe"),
    )
    .to_request();
    let res = test::call_service(&app, req).await;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    let body: Value = test::read_body_json(res).await;
    assert_eq!(body["code"], "not_found");
}

#[actix_web::test]
async fn delete_then_get_is_not_found() {
    let app = test::init_service(test_app()).await;
    let created = create(&app, "Jane Doe").await;
    let id = created["id"].as_str().expect("string id");

    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/portfolio/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NO_CONTENT);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/portfolio/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // Deleting again reports the absence rather than succeeding silently.
    let res = test::call_service(
        &app,
        test::TestRequest::delete()
            .uri(&format!("/portfolio/{id}"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn malformed_id_is_not_found() {
    let app = test::init_service(test_app()).await;
    create(&app, "Jane Doe").await;

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri("/portfolio/not-a-uuid")
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn zero_length_image_upload_serves_no_image() {
    let app = test::init_service(test_app()).await;

    let body = MultipartBody::new()
        .text("name", "Jane Doe")
        .file("image", "avatar.png", "image/png", b"")
        .file("resume", "cv.pdf", "application/pdf", PDF_BYTES)
        .finish();
    let req = multipart_request(test::TestRequest::post().uri("/portfolio"), body).to_request();
    let res = test::call_service(&app, req).await;
    assert_eq!(res.status(), StatusCode::CREATED);
    let created: Value = test::read_body_json(res).await;
    let id = created["id"].as_str().expect("string id");
    assert_eq!(created["imageContentType"], "");

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/portfolio/{id}/image"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = test::call_service(
        &app,
        test::TestRequest::get()
            .uri(&format!("/portfolio/{id}/resume"))
            .to_request(),
    )
    .await;
    assert_eq!(res.status(), StatusCode::OK);
}
