//! Image Filter Routes - Upload an image and apply a filter

use axum::{
    extract::{multipart::MultipartError, Multipart, State},
    response::Html,
    routing::get,
    Router,
};
use minijinja::context;
use utoipa::ToSchema;

use medley::{DomainError, FilterKind};

use crate::application::ImageUpload;
use crate::error::PageError;
use crate::views;
use crate::AppState;

const FORM_PATH: &str = "/image_filter";

/// Multipart body of the upload form (documentation only)
#[derive(ToSchema)]
#[allow(dead_code)]
pub struct ImageFilterForm {
    /// Image file to filter
    #[schema(value_type = String, format = Binary)]
    pub users_image: Vec<u8>,
    /// One of: blur, contour, detail, edge enhance, emboss, sharpen, smooth, greyscale
    pub filter_type: String,
}

/// Show the upload form
#[utoipa::path(
    get,
    path = "/image_filter",
    responses(
        (status = 200, description = "Upload form", content_type = "text/html", body = String)
    ),
    tag = "Image Filter"
)]
pub async fn image_filter_form() -> Result<Html<String>, PageError> {
    views::render(
        "image_filter.html",
        context! { filter_types => FilterKind::names().collect::<Vec<_>>() },
    )
}

/// Filter an uploaded image
#[utoipa::path(
    post,
    path = "/image_filter",
    request_body(content = ImageFilterForm, content_type = "multipart/form-data"),
    responses(
        (status = 200, description = "Filtered image page", content_type = "text/html", body = String),
        (status = 400, description = "Unknown filter, missing file or unsupported image", content_type = "text/html", body = String),
        (status = 413, description = "Upload too large", content_type = "text/html", body = String)
    ),
    tag = "Image Filter"
)]
pub async fn image_filter(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Html<String>, PageError> {
    let mut filter_name: Option<String> = None;
    let mut upload: Option<ImageUpload> = None;

    while let Some(field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().map(str::to_owned);
        match name.as_deref() {
            Some("filter_type") => {
                filter_name = Some(field.text().await.map_err(multipart_error)?);
            }
            Some("users_image") => {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field.bytes().await.map_err(multipart_error)?;
                upload = Some(ImageUpload {
                    file_name,
                    bytes: bytes.to_vec(),
                });
            }
            _ => {}
        }
    }

    let filter: FilterKind = filter_name
        .as_deref()
        .unwrap_or_default()
        .parse()
        .map_err(|e| PageError::from_domain(e, FORM_PATH))?;

    let upload = upload.filter(|u| !u.bytes.is_empty()).ok_or_else(|| {
        PageError::from_domain(
            DomainError::Validation("Please choose an image to upload".to_string()),
            FORM_PATH,
        )
    })?;

    let filtered = state
        .image_filter
        .apply(upload, filter)
        .await
        .map_err(|e| PageError::from_domain(e, FORM_PATH))?;

    views::render(
        "image_filter.html",
        context! {
            filter_types => FilterKind::names().collect::<Vec<_>>(),
            chosen_filter => filtered.filter.name(),
            image_url => filtered.url,
            width => filtered.width,
            height => filtered.height,
        },
    )
}

fn multipart_error(err: MultipartError) -> PageError {
    tracing::info!("Rejected upload: {}", err);
    PageError::new(err.status(), err.body_text()).with_back(FORM_PATH)
}

pub fn router() -> Router<AppState> {
    Router::new().route(FORM_PATH, get(image_filter_form).post(image_filter))
}
