//! OpenAPI Documentation
//!
//! Centralized API documentation using utoipa.

use utoipa::OpenApi;

use super::gif_search::GifSearchForm;
use super::image_filter::ImageFilterForm;

#[derive(OpenApi)]
#[openapi(
    paths(
        super::home::homepage,
        // Compliments
        super::compliments::compliments_form,
        super::compliments::compliments_results,
        // Animal facts
        super::animal_facts::animal_facts,
        // Image filter
        super::image_filter::image_filter_form,
        super::image_filter::image_filter,
        // GIF search
        super::gif_search::gif_search_form,
        super::gif_search::gif_search,
    ),
    components(schemas(GifSearchForm, ImageFilterForm)),
    tags(
        (name = "Pages", description = "Landing page"),
        (name = "Compliments", description = "Random compliments"),
        (name = "Animal Facts", description = "Facts about a few animals"),
        (name = "Image Filter", description = "Upload an image and filter it"),
        (name = "GIF Search", description = "Search GIFs through Tenor")
    ),
    info(
        title = "Medley",
        description = "A handful of small demo pages"
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_page_is_documented() {
        let doc = ApiDoc::openapi();
        for path in [
            "/",
            "/compliments",
            "/compliments_results",
            "/animal_facts",
            "/image_filter",
            "/gif_search",
        ] {
            assert!(doc.paths.paths.contains_key(path), "{path}");
        }
    }
}
