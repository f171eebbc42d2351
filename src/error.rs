use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum SlideError {
    #[error(transparent)]
    /// An I/O error occurred
    Io(#[from] std::io::Error),

    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsing(#[from] owned_ttf_parser::FaceParsingError),

    #[error(transparent)]
    /// [ab_glyph] could not read the font for rasterisation
    InvalidFont(#[from] ab_glyph::InvalidFont),

    #[error(transparent)]
    /// [image] failed to encode or write a rendered slide
    Image(#[from] image::ImageError),

    #[error(transparent)]
    /// A script or configuration file could not be (de)serialised
    Json(#[from] serde_json::Error),

    #[error("slide {0} is not in the deck")]
    /// A slide index past the end of the deck was requested
    SlideMissing(usize),

    #[error("slide refers to a font that is not in the deck")]
    /// A slide's font ID belongs to a different deck
    FontMissing,
}
