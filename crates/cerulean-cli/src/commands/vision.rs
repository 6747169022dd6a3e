//! Vision command implementation.

use crate::cli::VisionArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use cerulean_adapters::ImageAnalyzer;
use cerulean_azure::VisionClient;
use cerulean_domain::ImageSource;
use std::path::PathBuf;

/// Image analyzed when neither a URL nor a file is given
pub const DEMO_IMAGE_URL: &str =
    "https://upload.wikimedia.org/wikipedia/commons/thumb/3/3a/Cat03.jpg/1200px-Cat03.jpg";

/// Execute the vision command.
pub fn execute_vision(args: VisionArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let vision = config.vision_config(args.endpoint, args.key)?;
    let analyzer = ImageAnalyzer::new(VisionClient::new(&vision));
    let source = image_source(args.url, args.file);

    if let Some(banner) = formatter.banner("Azure AI Vision: Image Analysis") {
        println!("{}", banner);
        println!("{}\n", formatter.info(&format!("Analyzing image: {}", source)));
    }

    let analysis = analyzer.analyze_image(&source)?;
    println!("{}", formatter.format_image_analysis(&analysis)?);

    Ok(())
}

/// Image to analyze: the file, the URL, or the demo image.
pub fn image_source(url: Option<String>, file: Option<PathBuf>) -> ImageSource {
    match (file, url) {
        (Some(path), _) => ImageSource::File(path),
        (None, Some(url)) => ImageSource::Url(url),
        (None, None) => ImageSource::url(DEMO_IMAGE_URL),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_image_by_default() {
        assert_eq!(image_source(None, None), ImageSource::url(DEMO_IMAGE_URL));
    }

    #[test]
    fn test_url_source() {
        assert_eq!(
            image_source(Some("https://example.com/cat.jpg".to_string()), None),
            ImageSource::url("https://example.com/cat.jpg")
        );
    }

    #[test]
    fn test_file_source() {
        assert_eq!(
            image_source(None, Some(PathBuf::from("images/cat.jpg"))),
            ImageSource::file("images/cat.jpg")
        );
    }
}
