use std::{
    fmt, fs,
    io::Write,
    path::{Path, PathBuf},
};

use carousel_app::{CarouselError, CarouselResult, Configuration, ElementSource, Presenter};
use image::{io::Reader, ImageFormat};

/// A single image shown by the carousel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Slide {
    pub path: PathBuf,
    pub width: u32,
    pub height: u32,
}

impl fmt::Display for Slide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = self
            .path
            .file_name()
            .unwrap_or(self.path.as_os_str())
            .to_string_lossy();
        write!(f, "{} ({}x{})", name, self.width, self.height)
    }
}

/// Captures the images of a directory ordered by their file names.
///
/// Files with an unknown image extension are ignored, files whose dimensions cannot be
/// read are skipped with a warning.
#[derive(Debug, Clone)]
pub struct DirectorySource {
    path: PathBuf,
}

impl DirectorySource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ElementSource for DirectorySource {
    type Element = Slide;

    fn query(&mut self) -> CarouselResult<Vec<Slide>> {
        let mut paths = Vec::new();
        for entry in fs::read_dir(&self.path).map_err(CarouselError::source_unavailable)? {
            let path = entry.map_err(CarouselError::source_unavailable)?.path();
            if path.is_file() && ImageFormat::from_path(&path).is_ok() {
                paths.push(path);
            }
        }
        paths.sort();

        let slides = paths
            .into_iter()
            .filter_map(|path| match read_dimensions(&path) {
                Ok((width, height)) => Some(Slide {
                    path,
                    width,
                    height,
                }),
                Err(err) => {
                    log::warn!("Skipping {}: {}", path.display(), err);
                    None
                }
            })
            .collect::<Vec<_>>();

        log::info!(
            "Found {} slides in the {}",
            slides.len(),
            self.path.display()
        );
        Ok(slides)
    }
}

fn read_dimensions(path: &Path) -> anyhow::Result<(u32, u32)> {
    let dimensions = Reader::open(path)?.into_dimensions()?;
    Ok(dimensions)
}

/// Prints the slide that becomes active.
pub struct TerminalPresenter<W> {
    out: W,
}

impl<W: Write> TerminalPresenter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Presenter<Slide> for TerminalPresenter<W> {
    fn set_active(&mut self, slide: &Slide) {
        if let Err(err) = writeln!(self.out, "> {slide}").and_then(|()| self.out.flush()) {
            log::warn!("Unable to show {}: {}", slide, err);
        }
    }

    fn clear_active(&mut self, slide: &Slide) {
        log::trace!("Hiding {}", slide);
    }
}

/// Reads a carousel configuration from the given JSON file, or returns the default one.
pub fn load_config(path: Option<&Path>) -> anyhow::Result<Configuration> {
    let Some(path) = path else {
        return Ok(Configuration::default());
    };

    let bytes = fs::read(path)?;
    let config: Configuration = serde_json::from_slice(&bytes).map_err(CarouselError::decode)?;
    log::debug!("Loaded {:?} from {}", config, path.display());
    Ok(config)
}
