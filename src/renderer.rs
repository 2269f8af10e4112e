//! External document renderer invocation.
//!
//! This layer sits outside the pagination core: it stages markup in a
//! temporary file, runs the renderer process, and removes the temporary
//! file on every exit path. Header and footer text, including page numbers,
//! is left to the renderer's own templating.

use std::ffi::OsString;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use log::{debug, info};

use crate::capacity::Orientation;
use crate::error::{Error, Result};
use crate::model::TableDocument;

/// Where the renderer reads its input from.
#[derive(Debug, Clone, Copy)]
pub enum RenderSource<'a> {
    /// Markup staged through a temporary file
    Markup(&'a str),
    /// A URL the renderer fetches itself
    Url(&'a str),
}

/// Per-document render parameters passed out of band.
#[derive(Debug, Clone, Default)]
pub struct RenderJob {
    pub title: String,
    pub orientation: Orientation,
}

impl RenderJob {
    /// Parameters for a generated table document.
    pub fn for_document(doc: &TableDocument) -> Self {
        Self {
            title: doc.title.clone(),
            orientation: doc.orientation,
        }
    }
}

/// Trait for document renderers.
pub trait DocumentRenderer: Send + Sync {
    /// Name of this renderer.
    fn name(&self) -> &str;

    /// Render `source` to a document at `output`.
    fn render(&self, source: RenderSource<'_>, job: &RenderJob, output: &Path) -> Result<()>;

    /// Render a generated table document.
    fn render_document(&self, doc: &TableDocument, output: &Path) -> Result<()> {
        let html = doc.to_html();
        self.render(RenderSource::Markup(&html), &RenderJob::for_document(doc), output)
    }
}

/// Renderer backed by the `wkhtmltopdf` command.
#[derive(Debug, Clone)]
pub struct WkhtmltopdfRenderer {
    /// Renderer executable
    pub binary: PathBuf,

    /// Paper size name (e.g. `Letter`, `A4`)
    pub page_size: String,

    /// Name shown in the footer
    pub generator_name: String,

    /// Directory for staged input; system temp dir if `None`
    pub temp_dir: Option<PathBuf>,
}

impl WkhtmltopdfRenderer {
    /// Create a renderer with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the renderer executable.
    pub fn with_binary(mut self, binary: impl Into<PathBuf>) -> Self {
        self.binary = binary.into();
        self
    }

    /// Set the paper size.
    pub fn with_page_size(mut self, page_size: impl Into<String>) -> Self {
        self.page_size = page_size.into();
        self
    }

    /// Set the generator name printed in the footer.
    pub fn with_generator_name(mut self, name: impl Into<String>) -> Self {
        self.generator_name = name.into();
        self
    }

    /// Stage temporary input in `dir`.
    pub fn with_temp_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.temp_dir = Some(dir.into());
        self
    }

    /// Command-line arguments preceding the input and output paths.
    pub fn build_args(&self, job: &RenderJob) -> Vec<OsString> {
        let mut args: Vec<OsString> = Vec::new();
        let mut push = |flag: &str, value: Option<String>| {
            args.push(flag.into());
            if let Some(v) = value {
                args.push(v.into());
            }
        };

        push("-O", Some(job.orientation.renderer_name().to_string()));
        push("-q", None);
        push("--title", Some(job.title.clone()));
        push("--header-left", Some("[title]".to_string()));
        push("--header-line", None);
        push("--header-spacing", Some("3".to_string()));
        push("--footer-line", None);
        push("--footer-font-size", Some("10".to_string()));
        push(
            "--footer-left",
            Some(format!(
                "Generated by {}, Date: [date] [time]",
                self.generator_name
            )),
        );
        push("--footer-right", Some("Page [page] of [topage]".to_string()));
        push("--page-size", Some(self.page_size.clone()));
        args
    }

    fn stage(&self, markup: &str) -> Result<tempfile::NamedTempFile> {
        let mut builder = tempfile::Builder::new();
        builder.prefix("pagetab_").suffix(".html");
        let mut file = match &self.temp_dir {
            Some(dir) => builder.tempfile_in(dir)?,
            None => builder.tempfile()?,
        };
        file.write_all(markup.as_bytes())?;
        file.flush()?;
        Ok(file)
    }

    fn run(&self, input: &OsString, job: &RenderJob, output: &Path) -> Result<()> {
        let mut command = Command::new(&self.binary);
        command.args(self.build_args(job)).arg(input).arg(output);
        debug!("running {:?}", command);

        let result = command.output().map_err(|e| {
            Error::Renderer(format!("failed to start {}: {}", self.binary.display(), e))
        })?;

        if !result.status.success() {
            let stderr = String::from_utf8_lossy(&result.stderr);
            return Err(Error::Renderer(format!(
                "{} exited with {}: {}",
                self.binary.display(),
                result.status,
                stderr.trim()
            )));
        }
        Ok(())
    }
}

impl Default for WkhtmltopdfRenderer {
    fn default() -> Self {
        Self {
            binary: PathBuf::from("wkhtmltopdf"),
            page_size: "Letter".to_string(),
            generator_name: "pagetab".to_string(),
            temp_dir: None,
        }
    }
}

impl DocumentRenderer for WkhtmltopdfRenderer {
    fn name(&self) -> &str {
        "wkhtmltopdf"
    }

    fn render(&self, source: RenderSource<'_>, job: &RenderJob, output: &Path) -> Result<()> {
        info!("rendering '{}' to {}", job.title, output.display());
        match source {
            RenderSource::Markup(markup) => {
                // Dropping the staged file deletes it, whatever `run` returns.
                let staged = self.stage(markup)?;
                self.run(&staged.path().as_os_str().to_owned(), job, output)
            }
            RenderSource::Url(url) => self.run(&OsString::from(url), job, output),
        }
    }
}
