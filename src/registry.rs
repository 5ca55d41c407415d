//! Registration of the mode with a host.
//!
//! The host builds a [`Registry`] at startup and registers the descriptors it
//! wants; nothing is registered as a side effect of loading this crate.

use std::path::Path;

/// Everything a host needs to pick this tokenizer for a document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModeDescriptor {
    /// Canonical content-type identifier.
    pub name: &'static str,
    pub display_name: &'static str,
    pub mime: &'static str,
    /// File extensions, without the leading dot.
    pub extensions: &'static [&'static str],
    /// What the host inserts when toggling line comments.
    pub line_comment: &'static str,
}

/// The descriptor for this crate's tokenizer.
pub fn descriptor() -> ModeDescriptor {
    ModeDescriptor {
        name: "gf",
        display_name: "GF",
        mime: "text/gf",
        extensions: &["gf"],
        line_comment: crate::lexemes::LINE_COMMENT,
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateMode(String),
    ExtensionTaken { extension: String, owner: String },
    MimeTaken { mime: String, owner: String },
}

impl std::fmt::Display for RegistryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegistryError::DuplicateMode(name) => write!(f, "mode {name:?} is already registered"),
            RegistryError::ExtensionTaken { extension, owner } => {
                write!(f, "extension {extension:?} already belongs to mode {owner:?}")
            }
            RegistryError::MimeTaken { mime, owner } => {
                write!(f, "MIME type {mime:?} already belongs to mode {owner:?}")
            }
        }
    }
}

impl std::error::Error for RegistryError {}

/// Known modes, looked up by name, extension or MIME type.
#[derive(Debug, Default)]
pub struct Registry {
    modes: Vec<ModeDescriptor>,
}

impl Registry {
    pub fn new() -> Self {
        Registry::default()
    }

    /// Add a mode. A mode may not claim a name, extension or MIME type that
    /// another registered mode already owns.
    pub fn register(&mut self, mode: ModeDescriptor) -> Result<(), RegistryError> {
        if self.by_name(mode.name).is_some() {
            return Err(RegistryError::DuplicateMode(mode.name.to_owned()));
        }
        if let Some(owner) = self.by_mime(mode.mime) {
            return Err(RegistryError::MimeTaken {
                mime: mode.mime.to_owned(),
                owner: owner.name.to_owned(),
            });
        }
        for extension in mode.extensions {
            if let Some(owner) = self.by_extension(extension) {
                return Err(RegistryError::ExtensionTaken {
                    extension: (*extension).to_owned(),
                    owner: owner.name.to_owned(),
                });
            }
        }
        tracing::debug!(name = mode.name, mime = mode.mime, "registered mode");
        self.modes.push(mode);
        Ok(())
    }

    pub fn by_name(&self, name: &str) -> Option<&ModeDescriptor> {
        self.modes.iter().find(|mode| mode.name == name)
    }

    pub fn by_mime(&self, mime: &str) -> Option<&ModeDescriptor> {
        self.modes
            .iter()
            .find(|mode| mode.mime.eq_ignore_ascii_case(mime))
    }

    /// Look up by extension; case-insensitive, with or without the leading dot.
    pub fn by_extension(&self, extension: &str) -> Option<&ModeDescriptor> {
        let extension = extension.strip_prefix('.').unwrap_or(extension);
        self.modes.iter().find(|mode| {
            mode.extensions
                .iter()
                .any(|ext| ext.eq_ignore_ascii_case(extension))
        })
    }

    /// Look up by the extension of a file path.
    pub fn for_path(&self, path: impl AsRef<Path>) -> Option<&ModeDescriptor> {
        let extension = path.as_ref().extension()?.to_str()?;
        self.by_extension(extension)
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModeDescriptor> {
        self.modes.iter()
    }
}
