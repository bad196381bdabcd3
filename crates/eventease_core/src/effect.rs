use crate::SelectedFile;

/// Side effects requested by [`crate::update`]; executed by the platform layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Ask the assistant service to answer `query`.
    SendChat { query: String },
    /// Upload and index `file`, replacing an existing copy when `override_existing` is set.
    UploadDocument {
        file: SelectedFile,
        override_existing: bool,
    },
}
