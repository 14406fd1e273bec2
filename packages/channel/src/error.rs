use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChannelError {
    #[error("Channel already registered: {0}")]
    DuplicateChannel(String),

    #[error("No handler registered for channel: {0}")]
    UnknownChannel(String),

    #[error("Invalid plugin descriptor: {0}")]
    Descriptor(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A fault inside a handler. Distinct from `MethodReply::NotImplemented`,
    /// which is a normal reply and never surfaces here.
    #[error(transparent)]
    Handler(#[from] anyhow::Error),
}
