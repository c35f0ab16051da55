pub mod document;
pub mod observer;
pub mod room;
pub mod summary;

pub use document::Document;
pub use observer::{NoopObserver, RoomObserver};
pub use room::{
    CompletionChange, CompletionFlag, RoomField, RoomRecord, RoomRow, NOT_COMPLETED,
    TIMESTAMP_FORMAT,
};
pub use summary::DocumentSummary;
