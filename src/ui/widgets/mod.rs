pub mod charts;
pub mod face;
pub mod input;
pub mod snippets;

pub use charts::ChartsPanel;
pub use face::FacePanel;
pub use input::PromptPanel;
pub use snippets::SnippetsPanel;
