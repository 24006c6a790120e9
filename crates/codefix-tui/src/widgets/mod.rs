//! Custom widgets for the TUI

pub mod code_block;
pub mod editor_panel;
pub mod file_prompt;
pub mod header;
pub mod how_it_works;
pub mod modal_overlay;
pub mod result_card;
pub mod status_bar;
pub mod terminal_output;

pub use code_block::CodeBlock;
pub use editor_panel::EditorPanel;
pub use file_prompt::FilePrompt;
pub use header::MainHeader;
pub use how_it_works::HowItWorksModal;
pub use result_card::ResultCard;
pub use status_bar::StatusBar;
pub use terminal_output::TerminalOutput;
